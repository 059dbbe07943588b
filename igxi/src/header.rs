use bitflags::bitflags;
use io_util::RegionRead;

use crate::error::LoadError;
use crate::mip::max_mip_count;
use crate::texture_type::TextureType;

/// "IGXI", little-endian.
pub const MAGIC: u32 = 0x49584749;
pub const VERSION_1: u32 = 1;
pub const SIGNATURE: [u8; 3] = [0x44, 0x55, 0x66];

bitflags! {
  /// Header flag byte. Currently only records whether pixel data follows
  /// the format table.
  #[derive(Clone, Copy, PartialEq, Eq, Debug)]
  pub struct Flags: u8 {
    const CONTAINS_DATA = 1;
  }
}

bitflags! {
  /// Hint describing how the GPU memory backing this texture should
  /// behave.
  #[derive(Clone, Copy, PartialEq, Eq, Debug)]
  pub struct GPUMemoryUsage: u8 {
    /// CPU accessible; device local when unset.
    const SHARED = 0x1;
    /// The heap is a preference, not a requirement.
    const PREFER = 0x2;
    /// The GPU may write to the resource.
    const GPU_WRITE = 0x4;
    /// The CPU may update the resource after initialization.
    const CPU_WRITE = 0x8;
  }
}

/// The fixed 24-byte record at the start of every IGXI asset.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Header {
  /// File magic ("IGXI" as a little-endian integer).
  pub magic: u32,
  /// Format version, currently 1.
  pub version: u32,
  /// Width of the base mip in pixels.
  pub width: u16,
  /// Height of the base mip in pixels.
  pub height: u16,
  /// Depth of a 3D texture, length otherwise. 1 for plain 2D textures.
  pub length: u16,
  /// Array layer (or cube face) count.
  pub layers: u16,
  pub flags: Flags,
  pub usage: GPUMemoryUsage,
  pub texture_type: TextureType,
  /// Stored mip level count (bounded by the base resolution).
  pub mips: u8,
  /// Constant signature bytes following the counts.
  pub signature: [u8; 3],
  /// Number of stored pixel formats (>0).
  pub formats: u8
}

impl Header {
  pub const SIZE: usize = 24;

  /// Reads the fixed record. Undefined flag or usage bits are kept as
  /// read; `validate` rejects them.
  pub fn read<R: RegionRead>(store: &mut R, cursor: &mut u64) -> Result<Self, LoadError> {
    let mut raw = [0u8; Self::SIZE];
    if store.read_region(&mut raw, cursor).is_err() {
      return Err(LoadError::InvalidSize);
    }

    Ok(Self {
      magic: u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]),
      version: u32::from_le_bytes([raw[4], raw[5], raw[6], raw[7]]),
      width: u16::from_le_bytes([raw[8], raw[9]]),
      height: u16::from_le_bytes([raw[10], raw[11]]),
      length: u16::from_le_bytes([raw[12], raw[13]]),
      layers: u16::from_le_bytes([raw[14], raw[15]]),
      flags: Flags::from_bits_retain(raw[16]),
      usage: GPUMemoryUsage::from_bits_retain(raw[17]),
      texture_type: TextureType(raw[18]),
      mips: raw[19],
      signature: [raw[20], raw[21], raw[22]],
      formats: raw[23]
    })
  }

  /// Checks every structural invariant in one pass, stopping at the
  /// first failure.
  pub fn validate(&self) -> Result<(), LoadError> {
    if self.magic != MAGIC
      || self.version != VERSION_1
      || Flags::from_bits(self.flags.bits()).is_none()
      || self.signature != SIGNATURE
      || self.formats == 0
      || self.width == 0
      || self.height == 0
      || self.length == 0
      || self.layers == 0
      || self.mips == 0
      || GPUMemoryUsage::from_bits(self.usage.bits()).is_none()
      || self.mips > max_mip_count(self.width, self.height, self.length) {
      return Err(LoadError::InvalidHeader);
    }

    if !self.texture_type.is_valid() {
      return Err(LoadError::InvalidHeader);
    }

    Ok(())
  }

  /// The exact inverse of `read`.
  pub fn to_bytes(&self) -> [u8; Self::SIZE] {
    let mut raw = [0u8; Self::SIZE];
    raw[0 .. 4].copy_from_slice(&self.magic.to_le_bytes());
    raw[4 .. 8].copy_from_slice(&self.version.to_le_bytes());
    raw[8 .. 10].copy_from_slice(&self.width.to_le_bytes());
    raw[10 .. 12].copy_from_slice(&self.height.to_le_bytes());
    raw[12 .. 14].copy_from_slice(&self.length.to_le_bytes());
    raw[14 .. 16].copy_from_slice(&self.layers.to_le_bytes());
    raw[16] = self.flags.bits();
    raw[17] = self.usage.bits();
    raw[18] = self.texture_type.bits();
    raw[19] = self.mips;
    raw[20 .. 23].copy_from_slice(&self.signature);
    raw[23] = self.formats;
    raw
  }
}
