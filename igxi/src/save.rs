use std::path::Path;

use io_util::{FileRegion, MemoryRegionMut, RegionWrite};
use log::trace;

use crate::error::SaveError;
use crate::header::{Flags, Header};
use crate::mip::{mip_size_bytes, next_mip_dim};
use crate::texture::IgxiTexture;

impl IgxiTexture {
  /// Serializes the asset. Every shape check runs before the store is
  /// touched, so a validation failure leaves it unchanged; a failure
  /// after the resize is reported as `NoSpace`/`FileAccess` and leaves
  /// the store length undefined.
  pub fn save<W: RegionWrite>(&self, store: &mut W) -> Result<(), SaveError> {
    self.validate_shape()?;

    let has_data = self.header.flags.contains(Flags::CONTAINS_DATA);
    let total = self.total_size(has_data);
    if store.resize(total).is_err() {
      return Err(SaveError::NoSpace);
    }

    let mut cursor = 0u64;
    if store.write_region(&self.header.to_bytes(), &mut cursor).is_err() {
      return Err(SaveError::FileAccess);
    }
    for format in &self.formats {
      if store.write_region(&format.bits().to_le_bytes(), &mut cursor).is_err() {
        return Err(SaveError::FileAccess);
      }
    }
    if has_data {
      for mips in &self.data {
        for buffer in mips {
          if store.write_region(buffer, &mut cursor).is_err() {
            return Err(SaveError::FileAccess);
          }
        }
      }
    }

    trace!("Saved IGXI asset: {} byte(s)", total);
    Ok(())
  }

  /// Serializes into a fresh byte buffer.
  pub fn save_bytes(&self) -> Result<Vec<u8>, SaveError> {
    let mut buf = Vec::<u8>::new();
    let mut store = MemoryRegionMut::new(&mut buf);
    self.save(&mut store)?;
    Ok(buf)
  }

  /// Serializes into a file. A create failure is the only fault
  /// translated into an error code at this boundary.
  pub fn save_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SaveError> {
    let mut store = FileRegion::create(path).map_err(|_| SaveError::InvalidFile)?;
    self.save(&mut store)
  }

  /// The header must hold on its own and the format list and pixel
  /// buffers must match the geometry it declares.
  fn validate_shape(&self) -> Result<(), SaveError> {
    if self.header.validate().is_err() {
      return Err(SaveError::InvalidHeader);
    }
    if self.header.formats as usize != self.formats.len() {
      return Err(SaveError::InvalidFormats);
    }
    if !self.header.flags.contains(Flags::CONTAINS_DATA) {
      return Ok(());
    }

    if self.data.len() != self.formats.len() {
      return Err(SaveError::InvalidFormats);
    }
    for (format, mips) in self.formats.iter().zip(&self.data) {
      if mips.len() != self.header.mips as usize {
        return Err(SaveError::InvalidMips);
      }

      let mut width = self.header.width;
      let mut height = self.header.height;
      let mut length = self.header.length;
      for buffer in mips {
        let expected = mip_size_bytes(*format, width, height, length, self.header.layers);
        if buffer.len() as u64 != expected {
          return Err(SaveError::InvalidDataSize);
        }
        width = next_mip_dim(width);
        height = next_mip_dim(height);
        length = next_mip_dim(length);
      }
    }

    Ok(())
  }

  fn total_size(&self, has_data: bool) -> u64 {
    let mut size = Header::SIZE as u64 + self.formats.len() as u64 * 2;
    if has_data {
      for mips in &self.data {
        for buffer in mips {
          size += buffer.len() as u64;
        }
      }
    }
    size
  }
}
