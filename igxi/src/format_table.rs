use io_util::RegionRead;

use crate::error::LoadError;
use crate::format::GPUFormat;
use crate::header::Header;
use crate::mip::format_data_size;

/// One declared format and the byte offset where its data section begins.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FormatEntry {
  pub offset: u64,
  pub format: GPUFormat
}

/// Reads the format code array that follows the header and assigns each
/// declared format its data offset by accumulating spans in declaration
/// order.
///
/// Declaration order is semantic: format selection picks "the first
/// match" in the order the codes appear on disk. Every span is probed
/// against the store, so a truncated container fails here and never
/// reaches the pixel-data stage.
pub fn read_format_table<R: RegionRead>(
  store: &mut R,
  cursor: &mut u64,
  header: &Header
) -> Result<Vec<FormatEntry>, LoadError> {
  let mut codes = vec![0u8; header.formats as usize * 2];
  if store.read_region(&mut codes, cursor).is_err() {
    return Err(LoadError::InvalidSize);
  }

  let mut entries = Vec::<FormatEntry>::with_capacity(header.formats as usize);
  for raw in codes.chunks_exact(2) {
    let format = GPUFormat(u16::from_le_bytes([raw[0], raw[1]]));
    let offset = *cursor;
    if store.check_region(cursor, format_data_size(format, header)).is_err() {
      return Err(LoadError::InvalidSize);
    }
    entries.push(FormatEntry {
      offset,
      format
    });
  }

  Ok(entries)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::header::{Flags, GPUMemoryUsage, MAGIC, SIGNATURE, VERSION_1};
  use crate::texture_type::TextureType;
  use io_util::MemoryRegion;

  fn header(formats: u8) -> Header {
    Header {
      magic: MAGIC,
      version: VERSION_1,
      width: 2,
      height: 3,
      length: 1,
      layers: 1,
      flags: Flags::CONTAINS_DATA,
      usage: GPUMemoryUsage::empty(),
      texture_type: TextureType::TEXTURE_2D,
      mips: 1,
      signature: SIGNATURE,
      formats
    }
  }

  fn container(formats: &[GPUFormat], data_len: usize) -> Vec<u8> {
    let mut buf = header(formats.len() as u8).to_bytes().to_vec();
    for format in formats {
      buf.extend_from_slice(&format.bits().to_le_bytes());
    }
    buf.extend(std::iter::repeat(0u8).take(data_len));
    buf
  }

  #[test]
  fn entries_keep_declaration_order_and_accumulate_offsets() {
    // 2x3 single mip: RGBA8 spans 24 bytes, R8 spans 6
    let buf = container(&[GPUFormat::RGBA8, GPUFormat::R8], 24 + 6);
    let mut store = MemoryRegion::new(&buf);
    let mut cursor = Header::SIZE as u64;
    let entries = read_format_table(&mut store, &mut cursor, &header(2)).unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].format, GPUFormat::RGBA8);
    assert_eq!(entries[0].offset, Header::SIZE as u64 + 4);
    assert_eq!(entries[1].format, GPUFormat::R8);
    assert_eq!(entries[1].offset, Header::SIZE as u64 + 4 + 24);
    assert_eq!(cursor, buf.len() as u64);
  }

  #[test]
  fn truncated_code_array_is_invalid_size() {
    let buf = header(2).to_bytes().to_vec();
    let mut store = MemoryRegion::new(&buf);
    let mut cursor = Header::SIZE as u64;
    assert_eq!(
      read_format_table(&mut store, &mut cursor, &header(2)),
      Err(LoadError::InvalidSize)
    );
  }

  #[test]
  fn missing_pixel_bytes_are_invalid_size() {
    // one byte short of the declared 24 + 6
    let buf = container(&[GPUFormat::RGBA8, GPUFormat::R8], 24 + 5);
    let mut store = MemoryRegion::new(&buf);
    let mut cursor = Header::SIZE as u64;
    assert_eq!(
      read_format_table(&mut store, &mut cursor, &header(2)),
      Err(LoadError::InvalidSize)
    );
  }
}
