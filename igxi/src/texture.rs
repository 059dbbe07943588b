use std::path::Path;

use io_util::{FileRegion, MemoryRegion, RegionRead};
use log::{trace, warn};

use crate::error::LoadError;
use crate::format::GPUFormat;
use crate::format_table::{read_format_table, FormatEntry};
use crate::header::{Flags, Header, MAGIC};
use crate::input::InputParams;
use crate::mip::{mip_size_bytes, next_mip_dim};
use crate::selection::{resolve, Selection};

/// A decoded IGXI asset.
///
/// `data` is indexed `[selected format][selected mip]`; each buffer holds
/// every selected layer of that mip contiguously, in selection order.
/// Mip indices are relative to the selected window: slot `k` holds source
/// mip `start_mip + k` at the dimensions recorded in `header`.
///
/// A load populates the structure once; for a save the caller constructs
/// it and the shape is validated against `header` before anything is
/// written.
pub struct IgxiTexture {
  pub header: Header,
  pub formats: Vec<GPUFormat>,
  pub data: Vec<Vec<Box<[u8]>>>
}

impl IgxiTexture {
  /// Cheap probe: does the store start with the IGXI magic?
  pub fn check_magic<R: RegionRead>(store: &mut R) -> bool {
    let mut raw = [0u8; 4];
    let mut cursor = 0u64;
    store.read_region(&mut raw, &mut cursor).is_ok() && u32::from_le_bytes(raw) == MAGIC
  }

  /// Loads the subset described by `input` from a region store.
  pub fn load<R: RegionRead>(store: &mut R, input: &InputParams) -> Result<Self, LoadError> {
    let mut cursor = 0u64;

    let source = Header::read(store, &mut cursor)?;
    if let Err(e) = source.validate() {
      warn!("Rejecting IGXI container with invalid header");
      return Err(e);
    }

    let table = read_format_table(store, &mut cursor, &source)?;
    let Selection { header, entries } = resolve(&source, &table, input)?;
    let formats: Vec<GPUFormat> = entries.iter().map(|entry| entry.format).collect();

    if !source.flags.contains(Flags::CONTAINS_DATA) || !input.load_data {
      return Ok(Self {
        header,
        formats,
        data: Vec::new()
      });
    }

    let data = read_pixel_data(store, &source, &header, &entries, input)?;
    trace!(
      "Loaded IGXI asset: {} format(s), {} mip(s), {} layer(s)",
      header.formats,
      header.mips,
      header.layers
    );
    Ok(Self {
      header,
      formats,
      data
    })
  }

  /// Loads from an in-memory byte buffer.
  pub fn load_bytes(buf: &[u8], input: &InputParams) -> Result<Self, LoadError> {
    let mut store = MemoryRegion::new(buf);
    Self::load(&mut store, input)
  }

  /// Loads from a file. An open failure is the only fault translated
  /// into an error code at this boundary.
  pub fn load_file<P: AsRef<Path>>(path: P, input: &InputParams) -> Result<Self, LoadError> {
    let mut store = FileRegion::open(path).map_err(|_| LoadError::InvalidFile)?;
    Self::load(&mut store, input)
  }
}

/// Streams the selected mips and layers of every selected format.
///
/// `base` tracks the start of the current source mip inside one format's
/// data section and always advances by the full source layer span, read
/// or not; the actual reads fork their own cursors so that explicit layer
/// lists may revisit or reorder layers freely.
fn read_pixel_data<R: RegionRead>(
  store: &mut R,
  source: &Header,
  out_header: &Header,
  entries: &[FormatEntry],
  input: &InputParams
) -> Result<Vec<Vec<Box<[u8]>>>, LoadError> {
  let end_mip = input.start_mip + out_header.mips;
  let mut data = Vec::<Vec<Box<[u8]>>>::with_capacity(entries.len());

  for entry in entries {
    let mut mips = Vec::<Box<[u8]>>::with_capacity(out_header.mips as usize);
    let mut base = entry.offset;
    let mut width = source.width;
    let mut height = source.height;
    let mut length = source.length;

    for level in 0 .. source.mips {
      let per_layer = mip_size_bytes(entry.format, width, height, length, 1);

      if level >= input.start_mip && level < end_mip {
        let mut buffer = vec![0u8; (per_layer * out_header.layers as u64) as usize];

        if input.layers.is_empty() {
          let mut src = base + per_layer * input.start_layer as u64;
          if store.read_region(&mut buffer, &mut src).is_err() {
            return Err(LoadError::InvalidSize);
          }
        } else {
          for (slot, &layer) in input.layers.iter().enumerate() {
            let mut src = base + per_layer * (layer as u64 + input.start_layer as u64);
            let dst = slot * per_layer as usize;
            if store
              .read_region(&mut buffer[dst .. dst + per_layer as usize], &mut src)
              .is_err() {
              return Err(LoadError::InvalidSize);
            }
          }
        }

        mips.push(buffer.into_boxed_slice());
      }

      base += per_layer * source.layers as u64;
      width = next_mip_dim(width);
      height = next_mip_dim(height);
      length = next_mip_dim(length);
    }

    data.push(mips);
  }

  Ok(data)
}
