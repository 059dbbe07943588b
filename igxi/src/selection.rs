use crate::error::LoadError;
use crate::format_table::FormatEntry;
use crate::header::Header;
use crate::input::InputParams;
use crate::mip::next_mip_dim;

/// The resolved subset of a container a load call will materialize.
pub struct Selection {
  /// Copy of the source header with mip and layer counts narrowed to the
  /// selection and spatial dimensions advanced to the starting mip.
  pub header: Header,
  /// Format table entries to materialize, in declaration order.
  pub entries: Vec<FormatEntry>
}

/// Maps a selection request onto the format table, producing the output
/// header and the entries to stream.
pub fn resolve(
  header: &Header,
  table: &[FormatEntry],
  input: &InputParams
) -> Result<Selection, LoadError> {
  if input.start_mip >= header.mips || input.start_layer >= header.layers {
    return Err(LoadError::InvalidRange);
  }

  let out_mips = if input.mip_count != 0 {
    input.mip_count
  } else {
    header.mips - input.start_mip
  };
  let out_layers = if input.layer_count != 0 {
    input.layer_count
  } else {
    header.layers - input.start_layer
  };

  if input.start_mip as u32 + out_mips as u32 > header.mips as u32
    || input.start_layer as u32 + out_layers as u32 > header.layers as u32 {
    return Err(LoadError::InvalidRange);
  }

  let mut out = *header;
  out.mips = out_mips;
  out.layers = out_layers;

  // An explicit index list is range-checked against the contiguous count
  // and then replaces it as the output layer count.
  if !input.layers.is_empty() {
    if input.layers.len() > u16::MAX as usize {
      return Err(LoadError::InvalidRange);
    }
    for &layer in &input.layers {
      if layer >= out_layers {
        return Err(LoadError::InvalidRange);
      }
    }
    out.layers = input.layers.len() as u16;
  }

  for _ in 0 .. input.start_mip {
    out.width = next_mip_dim(out.width);
    out.height = next_mip_dim(out.height);
    out.length = next_mip_dim(out.length);
  }

  let entries = select_formats(table, input)?;
  Ok(Selection {
    header: out,
    entries
  })
}

fn select_formats(table: &[FormatEntry], input: &InputParams) -> Result<Vec<FormatEntry>, LoadError> {
  if !input.load_multiple_formats {
    // First declared match wins. An empty acceptable list accepts the
    // first declared format outright.
    return table
      .iter()
      .find(|entry| {
        input.supported_formats.is_empty() || input.supported_formats.contains(&entry.format)
      })
      .map(|entry| vec![*entry])
      .ok_or(LoadError::NoAvailableFormats);
  }

  if !input.supported_formats.is_empty() {
    let entries: Vec<FormatEntry> = table
      .iter()
      .filter(|entry| input.supported_formats.contains(&entry.format))
      .copied()
      .collect();
    if entries.is_empty() {
      return Err(LoadError::NoAvailableFormats);
    }
    return Ok(entries);
  }

  Ok(table.to_vec())
}
