use crate::format::GPUFormat;
use crate::header::Header;

/// Dimension of the next mip level down: ceil(d / 2), never below 1.
pub fn next_mip_dim(d: u16) -> u16 {
  d.div_ceil(2).max(1)
}

/// Highest legal mip count for a base resolution: ceil(log2(largest
/// dimension)). Exact powers of two land one below the conventional
/// full-chain count; the header validator applies this bound as is.
pub fn max_mip_count(width: u16, height: u16, length: u16) -> u8 {
  let largest = width.max(height).max(length) as u32;
  if largest <= 1 {
    return 0;
  }
  (32 - (largest - 1).leading_zeros()) as u8
}

/// Byte size of a single mip level across `layers` layers.
///
/// Saturates instead of wrapping so that an adversarial header produces a
/// span that can never pass a bounds probe.
pub fn mip_size_bytes(format: GPUFormat, width: u16, height: u16, length: u16, layers: u16) -> u64 {
  (format.size_bytes() as u64)
    .saturating_mul(width as u64)
    .saturating_mul(height as u64)
    .saturating_mul(length as u64)
    .saturating_mul(layers as u64)
}

/// Total byte span one declared format occupies: every mip of every layer.
pub fn format_data_size(format: GPUFormat, header: &Header) -> u64 {
  let mut width = header.width;
  let mut height = header.height;
  let mut length = header.length;
  let mut size = 0u64;

  for _ in 0 .. header.mips {
    size = size.saturating_add(mip_size_bytes(format, width, height, length, header.layers));
    width = next_mip_dim(width);
    height = next_mip_dim(height);
    length = next_mip_dim(length);
  }

  size
}
