use crate::format::GPUFormat;

/// Selection request for a load. Zero counts mean "everything from the
/// start index onward".
#[derive(Clone, Debug)]
pub struct InputParams {
  /// Acceptable format codes. Empty accepts any declared format.
  pub supported_formats: Vec<GPUFormat>,
  /// Materialize every acceptable declared format instead of only the
  /// first match.
  pub load_multiple_formats: bool,
  /// First mip level to materialize.
  pub start_mip: u8,
  /// Number of mip levels; 0 loads the rest of the chain.
  pub mip_count: u8,
  /// First layer to materialize.
  pub start_layer: u16,
  /// Number of layers; 0 loads the rest.
  pub layer_count: u16,
  /// Explicit layer indices relative to `start_layer`, in output order.
  /// Duplicates are allowed. A non-empty list overrides the contiguous
  /// range as the output layer selection.
  pub layers: Vec<u16>,
  /// Read pixel data. When false only the header and format list are
  /// resolved.
  pub load_data: bool
}

impl Default for InputParams {
  fn default() -> Self {
    Self {
      supported_formats: Vec::new(),
      load_multiple_formats: false,
      start_mip: 0,
      mip_count: 0,
      start_layer: 0,
      layer_count: 0,
      layers: Vec::new(),
      load_data: true
    }
  }
}

impl InputParams {
  pub fn new(load_data: bool) -> Self {
    Self {
      load_data,
      ..Self::default()
    }
  }

  /// Loads specific layers by index; the list order becomes the output
  /// layer order.
  pub fn with_layer_list(
    supported_formats: Vec<GPUFormat>,
    load_multiple_formats: bool,
    start_mip: u8,
    layers: Vec<u16>,
    mip_count: u8
  ) -> Self {
    Self {
      supported_formats,
      load_multiple_formats,
      start_mip,
      mip_count,
      layers,
      ..Self::default()
    }
  }

  /// Loads a contiguous layer range.
  pub fn with_layer_range(
    supported_formats: Vec<GPUFormat>,
    load_multiple_formats: bool,
    start_mip: u8,
    start_layer: u16,
    layer_count: u16,
    mip_count: u8
  ) -> Self {
    Self {
      supported_formats,
      load_multiple_formats,
      start_mip,
      mip_count,
      start_layer,
      layer_count,
      ..Self::default()
    }
  }
}
