/// Closed set of failures a load can report.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoadError {
  /// The header was read but one of its invariants does not hold
  /// (the store might not contain an IGXI asset at all).
  InvalidHeader,
  /// The fixed header, the format table or a declared data span does not
  /// fit inside the store.
  InvalidSize,
  /// The backing file could not be opened.
  InvalidFile,
  /// The container declares no format matching the request.
  NoAvailableFormats,
  /// The requested mip or layer range lies outside the container.
  InvalidRange,
}

/// Closed set of failures a save can report.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SaveError {
  /// The asset's header fails the same invariants a load enforces.
  InvalidHeader,
  /// The header's format count disagrees with the asset's format list
  /// or data collection.
  InvalidFormats,
  /// A format's mip buffer list does not cover the header's mip count.
  InvalidMips,
  /// A pixel buffer's length does not match its predicted mip size.
  InvalidDataSize,
  /// The store could not be resized to the required length.
  NoSpace,
  /// A write failed after the store was resized.
  FileAccess,
  /// The backing file could not be created.
  InvalidFile,
}
