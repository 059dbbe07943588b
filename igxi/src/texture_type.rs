/// Texture type byte.
///
/// - `bits & 0x03` = dimension (cube, 1D, 2D, 3D)
/// - `bits & 0x04` = multisampled
/// - `bits & 0x08` = array
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(transparent)]
pub struct TextureType(pub u8);

/// The two-bit dimension component of a [`TextureType`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TextureDimension {
  Cube,
  D1,
  D2,
  D3
}

impl TextureType {
  pub const TEXTURE_CUBE: TextureType = TextureType(0x0);
  pub const TEXTURE_1D: TextureType = TextureType(0x1);
  pub const TEXTURE_2D: TextureType = TextureType(0x2);
  pub const TEXTURE_3D: TextureType = TextureType(0x3);
  pub const TEXTURE_MS: TextureType = TextureType(0x6);

  pub const TEXTURE_CUBE_ARRAY: TextureType = TextureType(0x8);
  pub const TEXTURE_1D_ARRAY: TextureType = TextureType(0x9);
  pub const TEXTURE_2D_ARRAY: TextureType = TextureType(0xA);
  // TODO: as declared this clears the dimension bits that TEXTURE_MS
  // carries; resolve how multisampled arrays encode before relying on it.
  pub const TEXTURE_MS_ARRAY: TextureType = TextureType(0xC);

  const DIMENSION_MASK: u8 = 0x3;
  const MS_BIT: u8 = 0x4;
  const ARRAY_BIT: u8 = 0x8;

  pub const fn bits(self) -> u8 {
    self.0
  }

  pub fn dimension(self) -> TextureDimension {
    match self.0 & Self::DIMENSION_MASK {
      0 => TextureDimension::Cube,
      1 => TextureDimension::D1,
      2 => TextureDimension::D2,
      _ => TextureDimension::D3
    }
  }

  pub const fn is_multisampled(self) -> bool {
    self.0 & Self::MS_BIT != 0
  }

  pub const fn is_array(self) -> bool {
    self.0 & Self::ARRAY_BIT != 0
  }

  /// After stripping the array bit, the dimension-plus-multisample
  /// component must be a plain dimension (0..=3) or the multisampled 2D
  /// encoding (6).
  pub const fn is_valid(self) -> bool {
    let base = self.0 & !Self::ARRAY_BIT;
    base <= 0x3 || base == 0x6
  }
}
