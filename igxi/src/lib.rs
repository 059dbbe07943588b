mod error;
mod format;
mod format_table;
mod header;
mod input;
mod mip;
mod save;
mod selection;
mod texture;
mod texture_type;

pub use self::error::{LoadError, SaveError};
pub use self::format::{GPUFormat, GPUFormatType};
pub use self::header::{Flags, GPUMemoryUsage, Header, MAGIC, SIGNATURE, VERSION_1};
pub use self::input::InputParams;
pub use self::texture::IgxiTexture;
pub use self::texture_type::{TextureDimension, TextureType};
