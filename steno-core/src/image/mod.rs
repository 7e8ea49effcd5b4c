//! Binary layout images
//!
//! Little-endian layout:
//!
//! ```text
//! magic "STNK" | major u8 | minor u8 | locale u8 | rows u8 | cols u8 | table_count u8
//! table_count x (family tag u8 | entry_count u16 | entry_count x 5 bytes)
//! 2 layers x rows x cols x u32 packed cells
//! special shift count u8 | count x u16 quantum keycodes
//! ```

pub mod error;
pub mod loader;

pub use error::{ImageError, Result};
pub use loader::ImageLoader;

pub const MAGIC: &[u8; 4] = b"STNK";
pub const MAJOR_VERSION: u8 = 1;
pub const MINOR_VERSION: u8 = 0;
/// Size of the fixed header
pub const HEADER_SIZE: usize = 10;
