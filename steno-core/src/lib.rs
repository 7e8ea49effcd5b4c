pub mod types;
pub mod error;
pub mod tables;
pub mod image;
pub mod engine;
pub mod ffi;

pub use types::*;

// Re-export commonly used types
pub use tables::{Layout, Locale, Keymap, KeymapLayer, MatrixPos, EncodingTable, SpecialShiftTable};
pub use types::errors::ChordsError;
pub use image::{ImageError, ImageLoader};
pub use error::{Error, Result};
pub use engine::{StenoEngine, KeyEvent, EngineConfig, HostOutput, HostEvent, Recorder};
