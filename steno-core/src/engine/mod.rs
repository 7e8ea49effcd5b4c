//! Steno Engine - chord accumulation and text emission
//!
//! Key events are classified against the layout's keymap. Steno keys are
//! accumulated into a chord which is resolved through the encoding tables
//! once every steno key is released; ordinary keys are sent immediately.

mod engine;
mod input;
mod config;
mod state;
mod classifier;
mod resolver;
mod modifier;
mod host;

pub use engine::StenoEngine;
pub use input::KeyEvent;
pub use config::EngineConfig;
pub use state::{CaseMode, ChordState, Stroke};
pub use classifier::{classify, Classified};
pub use resolver::{preview, resolve};
pub use modifier::{resolve_plain, resolve_special_shift};
pub use host::{HostEvent, HostOutput, Recorder};
