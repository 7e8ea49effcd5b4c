//! Error types for the steno engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Layout image error: {0}")]
    Image(#[from] crate::image::ImageError),

    #[error("Chord table error: {0}")]
    Chords(#[from] crate::types::errors::ChordsError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
