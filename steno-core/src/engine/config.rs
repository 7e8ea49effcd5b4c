//! Engine configuration

use crate::types::Mods;

/// Tunables of a [`StenoEngine`](super::StenoEngine)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Modifier applied by the case-control keys
    pub case_shift: Mods,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_case_shift(mut self, mods: Mods) -> Self {
        self.case_shift = mods;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            case_shift: Mods::LSHIFT,
        }
    }
}
