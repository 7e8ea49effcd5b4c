use log::{debug, trace};
use crate::error::Result;
use crate::image::ImageLoader;
use crate::tables::{Layout, Locale};
use crate::types::ModdedKey;
use super::classifier::{classify, Classified};
use super::config::EngineConfig;
use super::host::HostOutput;
use super::input::KeyEvent;
use super::modifier::{resolve_plain, resolve_special_shift};
use super::resolver::resolve;
use super::state::ChordState;

/// The steno engine: one per keyboard
pub struct StenoEngine {
    /// Tables the engine runs from
    layout: Layout,
    /// Chord in progress
    state: ChordState,
    config: EngineConfig,
}

impl Default for StenoEngine {
    fn default() -> Self {
        Self::new(Layout::default())
    }
}

impl StenoEngine {
    /// Create an engine with the default configuration
    pub fn new(layout: Layout) -> Self {
        Self::with_config(layout, EngineConfig::default())
    }

    pub fn with_config(layout: Layout, config: EngineConfig) -> Self {
        Self {
            layout,
            state: ChordState::new(),
            config,
        }
    }

    /// Engine running the built-in layout for a host locale
    pub fn builtin(locale: Locale) -> Self {
        Self::new(Layout::builtin(locale).clone())
    }

    /// Engine running a layout loaded from image bytes
    pub fn from_image(data: &[u8]) -> Result<Self> {
        Ok(Self::new(ImageLoader::load(data)?))
    }

    /// Load a layout image, replacing the current tables
    pub fn load_image(&mut self, data: &[u8]) -> Result<()> {
        let layout = ImageLoader::load(data)?;
        debug!("loaded {} layout image ({} bytes)", layout.locale(), data.len());
        self.set_layout(layout);
        Ok(())
    }

    /// Process one key transition
    ///
    /// Steno keys feed the chord; the release that leaves no steno key held
    /// emits the stroke. Plain keys are sent straight away. Unassigned
    /// positions are ignored.
    pub fn process_event<H: HostOutput>(&mut self, event: KeyEvent, host: &mut H) {
        match classify(&self.layout, event.pos) {
            Classified::Steno(key) => {
                trace!("steno {} {}", key, if event.pressed { "down" } else { "up" });
                if event.pressed {
                    self.state.press(key);
                } else if let Some(stroke) = self.state.release(key) {
                    resolve(&stroke, &self.layout, self.config.case_shift, host);
                }
            }
            Classified::Plain { base, shifted } => {
                let case_held = self.state.case_control_held();
                resolve_plain(base, shifted, case_held, event.pressed, host);
            }
            Classified::Unassigned => {
                trace!("unassigned position {}", event.pos);
            }
        }
    }

    /// Process a key whose shifted-layer action is a special shift symbol
    ///
    /// `key` is the symbol the position types on the plain layer.
    pub fn process_special_shift<H: HostOutput>(&mut self, key: ModdedKey, pressed: bool, host: &mut H) {
        resolve_special_shift(self.layout.special_shift(), key, pressed, host);
    }

    /// True while any steno key is held, for indicator refresh
    pub fn is_chord_in_progress(&self) -> bool {
        self.state.is_chord_in_progress()
    }

    pub fn state(&self) -> &ChordState {
        &self.state
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Replace the tables, dropping any chord in progress
    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
        self.state.reset();
    }

    /// Drop any chord in progress
    pub fn reset(&mut self) {
        self.state.reset();
    }
}
