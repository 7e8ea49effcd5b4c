//! C API for keyboard firmware
//!
//! The firmware owns the key matrix scan and the HID report. It hands each
//! key transition to `steno_engine_process_event` together with a table of
//! callbacks the engine reports keys and modifiers through.

use crate::engine::HostOutput;
use crate::image::ImageLoader;
use crate::tables::{Layout, Locale, MatrixPos};
use crate::types::{KeyCode, ModdedKey, Mods};
use crate::{KeyEvent, StenoEngine};
use std::ffi::c_void;
use std::os::raw::{c_char, c_int};
use std::sync::Mutex;

/// Opaque handle to a steno engine instance
pub struct EngineHandle {
    engine: Mutex<StenoEngine>,
}

/// Result codes for FFI functions
#[repr(C)]
#[derive(Debug, PartialEq)]
pub enum StenoResult {
    Success = 0,
    ErrorInvalidHandle = -1,
    ErrorInvalidParameter = -2,
    ErrorEngineFailure = -3,
    ErrorInvalidImage = -4,
}

/// Host output callbacks; `user_data` is passed back on every call
///
/// The callbacks run while the engine lock is held. They must not call back
/// into any `steno_engine_*` function on the same handle (for example
/// `steno_engine_is_chord_in_progress` from `set_mods`): the lock is not
/// reentrant and the calling thread would deadlock. Query the chord status
/// after `steno_engine_process_event` returns instead.
#[repr(C)]
pub struct StenoHostCallbacks {
    pub user_data: *mut c_void,
    pub press_code: Option<extern "C" fn(user_data: *mut c_void, code: u8)>,
    pub release_code: Option<extern "C" fn(user_data: *mut c_void, code: u8)>,
    pub get_mods: Option<extern "C" fn(user_data: *mut c_void) -> u8>,
    pub set_mods: Option<extern "C" fn(user_data: *mut c_void, mods: u8)>,
}

impl StenoHostCallbacks {
    fn is_complete(&self) -> bool {
        self.press_code.is_some()
            && self.release_code.is_some()
            && self.get_mods.is_some()
            && self.set_mods.is_some()
    }
}

impl HostOutput for StenoHostCallbacks {
    fn press_code(&mut self, code: KeyCode) {
        if let Some(f) = self.press_code {
            f(self.user_data, code.raw());
        }
    }

    fn release_code(&mut self, code: KeyCode) {
        if let Some(f) = self.release_code {
            f(self.user_data, code.raw());
        }
    }

    fn mods(&self) -> Mods {
        self.get_mods.map(|f| Mods(f(self.user_data))).unwrap_or_default()
    }

    fn set_mods(&mut self, mods: Mods) {
        if let Some(f) = self.set_mods {
            f(self.user_data, mods.raw());
        }
    }
}

/// Creates an engine on the built-in tables (locale 0 = QWERTY, 1 = AZERTY)
///
/// Returns null for an unknown locale.
#[no_mangle]
pub extern "C" fn steno_engine_new(locale: u8) -> *mut EngineHandle {
    let Some(locale) = Locale::from_tag(locale) else {
        return std::ptr::null_mut();
    };
    let handle = Box::new(EngineHandle {
        engine: Mutex::new(StenoEngine::builtin(locale)),
    });
    Box::into_raw(handle)
}

/// Frees an engine instance
#[no_mangle]
pub extern "C" fn steno_engine_free(handle: *mut EngineHandle) {
    if !handle.is_null() {
        unsafe {
            let _ = Box::from_raw(handle);
        }
    }
}

/// Replaces the engine tables with a layout image from memory
#[no_mangle]
pub extern "C" fn steno_engine_load_image(
    handle: *mut EngineHandle,
    data: *const u8,
    data_len: usize,
) -> StenoResult {
    if handle.is_null() {
        return StenoResult::ErrorInvalidHandle;
    }
    if data.is_null() || data_len == 0 {
        return StenoResult::ErrorInvalidParameter;
    }

    let handle = unsafe { &*handle };
    let data_slice = unsafe { std::slice::from_raw_parts(data, data_len) };

    let layout: Layout = match ImageLoader::load(data_slice) {
        Ok(layout) => layout,
        Err(_) => return StenoResult::ErrorInvalidImage,
    };

    match handle.engine.lock() {
        Ok(mut engine) => {
            engine.set_layout(layout);
            StenoResult::Success
        }
        Err(_) => StenoResult::ErrorEngineFailure,
    }
}

/// Processes one key transition at a matrix position
#[no_mangle]
pub extern "C" fn steno_engine_process_event(
    handle: *mut EngineHandle,
    row: u8,
    col: u8,
    pressed: c_int,
    callbacks: *mut StenoHostCallbacks,
) -> StenoResult {
    if handle.is_null() {
        return StenoResult::ErrorInvalidHandle;
    }
    if callbacks.is_null() {
        return StenoResult::ErrorInvalidParameter;
    }

    let handle = unsafe { &*handle };
    let host = unsafe { &mut *callbacks };
    if !host.is_complete() {
        return StenoResult::ErrorInvalidParameter;
    }

    let event = KeyEvent::new(MatrixPos::new(row, col), pressed != 0);
    match handle.engine.lock() {
        Ok(mut engine) => {
            engine.process_event(event, host);
            StenoResult::Success
        }
        Err(_) => StenoResult::ErrorEngineFailure,
    }
}

/// Sends the curated shifted variant of a symbol given as a quantum keycode
#[no_mangle]
pub extern "C" fn steno_engine_process_special_shift(
    handle: *mut EngineHandle,
    keycode: u16,
    pressed: c_int,
    callbacks: *mut StenoHostCallbacks,
) -> StenoResult {
    if handle.is_null() {
        return StenoResult::ErrorInvalidHandle;
    }
    if callbacks.is_null() {
        return StenoResult::ErrorInvalidParameter;
    }

    let handle = unsafe { &*handle };
    let host = unsafe { &mut *callbacks };
    if !host.is_complete() {
        return StenoResult::ErrorInvalidParameter;
    }

    match handle.engine.lock() {
        Ok(mut engine) => {
            engine.process_special_shift(ModdedKey::from_quantum(keycode), pressed != 0, host);
            StenoResult::Success
        }
        Err(_) => StenoResult::ErrorEngineFailure,
    }
}

/// Returns 1 while a chord is in progress, 0 otherwise (and for a null handle)
#[no_mangle]
pub extern "C" fn steno_engine_is_chord_in_progress(handle: *const EngineHandle) -> c_int {
    if handle.is_null() {
        return 0;
    }
    let handle = unsafe { &*handle };
    match handle.engine.lock() {
        Ok(engine) => engine.is_chord_in_progress() as c_int,
        Err(_) => 0,
    }
}

/// Drops any chord in progress
#[no_mangle]
pub extern "C" fn steno_engine_reset(handle: *mut EngineHandle) -> StenoResult {
    if handle.is_null() {
        return StenoResult::ErrorInvalidHandle;
    }

    let handle = unsafe { &*handle };
    match handle.engine.lock() {
        Ok(mut engine) => {
            engine.reset();
            StenoResult::Success
        }
        Err(_) => StenoResult::ErrorEngineFailure,
    }
}

/// Get library version
#[no_mangle]
pub extern "C" fn steno_get_version() -> *const c_char {
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const c_char
}
