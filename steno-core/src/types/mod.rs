pub mod keycodes;
pub mod family;
pub mod chord_key;
pub mod errors;

pub use keycodes::*;
pub use family::*;
pub use chord_key::*;
pub use errors::*;
