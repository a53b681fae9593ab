// Utils compartidos

pub mod constants;
pub mod flags;
pub mod format;
pub mod leaflet_ffi;

pub use constants::*;
pub use flags::*;
pub use format::*;
pub use leaflet_ffi::*;
