// Utils compartidos

pub mod constants;
pub mod storage;
pub mod i18n;
pub mod map_icons;
pub mod leaflet_ffi;

pub use constants::*;
pub use i18n::*;
