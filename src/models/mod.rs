pub mod route;
pub mod device;
pub mod action;
pub mod menu;

pub use route::{LatLng, RoutePoint, RouteDay};
pub use device::DeviceIdentity;
pub use action::DeviceAction;
pub use menu::{MenuItem, MenuCommand, MENU_ITEMS};
