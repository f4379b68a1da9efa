pub mod route_viewmodel;
pub mod map_viewmodel;

pub use route_viewmodel::{MapCamera, RouteAction, RouteSelection};
pub use map_viewmodel::{MapViewModel, RouteLayer, RouteMarker};
