// Superficie de mapa: trait común + implementación Leaflet

pub mod traits;
pub mod web;

pub use traits::MapRenderer;
pub use web::LeafletRenderer;
