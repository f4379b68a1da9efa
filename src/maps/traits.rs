use std::rc::Rc;

use crate::viewmodels::{MapCamera, RouteLayer};

/// Callback de click en marcador; recibe el id del punto
pub type MarkerClickHandler = Rc<dyn Fn(u32)>;

/// Trait común para renderizadores de mapas
pub trait MapRenderer {
    /// Centrar el mapa
    fn set_view(&mut self, view: MapCamera) -> Result<(), MapError>;

    /// Dibujar polilínea + marcadores de un día
    fn draw_route(&mut self, layer: &RouteLayer, on_marker_click: MarkerClickHandler) -> Result<(), MapError>;

    /// Quitar todo lo dibujado por `draw_route`
    fn clear_route(&mut self) -> Result<(), MapError>;

    /// Recalcular tamaño tras cambiar el layout del contenedor
    fn invalidate_size(&self) -> Result<(), MapError>;

    fn is_ready(&self) -> bool;

    /// Sustituir el día dibujado por otro
    fn replace_route(&mut self, layer: &RouteLayer, on_marker_click: MarkerClickHandler) -> Result<(), MapError> {
        self.clear_route()?;
        self.draw_route(layer, on_marker_click)
    }
}

/// Error del mapa
#[derive(Debug, Clone, PartialEq)]
pub enum MapError {
    NotReady,
    InvalidOptions(String),
    Unknown(String),
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::NotReady => write!(f, "Map is not ready"),
            MapError::InvalidOptions(msg) => write!(f, "Invalid map options: {}", msg),
            MapError::Unknown(msg) => write!(f, "Unknown error: {}", msg),
        }
    }
}

impl std::error::Error for MapError {}
