use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::traits::{MapError, MapRenderer, MarkerClickHandler};
use crate::config::MapConfig;
use crate::models::LatLng;
use crate::utils::leaflet_ffi::{self, LeafletMap, Layer};
use crate::utils::map_icons::marker_icon;
use crate::viewmodels::{MapCamera, RouteLayer, RouteMarker};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapOptions {
    center: LatLng,
    zoom: f64,
    zoom_control: bool,
    attribution_control: bool,
}

#[derive(Serialize)]
struct TileOptions<'a> {
    attribution: &'a str,
}

#[derive(Serialize)]
struct ZoomControlOptions {
    position: &'static str,
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, MapError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| MapError::InvalidOptions(e.to_string()))
}

/// `{ icon: L.divIcon(...) }` con el ícono según inicio/fin/intermedio
fn marker_options(marker: &RouteMarker) -> Result<JsValue, MapError> {
    let icon = leaflet_ffi::div_icon(&to_js(&marker_icon(marker.kind))?);
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &JsValue::from_str("icon"), &icon)
        .map_err(|e| MapError::InvalidOptions(format!("{:?}", e)))?;
    Ok(options.into())
}

/// Renderizador de mapas para web usando Leaflet
pub struct LeafletRenderer {
    config: MapConfig,
    map: Option<LeafletMap>,
    route_layers: Vec<Layer>,
    // Deben vivir mientras los marcadores existan
    click_handlers: Vec<Closure<dyn FnMut()>>,
}

impl LeafletRenderer {
    pub fn new(config: MapConfig) -> Self {
        Self {
            config,
            map: None,
            route_layers: Vec::new(),
            click_handlers: Vec::new(),
        }
    }

    /// Crea el mapa en `container_id` con teselas y control de zoom
    pub fn initialize(&mut self, container_id: &str, view: MapCamera) -> Result<(), MapError> {
        if self.map.is_some() {
            return Ok(());
        }
        if !leaflet_ffi::leaflet_available() {
            return Err(MapError::NotReady);
        }

        log::info!("🗺️ Inicializando Leaflet en #{}", container_id);

        let options = to_js(&MapOptions {
            center: view.center,
            zoom: view.zoom,
            zoom_control: false,
            attribution_control: true,
        })?;
        let map = leaflet_ffi::create_map(container_id, &options)
            .map_err(|e| MapError::Unknown(format!("{:?}", e)))?;

        let tiles = to_js(&TileOptions {
            attribution: &self.config.attribution,
        })?;
        leaflet_ffi::tile_layer(&self.config.tile_url, &tiles).add_to(&map);

        let zoom = to_js(&ZoomControlOptions {
            position: "bottomright",
        })?;
        leaflet_ffi::zoom_control(&zoom).add_to(&map);

        self.map = Some(map);
        log::info!("✅ Mapa inicializado");
        Ok(())
    }

    fn map(&self) -> Result<&LeafletMap, MapError> {
        self.map.as_ref().ok_or(MapError::NotReady)
    }

    pub fn destroy(&mut self) {
        let _ = self.clear_route();
        if let Some(map) = self.map.take() {
            map.remove_map();
            log::info!("🧹 Mapa destruido");
        }
    }
}

impl MapRenderer for LeafletRenderer {
    fn set_view(&mut self, view: MapCamera) -> Result<(), MapError> {
        let map = self.map()?;
        map.set_view(&to_js(&view.center)?, view.zoom);
        Ok(())
    }

    fn draw_route(&mut self, layer: &RouteLayer, on_marker_click: MarkerClickHandler) -> Result<(), MapError> {
        let map = self.map.as_ref().ok_or(MapError::NotReady)?;

        if let Some(positions) = &layer.polyline {
            let line = leaflet_ffi::polyline(&to_js(positions)?, &to_js(&self.config.route_line)?);
            self.route_layers.push(line.add_to(map));
        }

        for marker in &layer.markers {
            let options = marker_options(marker)?;
            let leaflet_marker = leaflet_ffi::marker(&to_js(&marker.position)?, &options);
            leaflet_marker.bind_popup(&marker.popup_html);

            let point_id = marker.point_id;
            let handler = on_marker_click.clone();
            let closure = Closure::wrap(Box::new(move || handler(point_id)) as Box<dyn FnMut()>);
            leaflet_marker.on("click", closure.as_ref().unchecked_ref());

            self.click_handlers.push(closure);
            self.route_layers.push(leaflet_marker.add_to(map));
        }

        log::info!("📍 {} capas dibujadas", self.route_layers.len());
        Ok(())
    }

    fn clear_route(&mut self) -> Result<(), MapError> {
        for layer in self.route_layers.drain(..) {
            layer.remove_layer();
        }
        self.click_handlers.clear();
        Ok(())
    }

    fn invalidate_size(&self) -> Result<(), MapError> {
        self.map()?.invalidate_size();
        Ok(())
    }

    fn is_ready(&self) -> bool {
        self.map.is_some()
    }
}

impl Drop for LeafletRenderer {
    fn drop(&mut self) {
        self.destroy();
    }
}
