use serde::{Deserialize, Serialize};

use crate::models::LatLng;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub map_config: MapConfig,
    pub device_config: DeviceConfig,
    pub demo_routes: DemoRouteConfig,
    pub ui_config: UIConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            map_config: MapConfig::default(),
            device_config: DeviceConfig::default(),
            demo_routes: DemoRouteConfig::default(),
            ui_config: UIConfig::default(),
        }
    }
}

impl AppConfig {
    /// Configuración por defecto + overrides definidos al compilar (ver build.rs)
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(number) = option_env!("DEFAULT_DEVICE_NUMBER") {
            if !number.trim().is_empty() {
                config.device_config.default_number = number.trim().to_string();
            }
        }

        if let Some(url) = option_env!("MAP_TILE_URL") {
            if !url.trim().is_empty() {
                config.map_config.tile_url = url.trim().to_string();
            }
        }

        config
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Centro de Teherán
    pub default_center: LatLng,
    pub route_zoom: f64,
    pub point_zoom: f64,
    pub tile_url: String,
    pub attribution: String,
    pub route_line: RouteLineStyle,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_center: LatLng::new(35.6892, 51.389),
            route_zoom: 13.0,
            point_zoom: 15.0,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors".to_string(),
            route_line: RouteLineStyle::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLineStyle {
    pub color: String,
    pub weight: u32,
    pub opacity: f64,
}

impl Default for RouteLineStyle {
    fn default() -> Self {
        Self {
            color: "#3B82F6".to_string(),
            weight: 4,
            opacity: 0.7,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceConfig {
    pub default_number: String,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            default_number: "10000000".to_string(),
        }
    }
}

/// Parámetros del generador de rutas de demostración
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoRouteConfig {
    pub days: u32,
    pub min_points: u32,
    pub max_points: u32,
    /// Amplitud total del desplazamiento aleatorio, en grados
    pub jitter: f64,
    pub first_hour: u32,
    pub span_hours: u32,
}

impl Default for DemoRouteConfig {
    fn default() -> Self {
        Self {
            days: 7,
            min_points: 4,
            max_points: 8,
            jitter: 0.05,
            first_hour: 9,
            span_hours: 12,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UIConfig {
    pub mobile_breakpoint: f64,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 768.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard_constants() {
        let config = AppConfig::default();
        assert_eq!(config.device_config.default_number, "10000000");
        assert_eq!(config.map_config.route_zoom, 13.0);
        assert_eq!(config.map_config.point_zoom, 15.0);
        assert_eq!(config.demo_routes.days, 7);
        assert!(config.demo_routes.min_points <= config.demo_routes.max_points);
    }

    #[test]
    fn load_never_leaves_blank_values() {
        let config = AppConfig::load();
        assert!(!config.device_config.default_number.is_empty());
        assert!(config.map_config.tile_url.contains("{z}"));
    }
}
