// ============================================================================
// MAP VIEWMODEL - Preparación de capas para el mapa
// ============================================================================
// SOLO lógica de preparación de datos - Sin estado, sin llamadas a Leaflet
// ============================================================================

use crate::models::{LatLng, RouteDay};
use crate::utils::map_icons::MarkerKind;
use crate::utils::t;

/// Un marcador listo para dibujar
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMarker {
    pub point_id: u32,
    pub position: LatLng,
    pub kind: MarkerKind,
    pub popup_html: String,
}

/// Todo lo que el mapa dibuja para un día
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RouteLayer {
    /// Solo presente con 2 o más puntos
    pub polyline: Option<Vec<LatLng>>,
    pub markers: Vec<RouteMarker>,
}

pub struct MapViewModel;

impl MapViewModel {
    pub fn prepare_route_layer(route: &RouteDay) -> RouteLayer {
        let len = route.points.len();

        let polyline = if len > 1 {
            Some(route.points.iter().map(|p| p.position).collect())
        } else {
            None
        };

        let markers = route
            .points
            .iter()
            .enumerate()
            .map(|(idx, point)| RouteMarker {
                point_id: point.id,
                position: point.position,
                kind: MarkerKind::for_index(idx, len),
                popup_html: format!(
                    r#"<div dir="rtl" class="route-popup"><p class="route-popup-title">{}</p><p>{}: {}</p></div>"#,
                    escape_html(&point.description),
                    t("time"),
                    point.local_time_label()
                ),
            })
            .collect();

        log::debug!("📍 Capa preparada: {} marcadores ({})", len, route.date);
        RouteLayer { polyline, markers }
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoutePoint;
    use chrono::NaiveDate;

    fn route(n: u32) -> RouteDay {
        let date = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        RouteDay {
            day: "شنبه".into(),
            date: "2024/2/10".into(),
            points: (0..n)
                .map(|id| RoutePoint {
                    id,
                    position: LatLng::new(35.0 + id as f64, 51.0),
                    timestamp: date.and_hms_opt(9 + id, 7, 0).unwrap(),
                    description: format!("<p{}>", id),
                })
                .collect(),
        }
    }

    #[test]
    fn single_point_has_no_polyline() {
        let layer = MapViewModel::prepare_route_layer(&route(1));
        assert!(layer.polyline.is_none());
        assert_eq!(layer.markers.len(), 1);
        assert_eq!(layer.markers[0].kind, MarkerKind::Start);
    }

    #[test]
    fn empty_route_draws_nothing() {
        assert_eq!(MapViewModel::prepare_route_layer(&route(0)), RouteLayer::default());
    }

    #[test]
    fn polyline_follows_points_in_order() {
        let r = route(4);
        let layer = MapViewModel::prepare_route_layer(&r);
        let expected: Vec<LatLng> = r.points.iter().map(|p| p.position).collect();
        assert_eq!(layer.polyline, Some(expected));
        let kinds: Vec<_> = layer.markers.iter().map(|m| m.kind).collect();
        assert_eq!(
            kinds,
            vec![MarkerKind::Start, MarkerKind::Waypoint, MarkerKind::Waypoint, MarkerKind::End]
        );
    }

    #[test]
    fn popup_is_escaped_and_shows_time() {
        let layer = MapViewModel::prepare_route_layer(&route(2));
        let popup = &layer.markers[1].popup_html;
        assert!(popup.contains("&lt;p1&gt;"));
        assert!(popup.contains("۱۰:۰۷:۰۰"));
        assert_eq!(layer.markers[1].point_id, 1);
    }
}
