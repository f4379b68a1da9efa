use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::utils::to_persian_digits;

/// Posición geográfica. Se serializa como `[lat, lng]`, el formato que espera Leaflet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for LatLng {
    fn from(pair: [f64; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }
}

impl From<LatLng> for [f64; 2] {
    fn from(position: LatLng) -> Self {
        [position.lat, position.lng]
    }
}

/// Un punto registrado del recorrido
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    /// Único dentro de su RouteDay, no entre días
    pub id: u32,
    pub position: LatLng,
    pub timestamp: NaiveDateTime,
    pub description: String,
}

impl RoutePoint {
    /// Hora en formato `H:MM`
    pub fn time_label(&self) -> String {
        format!("{}:{:02}", self.timestamp.hour(), self.timestamp.minute())
    }

    /// Hora completa con dígitos persas (`۹:۰۵:۰۰`), para popup y detalles
    pub fn local_time_label(&self) -> String {
        to_persian_digits(&format!(
            "{}:{:02}:{:02}",
            self.timestamp.hour(),
            self.timestamp.minute(),
            self.timestamp.second()
        ))
    }

    pub fn coordinates_label(&self) -> String {
        format!("{:.5}, {:.5}", self.position.lat, self.position.lng)
    }
}

/// Recorrido de un día, con los puntos en orden cronológico
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDay {
    /// Nombre del día de la semana (persa)
    pub day: String,
    /// `Y/M/D` sin ceros a la izquierda
    pub date: String,
    pub points: Vec<RoutePoint>,
}

impl RouteDay {
    pub fn first_point(&self) -> Option<&RoutePoint> {
        self.points.first()
    }

    pub fn point_by_id(&self, id: u32) -> Option<&RoutePoint> {
        self.points.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, point: &RoutePoint) -> bool {
        self.points.iter().any(|p| p == point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn point(id: u32, hour: u32, minute: u32) -> RoutePoint {
        RoutePoint {
            id,
            position: LatLng::new(35.689234567, 51.38901234),
            timestamp: NaiveDate::from_ymd_opt(2024, 3, 2)
                .and_then(|d| d.and_hms_opt(hour, minute, 0))
                .unwrap(),
            description: format!("p{}", id),
        }
    }

    #[test]
    fn labels_are_formatted_for_the_panel() {
        let p = point(0, 9, 5);
        assert_eq!(p.time_label(), "9:05");
        assert_eq!(p.coordinates_label(), "35.68923, 51.38901");
        assert_eq!(p.local_time_label(), "۹:۰۵:۰۰");
    }

    #[test]
    fn latlng_serializes_as_pair() {
        let json = serde_json::to_string(&LatLng::new(1.5, 2.25)).unwrap();
        assert_eq!(json, "[1.5,2.25]");
        let back: LatLng = serde_json::from_str("[3.0,4.0]").unwrap();
        assert_eq!(back, LatLng::new(3.0, 4.0));
    }

    #[test]
    fn membership_uses_whole_point_not_only_id() {
        let day = RouteDay {
            day: "شنبه".into(),
            date: "2024/3/2".into(),
            points: vec![point(0, 9, 0), point(1, 12, 30)],
        };
        assert!(day.contains(&point(1, 12, 30)));
        assert!(!day.contains(&point(1, 13, 30)));
        assert_eq!(day.point_by_id(1).map(|p| p.time_label()), Some("12:30".to_string()));
        assert!(day.point_by_id(7).is_none());
    }
}
