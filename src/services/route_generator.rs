// ============================================================================
// ROUTE GENERATOR - Rutas sintéticas de los últimos días
// ============================================================================
// No hay telemetría real todavía: se generan recorridos de demostración
// alrededor de un centro fijo. La semilla es inyectable para los tests.
// ============================================================================

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::DemoRouteConfig;
use crate::models::{LatLng, RouteDay, RoutePoint};

pub struct RouteGenerator {
    rng: StdRng,
    config: DemoRouteConfig,
    center: LatLng,
}

impl RouteGenerator {
    pub fn new(seed: u64, config: DemoRouteConfig, center: LatLng) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            config,
            center,
        }
    }

    /// Semilla tomada del reloj del navegador (solo WASM)
    pub fn from_clock(config: DemoRouteConfig, center: LatLng) -> Self {
        let seed = js_sys::Date::now() as u64;
        log::info!("🎲 Generador de rutas con semilla {}", seed);
        Self::new(seed, config, center)
    }

    /// `config.days` días terminando en `today`, del más antiguo al más reciente
    pub fn generate(&mut self, today: NaiveDate) -> Vec<RouteDay> {
        let days = self.config.days as i64;
        (0..days)
            .rev()
            .map(|offset| self.generate_day(today - Duration::days(offset)))
            .collect()
    }

    fn generate_day(&mut self, date: NaiveDate) -> RouteDay {
        let lo = self.config.min_points.min(self.config.max_points).max(1);
        let hi = self.config.min_points.max(self.config.max_points).max(lo);
        let count = self.rng.gen_range(lo..=hi);

        let points = (0..count)
            .map(|j| {
                let lat_offset = (self.rng.gen::<f64>() - 0.5) * self.config.jitter;
                let lng_offset = (self.rng.gen::<f64>() - 0.5) * self.config.jitter;

                let hour = (self.config.first_hour + j * self.config.span_hours / count).min(23);
                let minute = self.rng.gen_range(0..60);
                let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default();

                RoutePoint {
                    id: j,
                    position: LatLng::new(self.center.lat + lat_offset, self.center.lng + lng_offset),
                    timestamp: date.and_time(time),
                    description: format!("موقعیت {} در {}:{:02}", j + 1, hour, minute),
                }
            })
            .collect();

        RouteDay {
            day: persian_weekday(date.weekday()).to_string(),
            date: format_date(date),
            points,
        }
    }
}

pub fn persian_weekday(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sat => "شنبه",
        Weekday::Sun => "یکشنبه",
        Weekday::Mon => "دوشنبه",
        Weekday::Tue => "سه\u{200c}شنبه",
        Weekday::Wed => "چهارشنبه",
        Weekday::Thu => "پنجشنبه",
        Weekday::Fri => "جمعه",
    }
}

/// `Y/M/D` sin ceros a la izquierda
pub fn format_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.year(), date.month(), date.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEHRAN: LatLng = LatLng::new(35.6892, 51.389);

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 8).unwrap()
    }

    fn generate(seed: u64) -> Vec<RouteDay> {
        RouteGenerator::new(seed, DemoRouteConfig::default(), TEHRAN).generate(today())
    }

    #[test]
    fn same_seed_same_routes() {
        assert_eq!(generate(42), generate(42));
    }

    #[test]
    fn seven_days_ending_today_in_order() {
        let routes = generate(7);
        assert_eq!(routes.len(), 7);
        assert_eq!(routes[0].date, "2024/3/2");
        assert_eq!(routes[0].day, "شنبه");
        assert_eq!(routes[6].date, "2024/3/8");
        assert_eq!(routes[6].day, "جمعه");
    }

    #[test]
    fn point_counts_within_bounds() {
        for seed in 0..20 {
            for route in generate(seed) {
                let n = route.points.len();
                assert!((4..=8).contains(&n), "{} puntos", n);
                let ids: Vec<u32> = route.points.iter().map(|p| p.id).collect();
                assert_eq!(ids, (0..n as u32).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn points_are_chronological_and_near_center() {
        for seed in 0..20 {
            for route in generate(seed) {
                for pair in route.points.windows(2) {
                    assert!(pair[0].timestamp < pair[1].timestamp);
                }
                for point in &route.points {
                    assert!((point.position.lat - TEHRAN.lat).abs() <= 0.025);
                    assert!((point.position.lng - TEHRAN.lng).abs() <= 0.025);
                    assert_eq!(point.timestamp.date().to_string().len(), 10);
                }
            }
        }
    }

    #[test]
    fn description_mentions_position_and_time() {
        let routes = generate(3);
        let first = &routes[0].points[0];
        assert_eq!(
            first.description,
            format!("موقعیت 1 در {}", first.time_label())
        );
    }

    #[test]
    fn date_format_has_no_padding() {
        assert_eq!(format_date(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()), "2024/1/5");
    }
}
