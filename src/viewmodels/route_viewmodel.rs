// ============================================================================
// ROUTE VIEWMODEL - Día seleccionado + punto seleccionado
// ============================================================================
// Estado: (índice de día, punto opcional, cámara). Cada transición recalcula
// la cámara; un día sin puntos la deja como estaba.
// Invariante: el punto seleccionado pertenece al día actual.
// ============================================================================

use std::fmt;
use std::rc::Rc;

use yew::Reducible;

use crate::config::MapConfig;
use crate::models::{LatLng, RouteDay, RoutePoint};

/// Centro + zoom que debe mostrar el mapa
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapCamera {
    pub center: LatLng,
    pub zoom: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectionError {
    DayOutOfRange { index: usize, days: usize },
    PointNotInRoute { point_id: u32 },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::DayOutOfRange { index, days } => {
                write!(f, "Day index {} out of range ({} days)", index, days)
            }
            SelectionError::PointNotInRoute { point_id } => {
                write!(f, "Point {} is not part of the selected day", point_id)
            }
        }
    }
}

impl std::error::Error for SelectionError {}

#[derive(Debug, Clone, PartialEq)]
pub enum RouteAction {
    SelectDay(usize),
    SelectPoint(RoutePoint),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteSelection {
    routes: Rc<Vec<RouteDay>>,
    selected_route_index: usize,
    selected_point: Option<RoutePoint>,
    camera: MapCamera,
    map_config: Rc<MapConfig>,
}

impl RouteSelection {
    pub fn new(routes: Vec<RouteDay>, map_config: MapConfig) -> Self {
        let camera = MapCamera {
            center: map_config.default_center,
            zoom: map_config.route_zoom,
        };
        let mut selection = Self {
            routes: Rc::new(routes),
            selected_route_index: 0,
            selected_point: None,
            camera,
            map_config: Rc::new(map_config),
        };
        selection.update_camera();
        selection
    }

    pub fn routes(&self) -> &[RouteDay] {
        &self.routes
    }

    pub fn selected_route_index(&self) -> usize {
        self.selected_route_index
    }

    pub fn selected_point(&self) -> Option<&RoutePoint> {
        self.selected_point.as_ref()
    }

    pub fn current_route(&self) -> Option<&RouteDay> {
        self.routes.get(self.selected_route_index)
    }

    pub fn select_day(&mut self, index: usize) -> Result<(), SelectionError> {
        if index >= self.routes.len() {
            return Err(SelectionError::DayOutOfRange {
                index,
                days: self.routes.len(),
            });
        }
        self.selected_route_index = index;
        self.selected_point = None;
        self.update_camera();
        Ok(())
    }

    pub fn select_point(&mut self, point: RoutePoint) -> Result<(), SelectionError> {
        let belongs = self
            .current_route()
            .map(|route| route.contains(&point))
            .unwrap_or(false);
        if !belongs {
            return Err(SelectionError::PointNotInRoute { point_id: point.id });
        }
        self.selected_point = Some(point);
        self.update_camera();
        Ok(())
    }

    pub fn camera(&self) -> MapCamera {
        self.camera
    }

    /// Punto seleccionado -> zoom cercano; si no, primer punto del día.
    /// Sin puntos no se toca la cámara.
    fn update_camera(&mut self) {
        let next = match &self.selected_point {
            Some(point) => Some(MapCamera {
                center: point.position,
                zoom: self.map_config.point_zoom,
            }),
            None => self
                .current_route()
                .and_then(RouteDay::first_point)
                .map(|first| MapCamera {
                    center: first.position,
                    zoom: self.map_config.route_zoom,
                }),
        };

        if let Some(camera) = next {
            self.camera = camera;
        }
    }
}

impl Reducible for RouteSelection {
    type Action = RouteAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let result = match action {
            RouteAction::SelectDay(index) => next.select_day(index),
            RouteAction::SelectPoint(point) => next.select_point(point),
        };

        match result {
            Ok(()) => {
                let view = next.camera();
                log::info!(
                    "🗺️ Día {} / punto {:?} -> centro ({:.5}, {:.5}) zoom {}",
                    next.selected_route_index,
                    next.selected_point.as_ref().map(|p| p.id),
                    view.center.lat,
                    view.center.lng,
                    view.zoom
                );
                Rc::new(next)
            }
            Err(e) => {
                log::warn!("⚠️ Selección ignorada: {}", e);
                self
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DemoRouteConfig;
    use crate::services::RouteGenerator;
    use chrono::NaiveDate;

    fn selection() -> RouteSelection {
        let map_config = MapConfig::default();
        let routes = RouteGenerator::new(11, DemoRouteConfig::default(), map_config.default_center)
            .generate(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        RouteSelection::new(routes, map_config)
    }

    #[test]
    fn starts_on_first_day_without_point() {
        let state = selection();
        assert_eq!(state.selected_route_index(), 0);
        assert!(state.selected_point().is_none());
        let view = state.camera();
        assert_eq!(view.center, state.routes()[0].points[0].position);
        assert_eq!(view.zoom, 13.0);
    }

    #[test]
    fn select_day_recenters_on_first_point() {
        let mut state = selection();
        for i in 0..7 {
            state.select_day(i).unwrap();
            assert!(state.selected_point().is_none());
            let view = state.camera();
            assert_eq!(view.center, state.routes()[i].points[0].position);
            assert_eq!(view.zoom, 13.0);
        }
    }

    #[test]
    fn select_point_zooms_in() {
        let mut state = selection();
        state.select_day(3).unwrap();
        let points = state.routes()[3].points.clone();
        for p in points {
            state.select_point(p.clone()).unwrap();
            let view = state.camera();
            assert_eq!(view.center, p.position);
            assert_eq!(view.zoom, 15.0);
        }
    }

    #[test]
    fn changing_day_clears_point_even_with_shared_id() {
        let mut state = selection();
        let point = state.routes()[0].points[1].clone();
        state.select_point(point).unwrap();
        // el día 1 también tiene un punto con id 1
        assert!(state.routes()[1].point_by_id(1).is_some());
        state.select_day(1).unwrap();
        assert!(state.selected_point().is_none());
    }

    #[test]
    fn reselecting_same_day_also_clears_point() {
        let mut state = selection();
        let point = state.routes()[0].points[0].clone();
        state.select_point(point).unwrap();
        state.select_day(0).unwrap();
        assert!(state.selected_point().is_none());
    }

    #[test]
    fn rejects_point_from_another_day() {
        let mut state = selection();
        let foreign = state.routes()[2].points[0].clone();
        assert_eq!(
            state.select_point(foreign),
            Err(SelectionError::PointNotInRoute { point_id: 0 })
        );
        assert!(state.selected_point().is_none());
    }

    #[test]
    fn rejects_out_of_range_day() {
        let mut state = selection();
        state.select_day(4).unwrap();
        assert_eq!(
            state.select_day(7),
            Err(SelectionError::DayOutOfRange { index: 7, days: 7 })
        );
        assert_eq!(state.selected_route_index(), 4);
    }

    fn day(points: Vec<RoutePoint>) -> RouteDay {
        RouteDay { day: "شنبه".into(), date: "2024/1/6".into(), points }
    }

    #[test]
    fn empty_day_keeps_camera_where_it_was() {
        let anchor = RoutePoint {
            id: 0,
            position: LatLng::new(10.0, 20.0),
            timestamp: NaiveDate::from_ymd_opt(2024, 1, 6)
                .and_then(|d| d.and_hms_opt(9, 0, 0))
                .unwrap(),
            description: "p0".into(),
        };
        let mut state = RouteSelection::new(vec![day(vec![anchor.clone()]), day(vec![])], MapConfig::default());
        let before = state.camera();
        assert_eq!(before.center, LatLng::new(10.0, 20.0));

        state.select_day(1).unwrap();
        assert_eq!(state.camera(), before);

        // también con zoom de punto
        state.select_day(0).unwrap();
        state.select_point(anchor).unwrap();
        let zoomed = state.camera();
        state.select_day(1).unwrap();
        assert_eq!(state.camera(), zoomed);
    }

    #[test]
    fn no_points_at_all_starts_on_default_center() {
        let state = RouteSelection::new(vec![day(vec![])], MapConfig::default());
        assert_eq!(state.camera().center, MapConfig::default().default_center);
        assert_eq!(state.camera().zoom, 13.0);
    }

    #[test]
    fn reducer_keeps_state_on_invalid_action() {
        let state = Rc::new(selection());
        let next = state.clone().reduce(RouteAction::SelectDay(99));
        assert!(Rc::ptr_eq(&state, &next));

        let point = state.routes()[0].points[2].clone();
        let next = state.clone().reduce(RouteAction::SelectPoint(point.clone()));
        assert_eq!(next.selected_point(), Some(&point));
        let next = next.reduce(RouteAction::SelectDay(5));
        assert_eq!(next.selected_route_index(), 5);
        assert!(next.selected_point().is_none());
    }
}
