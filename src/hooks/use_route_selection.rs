use chrono::NaiveDate;
use yew::prelude::*;

use crate::config::MapConfig;
use crate::hooks::use_app_config;
use crate::services::RouteGenerator;
use crate::viewmodels::RouteSelection;

/// Semana de recorridos lista para seleccionar
pub fn week_selection(
    mut generator: RouteGenerator,
    map_config: MapConfig,
    today: NaiveDate,
) -> RouteSelection {
    let routes = generator.generate(today);
    log::info!("🛣️ {} días de recorrido generados", routes.len());
    RouteSelection::new(routes, map_config)
}

/// Rutas de la semana + selección actual. Se genera una sola vez por montaje
/// del componente que llama al hook: debe vivir en `Dashboard`, no en `MapView`.
#[hook]
pub fn use_route_selection() -> UseReducerHandle<RouteSelection> {
    let config = use_app_config();

    use_reducer(move || {
        let generator = RouteGenerator::from_clock(
            config.demo_routes.clone(),
            config.map_config.default_center,
        );
        week_selection(generator, config.map_config.clone(), chrono::Local::now().date_naive())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::viewmodels::RouteAction;
    use std::rc::Rc;
    use yew::Reducible;

    #[test]
    fn selections_keep_the_same_week() {
        let config = AppConfig::default();
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let generator = RouteGenerator::new(5, config.demo_routes.clone(), config.map_config.default_center);
        let initial = Rc::new(week_selection(generator, config.map_config.clone(), today));
        let week = initial.routes().to_vec();

        let point = week[2].points[1].clone();
        let state = initial
            .reduce(RouteAction::SelectDay(2))
            .reduce(RouteAction::SelectPoint(point.clone()))
            .reduce(RouteAction::SelectDay(99));

        assert_eq!(state.routes(), week.as_slice());
        assert_eq!(state.selected_route_index(), 2);
        assert_eq!(state.selected_point(), Some(&point));
    }
}
