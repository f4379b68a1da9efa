use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use super::RoutePanel;
use crate::hooks::{use_app_config, use_client_env};
use crate::maps::{LeafletRenderer, MapRenderer};
use crate::utils::{t, MAP_CONTAINER_ID};
use crate::viewmodels::{MapViewModel, RouteAction, RouteSelection};

/// Duración de la transición CSS del panel lateral
const PANEL_TRANSITION_MS: u32 = 250;

#[function_component(MapLoading)]
pub fn map_loading() -> Html {
    html! {
        <div class="map-loading">
            <div>{t("map_loading")}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MapViewProps {
    /// Estado del padre: sobrevive a que este componente se desmonte
    pub selection: UseReducerHandle<RouteSelection>,
}

/// Panel de rutas + mapa Leaflet. El mapa es función de (centro, zoom, día actual).
#[function_component(MapView)]
pub fn map_view(props: &MapViewProps) -> Html {
    let env = use_client_env();
    let config = use_app_config();
    let selection = props.selection.clone();
    let panel_visible = use_state(|| true);
    let renderer = use_mut_ref({
        let map_config = config.map_config.clone();
        move || LeafletRenderer::new(map_config)
    });

    let map_ready = env.mounted && env.map_available;
    let view = selection.camera();

    // Crear / destruir el mapa
    {
        let renderer = renderer.clone();
        use_effect_with(map_ready, move |ready| {
            if *ready {
                if let Err(e) = renderer.borrow_mut().initialize(MAP_CONTAINER_ID, view) {
                    log::error!("❌ Error inicializando mapa: {}", e);
                }
            }
            move || renderer.borrow_mut().destroy()
        });
    }

    // Redibujar cuando cambia el día
    {
        let renderer = renderer.clone();
        let selection = selection.clone();
        use_effect_with((map_ready, selection.selected_route_index()), move |_| {
            if let Some(route) = selection.current_route() {
                let layer = MapViewModel::prepare_route_layer(route);
                let route = route.clone();
                let dispatcher = selection.dispatcher();
                let on_marker_click = Rc::new(move |point_id: u32| {
                    if let Some(point) = route.point_by_id(point_id) {
                        dispatcher.dispatch(RouteAction::SelectPoint(point.clone()));
                    }
                });

                let mut renderer = renderer.borrow_mut();
                if renderer.is_ready() {
                    if let Err(e) = renderer.replace_route(&layer, on_marker_click) {
                        log::error!("❌ Error dibujando ruta: {}", e);
                    }
                }
            }
            || ()
        });
    }

    // Centrar según la selección
    {
        let renderer = renderer.clone();
        use_effect_with((map_ready, view), move |(_, view)| {
            let mut renderer = renderer.borrow_mut();
            if renderer.is_ready() {
                if let Err(e) = renderer.set_view(*view) {
                    log::warn!("⚠️ No se pudo centrar el mapa: {}", e);
                }
            }
            || ()
        });
    }

    // Leaflet necesita recalcular su tamaño cuando el panel se abre/cierra
    {
        let renderer = renderer.clone();
        use_effect_with(*panel_visible, move |_| {
            let timeout = Timeout::new(PANEL_TRANSITION_MS, move || {
                let renderer = renderer.borrow();
                if renderer.is_ready() {
                    let _ = renderer.invalidate_size();
                }
            });
            move || drop(timeout)
        });
    }

    let toggle_panel = {
        let panel_visible = panel_visible.clone();
        Callback::from(move |_: MouseEvent| panel_visible.set(!*panel_visible))
    };

    let (toggle_icon, toggle_label) = if *panel_visible {
        ("✕", t("close_panel"))
    } else {
        ("☰", t("open_panel"))
    };

    html! {
        <div class="map-view">
            <button class="btn-toggle-panel" onclick={toggle_panel} aria-label={toggle_label}>
                {toggle_icon}
            </button>
            <RoutePanel selection={selection.clone()} visible={*panel_visible} />
            <div class="map-area">
                if map_ready {
                    <div id={MAP_CONTAINER_ID} class="map-container"></div>
                } else {
                    <MapLoading />
                }
            </div>
        </div>
    }
}
