use yew::prelude::*;

use crate::utils::t;
use crate::viewmodels::{RouteAction, RouteSelection};

#[derive(Properties, PartialEq)]
pub struct RoutePanelProps {
    pub selection: UseReducerHandle<RouteSelection>,
    pub visible: bool,
}

/// Selector de día, lista de puntos del día y detalle del punto elegido
#[function_component(RoutePanel)]
pub fn route_panel(props: &RoutePanelProps) -> Html {
    let selection = &props.selection;
    let selected_index = selection.selected_route_index();
    let selected_point = selection.selected_point();

    let days = selection.routes().iter().enumerate().map(|(idx, route)| {
        let dispatcher = selection.dispatcher();
        let onclick = Callback::from(move |_: MouseEvent| dispatcher.dispatch(RouteAction::SelectDay(idx)));
        let class = classes!("day-button", (selected_index == idx).then_some("selected"));

        html! {
            <button key={format!("day-{}", idx)} {class} {onclick}>
                <div>{route.day.clone()}</div>
                <div class="day-date">{route.date.clone()}</div>
            </button>
        }
    });

    let points = selection.current_route().map(|route| {
        let items = route.points.iter().map(|point| {
            let dispatcher = selection.dispatcher();
            let chosen = point.clone();
            let onclick = Callback::from(move |_: MouseEvent| {
                dispatcher.dispatch(RouteAction::SelectPoint(chosen.clone()))
            });
            let is_selected = selected_point.map(|p| p.id) == Some(point.id);
            let class = classes!("point-button", is_selected.then_some("selected"));

            html! {
                <button key={format!("point-{}", point.id)} {class} {onclick}>
                    <div class="point-time">{point.time_label()}</div>
                    <div class="point-description">{point.description.clone()}</div>
                </button>
            }
        });

        html! {
            <div class="route-points">
                <p class="panel-label">{format!("{} {}:", t("route_points_of"), route.day)}</p>
                <div class="point-list">{ for items }</div>
            </div>
        }
    });

    let details = selected_point.map(|point| html! {
        <div class="point-details">
            <h4>{t("point_details")}</h4>
            <p>{format!("{}: {}", t("time"), point.local_time_label())}</p>
            <p>{format!("{}: {}", t("position"), point.coordinates_label())}</p>
            <p>{point.description.clone()}</p>
        </div>
    });

    let class = classes!("route-panel", (!props.visible).then_some("hidden"));

    html! {
        <div {class} dir="rtl">
            <h3>{t("recent_routes")}</h3>
            <div class="day-picker">
                <p class="panel-label">{t("select_day")}</p>
                <div class="day-grid">{ for days }</div>
            </div>
            { points.unwrap_or_default() }
            { details.unwrap_or_default() }
        </div>
    }
}
