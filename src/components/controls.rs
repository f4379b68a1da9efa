use yew::prelude::*;

use crate::hooks::{use_app_config, use_viewport};
use crate::models::DeviceAction;
use crate::services::SmsService;

#[derive(Properties, PartialEq)]
pub struct ControlsProps {
    pub device_number: AttrValue,
}

/// Botonera de comandos SMS. Vertical en escritorio, barra inferior en móvil.
#[function_component(Controls)]
pub fn controls(props: &ControlsProps) -> Html {
    let config = use_app_config();
    let is_mobile = use_viewport(config.ui_config.mobile_breakpoint);

    let class = if is_mobile { "controls controls-mobile" } else { "controls controls-desktop" };
    let tooltip_side = if is_mobile { "top" } else { "left" };

    html! {
        <div {class}>
            { for DeviceAction::ALL.iter().map(|action| {
                let action = *action;
                let device_number = props.device_number.clone();
                let default_number = config.device_config.default_number.clone();
                let onclick = Callback::from(move |_: MouseEvent| {
                    SmsService::dispatch(action, &device_number, &default_number);
                });

                html! {
                    <button
                        key={action.id()}
                        class="btn-control"
                        title={action.tooltip()}
                        data-tooltip-side={tooltip_side}
                        {onclick}
                    >
                        <span class="control-icon">{action.icon()}</span>
                        <span class="sr-only">{action.tooltip()}</span>
                    </button>
                }
            }) }
        </div>
    }
}
