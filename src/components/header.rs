use yew::prelude::*;

use crate::utils::{device_number_caption, t};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub device_number: AttrValue,
    pub on_menu_toggle: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let onclick = props.on_menu_toggle.reform(|_: MouseEvent| ());

    html! {
        <header class="app-header">
            <button class="btn-menu" {onclick} aria-label={t("side_menu_title")}>
                {"☰"}
            </button>
            <a href="/" class="app-logo">
                <img src="assets/logo.svg" alt={t("logo_alt")} />
            </a>
            <div class="device-number">
                {device_number_caption(&props.device_number)}
            </div>
        </header>
    }
}
