use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::utils::t;

#[derive(Properties, PartialEq)]
pub struct IdentityModalProps {
    pub open: bool,
    pub on_submit: Callback<(String, String)>,
    pub on_close: Callback<()>,
}

/// Formulario nombre + número del dispositivo
#[function_component(IdentityModal)]
pub fn identity_modal(props: &IdentityModalProps) -> Html {
    let name_ref = use_node_ref();
    let device_number_ref = use_node_ref();

    let on_submit = {
        let name_ref = name_ref.clone();
        let device_number_ref = device_number_ref.clone();
        let on_submit = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(name_input), Some(number_input)) = (
                name_ref.cast::<HtmlInputElement>(),
                device_number_ref.cast::<HtmlInputElement>(),
            ) {
                let name = name_input.value();
                let device_number = number_input.value();

                if name.trim().is_empty() || device_number.trim().is_empty() {
                    return;
                }

                on_submit.emit((name, device_number));
            }
        })
    };

    if !props.open {
        return html! {};
    }

    let close = props.on_close.clone();
    let close_overlay = props.on_close.clone();

    html! {
        <div class="modal active" dir="rtl">
            <div class="modal-overlay" onclick={Callback::from(move |_| close_overlay.emit(()))}></div>
            <div class="modal-content modal-small" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="modal-header">
                    <h2>{t("identity_title")}</h2>
                    <button class="btn-close" onclick={Callback::from(move |_| close.emit(()))}>
                        {"✕"}
                    </button>
                </div>
                <form class="identity-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="name">{t("identity_name")}</label>
                        <input type="text" id="name" name="name" ref={name_ref} required=true />
                    </div>
                    <div class="form-group">
                        <label for="deviceNumber">{t("identity_device_number")}</label>
                        <input
                            type="tel"
                            id="deviceNumber"
                            name="deviceNumber"
                            ref={device_number_ref}
                            required=true
                        />
                    </div>
                    <button type="submit" class="btn-submit">{t("identity_submit")}</button>
                </form>
            </div>
        </div>
    }
}
