use yew::prelude::*;

use super::{Controls, Header, IdentityModal, MapView, SideMenu};
use crate::config::AppConfig;
use crate::hooks::{use_client_env, use_identity, use_route_selection, ClientEnvProvider};
use crate::models::MenuCommand;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| AppConfig::load());

    html! {
        <ClientEnvProvider {config}>
            <Dashboard />
        </ClientEnvProvider>
    }
}

#[function_component(Dashboard)]
fn dashboard() -> Html {
    let env = use_client_env();
    let identity = use_identity();
    // Aquí y no en MapView: abrir el formulario desmonta el mapa
    let selection = use_route_selection();
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(false))
    };

    let on_command = {
        let menu_open = menu_open.clone();
        let open_form = identity.open_form.clone();
        let logout = identity.logout.clone();
        Callback::from(move |command: MenuCommand| {
            menu_open.set(false);
            match command {
                MenuCommand::OpenIdentityForm => open_form.emit(()),
                MenuCommand::Logout => {
                    log::info!("👋 Cerrando sesión del dispositivo");
                    logout.emit(());
                }
            }
        })
    };

    // Hasta tener cliente + identidad leída solo se pinta el fondo
    if !env.mounted || !identity.state.loaded {
        return html! { <div class="app-placeholder"></div> };
    }

    let device_number = AttrValue::from(identity.state.device_number().to_string());
    let modal_open = identity.state.modal_open;

    html! {
        <main class="app" dir="rtl">
            <Header device_number={device_number.clone()} on_menu_toggle={toggle_menu} />
            if !modal_open {
                <div class="dashboard-body">
                    <MapView selection={selection.clone()} />
                    <Controls {device_number} />
                </div>
            }
            <IdentityModal
                open={modal_open}
                on_submit={identity.submit.clone()}
                on_close={identity.close_form.clone()}
            />
            <SideMenu open={*menu_open} on_close={close_menu} {on_command} />
        </main>
    }
}
