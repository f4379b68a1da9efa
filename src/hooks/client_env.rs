// ============================================================================
// CLIENT ENV - Señal única de "cliente listo" + configuración
// ============================================================================
// Se establece una sola vez en la raíz y se comparte por Context; los
// componentes no mantienen sus propios flags de montaje.
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::config::AppConfig;
use crate::utils::leaflet_ffi::leaflet_available;

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct ClientEnv {
    /// Primer render terminado: ya se puede leer localStorage
    pub mounted: bool,
    /// El script de Leaflet está cargado
    pub map_available: bool,
}

#[derive(Properties, PartialEq)]
pub struct ClientEnvProviderProps {
    pub config: Rc<AppConfig>,
    pub children: Children,
}

#[function_component(ClientEnvProvider)]
pub fn client_env_provider(props: &ClientEnvProviderProps) -> Html {
    let env = use_state(ClientEnv::default);

    {
        let env = env.clone();
        use_effect_with((), move |_| {
            let map_available = leaflet_available();
            if !map_available {
                log::warn!("⚠️ Leaflet no está cargado, el mapa quedará en espera");
            }
            env.set(ClientEnv {
                mounted: true,
                map_available,
            });
            log::info!("✅ Cliente listo");
            || ()
        });
    }

    html! {
        <ContextProvider<Rc<AppConfig>> context={props.config.clone()}>
            <ContextProvider<ClientEnv> context={*env}>
                {props.children.clone()}
            </ContextProvider<ClientEnv>>
        </ContextProvider<Rc<AppConfig>>>
    }
}

/// Fuera del provider se considera "no listo"
#[hook]
pub fn use_client_env() -> ClientEnv {
    use_context::<ClientEnv>().unwrap_or_default()
}

#[hook]
pub fn use_app_config() -> Rc<AppConfig> {
    use_context::<Rc<AppConfig>>().unwrap_or_else(|| Rc::new(AppConfig::load()))
}
