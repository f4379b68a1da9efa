// ============================================================================
// USE IDENTITY HOOK - Identidad del dispositivo + modal de registro
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_client_env;
use crate::models::DeviceIdentity;
use crate::services::DeviceIdentityStore;

#[derive(Clone, PartialEq)]
pub struct IdentityState {
    /// Ya se consultó localStorage
    pub loaded: bool,
    pub identity: Option<DeviceIdentity>,
    pub modal_open: bool,
}

impl IdentityState {
    /// El modal se abre si y solo si no había identidad guardada
    pub fn from_stored(identity: Option<DeviceIdentity>) -> Self {
        Self {
            loaded: true,
            modal_open: identity.is_none(),
            identity,
        }
    }

    pub fn device_number(&self) -> &str {
        self.identity
            .as_ref()
            .map(|i| i.device_number.as_str())
            .unwrap_or("")
    }
}

#[derive(Clone)]
pub struct UseIdentityHandle {
    pub state: UseStateHandle<IdentityState>,
    pub submit: Callback<(String, String)>,
    pub open_form: Callback<()>,
    pub close_form: Callback<()>,
    pub logout: Callback<()>,
}

#[hook]
pub fn use_identity() -> UseIdentityHandle {
    let env = use_client_env();
    let state = use_state(|| IdentityState {
        loaded: false,
        identity: None,
        modal_open: false,
    });

    // Leer localStorage en cuanto el cliente esté listo
    {
        let state = state.clone();
        use_effect_with(env.mounted, move |mounted| {
            if *mounted {
                let stored = DeviceIdentityStore::browser().load();
                match &stored {
                    Some(identity) => log::info!("✅ Dispositivo registrado: {}", identity.device_number),
                    None => log::info!("🆕 Sin dispositivo registrado, abriendo formulario"),
                }
                state.set(IdentityState::from_stored(stored));
            }
            || ()
        });
    }

    let submit = {
        let state = state.clone();
        Callback::from(move |(name, device_number): (String, String)| {
            match DeviceIdentityStore::browser().submit(&name, &device_number) {
                Some(identity) => state.set(IdentityState {
                    loaded: true,
                    identity: Some(identity),
                    modal_open: false,
                }),
                None => log::warn!("⚠️ Formulario incompleto, se ignora"),
            }
        })
    };

    let open_form = {
        let state = state.clone();
        Callback::from(move |_| {
            let mut next = (*state).clone();
            next.modal_open = true;
            state.set(next);
        })
    };

    // Solo se puede cerrar sin enviar si ya hay identidad
    let close_form = {
        let state = state.clone();
        Callback::from(move |_| {
            if state.identity.is_some() {
                let mut next = (*state).clone();
                next.modal_open = false;
                state.set(next);
            }
        })
    };

    let logout = {
        let state = state.clone();
        Callback::from(move |_| {
            if let Err(e) = DeviceIdentityStore::browser().clear() {
                log::error!("❌ Error cerrando sesión: {}", e);
            }
            state.set(IdentityState::from_stored(None));
        })
    };

    UseIdentityHandle {
        state,
        submit,
        open_form,
        close_form,
        logout,
    }
}
