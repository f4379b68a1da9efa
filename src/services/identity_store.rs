// ============================================================================
// IDENTITY STORE - Nombre + número del dispositivo en localStorage
// ============================================================================

use crate::models::DeviceIdentity;
use crate::utils::constants::{DEVICE_NUMBER_KEY, USER_NAME_KEY};
use crate::utils::storage::{BrowserStorage, KeyValueStore};

pub struct DeviceIdentityStore<S: KeyValueStore = BrowserStorage> {
    storage: S,
}

impl DeviceIdentityStore<BrowserStorage> {
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<S: KeyValueStore> DeviceIdentityStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Identidad guardada. Sin `deviceNumber` (o sin storage) = usuario nuevo.
    pub fn load(&self) -> Option<DeviceIdentity> {
        let device_number = self
            .storage
            .get(DEVICE_NUMBER_KEY)
            .filter(|n| !n.is_empty())?;
        let name = self.storage.get(USER_NAME_KEY).unwrap_or_default();

        Some(DeviceIdentity { name, device_number })
    }

    pub fn save(&self, identity: &DeviceIdentity) -> Result<(), String> {
        self.storage.set(USER_NAME_KEY, &identity.name)?;
        self.storage.set(DEVICE_NUMBER_KEY, &identity.device_number)?;
        log::info!("💾 Identidad guardada (dispositivo {})", identity.device_number);
        Ok(())
    }

    pub fn clear(&self) -> Result<(), String> {
        self.storage.remove(USER_NAME_KEY)?;
        self.storage.remove(DEVICE_NUMBER_KEY)?;
        log::info!("🧹 Identidad eliminada");
        Ok(())
    }

    /// Envío del formulario de identidad. Con algún campo vacío no hace nada
    /// (`None`, el modal sigue abierto). Si el guardado falla la identidad
    /// sigue valiendo para esta sesión.
    pub fn submit(&self, name: &str, device_number: &str) -> Option<DeviceIdentity> {
        let identity = DeviceIdentity::new(name, device_number)?;
        if let Err(e) = self.save(&identity) {
            log::error!("❌ No se pudo guardar la identidad: {}", e);
        }
        Some(identity)
    }

    /// El modal de identidad se muestra si y solo si no hay número guardado
    pub fn needs_identity(&self) -> bool {
        self.load().is_none()
    }
}
