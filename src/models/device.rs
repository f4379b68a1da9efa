use serde::{Deserialize, Serialize};

/// Identidad local del dispositivo (nombre del usuario + número SIM del equipo)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceIdentity {
    pub name: String,
    pub device_number: String,
}

impl DeviceIdentity {
    /// Solo acepta ambos campos no vacíos (ignorando espacios); guarda
    /// los valores tal como se escribieron
    pub fn new(name: &str, device_number: &str) -> Option<Self> {
        if name.trim().is_empty() || device_number.trim().is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            device_number: device_number.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_both_fields() {
        assert!(DeviceIdentity::new("", "0912").is_none());
        assert!(DeviceIdentity::new("Ali", "   ").is_none());
        let identity = DeviceIdentity::new(" Ali ", "0912 123 4567 ").unwrap();
        assert_eq!(identity.name, " Ali ");
        assert_eq!(identity.device_number, "0912 123 4567 ");
    }
}
