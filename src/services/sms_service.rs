// ============================================================================
// SMS SERVICE - Construye el deep-link `sms:` y delega en el navegador
// ============================================================================
// Fire-and-forget: no hay forma de saber si el SMS llegó a enviarse.
// ============================================================================

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::DeviceAction;

/// Mismo conjunto que `encodeURIComponent`: todo salvo `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub struct SmsService;

impl SmsService {
    pub fn encode_body(message: &str) -> String {
        utf8_percent_encode(message, URI_COMPONENT).to_string()
    }

    /// `sms:<número>?body=<mensaje codificado>`; sin número usa `default_number`
    pub fn sms_url(action: DeviceAction, device_number: &str, default_number: &str) -> String {
        let device_number = device_number.trim();
        let target = if device_number.is_empty() {
            default_number
        } else {
            device_number
        };

        format!("sms:{}?body={}", target, Self::encode_body(action.message()))
    }

    /// Navega al deep-link para abrir el compositor de SMS del sistema
    pub fn dispatch(action: DeviceAction, device_number: &str, default_number: &str) {
        let url = Self::sms_url(action, device_number, default_number);
        log::info!("📨 Enviando comando '{}' -> {}", action.id(), url);

        let Some(window) = web_sys::window() else {
            log::warn!("⚠️ Sin window, no se puede abrir el compositor de SMS");
            return;
        };

        if let Err(e) = window.location().set_href(&url) {
            log::warn!("⚠️ El navegador rechazó el enlace SMS: {:?}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_link_matches_device_firmware_format() {
        let url = SmsService::sms_url(DeviceAction::Lock, "09121234567", "10000000");
        assert_eq!(
            url,
            "sms:09121234567?body=%D9%82%D9%81%D9%84%20%DA%A9%D8%B1%D8%AF%D9%86%20%D8%AF%D8%B1%D8%A8%E2%80%8C%D9%87%D8%A7"
        );
    }

    #[test]
    fn empty_number_falls_back_to_default() {
        let url = SmsService::sms_url(DeviceAction::Bell, "", "10000000");
        assert!(url.starts_with("sms:10000000?body="));
        let url = SmsService::sms_url(DeviceAction::Bell, "  ", "10000000");
        assert!(url.starts_with("sms:10000000?body="));
    }

    #[test]
    fn every_action_has_a_distinct_body() {
        let mut bodies: Vec<_> = DeviceAction::ALL
            .iter()
            .map(|a| SmsService::sms_url(*a, "0912", "10000000"))
            .collect();
        bodies.sort();
        bodies.dedup();
        assert_eq!(bodies.len(), DeviceAction::ALL.len());
    }

    #[test]
    fn body_encoding_follows_encode_uri_component() {
        assert_eq!(SmsService::encode_body("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(SmsService::encode_body("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(SmsService::encode_body("خاموش کردن"), "%D8%AE%D8%A7%D9%85%D9%88%D8%B4%20%DA%A9%D8%B1%D8%AF%D9%86");
    }
}
