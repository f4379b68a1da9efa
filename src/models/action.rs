// ============================================================================
// ACCIONES DEL DISPOSITIVO - Comandos enviados por SMS
// ============================================================================

/// Conjunto cerrado de comandos que entiende el equipo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceAction {
    Unlock,
    Lock,
    Bell,
    Silent,
    PowerOff,
}

impl DeviceAction {
    /// Orden en que se muestran los botones
    pub const ALL: [DeviceAction; 5] = [
        DeviceAction::Unlock,
        DeviceAction::Lock,
        DeviceAction::Bell,
        DeviceAction::Silent,
        DeviceAction::PowerOff,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            DeviceAction::Unlock => "unlock",
            DeviceAction::Lock => "lock",
            DeviceAction::Bell => "bell",
            DeviceAction::Silent => "silent",
            DeviceAction::PowerOff => "power-off",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "unlock" => Some(DeviceAction::Unlock),
            "lock" => Some(DeviceAction::Lock),
            "bell" => Some(DeviceAction::Bell),
            "silent" => Some(DeviceAction::Silent),
            "power-off" | "PowerOff" => Some(DeviceAction::PowerOff),
            _ => None,
        }
    }

    /// Cuerpo del SMS que interpreta el equipo
    pub fn message(&self) -> &'static str {
        match self {
            DeviceAction::Unlock => "باز کردن درب\u{200c}ها",
            DeviceAction::Lock => "قفل کردن درب\u{200c}ها",
            DeviceAction::Bell => "فعال کردن آژیر",
            DeviceAction::Silent => "غیرفعال کردن آژیر",
            DeviceAction::PowerOff => "خاموش کردن",
        }
    }

    pub fn tooltip(&self) -> &'static str {
        match self {
            DeviceAction::Unlock => "باز کردن",
            DeviceAction::Lock => "قفل کردن",
            DeviceAction::Bell => "زنگ",
            DeviceAction::Silent => "سکوت",
            DeviceAction::PowerOff => "خاموش",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            DeviceAction::Unlock => "🔓",
            DeviceAction::Lock => "🔒",
            DeviceAction::Bell => "🔔",
            DeviceAction::Silent => "🔕",
            DeviceAction::PowerOff => "⏻",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_resolve_back_to_actions() {
        for action in DeviceAction::ALL {
            assert_eq!(DeviceAction::from_id(action.id()), Some(action));
        }
        assert_eq!(DeviceAction::from_id("PowerOff"), Some(DeviceAction::PowerOff));
        assert_eq!(DeviceAction::from_id("reboot"), None);
    }

    #[test]
    fn lock_message_keeps_zero_width_non_joiner() {
        assert!(DeviceAction::Lock.message().contains('\u{200c}'));
        assert_eq!(DeviceAction::Lock.message(), "قفل کردن درب‌ها");
    }
}
