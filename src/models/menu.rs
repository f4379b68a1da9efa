// ============================================================================
// MENÚ LATERAL - Tabla declarativa + búsqueda de comandos
// ============================================================================
// La tabla solo describe etiquetas e íconos. El comportamiento vive en
// `command_for`, así ambos se pueden probar por separado.
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuItem {
    pub id: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
    pub submenu: &'static [MenuItem],
}

impl MenuItem {
    const fn leaf(id: &'static str, icon: &'static str, label: &'static str) -> Self {
        Self { id, icon, label, submenu: &[] }
    }

    const fn group(
        id: &'static str,
        icon: &'static str,
        label: &'static str,
        submenu: &'static [MenuItem],
    ) -> Self {
        Self { id, icon, label, submenu }
    }

    pub fn has_submenu(&self) -> bool {
        !self.submenu.is_empty()
    }

    pub fn command(&self) -> Option<MenuCommand> {
        command_for(self.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    OpenIdentityForm,
    Logout,
}

pub const LOGOUT_ITEM: MenuItem = MenuItem::leaf("logout", "⎋", "خروج");

pub const MENU_ITEMS: &[MenuItem] = &[
    MenuItem::leaf("device-management", "⚙️", "مدیریت دستگاه"),
    MenuItem::leaf("device-charge", "🔋", "شارژ دستگاه"),
    MenuItem::leaf("credit-balance", "💳", "دریافت میزان اعتبار"),
    MenuItem::leaf("new-password", "🔑", "درخواست رمز جدید"),
    MenuItem::group(
        "device-number",
        "📱",
        "ثبت شماره دستگاه",
        &[
            MenuItem::leaf("add-device", "➕", "افزودن دستگاه"),
            MenuItem::leaf("remove-device", "🗑️", "حذف دستگاه"),
        ],
    ),
    MenuItem::group(
        "other-options",
        "⚙️",
        "سایر آپشن ها",
        &[
            MenuItem::leaf("child-lock", "👤", "قفل کودک"),
            MenuItem::leaf("alarm-mode", "📈", "حالت دزدگیر"),
            MenuItem::leaf("alarm-siren", "🖊️", "وصل شدن به آژیر دزدگیر"),
            MenuItem::leaf("ignition-alert", "🔔", "هشدار در صورت روشن بودن"),
            MenuItem::leaf("auto-alarm", "⏰", "حالت دزدگیر اتوماتیک"),
            MenuItem::leaf("lock-timer", "⏰", "تایمر 4 ثانیه ای قفل مرکزی"),
            MenuItem::leaf("door-trigger", "🚪", "تغییر تحریک درب"),
        ],
    ),
    MenuItem::leaf("geofence", "🗺️", "حصار جغرافیایی"),
    MenuItem::leaf("attachments", "📎", "پیوست ها"),
];

/// Comando asociado a una entrada del menú. `None` = entrada sin comportamiento todavía.
pub fn command_for(id: &str) -> Option<MenuCommand> {
    match id {
        "add-device" => Some(MenuCommand::OpenIdentityForm),
        "logout" => Some(MenuCommand::Logout),
        _ => None,
    }
}

/// Solo un submenú abierto a la vez: pulsar el abierto lo cierra.
pub fn toggle_submenu(open: Option<&str>, id: &str) -> Option<String> {
    if open == Some(id) {
        None
    } else {
        Some(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_ids() -> Vec<&'static str> {
        MENU_ITEMS
            .iter()
            .flat_map(|item| std::iter::once(item.id).chain(item.submenu.iter().map(|s| s.id)))
            .collect()
    }

    #[test]
    fn ids_are_unique() {
        let mut ids = all_ids();
        ids.push(LOGOUT_ITEM.id);
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn only_known_entries_carry_commands() {
        let with_commands: Vec<_> = all_ids()
            .into_iter()
            .filter(|id| command_for(id).is_some())
            .collect();
        assert_eq!(with_commands, vec!["add-device"]);
        assert_eq!(LOGOUT_ITEM.command(), Some(MenuCommand::Logout));
    }

    #[test]
    fn groups_have_expected_children() {
        let groups: Vec<_> = MENU_ITEMS.iter().filter(|i| i.has_submenu()).collect();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].submenu.len(), 2);
        assert_eq!(groups[1].submenu.len(), 7);
    }

    #[test]
    fn submenu_toggle_keeps_a_single_open_entry() {
        let open = toggle_submenu(None, "device-number");
        assert_eq!(open.as_deref(), Some("device-number"));
        let open = toggle_submenu(open.as_deref(), "other-options");
        assert_eq!(open.as_deref(), Some("other-options"));
        assert_eq!(toggle_submenu(open.as_deref(), "other-options"), None);
    }
}
