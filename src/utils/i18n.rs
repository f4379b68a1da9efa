// ============================================================================
// TEXTOS DE LA INTERFAZ (persa)
// ============================================================================

use std::collections::HashMap;

fn get_translations() -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();

    // Header / menú
    translations.insert("device_number_label", "شماره دستگاه");
    translations.insert("side_menu_title", "منوی جانبی");
    translations.insert("logo_alt", "Logo");

    // Modal de identidad
    translations.insert("identity_title", "لطفا اطلاعات خود را وارد کنید");
    translations.insert("identity_name", "نام");
    translations.insert("identity_device_number", "شماره دستگاه");
    translations.insert("identity_submit", "تایید");

    // Panel de rutas
    translations.insert("recent_routes", "مسیرهای اخیر");
    translations.insert("select_day", "انتخاب روز:");
    translations.insert("route_points_of", "نقاط مسیر");
    translations.insert("point_details", "جزئیات نقطه");
    translations.insert("time", "زمان");
    translations.insert("position", "موقعیت");
    translations.insert("close_panel", "بستن پنل");
    translations.insert("open_panel", "باز کردن پنل");

    // Mapa
    translations.insert("map_loading", "در حال بارگذاری نقشه...");

    translations
}

/// Texto para la clave, o la propia clave si no existe
pub fn t(key: &str) -> String {
    let translations = get_translations();

    if let Some(translation) = translations.get(key) {
        return translation.to_string();
    }

    key.to_string()
}

/// "شماره دستگاه: <n>", vacío si no hay número
pub fn device_number_caption(device_number: &str) -> String {
    if device_number.is_empty() {
        return String::new();
    }
    format!("{}: {}", t("device_number_label"), device_number)
}

/// Cambia los dígitos ASCII por dígitos persas (۰-۹)
pub fn to_persian_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => char::from_u32(0x06F0 + d).unwrap_or(c),
            None => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_keys_fall_back_to_key() {
        assert_eq!(t("no_such_key"), "no_such_key");
        assert_eq!(t("identity_submit"), "تایید");
    }

    #[test]
    fn header_caption() {
        assert_eq!(device_number_caption(""), "");
        assert_eq!(device_number_caption("0912"), "شماره دستگاه: 0912");
    }

    #[test]
    fn persian_digits_keep_separators() {
        assert_eq!(to_persian_digits("9:05:00"), "۹:۰۵:۰۰");
        assert_eq!(to_persian_digits("بدون عدد"), "بدون عدد");
    }
}
