//! Flag emoji helpers. Pure formatting, no store involvement.

/// Offset between a regional indicator symbol and its ASCII letter
/// (U+1F1E6 REGIONAL INDICATOR A - 'A').
const REGIONAL_INDICATOR_OFFSET: u32 = 127397;

/// Image shown when the backend handed us something that is not a flag.
pub const FALLBACK_FLAG_URL: &str = "fallback-flag.png";

/// Convert a regional-indicator flag emoji ("🇫🇷") to its lowercase
/// ISO 3166-1 alpha-2 code ("fr"). Returns `None` for anything that is not
/// a pure regional-indicator sequence.
pub fn flag_to_country_code(flag: &str) -> Option<String> {
    if flag.is_empty() {
        return None;
    }

    let mut code = String::new();
    for ch in flag.chars() {
        let shifted = (ch as u32).checked_sub(REGIONAL_INDICATOR_OFFSET)?;
        let letter = char::from_u32(shifted)?;
        if !letter.is_ascii_uppercase() {
            return None;
        }
        code.push(letter.to_ascii_lowercase());
    }

    Some(code)
}

/// PNG URL (flagcdn) for a flag emoji, falling back to a placeholder image
/// when the input is empty or not a flag.
pub fn flag_png_url(flag: &str) -> String {
    match flag_to_country_code(flag) {
        Some(code) => format!("https://flagcdn.com/24x18/{}.png", code),
        None => FALLBACK_FLAG_URL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_flag_to_country_code() {
        assert_eq!(flag_to_country_code("🇫🇷").as_deref(), Some("fr"));
        assert_eq!(flag_to_country_code("🇳🇬").as_deref(), Some("ng"));
        assert_eq!(flag_to_country_code("🇮🇹").as_deref(), Some("it"));
    }

    #[test]
    fn rejects_non_flag_input() {
        assert_eq!(flag_to_country_code(""), None);
        assert_eq!(flag_to_country_code("France"), None);
        assert_eq!(flag_to_country_code("🎉"), None);
    }

    #[test]
    fn builds_flagcdn_url() {
        assert_eq!(flag_png_url("🇫🇷"), "https://flagcdn.com/24x18/fr.png");
    }

    #[test]
    fn falls_back_for_missing_flag() {
        assert_eq!(flag_png_url(""), FALLBACK_FLAG_URL);
    }
}
