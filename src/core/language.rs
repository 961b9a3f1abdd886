const LANGUAGE_ALIASES: &[(&[&str], &str)] = &[
    (&["zh", "cn", "chinese"], "Chinese"),
    (&["en", "english"], "English"),
    (&["es", "spanish"], "Spanish"),
    (&["fr", "french"], "French"),
    (&["de", "german"], "German"),
    (&["ja", "jp", "japanese"], "Japanese"),
    (&["ko", "kr", "korean"], "Korean"),
];

pub const DEFAULT_LANGUAGE: &str = "English";

/// Map a language code or name to the display name used in prompts.
///
/// Matching ignores case and surrounding whitespace. Anything not in the
/// table is returned exactly as the user typed it.
pub fn normalize_language(input: &str) -> String {
    let key = input.trim().to_lowercase();

    LANGUAGE_ALIASES
        .iter()
        .find(|(aliases, _)| aliases.contains(&key.as_str()))
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| input.to_string())
}

#[cfg(test)]
mod tests {
    use super::normalize_language;

    #[test]
    fn maps_short_codes() {
        assert_eq!(normalize_language("zh"), "Chinese");
        assert_eq!(normalize_language("cn"), "Chinese");
        assert_eq!(normalize_language("fr"), "French");
        assert_eq!(normalize_language("jp"), "Japanese");
        assert_eq!(normalize_language("ko"), "Korean");
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(normalize_language("ZH"), "Chinese");
        assert_eq!(normalize_language("GERMAN"), "German");
        assert_eq!(normalize_language("english"), "English");
    }

    #[test]
    fn unknown_languages_pass_through_verbatim() {
        assert_eq!(normalize_language("Klingon"), "Klingon");
        assert_eq!(normalize_language("pt-BR"), "pt-BR");
    }
}
