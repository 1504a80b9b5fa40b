//! Canonical text used for comparisons and display capitalization.

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Canonicalizes text for comparison: lowercase, trimmed, diacritics removed.
///
/// Canonical text is only ever compared, never shown to users. The result is
/// a fixed point: `normalize_text(&normalize_text(s)) == normalize_text(s)`.
pub fn normalize_text(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();

    stripped.trim().to_string()
}

/// Uppercases the first character and lowercases the rest.
///
/// Not title case: "AZUL MARINO" becomes "Azul marino".
pub fn capitalize_first_only(text: &str) -> String {
    let mut chars = text.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_accents_and_case() {
        assert_eq!(normalize_text("  Otoño "), "otono");
        assert_eq!(normalize_text("ALGODÓN"), "algodon");
        assert_eq!(normalize_text("Pañuelo"), "panuelo");
        assert_eq!(normalize_text("Borgoña"), "borgona");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_text("   "), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = [
            "Otoño",
            "  Cyberpunk/Techwear ",
            "İstanbul",
            " \u{301}",
            "ÅNGSTRÖM",
            "Ǆ",
            "ﬁ",
            "Straße",
            "",
        ];

        for sample in samples {
            let once = normalize_text(sample);
            assert_eq!(normalize_text(&once), once, "not idempotent for {:?}", sample);
        }
    }

    #[test]
    fn test_capitalize_first_only() {
        assert_eq!(capitalize_first_only("AZUL MARINO"), "Azul marino");
        assert_eq!(capitalize_first_only("  gafas de Sol "), "Gafas de sol");
        assert_eq!(capitalize_first_only("ñandú"), "Ñandú");
        assert_eq!(capitalize_first_only(""), "");
        assert_eq!(capitalize_first_only("   "), "");
    }
}
