// crates/scrutin-core/src/text.rs

//! Text normalization used by every free-text comparison in the crate.

use unicode_normalization::UnicodeNormalization;

/// Combining diacritical marks block (U+0300..=U+036F).
fn is_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Convert a string into its canonical comparison form.
///
/// This performs, in order:
/// 1\) lower-casing
/// 2\) Unicode canonical decomposition (NFD)
/// 3\) removal of the combining diacritical marks U+0300–U+036F
/// 4\) trimming of surrounding whitespace
///
/// The function is total: any input yields a (possibly empty) string.
///
/// # Examples
///
/// ```rust
/// use scrutin_core::text::normalize;
///
/// assert_eq!(normalize("  Côte d'Ivoire "), "cote d'ivoire");
/// assert_eq!(normalize("SÉNÉGAL"), "senegal");
/// ```
pub fn normalize(s: &str) -> String {
    let folded: String = s.to_lowercase().nfd().filter(|c| !is_diacritic(*c)).collect();
    folded.trim().to_string()
}

/// Accent- and case-insensitive substring test.
///
/// The needle is normalized as well, so callers may pass raw user input.
/// An empty needle is contained in everything.
pub fn contains_normalized(haystack: &str, needle: &str) -> bool {
    normalize(haystack).contains(&normalize(needle))
}

/// Compares two strings for equality after normalization.
///
/// ```rust
/// use scrutin_core::text::equals_normalized;
///
/// assert!(equals_normalized("Bénin", "benin"));
/// assert!(!equals_normalized("Bénin", "Burkina Faso"));
/// ```
pub fn equals_normalized(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_accents_and_case() {
        assert_eq!(normalize("Côte d'Ivoire"), "cote d'ivoire");
        assert_eq!(normalize("COTE"), "cote");
        assert_eq!(normalize("côté"), "cote");
        assert_eq!(normalize("São Tomé-et-Príncipe"), "sao tome-et-principe");
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(normalize("\t Mali \n"), "mali");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn keeps_letters_without_decomposition() {
        // Not a combining sequence under NFD, so it survives untouched.
        assert_eq!(normalize("Straße"), "straße");
        assert_eq!(normalize("Øresund"), "øresund");
    }

    #[test]
    fn substring_and_equality_helpers() {
        assert!(contains_normalized("République Démocratique du Congo", "democratique"));
        assert!(contains_normalized("Mali", ""));
        assert!(!contains_normalized("Mali", "niger"));
        assert!(equals_normalized("  ÉGYPTE", "egypte"));
    }
}
