//! Language identification.
//!
//! Wraps `whatlang` statistical detection, mapping its output to the
//! ISO 639-1 codes used throughout the API. Detection never fails from the
//! caller's perspective: empty input, an inconclusive classifier, or a
//! language outside the supported whitelist all collapse to the default.

use crate::config::DEFAULT_LANGUAGE;
use whatlang::Lang;

/// ISO 639-1 codes with a built-in stop-word list.
///
/// Detection results outside this whitelist collapse to [`DEFAULT_LANGUAGE`].
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "en", "es", "fr", "de", "it", "pt", "nl", "ru", "sv", "da", "no", "fi", "hu", "tr",
];

/// Detects the dominant language of `text`, returning an ISO 639-1 code.
///
/// Falls back to [`DEFAULT_LANGUAGE`] on empty input, inconclusive
/// classification, or any language without a built-in stop-word list.
pub fn detect(text: &str) -> &'static str {
    whatlang::detect_lang(text)
        .and_then(iso_code)
        .unwrap_or(DEFAULT_LANGUAGE)
}

/// Maps a whatlang language to its ISO 639-1 code, supported languages only.
fn iso_code(lang: Lang) -> Option<&'static str> {
    match lang {
        Lang::Eng => Some("en"),
        Lang::Spa => Some("es"),
        Lang::Fra => Some("fr"),
        Lang::Deu => Some("de"),
        Lang::Ita => Some("it"),
        Lang::Por => Some("pt"),
        Lang::Nld => Some("nl"),
        Lang::Rus => Some("ru"),
        Lang::Swe => Some("sv"),
        Lang::Dan => Some("da"),
        Lang::Nob => Some("no"),
        Lang::Fin => Some("fi"),
        Lang::Hun => Some("hu"),
        Lang::Tur => Some("tr"),
        _ => None,
    }
}
