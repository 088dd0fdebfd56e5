//! Stop-word resolution.
//!
//! Built-in lists for the supported languages are sourced from the
//! `stop-words` crate and loaded once at process start into an immutable
//! table. Per request, the built-in list is unioned with caller-supplied
//! custom words. Matching is case-sensitive exact match against tokens the
//! cleaner has already lowercased; custom words are taken verbatim.

use crate::config::DEFAULT_LANGUAGE;
use crate::language::SUPPORTED_LANGUAGES;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;
use stop_words::{get, LANGUAGE};

static BUILTIN: LazyLock<HashMap<&'static str, HashSet<String>>> = LazyLock::new(|| {
    SUPPORTED_LANGUAGES
        .iter()
        .map(|&code| (code, get(list_for(code)).into_iter().collect()))
        .collect()
});

/// Maps an ISO 639-1 code to the corresponding `stop-words` list.
fn list_for(code: &str) -> LANGUAGE {
    match code {
        "en" => LANGUAGE::English,
        "es" => LANGUAGE::Spanish,
        "fr" => LANGUAGE::French,
        "de" => LANGUAGE::German,
        "it" => LANGUAGE::Italian,
        "pt" => LANGUAGE::Portuguese,
        "nl" => LANGUAGE::Dutch,
        "ru" => LANGUAGE::Russian,
        "sv" => LANGUAGE::Swedish,
        "da" => LANGUAGE::Danish,
        "no" => LANGUAGE::Norwegian,
        "fi" => LANGUAGE::Finnish,
        "hu" => LANGUAGE::Hungarian,
        "tr" => LANGUAGE::Turkish,
        _ => LANGUAGE::English,
    }
}

/// Returns the stop-word set for `language` unioned with `custom` words.
///
/// Unknown language codes fall back to the English list; the lookup failure
/// is absorbed here and never surfaced to the request.
pub fn resolve(language: &str, custom: &[String]) -> HashSet<String> {
    let builtin = BUILTIN
        .get(language)
        .unwrap_or_else(|| &BUILTIN[DEFAULT_LANGUAGE]);
    let mut set = builtin.clone();
    set.extend(custom.iter().cloned());
    set
}
