//! Translation catalog lookup.
//!
//! A [`Translator`] is an explicit value constructed for one language and
//! handed to the components that need localized text; there is no
//! process-wide translator state. Catalogs are plain `<locale>.json`
//! key→string maps; a missing key falls back to the key itself so untranslated
//! UI stays legible.

use crate::config::Language;
use std::collections::HashMap;
use std::path::Path;
use tracing::warn;

/// Key→string catalog for one language.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    language: Language,
    strings: HashMap<String, String>,
}

impl Translator {
    /// Load the catalog for `language` from `<dir>/<locale>.json`.
    ///
    /// A missing or malformed catalog degrades to an empty map with a
    /// warning; lookups then fall back to their keys.
    pub fn load(dir: &Path, language: Language) -> Self {
        let path = dir.join(format!("{}.json", language.code()));
        let strings = match std::fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(map) => map,
                Err(e) => {
                    warn!("malformed translation catalog {}: {e}", path.display());
                    HashMap::new()
                }
            },
            Err(e) => {
                warn!("cannot read translation catalog {}: {e}", path.display());
                HashMap::new()
            }
        };
        Self { language, strings }
    }

    /// Build a translator from an in-memory catalog.
    pub fn from_map(language: Language, strings: HashMap<String, String>) -> Self {
        Self { language, strings }
    }

    /// The language this catalog was loaded for.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Look up `key`, falling back to the key itself when untranslated.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.strings.get(key).map_or(key, String::as_str)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn missing_key_falls_back_to_key() {
        let translator = Translator::from_map(Language::English, HashMap::new());
        assert_eq!(translator.t("btn_add"), "btn_add");
    }

    #[test]
    fn present_key_is_translated() {
        let mut strings = HashMap::new();
        strings.insert("btn_add".to_owned(), "Add".to_owned());
        let translator = Translator::from_map(Language::English, strings);
        assert_eq!(translator.t("btn_add"), "Add");
    }

    #[test]
    fn load_reads_locale_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("zh_CN.json"),
            r#"{"btn_add": "添加", "btn_cancel": "取消"}"#,
        )
        .unwrap();

        let translator = Translator::load(dir.path(), Language::Chinese);
        assert_eq!(translator.language(), Language::Chinese);
        assert_eq!(translator.t("btn_add"), "添加");
        assert_eq!(translator.t("unknown_key"), "unknown_key");
    }

    #[test]
    fn load_missing_catalog_degrades_to_keys() {
        let dir = tempfile::tempdir().unwrap();
        let translator = Translator::load(dir.path(), Language::Vietnamese);
        assert_eq!(translator.t("app_title"), "app_title");
    }

    #[test]
    fn load_malformed_catalog_degrades_to_keys() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("en_US.json"), "not json").unwrap();

        let translator = Translator::load(dir.path(), Language::English);
        assert_eq!(translator.t("app_title"), "app_title");
    }
}
