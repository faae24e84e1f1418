//! The Language Registry: which languages the site ships, in which order.
//!
//! Order is significant. It drives build iteration, the language dropdown, and
//! the hreflang block, so every page lists languages identically.

use serde::{Deserialize, Serialize};

/// One supported language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Language {
    /// ISO-style code. Used as the output directory name and URL segment.
    pub code: String,
    /// Flag glyph shown in front of the language name in the dropdown.
    pub flag: String,
    /// Open Graph locale. Falls back to `{code}_{CODE}` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl Language {
    pub fn new(code: &str, flag: &str) -> Self {
        Self {
            code: code.to_string(),
            flag: flag.to_string(),
            locale: None,
        }
    }

    /// Locale string for `og:locale`.
    pub fn og_locale(&self) -> String {
        match &self.locale {
            Some(locale) => locale.clone(),
            None => format!("{}_{}", self.code, self.code.to_uppercase()),
        }
    }
}

/// The six languages the site ships with.
pub fn default_languages() -> Vec<Language> {
    vec![
        Language::new("en", "\u{1F1EC}\u{1F1E7}"),
        Language::new("de", "\u{1F1E9}\u{1F1EA}"),
        Language::new("es", "\u{1F1EA}\u{1F1F8}"),
        Language::new("ca", "\u{1F1E8}\u{1F1E6}"),
        Language::new("pt", "\u{1F1F5}\u{1F1F9}"),
        Language::new("fr", "\u{1F1EB}\u{1F1F7}"),
    ]
}

/// Ordered, read-only set of supported languages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
}

impl LanguageRegistry {
    pub fn new(languages: Vec<Language>) -> Self {
        Self { languages }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Language> {
        self.languages.iter()
    }

    pub fn as_slice(&self) -> &[Language] {
        &self.languages
    }

    pub fn get(&self, code: &str) -> Option<&Language> {
        self.languages.iter().find(|l| l.code == code)
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(|l| l.code.as_str())
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new(default_languages())
    }
}

impl<'a> IntoIterator for &'a LanguageRegistry {
    type Item = &'a Language;
    type IntoIter = std::slice::Iter<'a, Language>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
