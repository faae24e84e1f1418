//! Shared test utilities for the cluso-site test suite.
//!
//! Provides the fixture Translation Records, an in-memory [`SiteFixture`] that
//! owns everything a [`PageContext`] borrows, and extractors for rendered HTML.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let fixture = SiteFixture::new(&[("en", FULL), ("de", MINIMAL)]);
//! let ctx = fixture.context("de", PageKind::Home);
//! let html = home::render(&ctx).unwrap().into_string();
//!
//! let blocks = json_ld_blocks(&html);
//! assert_eq!(blocks[0]["@type"], "MobileApplication");
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::config::SiteConfig;
use crate::languages::{Language, LanguageRegistry, default_languages};
use crate::templates::{PageContext, Site};
use crate::translation::{TranslationRecord, Translations};
use crate::types::PageKind;

// =========================================================================
// Fixture records
// =========================================================================

/// A record with every optional section present.
pub const FULL: &str = include_str!("../fixtures/translations/full.json");

/// A record with only the required core sections.
pub const MINIMAL: &str = include_str!("../fixtures/translations/minimal.json");

pub fn full_record() -> TranslationRecord {
    TranslationRecord::from_json(FULL).unwrap()
}

pub fn minimal_record() -> TranslationRecord {
    TranslationRecord::from_json(MINIMAL).unwrap()
}

/// The full record as a JSON value, for tests that edit it before parsing.
///
/// Object key order is not preserved through `Value`.
pub fn full_record_value() -> serde_json::Value {
    serde_json::from_str(FULL).unwrap()
}

pub fn minimal_record_value() -> serde_json::Value {
    serde_json::from_str(MINIMAL).unwrap()
}

// =========================================================================
// Registry and on-disk translations
// =========================================================================

/// Flag for a code: the stock flag when the code is a default language.
fn flag_for(code: &str) -> String {
    default_languages()
        .into_iter()
        .find(|l| l.code == code)
        .map(|l| l.flag)
        .unwrap_or_else(|| "🏳️".to_string())
}

/// A registry of `codes`, in the given order.
pub fn registry_of(codes: &[&str]) -> LanguageRegistry {
    LanguageRegistry::new(
        codes
            .iter()
            .map(|code| Language::new(code, &flag_for(code)))
            .collect(),
    )
}

/// Write `{code}.json` files into a fresh temp directory.
pub fn write_translations(records: &[(&str, &str)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (code, json) in records {
        write_record(tmp.path(), code, json);
    }
    tmp
}

pub fn write_record(dir: &Path, code: &str, json: &str) {
    std::fs::write(dir.join(format!("{code}.json")), json).unwrap();
}

// =========================================================================
// In-memory site
// =========================================================================

/// Owns the config, registry, and records a [`Site`] borrows.
pub struct SiteFixture {
    pub config: SiteConfig,
    pub registry: LanguageRegistry,
    pub translations: Translations,
}

impl SiteFixture {
    /// One registry entry and one parsed record per `(code, json)`, in order.
    pub fn new(records: &[(&str, &str)]) -> Self {
        let parsed = records
            .iter()
            .map(|(code, json)| (*code, TranslationRecord::from_json(json).unwrap()))
            .collect::<Vec<_>>();
        Self::from_records(parsed)
    }

    /// Like [`SiteFixture::new`], from edited JSON values.
    pub fn from_values(records: &[(&str, serde_json::Value)]) -> Self {
        let parsed = records
            .iter()
            .map(|(code, value)| {
                (
                    *code,
                    TranslationRecord::from_json(&value.to_string()).unwrap(),
                )
            })
            .collect::<Vec<_>>();
        Self::from_records(parsed)
    }

    fn from_records(records: Vec<(&str, TranslationRecord)>) -> Self {
        let codes: Vec<&str> = records.iter().map(|(code, _)| *code).collect();
        let registry = registry_of(&codes);
        let mut translations = Translations::default();
        for (code, record) in records {
            translations.insert(code, record);
        }
        let config = SiteConfig {
            languages: registry.as_slice().to_vec(),
            ..SiteConfig::default()
        };
        Self {
            config,
            registry,
            translations,
        }
    }

    /// Append a registry language that has no record.
    pub fn add_registry_language(&mut self, code: &str) {
        let mut languages = self.registry.as_slice().to_vec();
        languages.push(Language::new(code, &flag_for(code)));
        self.config.languages = languages.clone();
        self.registry = LanguageRegistry::new(languages);
    }

    pub fn site(&self) -> Site<'_> {
        Site::new(&self.config, &self.registry, &self.translations)
    }

    /// Registry entry for `code`. Panics if not registered.
    pub fn language(&self, code: &str) -> &Language {
        self.registry.get(code).unwrap_or_else(|| {
            let codes: Vec<&str> = self.registry.codes().collect();
            panic!("language '{code}' not in registry. Available: {codes:?}")
        })
    }

    /// Loaded record for `code`. Panics if absent.
    pub fn record(&self, code: &str) -> &TranslationRecord {
        self.translations
            .get(code)
            .unwrap_or_else(|| panic!("no record loaded for '{code}'"))
    }

    pub fn context<'a>(&'a self, code: &str, page: PageKind<'a>) -> PageContext<'a> {
        PageContext::new(self.site(), self.language(code), page).unwrap()
    }
}

// =========================================================================
// HTML extractors
// =========================================================================

/// Every substring of `html` between `start` and the next `end`, in order.
pub fn extract_all(html: &str, start: &str, end: &str) -> Vec<String> {
    let mut found = Vec::new();
    let mut rest = html;
    while let Some(pos) = rest.find(start) {
        let after = &rest[pos + start.len()..];
        let Some(stop) = after.find(end) else {
            break;
        };
        found.push(after[..stop].to_string());
        rest = &after[stop + end.len()..];
    }
    found
}

/// Parse every JSON-LD block in `html`, in document order.
pub fn json_ld_blocks(html: &str) -> Vec<serde_json::Value> {
    extract_all(html, r#"<script type="application/ld+json">"#, "</script>")
        .iter()
        .map(|text| {
            serde_json::from_str(text)
                .unwrap_or_else(|e| panic!("invalid JSON-LD block: {e}\n{text}"))
        })
        .collect()
}
