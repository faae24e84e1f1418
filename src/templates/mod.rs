//! HTML templates for every Page Archetype.
//!
//! Each archetype is a function from a typed [`PageContext`] (plus the record
//! section it renders) to [`maud::Markup`]. Conditional sections are explicit
//! `if let` branches over the record's `Option` fields.
//!
//! | Module | Produces |
//! |--------|----------|
//! | [`nav`] | hreflang block and navigation bar shared by every page |
//! | [`layout`] | document skeleton: head metadata, inline script, footer, CTA pieces |
//! | [`schema`] | JSON-LD structured data |
//! | [`home`] | `index.html` |
//! | [`how_to_play`] | `how-to-play.html` |
//! | [`rules`] | `rules.html` |
//! | [`tips`] | `tips.html` |
//! | [`blog`] | `blog/index.html` and `blog/{slug}.html` |

pub mod blog;
pub mod home;
pub mod how_to_play;
pub mod layout;
pub mod nav;
pub mod rules;
pub mod schema;
pub mod tips;

use crate::config::SiteConfig;
use crate::languages::{Language, LanguageRegistry};
use crate::translation::{TranslationRecord, Translations};
use crate::types::PageKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("no translation record loaded for language {0:?}")]
    MissingTranslation(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Build-wide, read-only inputs shared by every page.
#[derive(Debug, Clone, Copy)]
pub struct Site<'a> {
    pub config: &'a SiteConfig,
    pub registry: &'a LanguageRegistry,
    pub translations: &'a Translations,
}

impl<'a> Site<'a> {
    pub fn new(
        config: &'a SiteConfig,
        registry: &'a LanguageRegistry,
        translations: &'a Translations,
    ) -> Self {
        Self {
            config,
            registry,
            translations,
        }
    }

    pub fn record(&self, code: &str) -> Result<&'a TranslationRecord, RenderError> {
        self.translations
            .get(code)
            .ok_or_else(|| RenderError::MissingTranslation(code.to_string()))
    }

    /// Whether language `code` produces `page` at all.
    ///
    /// Home and how-to-play always exist; the rest depend on optional sections.
    pub fn has_page(&self, code: &str, page: PageKind<'_>) -> bool {
        let Some(record) = self.translations.get(code) else {
            return false;
        };
        match page {
            PageKind::Home | PageKind::HowToPlay => true,
            PageKind::Rules => record.rules_page.is_some(),
            PageKind::Tips => record.tips_page.is_some(),
            PageKind::BlogIndex => record.blog.is_some(),
            PageKind::BlogArticle(slug) => record
                .blog
                .as_ref()
                .is_some_and(|b| b.articles.contains_key(slug)),
        }
    }

    pub fn base_url(&self) -> &'a str {
        &self.config.site.base_url
    }
}

/// Everything one page render needs.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub site: Site<'a>,
    pub lang: &'a Language,
    pub record: &'a TranslationRecord,
    pub page: PageKind<'a>,
}

impl<'a> PageContext<'a> {
    pub fn new(site: Site<'a>, lang: &'a Language, page: PageKind<'a>) -> Result<Self, RenderError> {
        let record = site.record(&lang.code)?;
        Ok(Self {
            site,
            lang,
            record,
            page,
        })
    }

    pub fn config(&self) -> &'a SiteConfig {
        self.site.config
    }

    pub fn code(&self) -> &'a str {
        &self.lang.code
    }

    pub fn canonical_url(&self) -> String {
        self.page.canonical_url(self.site.base_url(), &self.lang.code)
    }
}
