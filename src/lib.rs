//! # Cluso Site
//!
//! A static site generator for the multilingual marketing site of the Cluso
//! party game. Localized copy lives in one JSON Translation Record per
//! language; the generator renders every page archetype for every language
//! into plain HTML files.
//!
//! # Architecture
//!
//! ```text
//! site.toml             →  SiteConfig + LanguageRegistry
//! translations/*.json   →  Translations        (all loaded and validated up front)
//! (config, records)     →  dist/{lang}/...     (one directory per language)
//! ```
//!
//! Loading is all-or-nothing: every page's navigation names every language, so
//! a build never starts with an incomplete set of records. Rendering is then
//! pure: each archetype is a function from typed record sections to markup.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `site.toml` loading, merging over stock defaults, validation |
//! | [`languages`] | The Language Registry: codes, flags, order |
//! | [`translation`] | Translation Record types, loading, and validation |
//! | [`types`] | Page archetypes and their output paths and canonical URLs |
//! | [`templates`] | Maud templates for every archetype, hreflang, navigation, JSON-LD |
//! | [`generate`] | The build: renders every language, applies the failure policy |
//! | [`naming`] | Slug rules for language codes and article slugs |
//! | [`output`] | CLI output formatting for build and check |
//!
//! # Design Decisions
//!
//! ## Optional Sections Are `Option`s
//!
//! A record may omit the extended sections (FAQ, rules, tips, blog). Those are
//! `Option` fields, so every template has to decide what absence means, and
//! the build reports each page it skips.
//!
//! ## Canonical URLs From One Place
//!
//! The hreflang block on every page links each language's version of the same
//! page. Both the link targets and each page's own canonical URL come from
//! [`types::PageKind::canonical_url`], so the two cannot disagree.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time HTML
//! macro system. All interpolation is auto-escaped, which matters here: every
//! string in a Translation Record is untrusted copy.

pub mod config;
pub mod generate;
pub mod languages;
pub mod naming;
pub mod output;
pub mod templates;
pub mod translation;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
