//! Translation Records: the localized content for one language.
//!
//! Each supported language has one JSON file, `{translations_dir}/{code}.json`.
//! The keys are stable identifiers shared across languages; the values are the
//! localized copy rendered into every page.
//!
//! ## Required vs Optional Sections
//!
//! The core sections (navigation title, hero, download link, promotion banner,
//! footer, how-to-play page) must be present in every record. Deserialization
//! fails with the file path when one is missing.
//!
//! The extended sections are `Option`s: a language can ship with only the
//! core pages and pick up the rest later.
//!
//! | Key | Effect when absent |
//! |-----|--------------------|
//! | `aboutGame` | home page omits the about-the-game section |
//! | `perfectFor` | home page omits the perfect-for section |
//! | `faq` | home page omits the FAQ section and its `FAQPage` structured data |
//! | `rulesPage` | `rules.html` is not generated |
//! | `tipsPage` | `tips.html` is not generated |
//! | `blog` | `blog/` is not generated |
//!
//! ## Ordered Objects
//!
//! Some content is authored as a JSON object whose keys name the entries
//! (`faq.questions.whatIs`, `blog.articles.first-game-night`). Those map to
//! [`OrderedMap`], which keeps the authored order so pages list entries
//! exactly as written.
//!
//! ## Loading
//!
//! [`load_all`] reads every registry language once at the start of a build.
//! All records must load: navigation on any page lists every language by its
//! localized name, so one bad file makes every page unrenderable.

use crate::languages::LanguageRegistry;
use crate::naming;
use serde::Deserialize;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslationError {
    #[error("cannot read translation record {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed translation record {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("blog article slug {slug:?} in {lang} is not usable as a file name: {problem}")]
    InvalidSlug {
        lang: String,
        slug: String,
        problem: naming::SlugProblem,
    },
}

// ============================================================================
// Ordered map
// ============================================================================

/// A JSON object deserialized with its entry order preserved.
///
/// Duplicate keys are rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<T> {
    entries: Vec<(String, T)>,
}

impl<T> OrderedMap<T> {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for OrderedMap<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> FromIterator<(String, T)> for OrderedMap<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

struct OrderedMapVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<T> {
    type Value = OrderedMap<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries: Vec<(String, T)> = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, T>()? {
            if entries.iter().any(|(k, _)| *k == key) {
                return Err(de::Error::custom(format!("duplicate key {key:?}")));
            }
            entries.push((key, value));
        }
        Ok(OrderedMap { entries })
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for OrderedMap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

// ============================================================================
// Shared shapes
// ============================================================================

/// `<title>`, description and keywords for one page.
#[derive(Debug, Clone, Deserialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: String,
}

/// A heading plus a paragraph. Used by feature grids, steps, and tip cards.
#[derive(Debug, Clone, Deserialize)]
pub struct Card {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TitleOnly {
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Callout {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubPageHero {
    pub title: String,
    pub title_accent: String,
    pub subtitle: String,
}

// ============================================================================
// Record
// ============================================================================

/// The localized content for one language, validated at load time.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRecord {
    /// The language's own name for itself ("Deutsch", "Français").
    pub lang_name: String,
    pub app_store_url: String,
    pub nav: NavLabels,
    pub meta: CoreMeta,
    pub hero: Hero,
    pub halloween: Halloween,
    pub screenshots: Screenshots,
    pub cta: Callout,
    pub footer: Footer,
    pub how_to_play_page: HowToPlayPage,

    #[serde(default)]
    pub about_game: Option<AboutGame>,
    #[serde(default)]
    pub perfect_for: Option<PerfectFor>,
    #[serde(default)]
    pub faq: Option<Faq>,
    #[serde(default)]
    pub rules_page: Option<RulesPage>,
    #[serde(default)]
    pub tips_page: Option<TipsPage>,
    #[serde(default)]
    pub blog: Option<Blog>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLabels {
    pub title: String,
    #[serde(default = "default_how_to_play_label")]
    pub how_to_play: String,
    #[serde(default = "default_rules_label")]
    pub rules: String,
    #[serde(default = "default_blog_label")]
    pub blog: String,
}

fn default_how_to_play_label() -> String {
    "How to Play".to_string()
}

fn default_rules_label() -> String {
    "Rules".to_string()
}

fn default_blog_label() -> String {
    "Blog".to_string()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreMeta {
    pub home: PageMeta,
    pub how_to_play: PageMeta,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub title: String,
    pub title_accent: String,
    pub subtitle: String,
    pub how_to_play_btn: String,
    pub rating_stars: String,
    pub rating_text: String,
    pub download_btn_alt: String,
}

/// Seasonal promotion banner shown on the home page.
#[derive(Debug, Clone, Deserialize)]
pub struct Halloween {
    pub badge: String,
    pub title: String,
    pub description: String,
    pub features: HalloweenFeatures,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HalloweenFeatures {
    pub characters: String,
    pub questions: String,
    pub scenarios: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Screenshots {
    pub title: String,
    pub captions: ScreenshotCaptions,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScreenshotCaptions {
    pub game: String,
    pub play: String,
    pub vote: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Footer {
    pub copyright: String,
    pub links: FooterLinks,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FooterLinks {
    pub privacy: String,
    pub terms: String,
    pub website: String,
}

// ---------------------------------------------------------------------------
// Home page optional sections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct AboutGame {
    pub title: String,
    pub description: String,
    pub features: OrderedMap<Card>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PerfectFor {
    pub title: String,
    pub subtitle: String,
    pub occasions: OrderedMap<Card>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Faq {
    pub title: String,
    pub questions: OrderedMap<FaqEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FaqEntry {
    pub q: String,
    pub a: String,
}

// ---------------------------------------------------------------------------
// How-to-play page
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HowToPlayPage {
    pub hero: SubPageHero,
    pub getting_started: GettingStarted,
    pub impostor_guide: ImpostorGuide,
    pub master_game: MasterGame,
    pub halloween_section: HalloweenSection,
    pub final_cta: Callout,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GettingStarted {
    pub title: String,
    pub steps: OrderedMap<Card>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpostorGuide {
    pub game_title: String,
    pub description: String,
    pub how_to_play: StepList,
    pub tips: TipList,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StepList {
    pub title: String,
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TipList {
    pub title: String,
    pub list: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MasterGame {
    pub title: String,
    pub tips: OrderedMap<Card>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HalloweenSection {
    pub title: String,
    pub subtitle: String,
    pub features: HalloweenSectionFeatures,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HalloweenSectionFeatures {
    pub characters: TitleOnly,
    pub questions: TitleOnly,
    pub parties: TitleOnly,
}

// ---------------------------------------------------------------------------
// Rules page
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesPage {
    pub meta: PageMeta,
    pub hero: SubPageHero,
    pub game_setup: GameSetup,
    pub how_to_play: Phases,
    pub cta: Callout,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameSetup {
    pub title: String,
    pub intro: String,
    pub requirements: Requirements,
    pub roles: Roles,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Requirements {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Roles {
    pub title: String,
    pub impostor: Role,
    pub innocent: Role,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Role {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Phases {
    pub title: String,
    pub phases: Vec<Card>,
}

// ---------------------------------------------------------------------------
// Tips page
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TipsPage {
    pub meta: PageMeta,
    pub hero: SubPageHero,
    pub for_innocents: TipGroup,
    pub for_impostors: TipGroup,
    pub cta: Callout,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TipGroup {
    pub title: String,
    pub intro: String,
    pub tips: Vec<Card>,
}

// ---------------------------------------------------------------------------
// Blog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Blog {
    pub index: BlogIndex,
    /// Keyed by slug, which is also the output file stem.
    pub articles: OrderedMap<Article>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlogIndex {
    pub meta: PageMeta,
    pub hero: BlogHero,
    /// Heading above the article list.
    pub featured: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlogHero {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Article {
    pub meta: PageMeta,
    pub title: String,
    /// Display date, rendered verbatim.
    pub date: String,
    pub intro: String,
    pub content: Vec<ArticleSection>,
    pub conclusion: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArticleSection {
    pub heading: String,
    pub text: String,
    /// Optional numbered steps shown under the paragraph.
    #[serde(default)]
    pub steps: Vec<String>,
}

impl TranslationRecord {
    /// Parse a record from JSON text.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Checks serde cannot express. `lang` is used for error messages.
    pub fn validate(&self, lang: &str) -> Result<(), TranslationError> {
        if let Some(blog) = &self.blog {
            for slug in blog.articles.keys() {
                naming::check_slug(slug).map_err(|problem| TranslationError::InvalidSlug {
                    lang: lang.to_string(),
                    slug: slug.to_string(),
                    problem,
                })?;
            }
        }
        Ok(())
    }

    /// Names of the optional top-level sections present in this record.
    pub fn optional_sections(&self) -> Vec<&'static str> {
        let mut present = Vec::new();
        if self.about_game.is_some() {
            present.push("aboutGame");
        }
        if self.perfect_for.is_some() {
            present.push("perfectFor");
        }
        if self.faq.is_some() {
            present.push("faq");
        }
        if self.rules_page.is_some() {
            present.push("rulesPage");
        }
        if self.tips_page.is_some() {
            present.push("tipsPage");
        }
        if self.blog.is_some() {
            present.push("blog");
        }
        present
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Path of the record for `code` inside `dir`.
pub fn record_path(dir: &Path, code: &str) -> PathBuf {
    dir.join(format!("{code}.json"))
}

/// Read, parse, and validate one language's record.
pub fn load_record(dir: &Path, code: &str) -> Result<TranslationRecord, TranslationError> {
    let path = record_path(dir, code);
    let content = fs::read_to_string(&path).map_err(|source| TranslationError::Read {
        path: path.clone(),
        source,
    })?;
    let record =
        TranslationRecord::from_json(&content).map_err(|source| TranslationError::Parse {
            path: path.clone(),
            source,
        })?;
    record.validate(code)?;
    Ok(record)
}

/// Every registry language's validated record, keyed by language code.
#[derive(Debug, Clone, Default)]
pub struct Translations {
    records: HashMap<String, TranslationRecord>,
}

impl Translations {
    pub fn get(&self, code: &str) -> Option<&TranslationRecord> {
        self.records.get(code)
    }

    pub fn insert(&mut self, code: &str, record: TranslationRecord) {
        self.records.insert(code.to_string(), record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Load every language in `registry` from `dir`. Stops at the first failure.
pub fn load_all(dir: &Path, registry: &LanguageRegistry) -> Result<Translations, TranslationError> {
    let mut translations = Translations::default();
    for lang in registry {
        let record = load_record(dir, &lang.code)?;
        translations.insert(&lang.code, record);
    }
    Ok(translations)
}
