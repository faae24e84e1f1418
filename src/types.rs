//! Page Archetypes and the paths derived from them.
//!
//! Every output location is a pure function of language code and page kind:
//!
//! ```text
//! Kind          Output file            Canonical URL
//! Home          {lang}/index.html      {base}/{lang}/
//! HowToPlay     {lang}/how-to-play.html {base}/{lang}/how-to-play.html
//! Rules         {lang}/rules.html      {base}/{lang}/rules.html
//! Tips          {lang}/tips.html       {base}/{lang}/tips.html
//! BlogIndex     {lang}/blog/index.html {base}/{lang}/blog/
//! BlogArticle   {lang}/blog/{slug}.html {base}/{lang}/blog/{slug}.html
//! ```

use std::path::PathBuf;

/// One of the fixed page shapes the generator knows how to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind<'a> {
    Home,
    HowToPlay,
    Rules,
    Tips,
    BlogIndex,
    /// Carries the article slug.
    BlogArticle(&'a str),
}

impl PageKind<'_> {
    /// Path below the language root, as used in URLs.
    pub fn url_path(&self) -> String {
        match self {
            PageKind::Home => String::new(),
            PageKind::HowToPlay => "how-to-play.html".to_string(),
            PageKind::Rules => "rules.html".to_string(),
            PageKind::Tips => "tips.html".to_string(),
            PageKind::BlogIndex => "blog/".to_string(),
            PageKind::BlogArticle(slug) => format!("blog/{slug}.html"),
        }
    }

    /// File path below the language output directory.
    pub fn output_path(&self) -> PathBuf {
        match self {
            PageKind::Home => PathBuf::from("index.html"),
            PageKind::BlogIndex => PathBuf::from("blog").join("index.html"),
            PageKind::BlogArticle(slug) => PathBuf::from("blog").join(format!("{slug}.html")),
            other => PathBuf::from(other.url_path()),
        }
    }

    /// Absolute canonical URL of this page in language `lang`.
    pub fn canonical_url(&self, base_url: &str, lang: &str) -> String {
        format!("{}/{}/{}", base_url, lang, self.url_path())
    }

    /// Relative prefix from this page back to its language root.
    ///
    /// Blog pages live one directory deeper.
    pub fn base_path(&self) -> &'static str {
        match self {
            PageKind::BlogIndex | PageKind::BlogArticle(_) => "../",
            _ => "./",
        }
    }

    /// `og:type` for this page.
    pub fn og_type(&self) -> &'static str {
        match self {
            PageKind::Home => "website",
            _ => "article",
        }
    }

    /// Display form used in console notices, e.g. `de/blog/index.html`.
    pub fn display_path(&self, lang: &str) -> String {
        let rel = self.output_path();
        let rel = rel.to_string_lossy().replace('\\', "/");
        format!("{lang}/{rel}")
    }
}
