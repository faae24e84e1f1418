//! Site generation: every language, every page archetype, written to disk.
//!
//! [`build`] loads all Translation Records once, then renders each language of
//! the registry into its own directory:
//!
//! ```text
//! dist/
//! ├── en/
//! │   ├── index.html
//! │   ├── how-to-play.html
//! │   ├── rules.html             # only if the record has rulesPage
//! │   ├── tips.html              # only if the record has tipsPage
//! │   └── blog/                  # only if the record has blog
//! │       ├── index.html
//! │       └── {slug}.html
//! └── de/
//!     └── ...
//! ```
//!
//! ## Failures
//!
//! A record that fails to load stops the build before anything is written:
//! every page's navigation needs every language's name.
//!
//! Once rendering starts, a failure is scoped to one language. With
//! [`FailurePolicy::Isolate`] it is recorded and the other languages still
//! build; with [`FailurePolicy::FailFast`] no further language is started.
//! Either way the failure ends up in [`BuildReport::failures`].
//!
//! ## Parallelism
//!
//! With `[build] parallel = true`, languages render concurrently on the rayon
//! pool. Each language owns a disjoint output directory and the shared inputs
//! are read-only. Reports are collected in registry order regardless.
//!
//! ## Progress
//!
//! Callers that want live progress pass a channel sender; one [`BuildEvent`]
//! is sent per written or skipped page and per failed language.

use crate::config::{FailurePolicy, SiteConfig};
use crate::languages::Language;
use crate::templates::{PageContext, RenderError, Site, blog, home, how_to_play, rules, tips};
use crate::translation::{self, TranslationError};
use crate::types::PageKind;
use maud::Markup;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Translation(#[from] TranslationError),
    #[error("render error: {0}")]
    Render(#[from] RenderError),
}

/// Progress notifications sent while building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildEvent {
    /// All records parsed and validated.
    RecordsLoaded { count: usize, dir: PathBuf },
    /// A page was written. `path` is relative to the output root.
    PageWritten { path: String },
    /// An optional page was not generated because its section is absent.
    PageSkipped { path: String, section: &'static str },
    /// A language stopped building.
    LanguageFailed { lang: String, error: String },
}

/// An optional page a language did not produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedPage {
    /// Where the page would have been, relative to the output root.
    pub path: String,
    /// The missing record section, e.g. `rulesPage`.
    pub section: &'static str,
}

/// Everything one language produced.
#[derive(Debug, Default)]
pub struct LanguageReport {
    pub lang: String,
    /// Written pages, relative to the output root, in write order.
    pub written: Vec<String>,
    pub skipped: Vec<SkippedPage>,
}

/// A language that could not be fully rendered or written.
#[derive(Debug)]
pub struct LanguageFailure {
    pub lang: String,
    /// Pages already on disk when the language stopped.
    pub written: Vec<String>,
    pub error: GenerateError,
}

/// Outcome of a build, in registry order.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub languages: Vec<LanguageReport>,
    pub failures: Vec<LanguageFailure>,
}

impl BuildReport {
    /// Pages on disk, including those of languages that failed part way.
    pub fn written_count(&self) -> usize {
        let complete: usize = self.languages.iter().map(|l| l.written.len()).sum();
        let partial: usize = self.failures.iter().map(|f| f.written.len()).sum();
        complete + partial
    }

    pub fn skipped_count(&self) -> usize {
        self.languages.iter().map(|l| l.skipped.len()).sum()
    }

    /// Languages that were attempted, successful or not.
    pub fn attempted(&self) -> usize {
        self.languages.len() + self.failures.len()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Build the whole site.
///
/// Returns `Err` only for failures that prevent any page from being
/// rendered (unreadable or invalid records, an unusable output root).
/// Per-language failures are reported in [`BuildReport::failures`].
pub fn build(
    config: &SiteConfig,
    translations_dir: &Path,
    output_dir: &Path,
    events: Option<Sender<BuildEvent>>,
) -> Result<BuildReport, GenerateError> {
    let registry = config.registry();
    let translations = translation::load_all(translations_dir, &registry)?;
    emit(
        events.as_ref(),
        BuildEvent::RecordsLoaded {
            count: translations.len(),
            dir: translations_dir.to_path_buf(),
        },
    );

    fs::create_dir_all(output_dir)?;

    let site = Site::new(config, &registry, &translations);
    let fail_fast = config.build.on_error == FailurePolicy::FailFast;
    let stop = AtomicBool::new(false);

    let run = |lang: &Language| -> Option<Result<LanguageReport, LanguageFailure>> {
        if fail_fast && stop.load(Ordering::SeqCst) {
            return None;
        }
        let outcome = build_language(site, lang, output_dir, events.as_ref());
        if let Err(failure) = &outcome {
            emit(
                events.as_ref(),
                BuildEvent::LanguageFailed {
                    lang: failure.lang.clone(),
                    error: failure.error.to_string(),
                },
            );
            stop.store(true, Ordering::SeqCst);
        }
        Some(outcome)
    };

    let outcomes: Vec<_> = if config.build.parallel {
        registry.as_slice().par_iter().filter_map(run).collect()
    } else {
        registry.iter().map_while(run).collect()
    };

    let mut report = BuildReport::default();
    for outcome in outcomes {
        match outcome {
            Ok(lang_report) => report.languages.push(lang_report),
            Err(failure) => report.failures.push(failure),
        }
    }
    Ok(report)
}

/// Render and write every page of one language.
///
/// On failure the pages written so far are carried in the [`LanguageFailure`].
fn build_language(
    site: Site<'_>,
    lang: &Language,
    output_dir: &Path,
    events: Option<&Sender<BuildEvent>>,
) -> Result<LanguageReport, LanguageFailure> {
    let mut pages = LanguagePages {
        site,
        lang,
        lang_dir: output_dir.join(&lang.code),
        events,
        report: LanguageReport {
            lang: lang.code.clone(),
            ..Default::default()
        },
    };
    match pages.write_all() {
        Ok(()) => Ok(pages.report),
        Err(error) => Err(LanguageFailure {
            lang: lang.code.clone(),
            written: pages.report.written,
            error,
        }),
    }
}

/// Per-language write state.
struct LanguagePages<'a> {
    site: Site<'a>,
    lang: &'a Language,
    lang_dir: PathBuf,
    events: Option<&'a Sender<BuildEvent>>,
    report: LanguageReport,
}

impl LanguagePages<'_> {
    fn write_all(&mut self) -> Result<(), GenerateError> {
        let record = self.site.record(&self.lang.code)?;
        fs::create_dir_all(&self.lang_dir)?;

        self.write(PageKind::Home, home::render)?;
        self.write(PageKind::HowToPlay, how_to_play::render)?;

        match &record.rules_page {
            Some(section) => self.write(PageKind::Rules, |ctx| rules::render(ctx, section))?,
            None => self.skip(PageKind::Rules, "rulesPage"),
        }

        match &record.tips_page {
            Some(section) => self.write(PageKind::Tips, |ctx| tips::render(ctx, section))?,
            None => self.skip(PageKind::Tips, "tipsPage"),
        }

        match &record.blog {
            Some(section) => {
                self.write(PageKind::BlogIndex, |ctx| blog::render_index(ctx, section))?;
                for (slug, article) in section.articles.iter() {
                    self.write(PageKind::BlogArticle(slug), |ctx| {
                        blog::render_article(ctx, slug, article)
                    })?;
                }
            }
            None => self.skip(PageKind::BlogIndex, "blog"),
        }
        Ok(())
    }

    fn write(
        &mut self,
        page: PageKind<'_>,
        render: impl FnOnce(&PageContext<'_>) -> Result<Markup, RenderError>,
    ) -> Result<(), GenerateError> {
        let ctx = PageContext::new(self.site, self.lang, page)?;
        let markup = render(&ctx)?;
        write_page(&self.lang_dir, page, &markup)?;

        let path = page.display_path(&self.lang.code);
        emit(self.events, BuildEvent::PageWritten { path: path.clone() });
        self.report.written.push(path);
        Ok(())
    }

    fn skip(&mut self, page: PageKind<'_>, section: &'static str) {
        let path = page.display_path(&self.lang.code);
        emit(
            self.events,
            BuildEvent::PageSkipped {
                path: path.clone(),
                section,
            },
        );
        self.report.skipped.push(SkippedPage { path, section });
    }
}

/// Write one page below `lang_dir`, creating parent directories.
///
/// Existing files are overwritten.
pub fn write_page(lang_dir: &Path, page: PageKind<'_>, markup: &Markup) -> std::io::Result<PathBuf> {
    let path = lang_dir.join(page.output_path());
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, markup.0.as_bytes())?;
    Ok(path)
}

fn emit(events: Option<&Sender<BuildEvent>>, event: BuildEvent) {
    if let Some(tx) = events {
        // A dropped receiver only means nobody is listening.
        let _ = tx.send(event);
    }
}
