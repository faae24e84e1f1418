//! CLI output formatting for the build and check commands.
//!
//! # Output Format
//!
//! ## Build
//!
//! One line per event while the build runs, then a summary:
//!
//! ```text
//! ==> Loaded 6 translation records from translations
//! Generated en/index.html
//! Generated en/how-to-play.html
//! Skipping de/rules.html (no rulesPage section)
//! Failed fr: IO error: Permission denied (os error 13)
//! ==> Built 6 languages: 38 pages written, 4 skipped, 1 failed
//! ```
//!
//! ## Check
//!
//! An inventory of what each record will produce:
//!
//! ```text
//! 🇬🇧 en English
//!     Sections: aboutGame, perfectFor, faq, rulesPage, tipsPage, blog
//!     Blog articles: 2
//! 🇩🇪 de Deutsch
//!     Sections: core only
//! ```
//!
//! # Architecture
//!
//! Each output has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::generate::{BuildEvent, BuildReport};
use crate::languages::LanguageRegistry;
use crate::translation::Translations;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// `1 language`, `3 languages`.
fn count_noun(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}

// ============================================================================
// Build
// ============================================================================

/// Format one build progress event.
pub fn format_build_event(event: &BuildEvent) -> Vec<String> {
    match event {
        BuildEvent::RecordsLoaded { count, dir } => vec![format!(
            "==> Loaded {} from {}",
            count_noun(*count, "translation record", "translation records"),
            dir.display()
        )],
        BuildEvent::PageWritten { path } => vec![format!("Generated {path}")],
        BuildEvent::PageSkipped { path, section } => {
            vec![format!("Skipping {path} (no {section} section)")]
        }
        BuildEvent::LanguageFailed { lang, error } => vec![format!("Failed {lang}: {error}")],
    }
}

/// Format the closing summary of a build.
pub fn format_build_summary(report: &BuildReport) -> Vec<String> {
    vec![format!(
        "==> Built {}: {} written, {} skipped, {} failed",
        count_noun(report.attempted(), "language", "languages"),
        count_noun(report.written_count(), "page", "pages"),
        report.skipped_count(),
        report.failures.len()
    )]
}

pub fn print_build_event(event: &BuildEvent) {
    for line in format_build_event(event) {
        println!("{}", line);
    }
}

pub fn print_build_summary(report: &BuildReport) {
    for line in format_build_summary(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format the per-language inventory printed by `check`.
///
/// Languages appear in registry order. Languages without a loaded record are
/// listed as missing.
pub fn format_check_output(registry: &LanguageRegistry, translations: &Translations) -> Vec<String> {
    let mut lines = Vec::new();
    for lang in registry {
        let Some(record) = translations.get(&lang.code) else {
            lines.push(format!("{} {} (missing)", lang.flag, lang.code));
            continue;
        };
        lines.push(format!("{} {} {}", lang.flag, lang.code, record.lang_name));

        let sections = record.optional_sections();
        if sections.is_empty() {
            lines.push(format!("{}Sections: core only", indent(1)));
        } else {
            lines.push(format!("{}Sections: {}", indent(1), sections.join(", ")));
        }
        if let Some(blog) = &record.blog {
            lines.push(format!("{}Blog articles: {}", indent(1), blog.articles.len()));
        }
    }
    lines
}

pub fn print_check_output(registry: &LanguageRegistry, translations: &Translations) {
    for line in format_check_output(registry, translations) {
        println!("{}", line);
    }
}
