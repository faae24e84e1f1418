//! Navigation bar and hreflang block.
//!
//! Both fragments appear on every page. The hreflang block asserts which URLs
//! are translations of each other; the navigation bar carries the logo, the
//! primary links, and the language dropdown.

use super::{RenderError, Site};
use crate::languages::Language;
use crate::types::PageKind;
use maud::{Markup, html};

/// One `<link rel="alternate" hreflang>` per language that has `page`.
///
/// Languages are listed in registry order, the current language included.
/// Each link's target is exactly the canonical URL that language's own page
/// declares. Home and how-to-play exist in every language, so those pages
/// always list the full registry.
pub fn alternate_links(site: Site<'_>, page: PageKind<'_>) -> Markup {
    html! {
        @for lang in site.registry {
            @if site.has_page(&lang.code, page) {
                link rel="alternate" hreflang=(lang.code) href=(page.canonical_url(site.base_url(), &lang.code));
            }
        }
    }
}

/// Navigation bar for a page of kind `page` in language `current`.
///
/// Needs every registry language's record (for the dropdown names); fails if
/// any is missing rather than rendering a partial dropdown.
pub fn navigation(
    site: Site<'_>,
    current: &Language,
    page: PageKind<'_>,
) -> Result<Markup, RenderError> {
    let t = site.record(&current.code)?;
    let options = site
        .registry
        .iter()
        .map(|lang| site.record(&lang.code).map(|record| (lang, record)))
        .collect::<Result<Vec<_>, _>>()?;
    let base = page.base_path();
    let icon = &site.config.assets.icon;

    Ok(html! {
        div.nav-container {
            a.nav-logo href=(base) {
                img.nav-icon src=(icon) alt=(t.nav.title);
                span.nav-title { (t.nav.title) }
            }
            button.nav-menu-toggle id="menuToggle" aria-label="Toggle menu" { "☰" }
            nav.nav-links id="navLinks" {
                a.nav-link href={ (base) "how-to-play.html" } { (t.nav.how_to_play) }
                a.nav-link href={ (base) "rules.html" } { (t.nav.rules) }
                a.nav-link href={ (base) "blog/" } { (t.nav.blog) }
            }
            div.nav-right {
                div.language-selector {
                    button.language-btn id="languageBtn" aria-label="Select language" aria-haspopup="true" aria-expanded="false" {
                        span.language-current { "🌐 " (t.lang_name) }
                        svg.language-arrow width="12" height="8" viewBox="0 0 12 8" fill="none" xmlns="http://www.w3.org/2000/svg" {
                            path d="M1.41 0L6 4.58 10.59 0 12 1.41l-6 6-6-6z" fill="currentColor" {}
                        }
                    }
                    div.language-dropdown id="languageDropdown" {
                        @for (lang, record) in &options {
                            a.language-option.active[lang.code == current.code] href={ "/" (lang.code) "/" } {
                                (lang.flag) " " (record.lang_name)
                            }
                        }
                    }
                }
            }
        }
    })
}
