//! Document skeleton shared by every archetype.
//!
//! [`document`] wraps page content with the doctype, the full `<head>`
//! (metadata, canonical, hreflang, social cards, app-install tags, structured
//! data, the navigation script) and the body frame (navigation bar, footer).
//! The smaller helpers render pieces several archetypes repeat.

use super::nav::{alternate_links, navigation};
use super::{PageContext, RenderError, schema};
use crate::translation::{Callout, PageMeta, SubPageHero};
use maud::{DOCTYPE, Markup, PreEscaped, html};

const NAV_JS: &str = include_str!("../../static/nav.js");

/// Title, description and keywords for `<head>`.
#[derive(Debug, Clone, Copy)]
pub struct HeadMeta<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub keywords: &'a str,
}

impl<'a> From<&'a PageMeta> for HeadMeta<'a> {
    fn from(meta: &'a PageMeta) -> Self {
        Self {
            title: &meta.title,
            description: &meta.description,
            keywords: &meta.keywords,
        }
    }
}

/// Render a complete HTML document.
///
/// `structured_data` blocks are emitted in the given order.
pub fn document(
    ctx: &PageContext<'_>,
    head_meta: HeadMeta<'_>,
    structured_data: &[serde_json::Value],
    content: Markup,
) -> Result<Markup, RenderError> {
    let nav = navigation(ctx.site, ctx.lang, ctx.page)?;
    let hreflang = alternate_links(ctx.site, ctx.page);
    let blocks = structured_data
        .iter()
        .map(schema::json_ld)
        .collect::<Result<Vec<_>, _>>()?;

    let config = ctx.config();
    let app_name = &config.site.name;
    let canonical = ctx.canonical_url();
    let icon_url = config.absolute_asset_url(&config.assets.icon);
    let icon_alt = format!("{app_name} App Icon");
    let itunes = format!(
        "app-id={}, affiliate-data={}",
        config.app.app_store_id, config.app.affiliate_data
    );

    Ok(html! {
        (DOCTYPE)
        html lang=(ctx.code()) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";

                title { (head_meta.title) }
                meta name="title" content=(head_meta.title);
                meta name="description" content=(head_meta.description);
                meta name="keywords" content=(head_meta.keywords);
                meta name="author" content=(config.organization.name);
                meta name="robots" content="index, follow";
                link rel="canonical" href=(canonical);

                (hreflang)

                meta property="og:type" content=(ctx.page.og_type());
                meta property="og:url" content=(canonical);
                meta property="og:site_name" content=(app_name);
                meta property="og:title" content=(head_meta.title);
                meta property="og:description" content=(head_meta.description);
                meta property="og:image" content=(icon_url);
                meta property="og:image:width" content="1200";
                meta property="og:image:height" content="1200";
                meta property="og:image:alt" content=(icon_alt);
                meta property="og:locale" content=(ctx.lang.og_locale());

                meta name="twitter:card" content="summary_large_image";
                meta name="twitter:url" content=(canonical);
                meta name="twitter:title" content=(head_meta.title);
                meta name="twitter:description" content=(head_meta.description);
                meta name="twitter:image" content=(icon_url);
                meta name="twitter:image:alt" content=(icon_alt);

                meta name="apple-itunes-app" content=(itunes);
                meta name="apple-mobile-web-app-capable" content="yes";
                meta name="apple-mobile-web-app-status-bar-style" content="black-translucent";
                meta name="apple-mobile-web-app-title" content=(app_name);
                meta name="application-name" content=(app_name);
                meta name="mobile-web-app-capable" content="yes";
                meta name="theme-color" content=(config.site.theme_color);

                link rel="icon" type="image/png" href=(config.assets.icon);
                link rel="apple-touch-icon" href=(config.assets.icon);
                link rel="manifest" href=(config.assets.manifest);
                link rel="preconnect" href="https://apps.apple.com";
                link rel="dns-prefetch" href="https://apps.apple.com";
                link rel="stylesheet" href=(config.assets.stylesheet);
                script type="module" src=(config.assets.analytics_script) {}

                @for block in &blocks {
                    (block)
                }
                script { (PreEscaped(NAV_JS)) }
            }
            body {
                div.main-content {
                    nav.nav { (nav) }
                    (content)
                    (footer(ctx))
                }
            }
        }
    })
}

/// Footer with copyright and the publisher's legal links.
pub fn footer(ctx: &PageContext<'_>) -> Markup {
    let org_url = &ctx.config().organization.url;
    let footer = &ctx.record.footer;
    html! {
        footer.footer {
            div.container {
                p { (footer.copyright) }
                div.footer-links {
                    a href={ (org_url) "/privacy" } { (footer.links.privacy) }
                    a href={ (org_url) "/terms" } { (footer.links.terms) }
                    a href=(org_url) { (footer.links.website) }
                }
            }
        }
    }
}

/// App Store badge linking to the download URL.
pub fn download_button(ctx: &PageContext<'_>, class: &str) -> Markup {
    html! {
        a href=(ctx.record.app_store_url) target="_blank" rel="noopener" class=(class) {
            img src=(ctx.config().assets.app_store_badge) alt=(ctx.record.hero.download_btn_alt) class="app-store-badge";
        }
    }
}

/// Closing call-to-action section: heading, paragraph, download badge.
pub fn cta_section(ctx: &PageContext<'_>, callout: &Callout) -> Markup {
    html! {
        section.cta {
            div.container {
                h2.cta-title { (callout.title) }
                p.cta-description { (callout.description) }
                (download_button(ctx, "download-btn"))
            }
        }
    }
}

/// Compact hero used by the secondary pages.
pub fn sub_page_hero(hero: &SubPageHero) -> Markup {
    html! {
        section.hero style="padding: 2rem 0 3rem;" {
            div.container {
                h1.hero-title {
                    (hero.title) " "
                    span.hero-title-accent { (hero.title_accent) }
                }
                p.hero-subtitle { (hero.subtitle) }
            }
        }
    }
}
