//! JSON-LD structured data.
//!
//! Every block is built from the same record fields the visible page renders,
//! so the machine-readable and human-readable copy cannot drift apart.

use super::{PageContext, RenderError};
use crate::config::SiteConfig;
use crate::translation::{Article, Blog, Faq, HowToPlayPage, PageMeta, TranslationRecord};
use crate::types::PageKind;
use maud::{Markup, PreEscaped, html};
use serde_json::{Value, json};

/// Wrap a value in `<script type="application/ld+json">`.
///
/// `</` is escaped so no string in the content can terminate the script element.
pub fn json_ld(value: &Value) -> Result<Markup, RenderError> {
    let text = serde_json::to_string_pretty(value)?.replace("</", "<\\/");
    Ok(html! {
        script type="application/ld+json" { (PreEscaped(text)) }
    })
}

fn author(config: &SiteConfig) -> Value {
    json!({
        "@type": "Organization",
        "name": config.organization.name,
        "url": config.organization.url,
    })
}

/// The publishing organization. Present on every page.
pub fn organization(config: &SiteConfig) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": config.organization.name,
        "url": config.organization.url,
        "logo": config.absolute_asset_url(&config.assets.icon),
        "sameAs": [],
    })
}

/// The localized site with its search action. Present on every page.
pub fn website(config: &SiteConfig, lang: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "name": config.site.name,
        "url": PageKind::Home.canonical_url(&config.site.base_url, lang),
        "inLanguage": lang,
        "potentialAction": {
            "@type": "SearchAction",
            "target": config.app.search_url,
            "query-input": "required name=search_term_string",
        },
    })
}

/// Organization and website blocks, in that order.
pub fn site_wide(ctx: &PageContext<'_>) -> Vec<Value> {
    vec![organization(ctx.config()), website(ctx.config(), ctx.code())]
}

/// The app listing, home page only.
pub fn mobile_application(config: &SiteConfig, lang: &str, record: &TranslationRecord) -> Value {
    // Localized entries follow the first and second configured features.
    let mut configured = config.app.features.iter().map(String::as_str);
    let mut features: Vec<&str> = Vec::new();
    for localized in [record.halloween.title.as_str(), record.hero.rating_text.as_str()] {
        features.extend(configured.next());
        features.push(localized);
    }
    features.extend(configured);

    json!({
        "@context": "https://schema.org",
        "@type": "MobileApplication",
        "name": config.site.name,
        "applicationCategory": config.app.category,
        "applicationSubCategory": config.app.sub_category,
        "operatingSystem": config.app.operating_system,
        "inLanguage": lang,
        "offers": {
            "@type": "Offer",
            "price": "0",
            "priceCurrency": "USD",
        },
        "aggregateRating": {
            "@type": "AggregateRating",
            "ratingValue": config.app.rating_value,
            "ratingCount": config.app.rating_count,
            "bestRating": "5",
            "worstRating": "1",
        },
        "author": author(config),
        "description": record.meta.home.description,
        "screenshot": config.absolute_asset_url(&format!("{}/1.png", config.assets.screenshot_dir)),
        "downloadUrl": record.app_store_url,
        "featureList": features,
    })
}

/// One `Question` per FAQ entry, in authored order.
pub fn faq_page(faq: &Faq) -> Value {
    let questions: Vec<Value> = faq
        .questions
        .values()
        .map(|entry| {
            json!({
                "@type": "Question",
                "name": entry.q,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": entry.a,
                },
            })
        })
        .collect();
    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": questions,
    })
}

/// The getting-started steps as a `HowTo`.
pub fn how_to(lang: &str, meta: &PageMeta, page: &HowToPlayPage) -> Value {
    let steps: Vec<Value> = page
        .getting_started
        .steps
        .values()
        .enumerate()
        .map(|(idx, step)| {
            json!({
                "@type": "HowToStep",
                "position": idx + 1,
                "name": step.title,
                "text": step.description,
            })
        })
        .collect();
    json!({
        "@context": "https://schema.org",
        "@type": "HowTo",
        "name": meta.title,
        "description": meta.description,
        "inLanguage": lang,
        "step": steps,
    })
}

fn posting_summary(config: &SiteConfig, lang: &str, slug: &str, article: &Article) -> Value {
    json!({
        "@type": "BlogPosting",
        "headline": article.title,
        "url": PageKind::BlogArticle(slug).canonical_url(&config.site.base_url, lang),
        "datePublished": article.date,
    })
}

/// The blog index with a summary of each article.
pub fn blog(config: &SiteConfig, lang: &str, blog: &Blog) -> Value {
    let posts: Vec<Value> = blog
        .articles
        .iter()
        .map(|(slug, article)| posting_summary(config, lang, slug, article))
        .collect();
    json!({
        "@context": "https://schema.org",
        "@type": "Blog",
        "name": blog.index.hero.title,
        "description": blog.index.meta.description,
        "url": PageKind::BlogIndex.canonical_url(&config.site.base_url, lang),
        "inLanguage": lang,
        "blogPost": posts,
    })
}

/// A single article.
pub fn blog_posting(config: &SiteConfig, lang: &str, slug: &str, article: &Article) -> Value {
    let url = PageKind::BlogArticle(slug).canonical_url(&config.site.base_url, lang);
    json!({
        "@context": "https://schema.org",
        "@type": "BlogPosting",
        "headline": article.title,
        "description": article.meta.description,
        "keywords": article.meta.keywords,
        "datePublished": article.date,
        "inLanguage": lang,
        "url": url,
        "mainEntityOfPage": url,
        "image": config.absolute_asset_url(&config.assets.icon),
        "author": author(config),
        "publisher": organization_ref(config),
    })
}

fn organization_ref(config: &SiteConfig) -> Value {
    json!({
        "@type": "Organization",
        "name": config.organization.name,
        "logo": {
            "@type": "ImageObject",
            "url": config.absolute_asset_url(&config.assets.icon),
        },
    })
}
