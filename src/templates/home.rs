//! Landing page (`{lang}/index.html`).

use super::layout::{HeadMeta, cta_section, document, download_button};
use super::{PageContext, RenderError, schema};
use crate::translation::{AboutGame, Faq, PerfectFor};
use maud::{Markup, html};

/// Screenshot file names under `assets.screenshot_dir`, with their alt text.
const SCREENSHOTS: [(&str, &str); 3] = [
    ("0-c.png", "Game selection screen"),
    ("1.png", "Impostor gameplay"),
    ("2.png", "Voting interface"),
];

pub fn render(ctx: &PageContext<'_>) -> Result<Markup, RenderError> {
    let t = ctx.record;
    let config = ctx.config();

    let mut structured = vec![schema::mobile_application(config, ctx.code(), t)];
    structured.extend(schema::site_wide(ctx));
    if let Some(faq) = &t.faq {
        structured.push(schema::faq_page(faq));
    }

    let content = html! {
        (hero(ctx))
        (halloween_banner(ctx))
        (screenshots(ctx))
        @if let Some(about) = &t.about_game {
            (about_game(about))
        }
        @if let Some(perfect_for) = &t.perfect_for {
            (perfect_for_section(perfect_for))
        }
        @if let Some(faq) = &t.faq {
            (faq_section(faq))
        }
        (cta_section(ctx, &t.cta))
    };

    document(ctx, HeadMeta::from(&t.meta.home), &structured, content)
}

fn hero(ctx: &PageContext<'_>) -> Markup {
    let hero = &ctx.record.hero;
    html! {
        section.hero {
            div.container {
                div.hero-content {
                    div.hero-icon {
                        img.hero-app-icon src=(ctx.config().assets.icon) alt={ (ctx.config().site.name) " App Icon" };
                    }
                    h1.hero-title {
                        (hero.title) " "
                        span.hero-title-accent { (hero.title_accent) }
                    }
                    p.hero-subtitle { (hero.subtitle) }
                    div.hero-actions {
                        a.how-to-play-btn href="./how-to-play.html" { (hero.how_to_play_btn) }
                        div.hero-download-section {
                            div.hero-rating {
                                div.stars { (hero.rating_stars) }
                                span.rating-text { (hero.rating_text) }
                            }
                            (download_button(ctx, "download-btn"))
                        }
                    }
                }
            }
        }
    }
}

fn halloween_banner(ctx: &PageContext<'_>) -> Markup {
    let promo = &ctx.record.halloween;
    html! {
        section.halloween-special {
            div.container {
                div.halloween-banner {
                    img.halloween-icon src=(ctx.config().assets.promo_image) alt="Halloween Mummy Character";
                    div.halloween-content {
                        span.halloween-badge { (promo.badge) }
                        h2.halloween-title { (promo.title) }
                        p.halloween-description { (promo.description) }
                        (download_button(ctx, "download-btn halloween-download"))
                        div.halloween-features {
                            (promo_feature("👻", &promo.features.characters))
                            (promo_feature("🕷️", &promo.features.questions))
                            (promo_feature("🦇", &promo.features.scenarios))
                        }
                    }
                }
            }
        }
    }
}

/// One icon + label entry of a promotion banner.
pub(super) fn promo_feature(icon: &str, label: &str) -> Markup {
    html! {
        div.halloween-feature {
            span.feature-icon { (icon) }
            span { (label) }
        }
    }
}

fn screenshots(ctx: &PageContext<'_>) -> Markup {
    let shots = &ctx.record.screenshots;
    let captions = [
        &shots.captions.game,
        &shots.captions.play,
        &shots.captions.vote,
    ];
    let dir = &ctx.config().assets.screenshot_dir;
    html! {
        section.screenshots {
            div.container {
                h2.section-title { (shots.title) }
                div.screenshots-grid {
                    @for ((file, alt), caption) in SCREENSHOTS.iter().zip(captions) {
                        div.screenshot-item {
                            img.screenshot-img src={ (dir) "/" (file) } alt=(alt);
                            p.screenshot-caption { (caption) }
                        }
                    }
                }
            }
        }
    }
}

fn about_game(about: &AboutGame) -> Markup {
    html! {
        section.about-game {
            div.container {
                h2.section-title { (about.title) }
                p.about-description { (about.description) }
                div.about-features {
                    @for feature in about.features.values() {
                        div.about-feature {
                            h3 { (feature.title) }
                            p { (feature.description) }
                        }
                    }
                }
            }
        }
    }
}

fn perfect_for_section(perfect_for: &PerfectFor) -> Markup {
    html! {
        section.perfect-for {
            div.container {
                h2.section-title { (perfect_for.title) }
                p.section-subtitle { (perfect_for.subtitle) }
                div.occasions-grid {
                    @for occasion in perfect_for.occasions.values() {
                        div.occasion-item {
                            h3 { (occasion.title) }
                            p { (occasion.description) }
                        }
                    }
                }
            }
        }
    }
}

fn faq_section(faq: &Faq) -> Markup {
    html! {
        section.faq {
            div.container {
                h2.section-title { (faq.title) }
                div.faq-list {
                    @for entry in faq.questions.values() {
                        div.faq-item {
                            h3.faq-question { (entry.q) }
                            p.faq-answer { (entry.a) }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use crate::types::PageKind;

    fn render_home(fixture: &SiteFixture, code: &str) -> String {
        render(&fixture.context(code, PageKind::Home))
            .unwrap()
            .into_string()
    }

    #[test]
    fn full_record_renders_every_section() {
        let fixture = SiteFixture::new(&[("en", FULL)]);
        let html = render_home(&fixture, "en");
        for class in [
            "hero",
            "halloween-special",
            "screenshots",
            "about-game",
            "perfect-for",
            "faq",
            "cta",
        ] {
            assert!(
                html.contains(&format!(r#"<section class="{class}">"#)),
                "missing section {class}"
            );
        }
        assert!(html.contains(r#""@type": "FAQPage""#));
    }

    #[test]
    fn minimal_record_omits_optional_sections() {
        let fixture = SiteFixture::new(&[("en", MINIMAL)]);
        let html = render_home(&fixture, "en");
        assert!(!html.contains("about-game"));
        assert!(!html.contains("perfect-for"));
        assert!(!html.contains(r#"<section class="faq">"#));
        assert!(!html.contains("FAQPage"));
        // Core sections still present
        assert!(html.contains(r#"<section class="halloween-special">"#));
        assert!(html.contains(r#""@type": "MobileApplication""#));
    }

    #[test]
    fn structured_data_block_order() {
        let fixture = SiteFixture::new(&[("en", FULL)]);
        let html = render_home(&fixture, "en");
        let types: Vec<String> = json_ld_blocks(&html)
            .iter()
            .map(|b| b["@type"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(
            types,
            vec!["MobileApplication", "Organization", "WebSite", "FAQPage"]
        );
    }

    #[test]
    fn faq_entries_in_authored_order() {
        let fixture = SiteFixture::new(&[("en", FULL)]);
        let html = render_home(&fixture, "en");
        let record = fixture.record("en");
        let faq = record.faq.as_ref().unwrap();
        let positions: Vec<usize> = faq
            .questions
            .values()
            .map(|e| {
                html.find(&format!(r#"<h3 class="faq-question">{}</h3>"#, e.q))
                    .unwrap()
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn faq_text_matches_structured_data() {
        let fixture = SiteFixture::new(&[("en", FULL)]);
        let html = render_home(&fixture, "en");
        let blocks = json_ld_blocks(&html);
        let faq_block = blocks
            .iter()
            .find(|b| b["@type"] == "FAQPage")
            .expect("FAQPage block");
        let visible_questions = extract_all(&html, r#"<h3 class="faq-question">"#, "</h3>");
        let visible_answers = extract_all(&html, r#"<p class="faq-answer">"#, "</p>");
        let entities = faq_block["mainEntity"].as_array().unwrap();
        assert_eq!(entities.len(), visible_questions.len());
        for (i, entity) in entities.iter().enumerate() {
            assert_eq!(entity["name"].as_str().unwrap(), visible_questions[i]);
            assert_eq!(
                entity["acceptedAnswer"]["text"].as_str().unwrap(),
                visible_answers[i]
            );
        }
    }

    #[test]
    fn about_features_in_authored_order() {
        let fixture = SiteFixture::new(&[("en", FULL)]);
        let html = render_home(&fixture, "en");
        let offline = html.find("Play Anywhere").unwrap();
        let players = html.find("3 to 20 Players").unwrap();
        let device = html.find("One Device").unwrap();
        assert!(offline < players && players < device);
    }

    #[test]
    fn screenshots_use_configured_directory() {
        let fixture = SiteFixture::new(&[("en", FULL)]);
        let html = render_home(&fixture, "en");
        assert!(html.contains(r#"src="/src/assets/images/Screenshots/0-c.png""#));
        assert!(html.contains("Pick a game mode"));
    }

    #[test]
    fn hero_links_how_to_play() {
        let fixture = SiteFixture::new(&[("en", FULL)]);
        let html = render_home(&fixture, "en");
        assert!(html.contains(r#"<a class="how-to-play-btn" href="./how-to-play.html">"#));
    }

    #[test]
    fn home_has_full_hreflang_block() {
        let fixture = SiteFixture::new(&[("en", FULL), ("de", MINIMAL)]);
        let html = render_home(&fixture, "de");
        assert!(html.contains(r#"hreflang="en" href="https://falsepeak.ch/cluso/en/""#));
        assert!(html.contains(r#"hreflang="de" href="https://falsepeak.ch/cluso/de/""#));
    }
}
