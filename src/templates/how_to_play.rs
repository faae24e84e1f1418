//! How-to-play guide (`{lang}/how-to-play.html`).

use super::home::promo_feature;
use super::layout::{HeadMeta, cta_section, document, download_button, sub_page_hero};
use super::{PageContext, RenderError, schema};
use crate::translation::{GettingStarted, ImpostorGuide, MasterGame};
use maud::{Markup, html};

pub fn render(ctx: &PageContext<'_>) -> Result<Markup, RenderError> {
    let t = ctx.record;
    let page = &t.how_to_play_page;

    let mut structured = schema::site_wide(ctx);
    structured.push(schema::how_to(ctx.code(), &t.meta.how_to_play, page));

    let content = html! {
        (sub_page_hero(&page.hero))
        (getting_started(&page.getting_started))
        (impostor_guide(&page.impostor_guide))
        (master_game(&page.master_game))
        (halloween_section(ctx))
        (cta_section(ctx, &page.final_cta))
    };

    document(ctx, HeadMeta::from(&t.meta.how_to_play), &structured, content)
}

fn getting_started(section: &GettingStarted) -> Markup {
    html! {
        section.guide-section {
            div.container {
                h2.section-title { (section.title) }
                div.steps {
                    @for (idx, step) in section.steps.values().enumerate() {
                        div.step {
                            div.step-number { (idx + 1) }
                            div.step-content {
                                h3 { (step.title) }
                                p { (step.description) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn impostor_guide(guide: &ImpostorGuide) -> Markup {
    html! {
        section.guide-section {
            div.container {
                div.game-guide {
                    h2.game-title { (guide.game_title) }
                    p.game-description { (guide.description) }
                    div.game-rules {
                        div.rules-section {
                            h4 { (guide.how_to_play.title) }
                            ol {
                                @for step in &guide.how_to_play.steps {
                                    li { (step) }
                                }
                            }
                        }
                        div.rules-section {
                            h4 { (guide.tips.title) }
                            ul {
                                @for tip in &guide.tips.list {
                                    li { (tip) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn master_game(section: &MasterGame) -> Markup {
    html! {
        section.tips {
            div.container {
                h2.section-title { (section.title) }
                div.tips-grid {
                    @for tip in section.tips.values() {
                        div.tip {
                            h3 { (tip.title) }
                            p { (tip.description) }
                        }
                    }
                }
            }
        }
    }
}

fn halloween_section(ctx: &PageContext<'_>) -> Markup {
    let section = &ctx.record.how_to_play_page.halloween_section;
    html! {
        section.halloween-special {
            div.container {
                div.halloween-banner {
                    img.halloween-icon src=(ctx.config().assets.promo_image) alt="Halloween Mummy Character";
                    div.halloween-content {
                        span.halloween-badge { (ctx.record.halloween.badge) }
                        h2.halloween-title { (section.title) }
                        p.halloween-description { (section.subtitle) }
                        (download_button(ctx, "download-btn halloween-download"))
                        div.halloween-features {
                            (promo_feature("👻", &section.features.characters.title))
                            (promo_feature("🕷️", &section.features.questions.title))
                            (promo_feature("🦇", &section.features.parties.title))
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

    fn render_page(fixture: &SiteFixture, code: &str) -> String {
        render(&fixture.context(code, PageKind::HowToPlay))
            .unwrap()
            .into_string()
    }

    #[test]
    fn uses_how_to_play_meta() {
        let fixture = SiteFixture::new(&[("en", FULL)]);
        let html = render_page(&fixture, "en");
        let title = &fixture.record("en").meta.how_to_play.title;
        assert!(html.contains(&format!("<title>{title}</title>")));
        assert!(html.contains(
            r#"<link rel="canonical" href="https://falsepeak.ch/cluso/en/how-to-play.html">"#
        ));
    }

    #[test]
    fn steps_numbered_in_order() {
        let fixture = SiteFixture::new(&[("en", FULL)]);
        let html = render_page(&fixture, "en");
        let one = html.find(r#"<div class="step-number">1</div>"#).unwrap();
        let four = html.find(r#"<div class="step-number">4</div>"#).unwrap();
        assert!(one < four);
        let download = html.find("Download Cluso").unwrap();
        let pass = html.find("Pass the Phone").unwrap();
        assert!(download < pass);
    }

    #[test]
    fn impostor_guide_lists_preserve_order() {
        let fixture = SiteFixture::new(&[("en", FULL)]);
        let html = render_page(&fixture, "en");
        let a = html.find("<li>Everyone sees the secret word</li>").unwrap();
        let b = html.find("<li>The impostor sees only a hint</li>").unwrap();
        let c = html.find("<li>Discuss and vote</li>").unwrap();
        assert!(a < b && b < c);
        assert!(html.contains("<ol>"));
        assert!(html.contains("<li>Stay vague</li>"));
    }

    #[test]
    fn renders_how_to_structured_data() {
        let fixture = SiteFixture::new(&[("en", FULL)]);
        let html = render_page(&fixture, "en");
        let types: Vec<String> = json_ld_blocks(&html)
            .iter()
            .map(|b| b["@type"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(types, vec!["Organization", "WebSite", "HowTo"]);
    }

    #[test]
    fn minimal_record_renders_how_to_play() {
        let fixture = SiteFixture::new(&[("en", MINIMAL)]);
        let html = render_page(&fixture, "en");
        assert!(html.contains(r#"<section class="tips">"#));
        assert!(html.contains(r#"<section class="halloween-special">"#));
    }

    #[test]
    fn hreflang_targets_how_to_play_in_every_language() {
        let fixture = SiteFixture::new(&[("en", FULL), ("de", MINIMAL), ("fr", MINIMAL)]);
        let html = render_page(&fixture, "fr");
        for code in ["en", "de", "fr"] {
            assert!(html.contains(&format!(
                r#"hreflang="{code}" href="https://falsepeak.ch/cluso/{code}/how-to-play.html""#
            )));
        }
    }
}
