//! Official rules (`{lang}/rules.html`), rendered only when the record has `rulesPage`.

use super::layout::{HeadMeta, cta_section, document, sub_page_hero};
use super::{PageContext, RenderError, schema};
use crate::translation::{GameSetup, Phases, Role, RulesPage};
use maud::{Markup, html};

pub fn render(ctx: &PageContext<'_>, rules: &RulesPage) -> Result<Markup, RenderError> {
    let content = html! {
        (sub_page_hero(&rules.hero))
        (game_setup(&rules.game_setup))
        (phases(&rules.how_to_play))
        (cta_section(ctx, &rules.cta))
    };
    document(ctx, HeadMeta::from(&rules.meta), &schema::site_wide(ctx), content)
}

fn game_setup(setup: &GameSetup) -> Markup {
    html! {
        section.guide-section {
            div.container {
                h2.section-title { (setup.title) }
                p { (setup.intro) }
                h3 { (setup.requirements.title) }
                ul {
                    @for item in &setup.requirements.items {
                        li { (item) }
                    }
                }
                h3 { (setup.roles.title) }
                div.roles {
                    (role(&setup.roles.impostor))
                    (role(&setup.roles.innocent))
                }
            }
        }
    }
}

fn role(role: &Role) -> Markup {
    html! {
        h4 { (role.name) }
        p { (role.description) }
    }
}

fn phases(section: &Phases) -> Markup {
    html! {
        section.guide-section {
            div.container {
                h2.section-title { (section.title) }
                @for phase in &section.phases {
                    div.step {
                        h3 { (phase.title) }
                        p { (phase.description) }
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

    fn render_rules(fixture: &SiteFixture, code: &str) -> String {
        let ctx = fixture.context(code, PageKind::Rules);
        let rules = ctx.record.rules_page.as_ref().unwrap();
        render(&ctx, rules).unwrap().into_string()
    }

    #[test]
    fn uses_rules_meta_and_canonical() {
        let fixture = SiteFixture::new(&[("en", FULL)]);
        let html = render_rules(&fixture, "en");
        assert!(html.contains("<title>Cluso Rules - Official Game Rules</title>"));
        assert!(html.contains(
            r#"<link rel="canonical" href="https://falsepeak.ch/cluso/en/rules.html">"#
        ));
    }

    #[test]
    fn phases_in_authored_order() {
        let fixture = SiteFixture::new(&[("en", FULL)]);
        let html = render_rules(&fixture, "en");
        let reveal = html.find("<h3>Secret Reveal</h3>").unwrap();
        let discuss = html.find("<h3>Discussion</h3>").unwrap();
        let vote = html.find("<h3>Voting</h3>").unwrap();
        assert!(reveal < discuss && discuss < vote);
    }

    #[test]
    fn requirements_and_roles_rendered() {
        let fixture = SiteFixture::new(&[("en", FULL)]);
        let html = render_rules(&fixture, "en");
        assert!(html.contains("<li>3 to 20 players</li>"));
        assert!(html.contains("<h4>The Impostor</h4>"));
        assert!(html.contains("<h4>The Innocents</h4>"));
    }

    #[test]
    fn hreflang_only_lists_languages_with_rules() {
        let fixture = SiteFixture::new(&[("en", FULL), ("de", MINIMAL)]);
        let html = render_rules(&fixture, "en");
        assert!(html.contains(r#"hreflang="en""#));
        assert!(!html.contains(r#"hreflang="de""#));
    }
}
