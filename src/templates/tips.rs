//! Strategy tips (`{lang}/tips.html`), rendered only when the record has `tipsPage`.

use super::layout::{HeadMeta, cta_section, document, sub_page_hero};
use super::{PageContext, RenderError, schema};
use crate::translation::{TipGroup, TipsPage};
use maud::{Markup, html};

pub fn render(ctx: &PageContext<'_>, tips: &TipsPage) -> Result<Markup, RenderError> {
    let content = html! {
        (sub_page_hero(&tips.hero))
        (tip_group(&tips.for_innocents))
        (tip_group(&tips.for_impostors))
        (cta_section(ctx, &tips.cta))
    };
    document(ctx, HeadMeta::from(&tips.meta), &schema::site_wide(ctx), content)
}

fn tip_group(group: &TipGroup) -> Markup {
    html! {
        section.guide-section {
            div.container {
                h2.section-title { (group.title) }
                p { (group.intro) }
                @for tip in &group.tips {
                    div.tip {
                        h3 { (tip.title) }
                        p { (tip.description) }
                    }
                }
            }
        }
    }
}
