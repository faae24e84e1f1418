//! Blog index (`{lang}/blog/index.html`) and article pages (`{lang}/blog/{slug}.html`).
//!
//! Both live one directory below the language root, so every relative link
//! out of them goes through `../`.

use super::layout::{HeadMeta, cta_section, document};
use super::{PageContext, RenderError, schema};
use crate::translation::{Article, ArticleSection, Blog};
use maud::{Markup, html};

pub fn render_index(ctx: &PageContext<'_>, blog: &Blog) -> Result<Markup, RenderError> {
    let index = &blog.index;

    let mut structured = schema::site_wide(ctx);
    structured.push(schema::blog(ctx.config(), ctx.code(), blog));

    let content = html! {
        section.hero style="padding: 2rem 0 3rem;" {
            div.container {
                h1.hero-title { (index.hero.title) }
                p.hero-subtitle { (index.hero.subtitle) }
            }
        }
        section.blog-list {
            div.container {
                h2.section-title { (index.featured) }
                div.blog-grid {
                    @for (slug, post) in blog.articles.iter() {
                        article.blog-card {
                            a href={ "./" (slug) ".html" } {
                                h3.blog-card-title { (post.title) }
                            }
                            p.blog-date { (post.date) }
                            p.blog-excerpt { (post.intro) }
                        }
                    }
                }
            }
        }
        (cta_section(ctx, &ctx.record.cta))
    };

    document(ctx, HeadMeta::from(&index.meta), &structured, content)
}

pub fn render_article(
    ctx: &PageContext<'_>,
    slug: &str,
    article: &Article,
) -> Result<Markup, RenderError> {
    let mut structured = schema::site_wide(ctx);
    structured.push(schema::blog_posting(ctx.config(), ctx.code(), slug, article));

    let content = html! {
        article.blog-article {
            div.container {
                header.article-header {
                    a.back-link href="./" { "← " (ctx.record.nav.blog) }
                    h1.article-title { (article.title) }
                    p.blog-date { (article.date) }
                }
                p.article-intro { (article.intro) }
                @for section in &article.content {
                    (article_section(section))
                }
                p.article-conclusion { (article.conclusion) }
            }
        }
        (cta_section(ctx, &ctx.record.cta))
    };

    document(ctx, HeadMeta::from(&article.meta), &structured, content)
}

fn article_section(section: &ArticleSection) -> Markup {
    html! {
        section.article-section {
            h2 { (section.heading) }
            p { (section.text) }
            @if !section.steps.is_empty() {
                ol.article-steps {
                    @for step in &section.steps {
                        li { (step) }
                    }
                }
            }
        }
    }
}
