//! Home page

use super::{attr, esc, faq_list, layout, section_heading, Seo};
use crate::content::HomepageContent;

fn hero(c: &HomepageContent) -> String {
    let background = if c.hero_background_image.is_empty() {
        String::new()
    } else {
        format!(
            r#" style="background-image:url('{}')""#,
            attr(&c.hero_background_image)
        )
    };

    format!(
        r#"<section class="hero"{background}><h1>{title}</h1><p>{subtitle}</p>
<p><a class="btn" href="{cta_link}">{cta}</a> <a class="btn btn-outline" href="{secondary_link}">{secondary}</a></p></section>"#,
        background = background,
        title = esc(&c.hero_title),
        subtitle = esc(&c.hero_subtitle),
        cta_link = attr(&c.hero_cta_link),
        cta = esc(&c.hero_cta_text),
        secondary_link = attr(&c.hero_secondary_cta_link),
        secondary = esc(&c.hero_secondary_cta_text),
    )
}

fn how_it_works(c: &HomepageContent) -> String {
    let steps: String = c
        .how_it_works_steps
        .iter()
        .map(|step| {
            format!(
                r#"<div class="card"><span class="badge">{} {}</span><h3>{}</h3><p>{}</p></div>"#,
                esc(&step.step_icon),
                step.step_number,
                esc(&step.step_title),
                esc(&step.step_description)
            )
        })
        .collect();

    format!(
        r#"<section class="container">{}<div class="grid">{}</div></section>"#,
        section_heading(&c.how_it_works_title, &c.how_it_works_subtitle),
        steps
    )
}

fn why_choose(c: &HomepageContent) -> String {
    let cards: String = c
        .why_choose_cards
        .iter()
        .map(|card| {
            format!(
                r#"<div class="card"><div>{}</div><h3>{}</h3><p>{}</p></div>"#,
                esc(&card.card_icon),
                esc(&card.card_title),
                esc(&card.card_description)
            )
        })
        .collect();

    format!(
        r#"<section class="container">{}<div class="grid">{}</div></section>"#,
        section_heading(&c.why_choose_title, &c.why_choose_subtitle),
        cards
    )
}

fn services(c: &HomepageContent) -> String {
    let services: String = c
        .services
        .iter()
        .map(|service| {
            let features: String = service
                .service_features
                .iter()
                .map(|feature| format!("<li>{}</li>", esc(feature)))
                .collect();
            format!(
                r#"<div class="card"><div>{}</div><h3>{}</h3><p>{}</p><ul>{}</ul></div>"#,
                esc(&service.service_icon),
                esc(&service.service_title),
                esc(&service.service_description),
                features
            )
        })
        .collect();

    format!(
        r#"<section class="container">{}<div class="grid">{}</div></section>"#,
        section_heading(&c.services_title, &c.services_subtitle),
        services
    )
}

fn reviews(c: &HomepageContent) -> String {
    let reviews: String = c
        .reviews
        .iter()
        .map(|review| {
            format!(
                r#"<blockquote class="card"><div>{}</div><p>{}</p><cite>{}, {}</cite></blockquote>"#,
                "★".repeat(usize::from(review.review_rating.min(5))),
                esc(&review.review_text),
                esc(&review.review_author),
                esc(&review.review_location)
            )
        })
        .collect();

    let badges: String = c
        .trust_badges
        .iter()
        .map(|badge| {
            format!(
                r#"<span class="badge">{} {}</span> "#,
                esc(&badge.badge_icon),
                esc(&badge.badge_title)
            )
        })
        .collect();

    format!(
        r#"<section class="container">{}<div class="grid">{}</div><p>{}</p></section>"#,
        section_heading(&c.reviews_title, &c.reviews_subtitle),
        reviews,
        badges
    )
}

fn lenders(c: &HomepageContent) -> String {
    let lenders: String = c
        .lenders
        .iter()
        .map(|lender| format!(r#"<div class="card">{}</div>"#, esc(lender)))
        .collect();

    format!(
        r#"<section class="container">{}<div class="grid">{}</div></section>"#,
        section_heading(&c.lenders_title, &c.lenders_subtitle),
        lenders
    )
}

fn final_cta(c: &HomepageContent) -> String {
    format!(
        r#"<section class="hero"><span class="badge">{badge}</span><h2>{title}</h2><p>{subtitle}</p>
<p><a class="btn" href="{primary_link}">{primary}</a> <a class="btn btn-outline" href="{secondary_link}">{secondary}</a></p></section>"#,
        badge = esc(&c.final_cta_badge_text),
        title = esc(&c.final_cta_title),
        subtitle = esc(&c.final_cta_subtitle),
        primary_link = attr(&c.final_cta_primary_link),
        primary = esc(&c.final_cta_primary_text),
        secondary_link = attr(&c.final_cta_secondary_link),
        secondary = esc(&c.final_cta_secondary_text),
    )
}

pub fn render(content: &HomepageContent) -> String {
    let body = [
        hero(content),
        how_it_works(content),
        why_choose(content),
        services(content),
        reviews(content),
        lenders(content),
        format!(
            r#"<section class="container">{}{}</section>"#,
            section_heading(&content.faq_title, &content.faq_subtitle),
            faq_list(&content.faqs)
        ),
        final_cta(content),
    ]
    .join("\n");

    let seo = Seo::new(&content.meta_title, &content.meta_description);
    layout(&seo, &body)
}
