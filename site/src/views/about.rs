//! About page

use super::{attr, esc, layout, section_heading, Seo};
use crate::content::fallback::IconCard;
use crate::content::AboutContent;

fn icon_cards(cards: &[IconCard]) -> String {
    cards
        .iter()
        .map(|card| {
            format!(
                r#"<div class="card"><div>{}</div><h3>{}</h3><p>{}</p></div>"#,
                esc(&card.icon),
                esc(&card.title),
                esc(&card.description)
            )
        })
        .collect()
}

fn grid_section(title: &str, subtitle: &str, cards: &[IconCard]) -> String {
    format!(
        r#"<section class="container">{}<div class="grid">{}</div></section>"#,
        section_heading(title, subtitle),
        icon_cards(cards)
    )
}

pub fn render(c: &AboutContent) -> String {
    let background = if c.hero_background_image.is_empty() {
        String::new()
    } else {
        format!(
            r#" style="background-image:url('{}')""#,
            attr(&c.hero_background_image)
        )
    };

    let hero = format!(
        r#"<section class="hero"{}><h1>{}</h1><p>{}</p><p><a class="btn" href="{}">{}</a></p></section>"#,
        background,
        esc(&c.hero_title),
        esc(&c.hero_subtitle),
        attr(&c.hero_cta_link),
        esc(&c.hero_cta_text)
    );

    let story = format!(
        r#"<section class="container">{}<p>{}</p><p>{}</p><p>{}</p></section>"#,
        section_heading(&c.story_title, &c.story_subtitle),
        esc(&c.story_paragraph1),
        esc(&c.story_paragraph2),
        esc(&c.story_paragraph3)
    );

    let stats: String = c
        .stats
        .iter()
        .map(|stat| {
            format!(
                r#"<div class="card"><strong>{}</strong><div>{}</div></div>"#,
                esc(&stat.value),
                esc(&stat.label)
            )
        })
        .collect();
    let stats = format!(
        r#"<section class="container"><h2>{}</h2><div class="grid">{}</div><blockquote><p>{}</p></blockquote></section>"#,
        esc(&c.stats_title),
        stats,
        esc(&c.quote_text)
    );

    let team: String = c
        .team_members
        .iter()
        .map(|member| {
            format!(
                r#"<div class="card"><h3>{}</h3><div class="badge">{}</div><p>{}</p><small>{}</small></div>"#,
                esc(&member.name),
                esc(&member.role),
                esc(&member.bio),
                esc(&member.credentials)
            )
        })
        .collect();
    let team = format!(
        r#"<section class="container">{}<div class="grid">{}</div></section>"#,
        section_heading(&c.team_title, &c.team_subtitle),
        team
    );

    let cta = format!(
        r#"<section class="hero"><h2>{}</h2><p>{}</p><p><a class="btn" href="{}">{}</a></p></section>"#,
        esc(&c.cta_title),
        esc(&c.cta_description),
        attr(&c.cta_button_link),
        esc(&c.cta_button_text)
    );

    let body = [
        hero,
        grid_section(
            &c.mission_vision_title,
            &c.mission_vision_subtitle,
            &c.mission_vision_cards,
        ),
        grid_section(
            &c.differentiators_title,
            &c.differentiators_subtitle,
            &c.differentiators,
        ),
        story,
        stats,
        team,
        grid_section(
            &c.compliance_title,
            &c.compliance_subtitle,
            &c.compliance_badges,
        ),
        cta,
    ]
    .join("\n");

    layout(&Seo::new(&c.meta_title, &c.meta_description), &body)
}
