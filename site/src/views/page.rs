//! Database-backed content pages

use super::{attr, esc, layout, Seo};
use crate::blocks::{render_html, Fidelity};
use crate::database::Page;

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn header(page: &Page) -> String {
    let mut html = String::from(r#"<header class="hero">"#);

    if let Some(vertical) = present(page.vertical.as_deref()) {
        html.push_str(&format!(r#"<span class="badge">{}</span>"#, esc(vertical)));
    }
    html.push_str(&format!("<h1>{}</h1>", esc(&page.title)));
    if let Some(summary) = page.summary() {
        html.push_str(&format!("<p>{}</p>", esc(summary)));
    }

    let mut meta = Vec::new();
    if let Some(published_at) = page.published_at {
        meta.push(format!(
            r#"<time datetime="{}">{}</time>"#,
            published_at.to_rfc3339(),
            published_at.format("%B %-d, %Y")
        ));
    }
    if let Some(author) = present(page.author.as_deref()) {
        meta.push(format!("<span>{}</span>", esc(author)));
    }
    if let Some(page_type) = present(page.page_type.as_deref()) {
        meta.push(format!(r#"<span class="badge">{}</span>"#, esc(page_type)));
    }
    if !meta.is_empty() {
        html.push_str(&format!("<p>{}</p>", meta.join(" ")));
    }

    html.push_str("</header>");
    html
}

/// Full document for a published page
pub fn render(page: &Page) -> String {
    let mut body = header(page);

    if let Some(image) = present(page.featured_image.as_deref()) {
        body.push_str(&format!(
            r#"<div class="container"><img src="{}" alt="{}" style="width:100%;border-radius:10px"></div>"#,
            attr(image),
            attr(&page.title)
        ));
    }

    let blocks = page.blocks();
    let content = if blocks.is_empty() {
        r#"<p class="card">This page has no content yet.</p>"#.to_string()
    } else {
        render_html(&blocks, Fidelity::Page)
    };
    body.push_str(&format!(r#"<div class="container">{}</div>"#, content));

    let seo = Seo {
        title: page.seo_title(),
        description: page.meta_description.as_deref(),
        keywords: page.meta_keywords.as_deref(),
        image: page.og_image.as_deref(),
    };
    layout(&seo, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn page(content_blocks: &str) -> Page {
        let now = Utc::now();
        Page {
            id: "p1".into(),
            title: "Renewals <2026>".into(),
            path: "mortgage/renewal".into(),
            status: "published".into(),
            vertical: Some("Mortgage".into()),
            page_type: None,
            description: None,
            excerpt: Some("Renew with confidence".into()),
            author: Some("Editorial Team".into()),
            featured_image: None,
            seo_title: Some("Mortgage Renewals".into()),
            meta_description: None,
            meta_keywords: None,
            og_image: None,
            content_blocks: content_blocks.into(),
            published_at: Utc.with_ymd_and_hms(2026, 3, 5, 12, 0, 0).single(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_header_and_seo() {
        let html = render(&page("[]"));

        assert!(html.contains("<title>Mortgage Renewals</title>"));
        assert!(html.contains("<h1>Renewals &lt;2026&gt;</h1>"));
        assert!(html.contains("<p>Renew with confidence</p>"));
        assert!(html.contains("March 5, 2026"));
        assert!(html.contains("This page has no content yet."));
    }

    #[test]
    fn test_blocks_render_in_order() {
        let html = render(&page(
            r#"[{"id":"a","type":"hero","order":1,"content":{"heading":"Second"}},
                {"id":"b","type":"text","order":0,"content":{"html":"<p>First</p>"}}]"#,
        ));

        let first = html.find(r#"data-block-id="b""#).unwrap();
        let second = html.find(r#"data-block-id="a""#).unwrap();
        assert!(first < second);
        assert!(!html.contains("This page has no content yet."));
    }

    #[test]
    fn test_undecodable_blocks_show_empty_state() {
        let html = render(&page("{not json"));
        assert!(html.contains("This page has no content yet."));
    }
}
