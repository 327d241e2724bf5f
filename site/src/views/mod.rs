//! Server-rendered HTML views
//!
//! Every page goes through [`layout`], which owns the document shell, the
//! SEO head tags and the site navigation. Views take already-merged content
//! records and never fail.

pub mod about;
pub mod home;
pub mod mortgage;
pub mod page;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use html_escape::{encode_double_quoted_attribute, encode_text};

const SITE_NAME: &str = "approvU Mortgage";

const NAV: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/about", "About"),
    ("/mortgage", "Mortgage"),
    ("/mortgage/rates", "Rates"),
    ("/mortgage/approval", "Get Approved"),
];

const STYLE: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:system-ui,-apple-system,'Segoe UI',sans-serif;color:#1f2937;line-height:1.6}
a{color:#0f766e}
.nav{display:flex;gap:1.5rem;align-items:center;padding:1rem 2rem;border-bottom:1px solid #e5e7eb}
.nav .brand{font-weight:700;color:#111827;text-decoration:none;margin-right:auto}
.container{max-width:1100px;margin:0 auto;padding:2rem 1.5rem}
.hero{padding:4rem 1.5rem;text-align:center;background:#f0fdfa;background-size:cover;background-position:center}
.hero h1{font-size:2.4rem;margin-bottom:1rem}
.grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(240px,1fr));gap:1.25rem}
.card{border:1px solid #e5e7eb;border-radius:10px;padding:1.25rem}
.btn{display:inline-block;padding:.7rem 1.4rem;border-radius:8px;background:#0f766e;color:#fff;text-decoration:none}
.btn-outline{background:transparent;color:#0f766e;border:1px solid #0f766e}
.badge{display:inline-block;padding:.15rem .6rem;border-radius:999px;background:#ccfbf1;font-size:.8rem}
table{width:100%;border-collapse:collapse}th,td{padding:.6rem;border-bottom:1px solid #e5e7eb;text-align:left}
form .field{margin-bottom:1rem}form label{display:block;font-size:.9rem;margin-bottom:.25rem}
input,select,textarea{width:100%;padding:.55rem;border:1px solid #d1d5db;border-radius:6px}
footer{padding:2rem;text-align:center;color:#6b7280;font-size:.85rem;border-top:1px solid #e5e7eb}
"#;

/// Text-node escape
pub fn esc(text: &str) -> String {
    encode_text(text).into_owned()
}

/// Double-quoted attribute escape
pub fn attr(text: &str) -> String {
    encode_double_quoted_attribute(text).into_owned()
}

/// Title and meta description for a page's `<head>`
#[derive(Debug, Clone)]
pub struct Seo<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub keywords: Option<&'a str>,
    pub image: Option<&'a str>,
}

impl<'a> Seo<'a> {
    pub fn new(title: &'a str, description: &'a str) -> Self {
        Self {
            title,
            description: Some(description),
            keywords: None,
            image: None,
        }
    }
}

fn meta_tags(seo: &Seo<'_>) -> String {
    let mut tags = Vec::new();
    let present = |value: Option<&str>| value.map(str::trim).filter(|v| !v.is_empty()).map(attr);

    if let Some(description) = present(seo.description) {
        tags.push(format!(r#"<meta name="description" content="{}">"#, description));
        tags.push(format!(r#"<meta property="og:description" content="{}">"#, description));
    }
    if let Some(keywords) = present(seo.keywords) {
        tags.push(format!(r#"<meta name="keywords" content="{}">"#, keywords));
    }
    if let Some(image) = present(seo.image) {
        tags.push(format!(r#"<meta property="og:image" content="{}">"#, image));
    }
    tags.push(format!(r#"<meta property="og:title" content="{}">"#, attr(seo.title)));
    tags.join("\n")
}

fn nav() -> String {
    let links: String = NAV
        .iter()
        .map(|(href, label)| format!(r#"<a href="{}">{}</a>"#, href, label))
        .collect();
    format!(
        r#"<nav class="nav"><a class="brand" href="/">{}</a>{}</nav>"#,
        SITE_NAME, links
    )
}

/// Full HTML document around `body`
pub fn layout(seo: &Seo<'_>, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
{meta}
<style>{style}</style>
</head>
<body>
{nav}
<main>
{body}
</main>
<footer>&copy; {site}. Licensed mortgage brokerage.</footer>
</body>
</html>"#,
        title = esc(seo.title),
        meta = meta_tags(seo),
        style = STYLE,
        nav = nav(),
        body = body,
        site = SITE_NAME,
    )
}

/// 404 page
pub fn not_found() -> Response {
    let body = r#"<section class="container"><h1>Page not found</h1><p>The page you are looking for does not exist or is no longer published.</p><p><a class="btn" href="/">Back to home</a></p></section>"#;
    let seo = Seo {
        title: "Page not found",
        description: None,
        keywords: None,
        image: None,
    };
    (StatusCode::NOT_FOUND, Html(layout(&seo, body))).into_response()
}

/// `<h2>` plus optional subtitle heading a section
pub(crate) fn section_heading(title: &str, subtitle: &str) -> String {
    let subtitle = if subtitle.trim().is_empty() {
        String::new()
    } else {
        format!("<p>{}</p>", esc(subtitle))
    };
    format!("<h2>{}</h2>{}", esc(title), subtitle)
}

pub(crate) fn faq_list(faqs: &[crate::content::fallback::Faq]) -> String {
    faqs.iter()
        .map(|faq| {
            format!(
                "<details class=\"card\"><summary>{}</summary><p>{}</p></details>",
                esc(&faq.question),
                esc(&faq.answer)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_escapes_title_and_meta() {
        let seo = Seo::new("Rates <today>", "Compare \"fixed\" & variable");
        let html = layout(&seo, "<p>body</p>");

        assert!(html.contains("<title>Rates &lt;today&gt;</title>"));
        assert!(html.contains(r#"content="Compare &quot;fixed&quot; &amp; variable""#));
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn test_blank_description_omitted() {
        let seo = Seo::new("Home", "  ");
        assert!(!layout(&seo, "").contains(r#"name="description""#));
    }
}
