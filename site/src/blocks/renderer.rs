//! Block renderer
//!
//! Maps blocks to HTML fragments, one per block, in ascending `order`.
//! Rendering never fails: absent fields take a literal placeholder, absent
//! lists take a fixed-size placeholder list, unknown types fall back to a
//! title plus a dump of the raw content, and a block whose content has the
//! wrong shape degrades to that same fallback without touching its
//! neighbours.

use super::{sort_by_order, Block, BlockSettings, BlockType};
use crate::config::{
    PLACEHOLDER_AVATAR_URL, PLACEHOLDER_IMAGE_URL, PLACEHOLDER_LIST_LEN,
    PLACEHOLDER_TESTIMONIALS_LEN,
};
use html_escape::{encode_double_quoted_attribute, encode_text};
use serde_json::{Map, Value};
use thiserror::Error;

/// How much of the final page styling to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fidelity {
    /// Public page output
    Page,
    /// Builder preview: same content, lighter markup, no embeds
    Preview,
}

impl Fidelity {
    fn class(self) -> &'static str {
        match self {
            Fidelity::Page => "block--page",
            Fidelity::Preview => "block--preview",
        }
    }
}

/// One rendered block
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedBlock {
    pub id: String,
    pub block_type: BlockType,
    pub html: String,
    /// Set when the block's content could not be read and the generic
    /// fallback was used instead.
    pub degraded: bool,
}

#[derive(Debug, Error)]
#[error("`{field}` should be {expected}")]
struct ShapeError {
    field: String,
    expected: &'static str,
}

impl ShapeError {
    fn new(field: &str, expected: &'static str) -> Self {
        Self {
            field: field.to_string(),
            expected,
        }
    }
}

type Shape<T> = std::result::Result<T, ShapeError>;

/// Render a block collection in ascending `order` (stable for ties).
pub fn render_blocks(blocks: &[Block], fidelity: Fidelity) -> Vec<RenderedBlock> {
    let mut sorted = blocks.to_vec();
    sort_by_order(&mut sorted);
    sorted
        .iter()
        .map(|block| render_block(block, fidelity))
        .collect()
}

/// Render one block, isolating content-shape failures to this block.
pub fn render_block(block: &Block, fidelity: Fidelity) -> RenderedBlock {
    let (inner, degraded) = match render_known(block, fidelity) {
        Ok(Some(inner)) => (inner, false),
        Ok(None) => (render_fallback(block, fidelity), false),
        Err(e) => {
            tracing::warn!(
                "Block {} ({}) has malformed content, using fallback: {}",
                block.id,
                block.block_type,
                e
            );
            (render_fallback(block, fidelity), true)
        }
    };

    let default_alignment = match block.block_type {
        BlockType::Cta => "center",
        _ => "left",
    };

    let html = format!(
        r#"<section class="block block-{kind} {fidelity}" data-block-id="{id}"{style}>{inner}</section>"#,
        kind = attr(block.block_type.as_str()),
        fidelity = fidelity.class(),
        id = attr(&block.id),
        style = style_attr(block.settings.as_ref(), default_alignment),
        inner = inner,
    );

    RenderedBlock {
        id: block.id.clone(),
        block_type: block.block_type.clone(),
        html,
        degraded,
    }
}

/// Concatenate rendered blocks into a single fragment.
pub fn render_html(blocks: &[Block], fidelity: Fidelity) -> String {
    render_blocks(blocks, fidelity)
        .into_iter()
        .map(|rendered| rendered.html)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_known(block: &Block, fidelity: Fidelity) -> Shape<Option<String>> {
    let content = Fields::of(&block.content, "content")?;
    let title = block.title.as_deref().map(str::trim).filter(|t| !t.is_empty());

    let html = match &block.block_type {
        BlockType::Hero => hero(&content, title),
        BlockType::Text => text(&content, title, fidelity),
        BlockType::Cta => cta(&content, title),
        BlockType::Features => features(&content, title)?,
        BlockType::Cards => cards(&content, title)?,
        BlockType::Faq => faq(&content, title)?,
        BlockType::Testimonials => testimonials(&content, title)?,
        BlockType::Steps => steps(&content, title)?,
        BlockType::Video => video(&content, title, fidelity),
        BlockType::Image => image(&content, title)?,
        BlockType::Heading => heading(&content, title),
        BlockType::List => list(&content, title)?,
        BlockType::Quote => quote(&content),
        BlockType::Divider => r#"<hr class="block-divider">"#.to_string(),
        BlockType::Spacer => spacer(&content),
        BlockType::Unknown(_) => return Ok(None),
    };

    Ok(Some(html))
}

// ===== Per-type renderers =====

fn hero(content: &Fields, title: Option<&str>) -> String {
    let headline = content
        .text(&["headline", "title"])
        .or_else(|| title.map(str::to_string))
        .unwrap_or_else(|| "Hero Headline".to_string());
    let subtitle = content.text_or(&["subtitle"], "Hero subtitle text");
    let button_text = content.text_or(&["ctaText", "buttonText"], "Get Started");
    let button_link = content.text_or(&["ctaLink", "buttonLink"], "#");

    let mut html = format!(
        r#"<h1 class="hero-headline">{}</h1><p class="hero-subtitle">{}</p>"#,
        text_html(&headline),
        text_html(&subtitle)
    );
    if let Some(description) = content.text(&["description"]) {
        html.push_str(&format!(
            r#"<p class="hero-description">{}</p>"#,
            text_html(&description)
        ));
    }
    html.push_str(&button(&button_text, &button_link));
    html
}

fn text(content: &Fields, title: Option<&str>, fidelity: Fidelity) -> String {
    let mut html = String::new();

    let heading = content.text(&["heading"]).or_else(|| match fidelity {
        Fidelity::Page => title.map(str::to_string),
        Fidelity::Preview => None,
    });
    if let Some(heading) = heading {
        html.push_str(&format!("<h2>{}</h2>", text_html(&heading)));
    }

    if let Some(image_url) = content.text(&["imageUrl"]) {
        let float = match content.text(&["imagePosition"]).as_deref() {
            Some("left") => " float-left",
            Some("right") => " float-right",
            _ => "",
        };
        html.push_str(&format!(
            r#"<figure class="text-image{}"><img src="{}" alt="{}"></figure>"#,
            float,
            attr(&image_url),
            attr(title.unwrap_or("Content image"))
        ));
    }

    // Operator-authored markup, emitted as-is.
    let body = content.text_or(&["html", "body", "text"], "Text content");
    html.push_str(&format!(r#"<div class="prose">{}</div>"#, body));
    html
}

fn cta(content: &Fields, title: Option<&str>) -> String {
    let heading = content
        .text(&["heading"])
        .or_else(|| title.map(str::to_string))
        .unwrap_or_else(|| "Call to Action".to_string());
    let description = content.text_or(&["description"], "CTA description");
    let button_text = content.text_or(&["buttonText", "ctaText"], "Click Here");
    let button_link = content.text_or(&["buttonLink", "ctaLink"], "#");

    format!(
        r#"<h2 class="cta-heading">{}</h2><p class="cta-description">{}</p>{}"#,
        text_html(&heading),
        text_html(&description),
        button(&button_text, &button_link)
    )
}

fn features(content: &Fields, title: Option<&str>) -> Shape<String> {
    let mut html = section_heading(content, title);
    html.push_str(r#"<div class="grid grid-3">"#);
    for (idx, feature) in content.items(&["features"], PLACEHOLDER_LIST_LEN)?.iter().enumerate() {
        let n = idx + 1;
        html.push_str(&format!(
            r#"<div class="feature"><div class="feature-icon">{}</div><h3>{}</h3><p>{}</p></div>"#,
            text_html(&feature.text_or(&["icon"], "✨")),
            text_html(&feature.text_or(&["title"], &format!("Feature {}", n))),
            text_html(&feature.text_or(&["description"], "Feature description")),
        ));
    }
    html.push_str("</div>");
    Ok(html)
}

fn cards(content: &Fields, title: Option<&str>) -> Shape<String> {
    let mut html = section_heading(content, title);
    html.push_str(r#"<div class="grid grid-3">"#);
    for (idx, card) in content.items(&["cards"], PLACEHOLDER_LIST_LEN)?.iter().enumerate() {
        let card_title = card.text_or(&["title"], &format!("Card Title {}", idx + 1));
        html.push_str(r#"<div class="card">"#);
        if let Some(image) = card.text(&["image"]) {
            html.push_str(&format!(
                r#"<img src="{}" alt="{}">"#,
                attr(&image),
                attr(&card_title)
            ));
        }
        html.push_str(&format!(
            "<h3>{}</h3><p>{}</p>",
            text_html(&card_title),
            text_html(&card.text_or(&["description"], "Card description goes here"))
        ));
        if let Some(link) = card.text(&["link"]) {
            html.push_str(&format!(
                r#"<a class="card-link" href="{}">Learn More →</a>"#,
                attr(&link)
            ));
        }
        html.push_str("</div>");
    }
    html.push_str("</div>");
    Ok(html)
}

fn faq(content: &Fields, title: Option<&str>) -> Shape<String> {
    let mut html = section_heading(content, title);
    html.push_str(r#"<div class="faq-list">"#);
    for (idx, item) in content.items(&["faqs", "items"], PLACEHOLDER_LIST_LEN)?.iter().enumerate() {
        html.push_str(&format!(
            r#"<details class="faq-item"><summary>{}</summary><p>{}</p></details>"#,
            text_html(&item.text_or(&["question"], &format!("Question {}?", idx + 1))),
            text_html(&item.text_or(&["answer"], "This is a sample answer")),
        ));
    }
    html.push_str("</div>");
    Ok(html)
}

fn testimonials(content: &Fields, title: Option<&str>) -> Shape<String> {
    let mut html = section_heading(content, title);
    html.push_str(r#"<div class="grid grid-2">"#);
    for testimonial in content
        .items(&["testimonials"], PLACEHOLDER_TESTIMONIALS_LEN)?
        .iter()
    {
        let author = testimonial.text_or(&["author"], "Anonymous");
        html.push_str(&format!(
            r#"<figure class="testimonial"><img class="avatar" src="{}" alt="{}"><blockquote>"{}"</blockquote><figcaption><strong>{}</strong> <span>{}</span></figcaption></figure>"#,
            attr(&testimonial.text_or(&["avatar"], PLACEHOLDER_AVATAR_URL)),
            attr(&author),
            text_html(&testimonial.text_or(&["quote"], "This is a testimonial quote")),
            text_html(&author),
            text_html(&testimonial.text_or(&["role"], "Customer")),
        ));
    }
    html.push_str("</div>");
    Ok(html)
}

fn steps(content: &Fields, title: Option<&str>) -> Shape<String> {
    let mut html = section_heading(content, title);
    html.push_str(r#"<ol class="steps">"#);
    for (idx, step) in content.items(&["steps"], PLACEHOLDER_LIST_LEN)?.iter().enumerate() {
        let n = idx + 1;
        html.push_str(&format!(
            r#"<li class="step"><span class="step-number">{}</span><div><h3>{}</h3><p>{}</p></div></li>"#,
            text_html(&step.text_or(&["number"], &n.to_string())),
            text_html(&step.text_or(&["title"], &format!("Step {}", n))),
            text_html(&step.text_or(&["description"], "Step description")),
        ));
    }
    html.push_str("</ol>");
    Ok(html)
}

fn video(content: &Fields, title: Option<&str>, fidelity: Fidelity) -> String {
    let mut html = String::new();
    if let Some(title) = title {
        html.push_str(&format!("<h3>{}</h3>", text_html(title)));
    }

    let url = content.text(&["videoUrl", "url"]);
    match (fidelity, url) {
        (Fidelity::Page, Some(url)) => html.push_str(&format!(
            r#"<div class="aspect-video"><iframe src="{}" title="{}" allowfullscreen></iframe></div>"#,
            attr(&url),
            attr(title.unwrap_or("Video"))
        )),
        (_, url) => html.push_str(&format!(
            r#"<div class="video-placeholder"><span>🎥</span><p>Video: {}</p></div>"#,
            text_html(url.as_deref().unwrap_or("No URL"))
        )),
    }

    if let Some(caption) = content.text(&["caption"]) {
        html.push_str(&format!(r#"<p class="caption">{}</p>"#, text_html(&caption)));
    }
    html
}

fn image(content: &Fields, title: Option<&str>) -> Shape<String> {
    let mut html = String::new();
    if let Some(title) = title {
        html.push_str(&format!("<h3>{}</h3>", text_html(title)));
    }

    // Single-image form: `url`, `alt`, `caption` at the top level.
    if let (Some(url), None) = (content.text(&["url"]), content.get("images")) {
        html.push_str(&format!(
            r#"<figure><img src="{}" alt="{}">"#,
            attr(&url),
            attr(&content.text_or(&["alt"], title.unwrap_or("Image")))
        ));
        if let Some(caption) = content.text(&["caption"]) {
            html.push_str(&format!("<figcaption>{}</figcaption>", text_html(&caption)));
        }
        html.push_str("</figure>");
        return Ok(html);
    }

    html.push_str(r#"<div class="grid grid-3 gallery">"#);
    for (idx, img) in content.items(&["images"], PLACEHOLDER_LIST_LEN)?.iter().enumerate() {
        html.push_str(&format!(
            r#"<img src="{}" alt="{}">"#,
            attr(&img.text_or(&["url"], PLACEHOLDER_IMAGE_URL)),
            attr(&img.text_or(&["alt"], &format!("Image {}", idx + 1))),
        ));
    }
    html.push_str("</div>");
    Ok(html)
}

fn heading(content: &Fields, title: Option<&str>) -> String {
    let main = title
        .map(str::to_string)
        .or_else(|| content.text(&["text"]))
        .unwrap_or_else(|| "Heading".to_string());
    let mut html = format!("<h2>{}</h2>", text_html(&main));
    if title.is_some() {
        if let Some(sub) = content.text(&["text"]) {
            html.push_str(&format!(r#"<h3 class="subheading">{}</h3>"#, text_html(&sub)));
        }
    }
    html
}

fn list(content: &Fields, title: Option<&str>) -> Shape<String> {
    let mut html = String::new();
    if let Some(title) = title {
        html.push_str(&format!("<h3>{}</h3>", text_html(title)));
    }

    html.push_str("<ul>");
    match content.raw_list(&["items"])? {
        Some(items) => {
            for item in items {
                let text = scalar_text(item).ok_or_else(|| ShapeError::new("items", "a list of strings"))?;
                html.push_str(&format!("<li>{}</li>", text_html(&text)));
            }
        }
        None => {
            for n in 1..=PLACEHOLDER_LIST_LEN {
                html.push_str(&format!("<li>List item {}</li>", n));
            }
        }
    }
    html.push_str("</ul>");
    Ok(html)
}

fn quote(content: &Fields) -> String {
    let mut html = format!(
        r#"<blockquote class="quote">"{}"</blockquote>"#,
        text_html(&content.text_or(&["text", "quote"], "Quote text"))
    );
    if let Some(author) = content.text(&["author"]) {
        html.push_str(&format!(r#"<p class="quote-author">— {}</p>"#, text_html(&author)));
    }
    html
}

fn spacer(content: &Fields) -> String {
    let height = content
        .text(&["height"])
        .map(|h| css_value(&h))
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| "2rem".to_string());
    format!(r#"<div class="spacer" style="height:{}"></div>"#, attr(&height))
}

/// Generic output for unknown types and unreadable content
fn render_fallback(block: &Block, fidelity: Fidelity) -> String {
    let mut html = String::new();
    if fidelity == Fidelity::Preview {
        html.push_str(&format!(
            r#"<p class="preview-note">Preview not available for {} block</p>"#,
            text_html(block.block_type.as_str())
        ));
    }
    if let Some(title) = block.title.as_deref().filter(|t| !t.trim().is_empty()) {
        html.push_str(&format!("<h3>{}</h3>", text_html(title)));
    }
    let dump = serde_json::to_string_pretty(&block.content).unwrap_or_else(|_| "null".to_string());
    html.push_str(&format!(r#"<pre class="raw-content">{}</pre>"#, text_html(&dump)));
    html
}

// ===== Shared pieces =====

fn section_heading(content: &Fields, title: Option<&str>) -> String {
    match title.map(str::to_string).or_else(|| content.text(&["heading"])) {
        Some(heading) => format!(r#"<h2 class="section-heading">{}</h2>"#, text_html(&heading)),
        None => String::new(),
    }
}

fn button(text: &str, link: &str) -> String {
    format!(
        r#"<a class="button" href="{}">{}</a>"#,
        attr(link),
        text_html(text)
    )
}

fn style_attr(settings: Option<&BlockSettings>, default_alignment: &str) -> String {
    let mut rules = Vec::new();
    let settings = settings.cloned().unwrap_or_default();

    if let Some(color) = settings.background_color.as_deref().map(css_value) {
        if !color.is_empty() {
            rules.push(format!("background-color:{}", color));
        }
    }
    if let Some(padding) = settings.padding.as_deref().map(css_value) {
        if !padding.is_empty() {
            rules.push(format!("padding:{}", padding));
        }
    }
    let alignment = match settings.alignment.as_deref() {
        Some(a @ ("left" | "center" | "right" | "justify")) => a,
        _ => default_alignment,
    };
    rules.push(format!("text-align:{}", alignment));

    format!(r#" style="{}""#, attr(&rules.join(";")))
}

/// Drop characters that could end a declaration or the attribute.
fn css_value(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, ';' | '{' | '}' | '"' | '\'' | '<' | '>' | '\\'))
        .collect::<String>()
        .trim()
        .to_string()
}

fn text_html(s: &str) -> String {
    encode_text(s).into_owned()
}

fn attr(s: &str) -> String {
    encode_double_quoted_attribute(s).into_owned()
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Read-only view over an object-shaped payload. Null reads as empty.
struct Fields<'a> {
    map: Option<&'a Map<String, Value>>,
}

impl<'a> Fields<'a> {
    fn of(value: &'a Value, field: &str) -> Shape<Self> {
        match value {
            Value::Object(map) => Ok(Fields { map: Some(map) }),
            Value::Null => Ok(Fields { map: None }),
            _ => Err(ShapeError::new(field, "an object")),
        }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.and_then(|map| map.get(key))
    }

    /// First non-blank scalar among `keys`
    fn text(&self, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| self.get(key).and_then(scalar_text))
    }

    fn text_or(&self, keys: &[&str], default: &str) -> String {
        self.text(keys).unwrap_or_else(|| default.to_string())
    }

    /// First non-empty array among `keys`; absent, null and empty all read
    /// as `None`, anything else is a shape error.
    fn raw_list(&self, keys: &[&str]) -> Shape<Option<&'a [Value]>> {
        for key in keys {
            match self.get(key) {
                None | Some(Value::Null) => continue,
                Some(Value::Array(items)) if items.is_empty() => continue,
                Some(Value::Array(items)) => return Ok(Some(items.as_slice())),
                Some(_) => return Err(ShapeError::new(key, "a list")),
            }
        }
        Ok(None)
    }

    /// Object items of the first list among `keys`, or `placeholders`
    /// empty entries when there is none.
    fn items(&self, keys: &[&str], placeholders: usize) -> Shape<Vec<Fields<'a>>> {
        match self.raw_list(keys)? {
            Some(items) => items
                .iter()
                .map(|item| Fields::of(item, keys[0]))
                .collect(),
            None => Ok((0..placeholders).map(|_| Fields { map: None }).collect()),
        }
    }
}
