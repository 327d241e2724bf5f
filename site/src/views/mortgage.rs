//! Mortgage section: hub, rates and the online approval form

use super::{attr, esc, faq_list, layout, section_heading, Seo};
use crate::config::CREDIT_SCORE_BANDS;
use crate::content::fallback::HubSection;
use crate::content::{ApprovalPageContent, MortgageHubContent, MortgageSolutionsContent};

const PROVINCES: &[&str] = &[
    "Ontario",
    "British Columbia",
    "Alberta",
    "Quebec",
    "Manitoba",
    "Saskatchewan",
    "Nova Scotia",
    "New Brunswick",
];

const DOWN_PAYMENT_OPTIONS: &[(&str, &str)] = &[
    ("5%", "5% - 9%"),
    ("10%", "10% - 14%"),
    ("15%", "15% - 19%"),
    ("20%", "20% or more"),
];

const EMPLOYMENT_TYPES: &[&str] = &[
    "Full-time employed",
    "Part-time employed",
    "Self-employed",
    "Contract/Freelance",
];

const MORTGAGE_TYPES: &[&str] = &["Purchase", "Refinance", "Renewal"];

/// Submits the approval form as JSON and shows the outcome inline.
const APPROVAL_SCRIPT: &str = r#"
document.getElementById('approval-form').addEventListener('submit', async (event) => {
  event.preventDefault();
  const form = event.target;
  const status = document.getElementById('approval-status');
  const data = Object.fromEntries(new FormData(form).entries());
  try {
    const response = await fetch('/api/mortgage-application', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(data),
    });
    const result = await response.json();
    if (!response.ok) throw new Error(result.error || 'Failed to submit application');
    status.textContent = result.message;
    form.reset();
  } catch (err) {
    status.textContent = err.message;
  }
});
"#;

/// URL slug for a province name
pub fn province_slug(province: &str) -> String {
    province
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// Linked cards for hub pages
fn card_grid(sections: &[HubSection]) -> String {
    let cards: String = sections
        .iter()
        .map(|section| {
            format!(
                r#"<a class="card" href="{}"><h3>{}</h3><p>{}</p></a>"#,
                attr(&section.href),
                esc(&section.title),
                esc(&section.description)
            )
        })
        .collect();
    format!(r#"<div class="grid">{}</div>"#, cards)
}

pub fn hub(c: &MortgageHubContent) -> String {
    let sections = card_grid(&c.sections);

    let body = format!(
        r#"<section class="hero"><h1>{}</h1><p>{}</p></section>
<section class="container">{}</section>
<section class="container"><h2>Frequently Asked Questions</h2>{}</section>"#,
        esc(&c.hero_title),
        esc(&c.hero_subtitle),
        sections,
        faq_list(&c.faqs)
    );

    layout(&Seo::new(&c.meta_title, &c.meta_description), &body)
}

/// Solutions hub: intro, program highlights, then the program pages
pub fn solutions(c: &MortgageSolutionsContent) -> String {
    let background = if c.hero_background_image.is_empty() {
        String::new()
    } else {
        format!(
            r#" style="background-image:url('{}')""#,
            attr(&c.hero_background_image)
        )
    };

    let intro: String = c
        .intro_paragraphs
        .iter()
        .map(|paragraph| format!("<p>{}</p>", esc(paragraph)))
        .collect();

    let highlights: String = c
        .highlights
        .iter()
        .map(|card| {
            format!(
                r#"<div class="card"><h3>{} {}</h3><p>{}</p></div>"#,
                esc(&card.icon),
                esc(&card.title),
                esc(&card.description)
            )
        })
        .collect();

    let body = format!(
        r#"<nav class="breadcrumbs"><a href="/">Home</a> &rsaquo; <a href="/mortgage">Mortgage</a> &rsaquo; <span>Solutions</span></nav>
<section class="hero"{background}><h1>{title}</h1><p>{subtitle}</p>
<p><a class="btn" href="{cta_link}">{cta}</a> <a class="btn btn-outline" href="{secondary_link}">{secondary}</a></p></section>
<section class="container"><h2>{intro_title}</h2>{intro}<div class="grid">{highlights}</div></section>
<section class="container"><h2>{programs_title}</h2>{programs}</section>
<section class="container"><h2>Frequently Asked Questions</h2>{faqs}</section>
<section class="cta">{final_heading}<p><a class="btn" href="{final_link}">{final_button}</a></p></section>"#,
        background = background,
        title = esc(&c.hero_title),
        subtitle = esc(&c.hero_subtitle),
        cta_link = attr(&c.hero_cta_link),
        cta = esc(&c.hero_cta_text),
        secondary_link = attr(&c.hero_secondary_cta_link),
        secondary = esc(&c.hero_secondary_cta_text),
        intro_title = esc(&c.intro_title),
        intro = intro,
        highlights = highlights,
        programs_title = esc(&c.programs_title),
        programs = card_grid(&c.programs),
        faqs = faq_list(&c.faqs),
        final_heading = section_heading(&c.final_cta_title, &c.final_cta_subtitle),
        final_link = attr(&c.final_cta_button_link),
        final_button = esc(&c.final_cta_button_text),
    );

    layout(&Seo::new(&c.meta_title, &c.meta_description), &body)
}

pub fn rates() -> String {
    let provinces: String = PROVINCES
        .iter()
        .map(|province| {
            format!(
                r#"<a class="card" href="/mortgage/rates/{}"><h3>{}</h3><span>View Rates &rarr;</span></a>"#,
                province_slug(province),
                province
            )
        })
        .collect();

    let body = format!(
        r#"<section class="hero"><h1>Compare the Best Mortgage Rates in Canada</h1>
<p>Find competitive rates from top lenders across all provinces. Compare fixed, variable, and specialty mortgage rates tailored to your needs.</p>
<p><a class="btn" href="/mortgage/approval">Get Your Free Quote</a></p></section>
<section class="container">
<h2>Find Your Best Mortgage Rate</h2>
<p>Finding the right mortgage rate can save you thousands over the life of your loan. We help Canadians compare rates from over 30 lenders to find the best deal for their situation.</p>
<div class="grid">
<div class="card"><h3>Fixed Rates</h3><a href="/mortgage/rates/fixed">View All Fixed Rates &rarr;</a></div>
<div class="card"><h3>Variable Rates</h3><a href="/mortgage/rates/variable">View All Variable Rates &rarr;</a></div>
</div>
<h2>Rates by Province</h2>
<div class="grid">{}</div>
</section>"#,
        provinces
    );

    let seo = Seo::new(
        "Mortgage Rates Canada",
        "Current mortgage rates across Canada. Compare fixed and variable rates by province.",
    );
    layout(&seo, &body)
}

fn select(name: &str, label: &str, placeholder: &str, options: &[(&str, &str)]) -> String {
    let options: String = options
        .iter()
        .map(|(value, text)| format!(r#"<option value="{}">{}</option>"#, attr(value), esc(text)))
        .collect();
    format!(
        r#"<div class="field"><label for="{name}">{label}</label><select id="{name}" name="{name}"><option value="">{placeholder}</option>{options}</select></div>"#,
        name = name,
        label = label,
        placeholder = placeholder,
        options = options
    )
}

fn input(name: &str, label: &str, kind: &str, required: bool) -> String {
    format!(
        r#"<div class="field"><label for="{name}">{label}</label><input id="{name}" name="{name}" type="{kind}"{required}></div>"#,
        name = name,
        label = label,
        kind = kind,
        required = if required { " required" } else { "" }
    )
}

fn approval_form() -> String {
    let credit: Vec<(&str, &str)> = CREDIT_SCORE_BANDS
        .iter()
        .map(|(band, _)| (*band, *band))
        .collect();
    let employment: Vec<(&str, &str)> = EMPLOYMENT_TYPES.iter().map(|t| (*t, *t)).collect();
    let mortgage_types: String = MORTGAGE_TYPES
        .iter()
        .map(|t| {
            format!(
                r#"<label><input type="radio" name="mortgage_type" value="{0}"> {0}</label>"#,
                t
            )
        })
        .collect();

    [
        r#"<form id="approval-form" class="card">"#.to_string(),
        input("full_name", "Full Name", "text", true),
        input("email", "Email", "email", true),
        input("phone", "Phone", "tel", true),
        input("annual_income", "Annual Income", "text", false),
        input("property_value", "Property Value", "text", false),
        select(
            "down_payment_percentage",
            "Down Payment",
            "Select down payment",
            DOWN_PAYMENT_OPTIONS,
        ),
        select(
            "employment_type",
            "Employment Type",
            "Select employment type",
            &employment,
        ),
        select(
            "credit_score_range",
            "Credit Score Range",
            "Select credit range",
            &credit,
        ),
        format!(
            r#"<div class="field"><label>Mortgage Type</label>{}</div>"#,
            mortgage_types
        ),
        r#"<button class="btn" type="submit">Get My Approval</button><p id="approval-status" role="status"></p></form>"#
            .to_string(),
    ]
    .concat()
}

pub fn approval(c: &ApprovalPageContent) -> String {
    let body = format!(
        r#"<section class="hero"><h1>{}</h1><p>{}</p></section>
<section class="container">{}</section>
<script>{}</script>"#,
        esc(&c.hero_title),
        esc(&c.hero_subtitle),
        approval_form(),
        APPROVAL_SCRIPT
    );

    layout(&Seo::new(&c.meta_title, &c.meta_description), &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PageContent;

    #[test]
    fn test_province_slug() {
        assert_eq!(province_slug("British Columbia"), "british-columbia");
        assert_eq!(province_slug("Ontario"), "ontario");
    }

    #[test]
    fn test_solutions_lists_every_program() {
        let content = MortgageSolutionsContent::fallback();
        let html = solutions(&content);

        assert_eq!(content.programs.len(), 8);
        for program in &content.programs {
            assert!(html.contains(&format!(r#"href="{}""#, attr(&program.href))));
        }
        assert!(html.contains("Specialized Mortgage Programs"));
        assert!(html.contains("background-image:url('/images/hero/hero-family-home.jpg')"));
    }

    #[test]
    fn test_approval_form_offers_every_credit_band() {
        let html = approval(&ApprovalPageContent::fallback());
        for (band, _) in CREDIT_SCORE_BANDS {
            assert!(html.contains(&format!(r#"<option value="{}">"#, attr(band))));
        }
        assert!(html.contains(r#"name="full_name""#));
    }
}
