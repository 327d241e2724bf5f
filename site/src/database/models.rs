//! Database models
//!
//! Rust structs representing stored rows and the request shapes that
//! create or change them. Rows serialize straight to JSON responses.

use crate::blocks::{decode_blocks_str, Block};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use sqlx::FromRow;

// ===== Profiles =====

/// Applicant or staff profile linked to an auth-provider user
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Profile {
    pub id: String,
    /// Id of the account at the auth provider
    pub user_id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewProfile {
    pub user_id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub role: String,
}

// ===== Mortgage applications =====

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MortgageApplication {
    pub id: String,
    pub user_id: String,
    pub application_type: String,
    pub status: String,
    pub annual_income: Option<f64>,
    pub property_value: Option<f64>,
    pub down_payment: Option<f64>,
    pub credit_score: Option<i64>,
    pub employment_status: Option<String>,
    pub property_address: Option<String>,
    pub property_city: Option<String>,
    pub property_province: Option<String>,
    pub property_postal_code: Option<String>,
    pub notes: Option<String>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub approved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Application row with the applicant's profile fields joined in
#[derive(Debug, Clone, FromRow)]
pub struct ApplicationWithApplicant {
    #[sqlx(flatten)]
    pub application: MortgageApplication,
    pub applicant_first_name: Option<String>,
    pub applicant_last_name: Option<String>,
    pub applicant_email: Option<String>,
    pub applicant_phone: Option<String>,
}

/// Admin-facing application record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationView {
    pub id: String,
    pub applicant_name: String,
    pub applicant_email: String,
    pub applicant_phone: String,
    pub applicant_first_name: String,
    pub applicant_last_name: String,
    pub status: String,
    pub application_type: String,
    pub property_address: String,
    pub property_city: String,
    pub property_province: String,
    pub property_postal_code: String,
    pub property_value: Option<f64>,
    pub down_payment: Option<f64>,
    pub credit_score: Option<i64>,
    pub annual_income: Option<f64>,
    pub employment_status: Option<String>,
    pub notes: Option<String>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub approved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_id: String,
}

impl From<ApplicationWithApplicant> for ApplicationView {
    fn from(row: ApplicationWithApplicant) -> Self {
        let first = row.applicant_first_name.unwrap_or_default();
        let last = row.applicant_last_name.unwrap_or_default();
        let full = format!("{} {}", first, last).trim().to_string();
        let app = row.application;

        Self {
            id: app.id,
            applicant_name: if full.is_empty() {
                "Unknown".to_string()
            } else {
                full
            },
            applicant_email: row.applicant_email.unwrap_or_default(),
            applicant_phone: row.applicant_phone.unwrap_or_default(),
            applicant_first_name: first,
            applicant_last_name: last,
            status: app.status,
            application_type: app.application_type,
            property_address: app.property_address.unwrap_or_default(),
            property_city: app.property_city.unwrap_or_default(),
            property_province: app.property_province.unwrap_or_default(),
            property_postal_code: app.property_postal_code.unwrap_or_default(),
            property_value: app.property_value,
            down_payment: app.down_payment,
            credit_score: app.credit_score,
            annual_income: app.annual_income,
            employment_status: app.employment_status,
            notes: app.notes,
            submitted_at: app.submitted_at,
            approved_at: app.approved_at,
            created_at: app.created_at,
            updated_at: app.updated_at,
            user_id: app.user_id,
        }
    }
}

/// Normalized application ready to insert
#[derive(Debug, Clone, Default)]
pub struct NewApplication {
    pub user_id: String,
    pub application_type: String,
    pub annual_income: Option<f64>,
    pub property_value: Option<f64>,
    pub down_payment: Option<f64>,
    pub credit_score: Option<i64>,
    pub employment_status: Option<String>,
    pub property_address: Option<String>,
    pub property_city: Option<String>,
    pub property_province: Option<String>,
    pub property_postal_code: Option<String>,
}

/// Filter and window for the admin listing
#[derive(Debug, Clone, Default)]
pub struct ApplicationFilter {
    pub status: Option<String>,
    pub search: Option<String>,
    pub offset: i64,
    pub limit: i64,
}

/// Fields an admin update may change
#[derive(Debug, Clone, Default)]
pub struct ApplicationChanges {
    pub status: Option<String>,
    /// `Some(None)` clears the notes
    pub notes: Option<Option<String>>,
    pub approved_at: Option<DateTime<Utc>>,
}

impl ApplicationChanges {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.notes.is_none() && self.approved_at.is_none()
    }
}

/// Admin update request body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateApplicationRequest {
    pub id: Option<String>,
    pub status: Option<String>,
    /// Absent leaves notes alone; `null` clears them.
    #[serde(default, deserialize_with = "present")]
    pub notes: Option<Option<String>>,
}

/// Marks a field as present even when its value is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Public mortgage approval form body
///
/// Money fields arrive either as numbers or as free text with thousands
/// separators, so they stay loosely typed until intake parses them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MortgageApplicationRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub annual_income: Option<Value>,
    pub property_value: Option<Value>,
    pub down_payment_percentage: Option<Value>,
    pub credit_score_range: Option<String>,
    pub employment_type: Option<String>,
    pub mortgage_type: Option<String>,
    pub property_address: Option<String>,
    pub property_city: Option<String>,
    pub property_province: Option<String>,
    pub property_postal_code: Option<String>,
}

// ===== Contact submissions =====

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContactSubmission {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub form_type: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Public contact form body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

// ===== Pages =====

/// Content page with its block collection stored as encoded JSON
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Page {
    pub id: String,
    pub title: String,
    pub path: String,
    pub status: String,
    pub vertical: Option<String>,
    pub page_type: Option<String>,
    pub description: Option<String>,
    pub excerpt: Option<String>,
    pub author: Option<String>,
    pub featured_image: Option<String>,
    pub seo_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub og_image: Option<String>,
    pub content_blocks: String,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Page {
    /// Decoded blocks; an undecodable column yields an empty list.
    pub fn blocks(&self) -> Vec<Block> {
        decode_blocks_str(&self.content_blocks)
    }

    pub fn seo_title(&self) -> &str {
        self.seo_title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(&self.title)
    }

    /// Description, falling back to the excerpt
    pub fn summary(&self) -> Option<&str> {
        [self.description.as_deref(), self.excerpt.as_deref()]
            .into_iter()
            .flatten()
            .find(|text| !text.trim().is_empty())
    }
}

/// Create page request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePageRequest {
    pub title: String,
    pub path: String,
    pub vertical: Option<String>,
    pub page_type: Option<String>,
    pub description: Option<String>,
    pub excerpt: Option<String>,
    pub author: Option<String>,
    pub featured_image: Option<String>,
    pub seo_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub og_image: Option<String>,
}

/// Page without its block payload, for listings
#[derive(Debug, Clone, Serialize)]
pub struct PageSummary {
    pub id: String,
    pub title: String,
    pub path: String,
    pub status: String,
    pub block_count: usize,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Page> for PageSummary {
    fn from(page: &Page) -> Self {
        Self {
            id: page.id.clone(),
            title: page.title.clone(),
            path: page.path.clone(),
            status: page.status.clone(),
            block_count: page.blocks().len(),
            published_at: page.published_at,
            updated_at: page.updated_at,
        }
    }
}
