//! Lead and application intake
//!
//! Validates public form submissions, normalizes them, and writes them
//! through to storage. Nothing is written for a rejected submission.

use crate::config::{CREDIT_SCORE_BANDS, DEFAULT_APPLICATION_TYPE};
use crate::database::{
    ContactRequest, ContactSubmission, MortgageApplication, MortgageApplicationRequest,
    NewApplication, NewContact, NewProfile, Repository,
};
use crate::error::{AppError, Result};
use crate::services::auth::IdentityProvider;
use regex::Regex;
use serde_json::Value;
use std::sync::{Arc, OnceLock};

const APPLICANT_ROLE: &str = "client";

fn email_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok())
        .as_ref()
}

/// `local@domain.tld` shape check
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_some_and(|pattern| pattern.is_match(email))
}

/// Parse a free-form amount such as `"85,000"` or `85000`.
pub fn parse_amount(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.replace(',', "").trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

/// Parse a percentage such as `"10%"` or `10`.
pub fn parse_percentage(value: &Value) -> Option<f64> {
    match value {
        Value::String(s) => parse_amount(&Value::String(s.replace('%', ""))),
        other => parse_amount(other),
    }
}

/// Representative score for a credit band label
pub fn credit_score_for(band: &str) -> Option<i64> {
    CREDIT_SCORE_BANDS
        .iter()
        .find(|(label, _)| *label == band)
        .map(|(_, score)| *score)
}

/// Down payment amount from a percentage of the property value. A zero
/// percentage is a real answer; a zero property value is not.
pub fn down_payment_amount(property_value: Option<f64>, percentage: Option<f64>) -> Option<f64> {
    match (property_value, percentage) {
        (Some(value), Some(pct)) if value != 0.0 => Some(value * pct / 100.0),
        _ => None,
    }
}

/// Split a full name into first name and the rest.
pub fn split_name(full_name: &str) -> (String, String) {
    let mut parts = full_name.split(' ');
    let first = parts.next().unwrap_or_default().to_string();
    let rest = parts.collect::<Vec<_>>().join(" ");
    (first, rest)
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

fn optional(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

/// Service for public form submissions
#[derive(Clone)]
pub struct IntakeService {
    repo: Repository,
    identity: Arc<dyn IdentityProvider>,
}

impl IntakeService {
    pub fn new(repo: Repository, identity: Arc<dyn IdentityProvider>) -> Self {
        Self { repo, identity }
    }

    /// Record a contact message with status `new`.
    pub async fn submit_contact(&self, req: ContactRequest) -> Result<ContactSubmission> {
        let (Some(first_name), Some(last_name), Some(email), Some(message)) = (
            present(&req.first_name),
            present(&req.last_name),
            present(&req.email),
            present(&req.message),
        ) else {
            return Err(AppError::Validation("Missing required fields".to_string()));
        };

        if !is_valid_email(email) {
            return Err(AppError::Validation("Invalid email format".to_string()));
        }

        let contact = NewContact {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            phone: optional(req.phone.clone()),
            message: message.to_string(),
        };

        let submission = self.repo.create_contact(contact).await?;
        tracing::info!("Contact submission recorded: {}", submission.id);

        Ok(submission)
    }

    /// Record a mortgage application, provisioning an applicant account
    /// when the email is new.
    pub async fn submit_application(
        &self,
        req: MortgageApplicationRequest,
    ) -> Result<MortgageApplication> {
        let (Some(full_name), Some(email), Some(phone)) = (
            present(&req.full_name),
            present(&req.email),
            present(&req.phone),
        ) else {
            return Err(AppError::Validation(
                "Name, email, and phone are required".to_string(),
            ));
        };

        if !is_valid_email(email) {
            return Err(AppError::Validation("Invalid email format".to_string()));
        }

        let annual_income = req.annual_income.as_ref().and_then(parse_amount);
        let property_value = req.property_value.as_ref().and_then(parse_amount);
        let percentage = req.down_payment_percentage.as_ref().and_then(parse_percentage);
        let credit_score = req.credit_score_range.as_deref().and_then(credit_score_for);

        let user_id = self.resolve_applicant(full_name, email, phone).await?;

        let application_type = present(&req.mortgage_type)
            .map(str::to_lowercase)
            .unwrap_or_else(|| DEFAULT_APPLICATION_TYPE.to_string());

        let application = self
            .repo
            .create_application(NewApplication {
                user_id,
                application_type,
                annual_income,
                property_value,
                down_payment: down_payment_amount(property_value, percentage),
                credit_score,
                employment_status: optional(req.employment_type),
                property_address: optional(req.property_address),
                property_city: optional(req.property_city),
                property_province: optional(req.property_province),
                property_postal_code: optional(req.property_postal_code),
            })
            .await?;

        tracing::info!("Mortgage application submitted: {}", application.id);
        Ok(application)
    }

    /// User id for the applicant's email, creating the account and profile
    /// on first contact.
    async fn resolve_applicant(&self, full_name: &str, email: &str, phone: &str) -> Result<String> {
        if let Some(profile) = self.repo.find_profile_by_email(email).await? {
            tracing::debug!("Existing applicant profile for user {}", profile.user_id);
            return Ok(profile.user_id);
        }

        let user_id = self.identity.create_user(email).await.map_err(|e| {
            tracing::error!("Error creating auth user: {}", e);
            AppError::Upstream("Failed to create user account".to_string())
        })?;

        let (first_name, last_name) = split_name(full_name);
        self.repo
            .create_profile(NewProfile {
                user_id: user_id.clone(),
                email: email.to_string(),
                first_name: Some(first_name),
                last_name: Some(last_name),
                phone: Some(phone.to_string()),
                role: APPLICANT_ROLE.to_string(),
            })
            .await?;

        tracing::info!("Provisioned applicant account {}", user_id);
        Ok(user_id)
    }
}
