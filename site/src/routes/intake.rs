//! Public intake API

use crate::app::AppState;
use crate::database::{ContactRequest, MortgageApplicationRequest};
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub async fn submit_contact(
    State(state): State<AppState>,
    Json(req): Json<ContactRequest>,
) -> Response {
    match state.intake.submit_contact(req).await {
        Ok(submission) => Json(json!({
            "success": true,
            "message": "Thank you for contacting us! We will get back to you soon.",
            "data": submission,
        }))
        .into_response(),
        Err(e) => e.write_failure("Failed to submit contact form"),
    }
}

pub async fn submit_application(
    State(state): State<AppState>,
    Json(req): Json<MortgageApplicationRequest>,
) -> Response {
    match state.intake.submit_application(req).await {
        Ok(application) => Json(json!({
            "success": true,
            "message": "Your mortgage application has been submitted successfully!",
            "data": {
                "application_id": application.id,
                "status": application.status,
            },
        }))
        .into_response(),
        Err(e) => e.write_failure("Failed to submit mortgage application"),
    }
}
