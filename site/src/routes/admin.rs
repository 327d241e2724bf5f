//! Admin API
//!
//! [`require_admin`] guards every route here and runs before any extractor
//! reads the request, so a caller without admin identity is turned away
//! whatever the body holds. Read failures answer with the error's own
//! status; write failures also carry the failure detail.

use super::bearer_token;
use crate::app::AppState;
use crate::blocks::{
    decode_submitted_blocks, BlockTemplate, BuilderError, ContentBuilder, Notice, NoticeKind,
};
use crate::database::{CreatePageRequest, UpdateApplicationRequest};
use crate::error::{AppError, Result};
use crate::services::applications::ListQuery;
use crate::services::PageBlockStore;
use axum::extract::{Path, Query, Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    pub id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PageListQuery {
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusBody {
    pub status: String,
}

/// Admin gate layered over the whole admin router
pub async fn require_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let outcome = state.auth.require_admin(bearer_token(request.headers())).await;
    match outcome {
        Ok(identity) => {
            tracing::debug!("Admin request by {}", identity.user_id);
            next.run(request).await
        }
        Err(e) => e.into_response(),
    }
}

// ===== Applications =====

pub async fn list_applications(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Value>> {
    let page = state.applications.list(&query).await?;
    Ok(Json(serde_json::to_value(page)?))
}

pub async fn get_application(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let application = state.applications.get(&id).await?;
    Ok(Json(json!({ "application": application })))
}

pub async fn update_application(
    State(state): State<AppState>,
    Json(req): Json<UpdateApplicationRequest>,
) -> Response {

    match state.applications.update(req).await {
        Ok(application) => Json(json!({
            "success": true,
            "message": "Application updated successfully",
            "application": application,
        }))
        .into_response(),
        Err(e) => e.write_failure("Failed to update application"),
    }
}

pub async fn delete_application(
    State(state): State<AppState>,
    Query(query): Query<DeleteQuery>,
) -> Response {

    match state.applications.delete(query.id.as_deref()).await {
        Ok(()) => Json(json!({
            "success": true,
            "message": "Application deleted successfully",
        }))
        .into_response(),
        Err(e) => e.write_failure("Failed to delete application"),
    }
}

// ===== Pages =====

pub async fn list_pages(
    State(state): State<AppState>,
    Query(query): Query<PageListQuery>,
) -> Result<Json<Value>> {
    let pages = state.pages.list(query.status.as_deref()).await?;
    Ok(Json(json!({ "pages": pages })))
}

pub async fn create_page(
    State(state): State<AppState>,
    Json(req): Json<CreatePageRequest>,
) -> Response {

    match state.pages.create(req).await {
        Ok(page) => Json(json!({
            "success": true,
            "message": "Page created successfully",
            "page": page,
        }))
        .into_response(),
        Err(e) => e.write_failure("Failed to create page"),
    }
}

/// Page with its decoded blocks and the editor cards for them
pub async fn get_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {

    let detail = state.pages.get(&id).await?;
    let builder = ContentBuilder::with_blocks(detail.blocks.clone());

    Ok(Json(json!({
        "page": detail,
        "cards": builder.cards(),
    })))
}

/// Replace a page's blocks through a builder session. The body is either a
/// block array or `{ "blocks": [...] }`, natively or as encoded text. A
/// list with any unreadable element is refused whole.
pub async fn save_page_blocks(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    if let Err(e) = state.pages.get(&id).await {
        return e.into_response();
    }
    let blocks = match decode_submitted_blocks(&body) {
        Ok(blocks) => blocks,
        Err(e) => return e.into_response(),
    };

    let mut builder = ContentBuilder::with_blocks(blocks);
    let store = PageBlockStore::new(state.pages.clone(), id.as_str());
    let outcome = builder.save(&store).await;
    let notices = builder.take_notices();

    match outcome {
        Ok(()) => Json(json!({
            "success": true,
            "message": success_message(&notices),
            "blocks": builder.blocks(),
            "notices": notices,
        }))
        .into_response(),
        Err(BuilderError::SaveFailed(detail)) => {
            AppError::Generic(detail).write_failure("Failed to save content")
        }
        Err(e) => AppError::from(e).into_response(),
    }
}

fn success_message(notices: &[Notice]) -> &str {
    notices
        .iter()
        .find(|notice| notice.kind == NoticeKind::Success)
        .map_or("Content saved successfully!", |notice| notice.message.as_str())
}

pub async fn set_page_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<StatusBody>,
) -> Response {

    match state.pages.set_status(&id, body.status.trim()).await {
        Ok(page) => Json(json!({
            "success": true,
            "message": format!("Page is now {}", page.status),
            "page": page,
        }))
        .into_response(),
        Err(e) => e.write_failure("Failed to update page status"),
    }
}

/// Render a posted block list the way the editor's preview mode shows it.
pub async fn preview_blocks(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>> {

    let mut builder = ContentBuilder::with_blocks(decode_submitted_blocks(&body)?);
    builder.toggle_preview()?;

    let rendered: Vec<Value> = builder
        .render_preview()
        .into_iter()
        .map(|block| {
            json!({
                "id": block.id,
                "type": block.block_type,
                "html": block.html,
                "degraded": block.degraded,
            })
        })
        .collect();

    Ok(Json(json!({
        "success": true,
        "mode": builder.mode(),
        "blocks": rendered,
    })))
}

pub async fn block_templates() -> Json<Value> {
    let templates: Vec<BlockTemplate> = BlockTemplate::all();
    Json(json!({ "templates": templates }))
}
