//! Public HTML pages

use crate::app::AppState;
use crate::content::{
    load_page, AboutContent, ApprovalPageContent, HomepageContent, MortgageHubContent,
    MortgageSolutionsContent,
};
use crate::views;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};

pub async fn home(State(state): State<AppState>) -> Html<String> {
    let content: HomepageContent = load_page(state.content.as_ref()).await;
    Html(views::home::render(&content))
}

pub async fn about(State(state): State<AppState>) -> Html<String> {
    let content: AboutContent = load_page(state.content.as_ref()).await;
    Html(views::about::render(&content))
}

pub async fn mortgage_hub(State(state): State<AppState>) -> Html<String> {
    let content: MortgageHubContent = load_page(state.content.as_ref()).await;
    Html(views::mortgage::hub(&content))
}

pub async fn mortgage_solutions(State(state): State<AppState>) -> Html<String> {
    let content: MortgageSolutionsContent = load_page(state.content.as_ref()).await;
    Html(views::mortgage::solutions(&content))
}

pub async fn mortgage_rates() -> Html<String> {
    Html(views::mortgage::rates())
}

pub async fn mortgage_approval(State(state): State<AppState>) -> Html<String> {
    let content: ApprovalPageContent = load_page(state.content.as_ref()).await;
    Html(views::mortgage::approval(&content))
}

/// Published database page at `path`, else the 404 page. Lookup failures
/// are logged and also shown as not found.
pub async fn dynamic_page(State(state): State<AppState>, Path(path): Path<String>) -> Response {
    match state.pages.find_published(&path).await {
        Ok(Some(page)) => Html(views::page::render(&page)).into_response(),
        Ok(None) => {
            tracing::debug!("No published page at /{}", path);
            views::not_found()
        }
        Err(e) => {
            tracing::error!("Failed to load page /{}: {}", path, e);
            views::not_found()
        }
    }
}
