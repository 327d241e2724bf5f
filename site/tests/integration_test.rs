//! Integration tests for the mortgage site
//!
//! These tests drive the full router end to end:
//! - Public intake with validation and write-through
//! - Admin authorization and the application review workflow
//! - Page building, publishing and public rendering
//! - Content fallback when the CMS is unreachable

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use mortgage_site::app::AppState;
use mortgage_site::content::{HomepageContent, PageContent, StaticContentSource};
use mortgage_site::database::{create_pool, NewProfile, Repository};
use mortgage_site::routes;
use mortgage_site::services::LocalIdentityProvider;
use mortgage_site::views::esc;
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

const ADMIN_TOKEN: &str = "tok-admin";
const CLIENT_TOKEN: &str = "tok-client";

struct TestSite {
    router: Router,
    repo: Repository,
    content: Arc<StaticContentSource>,
    _temp: TempDir,
}

/// Helper to create a site over a fresh database with one admin and one
/// client session
async fn create_test_site() -> TestSite {
    let temp_dir = TempDir::new().unwrap();
    let pool = create_pool(&temp_dir.path().join("test.db")).await.unwrap();
    let repo = Repository::new(pool);

    for (user_id, role) in [("staff-1", "admin"), ("client-1", "client")] {
        repo.create_profile(NewProfile {
            user_id: user_id.to_string(),
            email: format!("{}@example.com", user_id),
            first_name: None,
            last_name: None,
            phone: None,
            role: role.to_string(),
        })
        .await
        .unwrap();
    }

    let identity = Arc::new(LocalIdentityProvider::new());
    identity.insert_session(ADMIN_TOKEN, "staff-1");
    identity.insert_session(CLIENT_TOKEN, "client-1");

    let content = Arc::new(StaticContentSource::empty());
    let state = AppState::new(repo.clone(), content.clone(), identity);

    TestSite {
        router: routes::router(state),
        repo,
        content,
        _temp: temp_dir,
    }
}

async fn send(
    site: &TestSite,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = site.router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn send_json(
    site: &TestSite,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let (status, bytes) = send(site, method, uri, token, body).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get_html(site: &TestSite, uri: &str) -> (StatusCode, String) {
    let (status, bytes) = send(site, Method::GET, uri, None, None).await;
    (status, String::from_utf8(bytes).unwrap())
}

#[tokio::test]
async fn test_contact_form_validation_and_write() {
    let site = create_test_site().await;

    let (status, body) = send_json(
        &site,
        Method::POST,
        "/api/contact",
        None,
        Some(json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "not-an-email",
            "message": "Hello"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid email format");
    assert_eq!(site.repo.count_contacts().await.unwrap(), 0);

    let (status, body) = send_json(
        &site,
        Method::POST,
        "/api/contact",
        None,
        Some(json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@example.com",
            "message": "Hello"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "new");
    assert_eq!(site.repo.count_contacts().await.unwrap(), 1);
}

#[tokio::test]
async fn test_admin_api_requires_admin_identity() {
    let site = create_test_site().await;

    let (status, body) =
        send_json(&site, Method::GET, "/api/admin/applications", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Unauthorized - Admin access required");

    let (status, _) = send_json(
        &site,
        Method::GET,
        "/api/admin/applications",
        Some(CLIENT_TOKEN),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send_json(
        &site,
        Method::DELETE,
        "/api/admin/applications?id=anything",
        Some("unknown-token"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_gate_runs_before_body_parsing() {
    let site = create_test_site().await;

    let (status, body) = send_json(
        &site,
        Method::PUT,
        "/api/admin/applications",
        None,
        Some(json!({ "id": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);

    let (status, _) = send_json(
        &site,
        Method::PUT,
        "/api/admin/pages/any/status",
        Some(CLIENT_TOKEN),
        Some(json!({ "state": "published" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_application_review_workflow() {
    let site = create_test_site().await;

    let (status, body) = send_json(
        &site,
        Method::POST,
        "/api/mortgage-application",
        None,
        Some(json!({
            "full_name": "Mary Ann Evans",
            "email": "mary@example.com",
            "phone": "416-555-0101",
            "annual_income": "85,000",
            "property_value": "500,000",
            "down_payment_percentage": "10%",
            "credit_score_range": "Good (650-749)",
            "mortgage_type": "Purchase",
            "property_city": "Toronto"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "submitted");
    let id = body["data"]["application_id"].as_str().unwrap().to_string();

    let (status, listing) = send_json(
        &site,
        Method::GET,
        "/api/admin/applications?status=all&search=toronto",
        Some(ADMIN_TOKEN),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listing["total"], 1);
    assert_eq!(listing["totalPages"], 1);
    assert_eq!(listing["applications"][0]["applicant_name"], "Mary Ann Evans");
    assert_eq!(listing["applications"][0]["down_payment"], 50000.0);

    let (status, body) = send_json(
        &site,
        Method::PUT,
        "/api/admin/applications",
        Some(ADMIN_TOKEN),
        Some(json!({ "id": id, "status": "archived" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid status"));

    let (status, body) = send_json(
        &site,
        Method::PUT,
        "/api/admin/applications",
        Some(ADMIN_TOKEN),
        Some(json!({ "id": id, "status": "approved", "notes": "Docs verified" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["application"]["status"], "approved");
    assert!(!body["application"]["approved_at"].is_null());

    let (status, body) = send_json(
        &site,
        Method::GET,
        &format!("/api/admin/applications/{}", id),
        Some(ADMIN_TOKEN),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["application"]["notes"], "Docs verified");

    let uri = format!("/api/admin/applications?id={}", id);
    let (status, _) = send_json(&site, Method::DELETE, &uri, Some(ADMIN_TOKEN), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send_json(&site, Method::DELETE, &uri, Some(ADMIN_TOKEN), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_page_build_publish_and_render() {
    let site = create_test_site().await;

    let (status, body) = send_json(
        &site,
        Method::POST,
        "/api/admin/pages",
        Some(ADMIN_TOKEN),
        Some(json!({
            "title": "Mortgage Renewals",
            "path": "/mortgage/renewal",
            "description": "Renew with confidence"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = body["page"]["id"].as_str().unwrap().to_string();

    let (status, body) = send_json(
        &site,
        Method::PUT,
        &format!("/api/admin/pages/{}/blocks", id),
        Some(ADMIN_TOKEN),
        Some(json!({
            "blocks": [
                { "id": "a", "type": "hero", "order": 1, "content": {} },
                { "id": "b", "type": "text", "order": 0, "content": { "html": "<p>Intro</p>" } }
            ]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Content saved successfully!");
    assert_eq!(body["blocks"][0]["id"], "b");
    assert_eq!(body["blocks"][0]["order"], 0);

    // Drafts stay hidden from the public site
    let (status, _) = get_html(&site, "/mortgage/renewal").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send_json(
        &site,
        Method::PUT,
        &format!("/api/admin/pages/{}/status", id),
        Some(ADMIN_TOKEN),
        Some(json!({ "status": "published" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, html) = get_html(&site, "/mortgage/renewal").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<p>Intro</p>"));
    let intro = html.find(r#"data-block-id="b""#).unwrap();
    let hero = html.find(r#"data-block-id="a""#).unwrap();
    assert!(intro < hero);

    let (status, body) = send_json(
        &site,
        Method::GET,
        &format!("/api/admin/pages/{}", id),
        Some(ADMIN_TOKEN),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cards"][1]["icon"], "🎯");
    assert_eq!(body["cards"][1]["order_label"], "Order: 2");
}

#[tokio::test]
async fn test_empty_block_list_is_rejected() {
    let site = create_test_site().await;

    let (_, body) = send_json(
        &site,
        Method::POST,
        "/api/admin/pages",
        Some(ADMIN_TOKEN),
        Some(json!({ "title": "Empty", "path": "empty" })),
    )
    .await;
    let id = body["page"]["id"].as_str().unwrap().to_string();

    let (status, _) = send_json(
        &site,
        Method::PUT,
        &format!("/api/admin/pages/{}/blocks", id),
        Some(ADMIN_TOKEN),
        Some(json!([])),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send_json(
        &site,
        Method::POST,
        "/api/admin/pages/preview",
        Some(ADMIN_TOKEN),
        Some(json!([])),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unreadable_block_lists_are_refused_whole() {
    let site = create_test_site().await;

    let (_, body) = send_json(
        &site,
        Method::POST,
        "/api/admin/pages",
        Some(ADMIN_TOKEN),
        Some(json!({ "title": "Renewals", "path": "renewal" })),
    )
    .await;
    let id = body["page"]["id"].as_str().unwrap().to_string();
    let uri = format!("/api/admin/pages/{}/blocks", id);

    let (status, body) = send_json(
        &site,
        Method::PUT,
        &uri,
        Some(ADMIN_TOKEN),
        Some(json!([
            { "type": "hero", "title": "No id", "order": 0 },
            { "id": "b", "type": "text", "order": 1 }
        ])),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().starts_with("Block 0 is invalid"));

    let (status, body) = send_json(
        &site,
        Method::PUT,
        &uri,
        Some(ADMIN_TOKEN),
        Some(json!([
            { "id": "x", "type": "hero" },
            { "id": "x", "type": "text" }
        ])),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Duplicate block id: x");

    let (_, body) = send_json(
        &site,
        Method::GET,
        &format!("/api/admin/pages/{}", id),
        Some(ADMIN_TOKEN),
        None,
    )
    .await;
    assert!(body["page"]["blocks"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_preview_renders_unknown_types_through_fallback() {
    let site = create_test_site().await;

    let (status, body) = send_json(
        &site,
        Method::POST,
        "/api/admin/pages/preview",
        Some(ADMIN_TOKEN),
        Some(json!([
            { "id": "x", "type": "carousel", "title": "Slides", "content": { "slides": 3 } },
            { "id": "y", "type": "faq", "order": 0, "content": {} }
        ])),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mode"], "previewing");
    assert_eq!(body["blocks"].as_array().unwrap().len(), 2);
    assert!(body["blocks"]
        .as_array()
        .unwrap()
        .iter()
        .any(|block| block["html"].as_str().unwrap().contains("Slides")));
}

#[tokio::test]
async fn test_public_pages_survive_cms_outage() {
    let site = create_test_site().await;
    site.content.set_failing(true);

    let fallback = HomepageContent::fallback();
    let (status, html) = get_html(&site, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Your Mortgage. Matched to Your Life."));
    assert!(html.contains(&format!("<title>{}</title>", esc(&fallback.meta_title))));

    for uri in [
        "/about",
        "/mortgage",
        "/mortgage/rates",
        "/mortgage/approval",
        "/mortgage/solutions",
    ] {
        let (status, _) = get_html(&site, uri).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
    }

    let (_, html) = get_html(&site, "/mortgage/solutions").await;
    assert!(html.contains("Find Your Perfect Mortgage Solution"));
    assert!(html.contains(r#"href="/mortgage/self-employed/""#));

    let (status, html) = get_html(&site, "/no/such/page").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Page not found"));
}
