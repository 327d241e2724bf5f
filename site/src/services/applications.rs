//! Applications service
//!
//! Admin review of submitted mortgage applications: paginated listing,
//! single lookup, status and notes updates, removal.

use crate::config::{
    APPROVED_STATUS, DEFAULT_PAGE, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT, VALID_APPLICATION_STATUSES,
};
use crate::database::{
    ApplicationChanges, ApplicationFilter, ApplicationView, MortgageApplication, Repository,
    UpdateApplicationRequest,
};
use crate::error::{AppError, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Listing query as it arrives from the URL
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub status: Option<String>,
    pub search: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// One page of the admin listing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPage {
    pub applications: Vec<ApplicationView>,
    pub total: i64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: i64,
}

fn parse_positive(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(default)
}

pub fn is_valid_status(status: &str) -> bool {
    VALID_APPLICATION_STATUSES.contains(&status)
}

/// Service for admin application management
#[derive(Clone)]
pub struct ApplicationsService {
    repo: Repository,
}

impl ApplicationsService {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<ApplicationPage> {
        let page = parse_positive(query.page.as_deref(), DEFAULT_PAGE);
        let limit = parse_positive(query.limit.as_deref(), DEFAULT_PAGE_LIMIT).min(MAX_PAGE_LIMIT);

        let status = query
            .status
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty() && *s != "all")
            .map(str::to_string);

        let filter = ApplicationFilter {
            status,
            search: query.search.clone(),
            offset: i64::from(page - 1) * i64::from(limit),
            limit: i64::from(limit),
        };

        let rows = self.repo.list_applications(&filter).await?;
        let total = self.repo.count_applications(&filter).await?;

        tracing::debug!(
            "Listed {} of {} applications (page {}, limit {})",
            rows.len(),
            total,
            page,
            limit
        );

        Ok(ApplicationPage {
            applications: rows.into_iter().map(ApplicationView::from).collect(),
            total,
            page,
            limit,
            total_pages: (total + i64::from(limit) - 1) / i64::from(limit),
        })
    }

    pub async fn get(&self, id: &str) -> Result<ApplicationView> {
        let row = self.repo.get_application_with_applicant(id).await?;
        Ok(row.into())
    }

    /// Apply an admin update. Moving to `approved` stamps `approved_at`.
    pub async fn update(&self, req: UpdateApplicationRequest) -> Result<MortgageApplication> {
        let id = req
            .id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| AppError::Validation("Application ID is required".to_string()))?;

        let mut changes = ApplicationChanges::default();

        // A blank status counts as not sent.
        if let Some(status) = req.status.filter(|status| !status.trim().is_empty()) {
            if !is_valid_status(&status) {
                return Err(AppError::Validation(format!(
                    "Invalid status. Must be one of: {}",
                    VALID_APPLICATION_STATUSES.join(", ")
                )));
            }
            if status == APPROVED_STATUS {
                changes.approved_at = Some(Utc::now());
            }
            changes.status = Some(status);
        }

        changes.notes = req.notes;

        if changes.is_empty() {
            return Err(AppError::Validation("No data to update".to_string()));
        }

        let application = self.repo.update_application(&id, &changes).await?;
        tracing::info!("Application {} updated (status: {})", id, application.status);

        Ok(application)
    }

    pub async fn delete(&self, id: Option<&str>) -> Result<()> {
        let id = id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::Validation("Application ID is required".to_string()))?;

        self.repo.delete_application(id).await?;
        tracing::info!("Application {} deleted", id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{create_memory_pool, NewApplication};

    async fn create_test_service() -> (ApplicationsService, Repository) {
        let repo = Repository::new(create_memory_pool().await.unwrap());
        (ApplicationsService::new(repo.clone()), repo)
    }

    async fn submit(repo: &Repository) -> MortgageApplication {
        repo.create_application(NewApplication {
            user_id: "u1".into(),
            application_type: "purchase".into(),
            ..Default::default()
        })
        .await
        .unwrap()
    }

    fn update(id: &str, status: Option<&str>, notes: Option<&str>) -> UpdateApplicationRequest {
        UpdateApplicationRequest {
            id: Some(id.to_string()),
            status: status.map(str::to_string),
            notes: notes.map(|notes| Some(notes.to_string())),
        }
    }

    #[tokio::test]
    async fn test_approval_stamps_timestamp() {
        let (service, repo) = create_test_service().await;
        let app = submit(&repo).await;

        let updated = service.update(update(&app.id, Some("approved"), None)).await.unwrap();
        assert_eq!(updated.status, "approved");
        assert!(updated.approved_at.is_some());
    }

    #[tokio::test]
    async fn test_other_status_leaves_approval_unset() {
        let (service, repo) = create_test_service().await;
        let app = submit(&repo).await;

        let updated = service.update(update(&app.id, Some("rejected"), None)).await.unwrap();
        assert_eq!(updated.status, "rejected");
        assert!(updated.approved_at.is_none());
    }

    #[tokio::test]
    async fn test_disallowed_status_mutates_nothing() {
        let (service, repo) = create_test_service().await;
        let app = submit(&repo).await;

        let err = service
            .update(update(&app.id, Some("archived"), Some("should not land")))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let stored = repo.get_application(&app.id).await.unwrap();
        assert_eq!(stored.status, "submitted");
        assert!(stored.notes.is_none());
        assert_eq!(stored.updated_at, app.updated_at);
    }

    #[tokio::test]
    async fn test_update_requires_id_and_changes() {
        let (service, repo) = create_test_service().await;
        let app = submit(&repo).await;

        let missing_id = UpdateApplicationRequest {
            status: Some("approved".into()),
            ..Default::default()
        };
        assert_eq!(
            service.update(missing_id).await.unwrap_err().to_string(),
            "Application ID is required"
        );
        assert_eq!(
            service.update(update(&app.id, None, None)).await.unwrap_err().to_string(),
            "No data to update"
        );
    }

    #[tokio::test]
    async fn test_notes_update_verbatim() {
        let (service, repo) = create_test_service().await;
        let app = submit(&repo).await;

        let updated = service
            .update(update(&app.id, None, Some("Called applicant, awaiting T4s")))
            .await
            .unwrap();
        assert_eq!(updated.notes.as_deref(), Some("Called applicant, awaiting T4s"));
        assert_eq!(updated.status, "submitted");
    }

    #[tokio::test]
    async fn test_null_notes_clear_and_blank_status_is_ignored() {
        let (service, repo) = create_test_service().await;
        let app = submit(&repo).await;
        service
            .update(update(&app.id, None, Some("Follow up Monday")))
            .await
            .unwrap();

        let req: UpdateApplicationRequest =
            serde_json::from_value(serde_json::json!({ "id": app.id, "status": "", "notes": null }))
                .unwrap();
        assert_eq!(req.notes, Some(None));

        let updated = service.update(req).await.unwrap();
        assert!(updated.notes.is_none());
        assert_eq!(updated.status, "submitted");

        let blank_only: UpdateApplicationRequest =
            serde_json::from_value(serde_json::json!({ "id": app.id, "status": " " })).unwrap();
        assert_eq!(blank_only.notes, None);
        assert_eq!(
            service.update(blank_only).await.unwrap_err().to_string(),
            "No data to update"
        );
    }

    #[tokio::test]
    async fn test_list_pagination_defaults() {
        let (service, repo) = create_test_service().await;
        for _ in 0..12 {
            submit(&repo).await;
        }

        let first = service.list(&ListQuery::default()).await.unwrap();
        assert_eq!(first.page, 1);
        assert_eq!(first.limit, 10);
        assert_eq!(first.total, 12);
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.applications.len(), 10);

        let second = service
            .list(&ListQuery {
                page: Some("2".into()),
                limit: Some("garbage".into()),
                status: Some("all".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(second.applications.len(), 2);
        assert_eq!(second.limit, 10);
    }

    #[tokio::test]
    async fn test_get_and_delete_missing() {
        let (service, _repo) = create_test_service().await;

        assert!(matches!(service.get("nope").await, Err(AppError::NotFound(_))));
        assert!(matches!(
            service.delete(Some("nope")).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(service.delete(None).await, Err(AppError::Validation(_))));
    }
}
