//! Repository layer for database operations
//!
//! Row-level CRUD over the site's four tables. Every write is a single-row
//! statement; a page's block collection is replaced as one column value.

use super::models::*;
use crate::config::{INITIAL_APPLICATION_STATUS, INITIAL_CONTACT_STATUS, PUBLISHED_PAGE_STATUS};
use crate::error::{AppError, Result};
use chrono::{DateTime, Utc};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use uuid::Uuid;

const APPLICATION_WITH_APPLICANT: &str = r#"
    SELECT a.*,
           p.first_name AS applicant_first_name,
           p.last_name AS applicant_last_name,
           p.email AS applicant_email,
           p.phone AS applicant_phone
    FROM mortgage_applications a
    LEFT JOIN profiles p ON p.user_id = a.user_id
"#;

/// Repository for database operations
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    // ===== Profiles =====

    pub async fn create_profile(&self, req: NewProfile) -> Result<Profile> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        let profile = sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profiles (id, user_id, email, first_name, last_name, phone, role, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&id)
        .bind(&req.user_id)
        .bind(&req.email)
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(&req.phone)
        .bind(&req.role)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("Created profile: {} for user: {}", id, req.user_id);
        Ok(profile)
    }

    pub async fn find_profile_by_email(&self, email: &str) -> Result<Option<Profile>> {
        let profile = sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(profile)
    }

    pub async fn find_profile_by_user_id(&self, user_id: &str) -> Result<Option<Profile>> {
        let profile = sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE user_id = ?")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(profile)
    }

    // ===== Mortgage applications =====

    pub async fn create_application(&self, req: NewApplication) -> Result<MortgageApplication> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        let application = sqlx::query_as::<_, MortgageApplication>(
            r#"
            INSERT INTO mortgage_applications (
                id, user_id, application_type, status,
                annual_income, property_value, down_payment, credit_score, employment_status,
                property_address, property_city, property_province, property_postal_code,
                submitted_at, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&id)
        .bind(&req.user_id)
        .bind(&req.application_type)
        .bind(INITIAL_APPLICATION_STATUS)
        .bind(req.annual_income)
        .bind(req.property_value)
        .bind(req.down_payment)
        .bind(req.credit_score)
        .bind(&req.employment_status)
        .bind(&req.property_address)
        .bind(&req.property_city)
        .bind(&req.property_province)
        .bind(&req.property_postal_code)
        .bind(now)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("Created application: {} for user: {}", id, req.user_id);
        Ok(application)
    }

    pub async fn get_application(&self, id: &str) -> Result<MortgageApplication> {
        sqlx::query_as::<_, MortgageApplication>("SELECT * FROM mortgage_applications WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Application not found".to_string()))
    }

    pub async fn get_application_with_applicant(
        &self,
        id: &str,
    ) -> Result<ApplicationWithApplicant> {
        let mut query = QueryBuilder::<Sqlite>::new(APPLICATION_WITH_APPLICANT);
        query.push(" WHERE a.id = ").push_bind(id);

        query
            .build_query_as::<ApplicationWithApplicant>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Application not found".to_string()))
    }

    /// One window of applications, newest first
    pub async fn list_applications(
        &self,
        filter: &ApplicationFilter,
    ) -> Result<Vec<ApplicationWithApplicant>> {
        let mut query = QueryBuilder::<Sqlite>::new(APPLICATION_WITH_APPLICANT);
        push_application_filters(&mut query, filter);
        query
            .push(" ORDER BY a.created_at DESC, a.rowid DESC LIMIT ")
            .push_bind(filter.limit)
            .push(" OFFSET ")
            .push_bind(filter.offset);

        let rows = query
            .build_query_as::<ApplicationWithApplicant>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    /// Number of applications matching `filter`, ignoring its window
    pub async fn count_applications(&self, filter: &ApplicationFilter) -> Result<i64> {
        let mut query = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM mortgage_applications a");
        push_application_filters(&mut query, filter);

        let count: i64 = query.build_query_scalar().fetch_one(&self.pool).await?;
        Ok(count)
    }

    /// Apply admin changes. Unset fields are left as they are.
    pub async fn update_application(
        &self,
        id: &str,
        changes: &ApplicationChanges,
    ) -> Result<MortgageApplication> {
        let mut query = QueryBuilder::<Sqlite>::new("UPDATE mortgage_applications SET updated_at = ");
        query.push_bind(Utc::now());

        if let Some(status) = &changes.status {
            query.push(", status = ").push_bind(status);
        }
        if let Some(notes) = &changes.notes {
            query.push(", notes = ").push_bind(notes.clone());
        }
        if let Some(approved_at) = changes.approved_at {
            query.push(", approved_at = ").push_bind(approved_at);
        }
        query.push(" WHERE id = ").push_bind(id);

        let rows = query.build().execute(&self.pool).await?.rows_affected();
        if rows == 0 {
            return Err(AppError::NotFound("Application not found".to_string()));
        }

        tracing::debug!("Updated application: {}", id);
        self.get_application(id).await
    }

    pub async fn delete_application(&self, id: &str) -> Result<()> {
        let rows = sqlx::query("DELETE FROM mortgage_applications WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if rows == 0 {
            return Err(AppError::NotFound("Application not found".to_string()));
        }

        tracing::debug!("Deleted application: {}", id);
        Ok(())
    }

    // ===== Contact submissions =====

    pub async fn create_contact(&self, req: NewContact) -> Result<ContactSubmission> {
        let id = Uuid::new_v4().to_string();

        let contact = sqlx::query_as::<_, ContactSubmission>(
            r#"
            INSERT INTO contact_submissions (id, first_name, last_name, email, phone, message, form_type, status, created_at)
            VALUES (?, ?, ?, ?, ?, ?, NULL, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&id)
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(&req.email)
        .bind(&req.phone)
        .bind(&req.message)
        .bind(INITIAL_CONTACT_STATUS)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("Created contact submission: {}", id);
        Ok(contact)
    }

    pub async fn count_contacts(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contact_submissions")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    // ===== Pages =====

    pub async fn create_page(&self, req: CreatePageRequest) -> Result<Page> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        let page = sqlx::query_as::<_, Page>(
            r#"
            INSERT INTO pages (
                id, title, path, vertical, page_type, description, excerpt, author,
                featured_image, seo_title, meta_description, meta_keywords, og_image,
                created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&id)
        .bind(&req.title)
        .bind(&req.path)
        .bind(&req.vertical)
        .bind(&req.page_type)
        .bind(&req.description)
        .bind(&req.excerpt)
        .bind(&req.author)
        .bind(&req.featured_image)
        .bind(&req.seo_title)
        .bind(&req.meta_description)
        .bind(&req.meta_keywords)
        .bind(&req.og_image)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("Created page: {} at /{}", id, req.path);
        Ok(page)
    }

    pub async fn get_page(&self, id: &str) -> Result<Page> {
        sqlx::query_as::<_, Page>("SELECT * FROM pages WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Page not found".to_string()))
    }

    pub async fn find_published_page(&self, path: &str) -> Result<Option<Page>> {
        let page = sqlx::query_as::<_, Page>("SELECT * FROM pages WHERE path = ? AND status = ?")
            .bind(path)
            .bind(PUBLISHED_PAGE_STATUS)
            .fetch_optional(&self.pool)
            .await?;

        Ok(page)
    }

    /// Pages, most recently updated first
    pub async fn list_pages(&self, status: Option<&str>) -> Result<Vec<Page>> {
        let mut query = QueryBuilder::<Sqlite>::new("SELECT * FROM pages");
        if let Some(status) = status {
            query.push(" WHERE status = ").push_bind(status);
        }
        query.push(" ORDER BY updated_at DESC, rowid DESC");

        let pages = query.build_query_as::<Page>().fetch_all(&self.pool).await?;
        Ok(pages)
    }

    /// Replace a page's whole block collection with an encoded list.
    pub async fn replace_page_blocks(&self, id: &str, encoded: &str) -> Result<Page> {
        let rows = sqlx::query("UPDATE pages SET content_blocks = ?, updated_at = ? WHERE id = ?")
            .bind(encoded)
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if rows == 0 {
            return Err(AppError::NotFound("Page not found".to_string()));
        }

        tracing::debug!("Replaced blocks for page: {}", id);
        self.get_page(id).await
    }

    /// Change a page's status, stamping `published_at` when one is given.
    pub async fn set_page_status(
        &self,
        id: &str,
        status: &str,
        published_at: Option<DateTime<Utc>>,
    ) -> Result<Page> {
        let rows = sqlx::query(
            r#"
            UPDATE pages
            SET status = ?, published_at = COALESCE(?, published_at), updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(status)
        .bind(published_at)
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if rows == 0 {
            return Err(AppError::NotFound("Page not found".to_string()));
        }

        tracing::debug!("Set page {} status to {}", id, status);
        self.get_page(id).await
    }
}

fn push_application_filters(query: &mut QueryBuilder<'_, Sqlite>, filter: &ApplicationFilter) {
    query.push(" WHERE 1 = 1");

    if let Some(status) = &filter.status {
        query.push(" AND a.status = ").push_bind(status.clone());
    }

    if let Some(search) = filter.search.as_deref().filter(|s| !s.trim().is_empty()) {
        let pattern = format!("%{}%", escape_like(search.trim()));
        query
            .push(" AND (a.property_address LIKE ")
            .push_bind(pattern.clone())
            .push(" ESCAPE '\\' OR a.property_city LIKE ")
            .push_bind(pattern.clone())
            .push(" ESCAPE '\\' OR a.id LIKE ")
            .push_bind(pattern)
            .push(" ESCAPE '\\')");
    }
}

/// Escape LIKE wildcards so search text matches literally.
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::create_memory_pool;

    async fn create_test_repo() -> Repository {
        Repository::new(create_memory_pool().await.unwrap())
    }

    async fn seed_applicant(repo: &Repository, user_id: &str, first: &str, last: &str) {
        repo.create_profile(NewProfile {
            user_id: user_id.to_string(),
            email: format!("{}@example.com", user_id),
            first_name: Some(first.to_string()),
            last_name: Some(last.to_string()),
            phone: Some("555-0100".to_string()),
            role: "client".to_string(),
        })
        .await
        .unwrap();
    }

    fn application(user_id: &str, city: &str) -> NewApplication {
        NewApplication {
            user_id: user_id.to_string(),
            application_type: "purchase".to_string(),
            property_city: Some(city.to_string()),
            property_address: Some("12 Main St".to_string()),
            ..Default::default()
        }
    }

    fn window(limit: i64) -> ApplicationFilter {
        ApplicationFilter {
            limit,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_application_starts_submitted() {
        let repo = create_test_repo().await;
        let app = repo.create_application(application("u1", "Toronto")).await.unwrap();

        assert_eq!(app.status, "submitted");
        assert!(app.submitted_at.is_some());
        assert!(app.approved_at.is_none());
    }

    #[tokio::test]
    async fn test_applicant_joined_or_missing() {
        let repo = create_test_repo().await;
        seed_applicant(&repo, "u1", "Ada", "Lovelace").await;
        let known = repo.create_application(application("u1", "Toronto")).await.unwrap();
        let orphan = repo.create_application(application("ghost", "Ottawa")).await.unwrap();

        let view: ApplicationView = repo
            .get_application_with_applicant(&known.id)
            .await
            .unwrap()
            .into();
        assert_eq!(view.applicant_name, "Ada Lovelace");
        assert_eq!(view.applicant_email, "u1@example.com");

        let view: ApplicationView = repo
            .get_application_with_applicant(&orphan.id)
            .await
            .unwrap()
            .into();
        assert_eq!(view.applicant_name, "Unknown");
        assert_eq!(view.applicant_email, "");
    }

    #[tokio::test]
    async fn test_list_filters_and_counts() {
        let repo = create_test_repo().await;
        for city in ["Toronto", "Vancouver", "toronto east"] {
            repo.create_application(application("u1", city)).await.unwrap();
        }
        let approved = repo.create_application(application("u1", "Calgary")).await.unwrap();
        repo.update_application(
            &approved.id,
            &ApplicationChanges {
                status: Some("approved".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let search = ApplicationFilter {
            search: Some("TORONTO".into()),
            ..window(10)
        };
        assert_eq!(repo.list_applications(&search).await.unwrap().len(), 2);
        assert_eq!(repo.count_applications(&search).await.unwrap(), 2);

        let by_status = ApplicationFilter {
            status: Some("approved".into()),
            ..window(10)
        };
        let rows = repo.list_applications(&by_status).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].application.id, approved.id);

        let paged = ApplicationFilter {
            offset: 3,
            ..window(2)
        };
        assert_eq!(repo.list_applications(&paged).await.unwrap().len(), 1);
        assert_eq!(repo.count_applications(&paged).await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let repo = create_test_repo().await;
        let first = repo.create_application(application("u1", "A")).await.unwrap();
        let second = repo.create_application(application("u1", "B")).await.unwrap();

        let rows = repo.list_applications(&window(10)).await.unwrap();
        assert_eq!(rows[0].application.id, second.id);
        assert_eq!(rows[1].application.id, first.id);
    }

    #[tokio::test]
    async fn test_search_wildcards_are_literal() {
        let repo = create_test_repo().await;
        repo.create_application(application("u1", "Toronto")).await.unwrap();

        let filter = ApplicationFilter {
            search: Some("%".into()),
            ..window(10)
        };
        assert_eq!(repo.count_applications(&filter).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_application() {
        let repo = create_test_repo().await;
        let changes = ApplicationChanges {
            notes: Some(Some("n".into())),
            ..Default::default()
        };

        assert!(matches!(
            repo.update_application("missing", &changes).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            repo.delete_application("missing").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_page_blocks_and_status() {
        let repo = create_test_repo().await;
        let page = repo
            .create_page(CreatePageRequest {
                title: "First-time buyers".into(),
                path: "mortgage/first-time".into(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(page.status, "draft");
        assert!(page.blocks().is_empty());
        assert!(repo.find_published_page("mortgage/first-time").await.unwrap().is_none());

        let updated = repo
            .replace_page_blocks(&page.id, r#"[{"id":"a","type":"hero","order":0}]"#)
            .await
            .unwrap();
        assert_eq!(updated.blocks().len(), 1);

        let published = repo
            .set_page_status(&page.id, "published", Some(Utc::now()))
            .await
            .unwrap();
        assert!(published.published_at.is_some());

        let found = repo.find_published_page("mortgage/first-time").await.unwrap();
        assert_eq!(found.map(|p| p.id), Some(page.id.clone()));

        let archived = repo.set_page_status(&page.id, "archived", None).await.unwrap();
        assert_eq!(archived.published_at, published.published_at);
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
    }
}
