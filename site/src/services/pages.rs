//! Pages service
//!
//! Content pages and their block collections. A page's blocks are always
//! written as one whole list, renumbered `0..N-1`.

use crate::blocks::{
    encode_blocks, ensure_unique_ids, renumber, sort_by_order, Block, BlockPersistence,
};
use crate::config::{PUBLISHED_PAGE_STATUS, VALID_PAGE_STATUSES};
use crate::database::{CreatePageRequest, Page, PageSummary, Repository};
use crate::error::{AppError, Result};
use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;

/// A page with its blocks decoded
#[derive(Debug, Clone, Serialize)]
pub struct PageDetail {
    #[serde(flatten)]
    pub page: Page,
    pub blocks: Vec<Block>,
}

impl From<Page> for PageDetail {
    fn from(page: Page) -> Self {
        let mut blocks = page.blocks();
        sort_by_order(&mut blocks);
        Self { page, blocks }
    }
}

/// Canonical stored form of a page path: no surrounding slashes or spaces
pub fn normalize_path(path: &str) -> String {
    path.trim().trim_matches('/').to_string()
}

fn validate_status(status: &str) -> Result<()> {
    if VALID_PAGE_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "Invalid status. Must be one of: {}",
            VALID_PAGE_STATUSES.join(", ")
        )))
    }
}

/// Service for content pages
#[derive(Clone)]
pub struct PagesService {
    repo: Repository,
}

impl PagesService {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    pub async fn list(&self, status: Option<&str>) -> Result<Vec<PageSummary>> {
        let status = status.map(str::trim).filter(|s| !s.is_empty() && *s != "all");
        if let Some(status) = status {
            validate_status(status)?;
        }

        let pages = self.repo.list_pages(status).await?;
        Ok(pages.iter().map(PageSummary::from).collect())
    }

    /// Create a draft page with no blocks.
    pub async fn create(&self, mut req: CreatePageRequest) -> Result<Page> {
        req.title = req.title.trim().to_string();
        req.path = normalize_path(&req.path);

        if req.title.is_empty() || req.path.is_empty() {
            return Err(AppError::Validation(
                "Page title and path are required".to_string(),
            ));
        }

        let page = self.repo.create_page(req).await?;
        tracing::info!("Page created: {} at /{}", page.id, page.path);

        Ok(page)
    }

    pub async fn get(&self, id: &str) -> Result<PageDetail> {
        Ok(self.repo.get_page(id).await?.into())
    }

    /// Published page at `path`, if any
    pub async fn find_published(&self, path: &str) -> Result<Option<Page>> {
        self.repo.find_published_page(&normalize_path(path)).await
    }

    /// Replace a page's whole block collection.
    pub async fn replace_blocks(&self, id: &str, mut blocks: Vec<Block>) -> Result<PageDetail> {
        if blocks.is_empty() {
            return Err(AppError::Validation(
                "A page must contain at least one block".to_string(),
            ));
        }
        ensure_unique_ids(&blocks)?;

        sort_by_order(&mut blocks);
        renumber(&mut blocks);
        let encoded = encode_blocks(&blocks)?;

        let page = self.repo.replace_page_blocks(id, &encoded).await?;
        tracing::info!("Saved {} blocks for page {}", blocks.len(), id);

        Ok(page.into())
    }

    /// Change a page's status. Publishing stamps `published_at`.
    pub async fn set_status(&self, id: &str, status: &str) -> Result<Page> {
        validate_status(status)?;

        let published_at = (status == PUBLISHED_PAGE_STATUS).then(Utc::now);
        let page = self.repo.set_page_status(id, status, published_at).await?;
        tracing::info!("Page {} is now {}", id, status);

        Ok(page)
    }
}

/// Save target binding a builder session to one page
pub struct PageBlockStore {
    pages: PagesService,
    page_id: String,
}

impl PageBlockStore {
    pub fn new(pages: PagesService, page_id: impl Into<String>) -> Self {
        Self {
            pages,
            page_id: page_id.into(),
        }
    }
}

#[async_trait]
impl BlockPersistence for PageBlockStore {
    async fn save_blocks(&self, blocks: &[Block]) -> Result<()> {
        self.pages
            .replace_blocks(&self.page_id, blocks.to_vec())
            .await
            .map(|_| ())
    }
}
