//! Editable marketing content
//!
//! Page copy comes from an optional headless CMS and always has a built-in
//! fallback record.

pub mod fallback;
pub mod gateway;
pub mod source;

pub use fallback::{
    AboutContent, ApprovalPageContent, HomepageContent, MortgageHubContent,
    MortgageSolutionsContent,
};
pub use gateway::{fetch_page_content, load_page, merge_with_fallback, PageContent};
pub use source::{CmsClient, ContentSource, PageKey, StaticContentSource};
