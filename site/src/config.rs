//! Application configuration constants
//!
//! Central location for all configuration constants, resource limits,
//! and validation boundaries used throughout the site.

use std::time::Duration;

// ===== Admin Listing =====

/// Page number used when the query omits or garbles `page`
pub const DEFAULT_PAGE: u32 = 1;
/// Page size used when the query omits or garbles `limit`
pub const DEFAULT_PAGE_LIMIT: u32 = 10;
/// Largest page size an admin listing will return.
pub const MAX_PAGE_LIMIT: u32 = 100;

// ===== Application Lifecycle =====

/// Statuses accepted by the `mortgage_applications.status` check constraint
pub const VALID_APPLICATION_STATUSES: &[&str] = &["submitted", "approved", "rejected"];

/// Status every new application starts in
pub const INITIAL_APPLICATION_STATUS: &str = "submitted";

/// Status that stamps `approved_at`
pub const APPROVED_STATUS: &str = "approved";

/// Application type recorded when the form leaves it blank
pub const DEFAULT_APPLICATION_TYPE: &str = "purchase";

/// Status every new contact submission starts in
pub const INITIAL_CONTACT_STATUS: &str = "new";

/// Human-readable credit bands offered by the approval form, mapped to
/// the representative score stored on the application.
pub const CREDIT_SCORE_BANDS: &[(&str, i64)] = &[
    ("Excellent (750+)", 775),
    ("Good (650-749)", 700),
    ("Fair (600-649)", 625),
    ("Building Credit (Under 600)", 550),
];

// ===== Pages =====

/// Statuses a content page can be in
pub const VALID_PAGE_STATUSES: &[&str] = &["draft", "published", "archived"];

/// Status that makes a page reachable from the public site
pub const PUBLISHED_PAGE_STATUS: &str = "published";

// ===== Auth =====

/// Ceiling on resolving the caller's identity through the auth provider.
/// On expiry the request proceeds as unauthenticated.
pub const SESSION_RESOLVE_TIMEOUT: Duration = Duration::from_secs(15);

/// Profile role that grants the admin surface
pub const ADMIN_ROLE: &str = "admin";

// ===== Block Rendering =====

/// Placeholder entries rendered for list-shaped content that is absent
pub const PLACEHOLDER_LIST_LEN: usize = 3;

/// Placeholder entries rendered for absent testimonials
pub const PLACEHOLDER_TESTIMONIALS_LEN: usize = 2;

/// Image shown when a testimonial has no avatar
pub const PLACEHOLDER_AVATAR_URL: &str = "https://placehold.co/100x100";

/// Image shown when a gallery entry has no url
pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/400x300";
