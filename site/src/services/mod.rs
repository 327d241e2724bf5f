//! Services module
//!
//! Business logic services that sit between the HTTP routes and the
//! repository.

pub mod applications;
pub mod auth;
pub mod intake;
pub mod pages;
pub mod settings;

pub use applications::ApplicationsService;
pub use auth::{AuthService, HttpIdentityProvider, IdentityProvider, LocalIdentityProvider};
pub use intake::IntakeService;
pub use pages::{PageBlockStore, PagesService};
pub use settings::{SettingsService, SiteSettings};
