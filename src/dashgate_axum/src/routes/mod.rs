//! Axum-specific route handlers.
//!
//! These routes use Axum's extractors to get data from requests, call the
//! framework-agnostic handlers, and return their responses.

pub mod login;
pub mod reports;
pub mod signup;

pub use login::login;
pub use reports::{report_route, reports_router};
pub use signup::signup;
