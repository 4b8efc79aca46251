//! Framework-agnostic credential and report handlers.
//!
//! These handlers own the mapping from use case outcomes to HTTP status codes
//! and `{ "msg": ... }` bodies. Framework-specific routes (Axum, ...) extract
//! request data, call these handlers and return the built response.

pub mod authenticate;
pub mod register;
pub mod reports;

pub use authenticate::{AuthenticateData, handle_authenticate};
pub use register::{RegisterData, handle_register};
pub use reports::handle_report;

/// Response messages understood by the dashboard front-end.
pub mod messages {
    pub const REGISTERED: &str = "success";
    pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";
    pub const USER_ALREADY_EXISTS: &str = "User already exists";
    pub const INVALID_ACCOUNT_ID: &str = "Invalid account identifier";
    pub const LOGIN_SUCCESSFUL: &str = "Login successful";
    pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
    pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";
}
