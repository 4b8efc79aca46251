pub mod reporting;
pub mod repositories;
pub mod services;
