//! Infrastructure adapters for the dashgate credential core.
//!
//! - [`persistence`]: credential stores (in-memory and PostgreSQL)
//! - [`hashing`]: Argon2id password hasher
//! - [`config`]: layered settings and constants
//! - [`reporting`]: dashboard aggregates over PostgreSQL
//! - [`handlers`]: framework-agnostic signup/login/report handlers

pub mod config;
pub mod handlers;
pub mod hashing;
pub mod persistence;
pub mod reporting;
