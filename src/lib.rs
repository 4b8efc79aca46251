//! # Dashgate - Dashboard Credential Service
//!
//! Facade crate re-exporting the public APIs of the dashgate components.
//!
//! ## Structure
//!
//! - **Core domain types**: `AccountId`, `Password`, `CredentialRecord`, ...
//! - **Ports**: `CredentialStore`, `PasswordHasher`, `ReportingStore`
//! - **Use cases**: `RegisterUseCase`, `AuthenticateUseCase`
//! - **Adapters**: `HashMapCredentialStore`, `PostgresCredentialStore`, `Argon2PasswordHasher`,
//!   `PostgresReportingStore`
//! - **Service**: `DashgateService`, the HTTP entry point

/// Core domain types and value objects
pub mod core {
    pub use dashgate_core::*;
}

pub use dashgate_core::{
    AccountId, AccountIdError, AuthOutcome, CredentialRecord, Password, Report, ReportShape, Role,
};

/// Port definitions
pub mod ports {
    pub use dashgate_core::{
        CredentialStore, CredentialStoreError, PasswordHasher, PasswordHasherError, ReportingStore,
        ReportingStoreError,
    };
}

pub use ports::{
    CredentialStore, CredentialStoreError, PasswordHasher, PasswordHasherError, ReportingStore,
    ReportingStoreError,
};

/// Application use cases
pub mod use_cases {
    pub use dashgate_application::*;
}

pub use dashgate_application::{AuthenticateUseCase, RegisterUseCase};

/// Infrastructure adapters
pub mod adapters {
    /// Framework-agnostic signup/login handlers
    pub mod handlers {
        pub use dashgate_adapters::handlers::*;
    }

    /// Credential store implementations
    pub mod persistence {
        pub use dashgate_adapters::persistence::*;
    }

    /// Password hashing
    pub mod hashing {
        pub use dashgate_adapters::hashing::*;
    }

    /// Dashboard aggregates
    pub mod reporting {
        pub use dashgate_adapters::reporting::*;
    }

    /// Configuration
    pub mod config {
        pub use dashgate_adapters::config::*;
    }

    /// Axum routes and response builder
    pub mod axum {
        pub use dashgate_axum::*;
    }
}

pub use dashgate_adapters::{
    config::DashgateSettings,
    hashing::Argon2PasswordHasher,
    persistence::{HashMapCredentialStore, PostgresCredentialStore},
    reporting::PostgresReportingStore,
};

pub use dashgate_service::{DashgateService, configure_postgresql};

/// Re-export async-trait for implementing the ports
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
