pub mod domain;
pub mod http_abstraction;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    account_id::{AccountId, AccountIdError},
    credential::{AuthOutcome, CredentialRecord},
    hashed_password::HashedPassword,
    password::Password,
    report::{Report, ReportShape},
    role::Role,
};

pub use ports::{
    reporting::{ReportingStore, ReportingStoreError},
    repositories::{CredentialStore, CredentialStoreError},
    services::{PasswordHasher, PasswordHasherError},
};

pub use http_abstraction::{AuthResponseBuilder, AuthResponseHelpers};
