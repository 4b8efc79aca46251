pub mod account_id;
pub mod credential;
pub mod hashed_password;
pub mod password;
pub mod report;
pub mod role;
