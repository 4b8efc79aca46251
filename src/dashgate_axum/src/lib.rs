//! axum front-end for the dashgate handlers.
//!
//! [`routes`] holds the `signup` and `login` extractors, generic over the
//! credential store and hasher carried in router state, and
//! [`routes::reports_router`] with one `GET` route per dashboard report. [`AxumResponseBuilder`]
//! turns handler replies into `axum::response::Response`.
//!
//! ```ignore
//! let app = Router::new()
//!     .route("/signup", post(routes::signup::<HashMapCredentialStore, Argon2PasswordHasher>))
//!     .route("/login", post(routes::login::<HashMapCredentialStore, Argon2PasswordHasher>))
//!     .with_state((store, hasher));
//! ```

pub mod adapters;
pub mod routes;

pub use adapters::{AxumResponseBuilder, response_builder};
