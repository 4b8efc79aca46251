use std::any::Any;

use axum::{
    Router,
    body::Body,
    http::{HeaderValue, Method, Response, header, request},
    routing::{get, post},
};
use dashgate_adapters::{config::AllowedOrigins, handlers::messages};
use dashgate_axum::{response_builder, routes};
use dashgate_core::{AuthResponseHelpers, CredentialStore, PasswordHasher, ReportingStore};
use tokio::net::TcpListener;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::request_tracing::{make_span_with_request_id, on_request, on_response};

/// Router for the dashboard API.
///
/// `/signup` and `/login` share one `(store, hasher)` state value; every
/// [`Report`](dashgate_core::Report) gets a `GET` route over the reporting
/// store; `/test` is a plain liveness check and anything else is looked up in
/// the assets directory, falling back to its `index.html`.
pub struct DashgateService {
    router: Router,
}

impl DashgateService {
    pub fn new<S, H, R>(
        credential_store: S,
        password_hasher: H,
        reporting_store: R,
        assets_dir: String,
    ) -> Self
    where
        S: CredentialStore + Clone + 'static,
        H: PasswordHasher + Clone + 'static,
        R: ReportingStore + Clone + 'static,
    {
        let index = format!("{assets_dir}/index.html");
        let assets = ServeDir::new(assets_dir).fallback(ServeFile::new(index));

        let credentials = Router::new()
            .route("/signup", post(routes::signup::<S, H>))
            .route("/login", post(routes::login::<S, H>))
            .with_state((credential_store, password_hasher));

        Self {
            router: credentials
                .merge(routes::reports_router(reporting_store))
                .route("/test", get(liveness))
                .fallback_service(assets),
        }
    }

    /// Final router with middleware applied, innermost first: panic
    /// isolation, CORS (only when origins are configured), request tracing.
    pub fn into_router(self, allowed_origins: Option<AllowedOrigins>) -> Router {
        let mut router = self
            .router
            .layer(CatchPanicLayer::custom(handle_panic));

        if let Some(origins) = allowed_origins {
            router = router.layer(cors_layer(origins));
        }

        router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        )
    }

    /// Serves until Ctrl-C, then drains in-flight requests.
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.into_router(allowed_origins);

        tracing::info!(address = %listener.local_addr()?, "Dashgate listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

fn cors_layer(origins: AllowedOrigins) -> CorsLayer {
    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _: &request::Parts| origins.contains(origin),
        ))
}

async fn liveness() -> &'static str {
    "success"
}

/// Panics become the generic 500 reply; the payload is only logged.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };

    tracing::error!(panic = detail, "Request handler panicked");
    response_builder().internal_error(messages::INTERNAL_SERVER_ERROR)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
