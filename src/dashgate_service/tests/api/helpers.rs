use dashgate_adapters::{
    config::{AllowedOrigins, constants::test},
    hashing::Argon2PasswordHasher,
    persistence::HashMapCredentialStore,
};
use dashgate_core::{CredentialStore, PasswordHasher, Report, ReportingStore, ReportingStoreError};
use dashgate_service::DashgateService;
use fake::{Fake, faker::internet::en::Username};
use tokio::net::TcpListener;

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_ports(
            HashMapCredentialStore::new(),
            Argon2PasswordHasher::new(),
            CannedReports,
            None,
        )
        .await
    }

    pub async fn with_ports<S, H, R>(
        credential_store: S,
        password_hasher: H,
        reporting_store: R,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Self
    where
        S: CredentialStore + Clone + 'static,
        H: PasswordHasher + Clone + 'static,
        R: ReportingStore + Clone + 'static,
    {
        let listener = TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        let service = DashgateService::new(
            credential_store,
            password_hasher,
            reporting_store,
            "tests/assets".to_string(),
        );

        tokio::spawn(service.run_standalone(listener, allowed_origins));

        Self {
            address,
            http_client: reqwest::Client::new(),
        }
    }

    pub async fn post_signup<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .post(format!("{}/signup", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_login<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .post(format!("{}/login", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.http_client
            .get(format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

/// Answers every report with a body naming it, in the report's shape.
#[derive(Clone, Copy)]
pub struct CannedReports;

impl CannedReports {
    pub fn body_for(report: Report) -> serde_json::Value {
        let row = serde_json::json!({ "report": report.to_string() });
        match report.shape() {
            dashgate_core::ReportShape::Rows => serde_json::json!([row]),
            dashgate_core::ReportShape::SingleRow => row,
        }
    }
}

#[async_trait::async_trait]
impl ReportingStore for CannedReports {
    async fn fetch(&self, report: Report) -> Result<serde_json::Value, ReportingStoreError> {
        Ok(Self::body_for(report))
    }
}

pub fn get_random_account_id() -> String {
    Username().fake()
}

pub async fn msg_of(response: reqwest::Response) -> String {
    let body: serde_json::Value = response
        .json()
        .await
        .expect("Response body is not JSON");
    body["msg"]
        .as_str()
        .expect("Response body has no msg")
        .to_string()
}
