//! Shared test helpers for integration tests.
//!
//! Tests drive the real router end-to-end against a PostgreSQL instance
//! named by `TANDEM_TEST_DATABASE_URL`. When the variable is unset the
//! tests skip themselves. State is never truncated: every test works with
//! freshly generated users and scopes its assertions to them, so tests can
//! run in parallel against one database.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use tandem_core::config::AppConfig;
use tandem_core::config::auth::AuthConfig;
use tandem_core::config::database::DatabaseConfig;
use tandem_core::config::directory::DirectoryConfig;

/// Name of the session cookie under the test config.
pub const SESSION_COOKIE: &str = "jwt";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
}

/// A decoded response: status, JSON body, and any session cookie set.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    pub cookie: Option<String>,
}

impl TestApp {
    /// Create a new test application, or `None` when no test database is
    /// configured.
    pub async fn new() -> Option<Self> {
        let url = std::env::var("TANDEM_TEST_DATABASE_URL").ok()?;
        let config = test_config(url);

        let db_pool = tandem_database::connection::create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");

        tandem_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        let state = tandem_api::app::build_state(config, db_pool.clone())
            .expect("Failed to build app state");

        Some(Self {
            router: tandem_api::router::build_router(state),
            db_pool,
        })
    }

    /// Issue a request against the router.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);

        if let Some(token) = cookie {
            builder = builder.header(header::COOKIE, format!("{SESSION_COOKIE}={token}"));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let cookie = extract_session_cookie(response.headers());

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse {
            status,
            body,
            cookie,
        }
    }

    /// Sign up a fresh user; returns the user object and session cookie.
    pub async fn signup(&self, full_name: &str) -> (Value, String) {
        let email = unique_email(full_name);
        let response = self
            .request(
                "POST",
                "/api/auth/signup",
                Some(serde_json::json!({
                    "email": email,
                    "password": "password123",
                    "fullName": full_name,
                })),
                None,
            )
            .await;

        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        let cookie = response.cookie.expect("signup sets session cookie");
        (response.body["data"].clone(), cookie)
    }

    /// Complete onboarding for the session with stock profile fields.
    pub async fn onboard(&self, cookie: &str, full_name: &str) -> Value {
        let response = self
            .request(
                "POST",
                "/api/auth/onboarding",
                Some(serde_json::json!({
                    "fullName": full_name,
                    "bio": "Looking for a language partner",
                    "nativeLanguage": "English",
                    "learningLanguage": "Japanese",
                    "location": "Lisbon",
                })),
                Some(cookie),
            )
            .await;

        assert_eq!(response.status, StatusCode::OK, "{}", response.body);
        response.body["data"].clone()
    }
}

/// A unique email so parallel tests never collide.
pub fn unique_email(prefix: &str) -> String {
    let tag = Uuid::new_v4().simple();
    format!("{}+{}@example.com", prefix.to_lowercase(), tag)
}

fn test_config(url: String) -> AppConfig {
    AppConfig {
        server: Default::default(),
        database: DatabaseConfig {
            url,
            max_connections: 5,
            min_connections: 1,
            connect_timeout_seconds: 5,
            idle_timeout_seconds: 60,
        },
        auth: AuthConfig {
            jwt_secret: "integration-test-secret".to_string(),
            ..AuthConfig::default()
        },
        directory: DirectoryConfig {
            enabled: true,
            api_key: "test-key".to_string(),
            api_secret: "test-secret".to_string(),
            // Unroutable: upserts fail fast and are swallowed by design.
            base_url: "http://127.0.0.1:1".to_string(),
            request_timeout_seconds: 1,
        },
        logging: Default::default(),
    }
}

/// Pull the session cookie value out of a `Set-Cookie` header, if any.
fn extract_session_cookie(headers: &http::HeaderMap) -> Option<String> {
    headers
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(|raw| {
            let (pair, _) = raw.split_once(';').unwrap_or((raw, ""));
            let (name, value) = pair.split_once('=')?;
            (name == SESSION_COOKIE).then(|| value.to_string())
        })
}
