//! Test harness for driving the HTTP API in-process.
//!
//! Each `TestHarness` owns a fresh directory over an in-memory snapshot store,
//! so tests are isolated and need no external services. The Postgres snapshot
//! tests share a single testcontainer, started on first use.

#![allow(dead_code)]

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use directory_core::domains::auth::{ensure_admin, JwtService};
use directory_core::domains::directory::Directory;
use directory_core::kernel::{Argon2Hasher, MemorySnapshotStore, ServerDeps};
use directory_core::server::build_app;
use serde_json::Value;
use sqlx::PgPool;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;
use tower::ServiceExt;

pub const ADMIN_EMAIL: &str = "admin@next4us.com";
pub const ADMIN_PASSWORD: &str = "adminpass";

fn init_tracing() {
    // Run tests with: RUST_LOG=debug cargo test -- --nocapture
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// In-process API with its own directory.
pub struct TestHarness {
    pub deps: ServerDeps,
    pub store: Arc<MemorySnapshotStore>,
    router: Router,
}

impl TestHarness {
    pub async fn new() -> Result<Self> {
        init_tracing();

        let store = Arc::new(MemorySnapshotStore::new());
        let directory = Directory::open(store.clone(), ADMIN_EMAIL.to_string()).await?;
        let deps = ServerDeps::new(
            Arc::new(directory),
            // Low-cost params keep the suite fast
            Arc::new(Argon2Hasher::with_cost(8, 1, 1)?),
            Arc::new(JwtService::new("test_secret", "next4us".to_string())),
        );
        let router = build_app(deps.clone(), vec!["http://localhost:3000".to_string()]);

        Ok(Self {
            deps,
            store,
            router,
        })
    }

    /// Harness with the bootstrap administrator already seeded.
    pub async fn with_admin() -> Result<Self> {
        let harness = Self::new().await?;
        ensure_admin(
            &harness.deps.directory,
            harness.deps.password_hasher.as_ref(),
            ADMIN_PASSWORD,
            "0700000000",
        )
        .await
        .context("Failed to seed administrator")?;
        Ok(harness)
    }

    /// Send a JSON request and return the status and parsed body
    /// (`Value::Null` for an empty body).
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("valid request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, json)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, token, None).await
    }

    /// Log in through the API and return the session token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let (status, body) = self
            .post(
                "/api/login",
                None,
                serde_json::json!({ "email": email, "password": password }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");
        body["token"]
            .as_str()
            .expect("login response carries a token")
            .to_string()
    }

    pub async fn admin_token(&self) -> String {
        self.login(ADMIN_EMAIL, ADMIN_PASSWORD).await
    }
}

/// Shared Postgres container, started once and reused by every test.
struct SharedPostgres {
    db_url: String,
    // Keep the container alive for the entire test run
    _postgres: ContainerAsync<Postgres>,
}

static SHARED_POSTGRES: OnceCell<SharedPostgres> = OnceCell::const_new();

impl SharedPostgres {
    async fn init() -> Result<Self> {
        init_tracing();

        let postgres = Postgres::default()
            .with_tag("16")
            .start()
            .await
            .context("Failed to start Postgres container")?;

        let host = postgres.get_host().await?;
        let port = postgres.get_host_port_ipv4(5432).await?;
        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        // Run migrations once on the shared database
        let pool = PgPool::connect(&db_url)
            .await
            .context("Failed to connect to Postgres for migrations")?;
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run migrations")?;

        Ok(Self {
            db_url,
            _postgres: postgres,
        })
    }
}

/// Connection pool to the shared, migrated Postgres container.
pub async fn shared_pg_pool() -> Result<PgPool> {
    let infra = SHARED_POSTGRES
        .get_or_try_init(SharedPostgres::init)
        .await?;
    PgPool::connect(&infra.db_url)
        .await
        .context("Failed to connect to shared Postgres")
}
