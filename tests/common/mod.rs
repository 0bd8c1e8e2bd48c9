#![allow(dead_code)]

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::Duration;
use serde_json::Value;
use tower::ServiceExt;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use portal_api::auth::jwt::sign_session;
use portal_api::auth::{JwtSessionResolver, PortalRole, PortalSession, PortalUser, SessionClaims};
use portal_api::database::models::{CityWithCount, OfficeSummary};
use portal_api::database::{DatabaseError, PortalStore};
use portal_api::{app, AppState};

pub const SECRET: &str = "integration-secret";
pub const COOKIE: &str = "portal_session";

/// In-memory store that records how often each query runs
#[derive(Default)]
pub struct FakeStore {
    pub cities: Option<Vec<CityWithCount>>,
    pub offices: Option<Vec<OfficeSummary>>,
    pub healthy: bool,
    pub city_queries: AtomicUsize,
    pub office_queries: AtomicUsize,
}

impl FakeStore {
    pub fn new() -> Self {
        Self {
            cities: Some(Vec::new()),
            offices: Some(Vec::new()),
            healthy: true,
            ..Default::default()
        }
    }

    pub fn with_cities(mut self, cities: Vec<CityWithCount>) -> Self {
        self.cities = Some(cities);
        self
    }

    pub fn with_offices(mut self, offices: Vec<OfficeSummary>) -> Self {
        self.offices = Some(offices);
        self
    }

    /// Every query fails as if the database errored
    pub fn failing() -> Self {
        Self {
            cities: None,
            offices: None,
            healthy: false,
            ..Default::default()
        }
    }

    pub fn city_queries(&self) -> usize {
        self.city_queries.load(Ordering::SeqCst)
    }

    pub fn office_queries(&self) -> usize {
        self.office_queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PortalStore for FakeStore {
    async fn cities_with_counts(&self) -> Result<Vec<CityWithCount>, DatabaseError> {
        self.city_queries.fetch_add(1, Ordering::SeqCst);
        self.cities
            .clone()
            .ok_or_else(|| DatabaseError::QueryError("Database error".to_string()))
    }

    async fn list_offices(&self) -> Result<Vec<OfficeSummary>, DatabaseError> {
        self.office_queries.fetch_add(1, Ordering::SeqCst);
        let mut offices = self
            .offices
            .clone()
            .ok_or_else(|| DatabaseError::QueryError("Database error".to_string()))?;
        // Same ordering the SQL query applies
        offices.sort();
        Ok(offices)
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        if self.healthy {
            Ok(())
        } else {
            Err(DatabaseError::QueryError("connection refused".to_string()))
        }
    }
}

pub fn router(store: Arc<FakeStore>) -> Router {
    let sessions = JwtSessionResolver::new(SECRET, COOKIE).expect("resolver");
    app(AppState::new(store, Arc::new(sessions)))
}

pub fn user(role: PortalRole) -> PortalUser {
    PortalUser {
        id: Uuid::new_v4(),
        email: format!("{}@example.com", role),
        name: Some("Portal User".to_string()),
        role,
    }
}

pub fn session_token(session: &PortalSession) -> String {
    sign_session(&SessionClaims::new(session.clone(), Duration::hours(1)), SECRET).expect("signed session")
}

pub fn office(id: i32, name: &str, brokerage_name: &str) -> OfficeSummary {
    OfficeSummary {
        id,
        name: name.to_string(),
        brokerage_name: brokerage_name.to_string(),
    }
}

/// Issue a GET, optionally carrying a session cookie
pub async fn get(router: Router, uri: &str, session: Option<&PortalSession>) -> Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(session) = session {
        builder = builder.header(header::COOKIE, format!("{}={}", COOKIE, session_token(session)));
    }

    let response = router.oneshot(builder.body(Body::empty())?).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };

    Ok((status, body))
}

/// Log lines written while a `LogCapture` guard is alive on this thread
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    /// Capture events from this crate at or above `level` ("error", "warn", ...)
    pub fn install(level: &str) -> (Self, DefaultGuard) {
        let capture = Self::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(format!("portal_api={}", level)))
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        (capture, tracing::subscriber::set_default(subscriber))
    }

    pub fn lines(&self) -> Vec<String> {
        let bytes = self.buffer.lock().expect("log buffer").clone();
        String::from_utf8_lossy(&bytes)
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().expect("log buffer").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
