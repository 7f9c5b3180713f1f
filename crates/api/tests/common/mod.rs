//! Shared test harness: the real router wired to stub oracle services.
//!
//! Each stub is a tiny Axum server on an ephemeral local port that records
//! every request body it receives and answers with a configurable status
//! and JSON body. Tests steer scenarios through [`StubConfig`] and assert
//! against the recorded requests afterwards.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use claimcheck_api::config::{PaymentServiceConfig, ServerConfig, TranscriptServiceConfig};
use claimcheck_api::payments::PaymentClient;
use claimcheck_api::router::build_app_router;
use claimcheck_api::state::AppState;
use claimcheck_llm::{LlmClient, LlmConfig};
use claimcheck_transcript::TranscriptClient;

/// Admin token configured on every test app built by [`build_test_app`].
pub const TEST_ADMIN_TOKEN: &str = "test-admin-token";

// ---------------------------------------------------------------------------
// Stub services
// ---------------------------------------------------------------------------

/// Handle to a running stub service.
pub struct StubHandle {
    /// Base URL of the stub, e.g. `http://127.0.0.1:49152`.
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<serde_json::Value>>>,
}

impl StubHandle {
    /// Number of requests the stub has served.
    pub fn hit_count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// The most recent request body, if any.
    pub fn last_request(&self) -> Option<serde_json::Value> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    reply: Arc<serde_json::Value>,
    hits: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<serde_json::Value>>>,
}

async fn stub_handler(
    State(stub): State<StubState>,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    stub.hits.fetch_add(1, Ordering::SeqCst);
    stub.requests.lock().unwrap().push(body);
    (stub.status, Json((*stub.reply).clone()))
}

/// Spawn a stub service answering POSTs on `path` with `status` and `reply`.
pub async fn spawn_stub(path: &str, status: StatusCode, reply: serde_json::Value) -> StubHandle {
    let hits = Arc::new(AtomicUsize::new(0));
    let requests = Arc::new(Mutex::new(Vec::new()));

    let state = StubState {
        status,
        reply: Arc::new(reply),
        hits: Arc::clone(&hits),
        requests: Arc::clone(&requests),
    };
    let app = Router::new().route(path, post(stub_handler)).with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubHandle {
        base_url: format!("http://{addr}"),
        hits,
        requests,
    }
}

// ---------------------------------------------------------------------------
// Stub configuration
// ---------------------------------------------------------------------------

/// Knobs for the stub services behind a test app.
///
/// Defaults describe the happy path: every service up, the oracle returning
/// a well-formed analysis. Override individual fields with struct-update
/// syntax to steer a scenario.
pub struct StubConfig {
    pub llm_status: StatusCode,
    pub llm_reply: serde_json::Value,
    pub transcript_status: StatusCode,
    pub transcript_reply: serde_json::Value,
    /// When false, the app is built without a transcript client.
    pub transcript_enabled: bool,
    pub payment_status: StatusCode,
    pub payment_reply: serde_json::Value,
    /// When false, the app is built without a payment client.
    pub payments_enabled: bool,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            llm_status: StatusCode::OK,
            llm_reply: oracle_reply(&valid_analysis_json().to_string()),
            transcript_status: StatusCode::OK,
            transcript_reply: serde_json::json!({
                "transcript": "I made forty grand in a month with this AI side hustle.",
                "description": "Creator pitching an AI automation hustle.",
            }),
            transcript_enabled: true,
            payment_status: StatusCode::OK,
            payment_reply: serde_json::json!({ "url": "https://pay.example/session/test" }),
            payments_enabled: true,
        }
    }
}

/// A well-formed analysis payload, shaped the way the oracle is instructed
/// to answer.
pub fn valid_analysis_json() -> serde_json::Value {
    serde_json::json!({
        "plainEnglish": "Reselling AI chat automations to local gyms.",
        "truths": [
            "Selling automation to gyms is a real service business.",
            "Monthly retainers for messaging tools are common.",
            "Gyms do churn through lead-follow-up tools.",
        ],
        "effortScore": 7,
        "isEasy": "No",
        "whyFeelsEasy": "The pitch makes setup sound like an afternoon of clicking.",
        "whyNot": "Selling to local businesses means cold outreach and churn.",
        "realisticTime": "6-12 months to a stable client base.",
        "verdict": "Possible, but it is a sales job, not passive income.",
        "whatWorks": "Pick one niche, charge setup plus retainer, ask for referrals.",
    })
}

/// Wrap `text` in the message envelope the model API returns.
pub fn oracle_reply(text: &str) -> serde_json::Value {
    serde_json::json!({
        "content": [{ "type": "text", "text": text }],
    })
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Everything a test needs: the app plus handles to its stub services.
pub struct TestApp {
    pub app: Router,
    pub llm: StubHandle,
    pub transcript: StubHandle,
    pub payments: StubHandle,
}

/// Build a test app with the default admin token.
pub async fn build_test_app(pool: PgPool, stubs: StubConfig) -> TestApp {
    build_test_app_with(pool, stubs, Some(TEST_ADMIN_TOKEN.to_string())).await
}

/// Build a test app against freshly spawned stub services.
///
/// The router, middleware stack, and state wiring are the production ones
/// from [`build_app_router`]; only the service base URLs differ.
pub async fn build_test_app_with(
    pool: PgPool,
    stubs: StubConfig,
    admin_token: Option<String>,
) -> TestApp {
    let llm = spawn_stub("/v1/messages", stubs.llm_status, stubs.llm_reply).await;
    let transcript = spawn_stub("/transcribe", stubs.transcript_status, stubs.transcript_reply).await;
    let payments = spawn_stub("/sessions", stubs.payment_status, stubs.payment_reply).await;

    let mut llm_config = LlmConfig::new("test-api-key".to_string());
    llm_config.base_url = llm.base_url.clone();

    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        admin_token,
        llm: llm_config.clone(),
        transcript: Some(TranscriptServiceConfig {
            base_url: transcript.base_url.clone(),
            secret: "test-video-secret".to_string(),
        }),
        payments: Some(PaymentServiceConfig {
            base_url: payments.base_url.clone(),
            secret: "test-payment-secret".to_string(),
        }),
    };

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        llm: Arc::new(LlmClient::new(llm_config)),
        transcript: stubs.transcript_enabled.then(|| {
            Arc::new(TranscriptClient::new(
                transcript.base_url.clone(),
                "test-video-secret".to_string(),
            ))
        }),
        payments: stubs.payments_enabled.then(|| {
            Arc::new(PaymentClient::new(
                payments.base_url.clone(),
                "test-payment-secret".to_string(),
            ))
        }),
    };

    let app = build_app_router(state, &config);

    TestApp {
        app,
        llm,
        transcript,
        payments,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request to the app.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body to the app.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
