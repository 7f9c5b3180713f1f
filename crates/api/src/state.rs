use std::sync::Arc;

use claimcheck_db::DbPool;
use claimcheck_llm::LlmClient;
use claimcheck_transcript::TranscriptClient;

use crate::config::ServerConfig;
use crate::payments::PaymentClient;

/// Shared application state, injected into handlers via `State<AppState>`.
///
/// Everything here is cheap to clone: the pool is internally reference
/// counted and the clients sit behind `Arc`. Handlers never reach for
/// globals; tests build an `AppState` pointing at stub services instead.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Model oracle client.
    pub llm: Arc<LlmClient>,
    /// Transcription service client, `None` when not deployed with one.
    pub transcript: Option<Arc<TranscriptClient>>,
    /// Payment-session client, `None` when checkout is disabled.
    pub payments: Option<Arc<PaymentClient>>,
}
