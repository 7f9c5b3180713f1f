//! Handler for the analysis pipeline.
//!
//! One endpoint runs the whole pipeline: classify the submission, fetch a
//! transcript for video mode, build the prompt, invoke the model oracle,
//! parse the reply strictly, persist the record best-effort, and return
//! the complete record to the caller.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use claimcheck_core::ids::generate_analysis_id;
use claimcheck_core::prompt::{self, SYSTEM_PROMPT};
use claimcheck_core::sanitize::parse_analysis;
use claimcheck_core::{AnalysisInput, AnalysisRecord, InputSummary};
use claimcheck_db::repositories::AnalysisRepo;
use claimcheck_transcript::{TranscriptError, TranscriptResult};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Message shown when a manual submission has no income claim.
const CLAIM_REQUIRED_MESSAGE: &str = "Add the income claim.";

/// Request body for `POST /analyze`.
///
/// Every field is optional on the wire; classification decides the mode.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub idea: Option<String>,
    pub claim: Option<String>,
    pub timeframe: Option<String>,
    pub video_url: Option<String>,
}

/// POST /analyze
///
/// Run one analysis end to end and return the full record, including its
/// id and the echoed input summary. Persistence failures are logged and
/// swallowed; the caller still gets the analysis.
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> ApiResult<Json<AnalysisRecord>> {
    let input = AnalysisInput::classify(
        request.idea,
        request.claim,
        request.timeframe,
        request.video_url,
    );

    let (user_message, summary) = match &input {
        AnalysisInput::Video { url } => {
            let video = fetch_transcript(&state, url).await?;
            tracing::info!(
                video_url = %url,
                has_transcript = video.transcript.is_some(),
                "Video transcript fetched"
            );
            let message = prompt::build_user_message(
                &input,
                video.transcript.as_deref(),
                video.description.as_deref(),
            );
            let summary = InputSummary::video(url.clone(), video.transcript.as_deref());
            (message, summary)
        }
        AnalysisInput::Manual {
            idea,
            claim,
            timeframe,
        } => {
            if claim.trim().is_empty() {
                return Err(ApiError::Validation(CLAIM_REQUIRED_MESSAGE.to_string()));
            }
            let message = prompt::build_user_message(&input, None, None);
            let summary = InputSummary::manual(idea.clone(), claim.clone(), timeframe.clone());
            (message, summary)
        }
    };

    let reply = state.llm.complete(SYSTEM_PROMPT, &user_message).await?;
    let payload = parse_analysis(&reply)?;

    let record = AnalysisRecord {
        id: generate_analysis_id(),
        payload,
        input: summary,
    };

    persist_best_effort(&state, &record).await;

    tracing::info!(analysis_id = %record.id, model = state.llm.model(), "Analysis completed");

    Ok(Json(record))
}

/// Fetch transcript and description for a video submission.
///
/// A deployment without a transcription service treats every video
/// submission as unfetchable, which surfaces as the same user-facing 400.
async fn fetch_transcript(state: &AppState, url: &str) -> ApiResult<TranscriptResult> {
    let client = state
        .transcript
        .as_ref()
        .ok_or(TranscriptError::NotConfigured)?;
    Ok(client.fetch(url).await?)
}

/// Write the finished record to the database, logging any failure.
///
/// Persistence never affects the response.
async fn persist_best_effort(state: &AppState, record: &AnalysisRecord) {
    let data = match serde_json::to_value(record) {
        Ok(data) => data,
        Err(e) => {
            tracing::error!(error = %e, analysis_id = %record.id, "Failed to serialize analysis");
            return;
        }
    };

    if let Err(e) = AnalysisRepo::insert(&state.pool, &record.id, &data).await {
        tracing::error!(error = %e, analysis_id = %record.id, "Failed to persist analysis");
    }
}
