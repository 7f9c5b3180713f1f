//! The analysis record: the oracle's nine critique fields plus the locally
//! attached id and input echo.
//!
//! Payload fields come verbatim from the oracle JSON and are never
//! synthesized here; `id` and `input` are attached by the orchestrator and
//! never produced by the oracle.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisParseError;
use crate::input::InputSummary;
use crate::types::AnalysisId;

/// Lower bound of [`AnalysisPayload::effort_score`].
pub const EFFORT_SCORE_MIN: i64 = 1;

/// Upper bound of [`AnalysisPayload::effort_score`].
pub const EFFORT_SCORE_MAX: i64 = 10;

/// How achievable the oracle judged the claim.
///
/// Wire values are pinned by the prompt contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EasyRating {
    Yes,
    No,
    #[serde(rename = "Only if experienced")]
    OnlyIfExperienced,
}

/// The nine critique fields the oracle must return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisPayload {
    /// 1-2 sentence plain-English restatement of the idea.
    pub plain_english: String,
    /// Hard truths about the claim. The prompt asks for 3-5 bullets but the
    /// count is not enforced.
    pub truths: Vec<String>,
    /// Integer effort score, 1 (trivial) to 10 (grind).
    pub effort_score: i64,
    pub is_easy: EasyRating,
    pub why_feels_easy: String,
    pub why_not: String,
    pub realistic_time: String,
    /// Paid section: the closing judgement.
    pub verdict: String,
    /// Paid section: what to do instead.
    pub what_works: String,
}

impl AnalysisPayload {
    /// Check the invariants deserialization cannot express.
    ///
    /// `effortScore` must lie in [`EFFORT_SCORE_MIN`]..=[`EFFORT_SCORE_MAX`].
    pub fn validate(&self) -> Result<(), AnalysisParseError> {
        if !(EFFORT_SCORE_MIN..=EFFORT_SCORE_MAX).contains(&self.effort_score) {
            return Err(AnalysisParseError::Schema(format!(
                "effortScore must be between {EFFORT_SCORE_MIN} and {EFFORT_SCORE_MAX} (got {})",
                self.effort_score
            )));
        }
        Ok(())
    }
}

/// A completed analysis. Written once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: AnalysisId,
    #[serde(flatten)]
    pub payload: AnalysisPayload,
    pub input: InputSummary,
}
