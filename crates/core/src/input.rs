//! Input classification for analysis submissions.
//!
//! A submission is either a manually entered idea/claim pair or a social
//! video link. Classification is purely syntactic: a string that parses as
//! an absolute URL selects video mode. Whether the video is reachable is
//! decided later by the transcript fetch.

use serde::{Deserialize, Serialize};
use url::Url;

/// Maximum number of transcript characters kept in the stored input echo.
pub const TRANSCRIPT_EXCERPT_MAX_CHARS: usize = 200;

/// True when `s` parses as an absolute URL (scheme required).
pub fn is_video_url(s: &str) -> bool {
    Url::parse(s).is_ok()
}

// ---------------------------------------------------------------------------
// Classified input
// ---------------------------------------------------------------------------

/// A classified analysis submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisInput {
    /// Manually entered idea and income claim.
    Manual {
        idea: String,
        claim: String,
        timeframe: Option<String>,
    },
    /// A social video to transcribe and analyze.
    Video { url: String },
}

impl AnalysisInput {
    /// Classify a raw submission.
    ///
    /// Video mode requires a present, URL-shaped `video_url`; everything
    /// else falls through to manual mode with whatever text fields were
    /// supplied.
    pub fn classify(
        idea: Option<String>,
        claim: Option<String>,
        timeframe: Option<String>,
        video_url: Option<String>,
    ) -> Self {
        match video_url {
            Some(url) if is_video_url(&url) => Self::Video { url },
            _ => Self::Manual {
                idea: idea.unwrap_or_default(),
                claim: claim.unwrap_or_default(),
                timeframe,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Stored input echo
// ---------------------------------------------------------------------------

/// Echo of the submission stored inside the analysis record.
///
/// Video summaries keep only the leading [`TRANSCRIPT_EXCERPT_MAX_CHARS`]
/// characters of the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputSummary {
    Video {
        #[serde(rename = "videoUrl")]
        video_url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        transcript: Option<String>,
    },
    Manual {
        idea: String,
        claim: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        timeframe: Option<String>,
    },
}

impl InputSummary {
    /// Summary of a manual submission, stored as given.
    pub fn manual(idea: String, claim: String, timeframe: Option<String>) -> Self {
        Self::Manual {
            idea,
            claim,
            timeframe,
        }
    }

    /// Summary of a video submission, with the transcript truncated to the
    /// excerpt limit.
    pub fn video(video_url: String, transcript: Option<&str>) -> Self {
        Self::Video {
            video_url,
            transcript: transcript.map(excerpt),
        }
    }
}

/// Take at most [`TRANSCRIPT_EXCERPT_MAX_CHARS`] characters, never splitting
/// a character.
fn excerpt(text: &str) -> String {
    text.chars().take(TRANSCRIPT_EXCERPT_MAX_CHARS).collect()
}
