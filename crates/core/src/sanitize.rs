//! Cleanup and parsing of raw oracle replies.
//!
//! The prompt demands raw JSON, but models still wrap replies in markdown
//! fences often enough that one leading and one trailing fence are stripped
//! before parsing. Parsing distinguishes not-JSON from JSON that breaks the
//! analysis schema.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::AnalysisParseError;
use crate::record::AnalysisPayload;

/// One fence at the start of the reply, optional language tag (```json).
static LEADING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^```(?:json)?\s*").expect("valid regex"));

/// One fence at the end of the reply.
static TRAILING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```\s*$").expect("valid regex"));

/// Strip markdown code fences from a raw oracle reply.
///
/// Removes at most one leading and one trailing fence, then trims
/// surrounding whitespace. Already-clean JSON passes through unchanged, so
/// the function is idempotent.
pub fn strip_code_fences(raw: &str) -> String {
    let without_leading = LEADING_FENCE.replace(raw, "");
    let without_trailing = TRAILING_FENCE.replace(&without_leading, "");
    without_trailing.trim().to_string()
}

/// Parse a raw oracle reply into a validated [`AnalysisPayload`].
///
/// Text that is not JSON at all maps to [`AnalysisParseError::Malformed`];
/// JSON that does not satisfy the payload contract (wrong shape, unknown
/// `isEasy` value, out-of-range `effortScore`) maps to
/// [`AnalysisParseError::Schema`]. There is no partial recovery.
pub fn parse_analysis(raw: &str) -> Result<AnalysisPayload, AnalysisParseError> {
    let cleaned = strip_code_fences(raw);
    let value: serde_json::Value = serde_json::from_str(&cleaned)?;
    let payload: AnalysisPayload =
        serde_json::from_value(value).map_err(|e| AnalysisParseError::Schema(e.to_string()))?;
    payload.validate()?;
    Ok(payload)
}
