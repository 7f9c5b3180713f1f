/// Failures while turning raw oracle text into an [`AnalysisPayload`].
///
/// `Malformed` means the reply was not JSON at all; `Schema` means it was
/// JSON but not the analysis contract. Both are logged with their cause and
/// surface to callers as a generic analysis failure.
///
/// [`AnalysisPayload`]: crate::record::AnalysisPayload
#[derive(Debug, thiserror::Error)]
pub enum AnalysisParseError {
    #[error("analysis reply is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("analysis reply violates the response schema: {0}")]
    Schema(String),
}
