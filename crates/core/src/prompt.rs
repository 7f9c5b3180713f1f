//! Prompt construction for the analysis oracle.
//!
//! The system prompt pins the output contract (raw JSON matching
//! [`crate::record::AnalysisPayload`]); the user message carries the
//! submission. Both are deterministic functions of their inputs.

use crate::input::AnalysisInput;

/// System prompt sent with every analysis request.
///
/// The JSON structure embedded here is the deserialization contract of
/// [`crate::record::AnalysisPayload`]; keep the two in sync.
pub const SYSTEM_PROMPT: &str = r#"You are ClaimCheck — a sharp, calm, precise BS detector for AI income claims from social media.

Your job: stress-test the claim. No fluff. No hedging. No business theory essays.

You may receive either:
- A manually entered idea and income claim
- A transcript and description from a TikTok/Instagram/YouTube video

In both cases, extract what's being claimed and run the full analysis.

Respond ONLY with a valid JSON object. No markdown. No code fences. Raw JSON only.

JSON structure:
{
  "plainEnglish": "1-2 sentences. What this actually is.",
  "truths": ["bullet 1", "bullet 2", "bullet 3", "bullet 4"],
  "effortScore": 7,
  "isEasy": "No",
  "whyFeelsEasy": "Short punchy explanation.",
  "whyNot": "Short punchy explanation.",
  "realisticTime": "3–9 months",
  "verdict": "One strong closing sentence.",
  "whatWorks": "2-3 sentences. Concrete alternative. Specific. Actionable."
}

Rules:
- effortScore: 1–10 integer
- isEasy: exactly one of "Yes", "No", "Only if experienced"
- Output raw JSON only. No markdown. No backticks. No code fences."#;

/// Placeholder when a video carried no usable speech.
const NO_SPEECH_PLACEHOLDER: &str = "(no speech detected)";

/// Placeholder when a video carried no description.
const NO_DESCRIPTION_PLACEHOLDER: &str = "(no description)";

/// Placeholder when the submitter gave no timeframe.
const NO_TIMEFRAME_PLACEHOLDER: &str = "not specified";

/// Build the oracle user message for a classified submission.
///
/// `transcript` and `description` are only consulted for video submissions.
pub fn build_user_message(
    input: &AnalysisInput,
    transcript: Option<&str>,
    description: Option<&str>,
) -> String {
    match input {
        AnalysisInput::Manual {
            idea,
            claim,
            timeframe,
        } => manual_user_message(idea, claim, timeframe.as_deref()),
        AnalysisInput::Video { url } => video_user_message(url, transcript, description),
    }
}

/// User message for a manually entered idea and claim.
pub fn manual_user_message(idea: &str, claim: &str, timeframe: Option<&str>) -> String {
    let timeframe = non_empty_or(timeframe, NO_TIMEFRAME_PLACEHOLDER);
    format!(
        "AI Business Idea: {idea}\n\
         Income Claim: {claim}\n\
         Timeframe: {timeframe}\n\
         \n\
         Run the full analysis."
    )
}

/// User message for a submitted video, built from the fetched transcript.
///
/// Missing or empty transcript and description are replaced with explicit
/// placeholders rather than dropped from the template.
pub fn video_user_message(
    video_url: &str,
    transcript: Option<&str>,
    description: Option<&str>,
) -> String {
    let transcript = non_empty_or(transcript, NO_SPEECH_PLACEHOLDER);
    let description = non_empty_or(description, NO_DESCRIPTION_PLACEHOLDER);
    format!(
        "The user submitted a social media video for analysis.\n\
         Video URL: {video_url}\n\
         \n\
         Video transcript:\n\
         {transcript}\n\
         \n\
         Video description:\n\
         {description}\n\
         \n\
         Identify what AI business idea and income claim is being promoted in this video, \
         then run the full ClaimCheck analysis."
    )
}

/// The value itself when present and non-empty, otherwise the placeholder.
fn non_empty_or<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => placeholder,
    }
}
