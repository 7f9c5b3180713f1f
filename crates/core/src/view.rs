//! Top-level view state for the client shell.
//!
//! One authoritative enum instead of scattered booleans. The admin view is
//! entered only at page load (admin path plus capability token) and is never
//! left by in-page events.
//!
//! Transition table (anything not listed keeps the current view):
//! - `Landing` --Start-->          `Form`
//! - `Form`    --ResultReady-->    `Result`
//! - `Result`  --AnalyzeAnother--> `Form`
//! - any non-admin --GoHome-->     `Landing`

use serde::{Deserialize, Serialize};

use crate::input::AnalysisInput;

/// Progress copy shown while a video analysis is in flight.
pub const VIDEO_LOADING_MESSAGE: &str = "Fetching the video... this takes ~30 seconds";

/// Progress copy shown while a manual analysis is in flight.
pub const MANUAL_LOADING_MESSAGE: &str = "Running the numbers...";

/// Which top-level view the client is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewState {
    Landing,
    Form,
    Result,
    Admin,
}

/// In-page navigation events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    /// The viewer started a new analysis from the landing page.
    Start,
    /// An analysis response arrived.
    ResultReady,
    /// The viewer asked for a fresh form from the result view.
    AnalyzeAnother,
    /// The viewer navigated home.
    GoHome,
}

impl ViewState {
    /// Initial view for a page load.
    pub fn initial(admin_page: bool) -> Self {
        if admin_page {
            Self::Admin
        } else {
            Self::Landing
        }
    }

    /// Advance the view by one navigation event.
    pub fn apply(self, event: ViewEvent) -> Self {
        match (self, event) {
            (Self::Admin, _) => Self::Admin,
            (Self::Landing, ViewEvent::Start) => Self::Form,
            (Self::Form, ViewEvent::ResultReady) => Self::Result,
            (Self::Result, ViewEvent::AnalyzeAnother) => Self::Form,
            (_, ViewEvent::GoHome) => Self::Landing,
            (state, _) => state,
        }
    }
}

/// Loading copy for an in-flight submission. Video fetches take much longer,
/// so the viewer is warned up front.
pub fn loading_message(input: &AnalysisInput) -> &'static str {
    match input {
        AnalysisInput::Video { .. } => VIDEO_LOADING_MESSAGE,
        AnalysisInput::Manual { .. } => MANUAL_LOADING_MESSAGE,
    }
}
