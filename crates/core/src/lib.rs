//! ClaimCheck domain logic.
//!
//! Everything needed to turn a submission into a persisted analysis record,
//! minus the I/O:
//!
//! - [`input`] -- submission classification (manual text vs. video link) and
//!   the stored input echo.
//! - [`prompt`] -- the oracle system prompt and user-message templates.
//! - [`record`] -- the analysis payload contract and assembled record.
//! - [`sanitize`] -- fence stripping and strict parsing of oracle replies.
//! - [`ids`] -- time-prefixed analysis id generation.
//! - [`unlock`] / [`view`] -- the client-side paywall and navigation state
//!   machines.

pub mod error;
pub mod ids;
pub mod input;
pub mod prompt;
pub mod record;
pub mod sanitize;
pub mod types;
pub mod unlock;
pub mod view;

pub use error::AnalysisParseError;
pub use input::{AnalysisInput, InputSummary};
pub use record::{AnalysisPayload, AnalysisRecord, EasyRating};
