//! Analysis id generation.
//!
//! Ids are sortable by creation time and unique without coordination:
//! a millisecond timestamp joined to a short random suffix, e.g.
//! `1767225600000-k3f9qz`.

use chrono::Utc;
use rand::Rng;

/// Characters allowed in the random id suffix (lowercase base36).
const SUFFIX_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of the random suffix.
const SUFFIX_LENGTH: usize = 6;

/// Generate a new analysis id.
///
/// Format: `{unix_millis}-{6 base36 chars}`. The suffix keeps ids distinct
/// when two analyses land in the same millisecond.
pub fn generate_analysis_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let mut rng = rand::rng();
    let suffix: String = (0..SUFFIX_LENGTH)
        .map(|_| SUFFIX_CHARSET[rng.random_range(0..SUFFIX_CHARSET.len())] as char)
        .collect();
    format!("{millis}-{suffix}")
}
