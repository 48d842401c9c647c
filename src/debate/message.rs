use chrono::{DateTime, Utc};
use serde::Serialize;

use super::Side;

/// A transcript entry. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    /// Side that spoke.
    pub side: Side,
    /// Name shown next to the message, resolved when it was created.
    pub display_name: String,
    /// Text of the message.
    pub body: String,
    /// When the message was appended.
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(side: Side, display_name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            side,
            display_name: display_name.into(),
            body: body.into(),
            timestamp: Utc::now(),
        }
    }
}
