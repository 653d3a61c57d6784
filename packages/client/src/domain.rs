//! Domain logic for the chat page.
//!
//! Pure functions without side effects, kept apart from the controller so
//! they are easy to test.

use guessme_shared::protocol::GameMessage;
use serde::Serialize;
use serde_json::Value;

/// One rendered-only record of the history region
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    #[serde(rename = "type")]
    pub kind: Value,
    pub input: Value,
    pub response: Value,
}

impl HistoryEntry {
    /// Build the history entry for `message`, if its kind records one.
    pub fn from_message(message: &GameMessage) -> Option<Self> {
        if !message.kind().records_history() {
            return None;
        }

        Some(Self {
            kind: message.kind.clone(),
            input: message.input.clone(),
            response: message.response.clone(),
        })
    }
}

/// Put a new fragment in front of the existing history content.
///
/// The existing content is treated as opaque text; newest entries come first.
pub fn prepend_fragment(fragment: &str, existing: &str) -> String {
    let mut content = String::with_capacity(fragment.len() + existing.len());
    content.push_str(fragment);
    content.push_str(existing);
    content
}
