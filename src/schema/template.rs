use serde::{Deserialize, Serialize};

/// A story template: free text containing `[category]` placeholders,
/// identified by a short human-shareable code.
///
/// The text is treated as immutable once generation begins; editing
/// happens in the authoring surface, which saves a new revision under
/// the same share id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub title: String,
    pub text: String,
    pub share_id: String,
}

impl Template {
    pub fn new(title: impl Into<String>, text: impl Into<String>, share_id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            share_id: share_id.into(),
        }
    }
}
