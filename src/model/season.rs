use serde::{Deserialize, Serialize};

use super::modifier::ModifierRecord;

/// A campaign season: display name plus additive modifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub modifiers: ModifierRecord,
}

impl Season {
    /// Case-insensitive match on the display name.
    pub fn matches_name(&self, candidate: &str) -> bool {
        self.name.trim().eq_ignore_ascii_case(candidate.trim())
    }
}
