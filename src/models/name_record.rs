//! Name record model matching the client's name result card.

use serde::{Deserialize, Serialize};

/// Structured lookup result for a single name.
///
/// Produced by the lookup service and never mutated afterwards; the favorites
/// store only copies a projection of it (see [`super::FavoriteEntry`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameRecord {
    pub name: String,
    pub meaning: String,
    pub origin: String,
    pub phonetic_pronunciation: String,
    /// Literal pronunciation text that replaces the generated guide
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<String>,
    #[serde(default)]
    pub variants: Vec<String>,
    #[serde(default)]
    pub famous_people: Vec<String>,
}

impl NameRecord {
    /// Text shown in the pronunciation panel.
    pub fn pronunciation_guide(&self) -> String {
        match &self.pronunciation {
            Some(text) => text.clone(),
            None => format!(
                "{} is pronounced as \"{}\"",
                self.name, self.phonetic_pronunciation
            ),
        }
    }
}

/// Lookup response body: the record plus its rendered pronunciation guide.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameLookupResponse {
    #[serde(flatten)]
    pub record: NameRecord,
    pub pronunciation_guide: String,
}

impl From<NameRecord> for NameLookupResponse {
    fn from(record: NameRecord) -> Self {
        let pronunciation_guide = record.pronunciation_guide();
        Self {
            record,
            pronunciation_guide,
        }
    }
}

/// Request body for a lookup submitted as JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct NameLookupRequest {
    #[serde(default)]
    pub name: String,
}
