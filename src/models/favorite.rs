//! Favorite entry model matching the client's saved-name list.

use serde::{Deserialize, Serialize};

/// Reduced projection of a name record kept in the favorites list.
///
/// Unknown fields are ignored on input, so a full record can be posted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteEntry {
    pub name: String,
    pub meaning: String,
    pub origin: String,
}

/// Favorited state of a single name.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteStatus {
    pub name: String,
    pub is_favorite: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extra_fields_are_ignored() {
        let entry: FavoriteEntry = serde_json::from_str(
            r#"{"name":"Ada","meaning":"noble","origin":"Germanic","variants":["Adah"]}"#,
        )
        .unwrap();
        assert_eq!(entry.name, "Ada");
    }
}
