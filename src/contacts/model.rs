//! Contact entity and request payload types.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted address-book entry.
///
/// `id` is assigned by the store on insert and never changes or gets
/// reused afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
}

/// Incoming fields for a create or update.
///
/// All fields default so a missing key surfaces as a validation failure
/// instead of a deserialization error.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ContactDraft {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl ContactDraft {
    /// Trim the required fields and collapse empty optional fields to
    /// `None` so the store persists NULL rather than "".
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: none_if_blank(self.email),
            address: none_if_blank(self.address),
        }
    }
}

fn none_if_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_trims_and_drops_blanks() {
        let draft = ContactDraft {
            name: "  Alice  ".into(),
            phone: " 13900001234 ".into(),
            email: Some("".into()),
            address: Some("  ".into()),
        };
        let normalized = draft.normalized();
        assert_eq!(normalized.name, "Alice");
        assert_eq!(normalized.phone, "13900001234");
        assert_eq!(normalized.email, None);
        assert_eq!(normalized.address, None);
    }

    #[test]
    fn populated_optionals_survive_normalization() {
        let draft = ContactDraft {
            name: "Bob".into(),
            phone: "13800001111".into(),
            email: Some("bob@example.com".into()),
            address: Some("42 Elm St".into()),
        };
        let normalized = draft.normalized();
        assert_eq!(normalized.email.as_deref(), Some("bob@example.com"));
        assert_eq!(normalized.address.as_deref(), Some("42 Elm St"));
    }

    #[test]
    fn draft_tolerates_missing_fields() {
        let draft: ContactDraft = serde_json::from_str(r#"{"name":"Eve"}"#).unwrap();
        assert_eq!(draft.name, "Eve");
        assert_eq!(draft.phone, "");
        assert_eq!(draft.email, None);
    }
}
