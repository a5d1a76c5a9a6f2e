//! Contact input validation.
//!
//! # Responsibilities
//! - Required-field checks (name, phone)
//! - Phone format check: 11-digit mobile number, leading 1, second digit 3-9
//!
//! # Design Decisions
//! - Validation is a pure function over an already-normalized draft
//! - Field errors carry the message shown to the client verbatim

use once_cell::sync::Lazy;
use regex::Regex;

use crate::contacts::model::ContactDraft;
use crate::contacts::ContactError;

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^1[3-9]\d{9}$").expect("phone pattern compiles"));

/// Check a normalized draft, signalling `ContactError::Validation` on the
/// first broken rule.
pub fn validate_draft(draft: &ContactDraft) -> Result<(), ContactError> {
    if draft.name.is_empty() || draft.phone.is_empty() {
        return Err(ContactError::Validation(
            "name and phone are required".to_string(),
        ));
    }
    if !PHONE_PATTERN.is_match(&draft.phone) {
        return Err(ContactError::Validation(
            "invalid phone number format".to_string(),
        ));
    }
    Ok(())
}
