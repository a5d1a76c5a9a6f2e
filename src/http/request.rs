//! Request body parsing.
//!
//! # Responsibilities
//! - Accept contact fields as JSON or urlencoded form bodies
//! - Turn malformed bodies into the standard validation failure
//!
//! # Design Decisions
//! - Content type picks the parser; anything that is not a form is
//!   treated as JSON, matching what browser clients send
//! - Rejections reuse `ContactError` so the envelope stays uniform

use axum::extract::{Form, FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::Json;

use crate::contacts::model::ContactDraft;
use crate::contacts::ContactError;

/// Contact fields extracted from a JSON or urlencoded request body.
pub struct ContactPayload(pub ContactDraft);

impl<S> FromRequest<S> for ContactPayload
where
    S: Send + Sync,
{
    type Rejection = ContactError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|ct| ct.starts_with("application/x-www-form-urlencoded"))
            .unwrap_or(false);

        let draft = if is_form {
            Form::<ContactDraft>::from_request(req, state)
                .await
                .map_err(|e| ContactError::Validation(format!("malformed form body: {}", e)))?
                .0
        } else {
            Json::<ContactDraft>::from_request(req, state)
                .await
                .map_err(|e| ContactError::Validation(format!("malformed JSON body: {}", e)))?
                .0
        };

        Ok(Self(draft))
    }
}
