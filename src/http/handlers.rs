//! Route handlers for the contact API.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::contacts::model::Contact;
use crate::contacts::ContactError;
use crate::http::request::ContactPayload;
use crate::http::response::ApiResponse;
use crate::http::server::AppState;

/// Liveness probe payload.
#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn list_contacts(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Contact>>>, ContactError> {
    let contacts = state.contacts.list().await?;
    Ok(Json(ApiResponse::ok(contacts)))
}

pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Contact>>, ContactError> {
    let contact = state.contacts.get(parse_id(&id)?).await?;
    Ok(Json(ApiResponse::ok(contact)))
}

pub async fn create_contact(
    State(state): State<AppState>,
    ContactPayload(draft): ContactPayload,
) -> Result<(StatusCode, Json<ApiResponse<Contact>>), ContactError> {
    let contact = state.contacts.create(draft).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(contact, "contact added")),
    ))
}

pub async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ContactPayload(draft): ContactPayload,
) -> Result<Json<ApiResponse<Contact>>, ContactError> {
    let contact = state.contacts.update(parse_id(&id)?, draft).await?;
    Ok(Json(ApiResponse::ok_with_message(contact, "contact updated")))
}

pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ContactError> {
    state.contacts.delete(parse_id(&id)?).await?;
    Ok(Json(ApiResponse::message("contact deleted")))
}

/// Catch-all for unmatched paths.
pub async fn route_not_found() -> (StatusCode, Json<ApiResponse<()>>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::failure("route not found")),
    )
}

fn parse_id(raw: &str) -> Result<i64, ContactError> {
    raw.parse()
        .map_err(|_| ContactError::Validation(format!("invalid contact id '{}'", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_ids_parse() {
        assert_eq!(parse_id("42").unwrap(), 42);
    }

    #[test]
    fn garbage_ids_are_validation_failures() {
        for raw in ["abc", "1.5", "", "9999999999999999999999"] {
            let err = parse_id(raw).unwrap_err();
            assert!(matches!(err, ContactError::Validation(_)), "{raw}");
        }
    }
}
