//! HTTP handlers for the contact endpoints.
//!
//! Each handler is a thin adapter from the HTTP surface to the repository,
//! translating domain failures into status codes at this boundary.

use crate::domain::ContactId;
use crate::error::RepositoryError;
use crate::models::{Contact, ContactPayload};
use crate::repositories::ContactRepository;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Contact storage behind the repository trait
    pub repository: Arc<dyn ContactRepository>,
}

impl AppState {
    /// Create state around the given repository.
    pub fn new(repository: Arc<dyn ContactRepository>) -> Self {
        Self { repository }
    }
}

/// JSON body sent with every non-2xx response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable description of what went wrong
    pub error: String,
}

/// Errors a handler can answer with.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request body failed deserialization or field validation
    #[error("{0}")]
    Validation(String),

    /// No contact exists under the requested id
    #[error("contact {0} not found")]
    NotFound(ContactId),

    /// The storage layer failed; details stay in the server log
    #[error("storage backend failure: {0}")]
    Internal(String),
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => ApiError::NotFound(id),
            RepositoryError::Backend(message) => ApiError::Internal(message),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            err @ ApiError::NotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
            ApiError::Internal(message) => {
                tracing::error!("request failed: {}", message);
                // Backend details are for the log, not the client.
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// GET /contacts/{id}
pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Contact>, ApiError> {
    let id = ContactId::new(id);
    tracing::debug!("fetching contact {}", id);

    let contact = state.repository.find_by_id(id).await?;
    Ok(Json(contact))
}

/// GET /contacts
pub async fn list_contacts(
    State(state): State<AppState>,
) -> Result<Json<Vec<Contact>>, ApiError> {
    let contacts = state.repository.find_all().await?;
    tracing::debug!("listing {} contacts", contacts.len());
    Ok(Json(contacts))
}

/// POST /contacts
pub async fn create_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactPayload>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(payload) = payload?;

    let id = state.repository.save(payload.into_contact()).await?;
    tracing::info!("created contact {}", id);
    Ok(StatusCode::OK)
}

/// PUT /contacts/{id}
pub async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    payload: Result<Json<ContactPayload>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    // An invalid body answers 400 even when the id is unknown, so the
    // payload is checked before the store is consulted.
    let Json(payload) = payload?;

    let id = ContactId::new(id);
    state.repository.find_by_id(id).await?;

    let mut replacement = payload.into_contact();
    replacement.id = Some(id);
    state.repository.save(replacement).await?;

    tracing::info!("updated contact {}", id);
    Ok(StatusCode::OK)
}

/// DELETE /contacts/{id}
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    let id = ContactId::new(id);
    state.repository.delete_by_id(id).await?;

    tracing::info!("deleted contact {}", id);
    Ok(StatusCode::OK)
}
