//! HTTP routes for submitting receipts and reading their points.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Json, Router,
    extract::{FromRequest, Path, Request, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::application::processor::ReceiptProcessor;
use crate::domain::receipt::{Receipt, ReceiptId};
use crate::error::ReceiptError;

/// Maximum accepted request body, in bytes (1 MiB).
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

/// Builds the service router around a shared processor.
pub fn create_router(processor: Arc<ReceiptProcessor>) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/:id/points", get(get_points))
        .layer(RequestBodyLimitLayer::new(DEFAULT_BODY_LIMIT))
        .layer(TraceLayer::new_for_http())
        .with_state(processor)
}

/// JSON body returned by `POST /receipts/process`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProcessResponse {
    pub id: String,
}

/// JSON body returned by `GET /receipts/{id}/points`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PointsResponse {
    pub points: u64,
}

/// Error body shared by every failing response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    status: StatusCode,
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "invalid_receipt", message)
    }
}

impl From<ReceiptError> for ApiError {
    fn from(err: ReceiptError) -> Self {
        match &err {
            ReceiptError::NotFound(_) => {
                Self::new(StatusCode::NOT_FOUND, "not_found", err.to_string())
            }
            other => {
                error!(error = %other, "request failed");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "Internal server error",
                )
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// JSON extractor that answers every malformed body with 400 Bad Request.
///
/// Axum's own `Json` uses 415 for a missing content type and 422 for bodies that
/// do not match the target type. Oversized bodies keep their 413.
pub struct JsonBadRequest<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBadRequest<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBadRequest(value)),
            Err(rejection) => Err(json_rejection_error(rejection)),
        }
    }
}

fn json_rejection_error(rejection: JsonRejection) -> ApiError {
    let message = rejection.body_text();
    if let JsonRejection::BytesRejection(_) = &rejection
        && rejection.status() == StatusCode::PAYLOAD_TOO_LARGE
    {
        return ApiError::new(StatusCode::PAYLOAD_TOO_LARGE, "payload_too_large", message);
    }
    warn!(%message, "rejected receipt body");
    ApiError::bad_request(message)
}

async fn process_receipt(
    State(processor): State<Arc<ReceiptProcessor>>,
    JsonBadRequest(receipt): JsonBadRequest<Receipt>,
) -> ApiResult<Json<ProcessResponse>> {
    let id = processor.process(receipt).await?;
    info!(%id, "receipt processed");
    Ok(Json(ProcessResponse { id: id.to_string() }))
}

async fn get_points(
    State(processor): State<Arc<ReceiptProcessor>>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    let id = ReceiptId::from(id);
    match processor.points(&id).await {
        Ok(points) => Ok(Json(PointsResponse { points })),
        Err(err) => {
            if let ReceiptError::NotFound(_) = err {
                warn!(%id, "points requested for unknown receipt");
            }
            Err(err.into())
        }
    }
}
