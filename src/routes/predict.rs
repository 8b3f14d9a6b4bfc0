use crate::frame::{Frame, FrameError};
use crate::prediction::Prediction;
use crate::server::SharedState;
use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tracing::instrument;

#[derive(Error, Debug)]
pub enum PredictError {
    #[error("Invalid image data")]
    InvalidImage(#[source] FrameError),
    #[error("No image data provided")]
    MissingImage,
    #[error("Invalid base64 image: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
    #[error("Malformed multipart request: {0}")]
    Multipart(#[from] MultipartError),
    #[error("Prediction error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl PredictError {
    fn status_code(&self) -> StatusCode {
        match self {
            PredictError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for PredictError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("prediction request failed: {self}");
        }

        (
            status,
            Json(ErrorBody {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[derive(Serialize)]
pub struct PredictionResponse {
    success: bool,
    predicted_gloss: String,
    confidence: f64,
    timestamp: String,
}

impl From<Prediction> for PredictionResponse {
    fn from(prediction: Prediction) -> Self {
        Self {
            success: true,
            confidence: prediction.rounded_confidence(),
            predicted_gloss: prediction.gloss,
            timestamp: unix_timestamp(),
        }
    }
}

fn unix_timestamp() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
        .to_string()
}

/// Predict from a multipart upload carrying one image file field.
#[instrument(skip(state, multipart))]
pub async fn predict_upload(
    State(state): State<SharedState>,
    mut multipart: Multipart,
) -> Result<Json<PredictionResponse>, PredictError> {
    let mut image_data = None;

    while let Some(field) = multipart.next_field().await? {
        if field.file_name().is_some() || field.name() == Some("file") {
            image_data = Some(field.bytes().await?);
            break;
        }
    }

    let image_data = image_data.ok_or(PredictError::MissingImage)?;
    let frame = Frame::from_bytes(&image_data).map_err(PredictError::InvalidImage)?;

    let prediction = state.predictor.predict(&frame)?;
    tracing::debug!(gloss = %prediction.gloss, "served upload prediction");

    Ok(Json(prediction.into()))
}

#[derive(Deserialize)]
pub struct Base64Request {
    #[serde(default)]
    image: Option<String>,
}

/// Predict from a JSON payload with a base64 image, optionally carrying a
/// `data:image/...;base64,` prefix which is stripped at the first comma.
#[instrument(skip(state, request))]
pub async fn predict_base64(
    State(state): State<SharedState>,
    Json(request): Json<Base64Request>,
) -> Result<Json<PredictionResponse>, PredictError> {
    let encoded = request
        .image
        .filter(|image| !image.is_empty())
        .ok_or(PredictError::MissingImage)?;

    let encoded = match encoded.split_once(',') {
        Some((prefix, rest)) if prefix.starts_with("data:image") => rest.to_string(),
        _ => encoded,
    };

    let image_data = general_purpose::STANDARD.decode(encoded.trim())?;
    let frame = Frame::from_bytes(&image_data).map_err(PredictError::InvalidImage)?;

    let prediction = state.predictor.predict(&frame)?;
    tracing::debug!(gloss = %prediction.gloss, "served base64 prediction");

    Ok(Json(prediction.into()))
}
