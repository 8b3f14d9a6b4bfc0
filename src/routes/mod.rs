mod glosses;
mod health;
mod predict;

use crate::server::SharedState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::healthcheck))
        .route("/predict", post(predict::predict_upload))
        .route("/predict-base64", post(predict::predict_base64))
        .route("/glosses", get(glosses::list_glosses))
}
