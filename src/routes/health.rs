use axum::{response::IntoResponse, response::Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct Banner {
    message: &'static str,
    status: &'static str,
}

pub async fn root() -> impl IntoResponse {
    Json(Banner {
        message: "Turkish Sign Language Recognition API",
        status: "active",
    })
}

#[derive(Serialize)]
pub struct Health {
    status: &'static str,
    model_loaded: bool,
}

pub async fn healthcheck() -> impl IntoResponse {
    Json(Health {
        status: "healthy",
        model_loaded: true,
    })
}
