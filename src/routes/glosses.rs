use crate::vocabulary::GLOSSES;
use axum::{response::IntoResponse, response::Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct GlossList {
    glosses: Vec<&'static str>,
}

pub async fn list_glosses() -> impl IntoResponse {
    Json(GlossList {
        glosses: GLOSSES.to_vec(),
    })
}
