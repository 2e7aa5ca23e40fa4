use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct Health {
    status: &'static str,
    pathways: usize,
}

pub async fn health_check() -> Json<Health> {
    Json(Health {
        status: "ok",
        pathways: intake_pathways::all_pathways().len(),
    })
}
