//! intake-lambda
//!
//! HTTP surface of the adaptive questionnaire. Stateless: every handler works
//! off the static pathway registry and the request body.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use config::CorsOrigin;
use state::AppState;

pub fn router(state: AppState) -> Router {
    let origin = match &state.config.cors_origin {
        CorsOrigin::Any => AllowOrigin::from(Any),
        CorsOrigin::Exact(value) => AllowOrigin::exact(value.clone()),
    };
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/pathways", get(routes::pathways::list_pathways))
        .route("/pathways/resolve", post(routes::pathways::resolve))
        .route("/pathways/{key}", get(routes::pathways::get_pathway_detail))
        .route(
            "/pathways/{key}/visible",
            post(routes::pathways::visible_questions),
        )
        .route(
            "/pathways/{key}/red-flags",
            post(routes::pathways::red_flags),
        )
        .route(
            "/questionnaire/submission",
            post(routes::submissions::submit),
        )
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}

