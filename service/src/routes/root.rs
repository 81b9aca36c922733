use axum::routing::get;
use axum::{Json, Router};
use common::dtos::{HealthDto, RootDto, RootLinks};
use common::util::consts::{NAME, VERSION};

pub fn create_route() -> Router {
    Router::new().route("/", get(root_links)).route("/health", get(health))
}

pub async fn root_links() -> Json<RootDto> {
    Json(RootDto {
        version: VERSION,
        name: NAME,
        _links: RootLinks {
            convert: "/convert",
            health: "/health",
        },
    })
}

#[tracing::instrument]
pub async fn health() -> Json<HealthDto> {
    Json(HealthDto { ok: true })
}
