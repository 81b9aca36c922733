pub mod error;
pub mod routes;
pub mod state;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::Services;

pub fn build_app(services: Services) -> Router {
    Router::new()
        .merge(routes::root::create_route())
        .merge(routes::convert::create_route(services))
        // Upload size is bounded by the incoming request, not by the relay.
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
}
