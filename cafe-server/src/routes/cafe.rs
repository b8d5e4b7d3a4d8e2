use axum::Router;
use axum::routing::get;

use crate::core::ServerState;
use crate::handler;

/// Cafe router - public CRUD endpoints
pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/cafes",
            get(handler::cafe::list).post(handler::cafe::create),
        )
        .route(
            "/api/cafes/{id}",
            get(handler::cafe::get)
                .put(handler::cafe::update)
                .delete(handler::cafe::delete),
        )
}
