use axum::Router;
use axum::routing::get;

use crate::core::ServerState;
use crate::handler;

/// Employee router - public CRUD endpoints
pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/employees",
            get(handler::employee::list).post(handler::employee::create),
        )
        .route(
            "/api/employees/{id}",
            get(handler::employee::get)
                .put(handler::employee::update)
                .delete(handler::employee::delete),
        )
}
