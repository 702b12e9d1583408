//! Delivery API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/delivery", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/quote", get(handler::quote))
        .route("/rush", get(handler::rush_status).post(handler::toggle_rush))
}
