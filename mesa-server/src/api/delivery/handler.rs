//! Delivery API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use shared::models::{DeliveryQuote, RushMode};

use crate::core::ServerState;
use crate::delivery::quote_catalog;
use crate::utils::{AppError, AppResult};

/// Quote query parameters
#[derive(Debug, Deserialize)]
pub struct QuoteQuery {
    /// Cart subtotal (currency units)
    pub subtotal: f64,
}

/// GET /api/delivery/quote - 全目录配送报价
///
/// 高峰开关读的是尽力而为的进程内标志，
/// 与并发切换之间允许出现任一先后结果。
pub async fn quote(
    State(state): State<ServerState>,
    Query(query): Query<QuoteQuery>,
) -> AppResult<Json<DeliveryQuote>> {
    if !query.subtotal.is_finite() || query.subtotal < 0.0 {
        return Err(AppError::Validation(format!(
            "subtotal must be a non-negative amount, got {}",
            query.subtotal
        )));
    }

    let zones = state.zones.find_all().await?;
    let quote = quote_catalog(&zones, query.subtotal, state.rush.is_active());

    Ok(Json(quote))
}

/// GET /api/delivery/rush - 读取高峰状态
pub async fn rush_status(State(state): State<ServerState>) -> Json<RushMode> {
    Json(RushMode {
        rush_mode: state.rush.is_active(),
    })
}

/// POST /api/delivery/rush - 切换高峰配送费 (后台)
pub async fn toggle_rush(
    State(state): State<ServerState>,
    Json(payload): Json<RushMode>,
) -> Json<RushMode> {
    let rush_mode = state.rush.set(payload.rush_mode);

    tracing::info!(rush_mode, "Rush mode toggled");

    Json(RushMode { rush_mode })
}
