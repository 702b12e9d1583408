//! Availability API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use shared::models::BookingSlot;

use crate::booking::compute_slots;
use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::time::parse_date;

/// Availability query parameters
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    /// Service date (YYYY-MM-DD)
    pub date: String,
    /// Party size
    pub guests: u32,
}

/// Availability response
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub slots: Vec<BookingSlot>,
}

/// GET /api/availability - 查询某日各时段剩余桌数
///
/// 读取当日未取消的预订，交给纯计算器出网格。
pub async fn query(
    State(state): State<ServerState>,
    Query(query): Query<AvailabilityQuery>,
) -> AppResult<Json<AvailabilityResponse>> {
    let date = parse_date(&query.date)?;

    let bookings: Vec<_> = state
        .bookings
        .find_by_date(date)
        .await?
        .into_iter()
        .filter(|b| !b.status.is_cancelled())
        .collect();

    let slots = compute_slots(&state.restaurant, &bookings, query.guests)?;

    Ok(Json(AvailabilityResponse { slots }))
}
