//! Booking API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::models::{Booking, BookingCreate, BookingStatus, BookingStatusUpdate};

use crate::booking::compute_slots;
use crate::core::ServerState;
use crate::utils::time::{normalize_hhmm, parse_date};
use crate::utils::{AppError, AppResult};

/// List query parameters
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Service date (YYYY-MM-DD)
    pub date: String,
}

/// GET /api/bookings - 按日期列出预订
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Booking>>> {
    let date = parse_date(&query.date)?;
    let bookings = state.bookings.find_by_date(date).await?;
    Ok(Json(bookings))
}

/// GET /api/bookings/:id - 获取单个预订
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Booking>> {
    let booking = state
        .bookings
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))?;
    Ok(Json(booking))
}

/// POST /api/bookings - 创建预订
///
/// 请求的时段必须在可订网格上且剩余桌数足够，否则拒绝。
pub async fn create(
    State(state): State<ServerState>,
    Json(mut payload): Json<BookingCreate>,
) -> AppResult<Json<Booking>> {
    if payload.guests == 0 {
        return Err(AppError::Validation(
            "guests must be at least 1".to_string(),
        ));
    }
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("name must not be empty".to_string()));
    }
    payload.time = normalize_hhmm(&payload.time)?;

    let today = chrono::Utc::now().date_naive();
    if payload.date < today {
        return Err(AppError::Validation(format!(
            "date {} is in the past",
            payload.date
        )));
    }

    // Capacity check against the live grid for that date
    let existing: Vec<_> = state
        .bookings
        .find_by_date(payload.date)
        .await?
        .into_iter()
        .filter(|b| !b.status.is_cancelled())
        .collect();
    let slots = compute_slots(&state.restaurant, &existing, payload.guests)?;

    let slot = slots
        .iter()
        .find(|s| s.time == payload.time)
        .ok_or_else(|| {
            AppError::BusinessRule(format!("{} is not an offerable slot", payload.time))
        })?;
    if !slot.available {
        return Err(AppError::BusinessRule(format!(
            "no table for {} guests at {}",
            payload.guests, payload.time
        )));
    }

    let booking = state.bookings.create(payload).await?;

    tracing::info!(
        booking_id = %booking.id,
        date = %booking.date,
        time = %booking.time,
        guests = booking.guests,
        "Booking created"
    );

    Ok(Json(booking))
}

/// PUT /api/bookings/:id/status - 确认或取消预订
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<BookingStatusUpdate>,
) -> AppResult<Json<Booking>> {
    let booking = state
        .bookings
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))?;

    // Repeating the current status is a no-op; otherwise only
    // pending→confirmed|cancelled and confirmed→cancelled are legal.
    if payload.status == booking.status {
        return Ok(Json(booking));
    }
    let allowed = matches!(
        (booking.status, payload.status),
        (BookingStatus::Pending, BookingStatus::Confirmed)
            | (BookingStatus::Pending, BookingStatus::Cancelled)
            | (BookingStatus::Confirmed, BookingStatus::Cancelled)
    );
    if !allowed {
        return Err(AppError::BusinessRule(format!(
            "cannot move booking from {} to {}",
            booking.status.as_str(),
            payload.status.as_str()
        )));
    }

    let updated = state.bookings.set_status(&id, payload.status).await?;

    tracing::info!(
        booking_id = %updated.id,
        status = updated.status.as_str(),
        "Booking status changed"
    );

    Ok(Json(updated))
}
