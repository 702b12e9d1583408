//! Zone API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{DeliveryZone, ZoneCreate, ZoneUpdate};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// 校验区域的金额字段
///
/// 免配送门槛必须高于最低起送价，否则门槛永远先触发，
/// 配置一定是录入错误。
fn validate_zone_amounts(
    fee: f64,
    min_order: f64,
    free_delivery_threshold: Option<f64>,
) -> AppResult<()> {
    if !fee.is_finite() || fee < 0.0 {
        return Err(AppError::Validation(format!(
            "fee must be a non-negative amount, got {}",
            fee
        )));
    }
    if !min_order.is_finite() || min_order < 0.0 {
        return Err(AppError::Validation(format!(
            "minOrder must be a non-negative amount, got {}",
            min_order
        )));
    }
    if let Some(threshold) = free_delivery_threshold
        && (!threshold.is_finite() || threshold <= min_order)
    {
        return Err(AppError::Validation(format!(
            "freeDeliveryThreshold {} must exceed minOrder {}",
            threshold, min_order
        )));
    }
    Ok(())
}

/// GET /api/zones - 获取所有区域
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<DeliveryZone>>> {
    let zones = state.zones.find_all().await?;
    Ok(Json(zones))
}

/// GET /api/zones/:id - 获取单个区域
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeliveryZone>> {
    let zone = state
        .zones
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Zone {} not found", id)))?;
    Ok(Json(zone))
}

/// POST /api/zones - 创建区域
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ZoneCreate>,
) -> AppResult<Json<DeliveryZone>> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("name must not be empty".to_string()));
    }
    validate_zone_amounts(
        payload.fee,
        payload.min_order,
        payload.free_delivery_threshold,
    )?;

    let zone = state.zones.create(payload).await?;

    tracing::info!(zone_id = %zone.id, name = %zone.name, "Zone created");

    Ok(Json(zone))
}

/// PUT /api/zones/:id - 更新区域
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ZoneUpdate>,
) -> AppResult<Json<DeliveryZone>> {
    let current = state
        .zones
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Zone {} not found", id)))?;

    // Validate the merged result, not the sparse payload
    let fee = payload.fee.unwrap_or(current.fee);
    let min_order = payload.min_order.unwrap_or(current.min_order);
    let threshold = payload
        .free_delivery_threshold
        .or(current.free_delivery_threshold);
    if let Some(name) = &payload.name
        && name.trim().is_empty()
    {
        return Err(AppError::Validation("name must not be empty".to_string()));
    }
    validate_zone_amounts(fee, min_order, threshold)?;

    let zone = state.zones.update(&id, payload).await?;

    tracing::info!(zone_id = %zone.id, "Zone updated");

    Ok(Json(zone))
}

/// DELETE /api/zones/:id - 删除区域
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let removed = state.zones.delete(&id).await?;

    if removed {
        tracing::info!(zone_id = %id, "Zone deleted");
    }

    Ok(Json(removed))
}
