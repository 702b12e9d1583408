//! Delivery Zone Model

use serde::{Deserialize, Serialize};

/// Delivery zone entity (配送区域：近郊、标准、远郊)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryZone {
    pub id: String,
    pub name: String,
    /// Base delivery fee (currency units)
    pub fee: f64,
    /// Minimum cart subtotal to accept an order
    pub min_order: f64,
    /// Subtotal at which delivery becomes free (must exceed min_order)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_delivery_threshold: Option<f64>,
}

/// Create zone payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneCreate {
    pub name: String,
    pub fee: f64,
    pub min_order: f64,
    pub free_delivery_threshold: Option<f64>,
}

/// Update zone payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneUpdate {
    pub name: Option<String>,
    pub fee: Option<f64>,
    pub min_order: Option<f64>,
    pub free_delivery_threshold: Option<f64>,
}
