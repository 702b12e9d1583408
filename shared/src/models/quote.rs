//! Delivery Quote Wire Types
//!
//! Response shapes for the delivery quote and rush-mode endpoints.

use serde::{Deserialize, Serialize};

/// Quote for a single zone at a given cart subtotal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneQuote {
    pub id: String,
    pub name: String,
    /// Final delivery fee after surge and free-threshold handling
    pub fee: f64,
    pub min_order: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_delivery_threshold: Option<f64>,
    /// Whether the cart meets the zone's minimum order
    pub eligible: bool,
    /// Present when ineligible ("below minimum order")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// True when the surge multiplier is baked into `fee`
    pub is_surge: bool,
}

/// Full quote envelope: every zone plus the global rush state
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryQuote {
    pub zones: Vec<ZoneQuote>,
    pub is_rush_mode: bool,
    /// Surge multiplier applied while rush mode is active
    pub multiplier: f64,
}

/// Rush-mode toggle payload / status response
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RushMode {
    pub rush_mode: bool,
}
