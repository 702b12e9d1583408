//! Zone Store
//!
//! Repository seam for the delivery zone catalog. Admin-editable at
//! runtime; seeded with the three production tiers on startup.

use async_trait::async_trait;
use dashmap::DashMap;
use shared::models::{DeliveryZone, ZoneCreate, ZoneUpdate};
use uuid::Uuid;

use crate::utils::{AppError, AppResult};

/// Storage operations for delivery zones
#[async_trait]
pub trait ZoneStore: Send + Sync {
    /// Full catalog, ordered by fee then name
    async fn find_all(&self) -> AppResult<Vec<DeliveryZone>>;

    /// Fetch one zone by id
    async fn find_by_id(&self, id: &str) -> AppResult<Option<DeliveryZone>>;

    /// Insert a new zone with a generated id
    async fn create(&self, payload: ZoneCreate) -> AppResult<DeliveryZone>;

    /// Apply a partial update; `None` fields are left unchanged
    async fn update(&self, id: &str, payload: ZoneUpdate) -> AppResult<DeliveryZone>;

    /// Remove a zone; `false` when the id was unknown
    async fn delete(&self, id: &str) -> AppResult<bool>;
}

/// In-memory zone store
#[derive(Debug, Default)]
pub struct MemoryZoneStore {
    items: DashMap<String, DeliveryZone>,
}

impl MemoryZoneStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog seeded with the production tiers (近郊 / 标准 / 远郊)
    pub fn with_default_catalog() -> Self {
        let store = Self::new();
        for zone in [
            DeliveryZone {
                id: "near".to_string(),
                name: "Near".to_string(),
                fee: 15.0,
                min_order: 50.0,
                free_delivery_threshold: Some(120.0),
            },
            DeliveryZone {
                id: "standard".to_string(),
                name: "Standard".to_string(),
                fee: 25.0,
                min_order: 80.0,
                free_delivery_threshold: Some(150.0),
            },
            DeliveryZone {
                id: "far".to_string(),
                name: "Far".to_string(),
                fee: 40.0,
                min_order: 120.0,
                free_delivery_threshold: None,
            },
        ] {
            store.items.insert(zone.id.clone(), zone);
        }
        store
    }
}

#[async_trait]
impl ZoneStore for MemoryZoneStore {
    async fn find_all(&self) -> AppResult<Vec<DeliveryZone>> {
        let mut zones: Vec<DeliveryZone> =
            self.items.iter().map(|entry| entry.value().clone()).collect();
        zones.sort_by(|a, b| {
            a.fee
                .partial_cmp(&b.fee)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(zones)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<DeliveryZone>> {
        Ok(self.items.get(id).map(|entry| entry.value().clone()))
    }

    async fn create(&self, payload: ZoneCreate) -> AppResult<DeliveryZone> {
        let zone = DeliveryZone {
            id: Uuid::new_v4().to_string(),
            name: payload.name,
            fee: payload.fee,
            min_order: payload.min_order,
            free_delivery_threshold: payload.free_delivery_threshold,
        };
        self.items.insert(zone.id.clone(), zone.clone());
        Ok(zone)
    }

    async fn update(&self, id: &str, payload: ZoneUpdate) -> AppResult<DeliveryZone> {
        let mut entry = self
            .items
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("Zone {} not found", id)))?;
        if let Some(name) = payload.name {
            entry.name = name;
        }
        if let Some(fee) = payload.fee {
            entry.fee = fee;
        }
        if let Some(min_order) = payload.min_order {
            entry.min_order = min_order;
        }
        if let Some(threshold) = payload.free_delivery_threshold {
            entry.free_delivery_threshold = Some(threshold);
        }
        Ok(entry.value().clone())
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        Ok(self.items.remove(id).is_some())
    }
}
