//! Booking Store
//!
//! Repository seam for table bookings. The production deployment
//! backs this with the hosted document database; the in-memory
//! implementation serves single-node development and tests.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use dashmap::DashMap;
use shared::models::{Booking, BookingCreate, BookingStatus};
use uuid::Uuid;

use crate::utils::{AppError, AppResult};

/// Storage operations for bookings
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Insert a new booking in `pending` status, returning it with a
    /// generated id and creation timestamp
    async fn create(&self, payload: BookingCreate) -> AppResult<Booking>;

    /// Fetch one booking by id
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Booking>>;

    /// All bookings for a service date, cancelled included, ordered by
    /// time then creation
    async fn find_by_date(&self, date: NaiveDate) -> AppResult<Vec<Booking>>;

    /// Overwrite a booking's status
    async fn set_status(&self, id: &str, status: BookingStatus) -> AppResult<Booking>;
}

/// In-memory booking store
#[derive(Debug, Default)]
pub struct MemoryBookingStore {
    items: DashMap<String, Booking>,
}

impl MemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingStore for MemoryBookingStore {
    async fn create(&self, payload: BookingCreate) -> AppResult<Booking> {
        let booking = Booking {
            id: Uuid::new_v4().to_string(),
            date: payload.date,
            time: payload.time,
            guests: payload.guests,
            name: payload.name,
            phone: payload.phone,
            notes: payload.notes,
            status: BookingStatus::Pending,
            created_at: Utc::now().timestamp_millis(),
        };
        self.items.insert(booking.id.clone(), booking.clone());
        Ok(booking)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Booking>> {
        Ok(self.items.get(id).map(|entry| entry.value().clone()))
    }

    async fn find_by_date(&self, date: NaiveDate) -> AppResult<Vec<Booking>> {
        let mut bookings: Vec<Booking> = self
            .items
            .iter()
            .filter(|entry| entry.value().date == date)
            .map(|entry| entry.value().clone())
            .collect();
        // DashMap iteration order is arbitrary; callers expect a
        // stable listing.
        bookings.sort_by(|a, b| {
            a.time
                .cmp(&b.time)
                .then(a.created_at.cmp(&b.created_at))
                .then(a.id.cmp(&b.id))
        });
        Ok(bookings)
    }

    async fn set_status(&self, id: &str, status: BookingStatus) -> AppResult<Booking> {
        let mut entry = self
            .items
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))?;
        entry.status = status;
        Ok(entry.value().clone())
    }
}
