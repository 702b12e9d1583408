//! Booking Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Booking lifecycle status
///
/// Only non-cancelled bookings count toward table capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, BookingStatus::Cancelled)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

/// Table booking entity (预订)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    /// Service date (YYYY-MM-DD)
    pub date: NaiveDate,
    /// Seating time (HH:MM, 24-hour)
    pub time: String,
    pub guests: u32,
    /// Guest name for the reservation
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub status: BookingStatus,
    /// Creation time (Unix millis)
    pub created_at: i64,
}

/// Create booking payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreate {
    pub date: NaiveDate,
    pub time: String,
    pub guests: u32,
    pub name: String,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

/// Status transition payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStatusUpdate {
    pub status: BookingStatus,
}

/// One offerable reservation start time with remaining capacity
///
/// Computed fresh on every availability request, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSlot {
    /// Slot start (HH:MM, 24-hour)
    pub time: String,
    pub available: bool,
    /// Table units still free at this slot (never negative on the wire)
    pub tables_left: u32,
}
