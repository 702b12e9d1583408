//! Booking Availability Module
//!
//! Pure slot-grid computation for table reservations. Storage and
//! HTTP concerns live elsewhere; this module is arithmetic only.

mod availability;

pub use availability::*;
