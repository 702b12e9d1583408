//! Slot Availability Calculator
//!
//! Computes which reservation slots still have table capacity for a
//! requested party size. Pure and synchronous: callers fetch the
//! day's bookings, the calculator only does the arithmetic.

use shared::models::{Booking, BookingSlot, RestaurantConfig};

use crate::utils::time::{format_hhmm, parse_hhmm};
use crate::utils::{AppError, AppResult};

/// Table units consumed by a party.
///
/// One table seats up to `guests_per_table` guests; a larger party
/// consumes multiple units via ceiling division. Intentionally no
/// bin-packing across table combinations: the overcount acts as
/// overbooking protection.
pub fn tables_for_party(guests: u32, guests_per_table: u32) -> u32 {
    guests.div_ceil(guests_per_table.max(1))
}

/// A booking's claim on the slot grid, in minutes since midnight.
struct Occupation {
    /// Seating start (inclusive)
    start: u32,
    /// Seating end (exclusive): a booking ending exactly at a slot
    /// start does not occupy it
    end: u32,
    tables: u32,
}

/// Compute the bookable slot grid for one service date.
///
/// `bookings` must already be filtered to the target date; cancelled
/// bookings are skipped here regardless since capacity is an
/// invariant, not a caller courtesy.
///
/// Slots start at `opening_time` and repeat every `interval_minutes`
/// while `slot_start <= closing_time - last_seating_buffer_minutes`.
/// The result is ascending by time, one entry per generated slot, and
/// deterministic for identical inputs. An empty window yields an
/// empty grid, not an error.
pub fn compute_slots(
    config: &RestaurantConfig,
    bookings: &[Booking],
    requested_guests: u32,
) -> AppResult<Vec<BookingSlot>> {
    if requested_guests == 0 {
        return Err(AppError::Validation(
            "guests must be at least 1".to_string(),
        ));
    }
    if config.interval_minutes == 0 {
        return Err(AppError::Validation(
            "intervalMinutes must be positive".to_string(),
        ));
    }
    if config.slot_duration_minutes == 0 {
        return Err(AppError::Validation(
            "slotDurationMinutes must be positive".to_string(),
        ));
    }

    let opening = parse_hhmm(&config.opening_time)?;
    let closing = parse_hhmm(&config.closing_time)?;
    if opening >= closing {
        return Err(AppError::Validation(format!(
            "openingTime {} must precede closingTime {}",
            config.opening_time, config.closing_time
        )));
    }

    let requested_tables = tables_for_party(requested_guests, config.guests_per_table);

    // Resolve every live booking to a half-open occupation interval
    // once, instead of re-parsing per slot.
    let mut occupations = Vec::with_capacity(bookings.len());
    for booking in bookings {
        if booking.status.is_cancelled() {
            continue;
        }
        let start = parse_hhmm(&booking.time)?;
        occupations.push(Occupation {
            start,
            end: start + config.slot_duration_minutes,
            tables: tables_for_party(booking.guests, config.guests_per_table),
        });
    }

    // Last offerable start; the buffer can swallow the whole window.
    let last_start = match closing.checked_sub(config.last_seating_buffer_minutes) {
        Some(t) if t >= opening => t,
        _ => return Ok(Vec::new()),
    };

    let mut slots = Vec::new();
    let mut slot_start = opening;
    while slot_start <= last_start {
        let occupied: u32 = occupations
            .iter()
            .filter(|o| slot_start >= o.start && slot_start < o.end)
            .map(|o| o.tables)
            .sum();

        // May dip below zero when overlapping large parties exceed the
        // floor plan; the wire value is clamped, the decision is not.
        let tables_left = i64::from(config.total_tables) - i64::from(occupied);

        slots.push(BookingSlot {
            time: format_hhmm(slot_start),
            available: tables_left >= i64::from(requested_tables),
            tables_left: tables_left.max(0) as u32,
        });

        slot_start = match slot_start.checked_add(config.interval_minutes) {
            Some(next) => next,
            None => break,
        };
    }

    Ok(slots)
}
