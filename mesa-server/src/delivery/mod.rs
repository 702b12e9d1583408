//! Delivery Pricing Module
//!
//! Zone fee quoting and the process-wide rush-mode flag.
//! Quoting is pure; the flag is the one piece of shared mutable state
//! in the service (see [`surge::RushState`]).

mod quote;
pub mod surge;

pub use quote::*;
pub use surge::{RUSH_MULTIPLIER, RushState};
