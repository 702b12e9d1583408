//! Delivery Fee Calculator
//!
//! Logic for quoting delivery cost and order eligibility per zone.
//! Uses rust_decimal for precise calculations, stores as f64.

use rust_decimal::prelude::*;
use shared::models::{DeliveryQuote, DeliveryZone, ZoneQuote};

use super::surge::RUSH_MULTIPLIER;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Reason attached to quotes below the zone minimum
const REASON_BELOW_MINIMUM: &str = "below minimum order";

/// Convert f64 to Decimal for calculation
#[inline]
fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Quote one zone for a cart subtotal.
///
/// Order of application:
/// 1. Minimum-order gate: ineligible quotes still carry a computed fee
///    so the UI can show what delivery would cost.
/// 2. Base fee from the zone.
/// 3. Surge: `fee = ceil(fee × 1.5)`, ceiling to whole currency units.
/// 4. Free-delivery threshold zeroes the fee, surge included.
///
/// The returned fee is never negative; it is zero only through the
/// free threshold or a zero-configured base fee.
pub fn compute_zone_quote(
    zone: &DeliveryZone,
    cart_subtotal: f64,
    surge_active: bool,
) -> ZoneQuote {
    let subtotal = to_decimal(cart_subtotal);
    let eligible = subtotal >= to_decimal(zone.min_order);

    let mut fee = to_decimal(zone.fee);
    let mut is_surge = false;

    if surge_active {
        fee = (fee * to_decimal(RUSH_MULTIPLIER)).ceil();
        is_surge = true;
    }

    // Free threshold wins over surge pricing.
    if let Some(threshold) = zone.free_delivery_threshold
        && subtotal >= to_decimal(threshold)
    {
        fee = Decimal::ZERO;
        is_surge = false;
    }

    ZoneQuote {
        id: zone.id.clone(),
        name: zone.name.clone(),
        fee: to_f64(fee),
        min_order: zone.min_order,
        free_delivery_threshold: zone.free_delivery_threshold,
        eligible,
        reason: (!eligible).then(|| REASON_BELOW_MINIMUM.to_string()),
        is_surge,
    }
}

/// Quote the whole catalog plus the global rush envelope.
///
/// Surge applies uniformly to every zone; per-zone opt-outs do not
/// exist.
pub fn quote_catalog(
    zones: &[DeliveryZone],
    cart_subtotal: f64,
    surge_active: bool,
) -> DeliveryQuote {
    DeliveryQuote {
        zones: zones
            .iter()
            .map(|zone| compute_zone_quote(zone, cart_subtotal, surge_active))
            .collect(),
        is_rush_mode: surge_active,
        multiplier: RUSH_MULTIPLIER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_zone(fee: f64, min_order: f64, free_delivery_threshold: Option<f64>) -> DeliveryZone {
        DeliveryZone {
            id: "standard".to_string(),
            name: "Standard".to_string(),
            fee,
            min_order,
            free_delivery_threshold,
        }
    }

    #[test]
    fn test_base_fee_no_surge() {
        let quote = compute_zone_quote(&make_zone(25.0, 80.0, None), 100.0, false);

        assert_eq!(quote.fee, 25.0);
        assert!(quote.eligible);
        assert!(quote.reason.is_none());
        assert!(!quote.is_surge);
    }

    #[test]
    fn test_surge_ceiling() {
        // ceil(25 * 1.5) = 38, not 37.5 and not 37
        let quote = compute_zone_quote(&make_zone(25.0, 80.0, None), 100.0, true);

        assert_eq!(quote.fee, 38.0);
        assert!(quote.is_surge);
    }

    #[test]
    fn test_surge_ceiling_exact_multiple() {
        // ceil(20 * 1.5) = 30 exactly
        let quote = compute_zone_quote(&make_zone(20.0, 80.0, None), 100.0, true);

        assert_eq!(quote.fee, 30.0);
    }

    #[test]
    fn test_free_threshold_beats_surge() {
        let zone = make_zone(25.0, 80.0, Some(150.0));
        let quote = compute_zone_quote(&zone, 160.0, true);

        assert_eq!(quote.fee, 0.0);
        assert!(!quote.is_surge);
        assert!(quote.eligible);
    }

    #[test]
    fn test_free_threshold_boundary() {
        let zone = make_zone(25.0, 80.0, Some(150.0));

        assert_eq!(compute_zone_quote(&zone, 150.0, false).fee, 0.0);
        assert_eq!(compute_zone_quote(&zone, 149.99, false).fee, 25.0);
    }

    #[test]
    fn test_minimum_order_gate() {
        // Below minimum: ineligible, but the fee is still computed
        let quote = compute_zone_quote(&make_zone(25.0, 100.0, None), 80.0, false);

        assert!(!quote.eligible);
        assert_eq!(quote.reason.as_deref(), Some("below minimum order"));
        assert_eq!(quote.fee, 25.0);
    }

    #[test]
    fn test_minimum_order_boundary_is_inclusive() {
        let quote = compute_zone_quote(&make_zone(25.0, 100.0, None), 100.0, false);
        assert!(quote.eligible);
    }

    #[test]
    fn test_zero_base_fee() {
        let quote = compute_zone_quote(&make_zone(0.0, 50.0, None), 60.0, true);

        // ceil(0 * 1.5) = 0; the only non-threshold path to a free fee
        assert_eq!(quote.fee, 0.0);
    }

    #[test]
    fn test_catalog_envelope() {
        let zones = vec![
            make_zone(15.0, 50.0, Some(120.0)),
            make_zone(40.0, 120.0, None),
        ];
        let quote = quote_catalog(&zones, 130.0, true);

        assert_eq!(quote.zones.len(), 2);
        assert!(quote.is_rush_mode);
        assert_eq!(quote.multiplier, 1.5);
        // First zone crossed its free threshold, second surged
        assert_eq!(quote.zones[0].fee, 0.0);
        assert_eq!(quote.zones[1].fee, 60.0);
        assert!(!quote.zones[1].eligible);
    }
}
