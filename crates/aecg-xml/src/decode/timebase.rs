//! Time-base decoding.

use super::read_quantity;
use crate::error::{AecgError, Result};
use crate::units::{Quantity, normalize_time};
use crate::xml::XmlElement;

/// Sampling frequency from a `GLIST_TS` value's `increment`.
///
/// Computed as `(1 / increment) × unit multiplier`. `lead` is the lead index
/// at the point the time base was encountered, used in error context.
pub fn decode_time_base(value: &XmlElement, lead: usize) -> Result<f64> {
    let increment = value
        .child("increment")
        .ok_or_else(|| AecgError::missing_element("increment", Some(lead)))?;
    let increment = read_quantity(increment, "increment", lead)?;
    if increment.value == 0.0 {
        return Err(AecgError::invalid_number(
            "increment",
            increment.raw_value,
            Some(lead),
        ));
    }

    normalize_time(1.0 / increment.value, increment.unit).ok_or_else(|| {
        AecgError::UnrecognizedUnit {
            quantity: Quantity::Time,
            value: increment.raw_value.to_string(),
            unit: increment.unit.to_string(),
            lead,
        }
    })
}
