//! Decoding stages for an aECG `series`.
//!
//! - [`component`]: routes a `component` to the lead or time-base decoder
//! - [`lead`]: calibration, code and digit samples of one lead
//! - [`timebase`]: sampling frequency from the shared increment
//! - [`document`]: drives the stages over a whole document

pub mod component;
pub mod document;
pub mod lead;
pub mod timebase;

use crate::error::{AecgError, Result};
use crate::xml::XmlElement;

/// A `value`/`unit` attribute pair as found on `origin`, `scale` and `increment`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PhysicalQuantity<'a> {
    pub value: f64,
    pub raw_value: &'a str,
    pub unit: &'a str,
}

/// Read a `value`/`unit` element. Any other attribute is rejected.
pub(crate) fn read_quantity<'a>(
    element: &'a XmlElement,
    tag: &'static str,
    lead: usize,
) -> Result<PhysicalQuantity<'a>> {
    let mut raw_value = None;
    let mut unit = None;
    for (name, value) in element.attributes() {
        match name {
            "value" => raw_value = Some(value),
            "unit" => unit = Some(value),
            _ => {
                return Err(AecgError::MalformedAttribute {
                    element: tag,
                    name: name.to_string(),
                    value: value.to_string(),
                    lead,
                });
            }
        }
    }

    let raw_value = raw_value.ok_or(AecgError::MissingAttribute {
        element: tag,
        name: "value",
        lead,
    })?;
    let unit = unit.ok_or(AecgError::MissingAttribute {
        element: tag,
        name: "unit",
        lead,
    })?;
    let value = parse_number(raw_value, tag, Some(lead))?;

    Ok(PhysicalQuantity {
        value,
        raw_value,
        unit,
    })
}

pub(crate) fn parse_number(raw: &str, field: &'static str, lead: Option<usize>) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| AecgError::invalid_number(field, raw, lead))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AecgError::invalid_number(field, raw, lead))
    }
}
