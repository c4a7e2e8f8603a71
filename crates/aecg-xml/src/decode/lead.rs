//! Lead decoding: calibration, vocabulary code and digit samples.

use aecg_model::LeadHeader;
use aecg_standards::lookup_lead;
use tracing::debug;

use super::{parse_number, read_quantity};
use crate::error::{AecgError, Result};
use crate::units::{Quantity, normalize_amplitude};
use crate::xml::XmlElement;

/// One decoded lead, ready to be appended to the record.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedLead {
    /// Present when header detail was requested.
    pub header: Option<LeadHeader>,
    /// Raw digit samples.
    pub samples: Vec<f64>,
}

/// Decode one `SLIST_PQ` lead.
///
/// `sequence` is the element carrying the lead `code`, `value` the typed
/// value element, and `lead` the zero-based index of this lead among the
/// leads decoded so far. Calibration and code are only read when
/// `with_header` is set.
pub fn decode_lead(
    sequence: &XmlElement,
    value: &XmlElement,
    lead: usize,
    with_header: bool,
) -> Result<DecodedLead> {
    let header = if with_header {
        Some(decode_lead_header(sequence, value, lead)?)
    } else {
        None
    };

    let digits = value
        .child("digits")
        .ok_or_else(|| AecgError::missing_element("digits", Some(lead)))?;
    let samples = parse_digits(digits.text(), lead)?;

    debug!(
        lead,
        label = header.as_ref().map_or("", |h| h.label.as_str()),
        samples = samples.len(),
        "decoded lead"
    );

    Ok(DecodedLead { header, samples })
}

fn decode_lead_header(
    sequence: &XmlElement,
    value: &XmlElement,
    lead: usize,
) -> Result<LeadHeader> {
    let origin = value
        .child("origin")
        .ok_or_else(|| AecgError::missing_element("origin", Some(lead)))?;
    let origin = read_quantity(origin, "origin", lead)?;
    let zero_offset = normalize_amplitude(origin.value, origin.unit).ok_or_else(|| {
        AecgError::UnrecognizedUnit {
            quantity: Quantity::Amplitude,
            value: origin.raw_value.to_string(),
            unit: origin.unit.to_string(),
            lead,
        }
    })?;

    // The scale unit is recorded but not applied to the gain.
    let scale = value
        .child("scale")
        .ok_or_else(|| AecgError::missing_element("scale", Some(lead)))?;
    let scale = read_quantity(scale, "scale", lead)?;
    if scale.value == 0.0 {
        return Err(AecgError::invalid_number("scale", scale.raw_value, Some(lead)));
    }
    let gain = 1.0 / scale.value;

    let code = lead_code(sequence).ok_or_else(|| AecgError::missing_element("code", Some(lead)))?;
    let term = lookup_lead(code).ok_or_else(|| AecgError::UnknownLeadCode {
        code: code.to_string(),
        lead,
    })?;

    Ok(LeadHeader {
        code: code.to_string(),
        label: term.label.to_string(),
        description: term.description.to_string(),
        zero_offset,
        gain,
        unit: scale.unit.to_string(),
    })
}

/// Lead code from a `<code code="..."/>` child, or a `code` attribute on the
/// element itself.
fn lead_code(sequence: &XmlElement) -> Option<&str> {
    sequence
        .child("code")
        .and_then(|code| code.attribute("code"))
        .or_else(|| sequence.attribute("code"))
}

/// Parse a whitespace- or comma-delimited digit series.
pub fn parse_digits(text: &str, lead: usize) -> Result<Vec<f64>> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| parse_number(token, "digits", Some(lead)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead_xml(origin: &str, scale: &str, code: &str, digits: &str) -> XmlElement {
        XmlElement::parse(&format!(
            r#"<sequence>
                 <code code="{code}"/>
                 <value xsi:type="SLIST_PQ">
                   <origin {origin}/>
                   <scale {scale}/>
                   <digits>{digits}</digits>
                 </value>
               </sequence>"#
        ))
        .unwrap()
    }

    fn decode(sequence: &XmlElement, lead: usize, with_header: bool) -> Result<DecodedLead> {
        let value = sequence.child("value").unwrap();
        decode_lead(sequence, value, lead, with_header)
    }

    #[test]
    fn decodes_calibration_and_samples() {
        let seq = lead_xml(
            r#"value="5" unit="mV""#,
            r#"value="4.76837" unit="uV""#,
            "MDC_ECG_LEAD_II",
            "10 -20 30",
        );
        let lead = decode(&seq, 0, true).unwrap();
        let header = lead.header.unwrap();

        assert_eq!(header.label, "II");
        assert_eq!(header.code, "MDC_ECG_LEAD_II");
        assert!((header.zero_offset - 0.005).abs() < 1e-12);
        assert!((header.gain - 0.209_715).abs() < 1e-6);
        assert_eq!(header.unit, "uV");
        assert_eq!(lead.samples, vec![10.0, -20.0, 30.0]);
    }

    #[test]
    fn microvolt_origin_is_converted() {
        let seq = lead_xml(
            r#"value="250" unit="uV""#,
            r#"value="5" unit="uV""#,
            "MDC_ECG_LEAD_I",
            "1",
        );
        let header = decode(&seq, 0, true).unwrap().header.unwrap();
        assert!((header.zero_offset - 0.000_25).abs() < 1e-15);
    }

    #[test]
    fn samples_only_skips_calibration() {
        let seq = lead_xml(
            r#"value="5" unit="furlong""#,
            r#"value="0" unit="uV""#,
            "NOT_A_LEAD",
            "1,2,3",
        );
        let lead = decode(&seq, 2, false).unwrap();
        assert!(lead.header.is_none());
        assert_eq!(lead.samples, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn unknown_code_names_code_and_lead() {
        let seq = lead_xml(
            r#"value="0" unit="uV""#,
            r#"value="5" unit="uV""#,
            "MDC_ECG_LEAD_BOGUS",
            "1",
        );
        let err = decode(&seq, 7, true).unwrap_err();
        assert!(matches!(
            err,
            AecgError::UnknownLeadCode { ref code, lead: 7 } if code == "MDC_ECG_LEAD_BOGUS"
        ));
    }

    #[test]
    fn unrecognized_origin_unit() {
        let seq = lead_xml(
            r#"value="5" unit="kV""#,
            r#"value="5" unit="uV""#,
            "MDC_ECG_LEAD_I",
            "1",
        );
        let err = decode(&seq, 1, true).unwrap_err();
        assert!(matches!(
            err,
            AecgError::UnrecognizedUnit { quantity: Quantity::Amplitude, ref unit, lead: 1, .. }
                if unit == "kV"
        ));
    }

    #[test]
    fn zero_scale_is_rejected() {
        let seq = lead_xml(
            r#"value="0" unit="uV""#,
            r#"value="0" unit="uV""#,
            "MDC_ECG_LEAD_I",
            "1",
        );
        assert!(matches!(
            decode(&seq, 0, true),
            Err(AecgError::InvalidNumber { field: "scale", .. })
        ));
    }

    #[test]
    fn code_attribute_on_element_is_accepted() {
        let seq = XmlElement::parse(
            r#"<component code="MDC_ECG_LEAD_V1">
                 <value xsi:type="SLIST_PQ">
                   <origin value="0" unit="uV"/><scale value="1" unit="uV"/>
                   <digits>0</digits>
                 </value>
               </component>"#,
        )
        .unwrap();
        let header = decode(&seq, 0, true).unwrap().header.unwrap();
        assert_eq!(header.label, "V1");
    }

    #[test]
    fn missing_digits() {
        let seq = XmlElement::parse(r#"<sequence><value xsi:type="SLIST_PQ"/></sequence>"#)
            .unwrap();
        assert!(matches!(
            decode(&seq, 3, false),
            Err(AecgError::MissingElement { element: "digits", lead: Some(3) })
        ));
    }

    #[test]
    fn parse_digits_handles_mixed_delimiters() {
        assert_eq!(
            parse_digits(" 1,2  3\n4\t-5.5 ", 0).unwrap(),
            vec![1.0, 2.0, 3.0, 4.0, -5.5]
        );
        assert!(parse_digits("", 0).unwrap().is_empty());
        assert!(matches!(
            parse_digits("1 x 3", 2),
            Err(AecgError::InvalidNumber { field: "digits", lead: Some(2), .. })
        ));
    }
}
