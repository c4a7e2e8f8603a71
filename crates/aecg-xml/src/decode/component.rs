//! Component classification.
//!
//! A `sequenceSet` holds `component` elements. In HL7 aECG each one wraps a
//! `sequence` carrying a `code` and a typed `value`; a bare component with
//! those children directly is accepted too. The `xsi:type` of the value
//! decides how the component is decoded.

use crate::xml::XmlElement;

/// Value type of a sampled lead.
pub const LEAD_VALUE_TYPE: &str = "SLIST_PQ";

/// Value type of the time base.
pub const TIME_BASE_VALUE_TYPE: &str = "GLIST_TS";

/// How a component will be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind<'a> {
    /// Sampled lead (`SLIST_PQ`).
    Lead {
        /// Element holding the lead `code`.
        sequence: &'a XmlElement,
        value: &'a XmlElement,
    },
    /// Shared time base (`GLIST_TS`).
    TimeBase { value: &'a XmlElement },
    /// Anything else; skipped without error.
    Other { value_type: Option<&'a str> },
}

/// Classify one `component` element by its value type.
pub fn classify_component(component: &XmlElement) -> ComponentKind<'_> {
    let sequence = component.child("sequence").unwrap_or(component);
    let Some(value) = sequence.child("value") else {
        return ComponentKind::Other { value_type: None };
    };

    match value.attribute("type") {
        Some(LEAD_VALUE_TYPE) => ComponentKind::Lead { sequence, value },
        Some(TIME_BASE_VALUE_TYPE) => ComponentKind::TimeBase { value },
        value_type => ComponentKind::Other { value_type },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(xml: &str) -> XmlElement {
        XmlElement::parse(xml).unwrap()
    }

    #[test]
    fn routes_lead_components() {
        let element = component(
            r#"<component><sequence><code code="MDC_ECG_LEAD_I"/>
               <value xsi:type="SLIST_PQ"/></sequence></component>"#,
        );
        match classify_component(&element) {
            ComponentKind::Lead { sequence, value } => {
                assert_eq!(sequence.name(), "sequence");
                assert_eq!(value.name(), "value");
            }
            other => panic!("expected lead, got {other:?}"),
        }
    }

    #[test]
    fn routes_time_base_without_sequence_wrapper() {
        let element =
            component(r#"<component><value xsi:type="GLIST_TS"><increment/></value></component>"#);
        assert!(matches!(
            classify_component(&element),
            ComponentKind::TimeBase { .. }
        ));
    }

    #[test]
    fn skips_unrecognized_types() {
        let element = component(
            r#"<component><sequence><value xsi:type="SLIST_INT"/></sequence></component>"#,
        );
        assert_eq!(
            classify_component(&element),
            ComponentKind::Other {
                value_type: Some("SLIST_INT")
            }
        );

        let element = component("<component><sequence/></component>");
        assert_eq!(
            classify_component(&element),
            ComponentKind::Other { value_type: None }
        );
    }
}
