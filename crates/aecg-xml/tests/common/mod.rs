//! Builders for synthetic aECG documents.

#![allow(dead_code)]

/// A lead component with the given code, origin, scale and digits.
pub fn lead(code: &str, origin: (&str, &str), scale: (&str, &str), digits: &str) -> String {
    format!(
        r#"<component><sequence>
             <code code="{code}" codeSystem="2.16.840.1.113883.6.24"/>
             <value xsi:type="SLIST_PQ">
               <origin value="{}" unit="{}"/>
               <scale value="{}" unit="{}"/>
               <digits>{digits}</digits>
             </value>
           </sequence></component>"#,
        origin.0, origin.1, scale.0, scale.1
    )
}

/// A lead component with zero origin and unit scale in microvolts.
pub fn simple_lead(code: &str, digits: &str) -> String {
    lead(code, ("0", "uV"), ("1", "uV"), digits)
}

/// A time-base component with the given increment.
pub fn time_base(value: &str, unit: &str) -> String {
    format!(
        r#"<component><sequence>
             <code code="TIME_ABSOLUTE" codeSystem="2.16.840.1.113883.5.4"/>
             <value xsi:type="GLIST_TS">
               <head value="20160205143000.000"/>
               <increment value="{value}" unit="{unit}"/>
             </value>
           </sequence></component>"#
    )
}

/// A `series` element with a start time and the given components.
pub fn series(low: &str, components: &[String]) -> String {
    format!(
        r#"<component><series>
             <code code="RHYTHM"/>
             <effectiveTime><low value="{low}"/><high value="{low}"/></effectiveTime>
             <component><sequenceSet>{}</sequenceSet></component>
           </series></component>"#,
        components.concat()
    )
}

/// Wrap series elements in an `AnnotatedECG` root.
pub fn document(series: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<AnnotatedECG xmlns="urn:hl7-org:v3" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <effectiveTime><low value="19990101000000"/></effectiveTime>
  {}
</AnnotatedECG>"#,
        series.concat()
    )
}

/// Single-series document starting at 2016-02-05 14:30:00.
pub fn single_series(components: &[String]) -> String {
    document(&[series("20160205143000", components)])
}

pub fn fixture(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}
