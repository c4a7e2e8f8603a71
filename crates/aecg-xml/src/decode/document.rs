//! Whole-document decoding.
//!
//! Linear pass over the document:
//!
//! 1. find `series` elements (none is fatal, extras are reported and ignored)
//! 2. derive series metadata from `effectiveTime/low` when the header is wanted
//! 3. walk the `component` children of the first `sequenceSet` in order,
//!    decoding leads and the time base
//! 4. assemble the header, sample matrix and (empty) annotation set

use aecg_model::{
    AecgRecord, AnnotationSet, DecodeOptions, DecodeWarning, LeadHeader, RecordHeader,
    SampleMatrix, SeriesMetadata,
};
use chrono::NaiveDateTime;
use tracing::{debug, info_span, warn};

use super::component::{ComponentKind, classify_component};
use super::lead::{DecodedLead, decode_lead};
use super::timebase::decode_time_base;
use crate::error::{AecgError, Result};
use crate::xml::XmlElement;

/// Date used when the series start time is missing or malformed.
pub const DEFAULT_DATE: &str = "01/01/2000";

/// Time used when the series start time is missing or malformed.
pub const DEFAULT_TIME: &str = "00:00:00";

const TIMESTAMP_LEN: usize = 14;

/// Decode a parsed aECG document.
///
/// `name` becomes the recording name in the header.
pub fn decode_document(
    root: &XmlElement,
    name: &str,
    options: &DecodeOptions,
) -> Result<AecgRecord> {
    let span = info_span!("decode_aecg", record = %name);
    let _guard = span.enter();

    let mut warnings = Vec::new();

    let all_series = root.find_all("series");
    let series = *all_series.first().ok_or(AecgError::NoSeries)?;
    if all_series.len() > 1 {
        warn!(
            count = all_series.len(),
            "document contains multiple series; only the first is decoded"
        );
        warnings.push(DecodeWarning::MultipleSeries {
            count: all_series.len(),
        });
    }

    let metadata = options
        .with_header
        .then(|| series_metadata(series, name));

    let sequence_set = series
        .find_all("sequenceSet")
        .first()
        .copied()
        .ok_or_else(|| AecgError::missing_element("sequenceSet", None))?;
    let components: Vec<&XmlElement> = sequence_set.children("component").collect();
    let expected_leads = components.len().saturating_sub(1);

    let mut signals = SignalAssembly::new();
    let mut sampling_frequency = None;

    for (position, component) in components.iter().enumerate() {
        match classify_component(component) {
            ComponentKind::Lead { sequence, value } => {
                let lead = decode_lead(sequence, value, signals.next_lead(), options.with_header)?;
                signals.push(lead)?;
            }
            ComponentKind::TimeBase { value } => {
                if !options.with_header {
                    continue;
                }
                let frequency = decode_time_base(value, signals.next_lead())?;
                if let Some(previous) = sampling_frequency.replace(frequency) {
                    debug!(
                        component = position,
                        previous, frequency, "time base replaced by later component"
                    );
                }
            }
            ComponentKind::Other { value_type } => {
                debug!(
                    component = position,
                    value_type = value_type.unwrap_or("<none>"),
                    "skipping component"
                );
            }
        }
    }

    let decoded_leads = signals.samples.ncols();
    if decoded_leads != expected_leads {
        warn!(
            expected = expected_leads,
            decoded = decoded_leads,
            "lead count differs from component count"
        );
        warnings.push(DecodeWarning::LeadCountMismatch {
            expected: expected_leads,
            decoded: decoded_leads,
        });
    }

    let SignalAssembly { samples, leads } = signals;

    let header = match metadata {
        Some(series) => {
            debug_assert_eq!(leads.len(), samples.ncols());
            Some(RecordHeader {
                series,
                sampling_frequency: sampling_frequency.ok_or(AecgError::MissingTimeBase)?,
                nsamp: samples.nrows(),
                leads,
            })
        }
        None => None,
    };

    let annotations = options.with_annotations.then(AnnotationSet::new);

    debug!(
        leads = samples.ncols(),
        samples = samples.nrows(),
        "decoded series"
    );

    Ok(AecgRecord {
        last_sample: samples.nrows(),
        samples,
        header,
        annotations,
        warnings,
    })
}

/// Accumulates lead columns and their headers in document order.
struct SignalAssembly {
    samples: SampleMatrix,
    leads: Vec<LeadHeader>,
}

impl SignalAssembly {
    fn new() -> Self {
        Self {
            samples: SampleMatrix::new(),
            leads: Vec::new(),
        }
    }

    /// Index the next decoded lead will occupy.
    fn next_lead(&self) -> usize {
        self.samples.ncols()
    }

    fn push(&mut self, lead: DecodedLead) -> Result<()> {
        self.samples
            .push_column(lead.samples)
            .map_err(|err| AecgError::SampleShapeMismatch {
                lead: err.column,
                expected: err.expected,
                actual: err.actual,
            })?;
        if let Some(header) = lead.header {
            self.leads.push(header);
        }
        Ok(())
    }
}

fn series_metadata(series: &XmlElement, name: &str) -> SeriesMetadata {
    let low = series
        .child("effectiveTime")
        .and_then(|time| time.child("low"))
        .and_then(|low| low.attribute("value").or_else(|| single_attribute(low)));
    let (date, time, recorded_at) = split_timestamp(low);
    SeriesMetadata {
        name: name.to_string(),
        date,
        time,
        recorded_at,
    }
}

fn single_attribute(element: &XmlElement) -> Option<&str> {
    let mut attributes = element.attributes();
    match (attributes.next(), attributes.next()) {
        (Some((_, value)), None) => Some(value),
        _ => None,
    }
}

/// Split a `YYYYMMDDHHMMSS` timestamp into `YYYY/MM/DD` and `HH:MM:SS`.
///
/// Anything other than exactly 14 characters yields the default date and
/// time. The parsed timestamp is `None` unless the digits form a valid
/// calendar time.
pub fn split_timestamp(value: Option<&str>) -> (String, String, Option<NaiveDateTime>) {
    match value {
        Some(stamp) if stamp.len() == TIMESTAMP_LEN && stamp.is_ascii() => {
            let date = format!("{}/{}/{}", &stamp[0..4], &stamp[4..6], &stamp[6..8]);
            let time = format!("{}:{}:{}", &stamp[8..10], &stamp[10..12], &stamp[12..14]);
            let parsed = NaiveDateTime::parse_from_str(stamp, "%Y%m%d%H%M%S").ok();
            (date, time, parsed)
        }
        _ => (DEFAULT_DATE.to_string(), DEFAULT_TIME.to_string(), None),
    }
}
