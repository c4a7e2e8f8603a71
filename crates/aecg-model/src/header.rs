//! Recording and per-lead header metadata.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Identity and start time of a recorded series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesMetadata {
    /// Recording name, taken from the input file's base name.
    pub name: String,
    /// Record start date as `YYYY/MM/DD`.
    pub date: String,
    /// Record start time as `HH:MM:SS`.
    pub time: String,
    /// Parsed start timestamp, when the source carried a valid 14-digit value.
    pub recorded_at: Option<NaiveDateTime>,
}

/// Calibration and identity of one decoded lead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadHeader {
    /// Vocabulary code as it appeared in the document (e.g. `MDC_ECG_LEAD_II`).
    pub code: String,
    /// Short display label (e.g. `II`).
    pub label: String,
    /// Long vocabulary description.
    pub description: String,
    /// Zero offset in volts.
    pub zero_offset: f64,
    /// Multiply a raw digit by this value to obtain the lead's amplitude.
    ///
    /// The reciprocal of the declared `scale` value. The declared unit is kept
    /// in [`LeadHeader::unit`] and is not folded into this number.
    pub gain: f64,
    /// Unit tag of the `scale` element, verbatim.
    pub unit: String,
}

/// Header of a decoded recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordHeader {
    pub series: SeriesMetadata,
    /// Sampling frequency in Hz.
    pub sampling_frequency: f64,
    /// Samples per lead.
    pub nsamp: usize,
    /// One entry per decoded lead, in document order.
    pub leads: Vec<LeadHeader>,
}

impl RecordHeader {
    /// Number of decoded leads.
    pub fn nsig(&self) -> usize {
        self.leads.len()
    }

    pub fn lead(&self, index: usize) -> Option<&LeadHeader> {
        self.leads.get(index)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.leads.iter().map(|lead| lead.label.as_str()).collect()
    }

    pub fn units(&self) -> Vec<&str> {
        self.leads.iter().map(|lead| lead.unit.as_str()).collect()
    }

    /// Find a lead by display label (case-insensitive).
    pub fn position_of(&self, label: &str) -> Option<usize> {
        self.leads
            .iter()
            .position(|lead| lead.label.eq_ignore_ascii_case(label))
    }
}
