//! Decoded recording bundle.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{AnnotationSet, RecordHeader, SampleMatrix};

/// Non-fatal condition observed while decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecodeWarning {
    /// Document held more than one `series`; only the first was decoded.
    MultipleSeries { count: usize },
    /// Decoded lead count differs from `components - 1`.
    LeadCountMismatch { expected: usize, decoded: usize },
}

impl fmt::Display for DecodeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MultipleSeries { count } => {
                write!(f, "document contains {count} series; using the first")
            }
            Self::LeadCountMismatch { expected, decoded } => write!(
                f,
                "expected {expected} signal leads from component count, decoded {decoded}"
            ),
        }
    }
}

/// Everything produced by one decode call.
#[derive(Debug, Clone, PartialEq)]
pub struct AecgRecord {
    /// Raw digit samples, one column per lead.
    pub samples: SampleMatrix,
    /// Present when header decoding was requested.
    pub header: Option<RecordHeader>,
    /// Present when annotations were requested; always empty.
    pub annotations: Option<AnnotationSet>,
    /// Index one past the last decoded sample.
    ///
    /// Reads always cover the whole signal, so this equals the row count.
    pub last_sample: usize,
    pub warnings: Vec<DecodeWarning>,
}

impl AecgRecord {
    pub fn nsig(&self) -> usize {
        self.samples.ncols()
    }

    pub fn nsamp(&self) -> usize {
        self.samples.nrows()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_display() {
        let warning = DecodeWarning::MultipleSeries { count: 2 };
        assert_eq!(
            warning.to_string(),
            "document contains 2 series; using the first"
        );
    }

    #[test]
    fn warning_serializes_tagged() {
        let warning = DecodeWarning::LeadCountMismatch {
            expected: 12,
            decoded: 11,
        };
        let json = serde_json::to_value(warning).expect("serialize warning");
        assert_eq!(json["kind"], "lead_count_mismatch");
        assert_eq!(json["expected"], 12);
    }
}
