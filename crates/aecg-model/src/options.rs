//! Decode options.

use serde::{Deserialize, Serialize};

/// Controls how much of a document is decoded.
///
/// Samples are always decoded. The header (calibration, labels, sampling
/// rate, start time) and annotations are opt-in/opt-out via these flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeOptions {
    /// Decode the record header (default: true).
    pub with_header: bool,
    /// Return an annotation set (default: false).
    pub with_annotations: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            with_header: true,
            with_annotations: false,
        }
    }
}

impl DecodeOptions {
    /// Create decode options with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode samples only, skipping header work.
    #[must_use]
    pub fn samples_only() -> Self {
        Self {
            with_header: false,
            with_annotations: false,
        }
    }

    /// Enable or disable header decoding.
    #[must_use]
    pub fn with_header(mut self, enable: bool) -> Self {
        self.with_header = enable;
        self
    }

    /// Enable or disable the annotation set.
    #[must_use]
    pub fn with_annotations(mut self, enable: bool) -> Self {
        self.with_annotations = enable;
        self
    }
}
