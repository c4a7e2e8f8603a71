//! HL7 annotated ECG (aECG) XML decoder.
//!
//! Decodes an aECG document into a multi-lead sample matrix, a header
//! (sampling rate, per-lead calibration and labels, start date/time) and an
//! annotation set.
//!
//! # Features
//!
//! - `SLIST_PQ` lead components: origin, scale, vocabulary code and digits
//! - `GLIST_TS` time base: sampling frequency from the increment
//! - Amplitude (`V`, `mV`, `uV`) and time (`s`, `ms`, `us`) unit normalization
//! - Shape enforcement: every lead must match the first lead's sample count
//! - Header-free decoding via [`DecodeOptions::samples_only`]
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use aecg_xml::{DecodeOptions, read_aecg, read_aecg_with_options};
//!
//! let record = read_aecg(Path::new("rec01.xml")).unwrap();
//! if let Some(header) = &record.header {
//!     println!("{}: {} leads at {} Hz", header.series.name, header.nsig(), header.sampling_frequency);
//! }
//!
//! let samples = read_aecg_with_options(Path::new("rec01.xml"), DecodeOptions::samples_only())
//!     .unwrap()
//!     .samples;
//! println!("{} x {}", samples.nrows(), samples.ncols());
//! ```
//!
//! # Annotations
//!
//! Annotation decoding is not implemented. Requesting annotations returns an
//! empty [`AnnotationSet`], which does not mean the recording is unannotated.

pub mod decode;
mod error;
mod reader;
pub mod units;
pub mod xml;

// Re-export error types
pub use error::{AecgError, Result};

// Re-export model types
pub use aecg_model::{
    AecgRecord, AnnotationSet, DecodeOptions, DecodeWarning, LeadHeader, RecordHeader,
    SampleMatrix, SeriesMetadata,
};

// Re-export decoding stages
pub use decode::component::{ComponentKind, classify_component};
pub use decode::document::{DEFAULT_DATE, DEFAULT_TIME, decode_document, split_timestamp};
pub use decode::lead::{DecodedLead, decode_lead, parse_digits};
pub use decode::timebase::decode_time_base;
pub use units::{Quantity, normalize_amplitude, normalize_time};
pub use xml::{XmlElement, XmlError};

// Re-export reader functionality
pub use reader::{AecgReader, decode_str, read_aecg, read_aecg_with_options};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
