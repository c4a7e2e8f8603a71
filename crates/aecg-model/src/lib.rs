//! Data model for decoded annotated ECG (HL7 aECG) recordings.
//!
//! A decode produces three artifacts:
//!
//! - [`SampleMatrix`]: raw digit samples, one column per lead
//! - [`RecordHeader`]: recording identity, sampling rate and per-lead calibration
//! - [`AnnotationSet`]: clinical annotations (currently always empty)
//!
//! They are bundled together in an [`AecgRecord`] along with any non-fatal
//! [`DecodeWarning`]s raised while decoding.

pub mod annotation;
pub mod header;
pub mod matrix;
pub mod options;
pub mod record;

pub use annotation::{Annotation, AnnotationSet};
pub use header::{LeadHeader, RecordHeader, SeriesMetadata};
pub use matrix::{ColumnLengthError, SampleMatrix};
pub use options::DecodeOptions;
pub use record::{AecgRecord, DecodeWarning};
