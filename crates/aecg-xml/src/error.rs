//! Error types for aECG decoding.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::units::Quantity;
use crate::xml::XmlError;

/// Errors that abort an aECG decode.
///
/// Every variant is fatal: no partial record is returned.
#[derive(Debug, Error)]
pub enum AecgError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Malformed or unreadable XML.
    #[error("failed to read XML document: {0}")]
    DocumentRead(#[from] XmlError),

    /// Document has no `series` element.
    #[error("document contains no series element")]
    NoSeries,

    /// A required element is absent.
    #[error("missing <{element}> element{}", at_lead(.lead))]
    MissingElement {
        element: &'static str,
        lead: Option<usize>,
    },

    /// A required attribute is absent.
    #[error("missing attribute '{name}' on <{element}> at lead {lead}")]
    MissingAttribute {
        element: &'static str,
        name: &'static str,
        lead: usize,
    },

    /// Lead code is not in the lead vocabulary.
    #[error("unknown lead code '{code}' at lead {lead}")]
    UnknownLeadCode { code: String, lead: usize },

    /// Amplitude or time unit outside the recognized set.
    #[error("unrecognized {quantity} unit '{unit}' (value {value}) at lead {lead}")]
    UnrecognizedUnit {
        quantity: Quantity,
        value: String,
        unit: String,
        lead: usize,
    },

    /// Unexpected attribute where only `value`/`unit` are allowed.
    #[error("unexpected attribute {name}=\"{value}\" on <{element}> at lead {lead}")]
    MalformedAttribute {
        element: &'static str,
        name: String,
        value: String,
        lead: usize,
    },

    /// Attribute value or digit token is not a usable number.
    #[error("invalid {field} value '{value}'{}", at_lead(.lead))]
    InvalidNumber {
        field: &'static str,
        value: String,
        lead: Option<usize>,
    },

    /// Lead sample count differs from the row count fixed by the first lead.
    #[error("lead {lead} has {actual} samples, expected {expected}")]
    SampleShapeMismatch {
        lead: usize,
        expected: usize,
        actual: usize,
    },

    /// Header requested but no `GLIST_TS` component supplied a sampling increment.
    #[error("no time-base component found; sampling frequency is undefined")]
    MissingTimeBase,

    /// Error raised while decoding a specific file.
    #[error("{}: {source}", .path.display())]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<AecgError>,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for aECG operations.
pub type Result<T> = std::result::Result<T, AecgError>;

fn at_lead(lead: &Option<usize>) -> String {
    match lead {
        Some(index) => format!(" at lead {index}"),
        None => String::new(),
    }
}

impl AecgError {
    /// Create a MissingElement error.
    pub fn missing_element(element: &'static str, lead: Option<usize>) -> Self {
        Self::MissingElement { element, lead }
    }

    /// Create an InvalidNumber error.
    pub fn invalid_number(field: &'static str, value: impl Into<String>, lead: Option<usize>) -> Self {
        Self::InvalidNumber {
            field,
            value: value.into(),
            lead,
        }
    }

    /// Attach file identity to this error.
    ///
    /// `FileNotFound` already names its path and is returned unchanged.
    #[must_use]
    pub fn in_file(self, path: &Path) -> Self {
        match self {
            Self::FileNotFound { .. } | Self::InFile { .. } => self,
            other => Self::InFile {
                path: path.to_path_buf(),
                source: Box::new(other),
            },
        }
    }

    /// The underlying error, without file context.
    pub fn root(&self) -> &AecgError {
        match self {
            Self::InFile { source, .. } => source.root(),
            other => other,
        }
    }
}
