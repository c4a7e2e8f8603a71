//! aECG file reader.
//!
//! Provides functionality to read HL7 annotated ECG XML files.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use aecg_model::{AecgRecord, DecodeOptions};

use crate::decode::document::decode_document;
use crate::error::{AecgError, Result};
use crate::xml::XmlElement;

/// aECG document reader.
///
/// Reads the whole document into memory, then decodes it in one pass.
pub struct AecgReader<R: Read> {
    reader: BufReader<R>,
    options: DecodeOptions,
    name: String,
}

impl<R: Read> AecgReader<R> {
    /// Create a new aECG reader.
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, DecodeOptions::default())
    }

    /// Create a new aECG reader with options.
    pub fn with_options(reader: R, options: DecodeOptions) -> Self {
        Self {
            reader: BufReader::new(reader),
            options,
            name: String::new(),
        }
    }

    /// Set the recording name reported in the header.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Read and decode the document.
    pub fn read_record(mut self) -> Result<AecgRecord> {
        let mut data = Vec::new();
        self.reader.read_to_end(&mut data)?;
        let root = XmlElement::parse_bytes(data)?;
        decode_document(&root, &self.name, &self.options)
    }
}

impl AecgReader<File> {
    /// Open an aECG file for reading.
    ///
    /// The recording name is the file's base name without extension.
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_with_options(path, DecodeOptions::default())
    }

    /// Open an aECG file with options.
    pub fn open_with_options(path: &Path, options: DecodeOptions) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AecgError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                AecgError::Io(e)
            }
        })?;
        Ok(Self::with_options(file, options).with_name(record_name(path)))
    }
}

/// Read an aECG file from a path.
///
/// Errors carry the file path; use [`AecgError::root`] to match on the kind.
pub fn read_aecg(path: &Path) -> Result<AecgRecord> {
    read_aecg_with_options(path, DecodeOptions::default())
}

/// Read an aECG file with options.
pub fn read_aecg_with_options(path: &Path, options: DecodeOptions) -> Result<AecgRecord> {
    AecgReader::open_with_options(path, options)
        .and_then(AecgReader::read_record)
        .map_err(|err| err.in_file(path))
}

/// Decode an in-memory aECG document.
pub fn decode_str(name: &str, xml: &str, options: &DecodeOptions) -> Result<AecgRecord> {
    let root = XmlElement::parse(xml)?;
    decode_document(&root, name, options)
}

fn record_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
