//! Annotation set returned alongside a recording.
//!
//! Annotation decoding is not implemented. When annotations are requested the
//! decoder returns an empty [`AnnotationSet`]; an empty set means "not
//! decoded", never "the recording has no annotations".

use serde::{Deserialize, Serialize};

/// A single annotation anchored at a sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Sample index the annotation refers to.
    pub sample: usize,
    /// Lead index, or `None` for global annotations.
    pub lead: Option<usize>,
    /// Vocabulary code (wave or beat).
    pub code: String,
    /// Short label resolved from the vocabulary.
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationSet {
    annotations: Vec<Annotation>,
}

impl AnnotationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Annotation> {
        self.annotations.iter()
    }
}
