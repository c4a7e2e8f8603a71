//! HL7 annotated ECG controlled vocabularies.
//!
//! Three immutable, process-wide tables built on first use:
//!
//! - lead codes (`MDC_ECG_LEAD_*`) → short label and description
//! - wave codes (`MDC_ECG_WAVC_*`) → short label and description
//! - beat codes (`MDC_ECG_BEAT_*`) → beat class letter and description
//!
//! Lookups are case-insensitive exact matches on the full code.
//!
//! ```
//! use aecg_standards::lookup_lead;
//!
//! let lead = lookup_lead("mdc_ecg_lead_avr").unwrap();
//! assert_eq!(lead.label, "aVR");
//! assert!(lookup_lead("MDC_ECG_LEAD_UNKNOWN").is_none());
//! ```

pub mod vocabulary;

pub use vocabulary::{
    BeatTerm, Term, beat_terms, lead_terms, lookup_beat, lookup_lead, lookup_wave, wave_terms,
};
