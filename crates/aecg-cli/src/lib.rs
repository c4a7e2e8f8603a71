//! Library components of the `aecg` command-line inspector.

pub mod logging;
pub mod summary;
