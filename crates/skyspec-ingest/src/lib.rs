//! Spectrum data ingestion.
//!
//! The viewer's fact base is loaded here exactly once at startup and
//! is immutable afterwards. A malformed source aborts loading before
//! any partial dataset is exposed.

pub mod spectrum_file;

pub use spectrum_file::{load_spectrum, load_store, spectrum_name};
