//! Data model for the sky spectrum viewer.
//!
//! Everything here is either immutable after load (spectra, the
//! store) or a plain value type (selections, payloads). The only
//! mutation in the system is whole-value replacement of a
//! [`SelectionState`] inside the reactive adapter.

pub mod error;
pub mod payload;
pub mod selection;
pub mod spectrum;
pub mod units;

pub use error::{Result, SpectrumError};
pub use payload::{RenderPayload, Series};
pub use selection::{SelectionDelta, SelectionState, VisibilityPreset};
pub use spectrum::{Spectrum, SpectrumStore};
pub use units::{CGS_DISPLAY_SCALE, FluxUnit, WavelengthFrame};
