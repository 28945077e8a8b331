//! The projector: the one deterministic mapping from a selection
//! state onto a render payload.
//!
//! Both consumption modes — the reactive adapter reprojecting per UI
//! event and the static enumerator sweeping the combination space
//! ahead of time — call [`project`] and nothing else, so labels,
//! units, and scaling cannot drift between them.

use skyspec_model::{RenderPayload, SelectionState, Series, SpectrumStore};

/// Project a selection onto a concrete render payload.
///
/// Pure and total: no I/O, no logging, no failure modes. Validation
/// happens at the boundaries (ingest, adapter intake), so every
/// `(store, state)` pair that reaches this function is projectable.
///
/// The payload always carries one series per stored spectrum in store
/// order; visibility is a flag, never an omission, which keeps the
/// payload shape identical across calls and lets a host update axis
/// state independently of visibility toggles.
pub fn project(store: &SpectrumStore, state: &SelectionState) -> RenderPayload {
    let series = store
        .iter()
        .map(|spectrum| Series {
            name: spectrum.name().to_string(),
            x: spectrum.wavelength(state.wavelength_frame).to_vec(),
            y: spectrum.flux(state.flux_unit).to_vec(),
            visible: state.visible.contains(spectrum.name()),
        })
        .collect();
    RenderPayload {
        series,
        x_axis_label: state.wavelength_frame.axis_label(),
        y_axis_label: state.flux_unit.axis_label(),
    }
}
