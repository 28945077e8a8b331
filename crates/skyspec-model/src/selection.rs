use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpectrumError};
use crate::spectrum::SpectrumStore;
use crate::units::{FluxUnit, WavelengthFrame};

/// The current unit/visibility combination. Invariant: `visible` is a
/// subset of the loaded spectrum names; empty is legal and produces an
/// empty plot, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub wavelength_frame: WavelengthFrame,
    pub flux_unit: FluxUnit,
    pub visible: BTreeSet<String>,
}

impl SelectionState {
    /// Startup selection: air wavelengths, photon flux, every loaded
    /// spectrum visible. Also the static artifact's initial view.
    pub fn initial(store: &SpectrumStore) -> Self {
        Self {
            wavelength_frame: WavelengthFrame::Air,
            flux_unit: FluxUnit::Photon,
            visible: store.names().into_iter().map(String::from).collect(),
        }
    }

    /// Merge a partial update into this state by whole-value
    /// replacement, validating any new visibility set against the
    /// store. Unknown spectrum names are rejected without producing a
    /// partially-updated state.
    pub fn apply(&self, delta: &SelectionDelta, store: &SpectrumStore) -> Result<SelectionState> {
        if let Some(visible) = &delta.visible {
            for name in visible {
                if !store.contains(name) {
                    return Err(SpectrumError::Selection(format!(
                        "unknown spectrum: {name}"
                    )));
                }
            }
        }
        Ok(SelectionState {
            wavelength_frame: delta.wavelength_frame.unwrap_or(self.wavelength_frame),
            flux_unit: delta.flux_unit.unwrap_or(self.flux_unit),
            visible: delta.visible.clone().unwrap_or_else(|| self.visible.clone()),
        })
    }
}

/// Partial selection change carried by a host event. `None` fields
/// leave the corresponding state field untouched, so a unit switch
/// never resets visibility and vice versa.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionDelta {
    pub wavelength_frame: Option<WavelengthFrame>,
    pub flux_unit: Option<FluxUnit>,
    pub visible: Option<BTreeSet<String>>,
}

impl SelectionDelta {
    pub fn is_empty(&self) -> bool {
        self.wavelength_frame.is_none() && self.flux_unit.is_none() && self.visible.is_none()
    }
}

/// One curated visibility menu entry. A hand-chosen subset of the
/// visibility power set: everything visible, or a single spectrum
/// alone. "None visible" is deliberately not exposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisibilityPreset {
    All,
    Only(String),
}

impl VisibilityPreset {
    /// The presets exposed as menu actions, in menu order: `All`
    /// first, then one `Only` per spectrum in store order.
    pub fn curated(store: &SpectrumStore) -> Vec<VisibilityPreset> {
        let mut presets = vec![VisibilityPreset::All];
        presets.extend(
            store
                .names()
                .into_iter()
                .map(|name| VisibilityPreset::Only(name.to_string())),
        );
        presets
    }

    pub fn label(&self) -> String {
        match self {
            VisibilityPreset::All => "Both Spectra".to_string(),
            VisibilityPreset::Only(name) => format!("Only {name}"),
        }
    }

    /// The visibility set this preset selects.
    pub fn visible_set(&self, store: &SpectrumStore) -> BTreeSet<String> {
        match self {
            VisibilityPreset::All => store.names().into_iter().map(String::from).collect(),
            VisibilityPreset::Only(name) => BTreeSet::from([name.clone()]),
        }
    }
}
