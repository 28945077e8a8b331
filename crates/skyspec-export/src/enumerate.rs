//! Ahead-of-time enumeration of the selection space.
//!
//! Two independent enumerations feed the static artifact's menus: the
//! four wavelength/flux unit combinations, and the curated visibility
//! presets. Each entry is the exact patch a click applies client-side.
//! Every patch is extracted from a [`project`] call; nothing here
//! re-derives columns or axis strings, so the static path cannot drift
//! from the reactive one.

use skyspec_model::{FluxUnit, SelectionState, SpectrumStore, VisibilityPreset, WavelengthFrame};
use skyspec_project::project;

/// One point of the wavelength-frame × flux-unit product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitCombo {
    pub frame: WavelengthFrame,
    pub unit: FluxUnit,
}

impl UnitCombo {
    /// The full product in fixed menu order: frames outer, units inner.
    pub fn all() -> Vec<UnitCombo> {
        let mut combos = Vec::with_capacity(4);
        for frame in WavelengthFrame::ALL {
            for unit in FluxUnit::ALL {
                combos.push(UnitCombo { frame, unit });
            }
        }
        combos
    }

    pub fn label(&self) -> String {
        format!("{} / {}", self.frame, self.unit)
    }
}

/// Menu action switching into one unit combination: per-series x/y
/// arrays (store order) and the two axis titles. Visibility is
/// deliberately absent so unit switches compose orthogonally with
/// visibility toggles.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitComboAction {
    pub label: String,
    pub x: Vec<Vec<f64>>,
    pub y: Vec<Vec<f64>>,
    pub x_axis_label: String,
    pub y_axis_label: String,
}

/// Menu action applying one curated visibility preset: the per-series
/// visible flags, again in store order. Carries no geometry or axis
/// state for the same orthogonality reason.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityAction {
    pub label: String,
    pub visible: Vec<bool>,
}

/// Enumerate the four unit-combination actions.
pub fn enumerate_unit_combos(store: &SpectrumStore) -> Vec<UnitComboAction> {
    UnitCombo::all()
        .into_iter()
        .map(|combo| {
            let state = SelectionState {
                wavelength_frame: combo.frame,
                flux_unit: combo.unit,
                ..SelectionState::initial(store)
            };
            let payload = project(store, &state);
            let (x, y): (Vec<Vec<f64>>, Vec<Vec<f64>>) = payload
                .series
                .iter()
                .map(|series| (series.x.clone(), series.y.clone()))
                .unzip();
            UnitComboAction {
                label: combo.label(),
                x,
                y,
                x_axis_label: payload.x_axis_label,
                y_axis_label: payload.y_axis_label,
            }
        })
        .collect()
}

/// Enumerate the curated visibility actions.
pub fn enumerate_visibility_presets(store: &SpectrumStore) -> Vec<VisibilityAction> {
    VisibilityPreset::curated(store)
        .into_iter()
        .map(|preset| {
            let state = SelectionState {
                visible: preset.visible_set(store),
                ..SelectionState::initial(store)
            };
            let payload = project(store, &state);
            VisibilityAction {
                label: preset.label(),
                visible: payload.series.iter().map(|series| series.visible).collect(),
            }
        })
        .collect()
}
