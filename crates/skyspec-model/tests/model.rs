//! Tests for skyspec-model types.

use std::collections::BTreeSet;

use skyspec_model::{
    FluxUnit, SelectionDelta, SelectionState, Spectrum, SpectrumError, SpectrumStore,
    VisibilityPreset, WavelengthFrame,
};

fn store() -> SpectrumStore {
    let uvex = Spectrum::new(
        "UVEX",
        vec![4000.0, 4001.0],
        vec![4001.1, 4002.1],
        vec![10.0, 12.0],
        vec![5.0, 6.0],
    )
    .expect("build UVEX");
    let giano = Spectrum::new(
        "GIANO",
        vec![9500.0, 9501.0],
        vec![9502.6, 9503.6],
        vec![3.0, 4.0],
        vec![1.5, 2.5],
    )
    .expect("build GIANO");
    SpectrumStore::new(vec![uvex, giano])
}

#[test]
fn column_accessors_follow_the_selection_axes() {
    let store = store();
    let uvex = store.get("UVEX").expect("UVEX present");
    assert_eq!(uvex.wavelength(WavelengthFrame::Air), &[4000.0, 4001.0]);
    assert_eq!(uvex.wavelength(WavelengthFrame::Vacuum), &[4001.1, 4002.1]);
    assert_eq!(uvex.flux(FluxUnit::Photon), &[10.0, 12.0]);
    assert_eq!(uvex.flux(FluxUnit::Cgs), &[5.0, 6.0]);
}

#[test]
fn empty_visible_set_is_a_valid_state() {
    let store = store();
    let state = SelectionState::initial(&store);
    let delta = SelectionDelta {
        visible: Some(BTreeSet::new()),
        ..SelectionDelta::default()
    };
    let next = state.apply(&delta, &store).expect("empty set is legal");
    assert!(next.visible.is_empty());
}

#[test]
fn rejected_delta_leaves_no_trace() {
    let store = store();
    let state = SelectionState::initial(&store);
    let delta = SelectionDelta {
        wavelength_frame: Some(WavelengthFrame::Vacuum),
        visible: Some(BTreeSet::from(["NOT-A-SPECTRUM".to_string()])),
        ..SelectionDelta::default()
    };
    // The whole delta is rejected, including the valid frame change.
    let err = state.apply(&delta, &store).expect_err("unknown name");
    assert!(matches!(err, SpectrumError::Selection(_)));
    assert_eq!(state.wavelength_frame, WavelengthFrame::Air);
}

#[test]
fn presets_cover_all_and_each_alone_only() {
    let store = store();
    let presets = VisibilityPreset::curated(&store);
    assert_eq!(presets.len(), 3);
    assert_eq!(
        presets[0].visible_set(&store),
        BTreeSet::from(["UVEX".to_string(), "GIANO".to_string()])
    );
    assert_eq!(
        presets[2].visible_set(&store),
        BTreeSet::from(["GIANO".to_string()])
    );
}

#[test]
fn selection_state_serializes() {
    let store = store();
    let state = SelectionState::initial(&store);
    let json = serde_json::to_string(&state).expect("serialize state");
    let round: SelectionState = serde_json::from_str(&json).expect("deserialize state");
    assert_eq!(round, state);
}
