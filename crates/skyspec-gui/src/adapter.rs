//! The reactive adapter: the only mutable state in the system.

use skyspec_model::{RenderPayload, Result, SelectionDelta, SelectionState, SpectrumStore};
use skyspec_project::project;

/// Owns the current selection and the last good payload.
///
/// Every host event is merged by whole-state replacement and
/// reprojected; a rejected delta leaves both the state and the cached
/// payload untouched, so the display never partially updates.
pub struct SelectionAdapter {
    store: SpectrumStore,
    state: SelectionState,
    payload: RenderPayload,
}

impl SelectionAdapter {
    pub fn new(store: SpectrumStore) -> Self {
        let state = SelectionState::initial(&store);
        let payload = project(&store, &state);
        Self {
            store,
            state,
            payload,
        }
    }

    pub fn store(&self) -> &SpectrumStore {
        &self.store
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// The last successfully projected payload. Redraws that do not
    /// change the selection read this without reprojecting.
    pub fn payload(&self) -> &RenderPayload {
        &self.payload
    }

    /// Merge a selection change and reproject.
    pub fn apply(&mut self, delta: &SelectionDelta) -> Result<&RenderPayload> {
        let next = self.state.apply(delta, &self.store)?;
        self.payload = project(&self.store, &next);
        self.state = next;
        Ok(&self.payload)
    }
}
