use super::KeyValueStore;

/// Slot written by the option picker and consumed by the booking form.
pub const SELECTED_OPTIONS_SLOT: &str = "selectedAIModels";

/// Carries the option identifiers chosen on another page into the booking form.
///
/// Storage problems never reach the caller: a slot that cannot be read degrades to "nothing
/// selected" and a failed clear is only logged.
pub struct SelectionBridge<S> {
    store: S,
    slot: String,
}

impl<S: KeyValueStore> SelectionBridge<S> {
    pub fn new(store: S) -> Self {
        Self::with_slot(store, SELECTED_OPTIONS_SLOT)
    }

    pub fn with_slot(store: S, slot: impl Into<String>) -> Self {
        Self {
            store,
            slot: slot.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    #[tracing::instrument(name = "Loading selected options", skip(self), fields(slot = %self.slot))]
    pub fn load(&self) -> Vec<String> {
        let raw = match self.store.get(&self.slot) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error.cause_chain = ?e, "Failed to read the selected options slot");
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(options) => options,
            Err(e) => {
                tracing::warn!(error.cause_chain = ?e, "Ignoring malformed selected options");
                Vec::new()
            }
        }
    }

    #[tracing::instrument(name = "Clearing selected options", skip(self), fields(slot = %self.slot))]
    pub fn clear(&self) {
        if let Err(e) = self.store.delete(&self.slot) {
            tracing::warn!(error.cause_chain = ?e, "Failed to clear the selected options slot");
        }
    }
}
