use super::{KeyValueStore, PersistenceError};
use crate::core::form_data::FormData;

pub const DEFAULT_SLOT_KEY: &str = "ticketFormData";

/// Mirrors [`FormData`] into a single slot of a [`KeyValueStore`].
pub struct Persistence {
    store: Box<dyn KeyValueStore>,
    key: String,
}

impl Persistence {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self::with_key(store, DEFAULT_SLOT_KEY)
    }

    pub fn with_key(store: impl KeyValueStore + 'static, key: impl Into<String>) -> Self {
        Self {
            store: Box::new(store),
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Best effort: failures are logged and dropped.
    pub fn save(&mut self, form: &FormData) {
        match self.try_save(form) {
            Ok(()) => tracing::debug!(key = %self.key, "form data persisted"),
            Err(err) => tracing::debug!(key = %self.key, error = %err, "form data not persisted"),
        }
    }

    pub fn try_save(&mut self, form: &FormData) -> Result<(), PersistenceError> {
        let encoded = serde_json::to_string(form)?;
        self.store.set(&self.key, &encoded)?;
        Ok(())
    }

    /// `None` when the slot was never written or cannot be read back.
    pub fn load(&self) -> Option<FormData> {
        match self.try_load() {
            Ok(form) => form,
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "ignoring unreadable persisted form data");
                None
            }
        }
    }

    pub fn try_load(&self) -> Result<Option<FormData>, PersistenceError> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    pub fn clear(&mut self) -> Result<(), PersistenceError> {
        self.store.remove(&self.key)?;
        Ok(())
    }
}
