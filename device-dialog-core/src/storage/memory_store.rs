use std::collections::HashSet;

use parking_lot::Mutex;

use crate::models::error::DialogError;
use crate::traits::preference_store::PreferenceStore;

/// In-process preference store. Opt-outs last until the store is dropped.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    suppressed: Mutex<HashSet<String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.suppressed.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.suppressed.lock().is_empty()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn is_suppressed(&self, key: &str) -> Result<bool, DialogError> {
        Ok(self.suppressed.lock().contains(key))
    }

    fn suppress(&self, key: &str) -> Result<(), DialogError> {
        self.suppressed.lock().insert(key.to_string());
        Ok(())
    }
}
