use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::models::error::DialogError;
use crate::traits::preference_store::PreferenceStore;

/// One persisted opt-out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuppressionRecord {
    /// RFC 3339 timestamp of when the user opted out.
    pub suppressed_at: String,
}

/// Preference store backed by a JSON file.
///
/// File layout:
/// ```text
/// {
///   "doNotShowErrorAgain-camera-NotFound": { "suppressedAt": "2026-10-19T09:12:44+00:00" }
/// }
/// ```
///
/// The whole map is cached in memory and rewritten on every opt-out
/// (temp file, then rename over the original).
pub struct JsonFilePreferenceStore {
    path: PathBuf,
    records: Mutex<BTreeMap<String, SuppressionRecord>>,
}

impl JsonFilePreferenceStore {
    /// Open the store at `path`. A missing file is an empty store; an
    /// unreadable or corrupt file is logged and treated as empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, DialogError> {
        let path = path.into();
        let records = if path.exists() {
            load_records(&path)
        } else {
            BTreeMap::new()
        };
        Ok(Self {
            path,
            records: Mutex::new(records),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opt-out record for `key`, if any.
    pub fn record(&self, key: &str) -> Option<SuppressionRecord> {
        self.records.lock().get(key).cloned()
    }

    fn persist(&self, records: &BTreeMap<String, SuppressionRecord>) -> Result<(), DialogError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    DialogError::StorageError(format!("failed to create directory: {}", e))
                })?;
            }
        }

        let json = serde_json::to_string_pretty(records).map_err(|e| {
            DialogError::StorageError(format!("failed to serialize preferences: {}", e))
        })?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)
            .map_err(|e| DialogError::StorageError(format!("failed to write preferences: {}", e)))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| {
            DialogError::StorageError(format!("failed to replace preferences: {}", e))
        })?;
        Ok(())
    }
}

fn load_records(path: &Path) -> BTreeMap<String, SuppressionRecord> {
    let parsed: Result<BTreeMap<String, SuppressionRecord>, String> = fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|json| serde_json::from_str(&json).map_err(|e| e.to_string()));
    match parsed {
        Ok(records) => records,
        Err(e) => {
            log::warn!(
                "ignoring unreadable preference file {}: {}",
                path.display(),
                e
            );
            BTreeMap::new()
        }
    }
}

impl PreferenceStore for JsonFilePreferenceStore {
    fn is_suppressed(&self, key: &str) -> Result<bool, DialogError> {
        Ok(self.records.lock().contains_key(key))
    }

    fn suppress(&self, key: &str) -> Result<(), DialogError> {
        let mut records = self.records.lock();
        if records.contains_key(key) {
            return Ok(());
        }
        records.insert(
            key.to_string(),
            SuppressionRecord {
                suppressed_at: chrono::Utc::now().to_rfc3339(),
            },
        );
        if let Err(e) = self.persist(&records) {
            records.remove(key);
            return Err(e);
        }
        Ok(())
    }
}
