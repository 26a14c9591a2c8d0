use std::collections::HashMap;

/// Resolves a qualified message identifier (`dialog.cameraNotFoundError`)
/// to user-facing text.
pub trait Translator: Send + Sync {
    fn translate(&self, key: &str) -> String;
}

/// Lookup table translator; unknown keys come back unchanged.
impl Translator for HashMap<String, String> {
    fn translate(&self, key: &str) -> String {
        self.get(key).cloned().unwrap_or_else(|| key.to_string())
    }
}
