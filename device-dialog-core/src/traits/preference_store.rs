use crate::models::error::DialogError;

/// Durable storage for "do not show this again" opt-outs, addressed by
/// the suppression storage key.
///
/// Read before a dialog is shown, written when the user opts out.
pub trait PreferenceStore: Send + Sync {
    /// Whether the user previously opted out of the dialog for `key`.
    fn is_suppressed(&self, key: &str) -> Result<bool, DialogError>;

    /// Record an opt-out for `key`.
    fn suppress(&self, key: &str) -> Result<(), DialogError>;
}
