use serde::{Serialize, Serializer};

/// Identifier of a user-facing string.
///
/// The core only produces identifiers; resolving them to localized text is
/// the translator's job (see [`crate::traits::translator::Translator`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    // Titles
    Error,
    PermissionDenied,

    // Section headers
    CameraErrorPresent,
    MicErrorPresent,

    // Camera bodies
    CameraUnknownError,
    CameraPermissionDeniedError,
    CameraNotFoundError,
    CameraConstraintFailedError,
    CameraNotSendingData,
    CameraUnsupportedResolutionError,

    // Microphone bodies
    MicUnknownError,
    MicPermissionDeniedError,
    MicNotFoundError,
    MicConstraintFailedError,
    MicNotSendingData,

    DoNotShowWarningAgain,

    // Inline failure panel
    InlineFailureMsg,
    InlineFailureSupportMsg,
    InlineFailureSupport,
    InlineFailureRetry,
}

impl MessageKey {
    /// Bare identifier, e.g. `cameraNotFoundError`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::PermissionDenied => "permissionDenied",
            Self::CameraErrorPresent => "cameraErrorPresent",
            Self::MicErrorPresent => "micErrorPresent",
            Self::CameraUnknownError => "cameraUnknownError",
            Self::CameraPermissionDeniedError => "cameraPermissionDeniedError",
            Self::CameraNotFoundError => "cameraNotFoundError",
            Self::CameraConstraintFailedError => "cameraConstraintFailedError",
            Self::CameraNotSendingData => "cameraNotSendingData",
            Self::CameraUnsupportedResolutionError => "cameraUnsupportedResolutionError",
            Self::MicUnknownError => "micUnknownError",
            Self::MicPermissionDeniedError => "micPermissionDeniedError",
            Self::MicNotFoundError => "micNotFoundError",
            Self::MicConstraintFailedError => "micConstraintFailedError",
            Self::MicNotSendingData => "micNotSendingData",
            Self::DoNotShowWarningAgain => "doNotShowWarningAgain",
            Self::InlineFailureMsg => "msg",
            Self::InlineFailureSupportMsg => "supportMsg",
            Self::InlineFailureSupport => "support",
            Self::InlineFailureRetry => "retry",
        }
    }

    /// Translation namespace the identifier lives in.
    pub fn namespace(self) -> &'static str {
        match self {
            Self::InlineFailureMsg
            | Self::InlineFailureSupportMsg
            | Self::InlineFailureSupport
            | Self::InlineFailureRetry => "inlineDialogFailure",
            _ => "dialog",
        }
    }

    /// Fully qualified translation key, e.g. `dialog.cameraNotFoundError`.
    pub fn i18n_key(self) -> String {
        format!("{}.{}", self.namespace(), self.as_str())
    }
}

// Renderers receive the qualified key.
impl Serialize for MessageKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.i18n_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialog_keys_are_namespaced() {
        assert_eq!(
            MessageKey::CameraUnsupportedResolutionError.i18n_key(),
            "dialog.cameraUnsupportedResolutionError"
        );
        assert_eq!(MessageKey::Error.i18n_key(), "dialog.error");
        assert_eq!(
            MessageKey::DoNotShowWarningAgain.i18n_key(),
            "dialog.doNotShowWarningAgain"
        );
    }

    #[test]
    fn inline_failure_keys_use_their_own_namespace() {
        assert_eq!(
            MessageKey::InlineFailureRetry.i18n_key(),
            "inlineDialogFailure.retry"
        );
        assert_eq!(
            MessageKey::InlineFailureSupportMsg.i18n_key(),
            "inlineDialogFailure.supportMsg"
        );
    }

    #[test]
    fn serializes_as_qualified_key() {
        let json = serde_json::to_string(&MessageKey::MicNotSendingData).unwrap();
        assert_eq!(json, "\"dialog.micNotSendingData\"");
    }
}
