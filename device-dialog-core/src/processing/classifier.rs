use crate::models::message_key::MessageKey;
use crate::models::track_error::{DeviceKind, ErrorKind};

/// Maps a recognized failure reason to its curated message for `device`.
///
/// Returns `None` when the device has no message for `kind` (only
/// `UnsupportedResolution` on a microphone).
pub fn classify(device: DeviceKind, kind: ErrorKind) -> Option<MessageKey> {
    match device {
        DeviceKind::Camera => Some(camera_message(kind)),
        DeviceKind::Microphone => mic_message(kind),
    }
}

/// Like [`classify`] but starting from a symbolic name. Names outside
/// [`ErrorKind`] yield `None`.
pub fn classify_name(device: DeviceKind, name: &str) -> Option<MessageKey> {
    ErrorKind::parse(name).and_then(|kind| classify(device, kind))
}

/// Message used when a device error cannot be classified.
pub fn fallback_message(device: DeviceKind) -> MessageKey {
    match device {
        DeviceKind::Camera => MessageKey::CameraUnknownError,
        DeviceKind::Microphone => MessageKey::MicUnknownError,
    }
}

/// Header naming which device is in trouble.
pub fn header_message(device: DeviceKind) -> MessageKey {
    match device {
        DeviceKind::Camera => MessageKey::CameraErrorPresent,
        DeviceKind::Microphone => MessageKey::MicErrorPresent,
    }
}

fn camera_message(kind: ErrorKind) -> MessageKey {
    match kind {
        ErrorKind::General => MessageKey::CameraUnknownError,
        ErrorKind::PermissionDenied => MessageKey::CameraPermissionDeniedError,
        ErrorKind::NotFound => MessageKey::CameraNotFoundError,
        ErrorKind::ConstraintFailed => MessageKey::CameraConstraintFailedError,
        ErrorKind::NoDataFromSource => MessageKey::CameraNotSendingData,
        ErrorKind::UnsupportedResolution => MessageKey::CameraUnsupportedResolutionError,
    }
}

fn mic_message(kind: ErrorKind) -> Option<MessageKey> {
    match kind {
        ErrorKind::General => Some(MessageKey::MicUnknownError),
        ErrorKind::PermissionDenied => Some(MessageKey::MicPermissionDeniedError),
        ErrorKind::NotFound => Some(MessageKey::MicNotFoundError),
        ErrorKind::ConstraintFailed => Some(MessageKey::MicConstraintFailedError),
        ErrorKind::NoDataFromSource => Some(MessageKey::MicNotSendingData),
        ErrorKind::UnsupportedResolution => None,
    }
}
