use crate::models::message_key::MessageKey;
use crate::models::presentation::{DialogPresentation, MessageSection, SuppressionPreference, TitleKey};
use crate::models::track_error::{DeviceKind, ErrorKind, TrackError};
use crate::processing::classifier;

/// Prefix of every suppression storage key.
pub const STORAGE_KEY_BASE: &str = "doNotShowErrorAgain";

/// Compose the device error dialog for up to two failures.
///
/// Total over its inputs: absent errors only shrink the result, and
/// `compose(None, None)` is an empty presentation with the generic title.
///
/// ```text
/// sections     mic section (if any), then camera section (if any)
/// title        PermissionDenied if the camera was denied, or the mic was
///              denied and there is no camera error; GenericError otherwise
/// suppression  offered only when every present error is recognized
/// ```
pub fn compose(camera: Option<&TrackError>, mic: Option<&TrackError>) -> DialogPresentation {
    let mut sections = Vec::with_capacity(2);
    if let Some(error) = mic {
        sections.push(section_for(DeviceKind::Microphone, error));
    }
    if let Some(error) = camera {
        sections.push(section_for(DeviceKind::Camera, error));
    }

    let storage_key = storage_key(camera, mic);
    let suppression = match &storage_key {
        Some(key) if is_suppressible(camera, mic) => Some(SuppressionPreference {
            storage_key: key.clone(),
            prompt_key: MessageKey::DoNotShowWarningAgain,
        }),
        _ => None,
    };

    let presentation = DialogPresentation {
        title: title(camera, mic),
        sections,
        suppression,
        storage_key,
    };
    log::debug!(
        "composed device error dialog: title={:?} sections={} storage_key={:?} suppressible={}",
        presentation.title,
        presentation.sections.len(),
        presentation.storage_key,
        presentation.suppression.is_some()
    );
    presentation
}

/// Builds the section for one device.
///
/// The raw error text is only kept when no curated message matched; a
/// classified error is described by its message alone.
fn section_for(device: DeviceKind, error: &TrackError) -> MessageSection {
    let classified = error.kind().and_then(|kind| classifier::classify(device, kind));
    let raw_detail = match classified {
        Some(_) => None,
        None => error
            .message()
            .filter(|message| !message.is_empty())
            .map(str::to_string),
    };

    MessageSection {
        device,
        header_key: classifier::header_message(device),
        body_key: classified.unwrap_or_else(|| classifier::fallback_message(device)),
        raw_detail,
    }
}

fn title(camera: Option<&TrackError>, mic: Option<&TrackError>) -> TitleKey {
    let denied = |error: &TrackError| error.kind() == Some(ErrorKind::PermissionDenied);

    let camera_denied = camera.is_some_and(denied);
    let mic_denied_alone = camera.is_none() && mic.is_some_and(denied);

    if camera_denied || mic_denied_alone {
        TitleKey::PermissionDenied
    } else {
        TitleKey::GenericError
    }
}

/// Every present error must be recognized, and at least one must be present.
fn is_suppressible(camera: Option<&TrackError>, mic: Option<&TrackError>) -> bool {
    let present = [mic, camera];
    present.iter().any(Option::is_some)
        && present.iter().flatten().all(|error| error.is_recognized())
}

/// `doNotShowErrorAgain[-mic-<name>][-camera-<name>]`, or None when there
/// is no error at all.
fn storage_key(camera: Option<&TrackError>, mic: Option<&TrackError>) -> Option<String> {
    if camera.is_none() && mic.is_none() {
        return None;
    }

    let mut key = String::from(STORAGE_KEY_BASE);
    for (device, error) in [(DeviceKind::Microphone, mic), (DeviceKind::Camera, camera)] {
        if let Some(error) = error {
            key.push('-');
            key.push_str(device.key_component());
            key.push('-');
            key.push_str(&error.key_name());
        }
    }
    Some(key)
}
