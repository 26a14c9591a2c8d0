use std::collections::HashMap;

use device_dialog_core::{
    classify, compose, DeviceKind, ErrorKind, MessageKey, TitleKey, TrackError, Translator,
};

/// Every shape of error the composer has to cope with.
fn samples() -> Vec<Option<TrackError>> {
    let mut samples = vec![None];
    for kind in ErrorKind::ALL {
        samples.push(Some(TrackError::from_kind(kind)));
        samples.push(Some(TrackError::from_kind(kind).with_message("detail")));
    }
    samples.push(Some(TrackError::structured("gum.some_future_error", None)));
    samples.push(Some(TrackError::structured(
        "gum.some_future_error",
        Some("future detail".into()),
    )));
    samples.push(Some(TrackError::structured("", Some("nameless".into()))));
    samples.push(Some(TrackError::opaque(Some("TypeError".into()), Some("raw".into()))));
    samples.push(Some(TrackError::opaque(None, None)));
    samples
}

fn pairs() -> Vec<(Option<TrackError>, Option<TrackError>)> {
    let samples = samples();
    let mut pairs = Vec::new();
    for camera in &samples {
        for mic in &samples {
            pairs.push((camera.clone(), mic.clone()));
        }
    }
    pairs
}

#[test]
fn one_section_per_present_error_mic_first() {
    for (camera, mic) in pairs() {
        let presentation = compose(camera.as_ref(), mic.as_ref());

        let mut expected = Vec::new();
        if mic.is_some() {
            expected.push(DeviceKind::Microphone);
        }
        if camera.is_some() {
            expected.push(DeviceKind::Camera);
        }
        let devices: Vec<_> = presentation.sections.iter().map(|s| s.device).collect();
        assert_eq!(devices, expected, "camera={camera:?} mic={mic:?}");
    }
}

#[test]
fn raw_detail_only_when_unclassified_with_text() {
    for (camera, mic) in pairs() {
        let presentation = compose(camera.as_ref(), mic.as_ref());
        for section in &presentation.sections {
            let error = match section.device {
                DeviceKind::Camera => camera.as_ref(),
                DeviceKind::Microphone => mic.as_ref(),
            }
            .unwrap();

            let classified = error.kind().and_then(|kind| classify(section.device, kind));
            match classified {
                Some(key) => {
                    assert_eq!(section.body_key, key);
                    assert_eq!(section.raw_detail, None);
                }
                None => {
                    let fallback = classify(section.device, ErrorKind::General).unwrap();
                    assert_eq!(section.body_key, fallback);
                    assert_eq!(
                        section.raw_detail.as_deref(),
                        error.message().filter(|m| !m.is_empty())
                    );
                }
            }
        }
    }
}

#[test]
fn suppression_iff_all_present_errors_recognized() {
    for (camera, mic) in pairs() {
        let presentation = compose(camera.as_ref(), mic.as_ref());
        let present: Vec<_> = [&mic, &camera].into_iter().flatten().collect();
        let eligible = !present.is_empty() && present.iter().all(|e| e.is_recognized());
        assert_eq!(
            presentation.suppression.is_some(),
            eligible,
            "camera={camera:?} mic={mic:?}"
        );
    }
}

#[test]
fn recognized_not_found_with_raw_error_is_not_suppressible() {
    let camera = TrackError::from_kind(ErrorKind::NotFound);
    let mic = TrackError::opaque(Some("Error".into()), Some("NotReadableError".into()));
    assert!(compose(Some(&camera), Some(&mic)).suppression.is_none());
}

#[test]
fn title_ignores_messages() {
    let camera = TrackError::from_kind(ErrorKind::NotFound).with_message("permission denied");
    assert_eq!(compose(Some(&camera), None).title, TitleKey::GenericError);

    let mic = TrackError::structured("gum.permission_denied", Some("anything".into()));
    assert_eq!(compose(None, Some(&mic)).title, TitleKey::PermissionDenied);
}

#[test]
fn translate_resolves_every_key() {
    let strings: HashMap<String, String> = [
        ("dialog.error", "Error"),
        ("dialog.permissionDenied", "Permission denied"),
        ("dialog.micErrorPresent", "There was an error connecting to your microphone."),
        ("dialog.micPermissionDeniedError", "You have not granted permission to use your microphone."),
        ("dialog.cameraErrorPresent", "There was an error connecting to your camera."),
        ("dialog.doNotShowWarningAgain", "Don't show this warning again"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let camera = TrackError::structured("gum.odd_failure", Some("device busy".into()));
    let mic = TrackError::from_kind(ErrorKind::PermissionDenied);
    let presentation = compose(Some(&camera), Some(&mic));
    let translated = presentation.translate(&strings);

    assert_eq!(translated.title, "Error");
    assert_eq!(translated.sections.len(), 2);
    assert_eq!(
        translated.sections[0].body,
        "You have not granted permission to use your microphone."
    );
    assert_eq!(translated.sections[0].detail, None);
    // Missing strings come back as their key.
    assert_eq!(translated.sections[1].body, "dialog.cameraUnknownError");
    assert_eq!(translated.sections[1].detail.as_deref(), Some("device busy"));
    assert_eq!(
        translated.suppression_prompt.as_deref(),
        Some("Don't show this warning again")
    );
    assert_eq!(
        strings.translate(&MessageKey::InlineFailureRetry.i18n_key()),
        "inlineDialogFailure.retry"
    );
}

#[test]
fn presentation_serializes_for_renderers() {
    let mic = TrackError::from_kind(ErrorKind::NotFound);
    let json = serde_json::to_value(compose(None, Some(&mic))).unwrap();

    assert_eq!(json["title"], "GenericError");
    assert_eq!(json["sections"][0]["device"], "microphone");
    assert_eq!(json["sections"][0]["bodyKey"], "dialog.micNotFoundError");
    assert_eq!(
        json["suppression"]["storageKey"],
        "doNotShowErrorAgain-mic-NotFound"
    );
    assert_eq!(json["suppression"]["promptKey"], "dialog.doNotShowWarningAgain");
    assert!(json.get("storageKey").is_none());
}
