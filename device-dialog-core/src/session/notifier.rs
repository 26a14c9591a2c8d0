use parking_lot::Mutex;

use crate::models::error::DialogError;
use crate::models::presentation::DialogPresentation;
use crate::models::track_error::TrackError;
use crate::processing::composer;
use crate::traits::dialog_renderer::DialogRenderer;
use crate::traits::preference_store::PreferenceStore;

/// Result of one [`DeviceErrorNotifier::notify`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// No device errors were given.
    NothingToShow,
    /// The user opted out of this exact error combination earlier.
    Suppressed { storage_key: String },
    /// The dialog was shown.
    Shown {
        presentation: DialogPresentation,
        opted_out: bool,
    },
}

/// Counters for debugging how often dialogs are shown or skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotifierDiagnostics {
    pub shown: u64,
    pub suppressed: u64,
    pub opt_outs: u64,
}

/// Drives the device error dialog end to end.
///
/// Generic over the preference store and the rendering widget:
/// ```text
/// [camera, mic] → compose → [PreferenceStore: opted out?] → [DialogRenderer]
///                                                                 ↓
///                                          [PreferenceStore: record opt-out]
/// ```
pub struct DeviceErrorNotifier<S: PreferenceStore, R: DialogRenderer> {
    store: S,
    renderer: R,
    diagnostics: Mutex<NotifierDiagnostics>,
}

impl<S: PreferenceStore, R: DialogRenderer> DeviceErrorNotifier<S, R> {
    pub fn new(store: S, renderer: R) -> Self {
        Self {
            store,
            renderer,
            diagnostics: Mutex::new(NotifierDiagnostics::default()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn diagnostics(&self) -> NotifierDiagnostics {
        *self.diagnostics.lock()
    }

    /// Show the device error dialog for `camera` and `mic` unless there is
    /// nothing to show or the user opted out of this combination.
    ///
    /// A failure to persist a fresh opt-out is logged, not returned: the
    /// dialog has already been shown at that point.
    pub fn notify(
        &self,
        camera: Option<&TrackError>,
        mic: Option<&TrackError>,
    ) -> Result<NotifyOutcome, DialogError> {
        let presentation = composer::compose(camera, mic);
        if presentation.is_empty() {
            return Ok(NotifyOutcome::NothingToShow);
        }

        match &presentation.suppression {
            Some(suppression) => {
                if self.store.is_suppressed(&suppression.storage_key)? {
                    log::debug!(
                        "device error dialog suppressed by preference {}",
                        suppression.storage_key
                    );
                    self.diagnostics.lock().suppressed += 1;
                    return Ok(NotifyOutcome::Suppressed {
                        storage_key: suppression.storage_key.clone(),
                    });
                }
            }
            None => {
                log::debug!(
                    "opt-out not offered for {:?}: unrecognized device error present",
                    presentation.storage_key
                );
            }
        }

        let response = self.renderer.show(&presentation)?;
        self.diagnostics.lock().shown += 1;

        let mut opted_out = false;
        if response.do_not_show_again {
            match &presentation.suppression {
                Some(suppression) => match self.store.suppress(&suppression.storage_key) {
                    Ok(()) => {
                        opted_out = true;
                        self.diagnostics.lock().opt_outs += 1;
                    }
                    Err(e) => {
                        log::error!(
                            "Failed to record opt-out for {}: {}",
                            suppression.storage_key,
                            e
                        );
                    }
                },
                None => {
                    log::warn!("renderer reported an opt-out for a dialog that did not offer one");
                }
            }
        }

        Ok(NotifyOutcome::Shown {
            presentation,
            opted_out,
        })
    }
}
