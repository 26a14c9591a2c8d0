//! # device-dialog-core
//!
//! Decides how camera and microphone acquisition failures are presented to
//! the user: dialog title, one message section per failing device, and
//! whether a persisted "do not show this again" opt-out is offered.
//!
//! Rendering, translation and preference storage are collaborators behind
//! traits; this crate only produces identifiers and storage keys.
//!
//! ## Architecture
//!
//! ```text
//! device-dialog-core (this crate)
//! ├── models/       ← TrackError, ErrorKind, MessageKey, DialogPresentation, DialogConfig, DialogError
//! ├── processing/   ← classifier, composer, inline failure panel
//! ├── traits/       ← Translator, PreferenceStore, DialogRenderer
//! ├── storage/      ← MemoryPreferenceStore, JsonFilePreferenceStore
//! └── session/      ← DeviceErrorNotifier (compose → check opt-out → show → record opt-out)
//! ```

pub mod models;
pub mod processing;
pub mod session;
pub mod storage;
pub mod traits;

// Re-export key types at crate root for convenience.
pub use models::config::DialogConfig;
pub use models::error::DialogError;
pub use models::message_key::MessageKey;
pub use models::presentation::{
    DialogPresentation, InlineFailurePresentation, MessageSection, SupportLink,
    SuppressionPreference, TitleKey, TranslatedDialog, TranslatedSection,
};
pub use models::track_error::{DeviceKind, ErrorKind, ErrorName, TrackError};
pub use processing::classifier::{classify, classify_name};
pub use processing::composer::compose;
pub use processing::inline_failure::compose_inline_failure;
pub use session::notifier::{DeviceErrorNotifier, NotifierDiagnostics, NotifyOutcome};
pub use storage::json_store::JsonFilePreferenceStore;
pub use storage::memory_store::MemoryPreferenceStore;
pub use traits::dialog_renderer::{DialogRenderer, DialogResponse};
pub use traits::preference_store::PreferenceStore;
pub use traits::translator::Translator;
