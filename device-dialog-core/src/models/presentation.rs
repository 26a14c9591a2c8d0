use serde::Serialize;

use super::message_key::MessageKey;
use super::track_error::DeviceKind;
use crate::traits::translator::Translator;

/// Title shown on the device error dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TitleKey {
    GenericError,
    PermissionDenied,
}

impl TitleKey {
    pub fn message_key(self) -> MessageKey {
        match self {
            Self::GenericError => MessageKey::Error,
            Self::PermissionDenied => MessageKey::PermissionDenied,
        }
    }
}

/// One block of text describing a single device's failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageSection {
    pub device: DeviceKind,
    pub header_key: MessageKey,
    pub body_key: MessageKey,
    /// Free-text detail from the error, only set when no curated message exists.
    pub raw_detail: Option<String>,
}

/// A persisted "do not show this again" option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuppressionPreference {
    pub storage_key: String,
    pub prompt_key: MessageKey,
}

/// Renderer-agnostic description of the device error dialog.
///
/// Built by [`crate::processing::composer::compose`]; sections are always
/// ordered microphone first, camera second.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogPresentation {
    pub title: TitleKey,
    pub sections: Vec<MessageSection>,
    pub suppression: Option<SuppressionPreference>,

    /// Storage key as built for the present errors, whether or not it is
    /// exposed through `suppression`.
    #[serde(skip)]
    pub(crate) storage_key: Option<String>,
}

impl DialogPresentation {
    /// Whether there is anything to show at all.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Resolves every identifier through `translator`.
    pub fn translate(&self, translator: &dyn Translator) -> TranslatedDialog {
        TranslatedDialog {
            title: translator.translate(&self.title.message_key().i18n_key()),
            sections: self
                .sections
                .iter()
                .map(|section| TranslatedSection {
                    header: translator.translate(&section.header_key.i18n_key()),
                    body: translator.translate(&section.body_key.i18n_key()),
                    detail: section.raw_detail.clone(),
                })
                .collect(),
            suppression_prompt: self
                .suppression
                .as_ref()
                .map(|s| translator.translate(&s.prompt_key.i18n_key())),
        }
    }
}

/// Dialog text after translation, ready for a widget to lay out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatedDialog {
    pub title: String,
    pub sections: Vec<TranslatedSection>,
    pub suppression_prompt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatedSection {
    pub header: String,
    pub body: String,
    pub detail: Option<String>,
}

/// Inline panel shown when a request behind a dialog failed and can be retried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineFailurePresentation {
    pub message_key: MessageKey,
    pub support: Option<SupportLink>,
    pub retry_key: MessageKey,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportLink {
    pub prompt_key: MessageKey,
    pub link_key: MessageKey,
    pub url: String,
}
