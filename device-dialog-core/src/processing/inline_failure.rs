use crate::models::config::DialogConfig;
use crate::models::message_key::MessageKey;
use crate::models::presentation::{InlineFailurePresentation, SupportLink};

/// Compose the inline "request failed, retry?" panel.
///
/// The support link is only included when `config` names a support page.
pub fn compose_inline_failure(config: &DialogConfig) -> InlineFailurePresentation {
    let support = config
        .support_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(|url| SupportLink {
            prompt_key: MessageKey::InlineFailureSupportMsg,
            link_key: MessageKey::InlineFailureSupport,
            url: url.to_string(),
        });

    InlineFailurePresentation {
        message_key: MessageKey::InlineFailureMsg,
        support,
        retry_key: MessageKey::InlineFailureRetry,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_support_url_hides_link() {
        let panel = compose_inline_failure(&DialogConfig::default());
        assert_eq!(panel.message_key, MessageKey::InlineFailureMsg);
        assert_eq!(panel.retry_key, MessageKey::InlineFailureRetry);
        assert!(panel.support.is_none());
    }

    #[test]
    fn support_url_adds_link() {
        let config = DialogConfig {
            support_url: Some("https://support.example.com/".into()),
            ..Default::default()
        };
        let link = compose_inline_failure(&config).support.unwrap();
        assert_eq!(link.url, "https://support.example.com/");
        assert_eq!(link.prompt_key, MessageKey::InlineFailureSupportMsg);
        assert_eq!(link.link_key, MessageKey::InlineFailureSupport);
    }

    #[test]
    fn blank_support_url_hides_link() {
        let config = DialogConfig {
            support_url: Some("  ".into()),
            ..Default::default()
        };
        assert!(compose_inline_failure(&config).support.is_none());
    }
}
