use crate::models::error::DialogError;
use crate::models::presentation::DialogPresentation;

/// What the user did with a shown dialog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DialogResponse {
    /// The "do not show again" box was ticked when the dialog closed.
    pub do_not_show_again: bool,
}

/// Modal widget that draws a [`DialogPresentation`] and waits for the user.
///
/// Implementations own the chrome, buttons and translation; the presentation
/// only carries identifiers.
pub trait DialogRenderer: Send + Sync {
    fn show(&self, presentation: &DialogPresentation) -> Result<DialogResponse, DialogError>;
}
