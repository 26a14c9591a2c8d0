use std::collections::HashMap;
use std::fs;
use std::path::Path;

use device_dialog_core::{
    DialogError, DialogPresentation, DialogRenderer, DialogResponse, InlineFailurePresentation,
    Translator,
};

/// Load a flat `{ "dialog.error": "Error", ... }` string table.
pub fn load_strings(path: &Path) -> Result<HashMap<String, String>, DialogError> {
    let json = fs::read_to_string(path)
        .map_err(|e| DialogError::ConfigurationFailed(format!("failed to read strings: {}", e)))?;
    serde_json::from_str(&json)
        .map_err(|e| DialogError::ConfigurationFailed(format!("failed to parse strings: {}", e)))
}

/// Renderer that prints the dialog to stdout.
///
/// The user's answer is fixed up front: `opt_out` ticks the "do not show
/// again" box whenever the dialog offers it.
pub struct ConsoleRenderer {
    strings: HashMap<String, String>,
    opt_out: bool,
}

impl ConsoleRenderer {
    pub fn new(strings: HashMap<String, String>, opt_out: bool) -> Self {
        Self { strings, opt_out }
    }

    pub fn print_inline_failure(&self, panel: &InlineFailurePresentation) {
        println!("{}", self.strings.translate(&panel.message_key.i18n_key()));
        if let Some(support) = &panel.support {
            println!(
                "{} {} <{}>.",
                self.strings.translate(&support.prompt_key.i18n_key()),
                self.strings.translate(&support.link_key.i18n_key()),
                support.url
            );
        }
        println!("[ {} ]", self.strings.translate(&panel.retry_key.i18n_key()));
    }
}

impl DialogRenderer for ConsoleRenderer {
    fn show(&self, presentation: &DialogPresentation) -> Result<DialogResponse, DialogError> {
        let dialog = presentation.translate(&self.strings);

        println!("== {} ==", dialog.title);
        for section in &dialog.sections {
            println!();
            println!("{}", section.header);
            println!("  {}", section.body);
            if let Some(detail) = &section.detail {
                println!("  {}", detail);
            }
        }

        let do_not_show_again = match &dialog.suppression_prompt {
            Some(prompt) => {
                println!();
                println!("[{}] {}", if self.opt_out { "x" } else { " " }, prompt);
                self.opt_out
            }
            None => false,
        };
        println!("[ OK ]");

        Ok(DialogResponse { do_not_show_again })
    }
}
