mod console;

use std::collections::HashMap;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use device_dialog_core::{
    compose_inline_failure, DeviceErrorNotifier, DialogConfig, DialogError,
    JsonFilePreferenceStore, MemoryPreferenceStore, NotifyOutcome, PreferenceStore, TrackError,
};

use console::{load_strings, ConsoleRenderer};

#[derive(Parser, Debug)]
#[command(name = "device-dialog", version, about = "Print the dialog shown for device failures")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON configuration file (supportUrl, preferencesPath).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON string table used to translate message identifiers.
    #[arg(long, global = true)]
    strings: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the camera/microphone error dialog.
    Devices(DeviceArgs),

    /// Show the inline "request failed" panel.
    InlineFailure,
}

#[derive(Args, Debug)]
struct DeviceArgs {
    /// Camera error name, e.g. `gum.not_found` or `PermissionDenied`.
    #[arg(long)]
    camera: Option<String>,

    /// Free-text detail attached to the camera error.
    #[arg(long)]
    camera_message: Option<String>,

    /// Treat the camera error as a raw platform exception.
    #[arg(long)]
    camera_opaque: bool,

    /// Microphone error name.
    #[arg(long)]
    mic: Option<String>,

    /// Free-text detail attached to the microphone error.
    #[arg(long)]
    mic_message: Option<String>,

    /// Treat the microphone error as a raw platform exception.
    #[arg(long)]
    mic_opaque: bool,

    /// Tick "do not show this again" when it is offered.
    #[arg(long)]
    opt_out: bool,
}

fn track_error(name: Option<String>, message: Option<String>, opaque: bool) -> Option<TrackError> {
    if name.is_none() && message.is_none() && !opaque {
        return None;
    }
    Some(if opaque {
        TrackError::opaque(name, message)
    } else {
        TrackError::structured(name.as_deref().unwrap_or_default(), message)
    })
}

fn run_devices(
    args: DeviceArgs,
    store: impl PreferenceStore,
    strings: HashMap<String, String>,
) -> Result<(), DialogError> {
    let camera = track_error(args.camera, args.camera_message, args.camera_opaque);
    let mic = track_error(args.mic, args.mic_message, args.mic_opaque);

    let notifier = DeviceErrorNotifier::new(store, ConsoleRenderer::new(strings, args.opt_out));
    match notifier.notify(camera.as_ref(), mic.as_ref())? {
        NotifyOutcome::NothingToShow => println!("no device errors"),
        NotifyOutcome::Suppressed { storage_key } => {
            println!("dialog suppressed by earlier opt-out ({})", storage_key)
        }
        NotifyOutcome::Shown { opted_out, .. } => {
            if opted_out {
                log::info!("opt-out recorded");
            }
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), DialogError> {
    let config = match &cli.config {
        Some(path) => DialogConfig::from_json_file(path)?,
        None => DialogConfig::default(),
    };
    let strings = match &cli.strings {
        Some(path) => load_strings(path)?,
        None => HashMap::new(),
    };

    match cli.command {
        Commands::Devices(args) => match &config.preferences_path {
            Some(path) => run_devices(args, JsonFilePreferenceStore::open(path)?, strings),
            None => run_devices(args, MemoryPreferenceStore::new(), strings),
        },
        Commands::InlineFailure => {
            let panel = compose_inline_failure(&config);
            ConsoleRenderer::new(strings, false).print_inline_failure(&panel);
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_means_no_error() {
        assert_eq!(track_error(None, None, false), None);
    }

    #[test]
    fn message_without_name_is_not_recognized() {
        let error = track_error(None, Some("boom".into()), false).unwrap();
        assert!(!error.is_recognized());
    }

    #[test]
    fn opaque_flag_wins_over_name() {
        let error = track_error(Some("gum.not_found".into()), None, true).unwrap();
        assert!(!error.is_recognized());
    }

    #[test]
    fn parses_device_flags() {
        let cli = Cli::parse_from([
            "device-dialog",
            "devices",
            "--camera",
            "gum.permission_denied",
            "--mic-message",
            "busy",
            "--mic-opaque",
            "--opt-out",
        ]);
        let Commands::Devices(args) = cli.command else {
            panic!("expected devices command");
        };
        assert_eq!(args.camera.as_deref(), Some("gum.permission_denied"));
        assert!(args.mic_opaque);
        assert!(args.opt_out);
    }
}
