use std::fmt;

use serde::{Deserialize, Serialize};

/// Device whose acquisition failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    Camera,
    Microphone,
}

impl DeviceKind {
    /// Short form used in suppression storage keys (`camera`, `mic`).
    pub fn key_component(self) -> &'static str {
        match self {
            Self::Camera => "camera",
            Self::Microphone => "mic",
        }
    }
}

/// Recognized reasons a device acquisition can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    General,
    PermissionDenied,
    NotFound,
    ConstraintFailed,
    NoDataFromSource,
    /// Only ever reported for cameras.
    UnsupportedResolution,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 6] = [
        Self::General,
        Self::PermissionDenied,
        Self::NotFound,
        Self::ConstraintFailed,
        Self::NoDataFromSource,
        Self::UnsupportedResolution,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::PermissionDenied => "PermissionDenied",
            Self::NotFound => "NotFound",
            Self::ConstraintFailed => "ConstraintFailed",
            Self::NoDataFromSource => "NoDataFromSource",
            Self::UnsupportedResolution => "UnsupportedResolution",
        }
    }

    /// Name the media library puts on its track errors.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::General => "gum.general",
            Self::PermissionDenied => "gum.permission_denied",
            Self::NotFound => "gum.not_found",
            Self::ConstraintFailed => "gum.constraint_failed",
            Self::NoDataFromSource => "track.no_data_from_source",
            Self::UnsupportedResolution => "gum.unsupported_resolution",
        }
    }

    /// Accepts either the variant name or the wire name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name || kind.wire_name() == name)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Symbolic name carried by a structured track error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorName {
    Known(ErrorKind),
    /// Belongs to the structured family but is not one of [`ErrorKind`].
    Other(String),
}

impl ErrorName {
    pub fn parse(name: &str) -> Self {
        match ErrorKind::parse(name) {
            Some(kind) => Self::Known(kind),
            None => Self::Other(name.to_string()),
        }
    }

    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Known(kind) => Some(*kind),
            Self::Other(_) => None,
        }
    }
}

impl fmt::Display for ErrorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(kind) => f.write_str(kind.as_str()),
            Self::Other(name) => f.write_str(name),
        }
    }
}

/// One camera or microphone acquisition failure.
///
/// `Structured` errors come from the media library and are recognized;
/// `Opaque` errors are raw platform exceptions that were never wrapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackError {
    Structured {
        name: ErrorName,
        message: Option<String>,
    },
    Opaque {
        name: Option<String>,
        message: Option<String>,
    },
}

impl TrackError {
    /// Builds a structured error from its symbolic name.
    ///
    /// An empty name cannot be recognized, so it yields `Opaque`.
    pub fn structured(name: &str, message: Option<String>) -> Self {
        if name.is_empty() {
            return Self::Opaque {
                name: None,
                message,
            };
        }
        Self::Structured {
            name: ErrorName::parse(name),
            message,
        }
    }

    pub fn from_kind(kind: ErrorKind) -> Self {
        Self::Structured {
            name: ErrorName::Known(kind),
            message: None,
        }
    }

    pub fn opaque(name: Option<String>, message: Option<String>) -> Self {
        Self::Opaque { name, message }
    }

    pub fn with_message(mut self, text: impl Into<String>) -> Self {
        match &mut self {
            Self::Structured { message, .. } | Self::Opaque { message, .. } => {
                *message = Some(text.into());
            }
        }
        self
    }

    pub fn is_recognized(&self) -> bool {
        matches!(self, Self::Structured { .. })
    }

    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Structured { name, .. } => name.kind(),
            Self::Opaque { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Structured { message, .. } | Self::Opaque { message, .. } => message.as_deref(),
        }
    }

    /// Name embedded in the suppression storage key.
    pub fn key_name(&self) -> String {
        match self {
            Self::Structured { name, .. } => name.to_string(),
            Self::Opaque {
                name: Some(name), ..
            } if !name.is_empty() => name.clone(),
            Self::Opaque { .. } => "unknown".to_string(),
        }
    }
}
