use alloc::string::String;
use alloc::sync::Arc;

use crate::{Edge, Orientation};

/// A sink for controller diagnostics. Defaults to none (no output at all).
pub type DiagnosticsSink = Arc<dyn Fn(&Diagnostic) + Send + Sync>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    Warning,
    Error,
}

/// Non-fatal conditions reported by a controller. None of them interrupt rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Diagnostic {
    /// A different orientation was supplied after construction. The configured one is kept.
    OrientationChanged {
        configured: Orientation,
        requested: Orientation,
    },
    /// An orientation name outside the four recognized values was supplied. Nothing changed.
    UnknownOrientation { name: String },
    /// An edge fired while another edge was still pending; the recorded metrics were replaced
    /// and the earlier request will be settled against them.
    PendingOverwritten { previous: Edge, next: Edge },
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Self::OrientationChanged { .. } | Self::PendingOverwritten { .. } => Severity::Warning,
            Self::UnknownOrientation { .. } => Severity::Error,
        }
    }
}

impl core::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OrientationChanged {
                configured,
                requested,
            } => write!(
                f,
                "orientation cannot change after construction (configured {configured}, got {requested})"
            ),
            Self::UnknownOrientation { name } => write!(f, "unrecognized orientation {name:?}"),
            Self::PendingOverwritten { previous, next } => write!(
                f,
                "{next:?} edge fired while {previous:?} was pending; recorded metrics replaced"
            ),
        }
    }
}

pub(crate) fn emit(sink: Option<&DiagnosticsSink>, suppressed: bool, diagnostic: Diagnostic) {
    if suppressed {
        return;
    }
    match diagnostic.severity() {
        Severity::Warning => {
            bwarn!(%diagnostic, "controller diagnostic");
        }
        Severity::Error => {
            berror!(%diagnostic, "controller diagnostic");
        }
    }
    if let Some(sink) = sink {
        sink(&diagnostic);
    }
}
