//! Switch the active document to its sibling.

use tracing::{debug, info, warn};

use crate::app::AppContext;
use crate::domain::{AppError, Pane, SwitchCommand, classify, plan_open};
use crate::ports::LocalHostEditor;

/// Why a switch did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoActiveDocument,
    NotApplicable,
}

/// Result of one switch invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// Target opened in the command's pane.
    Opened { target: String, pane: Pane },
    /// Target was already visible and was focused in its pane.
    Revealed { target: String, pane: Pane },
    /// Nothing to do for the active document.
    Skipped(SkipReason),
    /// Host could not open the target. Logged, not retried.
    OpenFailed { target: String, details: String },
}

impl SwitchOutcome {
    pub fn target(&self) -> Option<&str> {
        match self {
            SwitchOutcome::Opened { target, .. } | SwitchOutcome::Revealed { target, .. } => {
                Some(target)
            }
            SwitchOutcome::Skipped(_) | SwitchOutcome::OpenFailed { .. } => None,
        }
    }
}

/// Execute `command` against the host's active document.
///
/// Only an invalid configuration is an error; every host-side condition is
/// reported through the outcome.
pub async fn execute<H: LocalHostEditor>(
    ctx: &AppContext<H>,
    command: SwitchCommand,
) -> Result<SwitchOutcome, AppError> {
    let policy = ctx.config().policy(command)?;
    let host = ctx.host();

    let Some(active) = host.active_document() else {
        debug!(%command, "No active document");
        return Ok(SwitchOutcome::Skipped(SkipReason::NoActiveDocument));
    };

    let Some(target) = policy.resolve(&active) else {
        debug!(%command, path = %active, categories = %classify(&active), "Not applicable");
        return Ok(SwitchOutcome::Skipped(SkipReason::NotApplicable));
    };

    let request = plan_open(target, policy.pane, &host.visible_editors());
    debug!(
        %command,
        target = %request.path,
        pane = %request.pane,
        already_visible = request.already_visible,
        "Planned open"
    );

    if let Err(err) = host.open_document(&request).await {
        warn!(%command, target = %request.path, "Open failed: {}", err);
        return Ok(SwitchOutcome::OpenFailed { target: request.path, details: err.to_string() });
    }

    info!(%command, target = %request.path, pane = %request.pane, "Switched");
    if ctx.config().notify {
        host.show_information_message(&format!("Switched to {}", request.path));
    }

    let outcome = if request.already_visible {
        SwitchOutcome::Revealed { target: request.path, pane: request.pane }
    } else {
        SwitchOutcome::Opened { target: request.path, pane: request.pane }
    };
    Ok(outcome)
}
