//! External tool discovery and subprocess execution.

use crate::dock::error::Error;
use std::path::PathBuf;
use std::process::{Command, Output};

/// Locations of the external executables the pipeline shells out to.
///
/// Defaults to bare program names so the tools are resolved through `PATH`;
/// override individual fields to pin specific installations.
#[derive(Debug, Clone)]
pub struct ToolPaths {
    /// AutoDock Vina docking engine.
    pub vina: PathBuf,
    /// Companion tool splitting multi-pose output into one file per pose.
    pub vina_split: PathBuf,
    /// Open Babel converter used for all format conversions.
    pub obabel: PathBuf,
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self {
            vina: PathBuf::from("vina"),
            vina_split: PathBuf::from("vina_split"),
            obabel: PathBuf::from("obabel"),
        }
    }
}

/// Runs a prepared command and returns its captured output.
///
/// A non-zero exit status is an [`Error::EngineInvocation`] carrying the
/// program name and whatever the tool wrote to stderr; a spawn failure (tool
/// not installed, not executable) is reported the same way so callers see one
/// error shape for "the external tool did not work".
pub(crate) fn run_tool(mut command: Command) -> Result<Output, Error> {
    let program = command.get_program().to_string_lossy().into_owned();

    let output = command
        .output()
        .map_err(|e| Error::engine(format!("failed to launch '{program}': {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::engine(format!(
            "'{program}' exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    Ok(output)
}
