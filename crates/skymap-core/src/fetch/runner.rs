use std::path::{Path, PathBuf};
use std::process::Command;
use std::thread::JoinHandle;

use tracing::{debug, info, warn};

use crate::config::FetchConfig;
use crate::error::{Result, SkymapError};

use super::request::FetchRequest;

/// Completion signal of a fetch.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchOutcome {
    /// The script exited successfully; `tile_dir` holds the new tiles.
    Completed { tile_dir: PathBuf },
    /// The script could not be started or exited with an error.
    Failed { reason: String },
}

impl FetchOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

/// Run the fetch script to completion on the calling thread.
///
/// Returns `tile_dir` on a zero exit status.
pub fn run_fetch(request: &FetchRequest, config: &FetchConfig, tile_dir: &Path) -> Result<PathBuf> {
    request.validate()?;
    let args = request.to_args(&config.flags);
    info!(
        interpreter = %config.interpreter,
        script = %config.script.display(),
        ra = request.ra_deg,
        dec = request.dec_deg,
        "Starting fetch"
    );

    let output = Command::new(&config.interpreter)
        .arg(&config.script)
        .args(&args)
        .output()
        .map_err(|e| SkymapError::FetchFailed(format!("cannot start {}: {e}", config.interpreter)))?;

    debug!(stdout = %String::from_utf8_lossy(&output.stdout), "Fetch script output");

    if output.status.success() {
        info!(tile_dir = %tile_dir.display(), "Fetch completed");
        Ok(tile_dir.to_path_buf())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let reason = match stderr.lines().last() {
            Some(line) if !line.trim().is_empty() => format!("{} ({line})", output.status),
            _ => output.status.to_string(),
        };
        warn!(%reason, "Fetch failed");
        Err(SkymapError::FetchFailed(reason))
    }
}

/// Run the fetch on a background thread and report through `on_complete`.
///
/// The request is validated up front; the caller never blocks on the
/// subprocess.
pub fn spawn_fetch<F>(
    request: FetchRequest,
    config: FetchConfig,
    tile_dir: PathBuf,
    on_complete: F,
) -> Result<JoinHandle<()>>
where
    F: FnOnce(FetchOutcome) + Send + 'static,
{
    request.validate()?;
    let handle = std::thread::Builder::new()
        .name("skymap-fetch".into())
        .spawn(move || {
            let outcome = match run_fetch(&request, &config, &tile_dir) {
                Ok(tile_dir) => FetchOutcome::Completed { tile_dir },
                Err(e) => FetchOutcome::Failed {
                    reason: e.to_string(),
                },
            };
            on_complete(outcome);
        })?;
    Ok(handle)
}
