use std::path::PathBuf;
use std::time::Duration;

use skymap_core::config::AppConfig;
use skymap_core::mosaic::{Composite, CompositeReport, MosaicOptions, MosaicStage};
use skymap_core::viewport::DisplayFrame;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Build a new composite from the tiles in `dir`.
    Rebuild { dir: PathBuf, options: MosaicOptions },

    /// Save the frame currently shown in the viewport.
    SaveView { frame: DisplayFrame, path: PathBuf },

    /// Save the full-resolution composite.
    SaveMosaic { composite: Box<Composite>, path: PathBuf },
}

/// Results sent from worker (and fetch) threads back to UI thread.
pub enum WorkerResult {
    CompositeReady {
        composite: Box<Composite>,
        report: CompositeReport,
        elapsed: Duration,
    },
    RebuildFailed {
        message: String,
    },

    FetchCompleted {
        tile_dir: PathBuf,
        elapsed: Duration,
    },
    FetchFailed {
        reason: String,
    },

    /// Progress update during a rebuild.
    Progress {
        stage: MosaicStage,
        items_done: Option<usize>,
        items_total: Option<usize>,
    },

    ImageSaved {
        path: PathBuf,
    },
    ConfigImported {
        config: Box<AppConfig>,
    },
    Error {
        message: String,
    },
    Log {
        message: String,
    },
}
