use std::fmt;
use std::path::PathBuf;

use skymap_core::mosaic::{CompositeReport, MosaicStage};

/// Long-running operation currently in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activity {
    Fetching,
    Building,
    Saving,
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetching => write!(f, "Fetching tiles"),
            Self::Building => write!(f, "Building mosaic"),
            Self::Saving => write!(f, "Saving"),
        }
    }
}

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    /// Directory the current (or next) composite is built from.
    pub tile_dir: PathBuf,

    /// What is currently running (None = idle).
    pub running: Option<Activity>,

    /// Outcome of the last successful rebuild.
    pub last_report: Option<CompositeReport>,

    /// Log messages.
    pub log_messages: Vec<String>,

    /// Progress.
    pub progress_stage: Option<MosaicStage>,
    pub progress_items_done: Option<usize>,
    pub progress_items_total: Option<usize>,
}

impl UIState {
    pub fn new(tile_dir: PathBuf) -> Self {
        Self {
            tile_dir,
            ..Default::default()
        }
    }

    /// Where a new fetch writes its tiles: the directory currently on
    /// screen, so the follow-up rebuild reads what was just fetched.
    pub fn fetch_dir(&self) -> PathBuf {
        self.tile_dir.clone()
    }

    pub fn is_busy(&self) -> bool {
        self.running.is_some()
    }

    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    pub fn start(&mut self, activity: Activity) {
        self.running = Some(activity);
        self.progress_stage = None;
        self.progress_items_done = None;
        self.progress_items_total = None;
    }

    pub fn finish(&mut self) {
        self.running = None;
        self.progress_stage = None;
    }
}
