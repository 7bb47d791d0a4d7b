use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// List every entry of `dir`, ordered by byte-wise comparison of the full path.
///
/// Tile filenames are expected to sort into spatial order (`img_1.png` ..
/// `img_9.png`); the compositor maps list position to grid index. An
/// unreadable or empty directory yields an empty list, never an error.
pub fn list_tiles(dir: &Path) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "Cannot read tile directory");
            return Vec::new();
        }
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(e) => {
                debug!(dir = %dir.display(), error = %e, "Skipping unreadable entry");
                None
            }
        })
        .collect();

    paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    debug!(dir = %dir.display(), count = paths.len(), "Listed tiles");
    paths
}
