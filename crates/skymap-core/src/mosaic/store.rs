use std::path::Path;

use tracing::{info, warn};

use crate::error::Result;

use super::compositor::{build_composite_reported, MosaicOptions};
use super::types::{Composite, CompositeReport, NoOpReporter, ProgressReporter};

/// Owns the current composite.
///
/// A rebuild swaps the composite only after it succeeded, so a failed rebuild
/// leaves the previous one intact and renderable.
#[derive(Debug, Default)]
pub struct CompositeStore {
    current: Option<Composite>,
    generation: u64,
}

impl CompositeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Composite> {
        self.current.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    /// Incremented on every successful replacement.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn replace(&mut self, composite: Composite) -> &Composite {
        self.generation += 1;
        self.current.insert(composite)
    }

    pub fn rebuild(&mut self, dir: &Path, options: &MosaicOptions) -> Result<CompositeReport> {
        self.rebuild_reported(dir, options, &NoOpReporter)
    }

    pub fn rebuild_reported(
        &mut self,
        dir: &Path,
        options: &MosaicOptions,
        reporter: &dyn ProgressReporter,
    ) -> Result<CompositeReport> {
        match build_composite_reported(dir, options, reporter) {
            Ok((composite, report)) => {
                self.replace(composite);
                info!(generation = self.generation, "Composite replaced");
                Ok(report)
            }
            Err(e) => {
                warn!(
                    error = %e,
                    retained = self.current.is_some(),
                    "Rebuild failed, previous composite retained"
                );
                Err(e)
            }
        }
    }
}
