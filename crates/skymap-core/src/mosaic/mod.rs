mod compositor;
pub mod layout;
mod store;
mod types;

pub use compositor::{
    build_composite, build_composite_reported, build_composite_with, compose_tiles,
    MosaicOptions,
};
pub use layout::GridLayout;
pub use store::CompositeStore;
pub use types::{Composite, CompositeReport, MosaicStage, ProgressReporter};
