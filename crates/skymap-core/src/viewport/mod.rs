mod controller;
mod frame;
mod interaction;
mod sample;

pub use controller::{ViewportController, ViewWindow};
pub use frame::{DisplayFrame, PresentationBuffer};
pub use interaction::{DragState, Interaction, PointerEvent};
