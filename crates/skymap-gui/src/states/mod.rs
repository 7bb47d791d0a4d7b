mod form;
mod ui;
mod viewport;

pub use form::FetchFormState;
pub use ui::{Activity, UIState};
pub use viewport::ViewportState;
