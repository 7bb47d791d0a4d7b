mod request;
mod runner;

pub use request::FetchRequest;
pub use runner::{run_fetch, spawn_fetch, FetchOutcome};
