//! Core traits for API backends and call observation.

mod api;
mod logger;

pub use api::{LecturizeApi, LoginOutcome};
pub use logger::CallLogger;
