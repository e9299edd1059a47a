//! Core target types.
//!
//! These types enforce their invariants at construction time,
//! ensuring invalid states are unrepresentable.

mod base_url;
mod lecture_id;

pub use base_url::BaseUrl;
pub use lecture_id::LectureId;
