//! Lecture payload types.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// A tag reference attached to a lecture.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct Tag {
    pub id: u64,
}

impl Tag {
    pub const fn new(id: u64) -> Self {
        Self { id }
    }
}

/// Request body for `POST /api/lectures` and `PUT /api/lectures/{id}`.
///
/// Serialized in the camelCase shape the target API expects; the lecture
/// type field is `kind` here because `type` is reserved in Rust.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LecturePayload {
    pub title: String,
    pub lecturer: String,
    pub description: String,
    pub starts_at: DateTime<FixedOffset>,
    pub ends_at: DateTime<FixedOffset>,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub tags: Vec<Tag>,
}
