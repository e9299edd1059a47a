//! Wire payloads for the target API.

mod account;
mod image;
mod lecture;

pub use account::RegisterRequest;
pub use image::ImageUpload;
pub use lecture::{LecturePayload, Tag};
