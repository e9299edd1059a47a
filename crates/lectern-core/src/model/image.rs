//! Image upload fixture.

use std::fmt;

/// Payload for `PUT /api/lectures/{id}/image`.
///
/// Sent as a multipart form with a file part named `file` (carrying
/// `file_name` and the bytes) and a `description` text field. The bytes are
/// loaded once at startup and reused across iterations.
#[derive(Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub description: String,
}

impl ImageUpload {
    /// Create an image upload payload.
    pub fn new(
        file_name: impl Into<String>,
        bytes: Vec<u8>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
            description: description.into(),
        }
    }
}

// Debug elides the raw bytes; a length is enough for diagnostics.
impl fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageUpload")
            .field("file_name", &self.file_name)
            .field("bytes", &format_args!("{} bytes", self.bytes.len()))
            .field("description", &self.description)
            .finish()
    }
}
