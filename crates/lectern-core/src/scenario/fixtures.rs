//! Built-in scenario data.

use chrono::{DateTime, FixedOffset};

use crate::model::{ImageUpload, LecturePayload, RegisterRequest, Tag};
use crate::types::LectureId;
use crate::Credentials;

/// Smallest JPEG skeleton (SOI, JFIF APP0, EOI). Stands in for a real image
/// when no file is supplied on the command line.
pub const PLACEHOLDER_JPEG: &[u8] = &[
    0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0x00, 0x01, 0x01, 0x00, 0x00,
    0x01, 0x00, 0x01, 0x00, 0x00, 0xFF, 0xD9,
];

/// Named inputs for one scenario run.
///
/// `Default` is the canonical data set: the admin account, a registration
/// for a second account that is logged in once and otherwise unused, one
/// lecture payload for create plus a variant for update, the two lecture
/// ids the target is assumed to already hold, and the built-in image.
#[derive(Debug, Clone)]
pub struct Fixtures {
    /// Account used for the bootstrap login.
    pub admin: Credentials,
    pub registration: RegisterRequest,
    /// The account `registration` creates; its token is discarded.
    pub member: Credentials,
    pub lecture: LecturePayload,
    pub lecture_update: LecturePayload,
    /// Targeted by update, delete, image fetch and image delete.
    pub first_lecture: LectureId,
    /// Targeted by get and image upload.
    pub second_lecture: LectureId,
    pub image: ImageUpload,
}

impl Default for Fixtures {
    fn default() -> Self {
        let lecture = LecturePayload {
            title: "Title".to_string(),
            lecturer: "Lecturer".to_string(),
            description: "Description".to_string(),
            starts_at: fixture_time("2024-01-01T03:00:00-03:00"),
            ends_at: fixture_time("2024-01-01T06:00:00-03:00"),
            kind: "Type".to_string(),
            url: "https://abc.com".to_string(),
            tags: vec![Tag::new(1), Tag::new(3)],
        };
        let lecture_update = LecturePayload {
            tags: vec![Tag::new(1)],
            ..lecture.clone()
        };

        Self {
            admin: Credentials::new("admin@admin.com", "1234"),
            registration: RegisterRequest::new("user@user.com", "user", "1234"),
            member: Credentials::new("user@user.com", "1234"),
            lecture,
            lecture_update,
            first_lecture: LectureId::new(1),
            second_lecture: LectureId::new(2),
            image: ImageUpload::new(
                "LecturizeIt.jpeg",
                PLACEHOLDER_JPEG.to_vec(),
                "Description",
            ),
        }
    }
}

fn fixture_time(value: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(value).expect("fixture timestamps are valid RFC 3339")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_canonical_data_set() {
        let fixtures = Fixtures::default();
        assert_eq!(fixtures.admin.email(), "admin@admin.com");
        assert_eq!(fixtures.registration.username, "user");
        assert_eq!(fixtures.member.email(), "user@user.com");
        assert_eq!(fixtures.lecture.tags.len(), 2);
        assert_eq!(fixtures.lecture_update.tags.len(), 1);
        assert_eq!(fixtures.lecture.title, fixtures.lecture_update.title);
        assert_eq!(fixtures.first_lecture.value(), 1);
        assert_eq!(fixtures.second_lecture.value(), 2);
        assert_eq!(fixtures.image.file_name, "LecturizeIt.jpeg");
        assert_eq!(fixtures.image.description, "Description");
    }

    #[test]
    fn placeholder_image_carries_jpeg_magic() {
        assert_eq!(&PLACEHOLDER_JPEG[..2], &[0xFF, 0xD8]);
        assert_eq!(&PLACEHOLDER_JPEG[PLACEHOLDER_JPEG.len() - 2..], &[0xFF, 0xD9]);
    }
}
