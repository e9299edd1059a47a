//! Lecturize API trait.

use async_trait::async_trait;

use crate::call::CallRecord;
use crate::model::{ImageUpload, LecturePayload, RegisterRequest};
use crate::types::LectureId;
use crate::{AccessToken, Credentials};

/// Output from a login attempt.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The recorded login call.
    pub call: CallRecord,
    /// Token parsed from the response body; present only when the server
    /// answered 200 with an `accessToken` field.
    pub token: Option<AccessToken>,
}

/// A Lecturize API backend.
///
/// Implementations resolve every request to a [`CallRecord`]: HTTP error
/// statuses are recorded, not raised, and transport failures come back as
/// records with no status.
#[async_trait]
pub trait LecturizeApi: Send + Sync {
    /// Register a new account.
    async fn register(&self, request: &RegisterRequest) -> CallRecord;

    /// Authenticate with email and password.
    async fn login(&self, credentials: &Credentials) -> LoginOutcome;

    /// Fetch the account the token belongs to.
    async fn current_user(&self, token: &AccessToken) -> CallRecord;

    /// Create a lecture.
    async fn create_lecture(&self, token: &AccessToken, lecture: &LecturePayload) -> CallRecord;

    /// Fetch a lecture by id.
    async fn get_lecture(&self, token: &AccessToken, id: LectureId) -> CallRecord;

    /// Replace a lecture.
    async fn update_lecture(
        &self,
        token: &AccessToken,
        id: LectureId,
        lecture: &LecturePayload,
    ) -> CallRecord;

    /// Delete a lecture.
    async fn delete_lecture(&self, token: &AccessToken, id: LectureId) -> CallRecord;

    /// Fetch a lecture's image. Sent without authentication.
    async fn get_lecture_image(&self, id: LectureId) -> CallRecord;

    /// Upload a lecture's image as a multipart form.
    async fn upload_lecture_image(
        &self,
        token: &AccessToken,
        id: LectureId,
        image: &ImageUpload,
    ) -> CallRecord;

    /// Delete a lecture's image.
    async fn delete_lecture_image(&self, token: &AccessToken, id: LectureId) -> CallRecord;

    /// Probe the liveness endpoint.
    async fn ping(&self) -> CallRecord;
}
