//! REST-backed Lecturize API implementation.

use async_trait::async_trait;

use lectern_core::model::{ImageUpload, LecturePayload, RegisterRequest};
use lectern_core::traits::{LecturizeApi, LoginOutcome};
use lectern_core::types::{BaseUrl, LectureId};
use lectern_core::{AccessToken, CallRecord, Credentials};

use crate::client::RestClient;
use crate::endpoints::{self, LoginRequest};

/// A network-backed Lecturize API over REST.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: RestClient,
}

impl HttpApi {
    /// Create a new API client for the given target.
    pub fn new(base: BaseUrl) -> Self {
        Self {
            client: RestClient::new(base),
        }
    }

    /// Returns the target base URL.
    pub fn base(&self) -> &BaseUrl {
        self.client.base()
    }
}

#[async_trait]
impl LecturizeApi for HttpApi {
    async fn register(&self, request: &RegisterRequest) -> CallRecord {
        self.client.post_json(endpoints::REGISTER, request).await
    }

    async fn login(&self, credentials: &Credentials) -> LoginOutcome {
        let request = LoginRequest {
            email: credentials.email(),
            password: credentials.password(),
        };
        let (call, token) = self
            .client
            .post_json_for_token(endpoints::LOGIN, &request)
            .await;
        LoginOutcome { call, token }
    }

    async fn current_user(&self, token: &AccessToken) -> CallRecord {
        self.client.get_authed(endpoints::CURRENT_USER, token).await
    }

    async fn create_lecture(&self, token: &AccessToken, lecture: &LecturePayload) -> CallRecord {
        self.client
            .post_json_authed(endpoints::LECTURES, lecture, token)
            .await
    }

    async fn get_lecture(&self, token: &AccessToken, id: LectureId) -> CallRecord {
        self.client.get_authed(&endpoints::lecture(id), token).await
    }

    async fn update_lecture(
        &self,
        token: &AccessToken,
        id: LectureId,
        lecture: &LecturePayload,
    ) -> CallRecord {
        self.client
            .put_json_authed(&endpoints::lecture(id), lecture, token)
            .await
    }

    async fn delete_lecture(&self, token: &AccessToken, id: LectureId) -> CallRecord {
        self.client
            .delete_authed(&endpoints::lecture(id), token)
            .await
    }

    async fn get_lecture_image(&self, id: LectureId) -> CallRecord {
        self.client
            .get_accept_json(&endpoints::lecture_image(id))
            .await
    }

    async fn upload_lecture_image(
        &self,
        token: &AccessToken,
        id: LectureId,
        image: &ImageUpload,
    ) -> CallRecord {
        self.client
            .put_multipart_authed(&endpoints::lecture_image(id), image, token)
            .await
    }

    async fn delete_lecture_image(&self, token: &AccessToken, id: LectureId) -> CallRecord {
        self.client
            .delete_authed(&endpoints::lecture_image(id), token)
            .await
    }

    async fn ping(&self) -> CallRecord {
        self.client.get(endpoints::PING).await
    }
}
