//! REST HTTP client implementation.

use std::time::Instant;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use tracing::{debug, instrument, warn};

use lectern_core::error::TransportError;
use lectern_core::model::ImageUpload;
use lectern_core::types::BaseUrl;
use lectern_core::{AccessToken, CallRecord, Method};

use crate::endpoints::TokenResponse;

/// HTTP client for the target REST API.
///
/// Every request resolves to a [`CallRecord`]; response statuses are
/// recorded as-is and transport failures become records without a status.
/// Durations cover the full exchange, body drain included.
#[derive(Debug, Clone)]
pub struct RestClient {
    client: reqwest::Client,
    base: BaseUrl,
}

impl RestClient {
    /// Create a new client for the given target.
    pub fn new(base: BaseUrl) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("lectern/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self { client, base }
    }

    /// Returns the base URL this client is configured for.
    pub fn base(&self) -> &BaseUrl {
        &self.base
    }

    /// Make an unauthenticated GET request with no extra headers.
    #[instrument(skip(self), fields(base = %self.base))]
    pub async fn get(&self, path: &str) -> CallRecord {
        let url = self.base.endpoint(path);
        debug!(%url, "GET");

        let request = self.client.get(&url);
        self.execute(Method::Get, url, request).await.0
    }

    /// Make an unauthenticated GET request accepting JSON.
    #[instrument(skip(self), fields(base = %self.base))]
    pub async fn get_accept_json(&self, path: &str) -> CallRecord {
        let url = self.base.endpoint(path);
        debug!(%url, "GET (accept json)");

        let request = self
            .client
            .get(&url)
            .header(ACCEPT, HeaderValue::from_static("application/json"));
        self.execute(Method::Get, url, request).await.0
    }

    /// Make an authenticated GET request.
    #[instrument(skip(self, token), fields(base = %self.base))]
    pub async fn get_authed(&self, path: &str, token: &AccessToken) -> CallRecord {
        let url = self.base.endpoint(path);
        debug!(%url, "authenticated GET");

        let request = self.client.get(&url).headers(self.auth_headers(token));
        self.execute(Method::Get, url, request).await.0
    }

    /// Make an unauthenticated POST request with a JSON body.
    #[instrument(skip(self, body), fields(base = %self.base))]
    pub async fn post_json<B>(&self, path: &str, body: &B) -> CallRecord
    where
        B: Serialize + ?Sized,
    {
        let url = self.base.endpoint(path);
        debug!(%url, "POST json");

        let request = self.client.post(&url).json(body);
        self.execute(Method::Post, url, request).await.0
    }

    /// Make an unauthenticated POST request with a JSON body and parse a
    /// bearer token out of a 200 response.
    #[instrument(skip(self, body), fields(base = %self.base))]
    pub async fn post_json_for_token<B>(
        &self,
        path: &str,
        body: &B,
    ) -> (CallRecord, Option<AccessToken>)
    where
        B: Serialize + ?Sized,
    {
        let url = self.base.endpoint(path);
        debug!(%url, "POST json (token request)");

        let request = self.client.post(&url).json(body);
        let (call, body) = self.execute(Method::Post, url, request).await;

        let token = match (call.status, body) {
            (Some(200), Some(bytes)) => serde_json::from_slice::<TokenResponse>(&bytes)
                .ok()
                .map(|response| AccessToken::new(response.access_token)),
            _ => None,
        };
        (call, token)
    }

    /// Make an authenticated POST request with a JSON body.
    #[instrument(skip(self, body, token), fields(base = %self.base))]
    pub async fn post_json_authed<B>(&self, path: &str, body: &B, token: &AccessToken) -> CallRecord
    where
        B: Serialize + ?Sized,
    {
        let url = self.base.endpoint(path);
        debug!(%url, "authenticated POST json");

        let request = self
            .client
            .post(&url)
            .headers(self.auth_headers(token))
            .json(body);
        self.execute(Method::Post, url, request).await.0
    }

    /// Make an authenticated PUT request with a JSON body.
    #[instrument(skip(self, body, token), fields(base = %self.base))]
    pub async fn put_json_authed<B>(&self, path: &str, body: &B, token: &AccessToken) -> CallRecord
    where
        B: Serialize + ?Sized,
    {
        let url = self.base.endpoint(path);
        debug!(%url, "authenticated PUT json");

        let request = self
            .client
            .put(&url)
            .headers(self.auth_headers(token))
            .json(body);
        self.execute(Method::Put, url, request).await.0
    }

    /// Make an authenticated PUT request with a multipart form carrying a
    /// `file` part and a `description` field.
    #[instrument(skip(self, image, token), fields(base = %self.base))]
    pub async fn put_multipart_authed(
        &self,
        path: &str,
        image: &ImageUpload,
        token: &AccessToken,
    ) -> CallRecord {
        let url = self.base.endpoint(path);
        debug!(%url, file = %image.file_name, "authenticated PUT multipart");

        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str("image/jpeg")
            .expect("static MIME type is valid");
        let form = Form::new()
            .part("file", part)
            .text("description", image.description.clone());

        // No explicit Content-Type: reqwest supplies the boundary header.
        let auth = format!("Bearer {}", token.as_str());
        let request = self
            .client
            .put(&url)
            .header(AUTHORIZATION, auth)
            .multipart(form);
        self.execute(Method::Put, url, request).await.0
    }

    /// Make an authenticated DELETE request.
    #[instrument(skip(self, token), fields(base = %self.base))]
    pub async fn delete_authed(&self, path: &str, token: &AccessToken) -> CallRecord {
        let url = self.base.endpoint(path);
        debug!(%url, "authenticated DELETE");

        let request = self.client.delete(&url).headers(self.auth_headers(token));
        self.execute(Method::Delete, url, request).await.0
    }

    /// Create authorization headers for authenticated requests.
    fn auth_headers(&self, token: &AccessToken) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let auth_value = format!("Bearer {}", token.as_str());
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth_value).expect("invalid token characters"),
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    /// Send the request and observe it: status and timing always, the body
    /// when one arrived.
    async fn execute(
        &self,
        method: Method,
        url: String,
        request: reqwest::RequestBuilder,
    ) -> (CallRecord, Option<Vec<u8>>) {
        let started = Instant::now();
        match request.send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                // Drain the body so the duration covers the full exchange.
                let body = response.bytes().await;
                let duration = started.elapsed();
                match body {
                    Ok(bytes) => (
                        CallRecord::completed(method, url, status, duration),
                        Some(bytes.to_vec()),
                    ),
                    Err(err) => {
                        warn!(%url, error = %err, "response body read failed");
                        (
                            CallRecord::failed(method, url, classify_transport(&err), duration),
                            None,
                        )
                    }
                }
            }
            Err(err) => {
                let duration = started.elapsed();
                warn!(%url, error = %err, "request failed");
                (
                    CallRecord::failed(method, url, classify_transport(&err), duration),
                    None,
                )
            }
        }
    }
}

/// Classify a reqwest error into the transport taxonomy.
fn classify_transport(err: &reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    }
}
