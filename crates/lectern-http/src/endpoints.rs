//! REST endpoint definitions and request/response types.

use serde::{Deserialize, Serialize};

use lectern_core::types::LectureId;

// ============================================================================
// Endpoint Paths
// ============================================================================

/// POST: authenticate and obtain a bearer token.
pub const LOGIN: &str = "/api/auth/login";

/// POST: register an account.
pub const REGISTER: &str = "/api/auth/register";

/// GET: the account the current token belongs to.
pub const CURRENT_USER: &str = "/api/auth/user";

/// POST: create a lecture.
pub const LECTURES: &str = "/api/lectures";

/// GET: liveness probe.
pub const PING: &str = "/ip";

/// Path for a single lecture.
pub fn lecture(id: LectureId) -> String {
    format!("/api/lectures/{id}")
}

/// Path for a single lecture's image.
pub fn lecture_image(id: LectureId) -> String {
    format!("/api/lectures/{id}/image")
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for login.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Response from a successful login.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
}
