//! Error types for the lectern library.
//!
//! This module provides a unified error type with explicit variants for
//! authentication and input validation failures. Transport problems are a
//! special case: during a scenario run they are *recorded* on the call
//! (printed as status `0`) rather than propagated, so [`TransportError`]
//! appears inside call records and inside [`AuthError`] but never as a
//! standalone top-level failure.

use thiserror::Error;

/// The unified error type for lectern operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Authentication errors (rejected login, unusable login response).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Input validation errors (invalid base URL).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Authentication failures.
///
/// Authentication is the one operation whose failure is a hard error: a
/// virtual user that cannot log in aborts before any group runs.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The login endpoint answered with something other than HTTP 200.
    #[error("login rejected with HTTP {status}")]
    Rejected { status: u16 },

    /// The login endpoint answered 200 but the body held no access token.
    #[error("login response did not contain an access token")]
    MissingToken,

    /// The login request never completed.
    #[error("login request failed: {0}")]
    Transport(TransportError),
}

/// Transport-level failures, classified from the HTTP client's error.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// Network connection failed (refused, reset, unreachable).
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Any other HTTP transport error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid target base URL.
    #[error("invalid base URL '{value}': {reason}")]
    BaseUrl { value: String, reason: String },
}
