//! Per-request observations and their console rendering.

use std::fmt;
use std::time::Duration;

use colored::Colorize;

use crate::error::TransportError;

/// HTTP method of a scenario request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of a single HTTP call.
///
/// Error statuses are data here, not errors: a 404 or 500 is recorded and
/// rendered like any other response. A call that never produced a response
/// (connection refused, timeout) has no status and renders as status `0`,
/// with the classified [`TransportError`] kept for diagnostics.
#[derive(Debug, Clone)]
pub struct CallRecord {
    pub method: Method,
    pub url: String,
    /// `None` when the request failed before a response arrived.
    pub status: Option<u16>,
    pub duration: Duration,
    pub error: Option<TransportError>,
}

impl CallRecord {
    /// Record a call that received a response.
    pub fn completed(method: Method, url: impl Into<String>, status: u16, duration: Duration) -> Self {
        Self {
            method,
            url: url.into(),
            status: Some(status),
            duration,
            error: None,
        }
    }

    /// Record a call that failed in transport, before any response.
    pub fn failed(
        method: Method,
        url: impl Into<String>,
        error: TransportError,
        duration: Duration,
    ) -> Self {
        Self {
            method,
            url: url.into(),
            status: None,
            duration,
            error: Some(error),
        }
    }

    /// Status code as reported, with transport failures collapsed to `0`.
    pub fn status_code(&self) -> u16 {
        self.status.unwrap_or(0)
    }

    /// Whether the call checks out: any 2xx response passes.
    pub fn passed(&self) -> bool {
        matches!(self.status, Some(code) if (200..300).contains(&code))
    }

    /// One colored console line for this call:
    /// `GET http://host/path: 200 | Duration: 5ms`, with the method colored
    /// by verb (GET blue, POST cyan, PUT yellow, DELETE magenta) and the
    /// status green on success, red otherwise.
    pub fn console_line(&self) -> String {
        let method = match self.method {
            Method::Get => self.method.as_str().blue(),
            Method::Post => self.method.as_str().cyan(),
            Method::Put => self.method.as_str().yellow(),
            Method::Delete => self.method.as_str().magenta(),
        };
        let status = self.status_code().to_string();
        let status = if self.passed() {
            status.green()
        } else {
            status.red()
        };
        format!(
            "{} {}: {} | Duration: {}ms",
            method,
            self.url,
            status,
            self.duration.as_millis()
        )
    }
}
