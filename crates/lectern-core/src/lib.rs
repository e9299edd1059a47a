//! lectern-core - Core types and scenario model for the lectern driver.

pub mod call;
pub mod credentials;
pub mod error;
pub mod model;
pub mod report;
pub mod scenario;
pub mod tokens;
pub mod traits;
pub mod types;

pub use call::{CallRecord, Method};
pub use credentials::Credentials;
pub use error::Error;
pub use model::{ImageUpload, LecturePayload, RegisterRequest, Tag};
pub use report::{GroupReport, GroupTotals, IterationReport, RunSummary};
pub use scenario::{Fixtures, Scenario, Session};
pub use tokens::AccessToken;
pub use traits::{CallLogger, LecturizeApi, LoginOutcome};
pub use types::{BaseUrl, LectureId};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
