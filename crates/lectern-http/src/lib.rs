//! lectern-http - REST-backed Lecturize API client.

mod api;
mod client;
mod endpoints;

pub use api::HttpApi;
