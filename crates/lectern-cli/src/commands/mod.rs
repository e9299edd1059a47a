//! Command implementations.

pub mod ping;
pub mod run;
