//! Library facade for the `file_flags_survey` demo so integration tests can
//! reuse its configuration types.

pub mod cli;
pub mod config;
pub mod error;
pub mod report;
