//! Test helpers shared across the workspace.
//!
//! - [`workdir`] switches the process into a scratch directory and writes
//!   configuration files there.
//! - [`flags`] builds throwaway `clap` commands that declare one long option
//!   per field name.

pub mod flags;
pub mod workdir;
