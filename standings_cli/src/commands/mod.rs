//! CLI subcommand implementations.

pub mod leagues;
pub mod show;
pub mod sync;
