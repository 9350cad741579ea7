//! CLI commands.

pub mod encode;
