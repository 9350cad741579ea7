//! Soggetto CLI library.
//!
//! This crate provides the interactive encode command behind the `soggetto`
//! binary: prompt handling, console reporting and output file naming.

pub mod commands;
pub mod input;
pub mod logging;
pub mod output;
