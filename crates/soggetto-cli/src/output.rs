//! Output file naming.

use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};

/// Directory, relative to the working directory, that receives WAV files.
pub const AUDIO_DIR: &str = "audio";

/// File name prefix for generated melodies.
pub const FILE_PREFIX: &str = "soggetto_cavato";

/// Builds `<dir>/soggetto_cavato_<YYYYMMDD-HHMMSS>.wav` for `timestamp`.
pub fn output_path<Tz: TimeZone>(dir: &Path, timestamp: &DateTime<Tz>) -> PathBuf
where
    Tz::Offset: std::fmt::Display,
{
    dir.join(format!(
        "{}_{}.wav",
        FILE_PREFIX,
        timestamp.format("%Y%m%d-%H%M%S")
    ))
}
