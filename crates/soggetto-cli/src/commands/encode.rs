//! Encode command implementation
//!
//! Reads one line of text, carves its motif, writes the melody to a WAV file
//! and prints the solfège and note lines.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{DateTime, Local, TimeZone};
use colored::Colorize;
use soggetto_backend_audio::generate_to_file;
use soggetto_spec::{encode, Motif, SynthConfig};
use tracing::{debug, error, warn};

use crate::input::read_text;
use crate::output::output_path;

/// What a single encode run produced.
#[derive(Debug)]
pub struct EncodeOutcome {
    /// The carved motif.
    pub motif: Motif,
    /// Path of the written WAV file.
    pub path: PathBuf,
    /// Number of samples written.
    pub num_samples: usize,
}

/// Run the encode command
///
/// # Arguments
/// * `input` - Source of the text line (stdin in the binary)
/// * `stdout` - Receives the two report lines
/// * `out_dir` - Existing directory for the WAV file
/// * `config` - Synthesis parameters
///
/// # Returns
/// Exit code 0 on success; I/O failures are returned as errors
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    stdout: &mut W,
    out_dir: &Path,
    config: &SynthConfig,
) -> Result<ExitCode> {
    let text = read_text(input, &mut io::stderr()).context("Failed to read input text")?;

    let outcome = encode_to_dir(&text, out_dir, config, &Local::now())?;

    stdout
        .write_all(format_report(&outcome.motif).as_bytes())
        .context("Failed to write report")?;
    stdout.flush()?;

    eprintln!(
        "{} {} ({} notes)",
        "Wrote".green().bold(),
        outcome.path.display(),
        outcome.motif.len()
    );

    Ok(ExitCode::SUCCESS)
}

/// Encodes `text` and writes its melody under `out_dir`.
///
/// The file name is derived from `timestamp`. A text without vowels still
/// produces a valid, zero-length WAV file.
pub fn encode_to_dir<Tz: TimeZone>(
    text: &str,
    out_dir: &Path,
    config: &SynthConfig,
    timestamp: &DateTime<Tz>,
) -> Result<EncodeOutcome>
where
    Tz::Offset: std::fmt::Display,
{
    let motif = encode(text);
    debug!(chars = text.chars().count(), tones = motif.len(), "encoded text");
    if motif.is_empty() {
        warn!("text has no vowels, writing a silent file");
    }

    let path = output_path(out_dir, timestamp);
    let buffer = generate_to_file(&motif, config, &path)
        .map_err(|e| {
            error!(path = %path.display(), error = %e, "failed to write audio file");
            e
        })
        .with_context(|| format!("Failed to write audio file: {}", path.display()))?;

    Ok(EncodeOutcome {
        motif,
        path,
        num_samples: buffer.len(),
    })
}

/// Formats the two console lines: syllables, then note letters.
pub fn format_report(motif: &Motif) -> String {
    format!("{}\n{}\n", motif.solfege_line(), motif.notes_line())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::capture::CapturedLog;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn fast_config() -> SynthConfig {
        SynthConfig {
            sample_rate: 8000,
            tone_duration: 0.125,
            ..Default::default()
        }
    }

    #[test]
    fn test_format_report_josquin() {
        assert_eq!(
            format_report(&encode("Josquin des Prez")),
            "sol ut mi re re\nC G E D D\n"
        );
    }

    #[test]
    fn test_format_report_empty() {
        assert_eq!(format_report(&encode("")), "\n\n");
        assert_eq!(format_report(&encode("xyz")), "\n\n");
    }

    #[test]
    fn test_encode_to_dir_names_file_from_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let ts = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();

        let outcome = encode_to_dir("aeiou", dir.path(), &fast_config(), &ts).unwrap();

        assert_eq!(
            outcome.path,
            dir.path().join("soggetto_cavato_20240102-030405.wav")
        );
        assert_eq!(outcome.num_samples, 5 * 1000);
        assert!(outcome.path.exists());
    }

    #[test]
    fn test_encode_to_dir_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("audio");
        let ts = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();

        let err = encode_to_dir("aeiou", &missing, &fast_config(), &ts).unwrap_err();
        assert!(err.to_string().contains("Failed to write audio file"));
    }

    #[test]
    fn test_vowelless_text_logs_warning() {
        let dir = tempfile::tempdir().unwrap();
        let ts = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let log = CapturedLog::default();

        let outcome = tracing::subscriber::with_default(log.subscriber(), || {
            encode_to_dir("xyz", dir.path(), &fast_config(), &ts)
        })
        .unwrap();

        assert_eq!(outcome.num_samples, 0);
        assert!(log.contents().contains("text has no vowels"), "log: {}", log.contents());
    }

    #[test]
    fn test_write_failure_logs_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("audio");
        let ts = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let log = CapturedLog::default();

        let result = tracing::subscriber::with_default(log.subscriber(), || {
            encode_to_dir("aeiou", &missing, &fast_config(), &ts)
        });

        assert!(result.is_err());
        let contents = log.contents();
        assert!(contents.contains("ERROR"), "log: {}", contents);
        assert!(contents.contains("failed to write audio file"), "log: {}", contents);
        assert!(!contents.contains("text has no vowels"), "log: {}", contents);
    }

    #[test]
    fn test_run_prints_two_lines() {
        let dir = tempfile::tempdir().unwrap();
        let mut input = Cursor::new("Josquin des Prez\n");
        let mut stdout = Vec::new();

        run(&mut input, &mut stdout, dir.path(), &fast_config()).unwrap();

        assert_eq!(String::from_utf8(stdout).unwrap(), "sol ut mi re re\nC G E D D\n");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
