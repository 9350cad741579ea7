//! Soggetto CLI - carve a melody out of the vowels of a text
//!
//! Prompts for one line of text, prints its solfège and note sequences and
//! writes the melody to `audio/` as a WAV file.

use std::io;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use soggetto_cli::{commands, logging, output};
use soggetto_spec::SynthConfig;

/// Soggetto - soggetto cavato dalle vocali
#[derive(Parser)]
#[command(name = "soggetto")]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();
    logging::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = commands::encode::run(
        &mut stdin.lock(),
        &mut stdout.lock(),
        Path::new(output::AUDIO_DIR),
        &SynthConfig::default(),
    );

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
