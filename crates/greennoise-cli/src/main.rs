//! Green Noise CLI - Command-line green noise generator
//!
//! Generates 1/f² noise, writes it to a WAV file, and optionally plays it
//! on the default audio output device.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use greennoise_cli::commands::generate::{self, GenerateArgs};

/// Green Noise Generator
#[derive(Parser)]
#[command(name = "greennoise")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Run in command line mode (accepted for compatibility; this binary is always command line)
    #[arg(long)]
    no_gui: bool,

    /// Sample rate in Hz
    #[arg(long, default_value_t = 44100)]
    sample_rate: u32,

    /// Duration in seconds
    #[arg(long, default_value_t = 5.0)]
    duration: f64,

    /// Low frequency in Hz (reserved, not applied to synthesis)
    #[arg(long, default_value_t = 20)]
    low_freq: u32,

    /// High frequency in Hz (reserved, not applied to synthesis)
    #[arg(long, default_value_t = 800)]
    high_freq: u32,

    /// Output WAV file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Seed for reproducible output (default: fresh entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Play the generated noise on the default output device
    #[arg(long)]
    play: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Retained from the former GUI launcher; generation is always batch now
    let _ = cli.no_gui;

    let args = GenerateArgs {
        sample_rate: cli.sample_rate,
        duration: cli.duration,
        low_freq: cli.low_freq,
        high_freq: cli.high_freq,
        output: cli.output,
        seed: cli.seed,
        play: cli.play,
    };

    match generate::run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
