//! Generate command implementation
//!
//! Synthesizes a green noise buffer, optionally saves it to a WAV file, and
//! optionally plays it on the default output device.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use greennoise_core::wav::encode_to_path;
use greennoise_core::{
    generate, generate_seeded, GenerationParameters, NoiseBuffer, PlaybackController,
    PlaybackStatus,
};

/// Parameters for the generate command.
pub struct GenerateArgs {
    pub sample_rate: u32,
    pub duration: f64,
    pub low_freq: u32,
    pub high_freq: u32,
    pub output: Option<PathBuf>,
    pub seed: Option<u64>,
    pub play: bool,
}

/// Run the generate command
///
/// # Returns
/// Exit code: 0 on success
pub fn run(args: &GenerateArgs) -> Result<ExitCode> {
    println!("Generating green noise...");
    println!("  Sample Rate: {} Hz", args.sample_rate);
    println!("  Duration: {} s", args.duration);
    println!("  Low Freq: {} Hz", args.low_freq);
    println!("  High Freq: {} Hz", args.high_freq);

    let mut params = GenerationParameters::new(args.sample_rate, args.duration);
    params.low_freq = args.low_freq;
    params.high_freq = args.high_freq;

    let buffer = match args.seed {
        Some(seed) => generate_seeded(&params, seed)?,
        None => generate(&params)?,
    };

    if let Some(path) = &args.output {
        encode_to_path(&buffer, path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Saved to {}", path.display());
    } else if !args.play {
        println!("No output file specified. Use --output to save the noise.");
    }

    if args.play {
        play_buffer(&buffer)?;
    }

    Ok(ExitCode::SUCCESS)
}

/// Plays the buffer to completion, waiting for the worker's status report.
fn play_buffer(buffer: &NoiseBuffer) -> Result<()> {
    let controller = PlaybackController::new();
    let status = controller.status();

    controller.start(buffer.to_pcm_frames(), buffer.sample_rate());
    println!("Playing...");

    // Allow generous slack over the signal duration before giving up
    let timeout = Duration::from_secs_f64(buffer.duration_seconds() + 5.0);
    match status
        .recv_timeout(timeout)
        .context("playback worker did not report a status")?
    {
        PlaybackStatus::Finished => println!("Playback finished"),
        PlaybackStatus::Stopped => println!("Stopped"),
        PlaybackStatus::Failed(message) => bail!("playback failed: {message}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(output: Option<PathBuf>) -> GenerateArgs {
        GenerateArgs {
            sample_rate: 8000,
            duration: 0.25,
            low_freq: 20,
            high_freq: 800,
            output,
            seed: Some(42),
            play: false,
        }
    }

    #[test]
    fn test_run_writes_wav_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("noise.wav");

        run(&args(Some(path.clone()))).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
        // 8000 Hz * 0.25 s = 2000 samples of 16-bit mono
        assert_eq!(bytes.len(), 44 + 2000 * 2);
    }

    #[test]
    fn test_run_without_output_succeeds() {
        assert!(run(&args(None)).is_ok());
    }

    #[test]
    fn test_run_is_seed_reproducible() {
        let dir = tempfile::tempdir().unwrap();
        let path1 = dir.path().join("a.wav");
        let path2 = dir.path().join("b.wav");

        run(&args(Some(path1.clone()))).unwrap();
        run(&args(Some(path2.clone()))).unwrap();

        assert_eq!(
            std::fs::read(&path1).unwrap(),
            std::fs::read(&path2).unwrap()
        );
    }

    #[test]
    fn test_run_rejects_invalid_duration() {
        let mut invalid = args(None);
        invalid.duration = 0.0;
        assert!(run(&invalid).is_err());
    }

    #[test]
    fn test_run_reports_unwritable_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("noise.wav");
        let err = run(&args(Some(path))).unwrap_err();
        assert!(err.to_string().contains("failed to write"));
    }
}
