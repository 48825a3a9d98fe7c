//! Tests for the WAV writer module.

use pretty_assertions::assert_eq;

use crate::generator::generate_seeded;
use crate::params::GenerationParameters;

use super::format::WavFormat;
use super::result::{encode_to_path, encode_to_sink, WavResult};
use super::writer::{quantize, samples_to_pcm16, write_wav, write_wav_to_vec};

// =========================================================================
// WavFormat tests
// =========================================================================

#[test]
fn test_wav_format_mono() {
    let format = WavFormat::mono(44100);
    assert_eq!(format.channels, 1);
    assert_eq!(format.sample_rate, 44100);
    assert_eq!(format.bits_per_sample, 16);
}

#[test]
fn test_byte_calculations() {
    let format = WavFormat::mono(44100);
    assert_eq!(format.bytes_per_sample(), 2);
    assert_eq!(format.block_align(), 2);
    // 44100 samples/sec * 1 channel * 2 bytes/sample = 88200 bytes/sec
    assert_eq!(format.byte_rate(), 88200);

    assert_eq!(WavFormat::mono(8000).byte_rate(), 16000);
}

// =========================================================================
// Quantization tests
// =========================================================================

#[test]
fn test_quantize_reference_points() {
    let frames = quantize(&[0.0, 1.0, -1.0, 0.5, -0.5]);
    assert_eq!(frames, vec![0, 32767, -32767, 16384, -16384]);
}

#[test]
fn test_quantize_rounding() {
    // 0.0001 * 32767 = 3.2767 -> rounds to 3
    let frames = quantize(&[0.0001, -0.0001, 0.9999, -0.9999]);
    assert_eq!(frames, vec![3, -3, 32764, -32764]);
}

#[test]
fn test_quantize_clamps_out_of_range() {
    let frames = quantize(&[1.5, -1.5, f64::INFINITY, f64::NEG_INFINITY]);
    assert_eq!(frames, vec![32767, -32767, 32767, -32767]);
}

#[test]
fn test_samples_to_pcm16_little_endian() {
    let pcm = samples_to_pcm16(&[0.0, 0.5, -0.5]);
    assert_eq!(pcm.len(), 6);
    assert_eq!(i16::from_le_bytes([pcm[0], pcm[1]]), 0);
    assert_eq!(i16::from_le_bytes([pcm[2], pcm[3]]), 16384);
    assert_eq!(i16::from_le_bytes([pcm[4], pcm[5]]), -16384);
}

// =========================================================================
// WAV header correctness tests
// =========================================================================

#[test]
fn test_wav_header_riff_magic() {
    let wav = write_wav_to_vec(&WavFormat::mono(44100), &samples_to_pcm16(&[0.0; 10]));
    assert_eq!(&wav[0..4], b"RIFF");
    assert_eq!(&wav[8..12], b"WAVE");
}

#[test]
fn test_wav_header_fmt_chunk() {
    let wav = write_wav_to_vec(&WavFormat::mono(44100), &samples_to_pcm16(&[0.0; 10]));

    assert_eq!(&wav[12..16], b"fmt ");

    // fmt chunk size (16 for PCM)
    assert_eq!(u32::from_le_bytes([wav[16], wav[17], wav[18], wav[19]]), 16);
    // Audio format (1 = PCM)
    assert_eq!(u16::from_le_bytes([wav[20], wav[21]]), 1);
    // Channels
    assert_eq!(u16::from_le_bytes([wav[22], wav[23]]), 1);
    // Sample rate
    assert_eq!(
        u32::from_le_bytes([wav[24], wav[25], wav[26], wav[27]]),
        44100
    );
    // Byte rate
    assert_eq!(
        u32::from_le_bytes([wav[28], wav[29], wav[30], wav[31]]),
        88200
    );
    // Block align
    assert_eq!(u16::from_le_bytes([wav[32], wav[33]]), 2);
    // Bits per sample
    assert_eq!(u16::from_le_bytes([wav[34], wav[35]]), 16);
}

#[test]
fn test_wav_header_data_chunk_and_file_size() {
    let wav = write_wav_to_vec(&WavFormat::mono(44100), &samples_to_pcm16(&[0.0; 10]));

    assert_eq!(&wav[36..40], b"data");
    // 10 samples * 2 bytes
    assert_eq!(u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]), 20);
    // File size field = total size - 8
    assert_eq!(
        u32::from_le_bytes([wav[4], wav[5], wav[6], wav[7]]),
        wav.len() as u32 - 8
    );
    assert_eq!(wav.len(), 64);
}

#[test]
fn test_three_sample_scenario() {
    // [0.0, 1.0, -1.0] at 8000 Hz: 44-byte header + 3 frames * 2 bytes,
    // data bytes 0x0000, 0x7FFF, 0x8001
    let pcm = samples_to_pcm16(&[0.0, 1.0, -1.0]);
    let wav = write_wav_to_vec(&WavFormat::mono(8000), &pcm);

    assert_eq!(wav.len(), 44 + 6);
    assert_eq!(
        u32::from_le_bytes([wav[24], wav[25], wav[26], wav[27]]),
        8000
    );
    assert_eq!(&wav[44..50], &[0x00, 0x00, 0xFF, 0x7F, 0x01, 0x80]);
}

#[test]
fn test_empty_pcm_still_produces_valid_header() {
    let wav = write_wav_to_vec(&WavFormat::mono(44100), &[]);
    assert_eq!(&wav[0..4], b"RIFF");
    assert_eq!(u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]), 0);
    assert_eq!(wav.len(), 44);
}

// =========================================================================
// Determinism tests
// =========================================================================

#[test]
fn test_encoding_is_byte_identical() {
    let params = GenerationParameters::new(8000, 0.1);
    let buffer = generate_seeded(&params, 42).unwrap();

    let result1 = WavResult::from_buffer(&buffer);
    let result2 = WavResult::from_buffer(&buffer);

    assert_eq!(result1.wav_data, result2.wav_data);
    assert_eq!(result1.pcm_hash, result2.pcm_hash);
}

#[test]
fn test_encode_to_sink_matches_in_memory() {
    let params = GenerationParameters::new(8000, 0.1);
    let buffer = generate_seeded(&params, 42).unwrap();

    let mut streamed = Vec::new();
    encode_to_sink(&buffer, &mut streamed).unwrap();

    assert_eq!(streamed, WavResult::from_buffer(&buffer).wav_data);
}

#[test]
fn test_write_wav_to_vec_matches_write_wav() {
    let format = WavFormat::mono(8000);
    let pcm = samples_to_pcm16(&[0.3; 10]);

    let wav_vec = write_wav_to_vec(&format, &pcm);
    let mut wav_writer = Vec::new();
    write_wav(&mut wav_writer, &format, &pcm).expect("should write");

    assert_eq!(wav_vec, wav_writer);
}

// =========================================================================
// WavResult tests
// =========================================================================

#[test]
fn test_wav_result_fields() {
    let params = GenerationParameters::new(8000, 0.5);
    let buffer = generate_seeded(&params, 42).unwrap();
    let result = WavResult::from_buffer(&buffer);

    assert_eq!(result.sample_rate, 8000);
    assert_eq!(result.num_samples, 4000);
    assert_eq!(result.pcm_hash.len(), 64);
    assert_eq!(result.wav_data.len(), 44 + 4000 * 2);
    assert!((result.duration_seconds() - 0.5).abs() < 0.0001);
}

// =========================================================================
// File round-trip tests
// =========================================================================

#[test]
fn test_round_trip_through_hound() {
    let params = GenerationParameters::new(8000, 0.25);
    let buffer = generate_seeded(&params, 42).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("noise.wav");
    encode_to_path(&buffer, &path).unwrap();

    let mut reader = hound::WavReader::open(&path).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 8000);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);

    let decoded: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    // Integer equality, no tolerance
    assert_eq!(decoded, quantize(buffer.samples()));
}

#[test]
fn test_encode_to_path_reports_io_failure() {
    let params = GenerationParameters::new(8000, 0.01);
    let buffer = generate_seeded(&params, 42).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("noise.wav");
    let err = encode_to_path(&buffer, &path).unwrap_err();
    assert!(matches!(err, crate::NoiseError::Io(_)));
}
