//! WAV decoder tests
//!
//! Verifies mono extraction against hound-generated fixtures:
//! - Mono clips decode sample-for-sample
//! - Stereo clips keep only the first channel
//! - Missing and corrupt assets fail without a partial result

mod helpers;

use helpers::{mono_wav, ramp, stereo_wav, wav_bytes, write_mono_wav, TEST_SAMPLE_RATE};
use spooky_player::assets::{DirectorySource, MemorySource};
use spooky_player::audio::{decode_wav, WavDecoder};
use spooky_player::{Error, SoundId};
use tempfile::TempDir;

#[test]
fn test_mono_clip_decodes_exactly() {
    let original = ramp(10_000);
    let source = MemorySource::new().with_asset("bell", mono_wav(&original));
    let decoder = WavDecoder::new(source);

    let buffer = decoder.decode(&SoundId::new("bell")).unwrap();

    assert_eq!(buffer.len(), original.len());
    assert_eq!(buffer.samples(), &original[..]);
}

#[test]
fn test_one_second_mono_clip() {
    let original = ramp(TEST_SAMPLE_RATE as usize);
    let (buffer, format) = decode_wav(&SoundId::new("cat"), mono_wav(&original)).unwrap();

    assert_eq!(format.channels, 1);
    assert_eq!(format.sample_rate, 44100);
    assert_eq!(format.bits_per_sample, Some(16));
    assert_eq!(buffer.len(), 44100);
    assert_eq!(buffer.duration().as_secs(), 1);
    assert_eq!(buffer.samples(), &original[..]);
}

#[test]
fn test_extreme_values_preserved() {
    let original = vec![i16::MIN, -1, 0, 1, i16::MAX, i16::MIN, i16::MAX];
    let (buffer, _) = decode_wav(&SoundId::new("laugh"), mono_wav(&original)).unwrap();
    assert_eq!(buffer.samples(), &original[..]);
}

#[test]
fn test_stereo_keeps_first_channel_only() {
    let left = ramp(5_000);
    let right: Vec<i16> = left.iter().map(|s| s.wrapping_neg() ^ 0x55).collect();
    let source = MemorySource::new().with_asset("raven", stereo_wav(&left, &right));

    let buffer = WavDecoder::new(source).decode(&SoundId::new("raven")).unwrap();

    assert_eq!(buffer.len(), left.len());
    assert_eq!(buffer.samples(), &left[..]);
}

#[test]
fn test_stereo_silent_left_loud_right_is_silent() {
    // No averaging: the right channel must not leak into the output
    let left = vec![0i16; 2_000];
    let right = vec![i16::MAX; 2_000];
    let (buffer, format) = decode_wav(&SoundId::new("witches"), stereo_wav(&left, &right)).unwrap();

    assert_eq!(format.channels, 2);
    assert!(buffer.samples().iter().all(|&s| s == 0));
}

#[test]
fn test_other_sample_rate_decoded_without_resampling() {
    let original = ramp(4_800);
    let (buffer, format) = decode_wav(&SoundId::new("bell"), wav_bytes(1, 48000, &original)).unwrap();

    assert_eq!(format.sample_rate, 48000);
    assert_eq!(buffer.samples(), &original[..]);
}

#[test]
fn test_decode_from_directory() {
    let dir = TempDir::new().unwrap();
    let original = ramp(3_000);
    write_mono_wav(dir.path(), "cat", &original);

    let decoder = WavDecoder::new(DirectorySource::new(dir.path()));
    let buffer = decoder.decode(&SoundId::new("cat")).unwrap();

    assert_eq!(buffer.samples(), &original[..]);
}

#[test]
fn test_missing_asset_in_directory() {
    let dir = TempDir::new().unwrap();
    let decoder = WavDecoder::new(DirectorySource::new(dir.path()));

    match decoder.decode(&SoundId::new("ghost")) {
        Err(Error::AssetNotFound { sound, .. }) => assert_eq!(sound, "ghost"),
        other => panic!("Expected AssetNotFound, got {:?}", other),
    }
}

#[test]
fn test_truncated_file_is_corrupt() {
    let bytes = mono_wav(&ramp(1_000));
    let truncated = bytes[..20].to_vec();
    let source = MemorySource::new().with_asset("bell", truncated);

    let result = WavDecoder::new(source).decode(&SoundId::new("bell"));
    assert!(matches!(result, Err(Error::AssetCorrupt { .. })), "got {:?}", result);
}

#[test]
fn test_not_a_wav_is_corrupt() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("bell.wav"), b"this is not a RIFF container at all").unwrap();

    let result = WavDecoder::new(DirectorySource::new(dir.path())).decode(&SoundId::new("bell"));
    assert!(matches!(result, Err(Error::AssetCorrupt { .. })), "got {:?}", result);
}
