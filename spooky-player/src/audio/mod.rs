//! Audio pipeline: WAV decoding and device output

pub mod decoder;
pub mod output;
pub mod types;

pub use decoder::{decode_wav, WavDecoder};
pub use output::{AudioSink, CpalSink};
pub use types::{PlaybackTarget, SampleBuffer, WavFormat, OUTPUT_CHANNELS, OUTPUT_SAMPLE_RATE};
