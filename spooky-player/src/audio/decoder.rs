//! WAV decoder using symphonia
//!
//! Decodes a WAV asset from an in-memory buffer into mono 16-bit PCM.
//!
//! Only the first channel of each frame is kept. Other channels are dropped,
//! not averaged. The source sample rate is reported but never converted, so
//! assets that are not 44100 Hz play at the wrong speed and pitch.

use crate::assets::AssetSource;
use crate::audio::types::{SampleBuffer, WavFormat, OUTPUT_SAMPLE_RATE};
use crate::catalog::SoundId;
use crate::error::{Error, Result};
use std::io::{Cursor, ErrorKind};
use symphonia::core::audio::{AudioBuffer, AudioBufferRef, Signal};
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::conv::IntoSample;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use symphonia::core::sample::Sample;
use tracing::{debug, info, warn};

/// Decodes named sounds loaded from an [`AssetSource`]
#[derive(Debug, Clone)]
pub struct WavDecoder<S> {
    source: S,
}

impl<S: AssetSource> WavDecoder<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Load and decode a sound.
    ///
    /// # Errors
    /// - [`Error::AssetNotFound`]: the source has no asset for `sound`
    /// - [`Error::AssetCorrupt`]: the bytes are not a decodable WAV file
    /// - [`Error::IoFailure`]: read error while loading or decoding
    pub fn decode(&self, sound: &SoundId) -> Result<SampleBuffer> {
        let bytes = self.source.load(sound)?;
        let (buffer, _format) = decode_wav(sound, bytes)?;
        Ok(buffer)
    }
}

/// Decode WAV bytes into mono samples, returning the source format as well.
///
/// `sound` is only used for logging and error messages.
pub fn decode_wav(sound: &SoundId, bytes: Vec<u8>) -> Result<(SampleBuffer, WavFormat)> {
    debug!("Decoding {} ({} bytes)", sound, bytes.len());

    let mss = MediaSourceStream::new(Box::new(Cursor::new(bytes)), Default::default());

    let mut hint = Hint::new();
    hint.with_extension("wav");

    let probed = symphonia::default::get_probe()
        .format(&hint, mss, &FormatOptions::default(), &MetadataOptions::default())
        .map_err(|e| classify(sound, e))?;

    let mut reader = probed.format;

    let track = reader
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| corrupt(sound, "no audio track found"))?;

    let track_id = track.id;
    let codec_params = track.codec_params.clone();

    let channels = codec_params
        .channels
        .map(|c| c.count() as u16)
        .ok_or_else(|| corrupt(sound, "channel count not found"))?;

    let sample_rate = codec_params
        .sample_rate
        .ok_or_else(|| corrupt(sound, "sample rate not found"))?;

    let format = WavFormat {
        channels,
        sample_rate,
        bits_per_sample: codec_params.bits_per_sample,
    };

    info!("Reading {}.wav", sound);
    info!("File info: {}", format);

    if sample_rate != OUTPUT_SAMPLE_RATE {
        warn!(
            "{}.wav is {} Hz but output is fixed at {} Hz, it will play at the wrong speed",
            sound, sample_rate, OUTPUT_SAMPLE_RATE
        );
    }

    let mut decoder = symphonia::default::get_codecs()
        .make(&codec_params, &DecoderOptions::default())
        .map_err(|e| classify(sound, e))?;

    let mut samples: Vec<i16> = Vec::with_capacity(codec_params.n_frames.unwrap_or(0) as usize);

    loop {
        let packet = match reader.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(ref e)) if e.kind() == ErrorKind::UnexpectedEof => {
                // End of stream
                break;
            }
            Err(SymphoniaError::ResetRequired) => break,
            Err(e) => return Err(classify(sound, e)),
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = decoder.decode(&packet).map_err(|e| classify(sound, e))?;
        push_first_channel(&decoded, &mut samples);
    }

    debug!("Decoded {} mono samples from {}", samples.len(), sound);

    Ok((SampleBuffer::new(samples), format))
}

/// Append channel 0 of a decoded packet, converted to i16.
fn push_first_channel(decoded: &AudioBufferRef, output: &mut Vec<i16>) {
    match decoded {
        AudioBufferRef::U8(buf) => extend_first_channel(&**buf, output),
        AudioBufferRef::U16(buf) => extend_first_channel(&**buf, output),
        AudioBufferRef::U24(buf) => extend_first_channel(&**buf, output),
        AudioBufferRef::U32(buf) => extend_first_channel(&**buf, output),
        AudioBufferRef::S8(buf) => extend_first_channel(&**buf, output),
        AudioBufferRef::S16(buf) => extend_first_channel(&**buf, output),
        AudioBufferRef::S24(buf) => extend_first_channel(&**buf, output),
        AudioBufferRef::S32(buf) => extend_first_channel(&**buf, output),
        AudioBufferRef::F32(buf) => extend_first_channel(&**buf, output),
        AudioBufferRef::F64(buf) => extend_first_channel(&**buf, output),
    }
}

fn extend_first_channel<S>(buf: &AudioBuffer<S>, output: &mut Vec<i16>)
where
    S: Sample + IntoSample<i16>,
{
    if buf.spec().channels.count() == 0 {
        return;
    }
    output.extend(buf.chan(0).iter().map(|&s| s.into_sample()));
}

fn corrupt(sound: &SoundId, reason: impl Into<String>) -> Error {
    Error::AssetCorrupt {
        sound: sound.to_string(),
        reason: reason.into(),
    }
}

/// Map a symphonia error onto the decoding error taxonomy
fn classify(sound: &SoundId, err: SymphoniaError) -> Error {
    match err {
        // Truncated headers surface as EOF and mean the file is broken
        SymphoniaError::IoError(e) if e.kind() == ErrorKind::UnexpectedEof => {
            corrupt(sound, format!("unexpected end of file: {}", e))
        }
        SymphoniaError::IoError(e) => Error::IoFailure {
            sound: sound.to_string(),
            source: e,
        },
        other => corrupt(sound, other.to_string()),
    }
}
