//! Sound asset sources
//!
//! An [`AssetSource`] turns a sound identifier into the raw bytes of its
//! `<id>.wav` file. The bytes are fully buffered so the decoder can parse
//! them from memory with random access.

use crate::catalog::SoundId;
use crate::error::{Error, Result};
use spooky_common::config::SOUNDS_DIR_NAME;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of a sound asset
pub fn asset_file_name(sound: &SoundId) -> String {
    format!("{}.wav", sound)
}

/// Virtual path of a sound inside an embedded store (`sounds/<id>.wav`)
pub fn asset_virtual_path(sound: &SoundId) -> String {
    format!("{}/{}", SOUNDS_DIR_NAME, asset_file_name(sound))
}

/// Source of WAV-encoded sound assets
pub trait AssetSource {
    /// Load the complete `<sound>.wav` byte stream.
    ///
    /// # Errors
    /// - [`Error::AssetNotFound`] when no asset exists for `sound`
    /// - [`Error::IoFailure`] for any other read error
    fn load(&self, sound: &SoundId) -> Result<Vec<u8>>;
}

impl<T: AssetSource + ?Sized> AssetSource for &T {
    fn load(&self, sound: &SoundId) -> Result<Vec<u8>> {
        (**self).load(sound)
    }
}

/// Reads `<dir>/<sound>.wav` from the local filesystem
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, sound: &SoundId) -> PathBuf {
        self.root.join(asset_file_name(sound))
    }
}

impl AssetSource for DirectorySource {
    fn load(&self, sound: &SoundId) -> Result<Vec<u8>> {
        let path = self.path_for(sound);
        debug!("Loading sound asset: {}", path.display());

        std::fs::read(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::AssetNotFound {
                sound: sound.to_string(),
                location: path.display().to_string(),
            },
            _ => Error::IoFailure {
                sound: sound.to_string(),
                source: e,
            },
        })
    }
}

/// In-memory asset store indexed by `sounds/<id>.wav`.
///
/// Holds assets bundled with a binary (e.g. via `include_bytes!`) or built by
/// tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    assets: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the WAV bytes for `sound`, replacing any previous asset
    pub fn insert(&mut self, sound: impl Into<SoundId>, bytes: impl Into<Vec<u8>>) {
        let sound = sound.into();
        self.assets.insert(asset_virtual_path(&sound), bytes.into());
    }

    /// Builder-style [`insert`](MemorySource::insert)
    pub fn with_asset(mut self, sound: impl Into<SoundId>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(sound, bytes);
        self
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl AssetSource for MemorySource {
    fn load(&self, sound: &SoundId) -> Result<Vec<u8>> {
        let path = asset_virtual_path(sound);
        self.assets
            .get(&path)
            .cloned()
            .ok_or_else(|| Error::AssetNotFound {
                sound: sound.to_string(),
                location: path,
            })
    }
}
