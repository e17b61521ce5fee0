//! Sound catalog
//!
//! The fixed, ordered set of sound identifiers the selector draws from.

use crate::error::{Error, Result};
use std::fmt;

/// Sounds shipped with the player, one `<name>.wav` each
pub const DEFAULT_SOUNDS: &[&str] = &["bell", "cat", "laugh", "hauntedhouse", "raven", "witches"];

/// Identifier of a sound asset (file stem of its WAV file)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SoundId(String);

impl SoundId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SoundId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Immutable, non-empty list of distinct sounds
#[derive(Debug, Clone)]
pub struct SoundCatalog {
    sounds: Vec<SoundId>,
}

impl SoundCatalog {
    /// Build a catalog.
    ///
    /// # Errors
    /// - Empty list
    /// - Empty or duplicate sound names
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut sounds: Vec<SoundId> = Vec::new();
        for name in names {
            let id = SoundId::new(name);
            if id.as_str().is_empty() {
                return Err(Error::Config("Sound names must not be empty".to_string()));
            }
            if sounds.contains(&id) {
                return Err(Error::Config(format!("Duplicate sound in catalog: {}", id)));
            }
            sounds.push(id);
        }

        if sounds.is_empty() {
            return Err(Error::Config("Sound catalog is empty".to_string()));
        }

        Ok(Self { sounds })
    }

    pub fn len(&self) -> usize {
        self.sounds.len()
    }

    /// Always false, catalogs are non-empty by construction
    pub fn is_empty(&self) -> bool {
        self.sounds.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SoundId> {
        self.sounds.get(index)
    }

    /// Position of a sound in the catalog
    pub fn position(&self, sound: &str) -> Option<usize> {
        self.sounds.iter().position(|s| s.as_str() == sound)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SoundId> {
        self.sounds.iter()
    }
}

impl std::ops::Index<usize> for SoundCatalog {
    type Output = SoundId;

    fn index(&self, index: usize) -> &SoundId {
        &self.sounds[index]
    }
}

impl Default for SoundCatalog {
    fn default() -> Self {
        Self {
            sounds: DEFAULT_SOUNDS.iter().copied().map(SoundId::from).collect(),
        }
    }
}
