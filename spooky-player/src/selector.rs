//! Next-sound selection
//!
//! Picks a random sound from the catalog, never the same one twice in a row.
//! The last played sound is excluded from the candidates before drawing, so a
//! selection is always a single draw. With a one-sound catalog the no-repeat
//! rule cannot hold and is skipped.

use crate::catalog::{SoundCatalog, SoundId};
use rand::Rng;
use tracing::debug;

/// Selector state: the catalog plus the last played sound
#[derive(Debug, Clone)]
pub struct Selector {
    catalog: SoundCatalog,
    /// Catalog index of the last selection
    last_played: Option<usize>,
}

impl Selector {
    pub fn new(catalog: SoundCatalog) -> Self {
        Self {
            catalog,
            last_played: None,
        }
    }

    /// Start as if `sound` had just been played.
    ///
    /// Unknown names leave the selector without history.
    pub fn with_last_played(mut self, sound: &str) -> Self {
        self.last_played = self.catalog.position(sound);
        self
    }

    pub fn catalog(&self) -> &SoundCatalog {
        &self.catalog
    }

    pub fn last_played(&self) -> Option<&SoundId> {
        self.last_played.and_then(|index| self.catalog.get(index))
    }

    /// Select the next sound and record it as last played.
    ///
    /// Uniform over every catalog entry except the last played one.
    pub fn select_next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> SoundId {
        let len = self.catalog.len();

        let index = match self.last_played {
            Some(last) if len > 1 => {
                // Draw among the other len - 1 entries, skipping over `last`
                let drawn = rng.gen_range(0..len - 1);
                if drawn >= last {
                    drawn + 1
                } else {
                    drawn
                }
            }
            Some(last) => last,
            None => rng.gen_range(0..len),
        };

        self.last_played = Some(index);

        let sound = self.catalog[index].clone();
        debug!("Selected sound {} (index {} of {})", sound, index, len);
        sound
    }
}
