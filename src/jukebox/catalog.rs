//! # Catalog
//!
//! The fixed set of songs a session can select from. A catalog is built once at
//! startup, validated, and never mutated afterwards: there is no API to add or
//! remove songs once a [`Catalog`] exists.
//!
//! Display order is insertion order. Ids do not need to be contiguous or sorted,
//! but they must be positive and unique, since `0` is the exit selection.

use crate::error::{JukeboxError, Result};
use crate::model::{Song, EXIT_ID};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    songs: Vec<Song>,
    by_id: HashMap<i64, usize>,
}

impl Catalog {
    /// Builds a catalog, rejecting the reserved exit id, non-positive ids and duplicates.
    pub fn new(songs: Vec<Song>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(songs.len());
        for (pos, song) in songs.iter().enumerate() {
            if song.id == EXIT_ID {
                return Err(JukeboxError::ReservedId);
            }
            if song.id < 0 {
                return Err(JukeboxError::InvalidId(song.id));
            }
            if by_id.insert(song.id, pos).is_some() {
                return Err(JukeboxError::DuplicateId(song.id));
            }
        }
        Ok(Self { songs, by_id })
    }

    /// The five songs the jukebox ships with.
    pub fn builtin() -> Self {
        let songs = vec![
            Song::new(
                1,
                "Bohemian Rhapsody",
                "Queen",
                "Is this the real life? Is this just fantasy?",
            ),
            Song::new(
                2,
                "Dancing Queen",
                "ABBA",
                "You are the dancing queen, young and sweet, only seventeen.",
            ),
            Song::new(
                3,
                "Don't Stop Believin'",
                "Journey",
                "Just a small town girl, living in a lonely world...",
            ),
            Song::new(
                4,
                "Yesterday",
                "The Beatles",
                "Yesterday, all my troubles seemed so far away...",
            ),
            Song::new(
                5,
                "Rocket Man",
                "Elton John",
                "And I think it's gonna be a long, long time...",
            ),
        ];
        let by_id = songs
            .iter()
            .enumerate()
            .map(|(pos, song)| (song.id, pos))
            .collect();
        Self { songs, by_id }
    }

    /// Loads a catalog from a JSON array of songs.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(JukeboxError::Io)?;
        let songs: Vec<Song> =
            serde_json::from_str(&content).map_err(JukeboxError::Serialization)?;
        let catalog = Self::new(songs)?;
        debug!(path = %path.display(), songs = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    pub fn get(&self, id: i64) -> Option<&Song> {
        self.by_id.get(&id).map(|&pos| &self.songs[pos])
    }

    /// Songs in display order.
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}
