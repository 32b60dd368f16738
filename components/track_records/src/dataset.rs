use std::ops::Deref;
use std::sync::Arc;

use crate::track::Track;

/// The validated baseline of one load. Cloning shares the tracks.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    tracks: Arc<[Track]>,
}

impl Dataset {
    /// Wraps tracks that already passed validation
    pub fn new(tracks: Vec<Track>) -> Self {
        Self {
            tracks: tracks.into(),
        }
    }
}

impl Deref for Dataset {
    type Target = [Track];

    fn deref(&self) -> &[Track] {
        &self.tracks
    }
}

impl From<Vec<Track>> for Dataset {
    fn from(tracks: Vec<Track>) -> Self {
        Self::new(tracks)
    }
}
