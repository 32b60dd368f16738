use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Genre given to rows whose source provides none. The validator drops it.
pub const FALLBACK_GENRE: &str = "pop";

/// Placeholder for missing names and artists
pub const UNKNOWN_TEXT: &str = "Unknown";

/// Opaque track identifier, unique within one load
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(String);

impl TrackId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Random identifier for rows that carry none
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canonical song record shared by every source schema.
///
/// Audio features are fractions in `[0, 1]` regardless of how the source
/// stored them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: TrackId,
    pub name: String,
    pub artist: String,
    pub year: i32,
    /// Lower-cased and trimmed
    pub genre: String,
    pub popularity: i32,

    pub danceability: f64,
    pub energy: f64,
    pub acousticness: f64,
    pub valence: f64,
    pub speechiness: f64,
    pub instrumentalness: f64,
    pub liveness: f64,

    /// Decibels, usually negative
    pub loudness: f64,
    /// Beats per minute
    pub tempo: f64,
    pub duration_ms: i64,
}

impl Track {
    /// Human readable "Artist - Name"
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.artist, self.name)
    }

    /// True when every field but the identifier matches
    pub fn same_content(&self, other: &Track) -> bool {
        Track {
            id: other.id.clone(),
            ..self.clone()
        } == *other
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// A valid track with neutral values, for tests to tweak
    pub fn track(genre: &str, year: i32, popularity: i32) -> Track {
        Track {
            id: TrackId::generate(),
            name: "Song".to_string(),
            artist: "Artist".to_string(),
            year,
            genre: genre.to_string(),
            popularity,
            danceability: 0.5,
            energy: 0.5,
            acousticness: 0.5,
            valence: 0.5,
            speechiness: 0.05,
            instrumentalness: 0.0,
            liveness: 0.1,
            loudness: -10.0,
            tempo: 120.0,
            duration_ms: 200_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::track;
    use super::*;

    #[test]
    fn generated_ids_differ() {
        assert_ne!(TrackId::generate(), TrackId::generate());
    }

    #[test]
    fn same_content_ignores_id() {
        let a = track("dance pop", 2010, 80);
        let mut b = a.clone();
        b.id = TrackId::new("other");
        assert!(a.same_content(&b));

        b.popularity = 81;
        assert!(!a.same_content(&b));
    }

    #[test]
    fn track_id_serializes_transparently() {
        let id = TrackId::new("abc123");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc123\"");
    }
}
