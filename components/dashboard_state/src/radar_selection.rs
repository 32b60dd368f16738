use serde::Serialize;

use crate::error::SelectionError;

/// Line colours of the compared artists, by selection slot
pub const RADAR_COLORS: [&str; 4] = ["#E91E63", "#9C27B0", "#00BCD4", "#FFC107"];

/// Artists picked for the radar, in selection order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadarSelection {
    artists: Vec<String>,
    max: usize,
}

impl RadarSelection {
    pub fn new(max: usize) -> Self {
        Self {
            artists: Vec::with_capacity(max),
            max,
        }
    }

    pub fn artists(&self) -> &[String] {
        &self.artists
    }

    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    pub fn contains(&self, artist: &str) -> bool {
        self.artists.iter().any(|a| a == artist)
    }

    /// Adds `artist`. Returns `Ok(false)` when it is already selected.
    pub fn add(&mut self, artist: &str) -> Result<bool, SelectionError> {
        if self.contains(artist) {
            return Ok(false);
        }
        if self.artists.len() >= self.max {
            return Err(SelectionError::Full { max: self.max });
        }
        self.artists.push(artist.to_string());
        Ok(true)
    }

    pub fn remove(&mut self, artist: &str) -> bool {
        let before = self.artists.len();
        self.artists.retain(|a| a != artist);
        self.artists.len() != before
    }

    /// Colour of the artist in `slot`, cycling past the palette
    pub fn color(slot: usize) -> &'static str {
        RADAR_COLORS[slot % RADAR_COLORS.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn duplicates_are_ignored() {
        let mut selection = RadarSelection::new(4);
        assert_eq!(selection.add("Adele"), Ok(true));
        assert_eq!(selection.add("Adele"), Ok(false));
        assert_eq!(selection.artists(), ["Adele"]);
    }

    #[test]
    fn fifth_artist_is_rejected() {
        let mut selection = RadarSelection::new(4);
        for artist in ["A", "B", "C", "D"] {
            selection.add(artist).unwrap();
        }

        assert_matches!(selection.add("E"), Err(SelectionError::Full { max: 4 }));
        assert_eq!(selection.len(), 4);
        // Re-adding a selected artist is still fine when full
        assert_eq!(selection.add("B"), Ok(false));
    }

    #[test]
    fn remove_frees_a_slot() {
        let mut selection = RadarSelection::new(2);
        selection.add("A").unwrap();
        selection.add("B").unwrap();

        assert!(selection.remove("A"));
        assert!(!selection.remove("A"));
        assert_eq!(selection.add("C"), Ok(true));
        assert_eq!(selection.artists(), ["B", "C"]);
    }

    #[test]
    fn colours_follow_slots() {
        assert_eq!(RadarSelection::color(0), "#E91E63");
        assert_eq!(RadarSelection::color(3), "#FFC107");
        assert_eq!(RadarSelection::color(4), "#E91E63");
    }
}
