use serde::{Deserialize, Serialize};
use track_records::Track;

use crate::group::mean;

/// Value used on every axis for an artist without tracks
const NEUTRAL: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadarAxis {
    Energy,
    Danceability,
    Acousticness,
    Valence,
    Instrumentalness,
}

impl RadarAxis {
    pub const ALL: [RadarAxis; 5] = [
        RadarAxis::Energy,
        RadarAxis::Danceability,
        RadarAxis::Acousticness,
        RadarAxis::Valence,
        RadarAxis::Instrumentalness,
    ];

    pub fn value(&self, track: &Track) -> f64 {
        match self {
            RadarAxis::Energy => track.energy,
            RadarAxis::Danceability => track.danceability,
            RadarAxis::Acousticness => track.acousticness,
            RadarAxis::Valence => track.valence,
            RadarAxis::Instrumentalness => track.instrumentalness,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarValue {
    pub axis: RadarAxis,
    pub value: f64,
}

/// Average audio character of one artist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistProfile {
    pub artist: String,
    pub track_count: usize,
    pub values: Vec<RadarValue>,
}

impl ArtistProfile {
    pub fn value(&self, axis: RadarAxis) -> Option<f64> {
        self.values.iter().find(|v| v.axis == axis).map(|v| v.value)
    }
}

/// Mean of each radar axis over the artist's tracks (exact name match)
pub fn artist_profile(tracks: &[Track], artist: &str) -> ArtistProfile {
    let own: Vec<&Track> = tracks.iter().filter(|t| t.artist == artist).collect();

    let values = RadarAxis::ALL
        .iter()
        .map(|axis| RadarValue {
            axis: *axis,
            value: mean(own.iter().map(|t| axis.value(t))).unwrap_or(NEUTRAL),
        })
        .collect();

    ArtistProfile {
        artist: artist.to_string(),
        track_count: own.len(),
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::track;

    #[test]
    fn profile_averages_each_axis() {
        let mut a = track("rock", 2010, 50, "Band");
        a.energy = 0.9;
        a.instrumentalness = 0.2;
        let mut b = track("rock", 2011, 50, "Band");
        b.energy = 0.5;
        b.instrumentalness = 0.0;
        let other = track("rock", 2011, 50, "Other");

        let profile = artist_profile(&[a, other, b], "Band");

        assert_eq!(profile.track_count, 2);
        assert_eq!(profile.values.len(), 5);
        assert!((profile.value(RadarAxis::Energy).unwrap() - 0.7).abs() < 1e-9);
        assert!((profile.value(RadarAxis::Instrumentalness).unwrap() - 0.1).abs() < 1e-9);
        assert_eq!(profile.value(RadarAxis::Danceability), Some(0.5));
    }

    #[test]
    fn unknown_artist_is_neutral() {
        let profile = artist_profile(&[track("rock", 2010, 50, "Band")], "Nobody");
        assert_eq!(profile.track_count, 0);
        assert!(profile.values.iter().all(|v| v.value == NEUTRAL));
    }

    #[test]
    fn axes_keep_their_order() {
        let profile = artist_profile(&[], "Nobody");
        let axes: Vec<RadarAxis> = profile.values.iter().map(|v| v.axis).collect();
        assert_eq!(axes, RadarAxis::ALL.to_vec());
    }
}
