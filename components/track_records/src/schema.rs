use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LoadError;

/// Known source file layouts.
///
/// - `BestSongs`: "Best Songs on Spotify 2000-2023", `;` delimited, features
///   stored as percentages, one genre per row.
/// - `MainData`: the large Spotify dump, `,` delimited, features already
///   fractions, artists stored as a bracketed list, no genre column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceFormat {
    BestSongs,
    MainData,
}

/// How a source stores the 0-1 audio features
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureScale {
    /// 0-100, divided by 100 on the way in
    Percent,
    /// Already 0-1
    Fraction,
}

impl FeatureScale {
    pub fn to_fraction(&self, value: f64) -> f64 {
        match self {
            FeatureScale::Percent => value / 100.0,
            FeatureScale::Fraction => value,
        }
    }
}

/// How a source stores the artist column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtistSyntax {
    Plain,
    /// `['First', 'Second']`
    BracketedList,
}

/// Audio features normalized to `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Danceability,
    Energy,
    Acousticness,
    Valence,
    Speechiness,
    Instrumentalness,
    Liveness,
}

impl Feature {
    pub const ALL: [Feature; 7] = [
        Feature::Danceability,
        Feature::Energy,
        Feature::Acousticness,
        Feature::Valence,
        Feature::Speechiness,
        Feature::Instrumentalness,
        Feature::Liveness,
    ];
}

/// Numeric fields that are not audio features
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Measure {
    Year,
    Popularity,
    Loudness,
    Tempo,
    /// Resolved in the source's unit, see [`SourceFormat::duration_to_ms`]
    Duration,
}

/// Where a canonical field comes from and what it falls back to.
///
/// `default` is expressed in canonical units, after scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub aliases: &'static [&'static str],
    pub default: f64,
}

const fn spec(aliases: &'static [&'static str], default: f64) -> FieldSpec {
    FieldSpec { aliases, default }
}

impl SourceFormat {
    pub const ALL: [SourceFormat; 2] = [SourceFormat::BestSongs, SourceFormat::MainData];

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFormat::BestSongs => "best-songs",
            SourceFormat::MainData => "main-data",
        }
    }

    pub fn delimiter(&self) -> u8 {
        match self {
            SourceFormat::BestSongs => b';',
            SourceFormat::MainData => b',',
        }
    }

    pub fn feature_scale(&self) -> FeatureScale {
        match self {
            SourceFormat::BestSongs => FeatureScale::Percent,
            SourceFormat::MainData => FeatureScale::Fraction,
        }
    }

    pub fn artist_syntax(&self) -> ArtistSyntax {
        match self {
            SourceFormat::BestSongs => ArtistSyntax::Plain,
            SourceFormat::MainData => ArtistSyntax::BracketedList,
        }
    }

    pub fn feature(&self, feature: Feature) -> FieldSpec {
        use Feature::*;
        match (self, feature) {
            // Two of the Best Songs headers carry a trailing space
            (SourceFormat::BestSongs, Danceability) => spec(&["danceability ", "danceability"], 0.5),
            (SourceFormat::BestSongs, Energy) => spec(&["energy"], 0.5),
            (SourceFormat::BestSongs, Acousticness) => spec(&["acousticness"], 0.5),
            (SourceFormat::BestSongs, Valence) => spec(&["valence"], 0.5),
            (SourceFormat::BestSongs, Speechiness) => spec(&["speechiness ", "speechiness"], 0.05),
            (SourceFormat::BestSongs, Instrumentalness) => spec(&[], 0.0),
            (SourceFormat::BestSongs, Liveness) => spec(&["liveness"], 0.1),

            (SourceFormat::MainData, Danceability) => spec(&["danceability"], 0.5),
            (SourceFormat::MainData, Energy) => spec(&["energy"], 0.5),
            (SourceFormat::MainData, Acousticness) => spec(&["acousticness"], 0.5),
            (SourceFormat::MainData, Valence) => spec(&["valence"], 0.5),
            (SourceFormat::MainData, Speechiness) => spec(&["speechiness"], 0.0),
            (SourceFormat::MainData, Instrumentalness) => spec(&["instrumentalness"], 0.0),
            (SourceFormat::MainData, Liveness) => spec(&["liveness"], 0.1),
        }
    }

    pub fn measure(&self, measure: Measure) -> FieldSpec {
        use Measure::*;
        match (self, measure) {
            (SourceFormat::BestSongs, Year) => spec(&["year"], 2000.0),
            (SourceFormat::BestSongs, Popularity) => spec(&["popularity"], 50.0),
            (SourceFormat::BestSongs, Loudness) => spec(&["dB", "db"], -10.0),
            (SourceFormat::BestSongs, Tempo) => spec(&["bpm"], 120.0),
            (SourceFormat::BestSongs, Duration) => spec(&["duration"], 200_000.0),

            (SourceFormat::MainData, Year) => spec(&["year"], 1921.0),
            (SourceFormat::MainData, Popularity) => spec(&["popularity"], 50.0),
            (SourceFormat::MainData, Loudness) => spec(&["loudness"], -10.0),
            (SourceFormat::MainData, Tempo) => spec(&["tempo"], 120.0),
            (SourceFormat::MainData, Duration) => spec(&["duration_ms"], 200_000.0),
        }
    }

    /// Converts a raw duration value to milliseconds
    pub fn duration_to_ms(&self, raw: f64) -> f64 {
        match self {
            SourceFormat::BestSongs => raw * 1000.0,
            SourceFormat::MainData => raw,
        }
    }

    pub fn id_aliases(&self) -> &'static [&'static str] {
        match self {
            SourceFormat::BestSongs => &[],
            SourceFormat::MainData => &["id"],
        }
    }

    pub fn name_aliases(&self) -> &'static [&'static str] {
        match self {
            SourceFormat::BestSongs => &["title"],
            SourceFormat::MainData => &["name"],
        }
    }

    pub fn artist_aliases(&self) -> &'static [&'static str] {
        match self {
            SourceFormat::BestSongs => &["artist"],
            SourceFormat::MainData => &["artists"],
        }
    }

    /// The main data dump has no genre column
    pub fn genre_aliases(&self) -> &'static [&'static str] {
        match self {
            SourceFormat::BestSongs => &["top genre"],
            SourceFormat::MainData => &[],
        }
    }

    /// Whether a header row belongs to this layout
    pub fn matches_headers<'a>(&self, headers: impl IntoIterator<Item = &'a str>) -> bool {
        let headers: Vec<String> = headers
            .into_iter()
            .map(|h| h.trim_matches(|c: char| c.is_whitespace() || c == '"' || c == '\u{feff}'))
            .map(str::to_lowercase)
            .collect();
        let has = |name: &str| headers.iter().any(|h| h == name);

        match self {
            SourceFormat::BestSongs => has("top genre"),
            SourceFormat::MainData => has("artists") || has("duration_ms"),
        }
    }

    /// Picks the layout from the first line of a file
    pub fn detect(header_line: &str) -> Option<SourceFormat> {
        SourceFormat::ALL.into_iter().find(|format| {
            let delimiter = char::from(format.delimiter());
            format.matches_headers(header_line.split(delimiter))
        })
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SourceFormat {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "best-songs" | "best_songs" => Ok(SourceFormat::BestSongs),
            "main-data" | "main_data" => Ok(SourceFormat::MainData),
            other => Err(LoadError::UnknownFormat(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rstest::rstest;

    #[rstest]
    #[case("title;artist;top genre;year;bpm;energy;danceability ;dB", Some(SourceFormat::BestSongs))]
    #[case("\u{feff}title;artist;Top Genre;year", Some(SourceFormat::BestSongs))]
    #[case("valence,year,acousticness,artists,danceability,duration_ms", Some(SourceFormat::MainData))]
    #[case("\"id\",\"name\",\"artists\"", Some(SourceFormat::MainData))]
    #[case("foo,bar,baz", None)]
    #[case("title,artist,top genre", None)]
    fn detects_layout_from_header(#[case] line: &str, #[case] expected: Option<SourceFormat>) {
        assert_eq!(SourceFormat::detect(line), expected);
    }

    #[test]
    fn percent_scale_divides() {
        assert_eq!(FeatureScale::Percent.to_fraction(75.0), 0.75);
        assert_eq!(FeatureScale::Fraction.to_fraction(0.75), 0.75);
    }

    #[test]
    fn format_parsing() {
        assert_eq!("best-songs".parse::<SourceFormat>().unwrap(), SourceFormat::BestSongs);
        assert_eq!("Main_Data".parse::<SourceFormat>().unwrap(), SourceFormat::MainData);
        assert_matches!(
            "tsv".parse::<SourceFormat>(),
            Err(LoadError::UnknownFormat(name)) if name == "tsv"
        );
    }

    #[test]
    fn every_feature_has_a_spec_in_both_layouts() {
        for format in SourceFormat::ALL {
            for feature in Feature::ALL {
                let spec = format.feature(feature);
                assert!((0.0..=1.0).contains(&spec.default));
            }
        }
    }

    #[test]
    fn best_songs_duration_is_seconds() {
        assert_eq!(SourceFormat::BestSongs.duration_to_ms(215.0), 215_000.0);
        assert_eq!(SourceFormat::MainData.duration_to_ms(215_000.0), 215_000.0);
    }
}
