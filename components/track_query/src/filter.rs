use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use track_records::{Track, YEAR_MAX, YEAR_MIN};

pub const POPULARITY_MAX: i32 = 100;

/// Inclusive year bounds. `min > max` is allowed and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl YearRange {
    pub const FULL: Self = Self {
        min: YEAR_MIN,
        max: YEAR_MAX,
    };

    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, year: i32) -> bool {
        self.min <= year && year <= self.max
    }

    pub fn years(&self) -> RangeInclusive<i32> {
        self.min..=self.max
    }

    /// Number of years covered, zero for an inverted range
    pub fn len(&self) -> usize {
        (i64::from(self.max) - i64::from(self.min) + 1).max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self::FULL
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.min, self.max)
    }
}

/// Active selection criteria shared by every view.
///
/// Values are immutable; [`FilterCommand`](crate::FilterCommand)s produce
/// the next state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    /// Lower-cased, in selection order. Empty means every genre.
    pub(crate) selected_genres: Vec<String>,
    pub(crate) min_popularity: i32,
    pub(crate) year_range: YearRange,
}

impl FilterState {
    pub fn new(genres: impl IntoIterator<Item = impl AsRef<str>>, min_popularity: i32, year_range: YearRange) -> Self {
        let mut state = Self {
            selected_genres: Vec::new(),
            min_popularity: min_popularity.clamp(0, POPULARITY_MAX),
            year_range,
        };
        for genre in genres {
            let genre = normalize_genre(genre.as_ref());
            if !genre.is_empty() && !state.selected_genres.contains(&genre) {
                state.selected_genres.push(genre);
            }
        }
        state
    }

    pub fn selected_genres(&self) -> &[String] {
        &self.selected_genres
    }

    pub fn min_popularity(&self) -> i32 {
        self.min_popularity
    }

    pub fn year_range(&self) -> YearRange {
        self.year_range
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Substring match, so a selected "pop" admits "dance pop" and "k-pop"
    pub fn genre_matches(&self, genre: &str) -> bool {
        if self.selected_genres.is_empty() {
            return true;
        }
        let genre = genre.to_lowercase();
        self.selected_genres
            .iter()
            .any(|selected| genre.contains(selected.as_str()))
    }

    pub fn matches(&self, track: &Track) -> bool {
        self.genre_matches(&track.genre)
            && track.popularity >= self.min_popularity
            && self.year_range.contains(track.year)
    }
}

pub(crate) fn normalize_genre(genre: &str) -> String {
    genre.trim().to_lowercase()
}

/// Full re-filter of `tracks`, keeping their order
pub fn apply_filters(tracks: &[Track], state: &FilterState) -> Vec<Track> {
    tracks
        .iter()
        .filter(|track| state.matches(track))
        .cloned()
        .collect()
}


#[cfg(test)]
mod tests {
    use super::fixtures::track;
    use super::*;
    use rstest::rstest;
    use track_records::validate;

    fn sample() -> Vec<Track> {
        vec![
            track("dance pop", 2010, 80),
            track("rock", 2015, 40),
            track("k-pop", 2019, 65),
            track("album rock", 2003, 90),
            track("jazz", 2022, 10),
            track("pop", 2008, 70),
            track("hip hop", 1995, 55),
        ]
    }

    #[test]
    fn pop_selection_keeps_dance_pop_only() {
        let mut first = track("dance pop", 2010, 80);
        first.danceability = 0.8;
        first.energy = 0.7;
        let mut second = track("rock", 2015, 40);
        second.danceability = 0.3;
        second.energy = 0.9;
        let dataset = vec![first.clone(), second];

        let state = FilterState::new(["pop"], 0, YearRange::FULL);
        assert_eq!(apply_filters(&dataset, &state), vec![first]);
    }

    #[rstest]
    #[case(&["pop"], &["dance pop", "k-pop", "pop"])]
    #[case(&["Rock"], &["rock", "album rock"])]
    #[case(&["pop", "jazz"], &["dance pop", "k-pop", "jazz", "pop"])]
    #[case(&["metal"], &[])]
    fn genre_selection_is_substring(#[case] selected: &[&str], #[case] expected: &[&str]) {
        let state = FilterState::new(selected.iter().copied(), 0, YearRange::new(1900, 2100));
        let genres: Vec<String> = apply_filters(&sample(), &state)
            .into_iter()
            .map(|t| t.genre)
            .collect();
        assert_eq!(genres, expected);
    }

    #[test]
    fn popularity_floor_is_inclusive() {
        let state = FilterState::new(Vec::<String>::new(), 70, YearRange::new(1900, 2100));
        let popularity: Vec<i32> = apply_filters(&sample(), &state)
            .iter()
            .map(|t| t.popularity)
            .collect();
        assert_eq!(popularity, vec![80, 90, 70]);
    }

    #[test]
    fn year_range_is_inclusive() {
        let state = FilterState::new(Vec::<String>::new(), 0, YearRange::new(2010, 2019));
        let years: Vec<i32> = apply_filters(&sample(), &state).iter().map(|t| t.year).collect();
        assert_eq!(years, vec![2010, 2015, 2019]);
    }

    #[test]
    fn inverted_year_range_matches_nothing() {
        let state = FilterState::new(Vec::<String>::new(), 0, YearRange::new(2020, 2010));
        assert!(apply_filters(&sample(), &state).is_empty());
        assert!(YearRange::new(2020, 2010).is_empty());
    }

    #[test]
    fn extreme_ranges_do_not_overflow() {
        assert!(YearRange::new(i32::MAX, i32::MIN).is_empty());
        assert_eq!(YearRange::new(i32::MIN, i32::MAX).len() as u64, 1 << 32);
        assert_eq!(YearRange::new(2023, 2023).len(), 1);
    }

    #[test]
    fn filtering_is_idempotent() {
        let states = [
            FilterState::default(),
            FilterState::new(["pop"], 60, YearRange::new(2005, 2020)),
            FilterState::new(["rock", "jazz"], 0, YearRange::FULL),
        ];
        for state in states {
            let once = apply_filters(&sample(), &state);
            let twice = apply_filters(&once, &state);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn default_state_keeps_the_validated_dataset() {
        let validated = validate(sample());
        assert_eq!(apply_filters(&validated, &FilterState::default()), validated);
    }

    #[test]
    fn constructor_dedups_and_clamps() {
        let state = FilterState::new(["Pop", " pop ", "", "rock"], 250, YearRange::FULL);
        assert_eq!(state.selected_genres(), ["pop", "rock"]);
        assert_eq!(state.min_popularity(), POPULARITY_MAX);
    }

    #[test]
    fn default_state() {
        let state = FilterState::default();
        assert!(state.selected_genres().is_empty());
        assert_eq!(state.min_popularity(), 0);
        assert_eq!(state.year_range(), YearRange::new(2000, 2023));
        assert_eq!(state.year_range().len(), 24);
        assert!(state.is_default());
    }

    #[test]
    fn state_serializes() {
        let state = FilterState::new(["pop"], 10, YearRange::new(2001, 2002));
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["selected_genres"][0], "pop");
        assert_eq!(json["year_range"]["min"], 2001);
    }
}
