use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::warn;
use track_records::Track;

use crate::group::group_by;

/// Shown instead of an empty genre chart
pub const FALLBACK_TOP_GENRES: [&str; 8] = [
    "pop",
    "rock",
    "hip hop",
    "electronic",
    "latin",
    "r&b",
    "country",
    "jazz",
];

const UNKNOWN_GENRE: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreCount {
    pub genre: String,
    pub count: usize,
}

/// Every genre with its track count, most common first
pub fn genre_counts(tracks: &[Track]) -> Vec<GenreCount> {
    let mut counts: Vec<GenreCount> = group_by(tracks, |t| t.genre.as_str())
        .into_iter()
        .map(|(genre, members)| GenreCount {
            genre: genre.to_string(),
            count: members.len(),
        })
        .collect();

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// The `n` most common genres offered as filter checkboxes
pub fn genre_filter_options(tracks: &[Track], n: usize) -> Vec<GenreCount> {
    let mut counts = genre_counts(tracks);
    counts.truncate(n);
    counts
}

/// Names of the `n` most common real genres.
///
/// Empty, "unknown" and genres shorter than three characters do not count.
/// When nothing qualifies the fixed [`FALLBACK_TOP_GENRES`] are returned.
pub fn top_genres_by_count(tracks: &[Track], n: usize) -> Vec<String> {
    let top: Vec<String> = genre_counts(tracks)
        .into_iter()
        .filter(|c| c.genre != UNKNOWN_GENRE && c.genre.chars().count() > 2)
        .take(n)
        .map(|c| c.genre)
        .collect();

    if top.is_empty() {
        warn!("no genres found, using defaults");
        return FALLBACK_TOP_GENRES.iter().map(|g| g.to_string()).collect();
    }
    top
}

/// Sorted distinct genres, cleaned up for display
pub fn unique_genres(tracks: &[Track]) -> Vec<String> {
    tracks
        .iter()
        .map(|t| t.genre.trim().to_lowercase())
        .filter(|g| g != UNKNOWN_GENRE && g.chars().count() >= 2)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::track;
    use rstest::rstest;

    fn tracks(genres: &[&str]) -> Vec<Track> {
        genres.iter().map(|g| track(g, 2010, 50, "Artist")).collect()
    }

    #[test]
    fn counts_sorted_descending() {
        let counts = genre_counts(&tracks(&["rock", "jazz", "jazz", "latin", "jazz", "rock"]));
        let pairs: Vec<(&str, usize)> = counts.iter().map(|c| (c.genre.as_str(), c.count)).collect();
        assert_eq!(pairs, vec![("jazz", 3), ("rock", 2), ("latin", 1)]);
    }

    #[test]
    fn ties_keep_first_appearance() {
        let input = tracks(&["folk", "soul", "blues", "soul", "folk", "blues"]);
        let first = top_genres_by_count(&input, 3);
        assert_eq!(first, vec!["folk", "soul", "blues"]);
        assert_eq!(top_genres_by_count(&input, 3), first);
    }

    #[test]
    fn top_genres_skip_unqualified() {
        let input = tracks(&["unknown", "unknown", "", "", "", "rb", "rb", "edm", "indie"]);
        assert_eq!(top_genres_by_count(&input, 8), vec!["edm", "indie"]);
    }

    #[rstest]
    #[case(&["rock", "rock", "jazz"], 1, &["rock"])]
    #[case(&["rock", "jazz", "jazz", "unknown", "unknown", "unknown"], 8, &["jazz", "rock"])]
    #[case(&["hip hop", "rb", "rb", "edm"], 8, &["hip hop", "edm"])]
    #[case(&["k-pop", "latin", "latin", "k-pop", "k-pop"], 2, &["k-pop", "latin"])]
    fn top_genres_table(#[case] genres: &[&str], #[case] n: usize, #[case] expected: &[&str]) {
        assert_eq!(top_genres_by_count(&tracks(genres), n), expected);
    }

    #[test]
    fn top_genres_takes_n() {
        let input = tracks(&["a1a", "b2b", "b2b", "c3c", "c3c", "c3c"]);
        assert_eq!(top_genres_by_count(&input, 2), vec!["c3c", "b2b"]);
    }

    #[test]
    fn fallback_when_nothing_qualifies() {
        let expected: Vec<String> = FALLBACK_TOP_GENRES.iter().map(|g| g.to_string()).collect();

        assert_eq!(top_genres_by_count(&[], 8), expected);
        assert_eq!(top_genres_by_count(&tracks(&["unknown", "rb", ""]), 8), expected);
        assert_eq!(top_genres_by_count(&[], 8).len(), 8);
    }

    #[test]
    fn filter_options_include_every_genre_kind() {
        let input = tracks(&["rb", "rb", "rock", "jazz", "jazz", "jazz"]);
        let options = genre_filter_options(&input, 2);
        assert_eq!(
            options,
            vec![
                GenreCount { genre: "jazz".into(), count: 3 },
                GenreCount { genre: "rb".into(), count: 2 },
            ]
        );
    }

    #[test]
    fn unique_genres_are_sorted_and_clean() {
        let input = tracks(&["rock", "Jazz ", "unknown", "x", "", "rock", "alt z"]);
        assert_eq!(unique_genres(&input), vec!["alt z", "jazz", "rock"]);
    }
}
