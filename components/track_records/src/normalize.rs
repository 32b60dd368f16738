use crate::raw::RawRow;
use crate::schema::{ArtistSyntax, Feature, Measure, SourceFormat};
use crate::track::{Track, TrackId, FALLBACK_GENRE, UNKNOWN_TEXT};

/// Convert one raw row into a canonical [`Track`].
///
/// Never fails: every field that is missing or unparseable falls back to the
/// format's default. Apart from a freshly generated id (for rows without an
/// `id` column) the result depends only on the row and the format.
pub fn normalize(row: &RawRow, format: SourceFormat) -> Track {
    let id = row
        .text(format.id_aliases())
        .map(|id| TrackId::new(id.trim()))
        .unwrap_or_else(TrackId::generate);

    let name = row
        .text(format.name_aliases())
        .map(|name| name.trim().to_string())
        .unwrap_or_else(|| UNKNOWN_TEXT.to_string());

    let artist = row
        .text(format.artist_aliases())
        .map(|artist| match format.artist_syntax() {
            ArtistSyntax::Plain => artist.trim().to_string(),
            ArtistSyntax::BracketedList => first_artist(artist),
        })
        .filter(|artist| !artist.is_empty())
        .unwrap_or_else(|| UNKNOWN_TEXT.to_string());

    let genre = row
        .text(format.genre_aliases())
        .map(|genre| genre.trim().to_lowercase())
        .unwrap_or_else(|| FALLBACK_GENRE.to_string());

    let measure = |measure: Measure| {
        let field = format.measure(measure);
        row.number(field.aliases).unwrap_or(field.default)
    };

    let duration = format.measure(Measure::Duration);
    let duration_ms = row
        .number(duration.aliases)
        .map(|raw| format.duration_to_ms(raw))
        .unwrap_or(duration.default);

    let feature = |feature: Feature| {
        let field = format.feature(feature);
        row.number(field.aliases)
            .map(|raw| format.feature_scale().to_fraction(raw))
            .unwrap_or(field.default)
    };

    Track {
        id,
        name,
        artist,
        year: measure(Measure::Year).round() as i32,
        genre,
        popularity: measure(Measure::Popularity).round() as i32,
        danceability: feature(Feature::Danceability),
        energy: feature(Feature::Energy),
        acousticness: feature(Feature::Acousticness),
        valence: feature(Feature::Valence),
        speechiness: feature(Feature::Speechiness),
        instrumentalness: feature(Feature::Instrumentalness),
        liveness: feature(Feature::Liveness),
        loudness: measure(Measure::Loudness),
        tempo: measure(Measure::Tempo),
        duration_ms: duration_ms.round() as i64,
    }
}

/// First name of a bracketed artist list such as `['A', 'B']`.
///
/// List punctuation and quotes are stripped; a plain name passes through.
pub fn first_artist(list: &str) -> String {
    let stripped: String = list
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | '\'' | '"'))
        .collect();

    stripped
        .split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}
