//! Chart-ready summaries of a track list.
//!
//! Every function here is pure: the same tracks give the same output, with
//! ties kept in first-appearance order.

mod artists;
mod genres;
mod group;
mod radar;
mod scatter;
mod timeline;

pub use artists::{top_artists_by_popularity, ArtistPopularity};
pub use genres::{
    genre_counts, genre_filter_options, top_genres_by_count, unique_genres, GenreCount,
    FALLBACK_TOP_GENRES,
};
pub use radar::{artist_profile, ArtistProfile, RadarAxis, RadarValue};
pub use scatter::{scatter_points, ScatterPoint};
pub use timeline::{year_genre_series, YearGenreCounts};
