use genre_palette::{resolve_color, ColorId};
use serde::Serialize;
use track_aggregates::{ArtistPopularity, ArtistProfile, GenreCount, ScatterPoint, YearGenreCounts};
use track_query::FilterState;
use track_records::Track;

/// Scatter point with the colour of its genre
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterDot {
    #[serde(flatten)]
    pub point: ScatterPoint,
    pub color: ColorId,
}

impl From<ScatterPoint> for ScatterDot {
    fn from(point: ScatterPoint) -> Self {
        let color = resolve_color(&point.genre);
        Self { point, color }
    }
}

/// Genre checkbox
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreOption {
    pub genre: String,
    pub count: usize,
    pub color: ColorId,
    pub selected: bool,
}

impl GenreOption {
    pub(crate) fn new(count: GenreCount, filters: &FilterState) -> Self {
        let selected = filters.selected_genres().iter().any(|g| *g == count.genre);
        Self {
            color: resolve_color(&count.genre),
            genre: count.genre,
            count: count.count,
            selected,
        }
    }
}

/// One stacked band of the timeline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineLayer {
    pub genre: String,
    pub color: ColorId,
}

/// One artist polygon on the radar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarSeries {
    pub color: &'static str,
    #[serde(flatten)]
    pub profile: ArtistProfile,
}

/// Everything the renderer draws after one recompute
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub filters: FilterState,
    /// Size of the validated baseline
    pub total_tracks: usize,
    pub filtered_tracks: usize,
    /// Tracks passing the filters, in dataset order
    pub tracks: Vec<Track>,
    pub scatter: Vec<ScatterDot>,
    pub genre_options: Vec<GenreOption>,
    pub timeline_layers: Vec<TimelineLayer>,
    pub timeline: Vec<YearGenreCounts>,
    /// Radar artist picker, ranked over the whole baseline
    pub top_artists: Vec<ArtistPopularity>,
    pub radar: Vec<RadarSeries>,
}
