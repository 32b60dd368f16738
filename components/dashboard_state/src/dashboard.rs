use genre_palette::resolve_color;
use tracing::{debug, info, warn};
use track_aggregates::{
    artist_profile, genre_filter_options, scatter_points, top_artists_by_popularity,
    top_genres_by_count, unique_genres, year_genre_series,
};
use track_query::{apply_filters, FilterCommand, FilterState};
use track_records::Dataset;

use crate::config::DashboardConfig;
use crate::error::SelectionError;
use crate::radar_selection::RadarSelection;
use crate::renderer::Renderer;
use crate::view::{DashboardView, GenreOption, RadarSeries, ScatterDot, TimelineLayer};

/// Owns the baseline, the filter state and the radar selection, and
/// re-renders after every change.
///
/// Views derived from the filtered tracks: the track list, scatter and
/// timeline counts. Views derived from the whole baseline: genre options,
/// timeline layers, the top artist ranking and radar profiles.
pub struct Dashboard<R: Renderer> {
    dataset: Dataset,
    config: DashboardConfig,
    filters: FilterState,
    radar: RadarSelection,
    timeline_genres: Vec<String>,
    view: DashboardView,
    renderer: R,
}

impl<R: Renderer> Dashboard<R> {
    pub fn new(dataset: Dataset, config: DashboardConfig, renderer: R) -> Self {
        Self::with_state(dataset, config, FilterState::default(), renderer)
    }

    /// Starts from `filters` instead of the default state. Renders once.
    pub fn with_state(dataset: Dataset, config: DashboardConfig, filters: FilterState, renderer: R) -> Self {
        info!(
            tracks = dataset.len(),
            genres = unique_genres(&dataset).len(),
            "installing dataset"
        );
        let timeline_genres = top_genres_by_count(&dataset, config.timeline_genres);
        let radar = RadarSelection::new(config.max_radar_artists);
        let view = compute_view(&dataset, &config, &filters, &radar, &timeline_genres);

        let mut dashboard = Self {
            dataset,
            config,
            filters,
            radar,
            timeline_genres,
            view,
            renderer,
        };
        dashboard.renderer.render(&dashboard.view);
        dashboard
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn radar(&self) -> &RadarSelection {
        &self.radar
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Applies one filter action, recomputes and renders once
    pub fn dispatch(&mut self, command: &FilterCommand) -> &DashboardView {
        self.filters = self.filters.apply(command);
        self.refresh();
        &self.view
    }

    /// Adds an artist to the radar. Re-renders only when the selection
    /// changed; `Ok(false)` means the artist was already there.
    pub fn select_artist(&mut self, artist: &str) -> Result<bool, SelectionError> {
        if !self.dataset.iter().any(|t| t.artist == artist) {
            warn!(artist, "rejected radar artist without tracks");
            return Err(SelectionError::UnknownArtist(artist.to_string()));
        }

        let added = self.radar.add(artist).inspect_err(|error| {
            warn!(artist, %error, "rejected radar artist");
        })?;
        if added {
            self.refresh();
        }
        Ok(added)
    }

    pub fn deselect_artist(&mut self, artist: &str) -> bool {
        let removed = self.radar.remove(artist);
        if removed {
            self.refresh();
        }
        removed
    }

    /// Installs a new baseline. The filter state is kept; radar artists
    /// missing from the new baseline are dropped.
    pub fn reload(&mut self, dataset: Dataset) {
        info!(
            tracks = dataset.len(),
            genres = unique_genres(&dataset).len(),
            "installing new dataset"
        );
        self.dataset = dataset;
        self.timeline_genres = top_genres_by_count(&self.dataset, self.config.timeline_genres);

        let gone: Vec<String> = self
            .radar
            .artists()
            .iter()
            .filter(|artist| !self.dataset.iter().any(|t| t.artist == **artist))
            .cloned()
            .collect();
        for artist in gone {
            self.radar.remove(&artist);
        }

        self.refresh();
    }

    fn refresh(&mut self) {
        self.view = compute_view(
            &self.dataset,
            &self.config,
            &self.filters,
            &self.radar,
            &self.timeline_genres,
        );
        self.renderer.render(&self.view);
    }
}

fn compute_view(
    dataset: &Dataset,
    config: &DashboardConfig,
    filters: &FilterState,
    radar: &RadarSelection,
    timeline_genres: &[String],
) -> DashboardView {
    let filtered = apply_filters(dataset, filters);
    debug!(total = dataset.len(), filtered = filtered.len(), "recomputing views");

    DashboardView {
        filters: filters.clone(),
        total_tracks: dataset.len(),
        filtered_tracks: filtered.len(),
        scatter: scatter_points(&filtered).into_iter().map(ScatterDot::from).collect(),
        genre_options: genre_filter_options(dataset, config.genre_options)
            .into_iter()
            .map(|count| GenreOption::new(count, filters))
            .collect(),
        timeline_layers: timeline_genres
            .iter()
            .map(|genre| TimelineLayer {
                genre: genre.clone(),
                color: resolve_color(genre),
            })
            .collect(),
        timeline: year_genre_series(&filtered, filters.year_range(), timeline_genres),
        top_artists: top_artists_by_popularity(dataset, config.top_artists),
        radar: radar
            .artists()
            .iter()
            .enumerate()
            .map(|(slot, artist)| RadarSeries {
                color: RadarSelection::color(slot),
                profile: artist_profile(dataset, artist),
            })
            .collect(),
        tracks: filtered,
    }
}
