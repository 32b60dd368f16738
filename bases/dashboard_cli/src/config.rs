use dashboard_state::DashboardConfig;
use std::path::PathBuf;
use track_query::{FilterCommand, FilterState, YearRange};
use track_records::SourceFormat;

use crate::args::CliArgs;

/// One data file and its layout, when given
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpec {
    pub path: PathBuf,
    pub format: Option<SourceFormat>,
}

impl SourceSpec {
    /// `path:best-songs` and `path:main-data` pin the layout. Any other
    /// text after the last colon is part of the path.
    pub fn parse(text: &str) -> Self {
        if let Some((path, suffix)) = text.rsplit_once(':') {
            if let Ok(format) = suffix.parse::<SourceFormat>() {
                return Self {
                    path: PathBuf::from(path),
                    format: Some(format),
                };
            }
        }
        Self {
            path: PathBuf::from(text),
            format: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub sources: Vec<SourceSpec>,
    pub dashboard: DashboardConfig,
    /// Starting filter state
    pub filters: FilterState,
    /// Artists put on the radar at startup
    pub radar_artists: Vec<String>,
    pub json: bool,
    pub interactive: bool,
    pub verbose: bool,
}

impl Config {
    pub fn from_args(args: CliArgs) -> Self {
        let mut dashboard = DashboardConfig::default();
        if let Some(top_artists) = args.top_artists {
            dashboard.top_artists = top_artists;
        }

        // Same clamping as the interactive controls
        let commands = [
            args.min_popularity.map(FilterCommand::SetMinPopularity),
            args.year_min.map(FilterCommand::SetYearMin),
            args.year_max.map(FilterCommand::SetYearMax),
        ];
        let filters = commands
            .iter()
            .flatten()
            .fold(FilterState::new(&args.genre, 0, YearRange::FULL), |state, command| {
                state.apply(command)
            });

        Self {
            sources: args.sources.iter().map(|s| SourceSpec::parse(s)).collect(),
            dashboard,
            filters,
            radar_artists: args.artist,
            json: args.json,
            interactive: args.interactive,
            verbose: args.verbose,
        }
    }
}
