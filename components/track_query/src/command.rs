use serde::{Deserialize, Serialize};
use tracing::debug;
use track_records::{YEAR_MAX, YEAR_MIN};

use crate::filter::{normalize_genre, FilterState, YearRange, POPULARITY_MAX};

/// One logical user action on the filter controls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FilterCommand {
    /// Checkbox: add the genre if absent, remove it if present
    ToggleGenre(String),
    /// Popularity slider
    SetMinPopularity(i32),
    /// Lower year slider
    SetYearMin(i32),
    /// Upper year slider
    SetYearMax(i32),
    /// Brush selection on the timeline, in fractional years
    SetYearRange { from: f64, to: f64 },
    /// Back to no genres, popularity 0 and the full year range
    Reset,
}

impl FilterState {
    /// The state after `command`. Year bounds are clamped to the slider
    /// domain, popularity to 0-100.
    pub fn apply(&self, command: &FilterCommand) -> FilterState {
        let mut next = self.clone();

        match command {
            FilterCommand::ToggleGenre(genre) => {
                let genre = normalize_genre(genre);
                if genre.is_empty() {
                    return next;
                }
                match next.selected_genres.iter().position(|g| *g == genre) {
                    Some(index) => {
                        next.selected_genres.remove(index);
                    }
                    None => next.selected_genres.push(genre),
                }
            }
            FilterCommand::SetMinPopularity(value) => {
                next.min_popularity = (*value).clamp(0, POPULARITY_MAX);
            }
            FilterCommand::SetYearMin(year) => {
                next.year_range.min = clamp_year(*year);
            }
            FilterCommand::SetYearMax(year) => {
                next.year_range.max = clamp_year(*year);
            }
            FilterCommand::SetYearRange { from, to } => {
                next.year_range = YearRange::new(round_year(*from), round_year(*to));
            }
            FilterCommand::Reset => next = FilterState::default(),
        }

        debug!(?command, state = ?next, "filter state changed");
        next
    }
}

fn clamp_year(year: i32) -> i32 {
    year.clamp(YEAR_MIN, YEAR_MAX)
}

fn round_year(year: f64) -> i32 {
    if year.is_nan() {
        return YEAR_MIN;
    }
    clamp_year(year.round().clamp(i32::MIN as f64, i32::MAX as f64) as i32)
}
