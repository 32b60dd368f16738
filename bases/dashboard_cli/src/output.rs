use dashboard_state::{DashboardView, Renderer};
use std::fmt;
use track_records::ValidationReport;

/// Shown rows of the longer lists in text mode
const TEXT_ROWS: usize = 10;

/// Writes views to stdout, either as text or as one JSON line each
#[derive(Debug, Clone, Copy)]
pub struct OutputHandler {
    json: bool,
    verbose: bool,
    muted: bool,
}

impl OutputHandler {
    pub fn new(json: bool, verbose: bool) -> Self {
        Self {
            json,
            verbose,
            muted: false,
        }
    }

    /// Suppresses renders until unmuted
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn print_load_report(&self, report: &ValidationReport) {
        if !self.json {
            println!(
                "Loaded {} tracks ({} of {} rows dropped by validation)",
                report.kept,
                report.dropped,
                report.total()
            );
        }
    }

    pub fn print_help(&self, help: &str) {
        eprintln!("{help}");
    }

    pub fn print_warning(&self, warning: &dyn fmt::Display) {
        eprintln!("Warning: {warning}");
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        eprintln!("Error: {error}");

        if self.verbose {
            eprintln!("\nError details:");
            error.chain().skip(1).for_each(|cause| {
                eprintln!("  caused by: {cause}");
            });
        }
    }
}

impl Renderer for OutputHandler {
    fn render(&mut self, view: &DashboardView) {
        if self.muted {
            return;
        }
        if self.json {
            match serde_json::to_string(view) {
                Ok(line) => println!("{line}"),
                Err(error) => self.print_warning(&error),
            }
        } else {
            print!("{}", TextView(view));
        }
    }
}

/// Plain text rendering of every view
pub struct TextView<'a>(pub &'a DashboardView);

impl fmt::Display for TextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        let filters = &view.filters;

        let genres = if filters.selected_genres().is_empty() {
            "all".to_string()
        } else {
            filters.selected_genres().join(", ")
        };
        writeln!(f, "== {} of {} tracks ==", view.filtered_tracks, view.total_tracks)?;
        writeln!(
            f,
            "genres: {genres} | popularity >= {} | years {}",
            filters.min_popularity(),
            filters.year_range()
        )?;

        writeln!(f, "\nGenres")?;
        for option in &view.genre_options {
            let mark = if option.selected { 'x' } else { ' ' };
            writeln!(f, "  [{mark}] {:<24} {:>5}  {}", option.genre, option.count, option.color)?;
        }

        writeln!(f, "\nTracks (danceability, energy)")?;
        for dot in view.scatter.iter().take(TEXT_ROWS) {
            writeln!(f, "  {:.2} {:.2}  {}", dot.point.x, dot.point.y, dot.point.label)?;
        }
        if view.scatter.len() > TEXT_ROWS {
            writeln!(f, "  ... {} more", view.scatter.len() - TEXT_ROWS)?;
        }

        writeln!(f, "\nTracks per year")?;
        let header: Vec<&str> = view.timeline_layers.iter().map(|l| l.genre.as_str()).collect();
        writeln!(f, "  year  {}", header.join(" | "))?;
        for year in view.timeline.iter().filter(|y| y.total() > 0) {
            let counts: Vec<String> = year.counts.iter().map(|c| c.count.to_string()).collect();
            writeln!(f, "  {}  {}", year.year, counts.join(" | "))?;
        }

        writeln!(f, "\nTop artists")?;
        for (rank, artist) in view.top_artists.iter().take(TEXT_ROWS).enumerate() {
            writeln!(f, "  {:>2}. {:<32} {:.1}", rank + 1, artist.artist, artist.mean_popularity)?;
        }

        if !view.radar.is_empty() {
            writeln!(f, "\nRadar")?;
            for series in &view.radar {
                let values: Vec<String> = series
                    .profile
                    .values
                    .iter()
                    .map(|v| format!("{:?} {:.2}", v.axis, v.value))
                    .collect();
                writeln!(
                    f,
                    "  {} ({} tracks, {}): {}",
                    series.profile.artist,
                    series.profile.track_count,
                    series.color,
                    values.join(", ")
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_state::{Dashboard, DashboardConfig};
    use track_query::FilterCommand;
    use track_records::{Dataset, Track, TrackId};

    fn track(name: &str, artist: &str, genre: &str, year: i32) -> Track {
        Track {
            id: TrackId::generate(),
            name: name.to_string(),
            artist: artist.to_string(),
            year,
            genre: genre.to_string(),
            popularity: 70,
            danceability: 0.8,
            energy: 0.7,
            acousticness: 0.1,
            valence: 0.9,
            speechiness: 0.05,
            instrumentalness: 0.0,
            liveness: 0.1,
            loudness: -5.0,
            tempo: 120.0,
            duration_ms: 200_000,
        }
    }

    fn dashboard() -> Dashboard<OutputHandler> {
        let mut output = OutputHandler::new(false, false);
        output.set_muted(true);
        let dataset = Dataset::new(vec![
            track("Hit", "Star", "dance pop", 2010),
            track("Riff", "Band", "rock", 2015),
        ]);
        Dashboard::new(dataset, DashboardConfig::default(), output)
    }

    #[test]
    fn text_view_lists_every_section() {
        let mut dashboard = dashboard();
        dashboard.select_artist("Star").unwrap();
        let text = TextView(dashboard.view()).to_string();

        assert!(text.starts_with("== 2 of 2 tracks =="));
        assert!(text.contains("genres: all | popularity >= 0 | years 2000 - 2023"));
        assert!(text.contains("[ ] dance pop"));
        assert!(text.contains("0.80 0.70  Star - Hit"));
        assert!(text.contains("2015  0 | 1"));
        assert!(text.contains(" 1. Star"));
        assert!(text.contains("Star (1 tracks, #E91E63): Energy 0.70"));
    }

    #[test]
    fn text_view_marks_selected_genres() {
        let mut dashboard = dashboard();
        let text = TextView(dashboard.dispatch(&FilterCommand::ToggleGenre("rock".into()))).to_string();

        assert!(text.starts_with("== 1 of 2 tracks =="));
        assert!(text.contains("genres: rock |"));
        assert!(text.contains("[x] rock"));
        assert!(!text.contains("Radar"));
    }
}
