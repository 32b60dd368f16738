use clap::Parser;

/// Explore song data sets from the terminal
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Data files, as `path`, `path:best-songs` or `path:main-data`.
    ///
    /// Without a suffix the layout is detected from the header row.
    #[arg(required = true, value_name = "SOURCE")]
    pub sources: Vec<String>,

    /// Only show genres containing this text (repeatable)
    #[arg(short, long)]
    pub genre: Vec<String>,

    /// Lowest popularity to show (0-100)
    #[arg(long, value_name = "N")]
    pub min_popularity: Option<i32>,

    /// First year to show
    #[arg(long, value_name = "YEAR")]
    pub year_min: Option<i32>,

    /// Last year to show
    #[arg(long, value_name = "YEAR")]
    pub year_max: Option<i32>,

    /// Size of the artist popularity ranking
    #[arg(long, value_name = "N")]
    pub top_artists: Option<usize>,

    /// Compare this artist on the radar (repeatable, at most 4)
    #[arg(short, long)]
    pub artist: Vec<String>,

    /// Print every view as one JSON line
    #[arg(long)]
    pub json: bool,

    /// Read filter commands from stdin after the first view
    #[arg(short, long)]
    pub interactive: bool,

    /// Show error causes
    #[arg(short, long)]
    pub verbose: bool,
}
