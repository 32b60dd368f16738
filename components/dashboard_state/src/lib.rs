mod config;
mod dashboard;
mod error;
mod radar_selection;
mod renderer;
mod view;

pub use config::DashboardConfig;
pub use dashboard::Dashboard;
pub use error::SelectionError;
pub use radar_selection::{RadarSelection, RADAR_COLORS};
pub use renderer::Renderer;
pub use view::{DashboardView, GenreOption, RadarSeries, ScatterDot, TimelineLayer};
