use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use dashboard_state::{Dashboard, Renderer};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use crate::commands::{parse_command, Command, HELP};
use crate::config::Config;
use crate::loader::load_dataset;
use crate::output::OutputHandler;

pub struct App {
    config: Config,
    output: OutputHandler,
}

impl App {
    pub fn new(config: Config) -> Self {
        let output = OutputHandler::new(config.json, config.verbose);
        Self { config, output }
    }

    pub async fn run(&self) -> Result<()> {
        let (dataset, report) = load_dataset(&self.config.sources)
            .await
            .wrap_err("failed to load track data")?;
        self.output.print_load_report(&report);

        // Startup selections render once, at the end
        let mut renderer = self.output;
        renderer.set_muted(true);
        let mut dashboard = Dashboard::with_state(
            dataset,
            self.config.dashboard,
            self.config.filters.clone(),
            renderer,
        );
        for artist in &self.config.radar_artists {
            dashboard
                .select_artist(artist)
                .wrap_err_with(|| format!("cannot compare artist {artist}"))?;
        }
        info!(
            tracks = dashboard.dataset().len(),
            dropped = report.dropped,
            radar = dashboard.radar().len(),
            "dashboard ready"
        );
        dashboard.renderer_mut().set_muted(false);
        show(&mut dashboard);

        if self.config.interactive {
            self.interact(&mut dashboard).await?;
        }
        Ok(())
    }

    async fn interact(&self, dashboard: &mut Dashboard<OutputHandler>) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        eprintln!("type `help` for commands");

        while let Some(line) = lines.next_line().await.wrap_err("failed to read stdin")? {
            let command = match parse_command(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(error) => {
                    self.output.print_warning(&error);
                    continue;
                }
            };
            debug!(?command, "interactive command");

            match command {
                Command::Filter(filter) => {
                    dashboard.dispatch(&filter);
                }
                Command::SelectArtist(artist) => {
                    if let Err(error) = dashboard.select_artist(&artist) {
                        self.output.print_warning(&error);
                    }
                }
                Command::DeselectArtist(artist) => {
                    if !dashboard.deselect_artist(&artist) {
                        self.output.print_warning(&format!("{artist} is not on the radar"));
                    }
                }
                Command::Show => show(dashboard),
                Command::Help => self.output.print_help(HELP),
                Command::Quit => break,
            }
        }
        Ok(())
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        self.output.print_error(error);
    }
}

/// Renders the current view again without a recompute
fn show(dashboard: &mut Dashboard<OutputHandler>) {
    let view = dashboard.view().clone();
    dashboard.renderer_mut().render(&view);
}
