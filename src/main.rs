//! Interactive text front-end for the Sperm Analyzer shell

use std::sync::Arc;

use anyhow::Context;
use networking::{ConnectivityMonitor, HttpHealthProbe};
use sperm_analyzer::console::{render_home, render_modal, render_status, render_tab_bar, HELP};
use sperm_analyzer::{parse_command, App, Command, CommandError, Outcome, ShellConfig};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they do not interleave with rendered screens
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ShellConfig::load_from_env().context("Failed to load configuration")?;
    let mut app = App::new(&config).context("Invalid shell configuration")?;

    let probe = HttpHealthProbe::new(&config.probe_config())
        .context("Failed to build backend health probe")?;
    tracing::info!(url = probe.url(), "Monitoring backend");
    let monitor = ConnectivityMonitor::new(Arc::new(probe), app.status_store().clone());
    let polling = tokio::spawn(monitor.clone().run(config.health_interval()));

    println!("{}\n", render_tab_bar(&app.tab_bar()));
    println!("{}\n", render_home(&app.home_view()));
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{}", HELP),
            Command::Home => println!("{}", render_home(&app.home_view())),
            Command::Status => println!("{}", render_status(&app.home_view().status)),
            Command::Probe => {
                monitor.refresh().await;
                println!("{}", render_status(&app.home_view().status));
            }
            Command::Event(event) => match app.dispatch(event) {
                Ok(Outcome::Modal(modal)) => println!("{}", render_modal(&modal)),
                Ok(Outcome::StatusChanged(_)) => {
                    println!("{}", render_status(&app.home_view().status))
                }
                Ok(Outcome::Unchanged) => {}
                Ok(_) => println!("{}", render_tab_bar(&app.tab_bar())),
                Err(e) => println!("{}", e),
            },
        }
    }

    polling.abort();
    Ok(())
}
