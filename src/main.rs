// src/main.rs

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use crossterm::{
    ExecutableCommand,
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::io::{Stdout, stdout};
use tokio::sync::mpsc;
use tracing::{error, info};

use critic_tui::app::App;
use critic_tui::config::Cli;
use critic_tui::controller::{self, AppEvent};
use critic_tui::core::client::AnalysisClient;
use critic_tui::{logging, ui};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let log_path = logging::initialize_logging().wrap_err("failed to set up logging")?;

    let client = AnalysisClient::new(&cli.server)
        .wrap_err_with(|| format!("cannot use server {}", cli.server))?;
    info!(server = %cli.server, log = %log_path.display(), "Starting critic-tui.");

    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableBracketedPaste)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let outcome = run(&mut terminal, &cli, client).await;

    // --- Restore Terminal ---
    stdout().execute(DisableBracketedPaste)?;
    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;

    if let Err(e) = &outcome {
        error!(error = %e, "critic-tui stopped with an error.");
    }
    outcome
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    cli: &Cli,
    client: AnalysisClient,
) -> Result<()> {
    let mut app = App::new();
    let (tx, mut rx) = mpsc::channel::<AppEvent>(8);

    controller::spawn_usage_fetch(client.clone(), tx.clone());

    while !app.should_quit {
        terminal.draw(|frame| ui::render(&app, frame))?;

        if event::poll(cli.tick_rate())? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(request) = app.handle_key(key) {
                        controller::spawn_analysis(client.clone(), request, tx.clone());
                    }
                }
                Event::Paste(text) => app.handle_paste(&text),
                _ => {}
            }
        }

        while let Ok(event) = rx.try_recv() {
            app.handle_event(event);
        }
        app.on_tick();
    }

    info!("Quit requested.");
    Ok(())
}
