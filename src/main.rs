use calc_tui::app::App;
use calc_tui::cli::{parse_args, run_cli_command, CliCommand};
use calc_tui::config::CalcConfig;
use calc_tui::events::handle_event;
use calc_tui::terminal::{setup_panic_hook, TerminalManager};
use calc_tui::{logging, ui};

use color_eyre::Result;
use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::Terminal;

fn main() -> Result<()> {
    let command = parse_args(std::env::args());

    // Version and help never need config or logging.
    if matches!(command, CliCommand::Version | CliCommand::Help) {
        if let Some(output) = run_cli_command(command, &CalcConfig::default()) {
            println!("{}", output);
        }
        return Ok(());
    }

    color_eyre::install()?;

    let loaded = CalcConfig::try_load();
    let config = loaded
        .as_ref()
        .ok()
        .cloned()
        .unwrap_or_default()
        .with_env_overrides();

    match logging::init(&config) {
        Ok(path) => tracing::info!(log = %path.display(), "calc {} starting", calc_tui::cli::VERSION),
        Err(e) => eprintln!("Warning: logging disabled: {}", e),
    }
    if let Err(e) = loaded {
        tracing::warn!(category = %e.category(), "Using default config: {}", e);
    }

    if let Some(output) = run_cli_command(command, &config) {
        println!("{}", output);
        return Ok(());
    }

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut app = App::new(&config);
    let mut term_manager = TerminalManager::new()?;
    let result = runtime.block_on(run_app(term_manager.terminal(), &mut app));

    // Restore the terminal before reporting any error.
    drop(term_manager);
    tracing::info!("calc exiting");
    result
}

/// Event loop: draw when dirty, then handle exactly one terminal event.
async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            return Ok(());
        }

        match event_stream.next().await {
            Some(Ok(event)) => handle_event(app, event),
            Some(Err(e)) => {
                tracing::error!("Terminal event error: {}", e);
                return Err(e.into());
            }
            None => {
                tracing::warn!("Terminal event stream closed");
                return Ok(());
            }
        }
    }
}
