use sakuseikan::app::{App, AppMessage};
use sakuseikan::cli::{handle_help_command, handle_version_command, parse_args, CliCommand, USAGE};
use sakuseikan::config::StartupConfig;
use sakuseikan::error::SakuseiError;
use sakuseikan::logging::init_logging;
use sakuseikan::terminal::{setup_panic_hook, TerminalManager};
use sakuseikan::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tokio::sync::mpsc;

/// Frame interval for the animation tick.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    // Handle flags before any terminal setup
    let options = match parse_args(std::env::args()) {
        CliCommand::Version => {
            handle_version_command();
            return Ok(());
        }
        CliCommand::Help => {
            handle_help_command();
            return Ok(());
        }
        CliCommand::Invalid(message) => {
            eprintln!("error: {}\n\n{}", message, USAGE);
            std::process::exit(2);
        }
        CliCommand::Run(options) => options,
    };

    color_eyre::install()?;

    // Must be installed before config loading, which can warn
    let log_path = init_logging();
    let config = StartupConfig::from_env().with_run_options(options);
    tracing::info!(?config, log = ?log_path, "Starting sakuseikan {}", sakuseikan::cli::VERSION);

    let pools = match config.load_pools() {
        Ok(pools) => pools,
        Err(e) => exit_with(e.into()),
    };

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let mut app = App::from_config(&config, pools);

        let mut term_manager = match TerminalManager::new() {
            Ok(manager) => manager,
            Err(e) => exit_with(e),
        };
        let size = term_manager.size()?;
        app.update_terminal_dimensions(size.width, size.height);

        let result = run_app(term_manager.terminal(), &mut app).await;

        app.shutdown();
        term_manager.restore()?;
        result
    })
}

/// Log a startup failure, print it for the user and exit.
fn exit_with(err: SakuseiError) -> ! {
    if err.is_user_fixable() {
        tracing::warn!("Startup stopped: {}", err);
    } else {
        tracing::error!("Startup failed: {}", err);
    }
    eprintln!("Error: {}", err.user_message());
    std::process::exit(1);
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(TICK_INTERVAL);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Resize(width, height))) => {
                        app.update_terminal_dimensions(width, height);
                        continue;
                    }
                    Some(Ok(event)) => app.handle_terminal_event(event),
                    Some(Err(e)) => tracing::warn!("Terminal event error: {}", e),
                    None => {
                        tracing::info!("Terminal event stream closed");
                        app.quit();
                    }
                }
            }

            Some(message) = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_message(message);
            }
        }

        if app.should_quit {
            tracing::info!("Quit requested");
            return Ok(());
        }
    }
}
