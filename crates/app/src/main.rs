use std::sync::Arc;
use std::time::Duration;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::Instant;
use tracing::{debug, info, warn};

use services::{AppServices, ClientConfig, HostShell, ScheduledAdvance};
use ui::RaterController;

mod commands;
mod demo;
mod render;

use commands::{Command as Input, HELP, parse_command};

#[derive(Debug, Parser)]
#[command(name = "rater", version, about = "Rate profiles from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Backend base URL (overrides RATER_API_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Identity token sent with every request (overrides RATER_INIT_DATA)
    #[arg(long, global = true)]
    init_data: Option<String>,

    /// Pause before the next profile after a rating, in milliseconds
    #[arg(long, global = true)]
    advance_delay_ms: Option<u64>,

    /// Request timeout in milliseconds
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
enum Command {
    /// Talk to the HTTP backend (default)
    Ui,
    /// Use a seeded in-process backend
    Demo,
}

/// Host shell for a terminal session: alerts go to stdout.
struct TerminalHost {
    identity_token: String,
}

impl HostShell for TerminalHost {
    fn identity_token(&self) -> String {
        self.identity_token.clone()
    }

    fn show_alert(&self, message: &str) {
        println!("\n! {message}\n");
    }

    fn expand(&self) {
        debug!("terminal host: expand is a no-op");
    }

    fn enable_closing_confirmation(&self) {
        debug!("terminal host: quit asks no confirmation");
    }
}

fn build_config(cli: &Cli) -> anyhow::Result<ClientConfig> {
    let mut config = ClientConfig::from_env().context("reading RATER_* environment")?;

    if let Some(url) = &cli.base_url {
        let token = config.identity_token().to_string();
        let delay = config.advance_delay();
        let timeout = config.timeout();
        config = ClientConfig::new(url.as_str())?
            .with_identity_token(token)
            .with_advance_delay(delay)
            .with_timeout(timeout);
    }
    if let Some(token) = &cli.init_data {
        config = config.with_identity_token(token.as_str());
    }
    if let Some(ms) = cli.advance_delay_ms {
        config = config.with_advance_delay(Duration::from_millis(ms));
    }
    if let Some(ms) = cli.timeout_ms {
        config = config.with_timeout(Some(Duration::from_millis(ms)));
    }
    Ok(config)
}

fn print_screen(controller: &RaterController<Arc<TerminalHost>>) {
    let card = controller.profile_card();
    let board = controller.leaderboard();
    print!(
        "{}",
        render::render_screen(card.as_ref(), &controller.rating_panel(), board.as_ref())
    );
    println!("> ");
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Ui);
    let config = build_config(&cli)?;

    let host = Arc::new(TerminalHost {
        identity_token: config.identity_token().to_string(),
    });
    if host.identity_token().is_empty() {
        warn!("identity token unavailable, running in development mode");
    }

    let services = match command {
        Command::Ui => {
            info!(base_url = config.base_url(), "using HTTP backend");
            AppServices::http_with_host(&config, Arc::clone(&host))?
        }
        Command::Demo => {
            info!("using seeded in-process backend");
            AppServices::with_api(Arc::new(demo::seeded_api()?), config.advance_delay())
        }
    };

    let mut controller = RaterController::new(&services, host);
    controller.start().await;
    print_screen(&controller);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut pending: Option<(ScheduledAdvance, Instant)> = None;

    loop {
        let deadline =
            pending.map_or_else(|| Instant::now() + Duration::from_secs(3600), |(_, at)| at);

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match parse_command(&line) {
                    Ok(Input::Quit) => break,
                    Ok(Input::Help) => println!("{HELP}"),
                    Ok(Input::Intent(intent)) => {
                        if let Some(next) = controller.dispatch(intent).await {
                            pending = Some((next, Instant::now() + next.delay()));
                        }
                        if let Some((next, _)) = pending {
                            if !controller.workflow().is_advance_current(&next) {
                                debug!("pending advance cancelled by a manual load");
                                pending = None;
                            }
                        }
                    }
                    Err(err) => println!("{err}"),
                }
                print_screen(&controller);
            }
            () = tokio::time::sleep_until(deadline), if pending.is_some() => {
                if let Some((next, _)) = pending.take() {
                    controller.advance(next).await;
                    print_screen(&controller);
                }
            }
        }
    }

    info!("bye");
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err:#}");
        std::process::exit(2);
    }
}
