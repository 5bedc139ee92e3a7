//! Lovewave CLI
//!
//! Animated ASCII-art greeting card for the terminal: a rotating playlist of
//! artworks with wave, bob and sparkle effects, wipe transitions and a
//! countdown, loaded from files, URLs, a manifest directory or inline text.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use crossterm::{cursor, terminal, QueueableCommand};
use lovewave::config::Config;
use lovewave::loader::{self, ArtSource};
use lovewave::scheduler::TICK_INTERVAL;
use lovewave::tui::App;
use lovewave::{Animator, Playlist, Scheduler};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Lovewave - animated ASCII-art greeting for the terminal
#[derive(Parser, Debug)]
#[command(name = "lovewave")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Inline ASCII art (frame markers allowed; pins the display to it)
    #[arg(long)]
    ascii: Option<String>,

    /// Artwork file or URL; repeat for a playlist
    #[arg(long = "art")]
    arts: Vec<String>,

    /// Directory or base URL holding a manifest.json of artwork files
    #[arg(long)]
    art_dir: Option<String>,

    /// Countdown length in seconds
    #[arg(short, long)]
    seconds: Option<u64>,

    /// Disable automatic artwork rotation
    #[arg(long)]
    no_rotate: bool,

    /// Seed for the sparkle effect (reproducible output)
    #[arg(long)]
    seed: Option<u64>,

    /// Path to a config file (default: ~/.config/lovewave/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start the countdown immediately instead of waiting for Space
    #[arg(long)]
    autostart: bool,

    /// Disable TUI and print frames to stdout
    #[arg(long)]
    no_tui: bool,

    /// Verbose output (plain mode only)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.no_tui {
        // Logging goes to the same stream as the frames, so it stays off in
        // TUI mode.
        let filter = if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    }

    let config = Config::load(cli.config.as_deref())?;
    let seconds = cli.seconds.unwrap_or(config.seconds);

    let source = ArtSource::resolve(cli.ascii, cli.arts, cli.art_dir, &config);
    let report = loader::load(&source).await;
    for err in &report.errors {
        warn!("{err}");
    }

    let rotate = !cli.no_rotate && config.rotate && !source.forces_single_artwork();

    let mut animator = Animator::new(Playlist::new(report.artworks))
        .with_auto_rotate(rotate)
        .with_effects_during_wipes(config.effects_during_wipes);
    if let Some(seed) = cli.seed {
        animator = animator.with_seed(seed);
    }
    let mut scheduler = Scheduler::new(animator, seconds);

    if cli.no_tui {
        run_plain_mode(scheduler).await
    } else {
        if cli.autostart {
            scheduler.start();
        }
        let mut app = App::new(scheduler, report.description, report.errors)?;
        app.run()?;
        Ok(())
    }
}

/// Render frames straight to stdout until the countdown runs out or Ctrl+C.
async fn run_plain_mode(mut scheduler: Scheduler) -> anyhow::Result<()> {
    info!("Starting lovewave (plain mode)");
    scheduler.start();

    let mut interval = tokio::time::interval(TICK_INTERVAL);
    loop {
        tokio::select! {
            _ = interval.tick() => {
                let outcome = scheduler.tick();
                if outcome.stopped {
                    println!("\nTime's up. <3");
                    break;
                }
                if let Some(frame) = outcome.frame {
                    let mut stdout = io::stdout();
                    stdout.queue(cursor::MoveTo(0, 0))?;
                    stdout.queue(terminal::Clear(terminal::ClearType::All))?;
                    for line in frame.text.lines() {
                        write!(stdout, "{}\r\n", line)?;
                    }
                    write!(
                        stdout,
                        "\r\n  \x1b[36m{}\x1b[0m \u{2022} \x1b[1;33m{}s\x1b[0m remaining \u{2022} Ctrl+C to quit\r\n",
                        frame.label, outcome.remaining_secs
                    )?;
                    stdout.flush()?;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                scheduler.stop();
                println!();
                break;
            }
        }
    }

    Ok(())
}
