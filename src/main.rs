//! `sdplayer-browser` — browse a remote player's files from the terminal.
//!
//! Lists the start directory, polls playback status in the background and
//! reads commands from stdin:
//! - `ls` / `refresh`: list the current directory again
//! - `open N`: enter directory N or play file N
//! - `up`, `root`: navigate
//! - `stop`: stop playback
//! - `quit`

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use sdplayer_browser::{
    render::entry_icon, ClientConfig, DirectoryBrowserController, HttpPlayerApi, ListingRow, View,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::error;
use tracing_subscriber::EnvFilter;

const HELP: &str = "commands: ls | refresh | open N | up | root | stop | help | quit";

#[derive(Parser, Debug)]
#[command(name = "sdplayer-browser", version, about)]
struct Args {
    /// Base URL of the player, e.g. http://192.168.1.20
    #[arg(long)]
    server: Option<String>,

    /// Optional TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Status poll period in milliseconds.
    #[arg(long)]
    poll_ms: Option<u64>,

    /// Directory to list on startup.
    #[arg(long)]
    start_dir: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Browse(Action),
    Help,
    Quit,
}

/// Commands that talk to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Refresh,
    /// 1-based row number as printed
    Open(usize),
    Up,
    Root,
    Stop,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let arg = parts.next();

        match (cmd, arg) {
            ("ls" | "refresh", None) => Ok(Command::Browse(Action::Refresh)),
            ("up", None) => Ok(Command::Browse(Action::Up)),
            ("root", None) => Ok(Command::Browse(Action::Root)),
            ("stop", None) => Ok(Command::Browse(Action::Stop)),
            ("help" | "?", None) => Ok(Command::Help),
            ("quit" | "q" | "exit", None) => Ok(Command::Quit),
            ("open", Some(n)) => match n.parse::<usize>() {
                Ok(n) if n > 0 => Ok(Command::Browse(Action::Open(n))),
                _ => Err(format!("bad row number '{n}'")),
            },
            _ => Err(format!("unknown command '{}'; {HELP}", line.trim())),
        }
    }
}

/// Escape control characters so server-supplied text cannot drive the terminal
fn console_safe(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_control() {
            out.extend(c.escape_default());
        } else {
            out.push(c);
        }
    }
    out
}

/// Prints path, rows and status lines to stdout
struct ConsoleView;

impl View for ConsoleView {
    fn set_path(&self, path: &str) {
        println!("== {}", console_safe(path));
    }

    fn render_listing(&self, rows: &[ListingRow]) {
        if rows.is_empty() {
            println!("   (empty)");
        }
        for (i, row) in rows.iter().enumerate() {
            println!(
                "{:>4}  {} {}",
                i + 1,
                entry_icon(row.entry_type),
                console_safe(&row.name)
            );
        }
    }

    fn set_status(&self, text: &str) {
        println!("{}", console_safe(text));
    }
}

async fn run_action(
    controller: &DirectoryBrowserController,
    action: Action,
) -> sdplayer_browser::Result<()> {
    match action {
        Action::Refresh => controller.refresh().await.map(|_| ()),
        Action::Open(n) => {
            let entries = controller.entries().await;
            match entries.get(n - 1) {
                Some(entry) => controller.open(entry).await,
                None => {
                    println!("no row {n} ({} listed)", entries.len());
                    Ok(())
                }
            }
        }
        Action::Up => controller.go_up().await.map(|_| ()),
        Action::Root => controller.go_root().await.map(|_| ()),
        Action::Stop => controller.stop().await,
    }
}

fn load_config(args: &Args) -> Result<ClientConfig> {
    let mut config = match args.config.as_ref() {
        Some(path) => ClientConfig::load(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => ClientConfig::default(),
    };

    if let Some(server) = &args.server {
        config.base_url = server.clone();
    }
    if let Some(ms) = args.poll_ms {
        config.poll_interval_ms = ms;
    }
    if let Some(dir) = &args.start_dir {
        config.start_dir = dir.clone();
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config(&args)?;
    let api = Arc::new(HttpPlayerApi::from_config(&config)?);
    let controller = Arc::new(
        DirectoryBrowserController::new(api, Arc::new(ConsoleView))
            .with_start_dir(config.start_dir.clone()),
    );

    let poller = controller.start(config.poll_interval()).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => println!("{HELP}"),
            Ok(Command::Browse(action)) => {
                if let Err(e) = run_action(&controller, action).await {
                    error!(error = %e, "command failed");
                }
            }
            Err(msg) => println!("{msg}"),
        }
    }

    poller.abort();
    Ok(())
}
