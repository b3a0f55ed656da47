use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, warn};

use crate::{
    api::PlayerApi,
    config::ROOT_DIR,
    error::Result,
    render::{status_line, status_text, STATUS_ERROR_TEXT},
    types::{Entry, EntryType},
    view::{ListingRow, View},
};

/// What happened to a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigateOutcome {
    /// The listing was rendered with this many rows
    Rendered { entries: usize },
    /// A newer navigation was issued while this one was in flight; its
    /// response was dropped
    Superseded,
}

/// What a single status poll did to the status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusPoll {
    /// The line changed to `Status: {text}`
    Rendered(String),
    /// Same text as the last render, nothing written
    Unchanged,
    /// The poll failed and the error line was written
    Failed,
}

struct BrowserState {
    current_directory: String,
    last_rendered_status: String,
    entries: Vec<Entry>,
}

/// Browses the player's directories and mirrors its playback status
///
/// One instance per session. Navigation and status polling may run
/// concurrently; they write to disjoint regions of the view.
pub struct DirectoryBrowserController {
    api: Arc<dyn PlayerApi>,
    view: Arc<dyn View>,
    state: RwLock<BrowserState>,
    nav_seq: AtomicU64,
    start_dir: String,
}

impl DirectoryBrowserController {
    pub fn new(api: Arc<dyn PlayerApi>, view: Arc<dyn View>) -> Self {
        Self {
            api,
            view,
            state: RwLock::new(BrowserState {
                current_directory: ROOT_DIR.to_string(),
                last_rendered_status: String::new(),
                entries: Vec::new(),
            }),
            nav_seq: AtomicU64::new(0),
            start_dir: ROOT_DIR.to_string(),
        }
    }

    /// Directory listed by [`start`](Self::start) instead of the root
    pub fn with_start_dir(mut self, dir: impl Into<String>) -> Self {
        self.start_dir = dir.into();
        self
    }

    pub async fn current_directory(&self) -> String {
        self.state.read().await.current_directory.clone()
    }

    /// Entries of the listing currently on screen
    pub async fn entries(&self) -> Vec<Entry> {
        self.state.read().await.entries.clone()
    }

    /// List `dir` and render it
    ///
    /// The path label, the list and the current directory change only when
    /// the listing succeeds and no newer navigation has been issued since.
    /// On failure the previous listing stays on screen.
    pub async fn navigate(&self, dir: &str) -> Result<NavigateOutcome> {
        let seq = self.nav_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let listing = self.api.list(dir).await?;

        let mut state = self.state.write().await;
        if self.nav_seq.load(Ordering::SeqCst) != seq {
            debug!(dir, seq, "dropping stale listing");
            return Ok(NavigateOutcome::Superseded);
        }

        let rows: Vec<ListingRow> = listing.items.iter().map(ListingRow::from).collect();
        state.current_directory = dir.to_string();
        self.view.set_path(dir);
        self.view.render_listing(&rows);
        state.entries = listing.items;

        info!(dir, entries = rows.len(), "listed directory");
        Ok(NavigateOutcome::Rendered { entries: rows.len() })
    }

    /// Act on a clicked row: enter a directory or play a file
    pub async fn open(&self, entry: &Entry) -> Result<()> {
        match entry.entry_type {
            EntryType::Dir => self.navigate(&entry.path).await.map(|_| ()),
            EntryType::File => self.play(&entry.path).await,
        }
    }

    pub async fn play(&self, path: &str) -> Result<()> {
        info!(path, "play");
        self.api.play(path).await
    }

    pub async fn stop(&self) -> Result<()> {
        info!("stop");
        self.api.stop().await
    }

    /// Ask the server for the parent directory and list it
    pub async fn go_up(&self) -> Result<NavigateOutcome> {
        let current = self.current_directory().await;
        let parent = self.api.up(&current).await?;
        self.navigate(&parent.dir).await
    }

    pub async fn refresh(&self) -> Result<NavigateOutcome> {
        let current = self.current_directory().await;
        self.navigate(&current).await
    }

    pub async fn go_root(&self) -> Result<NavigateOutcome> {
        self.navigate(ROOT_DIR).await
    }

    /// Fetch playback status and update the status line if its text changed
    ///
    /// Failures never propagate: the fixed error line is written instead.
    /// The change-detection cache only tracks successful renders, so a
    /// recovered poll with the same text as the last good one is skipped.
    pub async fn poll_status(&self) -> StatusPoll {
        match self.api.status().await {
            Ok(status) => {
                let text = status_text(&status);
                let mut state = self.state.write().await;
                if state.last_rendered_status == text {
                    return StatusPoll::Unchanged;
                }
                self.view.set_status(&status_line(&text));
                state.last_rendered_status = text.clone();
                StatusPoll::Rendered(text)
            }
            Err(e) => {
                warn!(error = %e, player = %self.api.identifier(), "status poll failed");
                self.view.set_status(STATUS_ERROR_TEXT);
                StatusPoll::Failed
            }
        }
    }

    /// Poll status now and then every `period`, until the task is aborted
    pub fn spawn_status_poller(self: &Arc<Self>, period: Duration) -> JoinHandle<()> {
        let controller = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                controller.poll_status().await;
            }
        })
    }

    /// Start a session: begin status polling and list the start directory
    ///
    /// A failing initial listing is logged; polling keeps running.
    pub async fn start(self: &Arc<Self>, poll_interval: Duration) -> JoinHandle<()> {
        let poller = self.spawn_status_poller(poll_interval);
        if let Err(e) = self.navigate(&self.start_dir).await {
            error!(error = %e, dir = %self.start_dir, "initial listing failed");
        }
        poller
    }
}
