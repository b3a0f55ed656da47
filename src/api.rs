use async_trait::async_trait;
use crate::{error::Result, types::{DirectoryListing, ParentDirectory, PlaybackStatus}};

/// Remote calls exposed by the media player
///
/// Implementors talk to a player that browses its own file system and
/// plays files on request. Every call is a single round trip with no retry.
#[async_trait]
pub trait PlayerApi: Send + Sync {
    /// List the contents of a directory
    async fn list(&self, dir: &str) -> Result<DirectoryListing>;

    /// Start playing a file; the response body is discarded
    async fn play(&self, file: &str) -> Result<()>;

    /// Stop playback; the response body is discarded
    async fn stop(&self) -> Result<()>;

    /// Ask the server for the parent of `dir`
    async fn up(&self, dir: &str) -> Result<ParentDirectory>;

    /// Fetch the current playback state
    async fn status(&self) -> Result<PlaybackStatus>;

    /// Get a human-readable identifier for this player (for logging/debugging)
    fn identifier(&self) -> String;
}
