pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod http;
pub mod render;
pub mod types;
pub mod view;

pub use api::PlayerApi;
pub use config::ClientConfig;
pub use controller::{DirectoryBrowserController, NavigateOutcome, StatusPoll};
pub use error::{RequestError, Result};
pub use http::HttpPlayerApi;
pub use types::{DirectoryListing, Entry, EntryType, ParentDirectory, PlaybackStatus};
pub use view::{ListingRow, MemoryView, View, ViewState};
