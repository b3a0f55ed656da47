use serde::{Deserialize, Serialize};

/// One row of a directory listing as reported by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Display name of the file or folder
    pub name: String,
    /// Full path, used for navigation and playback
    pub path: String,
    /// Type of entry
    #[serde(rename = "type")]
    pub entry_type: EntryType,
}

/// Type of directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Dir,
    File,
}

impl EntryType {
    pub fn is_dir(self) -> bool {
        matches!(self, EntryType::Dir)
    }

    /// Class name used for list rows
    pub fn as_str(self) -> &'static str {
        match self {
            EntryType::Dir => "dir",
            EntryType::File => "file",
        }
    }
}

/// Result of listing a directory, in server order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectoryListing {
    pub items: Vec<Entry>,
}

/// Current playback state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackStatus {
    #[serde(default)]
    pub playing: bool,
    #[serde(default)]
    pub name: String,
}

/// Response of the go-up endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentDirectory {
    pub dir: String,
}
