use crate::types::{Entry, EntryType, PlaybackStatus};

/// Prefix of every status line.
pub const STATUS_PREFIX: &str = "Status: ";

/// Status line shown when a status poll fails.
pub const STATUS_ERROR_TEXT: &str = "Status: błąd API";

/// Escape `&`, `<` and `>` so a server-supplied name renders as text
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}

pub fn entry_icon(entry_type: EntryType) -> &'static str {
    match entry_type {
        EntryType::Dir => "📁",
        EntryType::File => "🎵",
    }
}

/// Row markup: icon followed by the escaped name
pub fn entry_html(entry: &Entry) -> String {
    format!("{} {}", entry_icon(entry.entry_type), escape_html(&entry.name))
}

/// Status text without the prefix: `PLAY: {name}` or `STOP`
pub fn status_text(status: &PlaybackStatus) -> String {
    if status.playing {
        format!("PLAY: {}", status.name)
    } else {
        "STOP".to_string()
    }
}

pub fn status_line(text: &str) -> String {
    format!("{STATUS_PREFIX}{text}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("Rock & Roll"), "Rock &amp; Roll");
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
        // quotes are left alone
        assert_eq!(escape_html("\"a\" 'b'"), "\"a\" 'b'");
    }

    #[test]
    fn test_entry_html() {
        let dir = Entry {
            name: "music".to_string(),
            path: "/music".to_string(),
            entry_type: EntryType::Dir,
        };
        let file = Entry {
            name: "<b>.mp3".to_string(),
            path: "/<b>.mp3".to_string(),
            entry_type: EntryType::File,
        };

        assert_eq!(entry_html(&dir), "📁 music");
        assert_eq!(entry_html(&file), "🎵 &lt;b&gt;.mp3");
    }

    #[test]
    fn test_status_text() {
        let playing = PlaybackStatus {
            playing: true,
            name: "track.mp3".to_string(),
        };
        let stopped = PlaybackStatus {
            playing: false,
            name: "track.mp3".to_string(),
        };

        assert_eq!(status_line(&status_text(&playing)), "Status: PLAY: track.mp3");
        assert_eq!(status_line(&status_text(&stopped)), "Status: STOP");
        assert_ne!(status_line(&status_text(&stopped)), STATUS_ERROR_TEXT);
    }
}
