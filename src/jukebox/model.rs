use serde::{Deserialize, Serialize};

/// Selection value reserved for leaving the jukebox. Never a catalog key.
pub const EXIT_ID: i64 = 0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: i64,
    pub title: String,
    pub artist: String,
    /// Short excerpt shown in place of the full lyrics.
    pub snippet: String,
}

impl Song {
    pub fn new(
        id: i64,
        title: impl Into<String>,
        artist: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
            snippet: snippet.into(),
        }
    }
}

/// The two states of an interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Browsing,
    Terminated,
}

impl SessionState {
    pub fn is_terminated(&self) -> bool {
        matches!(self, SessionState::Terminated)
    }
}
