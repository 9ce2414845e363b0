use crate::model::{SessionState, Song};

pub mod menu;
pub mod select;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Everything a command produced, for a UI to present.
///
/// `state` is where the session goes next. Only the exit selection moves it to
/// [`SessionState::Terminated`]; every other command leaves it at the default.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_songs: Vec<Song>,
    pub now_playing: Option<Song>,
    pub state: SessionState,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_songs(mut self, songs: Vec<Song>) -> Self {
        self.listed_songs = songs;
        self
    }

    pub fn with_now_playing(mut self, song: Song) -> Self {
        self.now_playing = Some(song);
        self
    }

    pub fn with_state(mut self, state: SessionState) -> Self {
        self.state = state;
        self
    }
}
