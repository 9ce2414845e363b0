use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::model::SessionState;
use crate::selection::Selection;
use tracing::debug;

pub const FAREWELL: &str = "Thanks for listening! Goodbye.";
pub const ENJOY: &str = "Enjoy the music!";

pub fn run(catalog: &Catalog, selection: Selection) -> CmdResult {
    match &selection {
        Selection::Exit => {
            debug!("exit selected");
            farewell()
        }
        Selection::Number(id) => match catalog.get(*id) {
            Some(song) => {
                debug!(id, title = %song.title, "now playing");
                let mut result = CmdResult::default().with_now_playing(song.clone());
                result.add_message(CmdMessage::success(ENJOY));
                result
            }
            None => {
                debug!(id, "selection not in catalog");
                not_found(&selection)
            }
        },
        Selection::Unlisted(_) => {
            debug!(selection = %selection, "selection beyond any catalog id");
            not_found(&selection)
        }
    }
}

fn not_found(selection: &Selection) -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::warning(format!(
        "🚫 Song number {} not found. Please select from the list.",
        selection
    )));
    result
}

/// Result of leaving the jukebox, whether chosen or forced by end of input.
pub fn farewell() -> CmdResult {
    let mut result = CmdResult::default().with_state(SessionState::Terminated);
    result.add_message(CmdMessage::info(FAREWELL));
    result
}

/// Result shown for input that did not parse as a selection.
pub fn invalid_input() -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::error(
        "🚨 Invalid input. Please enter a number.",
    ));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn every_catalog_entry_plays() {
        let catalog = Catalog::builtin();
        for song in catalog.songs() {
            let result = run(&catalog, Selection::Number(song.id));
            assert_eq!(result.now_playing.as_ref(), Some(song));
            assert_eq!(result.state, SessionState::Browsing);
            assert_eq!(result.messages[0].content, ENJOY);
        }
    }

    #[test]
    fn exit_terminates() {
        let result = run(&Catalog::builtin(), Selection::Exit);
        assert_eq!(result.state, SessionState::Terminated);
        assert!(result.now_playing.is_none());
        assert_eq!(result.messages[0].content, FAREWELL);
    }

    #[test]
    fn unknown_numbers_are_not_found() {
        let catalog = Catalog::builtin();
        for n in [6, -1, 999] {
            let result = run(&catalog, Selection::Number(n));
            assert_eq!(result.state, SessionState::Browsing);
            assert!(result.now_playing.is_none());
            assert_eq!(result.messages.len(), 1);
            assert_eq!(result.messages[0].level, MessageLevel::Warning);
            assert!(result.messages[0]
                .content
                .contains(&format!("Song number {} not found", n)));
        }
    }

    #[test]
    fn huge_numbers_are_not_found_and_echoed() {
        let selection = Selection::Unlisted("99999999999999999999".to_string());
        let result = run(&Catalog::builtin(), selection);
        assert_eq!(result.state, SessionState::Browsing);
        assert!(result.now_playing.is_none());
        assert_eq!(
            result.messages[0].content,
            "🚫 Song number 99999999999999999999 not found. Please select from the list."
        );
    }

    #[test]
    fn repeated_selection_is_identical() {
        let catalog = Catalog::builtin();
        let first = run(&catalog, Selection::Number(1));
        let second = run(&catalog, Selection::Number(1));
        assert_eq!(first.now_playing, second.now_playing);
        assert_eq!(catalog.len(), 5);
    }
}
