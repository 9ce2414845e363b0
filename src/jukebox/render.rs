//! # Rendering
//!
//! Text for every screen of the jukebox. Functions here build `String`s and
//! never print; the session or the CLI decides where the text goes.
//!
//! Styling comes from [`JUKEBOX_THEME`] and is applied or stripped according to
//! an explicit `use_color` flag, so the same output can be produced for a
//! terminal or for a pipe.

use crate::commands::{CmdMessage, CmdResult, MessageLevel};
use crate::model::EXIT_ID;
use crate::session::Presenter;
use crate::styles::JUKEBOX_THEME;
use console::Style;
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

pub const BANNER: &str = "🎶 WELCOME TO THE DIGITAL JUKEBOX 🎶";
pub const MENU_HEADER: &str = "--- Available Songs ---";
pub const EXIT_LABEL: &str = "EXIT JUKEBOX";
pub const PROMPT: &str = "Enter the number of the song you want to play (0 to exit): ";

/// The console presenter used by the binary.
#[derive(Debug, Clone, Copy)]
pub struct TextPresenter {
    use_color: bool,
}

impl TextPresenter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn paint(&self, style: &Style, text: &str) -> String {
        style
            .clone()
            .force_styling(self.use_color)
            .apply_to(text)
            .to_string()
    }
}

impl Presenter for TextPresenter {
    fn banner(&self) -> String {
        format!("{}\n", self.paint(&JUKEBOX_THEME.banner, BANNER))
    }

    fn menu(&self, result: &CmdResult) -> String {
        render_menu(self, result)
    }

    fn prompt(&self) -> String {
        PROMPT.to_string()
    }

    fn outcome(&self, result: &CmdResult) -> String {
        render_outcome(self, result)
    }
}

fn render_menu(p: &TextPresenter, result: &CmdResult) -> String {
    let theme = &*JUKEBOX_THEME;
    let mut out = String::new();

    out.push('\n');
    let _ = writeln!(out, "{}", p.paint(&theme.header, MENU_HEADER));
    for song in &result.listed_songs {
        let _ = writeln!(
            out,
            "{} {} by {}",
            p.paint(&theme.id, &format!("[{}]", song.id)),
            p.paint(&theme.title, &song.title),
            p.paint(&theme.artist, &song.artist)
        );
    }
    let _ = writeln!(
        out,
        "{} {}",
        p.paint(&theme.id, &format!("[{}]", EXIT_ID)),
        p.paint(&theme.exit_option, EXIT_LABEL)
    );
    let rule = "-".repeat(MENU_HEADER.width());
    let _ = writeln!(out, "{}", p.paint(&theme.header, &rule));

    out
}

fn render_outcome(p: &TextPresenter, result: &CmdResult) -> String {
    let theme = &*JUKEBOX_THEME;
    let mut out = String::from("\n");

    if let Some(song) = &result.now_playing {
        let _ = writeln!(
            out,
            "{} {} by {}...",
            p.paint(&theme.now_playing, "🎧 NOW PLAYING:"),
            p.paint(&theme.title, &song.title),
            song.artist
        );
        let _ = writeln!(
            out,
            ">>> Lyrics Snippet: '{}'",
            p.paint(&theme.snippet, &song.snippet)
        );
    }

    out.push_str(&render_messages(p, &result.messages));
    out
}

fn render_messages(p: &TextPresenter, messages: &[CmdMessage]) -> String {
    let theme = &*JUKEBOX_THEME;
    messages
        .iter()
        .map(|msg| {
            let style = match msg.level {
                MessageLevel::Info => &theme.info,
                MessageLevel::Success => &theme.success,
                MessageLevel::Warning => &theme.warning,
                MessageLevel::Error => &theme.error,
            };
            format!("{}\n", p.paint(style, &msg.content))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::commands::{menu, select};
    use crate::model::Song;
    use crate::selection::Selection;

    fn plain() -> TextPresenter {
        TextPresenter::new(false)
    }

    #[test]
    fn test_menu_lists_songs_and_exit() {
        let output = plain().menu(&menu::run(&Catalog::builtin()));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], MENU_HEADER);
        assert_eq!(lines[2], "[1] Bohemian Rhapsody by Queen");
        assert_eq!(lines[6], "[5] Rocket Man by Elton John");
        assert_eq!(lines[7], "[0] EXIT JUKEBOX");
        assert_eq!(lines[8], "-----------------------");
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn test_menu_for_empty_catalog_has_only_exit() {
        let output = plain().menu(&menu::run(&Catalog::default()));
        assert!(output.contains("[0] EXIT JUKEBOX"));
        assert!(!output.contains(" by "));
    }

    #[test]
    fn test_menu_follows_insertion_order() {
        let catalog = Catalog::new(vec![
            Song::new(10, "Ten", "A", "x"),
            Song::new(3, "Three", "B", "y"),
        ])
        .unwrap();
        let output = plain().menu(&menu::run(&catalog));
        let ten = output.find("[10] Ten by A").unwrap();
        let three = output.find("[3] Three by B").unwrap();
        assert!(ten < three);
    }

    #[test]
    fn test_now_playing_block() {
        let result = select::run(&Catalog::builtin(), Selection::Number(3));
        let output = plain().outcome(&result);
        assert_eq!(
            output,
            "\n🎧 NOW PLAYING: Don't Stop Believin' by Journey...\n\
             >>> Lyrics Snippet: 'Just a small town girl, living in a lonely world...'\n\
             Enjoy the music!\n"
        );
    }

    #[test]
    fn test_not_found_message() {
        let result = select::run(&Catalog::builtin(), Selection::Number(42));
        assert_eq!(
            plain().outcome(&result),
            "\n🚫 Song number 42 not found. Please select from the list.\n"
        );
    }

    #[test]
    fn test_invalid_and_farewell_messages() {
        assert_eq!(
            plain().outcome(&select::invalid_input()),
            "\n🚨 Invalid input. Please enter a number.\n"
        );
        assert_eq!(
            plain().outcome(&select::farewell()),
            "\nThanks for listening! Goodbye.\n"
        );
    }

    #[test]
    fn test_plain_output_has_no_ansi() {
        let result = select::run(&Catalog::builtin(), Selection::Number(1));
        assert!(!plain().outcome(&result).contains('\u{1b}'));
        assert!(!plain().banner().contains('\u{1b}'));
    }

    #[test]
    fn test_color_output_has_ansi() {
        let result = select::run(&Catalog::builtin(), Selection::Number(1));
        let output = TextPresenter::new(true).outcome(&result);
        assert!(output.contains('\u{1b}'));
        assert!(output.contains("Bohemian Rhapsody"));
    }

    #[test]
    fn test_prompt_has_no_newline() {
        assert!(!plain().prompt().ends_with('\n'));
    }
}
