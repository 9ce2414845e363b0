//! # API Facade
//!
//! [`JukeboxApi`] is the single entry point a UI talks to. It owns the catalog,
//! normalizes raw console text into a [`Selection`], and dispatches to the
//! command layer.
//!
//! The API never writes to stdout or reads from stdin. It returns
//! [`CmdResult`] values and leaves presentation to the caller.

use crate::catalog::Catalog;
use crate::commands;
use crate::error::Result;
use crate::selection::Selection;
use std::str::FromStr;

pub struct JukeboxApi {
    catalog: Catalog,
}

impl JukeboxApi {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn menu(&self) -> CmdResult {
        commands::menu::run(&self.catalog)
    }

    /// Dispatches one raw input line.
    ///
    /// Fails only with `JukeboxError::MalformedSelection`, in which case no
    /// catalog lookup has taken place.
    pub fn select(&self, raw: &str) -> Result<CmdResult> {
        let selection = Selection::from_str(raw)?;
        Ok(self.play(selection))
    }

    pub fn play(&self, selection: Selection) -> CmdResult {
        commands::select::run(&self.catalog, selection)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SessionState;

    #[test]
    fn select_dispatches_to_play() {
        let api = JukeboxApi::new(Catalog::builtin());
        let result = api.select("2").unwrap();
        assert_eq!(result.now_playing.unwrap().title, "Dancing Queen");
    }

    #[test]
    fn select_zero_terminates() {
        let api = JukeboxApi::new(Catalog::builtin());
        assert_eq!(api.select("0").unwrap().state, SessionState::Terminated);
    }

    #[test]
    fn select_malformed_is_error() {
        let api = JukeboxApi::new(Catalog::builtin());
        for raw in ["abc", "", "3.5"] {
            assert!(api.select(raw).unwrap_err().is_malformed_selection());
        }
    }

    #[test]
    fn menu_lists_catalog() {
        let api = JukeboxApi::new(Catalog::builtin());
        assert_eq!(api.menu().listed_songs.len(), api.catalog().len());
    }
}
