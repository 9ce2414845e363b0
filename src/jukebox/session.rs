//! # Menu Loop
//!
//! A [`Session`] drives one interactive run of the jukebox: render the menu,
//! read one line, dispatch it, present the outcome, repeat.
//!
//! The loop is an explicit two-state machine over [`SessionState`]. It starts
//! in `Browsing` and stays there for every outcome except the exit selection
//! (or the end of the input stream), which moves it to `Terminated`. Nothing
//! about previous selections is kept between iterations.
//!
//! Input and output are plain `BufRead`/`Write` handles, so the same loop runs
//! against the console in the binary and against in-memory buffers in tests.
//! Turning results into text is delegated to a [`Presenter`].

use crate::api::{CmdResult, JukeboxApi};
use crate::commands::select;
use crate::error::Result;
use crate::model::SessionState;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Formats session output. Every method returns the exact text to write.
pub trait Presenter {
    fn banner(&self) -> String;
    fn menu(&self, result: &CmdResult) -> String;
    fn prompt(&self) -> String;
    fn outcome(&self, result: &CmdResult) -> String;
}

pub struct Session<'a, P: Presenter> {
    api: &'a JukeboxApi,
    presenter: P,
    state: SessionState,
    show_banner: bool,
}

impl<'a, P: Presenter> Session<'a, P> {
    pub fn new(api: &'a JukeboxApi, presenter: P) -> Self {
        Self {
            api,
            presenter,
            state: SessionState::Browsing,
            show_banner: true,
        }
    }

    pub fn with_banner(mut self, show_banner: bool) -> Self {
        self.show_banner = show_banner;
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Runs until the user exits or `input` is exhausted.
    ///
    /// Blocks on each line read. Nothing is read from `input` after the
    /// session terminates.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<SessionState> {
        if self.show_banner {
            write!(output, "{}", self.presenter.banner())?;
        }

        while !self.state.is_terminated() {
            write!(output, "{}", self.presenter.menu(&self.api.menu()))?;
            write!(output, "{}", self.presenter.prompt())?;
            output.flush()?;

            let line = read_line(input)?;
            let result = self.step(line.as_deref())?;
            write!(output, "{}", self.presenter.outcome(&result))?;
        }

        output.flush()?;
        Ok(self.state)
    }

    /// Advances the state machine by one input line. `None` means end of input.
    pub fn step(&mut self, line: Option<&str>) -> Result<CmdResult> {
        let result = match line {
            None => {
                info!("end of input, leaving the jukebox");
                select::farewell()
            }
            Some(raw) => match self.api.select(raw) {
                Ok(result) => result,
                Err(e) if e.is_malformed_selection() => {
                    debug!(input = raw, "rejected malformed selection");
                    select::invalid_input()
                }
                Err(e) => return Err(e),
            },
        };
        self.state = result.state;
        Ok(result)
    }
}

/// Reads one line without its terminator. Invalid UTF-8 is decoded lossily so
/// it is rejected as a malformed selection rather than failing the session.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}
