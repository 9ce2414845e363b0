//! # CLI Behavior
//!
//! This is the console client for the jukebox library. It is the only place
//! that knows about stdin, stdout, stderr and exit codes.
//!
//! ### Naked Execution (`jukebox`)
//!
//! Running `jukebox` with no subcommand starts the interactive menu loop on
//! stdin/stdout. The loop ends on selection `0` or when stdin is closed.
//!
//! ### One-shot Commands
//!
//! - `jukebox list`: print the menu once.
//! - `jukebox play <N>`: print what selecting `N` would produce.
//!
//! ## Module Structure
//!
//! - `commands`: context setup and per-command handlers
//! - `logging`: tracing subscriber on stderr
//! - `setup`: argument parsing via clap

mod commands;
mod logging;
pub mod setup;

pub use commands::run;
