//! # Jukebox CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file
//! only invokes `cli::run()` and handles process termination.
//!
//! Exit status is 0 for a session that ends by selection or by end of input,
//! and 1 for startup failures such as an unreadable config or an invalid
//! catalog file.

use colored::Colorize;

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
