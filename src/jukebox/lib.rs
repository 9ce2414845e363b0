//! # Jukebox
//!
//! A text-menu jukebox: it shows a fixed list of songs, reads a numeric
//! selection from the console, and prints a short lyrics snippet for the chosen
//! song. There is no audio, no persistence and no concurrency.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - Arguments, config, logging, stdin/stdout, exit codes     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session (session.rs) + Rendering (render.rs)               │
//! │  - The Browsing/Terminated menu loop over BufRead/Write     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs) -> Commands (commands/*.rs)                   │
//! │  - Raw text -> Selection -> CmdResult, no I/O               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog (catalog.rs, model.rs)                             │
//! │  - Immutable, validated id -> song mapping                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only the CLI touches the real console. Everything below it takes regular
//! arguments and returns regular values, which is what lets the session be
//! tested against in-memory buffers.

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod selection;
pub mod session;
pub mod styles;
