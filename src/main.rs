//! td - Terminal Todo
//!
//! An interactive console todo list: add, show, and complete up to five
//! short tasks through a numbered menu. Everything lives in memory for the
//! length of the session.

use td::menu;
use td::output::Terminal;
use td::store::TaskStore;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    // Tracing is opt-in via RUST_LOG; empty or oversized filters are ignored
    // so startup never fails on a bad environment.
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|raw| {
            let raw = raw.trim();
            if raw.is_empty() || raw.len() > 4096 {
                return None;
            }
            EnvFilter::try_new(raw).ok()
        })
        .unwrap_or_else(|| EnvFilter::new("off"));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let mut store = TaskStore::new();
    let mut console = Terminal::new();
    if let Err(err) = menu::run(&mut store, &mut console) {
        eprintln!("error: {err}");
    }
}
