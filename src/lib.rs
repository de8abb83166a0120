//! td - Terminal Todo Library
//!
//! This library provides the core functionality for the td console
//! application: a bounded, menu-driven todo list for one terminal session.
//!
//! # Core Concepts
//!
//! - **Tasks**: short titled units of work with a one-way pending -> done flag
//! - **Task Store**: an ordered, in-memory list holding at most five tasks
//! - **Console Port**: a narrow output/input interface so the store and menu
//!   logic run against a real terminal or a scripted double
//! - **Menu Loop**: the prompt -> read -> dispatch -> render -> pause cycle
//!
//! Tasks have no stable ids: the user refers to them by their 1-based
//! position in the list. Nothing is persisted; the store is created empty at
//! startup and discarded on exit.
//!
//! # Module Organization
//!
//! - `error`: Error types and result alias
//! - `store`: Task entity and the bounded task store
//! - `output`: Console port and the crossterm terminal implementation
//! - `menu`: Menu-driven interaction loop

pub mod error;
pub mod menu;
pub mod output;
pub mod store;

pub use error::{Error, Result};
