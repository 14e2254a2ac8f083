//! jnl - Bullet journal kept in a single SQLite file
//!
//! Each invocation opens (or creates) one journal file, performs one action
//! on its items, pages or archive, and exits.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::JnlError;
