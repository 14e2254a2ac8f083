//! Infrastructure layer - SQLite persistence and configuration

pub mod archive;
mod codec;
pub mod config;
pub mod history;
pub mod items;
pub mod pages;
pub mod store;

pub use config::Config;
pub use store::Store;
