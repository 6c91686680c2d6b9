//! trivia-store — Question store adapters.
//!
//! Implements the `QuestionStore` trait over an in-memory map and a JSON
//! file, and provides configuration loading plus the store factory that
//! hosts use to open their configured backend.

pub mod config;
pub mod json;
pub mod memory;
pub mod seed;

pub use config::{load_config, load_config_from, open_store, TriviaConfig};
pub use json::JsonStore;
pub use memory::{MemoryStore, StoreData};
