//! Selection engine: playlist ownership and the spin/reveal sequence

pub mod config;
pub mod error;
pub mod notice;
pub mod selection;

pub use config::EngineConfig;
pub use error::EngineError;
pub use notice::{LoadOutcome, Notice, NoticeLevel};
pub use selection::SelectionEngine;
