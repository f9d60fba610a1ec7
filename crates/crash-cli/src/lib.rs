//! CLI library components for the crash record normalizer.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod types;
