//! CLI library components for the store import tool.

pub mod logging;
pub mod pipeline;
