//! CLI commands for chatsum

pub mod dispatch;
pub mod output;
pub mod summarize;
