//! Chatsum Core Library
//!
//! Parses two-party chat transcripts and produces message statistics,
//! frequency and TF-IDF keyword rankings, and a one-sentence topic summary.

pub mod config;
pub mod error;
pub mod format;
pub mod keywords;
pub mod logging;
pub mod stats;
pub mod summary;
pub mod text;
pub mod transcript;
