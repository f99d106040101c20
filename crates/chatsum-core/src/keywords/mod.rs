//! Keyword extraction over a conversation's turns
//!
//! Two independent rankings are provided: raw frequency over every turn
//! ([`frequency_keywords`]) and summed TF-IDF weight over paired exchanges
//! ([`tfidf_keywords`]). Both are deterministic for a given input.

mod frequency;
mod tfidf;

use serde::Serialize;

pub use frequency::frequency_keywords;
pub use tfidf::{exchange_documents, tfidf_keywords, Normalization, TfidfExtractor};

/// Number of keywords reported when nothing else is configured
pub const DEFAULT_TOP_N: usize = 5;

/// A ranked keyword: an occurrence count or a TF-IDF weight
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordScore<S> {
    pub term: String,
    pub score: S,
}

impl<S> KeywordScore<S> {
    pub fn new(term: impl Into<String>, score: S) -> Self {
        Self {
            term: term.into(),
            score,
        }
    }
}

/// Join every turn of both speakers, user turns first, separated by spaces
fn join_turns<U: AsRef<str>, A: AsRef<str>>(user_turns: &[U], ai_turns: &[A]) -> String {
    user_turns
        .iter()
        .map(AsRef::as_ref)
        .chain(ai_turns.iter().map(AsRef::as_ref))
        .collect::<Vec<_>>()
        .join(" ")
}
