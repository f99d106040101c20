//! Conversation summaries
//!
//! A [`SummaryReport`] bundles the message statistics, both keyword rankings
//! and a one-sentence topic summary built from the nouns among the TF-IDF
//! keywords.

use std::time::Instant;

use serde::Serialize;

use crate::debug_time;
use crate::keywords::{frequency_keywords, KeywordScore, TfidfExtractor, DEFAULT_TOP_N};
use crate::stats::{compute_stats, MessageCounts};
use crate::text::LinguisticResources;
use crate::transcript::Transcript;

/// Number of nouns named in the summary sentence
const TOPIC_NOUNS: usize = 2;

/// Everything reported for one transcript
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    pub exchange_count: usize,
    pub message_counts: MessageCounts,
    pub frequency_keywords: Vec<KeywordScore<usize>>,
    pub tfidf_keywords: Vec<KeywordScore<f64>>,
    pub summary: String,
}

/// Runs the statistics, keyword and summary pipeline with shared resources
#[derive(Debug, Clone, Copy)]
pub struct Summarizer<'a> {
    resources: &'a LinguisticResources,
    top_n: usize,
}

impl<'a> Summarizer<'a> {
    pub fn new(resources: &'a LinguisticResources) -> Self {
        Summarizer {
            resources,
            top_n: DEFAULT_TOP_N,
        }
    }

    /// Number of keywords kept by each extractor
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn summarize(&self, transcript: &Transcript) -> SummaryReport {
        self.summarize_turns(&transcript.user_turns, &transcript.ai_turns)
    }

    pub fn summarize_turns<U: AsRef<str>, A: AsRef<str>>(
        &self,
        user_turns: &[U],
        ai_turns: &[A],
    ) -> SummaryReport {
        let start = Instant::now();

        let stats = compute_stats(user_turns, ai_turns);
        let frequency_keywords =
            frequency_keywords(self.resources, user_turns, ai_turns, self.top_n);
        let tfidf_keywords =
            TfidfExtractor::new(self.resources).extract(user_turns, ai_turns, self.top_n);

        let nouns = self.topic_nouns(&tfidf_keywords);
        let summary = render_summary(&nouns);

        debug_time!(
            start,
            "summarize",
            exchanges = stats.exchange_count,
            nouns = nouns.len()
        );

        SummaryReport {
            exchange_count: stats.exchange_count,
            message_counts: stats.message_counts,
            frequency_keywords,
            tfidf_keywords,
            summary,
        }
    }

    /// The first two nouns among the keyword terms, in ranking order.
    ///
    /// The terms are joined and re-tokenized so the tagger sees them as one
    /// sequence.
    pub fn topic_nouns<S>(&self, keywords: &[KeywordScore<S>]) -> Vec<String> {
        let joined = keywords
            .iter()
            .map(|k| k.term.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let tokens = self.resources.tokenize(&joined);

        self.resources
            .tag(&tokens)
            .into_iter()
            .filter(|t| t.is_noun())
            .map(|t| t.token)
            .take(TOPIC_NOUNS)
            .collect()
    }
}

/// Summarize with the default keyword count
pub fn generate_summary<U: AsRef<str>, A: AsRef<str>>(
    resources: &LinguisticResources,
    user_turns: &[U],
    ai_turns: &[A],
) -> SummaryReport {
    Summarizer::new(resources).summarize_turns(user_turns, ai_turns)
}

/// Render the topic sentence for zero, one, or two nouns.
///
/// - no nouns: `"This conversation is about ."`
/// - one noun: `"This conversation is about weather."`
/// - two nouns: `"This conversation is about weather and travel."`
///
/// Nouns past the second are ignored.
pub fn render_summary(nouns: &[String]) -> String {
    let topic = match nouns {
        [] => String::new(),
        [only] => only.clone(),
        [first, second, ..] => format!("{} and {}", first, second),
    };
    capitalize_first(&format!("this conversation is about {}.", topic))
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nouns(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_render_two_nouns() {
        assert_eq!(
            render_summary(&nouns(&["weather", "travel"])),
            "This conversation is about weather and travel."
        );
        assert_eq!(
            render_summary(&nouns(&["weather", "travel", "food"])),
            "This conversation is about weather and travel."
        );
    }

    #[test]
    fn test_render_one_noun() {
        assert_eq!(
            render_summary(&nouns(&["weather"])),
            "This conversation is about weather."
        );
    }

    #[test]
    fn test_render_no_nouns() {
        assert_eq!(render_summary(&[]), "This conversation is about .");
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("élan"), "Élan");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_topic_nouns_skip_non_nouns() {
        let resources = LinguisticResources::english();
        let keywords = vec![
            KeywordScore::new("hello", 0.9),
            KeywordScore::new("quickly", 0.8),
            KeywordScore::new("recipes", 0.7),
            KeywordScore::new("delicious", 0.6),
            KeywordScore::new("pasta", 0.5),
            KeywordScore::new("sauce", 0.4),
        ];
        let summarizer = Summarizer::new(&resources);
        assert_eq!(summarizer.topic_nouns(&keywords), vec!["recipes", "pasta"]);
    }

    #[test]
    fn test_summarize_report_fields() {
        let resources = LinguisticResources::english();
        let report = generate_summary(
            &resources,
            &["Can you recommend a pasta recipe?", "What sauce goes with pasta?"],
            &["Try a simple tomato pasta.", "Pesto sauce works well with pasta."],
        );

        assert_eq!(report.exchange_count, 2);
        assert_eq!(report.message_counts.total, 4);
        assert_eq!(report.frequency_keywords[0], KeywordScore::new("pasta", 4));
        assert_eq!(report.tfidf_keywords[0].term, "pasta");
        assert!(report.summary.starts_with("This conversation is about pasta"));
        assert!(report.summary.ends_with('.'));
    }

    #[test]
    fn test_summary_keeps_nouns_with_verb_like_endings() {
        let resources = LinguisticResources::english();

        let report = generate_summary(&resources, &["What is a variable?"], &["A variable holds a string."]);
        assert_eq!(report.summary, "This conversation is about variable and string.");

        let report = generate_summary(&resources, &["my family"], &["family meeting"]);
        assert_eq!(report.summary, "This conversation is about family and meeting.");
    }

    #[test]
    fn test_summarize_empty_transcript() {
        let resources = LinguisticResources::english();
        let report = Summarizer::new(&resources).summarize(&Transcript::default());

        assert_eq!(report.exchange_count, 0);
        assert!(report.frequency_keywords.is_empty());
        assert!(report.tfidf_keywords.is_empty());
        assert_eq!(report.summary, "This conversation is about .");
    }

    #[test]
    fn test_with_top_n() {
        let resources = LinguisticResources::english();
        let report = Summarizer::new(&resources)
            .with_top_n(2)
            .summarize_turns(&["alpha beta gamma delta"], &["epsilon zeta"]);
        assert_eq!(report.frequency_keywords.len(), 2);
        assert_eq!(report.tfidf_keywords.len(), 2);
    }
}
