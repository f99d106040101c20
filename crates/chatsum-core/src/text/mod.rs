//! Linguistic resources for tokenization, stop-word filtering and tagging
//!
//! Everything language-specific lives in one [`LinguisticResources`] value that
//! is built once at startup and passed by reference into the keyword
//! extractors and the summarizer.

mod stopwords;
mod tagger;
mod tokenizer;

use std::fmt;

pub use stopwords::StopWords;
pub use tagger::{LexiconTagger, PosTagger, TaggedToken};
pub use tokenizer::{Tokenizer, TreebankTokenizer};

/// Stop-word set, tokenizer and POS tagger bundled together
pub struct LinguisticResources {
    stop_words: StopWords,
    tokenizer: Box<dyn Tokenizer>,
    tagger: Box<dyn PosTagger>,
}

impl LinguisticResources {
    pub fn new(
        stop_words: StopWords,
        tokenizer: impl Tokenizer + 'static,
        tagger: impl PosTagger + 'static,
    ) -> Self {
        Self {
            stop_words,
            tokenizer: Box::new(tokenizer),
            tagger: Box::new(tagger),
        }
    }

    /// English stop words, Treebank tokenizer and lexicon tagger
    pub fn english() -> Self {
        Self::new(
            StopWords::english(),
            TreebankTokenizer,
            LexiconTagger::new(),
        )
    }

    /// Add words to the stop-word set
    pub fn with_extra_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words.extend(words);
        self
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Membership test; `word` must already be lower-cased
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.tokenizer.tokenize(text)
    }

    pub fn tag(&self, tokens: &[String]) -> Vec<TaggedToken> {
        self.tagger.tag(tokens)
    }

    /// Tokenize, then keep lower-cased alphanumeric tokens that are not stop words.
    ///
    /// Tokens with any non-alphanumeric character (punctuation, clitics such as
    /// `n't`, hyphenated compounds) are dropped.
    pub fn content_words(&self, text: &str) -> Vec<String> {
        self.tokenize(text)
            .into_iter()
            .filter(|t| is_alphanumeric(t))
            .map(|t| t.to_lowercase())
            .filter(|t| !self.is_stop_word(t))
            .collect()
    }
}

impl Default for LinguisticResources {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Debug for LinguisticResources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinguisticResources")
            .field("stop_words", &self.stop_words.len())
            .finish_non_exhaustive()
    }
}

/// Non-empty and made only of letters and digits
pub fn is_alphanumeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_words_basic() {
        let resources = LinguisticResources::english();
        // Filters "this", "is", "a" and the punctuation
        assert_eq!(
            resources.content_words("Hello world! This is a test."),
            vec!["hello", "world", "test"]
        );
    }

    #[test]
    fn test_content_words_drops_clitics_and_compounds() {
        let resources = LinguisticResources::english();
        assert_eq!(
            resources.content_words("I don't like state-of-the-art gadgets"),
            vec!["like", "gadgets"]
        );
    }

    #[test]
    fn test_content_words_empty_after_stop_words() {
        let resources = LinguisticResources::english();
        assert!(resources.content_words("the a an and or").is_empty());
    }

    #[test]
    fn test_content_words_lowercases() {
        let resources = LinguisticResources::english();
        assert_eq!(
            resources.content_words("Graph THEORY and Networks"),
            vec!["graph", "theory", "networks"]
        );
    }

    #[test]
    fn test_extra_stop_words() {
        let resources = LinguisticResources::english().with_extra_stop_words(["hello"]);
        assert_eq!(resources.content_words("Hello world"), vec!["world"]);
    }

    struct WhitespaceTokenizer;

    impl Tokenizer for WhitespaceTokenizer {
        fn tokenize(&self, text: &str) -> Vec<String> {
            text.split_whitespace().map(str::to_string).collect()
        }
    }

    struct AllNouns;

    impl PosTagger for AllNouns {
        fn tag(&self, tokens: &[String]) -> Vec<TaggedToken> {
            tokens
                .iter()
                .map(|t| TaggedToken {
                    token: t.clone(),
                    tag: "NN".to_string(),
                })
                .collect()
        }
    }

    #[test]
    fn test_custom_components_are_used() {
        let resources = LinguisticResources::new(StopWords::default(), WhitespaceTokenizer, AllNouns);
        assert_eq!(resources.tokenize("don't stop"), vec!["don't", "stop"]);
        assert!(resources.tag(&["run".to_string()])[0].is_noun());
        // No stop words configured, but the apostrophe still fails the alphanumeric check
        assert_eq!(resources.content_words("the don't end"), vec!["the", "end"]);
    }

    #[test]
    fn test_is_alphanumeric() {
        assert!(is_alphanumeric("abc123"));
        assert!(is_alphanumeric("naïve"));
        assert!(!is_alphanumeric(""));
        assert!(!is_alphanumeric("n't"));
        assert!(!is_alphanumeric("foo_bar"));
    }
}
