use std::sync::OnceLock;

use regex::Regex;

/// Splits text into word units
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Negative contraction suffix, split off before tokenizing ("don't" -> "do n't")
static NEGATION: OnceLock<Regex> = OnceLock::new();

/// "cannot" is written as one word but tokenized as two
static CANNOT: OnceLock<Regex> = OnceLock::new();

/// Alternatives are tried left to right at each position
static TOKEN: OnceLock<Regex> = OnceLock::new();

fn negation() -> &'static Regex {
    NEGATION.get_or_init(|| Regex::new(r"(?i)(\w)(n't)\b").expect("valid negation regex"))
}

fn cannot() -> &'static Regex {
    CANNOT.get_or_init(|| Regex::new(r"(?i)\b(can)(not)\b").expect("valid cannot regex"))
}

fn token() -> &'static Regex {
    TOKEN.get_or_init(|| {
        Regex::new(r"(?i)n't\b|\d+(?:[.,:]\d+)+|\w+(?:-\w+)*|'\w+|\.\.\.|[^\w\s]")
            .expect("valid token regex")
    })
}

/// Treebank-style English word tokenizer.
///
/// Whitespace and punctuation separate tokens, punctuation marks become tokens
/// of their own, and contractions split into stem and clitic:
/// `"I don't know."` → `["I", "do", "n't", "know", "."]`.
/// Hyphenated words and numbers with separators (`3.14`, `1,000`) stay whole.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreebankTokenizer;

impl Tokenizer for TreebankTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let text = text.replace(['\u{2019}', '\u{2018}'], "'");
        let text = negation().replace_all(&text, "$1 $2");
        let text = cannot().replace_all(&text, "$1 $2");

        token()
            .find_iter(&text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
