use std::collections::HashMap;

use serde::Serialize;

/// A token with its Penn Treebank part-of-speech tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaggedToken {
    pub token: String,
    pub tag: String,
}

impl TaggedToken {
    /// Singular or plural, common or proper noun (`NN`, `NNS`, `NNP`, `NNPS`)
    pub fn is_noun(&self) -> bool {
        self.tag.starts_with("NN")
    }
}

/// Assigns part-of-speech tags to a token sequence, one tag per token
pub trait PosTagger: Send + Sync {
    fn tag(&self, tokens: &[String]) -> Vec<TaggedToken>;
}

/// Closed-class words plus common open-class words whose tag the suffix rules
/// would get wrong
const LEXICON: &[(&str, &str)] = &[
    // determiners
    ("a", "DT"), ("an", "DT"), ("the", "DT"), ("this", "DT"), ("that", "DT"), ("these", "DT"),
    ("those", "DT"), ("all", "DT"), ("any", "DT"), ("each", "DT"), ("every", "DT"),
    ("some", "DT"), ("no", "DT"), ("another", "DT"), ("both", "DT"),
    // pronouns
    ("i", "PRP"), ("me", "PRP"), ("you", "PRP"), ("he", "PRP"), ("him", "PRP"), ("she", "PRP"),
    ("it", "PRP"), ("we", "PRP"), ("us", "PRP"), ("they", "PRP"), ("them", "PRP"),
    ("myself", "PRP"), ("yourself", "PRP"), ("itself", "PRP"), ("themselves", "PRP"),
    ("my", "PRP$"), ("your", "PRP$"), ("his", "PRP$"), ("her", "PRP$"), ("its", "PRP$"),
    ("our", "PRP$"), ("their", "PRP$"),
    // wh-words
    ("what", "WP"), ("who", "WP"), ("whom", "WP"), ("which", "WDT"), ("whose", "WP$"),
    ("when", "WRB"), ("where", "WRB"), ("why", "WRB"), ("how", "WRB"),
    // prepositions and subordinating conjunctions
    ("of", "IN"), ("in", "IN"), ("on", "IN"), ("at", "IN"), ("by", "IN"), ("for", "IN"),
    ("with", "IN"), ("about", "IN"), ("from", "IN"), ("into", "IN"), ("over", "IN"),
    ("under", "IN"), ("after", "IN"), ("before", "IN"), ("between", "IN"), ("through", "IN"),
    ("during", "IN"), ("without", "IN"), ("against", "IN"), ("like", "IN"), ("if", "IN"),
    ("because", "IN"), ("while", "IN"), ("until", "IN"), ("than", "IN"), ("as", "IN"),
    ("since", "IN"), ("though", "IN"), ("although", "IN"), ("whether", "IN"),
    // coordinating conjunctions
    ("and", "CC"), ("or", "CC"), ("but", "CC"), ("nor", "CC"), ("yet", "CC"),
    // modals and particles
    ("can", "MD"), ("could", "MD"), ("will", "MD"), ("would", "MD"), ("shall", "MD"),
    ("should", "MD"), ("may", "MD"), ("might", "MD"), ("must", "MD"), ("ca", "MD"),
    ("wo", "MD"), ("to", "TO"), ("not", "RB"), ("n't", "RB"), ("there", "EX"),
    // auxiliaries and frequent verbs
    ("be", "VB"), ("am", "VBP"), ("is", "VBZ"), ("are", "VBP"), ("was", "VBD"),
    ("were", "VBD"), ("been", "VBN"), ("being", "VBG"), ("have", "VBP"), ("has", "VBZ"),
    ("had", "VBD"), ("do", "VBP"), ("does", "VBZ"), ("did", "VBD"), ("done", "VBN"),
    ("get", "VB"), ("got", "VBD"), ("make", "VB"), ("made", "VBD"), ("know", "VB"),
    ("knew", "VBD"), ("think", "VB"), ("thought", "VBD"), ("want", "VB"), ("need", "VB"),
    ("go", "VB"), ("went", "VBD"), ("gone", "VBN"), ("say", "VB"), ("said", "VBD"),
    ("see", "VB"), ("saw", "VBD"), ("seen", "VBN"), ("tell", "VB"), ("told", "VBD"),
    ("give", "VB"), ("gave", "VBD"), ("given", "VBN"), ("take", "VB"), ("took", "VBD"),
    ("taken", "VBN"), ("come", "VB"), ("came", "VBD"), ("find", "VB"), ("found", "VBD"),
    ("let", "VB"), ("try", "VB"), ("seem", "VB"), ("mean", "VB"), ("keep", "VB"),
    ("learn", "VB"), ("explain", "VB"), ("understand", "VB"), ("suggest", "VB"),
    ("recommend", "VB"), ("become", "VB"), ("provide", "VB"), ("include", "VB"),
    ("hold", "VB"), ("held", "VBD"), ("used", "VBN"), ("holds", "VBZ"), ("uses", "VBZ"),
    ("makes", "VBZ"), ("takes", "VBZ"), ("gets", "VBZ"), ("gives", "VBZ"), ("says", "VBZ"),
    ("seems", "VBZ"), ("means", "VBZ"), ("needs", "VBZ"), ("wants", "VBZ"), ("knows", "VBZ"),
    ("goes", "VBZ"), ("contains", "VBZ"), ("returns", "VBZ"), ("helps", "VBZ"),
    ("'s", "VBZ"), ("'re", "VBP"), ("'m", "VBP"), ("'ve", "VBP"), ("'ll", "MD"), ("'d", "MD"),
    // adjectives
    ("good", "JJ"), ("great", "JJ"), ("new", "JJ"), ("old", "JJ"), ("big", "JJ"),
    ("small", "JJ"), ("large", "JJ"), ("little", "JJ"), ("long", "JJ"), ("short", "JJ"),
    ("high", "JJ"), ("low", "JJ"), ("easy", "JJ"), ("hard", "JJ"), ("nice", "JJ"),
    ("happy", "JJ"), ("sure", "JJ"), ("important", "JJ"), ("different", "JJ"),
    ("many", "JJ"), ("much", "JJ"), ("other", "JJ"), ("same", "JJ"), ("own", "JJ"),
    ("few", "JJ"), ("next", "JJ"), ("last", "JJ"), ("first", "JJ"),
    ("red", "JJ"), ("best", "JJS"), ("most", "JJS"), ("better", "JJR"), ("more", "JJR"), ("less", "JJR"),
    // adverbs
    ("also", "RB"), ("very", "RB"), ("too", "RB"), ("just", "RB"), ("really", "RB"),
    ("well", "RB"), ("maybe", "RB"), ("perhaps", "RB"), ("always", "RB"), ("never", "RB"),
    ("often", "RB"), ("now", "RB"), ("then", "RB"), ("here", "RB"), ("so", "RB"),
    ("again", "RB"), ("still", "RB"), ("already", "RB"), ("even", "RB"), ("only", "RB"),
    ("however", "RB"), ("soon", "RB"),
    // nouns with verb, adverb or adjective endings
    ("family", "NN"), ("reply", "NN"), ("supply", "NN"), ("assembly", "NN"),
    ("butterfly", "NN"), ("belly", "NN"), ("jelly", "NN"), ("rally", "NN"), ("ally", "NN"),
    ("bully", "NN"), ("anomaly", "NN"), ("monopoly", "NN"), ("lily", "NN"), ("holly", "NN"),
    ("string", "NN"), ("thing", "NN"), ("something", "NN"), ("anything", "NN"),
    ("nothing", "NN"), ("everything", "NN"), ("meeting", "NN"), ("building", "NN"),
    ("morning", "NN"), ("evening", "NN"), ("ceiling", "NN"), ("king", "NN"), ("ring", "NN"),
    ("wing", "NN"), ("spring", "NN"), ("swing", "NN"), ("wedding", "NN"), ("pudding", "NN"),
    ("painting", "NN"), ("clothing", "NN"), ("feeling", "NN"), ("setting", "NN"),
    ("ending", "NN"), ("beginning", "NN"), ("training", "NN"), ("housing", "NN"),
    ("marketing", "NN"), ("programming", "NN"), ("engineering", "NN"), ("learning", "NN"),
    ("strings", "NNS"), ("things", "NNS"), ("meetings", "NNS"), ("buildings", "NNS"),
    ("settings", "NNS"), ("feelings", "NNS"), ("variables", "NNS"), ("vegetables", "NNS"),
    ("speed", "NN"), ("seed", "NN"), ("bed", "NN"), ("hundred", "CD"), ("feed", "NN"),
    ("breed", "NN"), ("weed", "NN"), ("shed", "NN"), ("greed", "NN"),
    ("variable", "NN"), ("vegetable", "NN"), ("timetable", "NN"), ("handful", "NN"),
    ("mouthful", "NN"), ("spoonful", "NN"),
    // interjections
    ("hello", "UH"), ("hi", "UH"), ("hey", "UH"), ("oh", "UH"), ("ok", "UH"),
    ("okay", "UH"), ("yes", "UH"), ("please", "UH"), ("wow", "UH"), ("bye", "UH"),
];

/// Suffixes that mark adjectives ("delicious", "helpful", "readable")
const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "able", "ible", "ical", "less"];

/// Plural-looking endings that are usually singular ("class", "virus", "analysis")
const NON_PLURAL_ENDINGS: &[&str] = &["ss", "us", "is"];

/// Deterministic lexicon and suffix-rule tagger emitting Penn Treebank tags.
///
/// Tagging order per token: punctuation and numbers, lexicon lookup,
/// capitalization (`NNP`), suffix rules, then `NN` as the open-class default.
/// The `-ing` and `-ed` rules only fire after a verb, modal, `to` or personal
/// pronoun, so a bare keyword list reads as nouns. A default-noun token
/// directly after `TO` or a modal is re-tagged `VB`.
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    lexicon: HashMap<&'static str, &'static str>,
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconTagger {
    pub fn new() -> Self {
        Self {
            lexicon: LEXICON.iter().copied().collect(),
        }
    }

    fn tag_token(&self, token: &str, previous: Option<&str>) -> &'static str {
        if !token.chars().any(char::is_alphanumeric) {
            return punctuation_tag(token);
        }
        if is_number(token) {
            return "CD";
        }

        let lower = token.to_lowercase();
        if let Some(tag) = self.lexicon.get(lower.as_str()).copied() {
            return tag;
        }
        if is_capitalized(token) {
            return if is_plural(&lower) { "NNPS" } else { "NNP" };
        }
        if let Some(tag) = suffix_tag(&lower, previous.is_some_and(is_verbal_context)) {
            return tag;
        }

        match previous {
            Some("TO") | Some("MD") => "VB",
            _ if is_plural(&lower) => "NNS",
            _ => "NN",
        }
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, tokens: &[String]) -> Vec<TaggedToken> {
        let mut tagged: Vec<TaggedToken> = Vec::with_capacity(tokens.len());
        for token in tokens {
            let previous = tagged.last().map(|t| t.tag.as_str());
            let tag = self.tag_token(token, previous);
            tagged.push(TaggedToken {
                token: token.clone(),
                tag: tag.to_string(),
            });
        }
        tagged
    }
}

fn punctuation_tag(token: &str) -> &'static str {
    match token {
        "." | "!" | "?" => ".",
        "," => ",",
        ":" | ";" | "..." | "-" => ":",
        "(" | "[" | "{" => "(",
        ")" | "]" | "}" => ")",
        "$" => "$",
        "#" => "#",
        "\"" | "'" => "''",
        _ => "SYM",
    }
}

fn is_number(token: &str) -> bool {
    token.starts_with(|c: char| c.is_ascii_digit())
        && token
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | ':'))
}

fn is_capitalized(token: &str) -> bool {
    let mut chars = token.chars();
    chars.next().is_some_and(char::is_uppercase) && chars.any(char::is_lowercase)
}

fn is_plural(lower: &str) -> bool {
    lower.len() > 3
        && lower.ends_with('s')
        && !NON_PLURAL_ENDINGS.iter().any(|e| lower.ends_with(e))
}

/// Tags after which an `-ing` or `-ed` word is read as a verb form
fn is_verbal_context(tag: &str) -> bool {
    tag.starts_with("VB") || matches!(tag, "MD" | "TO" | "PRP")
}

fn suffix_tag(lower: &str, verbal_context: bool) -> Option<&'static str> {
    let len = lower.chars().count();
    if len > 4 && lower.ends_with("ly") {
        return Some("RB");
    }
    if verbal_context && len > 4 && lower.ends_with("ing") {
        return Some("VBG");
    }
    if verbal_context && len > 4 && lower.ends_with("ed") {
        return Some("VBD");
    }
    if len > 5 && ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return Some("JJ");
    }
    None
}
