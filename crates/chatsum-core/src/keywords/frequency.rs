use std::collections::HashMap;

use super::{join_turns, KeywordScore};
use crate::text::LinguisticResources;

/// Most frequent content words across all turns.
///
/// Every turn counts, including unpaired trailing ones. Ties keep the order in
/// which the words were first seen.
pub fn frequency_keywords<U: AsRef<str>, A: AsRef<str>>(
    resources: &LinguisticResources,
    user_turns: &[U],
    ai_turns: &[A],
    top_n: usize,
) -> Vec<KeywordScore<usize>> {
    let blob = join_turns(user_turns, ai_turns);

    // Insertion-ordered counts
    let mut counts: Vec<KeywordScore<usize>> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for word in resources.content_words(&blob) {
        match positions.get(&word) {
            Some(&i) => counts[i].score += 1,
            None => {
                positions.insert(word.clone(), counts.len());
                counts.push(KeywordScore::new(word, 1));
            }
        }
    }

    let distinct = counts.len();
    // Stable sort keeps first-seen order among equal counts
    counts.sort_by(|a, b| b.score.cmp(&a.score));
    counts.truncate(top_n);

    tracing::debug!(distinct, returned = counts.len(), "frequency keywords");
    counts
}
