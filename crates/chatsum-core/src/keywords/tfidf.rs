use std::collections::BTreeMap;

use super::KeywordScore;
use crate::stats::exchange_count;
use crate::text::LinguisticResources;

/// Shortest token admitted to the TF-IDF vocabulary
const MIN_TERM_CHARS: usize = 2;

/// Per-document weight normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalization {
    /// Scale each document's weight vector to unit Euclidean length
    #[default]
    L2,
    /// Raw tf × idf
    None,
}

/// One document per paired exchange: `user_turns[i] + " " + ai_turns[i]`.
///
/// Trailing turns without a partner are not part of the corpus.
pub fn exchange_documents<U: AsRef<str>, A: AsRef<str>>(
    user_turns: &[U],
    ai_turns: &[A],
) -> Vec<String> {
    user_turns
        .iter()
        .zip(ai_turns)
        .map(|(user, ai)| format!("{} {}", user.as_ref(), ai.as_ref()))
        .collect()
}

/// Top `top_n` terms by TF-IDF weight summed over all exchanges, L2-normalized
pub fn tfidf_keywords<U: AsRef<str>, A: AsRef<str>>(
    resources: &LinguisticResources,
    user_turns: &[U],
    ai_turns: &[A],
    top_n: usize,
) -> Vec<KeywordScore<f64>> {
    TfidfExtractor::new(resources).extract(user_turns, ai_turns, top_n)
}

/// TF-IDF keyword extractor over an exchange corpus.
///
/// Weights use the smoothed inverse document frequency
/// `idf(t) = ln((1 + N) / (1 + df(t))) + 1`. Stop words never enter the
/// vocabulary. Results are sorted by summed weight, highest first, with ties
/// broken alphabetically.
#[derive(Debug, Clone, Copy)]
pub struct TfidfExtractor<'a> {
    resources: &'a LinguisticResources,
    normalization: Normalization,
}

impl<'a> TfidfExtractor<'a> {
    pub fn new(resources: &'a LinguisticResources) -> Self {
        Self {
            resources,
            normalization: Normalization::default(),
        }
    }

    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    pub fn extract<U: AsRef<str>, A: AsRef<str>>(
        &self,
        user_turns: &[U],
        ai_turns: &[A],
        top_n: usize,
    ) -> Vec<KeywordScore<f64>> {
        let documents = exchange_documents(user_turns, ai_turns);
        debug_assert_eq!(documents.len(), exchange_count(user_turns, ai_turns));
        self.extract_from_documents(&documents, top_n)
    }

    /// Score an arbitrary document corpus. An empty corpus yields no keywords.
    pub fn extract_from_documents(
        &self,
        documents: &[String],
        top_n: usize,
    ) -> Vec<KeywordScore<f64>> {
        let term_freqs: Vec<BTreeMap<String, f64>> =
            documents.iter().map(|doc| self.term_frequencies(doc)).collect();

        let mut term_df: BTreeMap<&str, usize> = BTreeMap::new();
        for freqs in &term_freqs {
            for term in freqs.keys() {
                *term_df.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        let total_docs = documents.len() as f64;
        let mut totals: BTreeMap<&str, f64> = BTreeMap::new();

        for freqs in &term_freqs {
            let mut vector: Vec<(&str, f64)> = freqs
                .iter()
                .map(|(term, &tf)| {
                    let df = term_df.get(term.as_str()).copied().unwrap_or(1) as f64;
                    let idf = ((total_docs + 1.0) / (df + 1.0)).ln() + 1.0;
                    (term.as_str(), tf * idf)
                })
                .collect();

            if self.normalization == Normalization::L2 {
                let norm = vector.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
                if norm > 0.0 {
                    for (_, weight) in &mut vector {
                        *weight /= norm;
                    }
                }
            }

            for (term, weight) in vector {
                *totals.entry(term).or_insert(0.0) += weight;
            }
        }

        let mut keywords: Vec<KeywordScore<f64>> = totals
            .into_iter()
            .map(|(term, score)| KeywordScore::new(term, score))
            .collect();
        keywords.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.term.cmp(&b.term)));
        keywords.truncate(top_n);

        tracing::debug!(
            documents = documents.len(),
            vocabulary = term_df.len(),
            returned = keywords.len(),
            "tfidf keywords"
        );
        keywords
    }

    /// Raw counts of vocabulary terms in one document
    fn term_frequencies(&self, document: &str) -> BTreeMap<String, f64> {
        let mut freqs = BTreeMap::new();
        for term in self.resources.content_words(document) {
            if term.chars().count() >= MIN_TERM_CHARS {
                *freqs.entry(term).or_insert(0.0) += 1.0;
            }
        }
        freqs
    }
}
