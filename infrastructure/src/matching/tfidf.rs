//! TF-IDF rule matcher.
//!
//! Every training pattern becomes one document. Terms are lowercase runs of
//! two or more word characters; weights use raw term counts times the
//! smoothed idf `ln((1 + n) / (1 + df)) + 1`, and each vector is
//! L2-normalized so cosine similarity reduces to a dot product. Terms never
//! seen in training are ignored at query time.

use crate::intents::TrainingData;
use regex::Regex;
use solver_application::ports::rule_matcher::{RuleMatch, RuleMatcher};
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("static token regex"));

/// Sparse L2-normalized vector, (term index, weight)
type SparseVector = Vec<(usize, f64)>;

fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TOKEN
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

pub struct TfIdfRuleMatcher {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    documents: Vec<SparseVector>,
    /// Intent index for each document
    document_intents: Vec<usize>,
    responses: Vec<Vec<String>>,
}

impl TfIdfRuleMatcher {
    /// Fit the vectorizer over every pattern of every intent
    pub fn fit(data: &TrainingData) -> Self {
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut document_frequency: Vec<usize> = Vec::new();
        let mut counted: Vec<Vec<(usize, usize)>> = Vec::new();
        let mut document_intents = Vec::new();

        for (intent_index, intent) in data.intents.iter().enumerate() {
            for pattern in &intent.patterns {
                let mut counts: HashMap<usize, usize> = HashMap::new();
                for token in tokenize(pattern) {
                    let next = vocabulary.len();
                    let index = *vocabulary.entry(token).or_insert(next);
                    if index == document_frequency.len() {
                        document_frequency.push(0);
                    }
                    *counts.entry(index).or_insert(0) += 1;
                }
                for index in counts.keys() {
                    document_frequency[*index] += 1;
                }
                counted.push(counts.into_iter().collect());
                document_intents.push(intent_index);
            }
        }

        let n = counted.len() as f64;
        let idf: Vec<f64> = document_frequency
            .iter()
            .map(|df| ((1.0 + n) / (1.0 + *df as f64)).ln() + 1.0)
            .collect();

        let documents = counted
            .into_iter()
            .map(|counts| weigh(&counts, &idf))
            .collect();

        debug!(
            "TF-IDF fitted: {} documents, {} terms",
            document_intents.len(),
            vocabulary.len()
        );

        Self {
            vocabulary,
            idf,
            documents,
            document_intents,
            responses: data.intents.iter().map(|i| i.responses.clone()).collect(),
        }
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    fn vectorize(&self, text: &str) -> SparseVector {
        let mut counts: HashMap<usize, usize> = HashMap::new();
        for token in tokenize(text) {
            if let Some(index) = self.vocabulary.get(&token) {
                *counts.entry(*index).or_insert(0) += 1;
            }
        }
        let counts: Vec<(usize, usize)> = counts.into_iter().collect();
        weigh(&counts, &self.idf)
    }

    /// Cosine similarity of `text` against every document
    pub fn similarities(&self, text: &str) -> Vec<f64> {
        let query: HashMap<usize, f64> = self.vectorize(text).into_iter().collect();
        self.documents
            .iter()
            .map(|doc| {
                doc.iter()
                    .filter_map(|(index, weight)| query.get(index).map(|q| q * weight))
                    .sum()
            })
            .collect()
    }
}

fn weigh(counts: &[(usize, usize)], idf: &[f64]) -> SparseVector {
    let mut vector: SparseVector = counts
        .iter()
        .map(|(index, count)| (*index, *count as f64 * idf[*index]))
        .collect();
    let norm = vector.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for (_, weight) in vector.iter_mut() {
            *weight /= norm;
        }
    }
    vector
}

impl RuleMatcher for TfIdfRuleMatcher {
    fn best_match(&self, text: &str) -> Option<RuleMatch> {
        let similarities = self.similarities(text);
        // First maximum wins on ties
        let (best, score) = similarities
            .iter()
            .copied()
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (i, s)| match best {
                Some((_, top)) if top >= s => best,
                _ => Some((i, s)),
            })?;

        Some(RuleMatch {
            responses: self.responses[self.document_intents[best]].clone(),
            score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intents::Intent;

    fn intent(patterns: &[&str], responses: &[&str]) -> Intent {
        Intent {
            tag: None,
            patterns: patterns.iter().map(|s| s.to_string()).collect(),
            responses: responses.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn matcher() -> TfIdfRuleMatcher {
        TfIdfRuleMatcher::fit(&TrainingData {
            intents: vec![
                intent(&["hello", "good morning"], &["Hello!"]),
                intent(&["thank you very much", "thanks"], &["You're welcome!"]),
                intent(&["goodbye", "see you later"], &["Bye!"]),
            ],
        })
    }

    #[test]
    fn test_tokenize_drops_single_chars() {
        assert_eq!(tokenize("I am OK, a b cd!"), vec!["am", "ok", "cd"]);
    }

    #[test]
    fn test_identical_text_scores_one() {
        let m = matcher().best_match("see you later").unwrap();
        assert!((m.score - 1.0).abs() < 1e-9);
        assert_eq!(m.responses, vec!["Bye!"]);
    }

    #[test]
    fn test_disjoint_vocabulary_scores_zero() {
        let m = matcher().best_match("quantum chromodynamics").unwrap();
        assert_eq!(m.score, 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        let m = matcher().best_match("thanks a lot").unwrap();
        assert_eq!(m.responses, vec!["You're welcome!"]);
        assert!((m.score - 1.0).abs() < 1e-9);

        let m = matcher().best_match("good evening").unwrap();
        assert_eq!(m.responses, vec!["Hello!"]);
        assert!(m.score > 0.3 && m.score < 1.0);
    }

    #[test]
    fn test_builtin_greeting() {
        let matcher = TfIdfRuleMatcher::fit(&TrainingData::builtin());
        assert_eq!(matcher.document_count(), 3);

        let m = matcher.best_match("Hi there").unwrap();
        assert!(m.score > 0.3);
        assert_eq!(m.responses, vec!["Hello!", "Hi there!", "Hey!"]);

        let m = matcher.best_match("How are you today?").unwrap();
        assert!(m.score > 0.3);
    }

    #[test]
    fn test_empty_training_data_matches_nothing() {
        let matcher = TfIdfRuleMatcher::fit(&TrainingData::default());
        assert!(matcher.best_match("hello").is_none());
    }

    #[test]
    fn test_vectors_are_normalized() {
        let matcher = matcher();
        for doc in &matcher.documents {
            let norm: f64 = doc.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < 1e-9);
        }
    }
}
