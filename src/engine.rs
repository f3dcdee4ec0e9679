//! Ranked "did you mean?" suggestions over a fixed dictionary.

use log::{debug, trace};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::dictionary::Dictionary;
use crate::distance::bounded_distance;
use crate::error::{AutocorrectError, Result};

/// A dictionary word together with its edit distance from the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub word: String,
    pub distance: usize,
}

/// Outcome of correcting a single word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "suggestions", rename_all = "snake_case")]
pub enum Correction {
    /// The word is in the dictionary; nothing to correct.
    ExactMatch,
    /// The word is not in the dictionary and nothing is within the threshold.
    NoMatch,
    /// Never empty. Ordered by distance, then lexicographically.
    Suggestions(Vec<Suggestion>),
}

impl Correction {
    /// The suggested words in rank order. Empty for `ExactMatch` and `NoMatch`.
    pub fn words(&self) -> Vec<&str> {
        match self {
            Correction::Suggestions(list) => list.iter().map(|s| s.word.as_str()).collect(),
            _ => Vec::new(),
        }
    }

    pub fn is_exact_match(&self) -> bool {
        matches!(self, Correction::ExactMatch)
    }
}

/// Suggests dictionary words within a fixed edit distance of a query.
///
/// Both the dictionary and the threshold are fixed at construction, so a
/// single engine can be shared across threads and queried concurrently.
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    dictionary: Dictionary,
    threshold: usize,
}

impl SuggestionEngine {
    /// Fails with [`AutocorrectError::InvalidThreshold`] if `threshold` is 0.
    pub fn new(dictionary: Dictionary, threshold: usize) -> Result<Self> {
        if threshold < 1 {
            return Err(AutocorrectError::InvalidThreshold(threshold));
        }
        debug!(
            "Suggestion engine ready: {} words, threshold {}",
            dictionary.len(),
            threshold
        );
        Ok(SuggestionEngine {
            dictionary,
            threshold,
        })
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Correct `typed` against the dictionary, reporting every word within
    /// the threshold.
    pub fn suggest(&self, typed: &str) -> Correction {
        if self.dictionary.contains(typed) {
            return Correction::ExactMatch;
        }

        let typed: Vec<char> = typed.chars().collect();
        // Index 0 stays empty: a distance-0 word would have been an exact match.
        let mut buckets: Vec<Vec<&str>> = vec![Vec::new(); self.threshold + 1];
        let mut candidates = 0usize;
        let mut chars: Vec<char> = Vec::new();

        for (word, word_len) in self.dictionary.entries() {
            // Edit distance is at least the length difference.
            if word_len.abs_diff(typed.len()) > self.threshold {
                continue;
            }
            candidates += 1;

            chars.clear();
            chars.extend(word.chars());
            let dist = bounded_distance(&typed, &chars, self.threshold);
            if dist > self.threshold {
                continue;
            }
            let bucket = &mut buckets[dist];
            let pos = bucket.partition_point(|w| *w <= word);
            bucket.insert(pos, word);
        }

        let suggestions: Vec<Suggestion> = buckets
            .into_iter()
            .enumerate()
            .flat_map(|(distance, bucket)| {
                bucket.into_iter().map(move |word| Suggestion {
                    word: word.to_string(),
                    distance,
                })
            })
            .collect();

        trace!(
            "{} candidates, {} within threshold {}",
            candidates,
            suggestions.len(),
            self.threshold
        );

        if suggestions.is_empty() {
            Correction::NoMatch
        } else {
            Correction::Suggestions(suggestions)
        }
    }

    /// Like [`suggest`](Self::suggest) but keeps only the best `limit`
    /// suggestions. A `limit` of 0 keeps them all.
    pub fn suggest_top(&self, typed: &str, limit: usize) -> Correction {
        match self.suggest(typed) {
            Correction::Suggestions(mut list) if limit > 0 => {
                list.truncate(limit);
                Correction::Suggestions(list)
            }
            other => other,
        }
    }

    /// Correct many words at once, in parallel. The `i`th result belongs to
    /// the `i`th input word.
    pub fn suggest_many(&self, words: &[String]) -> Vec<Correction> {
        words.par_iter().map(|word| self.suggest(word)).collect()
    }
}
