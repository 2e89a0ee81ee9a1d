//! Frequency-ranked keywords.

use std::collections::{HashMap, HashSet};

use super::segment::split_sentences;
use super::types::Keyword;

/// Tokens must be longer than this many characters to count.
const MIN_TOKEN_CHARS: usize = 2;

/// Ranks the most frequent non-stopword tokens of an entry.
#[derive(Debug, Clone)]
pub struct KeywordRanker {
    stopwords: HashSet<String>,
    limit: usize,
}

impl KeywordRanker {
    pub fn new(stopwords: &[String], limit: usize) -> Self {
        Self {
            stopwords: stopwords.iter().map(|w| w.trim().to_lowercase()).collect(),
            limit,
        }
    }

    pub fn rank(&self, text: &str) -> Vec<Keyword> {
        extract_keywords(text, &self.stopwords, self.limit)
    }
}

/// Split `text` on runs of non-alphanumeric characters, lowercase the tokens, drop
/// short tokens and stopwords, and return the `limit` most frequent tokens. Ties
/// keep first-seen order.
///
/// A capitalized token in the middle of a sentence is taken as a name and is never
/// a stopword: "lunch with Dan" keeps `dan` even though Indonesian lists it.
pub fn extract_keywords(text: &str, stopwords: &HashSet<String>, limit: usize) -> Vec<Keyword> {
    let mut counts: Vec<Keyword> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for sentence in split_sentences(text) {
        let tokens = sentence
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty());
        for (position, token) in tokens.enumerate() {
            let word = token.to_lowercase();
            if word.chars().count() <= MIN_TOKEN_CHARS
                || is_stopword(stopwords, token, &word, position == 0)
            {
                continue;
            }
            match index.get(&word) {
                Some(&i) => counts[i].count += 1,
                None => {
                    index.insert(word.clone(), counts.len());
                    counts.push(Keyword { word, count: 1 });
                }
            }
        }
    }

    // stable: ties stay in first-seen order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}

fn is_stopword(stopwords: &HashSet<String>, token: &str, word: &str, sentence_start: bool) -> bool {
    stopwords.contains(word) && (sentence_start || !token.starts_with(char::is_uppercase))
}
