//! Sentence segmentation.

use std::sync::LazyLock;

use regex::Regex;

static RE_LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\r\n]+").unwrap());

/// Terminal punctuation followed by whitespace. The punctuation stays with the
/// sentence before it.
static RE_SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]\s+").unwrap());

const BULLETS: &[char] = &['-', '–', '•'];

/// Split `text` into trimmed, non-empty sentences in document order.
///
/// Breaks on newline runs and on whitespace after `.`, `!` or `?`. Leading bullet
/// markers are stripped; fragments left with no letters or digits are dropped.
/// Text without terminal punctuation is one sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    for line in RE_LINE_BREAK.split(text) {
        let mut start = 0;
        for m in RE_SENTENCE_END.find_iter(line) {
            push_sentence(&mut sentences, &line[start..m.start() + 1]);
            start = m.end();
        }
        push_sentence(&mut sentences, &line[start..]);
    }
    sentences
}

fn push_sentence<'a>(sentences: &mut Vec<&'a str>, raw: &'a str) {
    let sentence = raw.trim().trim_start_matches(BULLETS).trim();
    if sentence.chars().any(char::is_alphanumeric) {
        sentences.push(sentence);
    }
}
