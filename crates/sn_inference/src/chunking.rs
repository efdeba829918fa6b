//! Greedy, sentence-preserving partitioning of article text.
//!
//! Sentences are found by splitting on the literal `". "` delimiter, so
//! abbreviations, decimals and a missing trailing delimiter are not
//! special-cased. Each sentence keeps its period; joining the sentences of
//! every segment with a single space gives the input back unchanged.

pub const SENTENCE_DELIMITER: &str = ". ";

/// Number of whitespace-separated tokens in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Splits `text` on `". "`, keeping the period on each sentence.
///
/// A trailing delimiter yields a final empty sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut sentences: Vec<&str> = text
        .split_inclusive(SENTENCE_DELIMITER)
        .map(|s| match s.strip_suffix(SENTENCE_DELIMITER) {
            Some(head) => &s[..head.len() + 1],
            None => s,
        })
        .collect();

    if text.ends_with(SENTENCE_DELIMITER) {
        sentences.push("");
    }

    sentences
}

/// Packs consecutive sentences into segments of at most `max_length` words.
///
/// A segment is only flushed when it already holds a sentence, so a single
/// sentence longer than `max_length` becomes its own oversized segment.
pub fn chunk_text(text: &str, max_length: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_length = 0;

    for sentence in split_sentences(text) {
        let sentence_length = word_count(sentence);
        if current_length + sentence_length > max_length && !current.is_empty() {
            chunks.push(current.join(" "));
            current.clear();
            current_length = 0;
        }
        current.push(sentence);
        current_length += sentence_length;
    }

    if !current.is_empty() {
        chunks.push(current.join(" "));
    }

    chunks
}
