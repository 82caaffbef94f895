//! Sentence splitting
//!
//! Whitespace runs are collapsed to a single space before splitting, so a
//! sentence boundary is a terminal mark (`.`, `!`, `?`) followed by a space.
//! The mark stays with the sentence it ends.

use crate::types::Sentence;

/// Characters that may end a sentence
const TERMINALS: [char; 3] = ['.', '!', '?'];

/// Whitespace that separates sentences and words
///
/// The Unicode `White_Space` set without NEL (U+0085), plus the byte order
/// mark (U+FEFF).
pub fn is_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Collapse every whitespace run (including newlines) to a single space
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;

    for ch in text.chars() {
        if is_space(ch) {
            if !in_space {
                out.push(' ');
                in_space = true;
            }
        } else {
            out.push(ch);
            in_space = false;
        }
    }

    out
}

/// Split raw text into ordered, trimmed, non-empty sentences
///
/// Text without terminal punctuation yields a single sentence.
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    let collapsed = collapse_whitespace(text);
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;

    for (pos, ch) in collapsed.char_indices() {
        if ch == ' ' && prev.is_some_and(|p| TERMINALS.contains(&p)) {
            push_trimmed(&mut sentences, &collapsed[start..pos]);
            start = pos + ch.len_utf8();
        }
        prev = Some(ch);
    }
    push_trimmed(&mut sentences, &collapsed[start..]);

    sentences
}

fn push_trimmed(sentences: &mut Vec<Sentence>, piece: &str) {
    let trimmed = piece.trim_matches(is_space);
    if !trimmed.is_empty() {
        let index = sentences.len();
        sentences.push(Sentence::new(trimmed, index));
    }
}
