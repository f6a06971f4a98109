//! Input cleanup and word splitting

use glossa_core::constant::{MULTIPLE_WHITESPACE, NUMBERS, PUNCTUATION};
use glossa_core::is_logogram;
use std::mem;

/// Normalizes raw input: trims, lowercases, strips punctuation and digits,
/// and collapses whitespace runs to single spaces.
pub fn clean_up_input_text(text: &str) -> String {
    let lowercased = text.trim().to_lowercase();
    let without_punctuation = PUNCTUATION.replace_all(&lowercased, "");
    let without_numbers = NUMBERS.replace_all(&without_punctuation, "");
    MULTIPLE_WHITESPACE
        .replace_all(&without_numbers, " ")
        .into_owned()
}

/// Splits cleaned text at single spaces. Logogram characters do not rely
/// on spacing and become one-character words of their own.
pub fn split_text_into_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    for ch in text.chars() {
        if ch == ' ' {
            if !current.is_empty() {
                words.push(mem::take(&mut current));
            }
        } else if is_logogram(ch) {
            if !current.is_empty() {
                words.push(mem::take(&mut current));
            }
            words.push(ch.to_string());
        } else {
            current.push(ch);
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}
