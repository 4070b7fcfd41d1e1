//! Flesch Reading Ease scoring.
//!
//! Implements the standard formula
//! `206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)`
//! with a heuristic English syllable counter. Higher scores mean easier
//! text; natural language typically lands between -100 and 120.

/// Score `text` with the Flesch Reading Ease formula.
///
/// Degenerate input (no countable words) returns 0.0 as a neutral value
/// rather than failing; text with words but no sentence terminator is
/// treated as a single sentence. Callers round at the report boundary, not
/// here.
pub fn flesch_reading_ease(text: &str) -> f64 {
    let words: Vec<&str> = words(text).collect();
    if words.is_empty() {
        return 0.0;
    }

    let word_count = words.len() as f64;
    let sentence_count = sentence_count(text).max(1) as f64;
    let syllable_count: u32 = words.iter().map(|w| syllables_in(w)).sum();

    206.835 - 1.015 * (word_count / sentence_count) - 84.6 * (syllable_count as f64 / word_count)
}

/// Whitespace-delimited tokens that contain at least one alphabetic
/// character. Bare punctuation and numbers are not words for the formula.
fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .filter(|token| token.chars().any(|c| c.is_alphabetic()))
}

/// Number of sentence segments containing at least one alphabetic character,
/// split on terminating punctuation.
fn sentence_count(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|segment| segment.chars().any(|c| c.is_alphabetic()))
        .count()
}

/// Heuristic syllable count for one English word.
///
/// Counts contiguous vowel groups (with y as a vowel), discounts a silent
/// trailing 'e', and floors at one syllable per word.
fn syllables_in(word: &str) -> u32 {
    let normalized: String = word
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect::<String>()
        .to_lowercase();
    if normalized.is_empty() {
        return 1;
    }

    let mut count = 0u32;
    let mut prev_was_vowel = false;
    for c in normalized.chars() {
        let is_vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if is_vowel && !prev_was_vowel {
            count += 1;
        }
        prev_was_vowel = is_vowel;
    }

    // Silent trailing 'e' ("time", "save") unless it is the only vowel sound.
    if normalized.ends_with('e') && !normalized.ends_with("le") && count > 1 {
        count -= 1;
    }

    count.max(1)
}
