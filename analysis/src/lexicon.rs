//! Word and phrase lexicons with boundary-aware matching.
//!
//! A [`Lexicon`] is an ordered set of terms compiled once into word-boundary
//! regexes. Matching is exact whole-word (or whole-phrase): "like" never
//! counts inside "unlikely", and "guaranteed" does not count for the term
//! "guarantee". Stemming is deliberately not applied.

use regex::Regex;

/// Filler and hesitation terms counted as verbal disfluencies.
pub const DISFLUENCY_TERMS: &[&str] = &[
    "um", "uh", "you know", "like", "i mean", "ah", "hmm", "erm",
];

/// Persuasive-language terms counted toward the persuasiveness score.
pub const PERSUASIVE_TERMS: &[&str] = &[
    "guarantee",
    "proven",
    "effective",
    "must",
    "should",
    "need to",
    "save",
    "discover",
    "limited time",
    "now",
];

/// An ordered, read-only set of term patterns compiled for whole-word
/// matching.
///
/// Compile once at startup and share by reference; `count_matches` takes
/// `&self` and allocates nothing beyond the case-folded input, so concurrent
/// use requires no locking.
#[derive(Debug)]
pub struct Lexicon {
    patterns: Vec<(String, Regex)>,
}

impl Lexicon {
    /// Compile a lexicon from an ordered sequence of terms.
    ///
    /// Terms are lowercased and regex-escaped, then anchored on both sides
    /// with `\b` so each term only matches as a whole word or phrase.
    pub fn new<I, S>(terms: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut patterns = Vec::new();
        for term in terms {
            let term = term.as_ref().to_lowercase();
            let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(&term)))?;
            patterns.push((term, pattern));
        }
        Ok(Self { patterns })
    }

    /// The default disfluency lexicon.
    pub fn disfluencies() -> Result<Self, regex::Error> {
        Self::new(DISFLUENCY_TERMS)
    }

    /// The default persuasive-term lexicon.
    pub fn persuasive_terms() -> Result<Self, regex::Error> {
        Self::new(PERSUASIVE_TERMS)
    }

    /// Count whole-word occurrences of every term in `text`.
    ///
    /// The input is case-folded before matching, so "UM" and "um" count
    /// identically. Each term is counted independently; occurrences of
    /// different terms over overlapping spans all count. Empty text
    /// returns 0.
    pub fn count_matches(&self, text: &str) -> u32 {
        if text.is_empty() {
            return 0;
        }
        let folded = text.to_lowercase();
        self.patterns
            .iter()
            .map(|(_, pattern)| pattern.find_iter(&folded).count() as u32)
            .sum()
    }

    /// The terms in this lexicon, in their original order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|(term, _)| term.as_str())
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_are_case_insensitive() {
        let lexicon = Lexicon::new(["um"]).unwrap();
        assert_eq!(lexicon.count_matches("Um, I think, um, yes. UM!"), 3);
    }

    #[test]
    fn test_no_substring_matches() {
        let lexicon = Lexicon::new(["like"]).unwrap();
        assert_eq!(lexicon.count_matches("unlikely likeness dislike"), 0);
        assert_eq!(lexicon.count_matches("I like it, like, a lot"), 2);
    }

    #[test]
    fn test_phrases_match_whole() {
        let lexicon = Lexicon::new(["you know", "i mean"]).unwrap();
        assert_eq!(
            lexicon.count_matches("You know, I mean, you know what I mean"),
            4
        );
    }

    #[test]
    fn test_exact_match_does_not_stem() {
        let lexicon = Lexicon::new(["guarantee"]).unwrap();
        assert_eq!(lexicon.count_matches("a guaranteed result"), 0);
        assert_eq!(lexicon.count_matches("we guarantee results"), 1);
    }

    #[test]
    fn test_overlapping_terms_count_independently() {
        // "you know" and "know" overlap on the same span; both count.
        let lexicon = Lexicon::new(["you know", "know"]).unwrap();
        assert_eq!(lexicon.count_matches("you know best"), 2);
    }

    #[test]
    fn test_empty_text_returns_zero() {
        let lexicon = Lexicon::disfluencies().unwrap();
        assert_eq!(lexicon.count_matches(""), 0);
    }

    #[test]
    fn test_regex_metacharacters_are_escaped() {
        // Unescaped, "c++" would compile as a repetition and match runs of c's.
        let lexicon = Lexicon::new(["c++"]).unwrap();
        assert_eq!(lexicon.count_matches("cccc"), 0);
    }

    #[test]
    fn test_default_lexicons_compile() {
        assert_eq!(Lexicon::disfluencies().unwrap().len(), 8);
        assert_eq!(Lexicon::persuasive_terms().unwrap().len(), 10);
    }
}
