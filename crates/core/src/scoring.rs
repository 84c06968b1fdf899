//! Answer Scoring
//!
//! Scoring lives behind the [`AnswerScorer`] strategy trait so an AI-backed
//! implementation can replace the keyword heuristic without touching the
//! session state machine. The default [`KeywordScorer`] is fully local and
//! infallible.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashSet;

#[cfg(test)]
use mockall::automock;

/// Scores a candidate answer against the reference answer.
///
/// Both strings are lower-cased and split on whitespace into sets of unique
/// words; the overlap with the reference set picks one of four discrete
/// bands: 9, 7, 5 or 3. Thresholds are checked in order and the first match
/// wins, so an empty reference answer satisfies the top band outright.
pub fn keyword_score(answer: &str, reference: &str) -> u32 {
    let answer_words = unique_words(answer);
    let reference_words = unique_words(reference);

    let overlap = answer_words.intersection(&reference_words).count() as f64;
    let need = reference_words.len() as f64;

    if overlap >= need * 0.7 {
        9
    } else if overlap >= need * 0.5 {
        7
    } else if overlap >= need * 0.3 {
        5
    } else {
        3
    }
}

fn unique_words(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Strategy interface for grading a free-text answer on a 0-10 scale.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AnswerScorer: Send + Sync {
    async fn score(&self, answer: &str, reference: &str) -> Result<u32>;
}

/// The default heuristic scorer.
pub struct KeywordScorer;

#[async_trait]
impl AnswerScorer for KeywordScorer {
    async fn score(&self, answer: &str, reference: &str) -> Result<u32> {
        Ok(keyword_score(answer, reference))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_word_sets_hit_the_top_band() {
        assert_eq!(keyword_score("var let const", "var let const"), 9);
    }

    #[test]
    fn empty_answer_hits_the_bottom_band() {
        assert_eq!(keyword_score("", "var let const"), 3);
    }

    #[test]
    fn empty_reference_satisfies_every_threshold() {
        // 0 >= 0.7 * 0, so the first band matches.
        assert_eq!(keyword_score("anything at all", ""), 9);
        assert_eq!(keyword_score("", ""), 9);
    }

    #[test]
    fn tokenization_is_case_insensitive() {
        assert_eq!(keyword_score("VAR Let CONST", "var let const"), 9);
    }

    #[test]
    fn duplicate_words_collapse() {
        // Repeating a matched word must not inflate the overlap.
        assert_eq!(keyword_score("var var var var", "var let const"), 5);
    }

    #[test]
    fn bands_follow_the_overlap_thresholds() {
        // Ten unique reference words; overlap counts map onto the bands.
        let reference = "w1 w2 w3 w4 w5 w6 w7 w8 w9 w10";
        let answer_with = |n: usize| {
            reference
                .split_whitespace()
                .take(n)
                .collect::<Vec<_>>()
                .join(" ")
        };

        assert_eq!(keyword_score(&answer_with(10), reference), 9);
        assert_eq!(keyword_score(&answer_with(7), reference), 9);
        assert_eq!(keyword_score(&answer_with(6), reference), 7);
        assert_eq!(keyword_score(&answer_with(5), reference), 7);
        assert_eq!(keyword_score(&answer_with(4), reference), 5);
        assert_eq!(keyword_score(&answer_with(3), reference), 5);
        assert_eq!(keyword_score(&answer_with(2), reference), 3);
    }

    #[test]
    fn unrelated_words_do_not_count() {
        assert_eq!(
            keyword_score("completely unrelated words here", "var let const"),
            3
        );
    }

    #[tokio::test]
    async fn keyword_scorer_never_fails() {
        let scorer = KeywordScorer;
        let score = scorer.score("var let const", "var let const").await.unwrap();
        assert_eq!(score, 9);
    }
}
