//! Lexicon-based sentiment scoring.
//!
//! Scores are the mean over recognised words of their polarity and
//! subjectivity. An intensifier directly before a word scales it; a negator
//! directly before the word (or before its intensifier) flips polarity by
//! [`lexicon::NEGATION_FACTOR`].

pub mod lexicon;

use lexicon::{INTENSIFIERS, NEGATION_FACTOR, NEGATORS, SENTIMENT_LEXICON};
use profiler_core::{CoreError, SentimentError, SentimentScore, SentimentScorer};
use std::collections::{HashMap, HashSet};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
struct WordSentiment {
    polarity: f64,
    subjectivity: f64,
}

#[derive(Debug, Clone)]
pub struct LexiconScorer {
    words: HashMap<String, WordSentiment>,
    intensifiers: HashMap<String, f64>,
    negators: HashSet<String>,
}

impl LexiconScorer {
    /// Scorer backed by the built-in English lexicon.
    pub fn new() -> Self {
        let words = SENTIMENT_LEXICON
            .iter()
            .map(|&(word, polarity, subjectivity)| {
                (
                    word.to_string(),
                    WordSentiment {
                        polarity,
                        subjectivity,
                    },
                )
            })
            .collect();
        let scorer = Self {
            words,
            intensifiers: INTENSIFIERS
                .iter()
                .map(|&(word, factor)| (word.to_string(), factor))
                .collect(),
            negators: NEGATORS.iter().map(|word| word.to_string()).collect(),
        };
        debug!("Loaded sentiment lexicon with {} words", scorer.words.len());
        scorer
    }

    /// Scorer over a custom lexicon. Fails when `entries` is empty.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = (S, f64, f64)>,
        S: Into<String>,
    {
        let words: HashMap<String, WordSentiment> = entries
            .into_iter()
            .map(|(word, polarity, subjectivity)| {
                (
                    word.into().to_lowercase(),
                    WordSentiment {
                        polarity,
                        subjectivity,
                    },
                )
            })
            .collect();

        if words.is_empty() {
            return Err(SentimentError::LexiconUnavailable {
                reason: "lexicon has no entries".to_string(),
            }
            .into());
        }

        Ok(Self {
            words,
            ..Self::new()
        })
    }

    fn is_negator(&self, token: &str) -> bool {
        self.negators.contains(token) || token.ends_with("n't")
    }

    fn assess(&self, tokens: &[String]) -> Vec<WordSentiment> {
        let mut assessments = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            let Some(&entry) = self.words.get(token.as_str()) else {
                continue;
            };

            let mut polarity = entry.polarity;
            let mut subjectivity = entry.subjectivity;
            let mut modifier_start = i;

            if i > 0 {
                if let Some(&factor) = self.intensifiers.get(tokens[i - 1].as_str()) {
                    polarity *= factor;
                    subjectivity *= factor;
                    modifier_start = i - 1;
                }
            }
            if modifier_start > 0 && self.is_negator(&tokens[modifier_start - 1]) {
                polarity *= NEGATION_FACTOR;
            }

            assessments.push(WordSentiment {
                polarity: polarity.clamp(-1.0, 1.0),
                subjectivity: subjectivity.clamp(0.0, 1.0),
            });
        }

        assessments
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> Result<SentimentScore, CoreError> {
        let tokens = tokenize(text);
        let assessments = self.assess(&tokens);
        if assessments.is_empty() {
            return Ok(SentimentScore::default());
        }

        let count = assessments.len() as f64;
        let polarity = assessments.iter().map(|a| a.polarity).sum::<f64>() / count;
        let subjectivity = assessments.iter().map(|a| a.subjectivity).sum::<f64>() / count;

        Ok(SentimentScore::new(polarity, subjectivity))
    }
}

/// Lowercase word tokens; apostrophes stay so contractions like "don't" survive.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|token| token.trim_matches('\'').to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_unknown_words_score_neutral() {
        let scorer = LexiconScorer::new();
        let score = scorer.score("the quick brown fox").unwrap();
        assert_eq!(score, SentimentScore::default());
    }

    #[test]
    fn test_average_over_recognised_words() {
        let scorer = LexiconScorer::new();
        // good (0.7, 0.6) and bad (-0.7, 0.67)
        let score = scorer.score("Good food, bad service").unwrap();
        assert!(approx(score.polarity, 0.0));
        assert!(approx(score.subjectivity, 0.635));
    }

    #[test]
    fn test_intensifier_scales_and_clamps() {
        let scorer = LexiconScorer::new();
        let score = scorer.score("very good").unwrap();
        assert!(approx(score.polarity, 0.91));
        assert!(approx(score.subjectivity, 0.78));

        let clamped = scorer.score("extremely awesome").unwrap();
        assert_eq!(clamped.polarity, 1.0);
        assert_eq!(clamped.subjectivity, 1.0);
    }

    #[test]
    fn test_negation_flips_polarity() {
        let scorer = LexiconScorer::new();
        let score = scorer.score("this is not good").unwrap();
        assert!(approx(score.polarity, -0.35));

        let contraction = scorer.score("it isn't very good").unwrap();
        assert!(approx(contraction.polarity, -0.455));

        // Only the token right before the word or its intensifier counts
        let distant = scorer.score("not that it was good").unwrap();
        assert!(approx(distant.polarity, 0.7));
    }

    #[test]
    fn test_scores_stay_in_bounds() {
        let scorer = LexiconScorer::new();
        for text in [
            "absolutely terrible horrible awful",
            "super amazing!!! best ever",
            "not not bad",
            "",
        ] {
            let score = scorer.score(text).unwrap();
            assert!((-1.0..=1.0).contains(&score.polarity));
            assert!((0.0..=1.0).contains(&score.subjectivity));
        }
    }

    #[test]
    fn test_custom_lexicon() {
        let scorer = LexiconScorer::from_entries([("Rust", 0.9, 0.2)]).unwrap();
        let score = scorer.score("I write rust").unwrap();
        assert!(approx(score.polarity, 0.9));

        let empty: Vec<(&str, f64, f64)> = Vec::new();
        assert!(matches!(
            LexiconScorer::from_entries(empty),
            Err(CoreError::Sentiment(SentimentError::LexiconUnavailable { .. }))
        ));
    }

    #[test]
    fn test_tokenize_keeps_contractions() {
        assert_eq!(
            tokenize("Don't panic, 'friend'!"),
            vec!["don't", "panic", "friend"]
        );
    }
}
