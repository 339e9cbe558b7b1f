//! Question type extraction
//!
//! Recognizes a leading interrogative phrase and returns the topic that
//! follows it. Patterns are tried in declared order; the first match wins.

use regex::Regex;
use serde::Serialize;

use super::tables::{QuestionKind, QUESTION_PATTERNS, QUESTION_WORDS};
use crate::error::BaroError;

/// Compiled question pattern
#[derive(Debug, Clone)]
pub struct QuestionPattern {
    pub kind: QuestionKind,
    regex: Regex,
}

/// Detected question
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    pub kind: QuestionKind,
    pub topic: String,
}

/// Ordered question pattern table
#[derive(Debug, Clone)]
pub struct QuestionExtractor {
    patterns: Vec<QuestionPattern>,
}

impl QuestionExtractor {
    /// Compile the built-in patterns
    pub fn load() -> Result<Self, BaroError> {
        Self::from_patterns(QUESTION_PATTERNS)
    }

    /// Compile a pattern table.
    ///
    /// Every pattern must compile and capture at least one group.
    pub fn from_patterns(table: &[(QuestionKind, &str)]) -> Result<Self, BaroError> {
        let mut patterns = Vec::with_capacity(table.len());
        for (kind, source) in table {
            let regex = Regex::new(source).map_err(|e| BaroError::InvalidPattern {
                kind: kind.to_string(),
                source: e,
            })?;
            // group 0 is the whole match
            if regex.captures_len() < 2 {
                return Err(BaroError::MissingCapture(kind.to_string()));
            }
            patterns.push(QuestionPattern { kind: *kind, regex });
        }
        Ok(Self { patterns })
    }

    /// Detect the question kind and topic in normalized text
    pub fn detect(&self, text: &str) -> Option<Question> {
        for pattern in &self.patterns {
            if let Some(caps) = pattern.regex.captures(text) {
                let topic = caps
                    .iter()
                    .skip(1)
                    .flatten()
                    .last()
                    .map(|m| m.as_str().trim().to_string())
                    .unwrap_or_default();
                if topic.is_empty() {
                    continue;
                }
                return Some(Question {
                    kind: pattern.kind,
                    topic,
                });
            }
        }

        let word = leading_question_word(text)?;
        let topic = text[word.len()..].trim();
        if topic.is_empty() {
            return None;
        }
        Some(Question {
            kind: QuestionKind::General,
            topic: topic.to_string(),
        })
    }
}

/// Question word the normalized text starts with, as a whole word
pub fn leading_question_word(text: &str) -> Option<&'static str> {
    QUESTION_WORDS.iter().copied().find(|w| {
        text.strip_prefix(w)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with(' '))
    })
}
