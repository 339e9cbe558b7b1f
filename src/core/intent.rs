//! Intent classification and query extraction
//!
//! # Algorithm
//! 1. Fast path: literal groups (time, date, own location) win outright
//!    with confidence 0.95.
//! 2. Synonym scan over every `(intent, variant)` pair:
//!    - containment: `len(variant) / len(text)` when the variant occurs in the text
//!    - similarity: the ratio against the whole text, counted only above 0.8
//!
//!    The single best score wins; ties keep the first pair seen.
//! 3. Nothing matched: no intent, confidence 0.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use super::similarity::{SequenceRatio, Similarity};
use super::tables::{Intent, SynonymTable, BASE_STOP_WORDS, FAST_PATH, FAST_PATH_CONFIDENCE};
use crate::error::BaroError;

/// Similarity must exceed this to count as a match
const SIMILARITY_FLOOR: f64 = 0.8;

/// Outcome of one classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    pub intent: Option<Intent>,
    /// Heuristic match strength in `[0, 1]`
    pub confidence: f64,
}

impl Classification {
    pub fn none() -> Self {
        Self {
            intent: None,
            confidence: 0.0,
        }
    }

    /// Intent name for logs, `"none"` when unclassified
    pub fn intent_name(&self) -> &'static str {
        self.intent.map(|i| i.name()).unwrap_or("none")
    }
}

/// Rule-based intent classifier
pub struct IntentClassifier {
    synonyms: SynonymTable,
    similarity: Arc<dyn Similarity>,
}

impl IntentClassifier {
    /// Load the built-in tables with the default similarity
    pub fn load() -> Result<Self, BaroError> {
        Ok(Self::new(SynonymTable::load()?, Arc::new(SequenceRatio)))
    }

    pub fn new(synonyms: SynonymTable, similarity: Arc<dyn Similarity>) -> Self {
        Self {
            synonyms,
            similarity,
        }
    }

    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }

    /// Classify already-normalized text
    pub fn detect_intent(&self, text: &str) -> Classification {
        if text.is_empty() {
            return Classification::none();
        }

        for (intent, literals) in FAST_PATH {
            if literals.iter().any(|l| text.contains(l)) {
                debug!(intent = %intent, "fast-path match");
                return Classification {
                    intent: Some(*intent),
                    confidence: FAST_PATH_CONFIDENCE,
                };
            }
        }

        let text_len = text.chars().count() as f64;
        let mut best = Classification::none();

        for (intent, variants) in self.synonyms.rules() {
            for variant in variants {
                if text.contains(variant.as_str()) {
                    let score = (variant.chars().count() as f64 / text_len).min(1.0);
                    if score > best.confidence {
                        best = Classification {
                            intent: Some(*intent),
                            confidence: score,
                        };
                    }
                }

                let sim = self.similarity.ratio(text, variant);
                if sim > SIMILARITY_FLOOR && sim > best.confidence {
                    best = Classification {
                        intent: Some(*intent),
                        confidence: sim,
                    };
                }
            }
        }

        debug!(
            intent = best.intent_name(),
            confidence = best.confidence,
            "synonym scan"
        );
        best
    }

    /// Strip activation, politeness and intent words from normalized text.
    ///
    /// Returns an empty string if nothing is left.
    pub fn extract_query(&self, text: &str, intent: Option<Intent>) -> String {
        let mut stop_words: HashSet<&str> = BASE_STOP_WORDS.iter().copied().collect();
        if let Some(intent) = intent {
            for variant in self.synonyms.variants(intent) {
                stop_words.extend(variant.split_whitespace());
            }
        }

        text.split_whitespace()
            .filter(|w| !stop_words.contains(w))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::normalize::normalize;

    fn classifier() -> IntentClassifier {
        IntentClassifier::load().unwrap()
    }

    fn detect(text: &str) -> Classification {
        classifier().detect_intent(&normalize(text))
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(classifier().detect_intent(""), Classification::none());
    }

    #[test]
    fn test_fast_path_time() {
        let c = detect("qué hora es");
        assert_eq!(c.intent, Some(Intent::Hora));
        assert_eq!(c.confidence, 0.95);
    }

    #[test]
    fn test_fast_path_date_and_location() {
        assert_eq!(detect("dime la fecha").intent, Some(Intent::Fecha));
        let c = detect("¿dónde estoy?");
        assert_eq!(c.intent, Some(Intent::Ubicacion));
        assert_eq!(c.confidence, 0.95);
    }

    #[test]
    fn test_fast_path_bypasses_scan() {
        // "clima" would score 5/19 in the scan, but "hora" is a fast-path literal
        let c = detect("clima a esta hora");
        assert_eq!(c.intent, Some(Intent::Hora));
        assert_eq!(c.confidence, 0.95);
    }

    #[test]
    fn test_exact_variant_scores_one() {
        let c = detect("Hola");
        assert_eq!(c.intent, Some(Intent::Saludo));
        assert_eq!(c.confidence, 1.0);
    }

    #[test]
    fn test_containment_ratio() {
        let c = detect("cuánto es 25 por 8");
        assert_eq!(c.intent, Some(Intent::Calculadora));
        assert!((c.confidence - 9.0 / 18.0).abs() < 1e-9);
    }

    #[test]
    fn test_longer_variant_wins() {
        // "chiste" (6) and "cuentame un chiste" (18) both match; the longer covers more
        let c = detect("cuéntame un chiste");
        assert_eq!(c.intent, Some(Intent::Chiste));
        assert_eq!(c.confidence, 1.0);
    }

    #[test]
    fn test_similarity_match() {
        // one letter off "noticias": 2 * 7 / 16 > 0.8, not a substring
        let c = detect("notisias");
        assert_eq!(c.intent, Some(Intent::Noticias));
        assert!(c.confidence > 0.8 && c.confidence < 1.0);
    }

    #[test]
    fn test_tie_keeps_first_intent() {
        // "tiempo" is a variant of both hora and clima; hora is declared first
        let c = detect("tiempo");
        assert_eq!(c.intent, Some(Intent::Hora));
    }

    #[test]
    fn test_no_match() {
        let c = detect("fotosintesis");
        assert_eq!(c, Classification::none());
        assert_eq!(c.intent_name(), "none");
    }

    #[test]
    fn test_confidence_in_unit_range() {
        for text in ["hola", "busca recetas de pan", "pon musica", "xyz", "traduce hola"] {
            let c = detect(text);
            assert!((0.0..=1.0).contains(&c.confidence), "{}", text);
        }
    }

    #[test]
    fn test_extract_query_strips_intent_words() {
        let c = classifier();
        let q = c.extract_query("baro busca recetas de pan", Some(Intent::Buscar));
        assert_eq!(q, "recetas de pan");
    }

    #[test]
    fn test_extract_query_splits_multiword_variants() {
        let c = classifier();
        let q = c.extract_query("cuanto es 25 por 8", Some(Intent::Calculadora));
        assert_eq!(q, "25 por 8");
    }

    #[test]
    fn test_extract_query_without_intent() {
        let c = classifier();
        assert_eq!(c.extract_query("varo gracias python", None), "python");
    }

    #[test]
    fn test_extract_query_empty_result() {
        let c = classifier();
        assert_eq!(c.extract_query("clima", Some(Intent::Clima)), "");
        assert_eq!(c.extract_query("", Some(Intent::Clima)), "");
    }

    #[test]
    fn test_extract_query_does_not_mutate_input() {
        let c = classifier();
        let text = String::from("pon musica de salsa");
        let q = c.extract_query(&text, Some(Intent::Youtube));
        assert_eq!(text, "pon musica de salsa");
        assert_eq!(q, "de salsa");
    }
}
