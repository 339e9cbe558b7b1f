//! Knowledge store and scored search
//!
//! # Scoring
//! An exact topic match short-circuits with score 1.0. Otherwise every entry
//! accumulates an additive score:
//! - `+0.9` if the query occurs in the topic, else `+0.7` if the
//!   topic/query similarity exceeds 0.7
//! - `+0.5` for each keyword contained in the query or containing it
//! - `+0.3` if the query occurs in the info text
//!
//! Keyword hits stack, so scores above 1.0 are possible. They are a ranking
//! signal, not a probability, and thresholds are applied to them unclamped.
//! This may be worth revisiting, but callers depend on it as is.

use anyhow::Result;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::similarity::Similarity;

/// Category of entries taught at runtime
pub const USER_CATEGORY: &str = "usuario";

/// Default acceptance threshold for [`scored_search`]
pub const DEFAULT_THRESHOLD: f64 = 0.6;

const TOPIC_CONTAINS: f64 = 0.9;
const TOPIC_SIMILAR: f64 = 0.7;
const TOPIC_SIMILARITY_FLOOR: f64 = 0.7;
const KEYWORD_HIT: f64 = 0.5;
const INFO_CONTAINS: f64 = 0.3;

/// One knowledge record, keyed by topic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    /// Unique, lower-cased key
    pub topic: String,
    pub info: String,
    pub category: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl KnowledgeEntry {
    pub fn new(
        topic: impl AsRef<str>,
        info: impl Into<String>,
        category: impl Into<String>,
        keywords: Vec<String>,
    ) -> Self {
        Self {
            topic: topic_key(topic.as_ref()),
            info: info.into(),
            category: category.into(),
            keywords,
        }
    }

    /// Entry taught by the user: keywords are the topic itself
    pub fn user_taught(topic: &str, info: impl Into<String>) -> Self {
        let key = topic_key(topic);
        Self {
            keywords: vec![key.clone()],
            topic: key,
            info: info.into(),
            category: USER_CATEGORY.to_string(),
        }
    }

    pub fn is_user_taught(&self) -> bool {
        self.category == USER_CATEGORY
    }
}

/// Canonical topic key
pub fn topic_key(topic: &str) -> String {
    topic.trim().to_lowercase()
}

/// Ranked candidate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub topic: String,
    pub info: String,
    pub score: f64,
}

/// Storage seam for knowledge entries.
///
/// Reads may run concurrently; `upsert` must be serialized against them.
pub trait KnowledgeStore: Send + Sync {
    /// Entry whose key equals `topic_key(topic)`
    fn get(&self, topic: &str) -> Result<Option<KnowledgeEntry>>;

    /// All entries in storage order
    fn entries(&self) -> Result<Vec<KnowledgeEntry>>;

    /// Insert or overwrite by topic key
    fn upsert(&self, entry: KnowledgeEntry) -> Result<()>;
}

/// Exact lookup: `(info, 1.0)` on a hit
pub fn exact_lookup(store: &dyn KnowledgeStore, topic: &str) -> Result<Option<(String, f64)>> {
    Ok(store.get(topic)?.map(|e| (e.info, 1.0)))
}

/// Score every entry against `query`, best first.
///
/// Entries scoring 0 are dropped. Ties keep storage order.
pub fn rank(entries: &[KnowledgeEntry], query: &str, similarity: &dyn Similarity) -> Vec<SearchResult> {
    let query = query.to_lowercase();
    let mut results: Vec<SearchResult> = entries
        .iter()
        .filter_map(|entry| {
            let score = score_entry(entry, &query, similarity);
            (score > 0.0).then(|| SearchResult {
                topic: entry.topic.clone(),
                info: entry.info.clone(),
                score,
            })
        })
        .collect();

    // sort_by is stable
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results
}

fn score_entry(entry: &KnowledgeEntry, query: &str, similarity: &dyn Similarity) -> f64 {
    let mut score = 0.0;

    if entry.topic.contains(query) {
        score += TOPIC_CONTAINS;
    } else if similarity.ratio(query, &entry.topic) > TOPIC_SIMILARITY_FLOOR {
        score += TOPIC_SIMILAR;
    }

    for keyword in &entry.keywords {
        let keyword = keyword.trim();
        if query.contains(keyword) || keyword.contains(query) {
            score += KEYWORD_HIT;
        }
    }

    if entry.info.to_lowercase().contains(query) {
        score += INFO_CONTAINS;
    }

    score
}

/// Best candidate if it reaches `threshold` (inclusive)
pub fn pick_best(ranked: Vec<SearchResult>, threshold: f64) -> Option<SearchResult> {
    ranked.into_iter().next().filter(|r| r.score >= threshold)
}

/// Exact match first, then the additive ranking
pub fn scored_search(
    store: &dyn KnowledgeStore,
    query: &str,
    threshold: f64,
    similarity: &dyn Similarity,
) -> Result<Option<SearchResult>> {
    if let Some(entry) = store.get(query)? {
        debug!(topic = %entry.topic, "exact knowledge match");
        return Ok(Some(SearchResult {
            topic: entry.topic,
            info: entry.info,
            score: 1.0,
        }));
    }

    let ranked = rank(&store.entries()?, query, similarity);
    if let Some(top) = ranked.first() {
        debug!(topic = %top.topic, score = top.score, threshold, "best knowledge candidate");
    }
    Ok(pick_best(ranked, threshold))
}

/// Teach a new fact and return the confirmation text.
///
/// Callers make sure topic and info are non-empty.
pub fn learn(store: &dyn KnowledgeStore, topic: &str, info: &str) -> Result<String> {
    store.upsert(KnowledgeEntry::user_taught(topic, info))?;
    Ok(format!(
        "¡Perfecto! Aprendí sobre '{}'. Ahora puedes preguntarme sobre esto cuando quieras.",
        topic.trim()
    ))
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryKnowledge {
    entries: RwLock<Vec<KnowledgeEntry>>,
}

impl MemoryKnowledge {
    pub fn new(entries: Vec<KnowledgeEntry>) -> Self {
        let store = Self::default();
        for entry in entries {
            store.put(entry);
        }
        store
    }

    /// Store seeded with the built-in knowledge table
    pub fn seeded() -> Self {
        Self::new(super::seed::seed_entries())
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    fn put(&self, entry: KnowledgeEntry) {
        let mut entries = self.entries.write();
        match entries.iter_mut().find(|e| e.topic == entry.topic) {
            Some(existing) => *existing = entry,
            None => entries.push(entry),
        }
    }
}

impl KnowledgeStore for MemoryKnowledge {
    fn get(&self, topic: &str) -> Result<Option<KnowledgeEntry>> {
        let key = topic_key(topic);
        Ok(self.entries.read().iter().find(|e| e.topic == key).cloned())
    }

    fn entries(&self) -> Result<Vec<KnowledgeEntry>> {
        Ok(self.entries.read().clone())
    }

    fn upsert(&self, entry: KnowledgeEntry) -> Result<()> {
        self.put(entry);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::similarity::SequenceRatio;

    fn kw(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn store() -> MemoryKnowledge {
        MemoryKnowledge::new(vec![
            KnowledgeEntry::new(
                "python",
                "Python es un lenguaje de programación.",
                "tecnologia",
                kw(&["programacion", "lenguaje"]),
            ),
            KnowledgeEntry::new(
                "javascript",
                "JavaScript es el lenguaje de la web.",
                "tecnologia",
                kw(&["js", "web", "programacion"]),
            ),
            KnowledgeEntry::new(
                "habana",
                "La Habana es la capital de Cuba.",
                "geografia",
                kw(&["capital", "ciudad", "cuba"]),
            ),
        ])
    }

    #[test]
    fn test_exact_match_wins() {
        let s = store();
        let hit = scored_search(&s, "Python", DEFAULT_THRESHOLD, &SequenceRatio)
            .unwrap()
            .unwrap();
        assert_eq!(hit.score, 1.0);
        assert_eq!(hit.info, "Python es un lenguaje de programación.");
    }

    #[test]
    fn test_exact_match_beats_higher_additive_score() {
        // "programacion" scores 0.5 + 0.5 + 0.3 on javascript, but is also a topic
        let s = store();
        s.upsert(KnowledgeEntry::new("programacion", "Arte de programar.", "tecnologia", vec![]))
            .unwrap();
        let hit = scored_search(&s, "programacion", DEFAULT_THRESHOLD, &SequenceRatio)
            .unwrap()
            .unwrap();
        assert_eq!(hit.topic, "programacion");
        assert_eq!(hit.score, 1.0);
    }

    #[test]
    fn test_additive_score_stacks_keywords() {
        // "cuba": keyword "cuba" (+0.5), info contains "cuba" (+0.3)
        let ranked = rank(&store().entries().unwrap(), "cuba", &SequenceRatio);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].topic, "habana");
        assert!((ranked[0].score - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_score_can_exceed_one() {
        let entries = vec![KnowledgeEntry::new(
            "redes",
            "Redes de computadoras.",
            "tecnologia",
            kw(&["red", "redes", "redes de"]),
        )];
        // topic contains (+0.9), three keyword hits (+1.5), info contains (+0.3)
        let ranked = rank(&entries, "redes", &SequenceRatio);
        assert!((ranked[0].score - 2.7).abs() < 1e-9);
    }

    #[test]
    fn test_topic_substring_beats_similarity() {
        let entries = vec![KnowledgeEntry::new("javascript", "x", "t", vec![])];
        let ranked = rank(&entries, "java", &SequenceRatio);
        assert!((ranked[0].score - 0.9).abs() < 1e-9);

        // not a substring, but similar: 2 * 5 / 11 > 0.7
        let entries = vec![KnowledgeEntry::new("python", "x", "t", vec![])];
        let ranked = rank(&entries, "pyton", &SequenceRatio);
        assert!((ranked[0].score - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_zero_scores_discarded() {
        let ranked = rank(&store().entries().unwrap(), "zzzz", &SequenceRatio);
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_ties_keep_storage_order() {
        let entries = vec![
            KnowledgeEntry::new("uno", "x", "t", kw(&["comun"])),
            KnowledgeEntry::new("dos", "x", "t", kw(&["comun"])),
            KnowledgeEntry::new("tres", "x", "t", kw(&["comun"])),
        ];
        let ranked = rank(&entries, "comun", &SequenceRatio);
        let topics: Vec<&str> = ranked.iter().map(|r| r.topic.as_str()).collect();
        assert_eq!(topics, vec!["uno", "dos", "tres"]);
    }

    #[test]
    fn test_threshold_boundary() {
        let at = |score: f64| {
            vec![SearchResult {
                topic: "t".to_string(),
                info: "i".to_string(),
                score,
            }]
        };
        assert!(pick_best(at(0.6), DEFAULT_THRESHOLD).is_some());
        assert!(pick_best(at(0.599999), DEFAULT_THRESHOLD).is_none());
        assert!(pick_best(Vec::new(), DEFAULT_THRESHOLD).is_none());
    }

    #[test]
    fn test_below_threshold_not_found() {
        // "web" hits one javascript keyword and its info: 0.8
        let s = store();
        assert!(scored_search(&s, "web", 0.9, &SequenceRatio).unwrap().is_none());
        assert!(scored_search(&s, "web", 0.75, &SequenceRatio).unwrap().is_some());
    }

    #[test]
    fn test_learn_roundtrip_and_overwrite() {
        let s = store();
        let msg = learn(&s, "zeta", "info-z").unwrap();
        assert!(msg.contains("'zeta'"));
        assert_eq!(
            exact_lookup(&s, "zeta").unwrap(),
            Some(("info-z".to_string(), 1.0))
        );

        learn(&s, "Zeta", "info-z2").unwrap();
        assert_eq!(
            exact_lookup(&s, "zeta").unwrap(),
            Some(("info-z2".to_string(), 1.0))
        );
        assert_eq!(s.len(), 4);

        let entry = s.get("zeta").unwrap().unwrap();
        assert_eq!(entry.category, USER_CATEGORY);
        assert_eq!(entry.keywords, vec!["zeta".to_string()]);
    }

    #[test]
    fn test_exact_lookup_case_insensitive() {
        let s = store();
        assert!(exact_lookup(&s, "  HABANA ").unwrap().is_some());
        assert!(exact_lookup(&s, "roma").unwrap().is_none());
    }

    #[test]
    fn test_seeded_store() {
        let s = MemoryKnowledge::seeded();
        assert!(s.len() > 90);
        assert!(s.get("python").unwrap().is_some());
        assert!(s.get("física").unwrap().is_some());
    }
}
