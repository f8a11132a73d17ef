//! Hint Registry
//!
//! Immutable catalog of topics. Built once at startup and handed to callers;
//! every query is a pure read, so a shared `&HintRegistry` (or `Arc`) needs no
//! locking.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::catalog;
use crate::error::{HintError, Result};
use crate::model::{HintLevel, HintRecord, RevealedHints};
use crate::session::DisclosureSession;

/// Read-only topic catalog
#[derive(Clone, Debug, Default)]
pub struct HintRegistry {
    records: BTreeMap<String, Arc<HintRecord>>,
}

impl HintRegistry {
    /// Build a registry, rejecting records that break its invariants
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = HintRecord>,
    {
        let mut map = BTreeMap::new();

        for record in records {
            validate(&record)?;
            if map.contains_key(&record.topic_id) {
                return Err(HintError::InvalidRecord(format!(
                    "duplicate topic id '{}'",
                    record.topic_id
                )));
            }
            map.insert(record.topic_id.clone(), Arc::new(record));
        }

        tracing::debug!(topics = map.len(), "hint registry built");
        Ok(Self { records: map })
    }

    /// Registry over the built-in exercise catalog
    pub fn builtin() -> Result<Self> {
        Self::from_records(catalog::builtin_records())
    }

    /// Find a topic's record
    pub fn lookup(&self, topic_id: &str) -> Result<&HintRecord> {
        self.shared(topic_id).map(AsRef::as_ref)
    }

    /// Get one hint; an omitted level always means level 1
    pub fn get_hint(&self, topic_id: &str, level: Option<usize>) -> Result<HintLevel> {
        let record = self.lookup(topic_id)?;
        let total = record.total();
        let level = level.unwrap_or(1);

        let text = record
            .hint_at(level)
            .ok_or(HintError::InvalidLevel { requested: level, total })?;

        Ok(HintLevel {
            text: text.to_string(),
            level,
            total,
        })
    }

    /// Every hint in order plus the summary
    pub fn reveal_all(&self, topic_id: &str) -> Result<RevealedHints> {
        self.lookup(topic_id).map(RevealedHints::from)
    }

    pub fn get_summary(&self, topic_id: &str) -> Result<&str> {
        self.lookup(topic_id).map(|r| r.summary.as_str())
    }

    /// All topic ids, sorted
    pub fn list_topics(&self) -> Vec<&str> {
        self.records.keys().map(String::as_str).collect()
    }

    /// Topics whose category matches exactly; empty when none do
    pub fn list_topics_by_category(&self, category: &str) -> BTreeMap<&str, &HintRecord> {
        self.records
            .iter()
            .filter(|(_, record)| record.category == category)
            .map(|(id, record)| (id.as_str(), record.as_ref()))
            .collect()
    }

    /// Distinct categories, sorted
    pub fn categories(&self) -> Vec<&str> {
        self.records
            .values()
            .map(|r| r.category.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Start a fresh disclosure session for a topic
    pub fn open_session(&self, topic_id: &str) -> Result<DisclosureSession> {
        let record = self.shared(topic_id)?;
        tracing::debug!(topic = topic_id, "disclosure session opened");
        Ok(DisclosureSession::new(Arc::clone(record)))
    }

    /// Closest known topic id for a mistyped one
    pub fn suggest(&self, topic_id: &str) -> Option<&str> {
        let query = topic_id.trim();
        if query.is_empty() {
            return None;
        }

        let matcher = SkimMatcherV2::default();
        // Ties keep the lexicographically first id
        let best = self
            .records
            .keys()
            .filter_map(|c| matcher.fuzzy_match(c, query).map(|score| (c.as_str(), score)))
            .fold(None, |best: Option<(&str, i64)>, (c, score)| match best {
                Some((_, top)) if top >= score => best,
                _ => Some((c, score)),
            });

        best.map(|(candidate, _)| candidate).or_else(|| {
            let needle = query.to_lowercase();
            self.records
                .keys()
                .find(|k| {
                    let hay = k.to_lowercase();
                    hay.contains(&needle) || needle.contains(&hay)
                })
                .map(String::as_str)
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn shared(&self, topic_id: &str) -> Result<&Arc<HintRecord>> {
        self.records
            .get(topic_id)
            .ok_or_else(|| HintError::NotFound(topic_id.to_string()))
    }
}

fn validate(record: &HintRecord) -> Result<()> {
    if record.topic_id.trim().is_empty() {
        return Err(HintError::InvalidRecord("topic id must not be empty".into()));
    }
    if record.hints.is_empty() {
        return Err(HintError::InvalidRecord(format!(
            "'{}' has no hints",
            record.topic_id
        )));
    }
    if let Some(pos) = record.hints.iter().position(|h| h.trim().is_empty()) {
        return Err(HintError::InvalidRecord(format!(
            "'{}' has an empty hint at level {}",
            record.topic_id,
            pos + 1
        )));
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_registry() -> HintRegistry {
        HintRegistry::from_records([
            HintRecord::new("alpha", "ex01", ["h1", "h2", "h3", "h4"], "alpha approach"),
            HintRecord::new("beta", "ex02", ["only hint"], "beta approach"),
        ])
        .unwrap()
    }

    #[test]
    fn test_omitted_level_is_first_hint() {
        let registry = sample_registry();
        let hint = registry.get_hint("alpha", None).unwrap();
        assert_eq!(hint, HintLevel { text: "h1".into(), level: 1, total: 4 });

        // Asking for a later level first does not move the default
        registry.get_hint("alpha", Some(3)).unwrap();
        assert_eq!(registry.get_hint("alpha", None).unwrap(), registry.get_hint("alpha", Some(1)).unwrap());
    }

    #[test]
    fn test_specific_level_is_deterministic() {
        let registry = sample_registry();
        let first = registry.get_hint("alpha", Some(3)).unwrap();
        assert_eq!(first, HintLevel { text: "h3".into(), level: 3, total: 4 });
        for _ in 0..3 {
            assert_eq!(registry.get_hint("alpha", Some(3)).unwrap(), first);
        }
    }

    #[test]
    fn test_level_out_of_range() {
        let registry = sample_registry();
        for level in [0, 5] {
            let err = registry.get_hint("alpha", Some(level)).unwrap_err();
            assert!(matches!(
                err,
                HintError::InvalidLevel { requested, total: 4 } if requested == level
            ));
        }
    }

    #[test]
    fn test_unknown_topic() {
        let registry = sample_registry();
        let err = registry.get_hint("gamma", None).unwrap_err();
        assert!(matches!(err, HintError::NotFound(ref t) if t == "gamma"));
        assert!(matches!(
            registry.get_hint("nonexistent_topic_zzz", Some(1)),
            Err(HintError::NotFound(_))
        ));
        assert!(registry.get_summary("gamma").is_err());
        assert!(registry.reveal_all("gamma").is_err());
        assert!(registry.open_session("gamma").is_err());
    }

    #[test]
    fn test_reveal_all_matches_levels() {
        let registry = sample_registry();
        let revealed = registry.reveal_all("alpha").unwrap();
        assert_eq!(revealed.hints.len(), 4);
        assert_eq!(revealed.summary, "alpha approach");

        for (i, hint) in revealed.hints.iter().enumerate() {
            assert_eq!(&registry.get_hint("alpha", Some(i + 1)).unwrap().text, hint);
        }
    }

    #[test]
    fn test_list_topics_sorted() {
        let registry = HintRegistry::from_records([
            HintRecord::new("zeta", "ex02", ["z"], "z"),
            HintRecord::new("alpha", "ex01", ["a"], "a"),
            HintRecord::new("mu", "ex01", ["m"], "m"),
        ])
        .unwrap();
        assert_eq!(registry.list_topics(), vec!["alpha", "mu", "zeta"]);
        assert_eq!(registry.categories(), vec!["ex01", "ex02"]);
    }

    #[test]
    fn test_category_filter() {
        let registry = sample_registry();
        let ex01 = registry.list_topics_by_category("ex01");
        assert_eq!(ex01.len(), 1);
        assert_eq!(ex01["alpha"].topic_id, "alpha");
        assert!(registry.list_topics_by_category("ex99").is_empty());
    }

    #[test]
    fn test_category_filter_is_complete() {
        let registry = HintRegistry::builtin().unwrap();
        for category in registry.categories() {
            let subset = registry.list_topics_by_category(category);
            assert!(subset.values().all(|r| r.category == category));

            let expected = registry
                .list_topics()
                .into_iter()
                .filter(|t| registry.lookup(t).unwrap().category == category)
                .count();
            assert_eq!(subset.len(), expected);
        }
    }

    #[test]
    fn test_rejects_invalid_records() {
        let empty_id = HintRegistry::from_records([HintRecord::new("", "ex01", ["h"], "s")]);
        assert!(matches!(empty_id, Err(HintError::InvalidRecord(_))));

        let no_hints = HintRegistry::from_records([HintRecord::new("a", "ex01", Vec::<String>::new(), "s")]);
        assert!(matches!(no_hints, Err(HintError::InvalidRecord(_))));

        let blank_hint = HintRegistry::from_records([HintRecord::new("a", "ex01", ["h", " "], "s")]);
        assert!(matches!(blank_hint, Err(HintError::InvalidRecord(_))));

        let duplicate = HintRegistry::from_records([
            HintRecord::new("a", "ex01", ["h"], "s"),
            HintRecord::new("a", "ex02", ["h"], "s"),
        ]);
        assert!(matches!(duplicate, Err(HintError::InvalidRecord(_))));
    }

    #[test]
    fn test_suggest_close_match() {
        let registry = HintRegistry::builtin().unwrap();
        assert_eq!(registry.suggest("initalize_model"), Some("initialize_model"));
        assert_eq!(registry.suggest("rerank"), Some("rerank_results"));
        assert_eq!(registry.suggest(""), None);
        assert_eq!(registry.suggest("qqqqqqq"), None);
    }
}
