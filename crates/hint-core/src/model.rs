//! Domain Models
//!
//! Hint records and the values returned when hints are disclosed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Width of the rule printed around a full hint listing
const RULE_WIDTH: usize = 50;

/// One learnable unit: a topic with its ordered hints
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintRecord {
    /// Unique lookup key (usually an exercise function name)
    #[serde(alias = "id")]
    pub topic_id: String,

    /// Grouping label (usually the exercise module)
    pub category: String,

    /// Hints from most general to most specific
    pub hints: Vec<String>,

    /// Overall intended approach
    pub summary: String,
}

impl HintRecord {
    pub fn new<I, S>(
        topic_id: impl Into<String>,
        category: impl Into<String>,
        hints: I,
        summary: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            topic_id: topic_id.into(),
            category: category.into(),
            hints: hints.into_iter().map(Into::into).collect(),
            summary: summary.into(),
        }
    }

    /// Number of hint levels
    pub fn total(&self) -> usize {
        self.hints.len()
    }

    /// Hint at a 1-based level, if in range
    pub fn hint_at(&self, level: usize) -> Option<&str> {
        level
            .checked_sub(1)
            .and_then(|idx| self.hints.get(idx))
            .map(String::as_str)
    }
}

/// A single disclosed hint
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintLevel {
    pub text: String,

    /// 1-based position of this hint
    pub level: usize,

    pub total: usize,
}

impl fmt::Display for HintLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hint {}/{}: {}", self.level, self.total, self.text)
    }
}

/// Every hint of a topic plus its summary (spoiler!)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedHints {
    pub topic_id: String,
    pub category: String,
    pub hints: Vec<String>,
    pub summary: String,
}

impl From<&HintRecord> for RevealedHints {
    fn from(record: &HintRecord) -> Self {
        Self {
            topic_id: record.topic_id.clone(),
            category: record.category.clone(),
            hints: record.hints.clone(),
            summary: record.summary.clone(),
        }
    }
}

impl fmt::Display for RevealedHints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(RULE_WIDTH);
        writeln!(f, "All hints for {} ({}):", self.topic_id, self.category)?;
        writeln!(f, "{rule}")?;
        for (i, hint) in self.hints.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, hint)?;
        }
        writeln!(f, "{rule}")?;
        write!(f, "Approach: {}", self.summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpha() -> HintRecord {
        HintRecord::new("alpha", "ex01", ["h1", "h2", "h3", "h4"], "do the thing")
    }

    #[test]
    fn test_hint_at_is_one_based() {
        let record = alpha();
        assert_eq!(record.hint_at(1), Some("h1"));
        assert_eq!(record.hint_at(4), Some("h4"));
        assert_eq!(record.hint_at(0), None);
        assert_eq!(record.hint_at(5), None);
    }

    #[test]
    fn test_hint_level_display() {
        let hint = HintLevel { text: "h3".into(), level: 3, total: 4 };
        assert_eq!(hint.to_string(), "Hint 3/4: h3");
    }

    #[test]
    fn test_revealed_display() {
        let revealed = RevealedHints::from(&alpha());
        let text = revealed.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "All hints for alpha (ex01):");
        assert_eq!(lines[1].len(), RULE_WIDTH);
        assert_eq!(lines[2], "1. h1");
        assert_eq!(lines[5], "4. h4");
        assert_eq!(lines.last(), Some(&"Approach: do the thing"));
    }

    #[test]
    fn test_deserialize_accepts_id_alias() {
        let json = r#"{"id": "alpha", "category": "ex01", "hints": ["h1"], "summary": "s"}"#;
        let record: HintRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.topic_id, "alpha");
    }
}
