//! Catalog Loader
//!
//! Reads hint records from a JSON file so a deployment can ship its own
//! catalog instead of the built-in one. The file is an array of records:
//!
//! ```json
//! [
//!   {"id": "alpha", "category": "ex01", "hints": ["h1", "h2"], "summary": "..."}
//! ]
//! ```

use std::path::Path;

use crate::error::Result;
use crate::model::HintRecord;
use crate::registry::HintRegistry;

/// Parse records from a JSON file
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<HintRecord>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)?;
    let records: Vec<HintRecord> = serde_json::from_str(&raw)?;
    tracing::info!(path = %path.display(), records = records.len(), "loaded hint catalog");
    Ok(records)
}

impl HintRegistry {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<HintRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_records(load_records(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HintError;

    const SAMPLE: &str = r#"[
        {"id": "alpha", "category": "ex01", "hints": ["h1", "h2", "h3", "h4"], "summary": "a"},
        {"topic_id": "beta", "category": "ex02", "hints": ["only hint"], "summary": "b"}
    ]"#;

    #[test]
    fn test_from_json_str() {
        let registry = HintRegistry::from_json_str(SAMPLE).unwrap();
        assert_eq!(registry.list_topics(), vec!["alpha", "beta"]);
        assert_eq!(registry.get_hint("alpha", Some(2)).unwrap().text, "h2");
    }

    #[test]
    fn test_from_json_file() {
        let path = std::env::temp_dir().join(format!("hints-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, SAMPLE).unwrap();

        let registry = HintRegistry::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_invalid_json_and_records() {
        assert!(matches!(HintRegistry::from_json_str("{not json"), Err(HintError::Json(_))));

        let empty_hints = r#"[{"id": "x", "category": "c", "hints": [], "summary": "s"}]"#;
        assert!(matches!(
            HintRegistry::from_json_str(empty_hints),
            Err(HintError::InvalidRecord(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = load_records("/definitely/not/here/hints.json");
        assert!(matches!(result, Err(HintError::Io(_))));
    }
}
