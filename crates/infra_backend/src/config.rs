//! Opaque key-value configuration for backend adapters
//!
//! The core never interprets configuration keys. Each adapter documents and
//! reads the keys it understands; everything else is ignored.

use std::collections::BTreeMap;

/// String key-value configuration passed to [`init_backend`]
///
/// [`init_backend`]: crate::ReportingBackend::init_backend
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendConfig {
    values: BTreeMap<String, String>,
}

impl BackendConfig {
    /// Creates an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for a key, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Adds a key-value pair, fluent style
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for BackendConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fluent_construction() {
        let config = BackendConfig::new()
            .with_value("memory.capacity", "1024")
            .with_value("unrelated", "ignored");
        assert_eq!(config.get("memory.capacity"), Some("1024"));
        assert_eq!(config.get("missing"), None);
        assert_eq!(config.len(), 2);
    }

    #[test]
    fn test_from_iterator() {
        let config: BackendConfig = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(config.get("b"), Some("2"));
    }
}
