//! URL record entity representing an alias bound to a target URL.

/// A stored mapping from a unique alias to its target URL.
///
/// Records are created once and never updated in place: the only transitions
/// are insert and delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub alias: String,
    pub target_url: String,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(id: i64, alias: String, target_url: String) -> Self {
        Self {
            id,
            alias,
            target_url,
        }
    }
}

/// Result of a successful save: the surrogate id and the alias now bound to the URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedAlias {
    pub id: i64,
    pub alias: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_record_creation() {
        let record = UrlRecord::new(
            1,
            "abc123".to_string(),
            "https://example.com".to_string(),
        );

        assert_eq!(record.id, 1);
        assert_eq!(record.alias, "abc123");
        assert_eq!(record.target_url, "https://example.com");
    }

    #[test]
    fn test_saved_alias_equality() {
        let a = SavedAlias {
            id: 7,
            alias: "xyz".to_string(),
        };
        let b = a.clone();

        assert_eq!(a, b);
    }
}
