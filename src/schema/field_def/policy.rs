//! Per-record field policy: which fields population may touch, which are
//! file fields, and which are returned by the compact accessor.

/// Field policy attached to a record type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPolicy {
    /// When non-empty, only these fields are eligible for assignment
    pub only: Vec<String>,
    /// Fields skipped during assignment; ignored when `only` is non-empty
    pub exclude: Vec<String>,
    /// Fields populated from file-valued inputs
    pub files: Vec<String>,
    /// Fields returned by `compact_data`
    pub keys: Vec<String>,
}

impl FieldPolicy {
    /// Whether population must leave `name` untouched
    #[must_use]
    pub fn is_excluded(&self, name: &str) -> bool {
        if !self.only.is_empty() {
            return !self.only.iter().any(|field| field == name);
        }
        self.exclude.iter().any(|field| field == name)
    }

    /// Whether `name` is listed as a file field
    #[must_use]
    pub fn is_file_field(&self, name: &str) -> bool {
        self.files.iter().any(|field| field == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_only_overrides_exclude() {
        let policy = FieldPolicy {
            only: names(&["name", "mime"]),
            exclude: names(&["name"]),
            ..Default::default()
        };
        assert!(!policy.is_excluded("name"));
        assert!(!policy.is_excluded("mime"));
        assert!(policy.is_excluded("size"));
    }

    #[test]
    fn test_exclude_list() {
        let policy = FieldPolicy {
            exclude: names(&["size", "path"]),
            ..Default::default()
        };
        assert!(policy.is_excluded("size"));
        assert!(!policy.is_excluded("name"));
    }

    #[test]
    fn test_empty_policy_excludes_nothing() {
        assert!(!FieldPolicy::default().is_excluded("anything"));
        assert!(!FieldPolicy::default().is_file_field("anything"));
    }
}
