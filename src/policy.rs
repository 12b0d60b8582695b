//! Verification policy (principal allow-list).

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

pub const DEFAULT_ALLOWED_USERS: &[&str] = &["origin"];

fn default_allowed_users() -> BTreeSet<String> {
    DEFAULT_ALLOWED_USERS.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    /// Principals permitted to pass. An empty list admits nobody.
    #[serde(default = "default_allowed_users")]
    pub allowed_users: BTreeSet<String>,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            allowed_users: default_allowed_users(),
        }
    }
}

impl Policy {
    pub fn with_allowed_users<I, S>(users: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_users: users.into_iter().map(Into::into).collect(),
        }
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let s = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read policy {}: {}", path.display(), e))?;
        serde_json::from_str(&s).map_err(|e| anyhow::anyhow!("Invalid policy JSON: {}", e))
    }

    pub fn allows(&self, user: &str) -> bool {
        self.allowed_users.contains(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_admits_only_origin() {
        let policy = Policy::default();
        assert!(policy.allows("origin"));
        assert!(!policy.allows("bob"));
        assert!(!policy.allows("Origin"));
    }

    #[test]
    fn load_reads_allowed_users() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, r#"{{"allowed_users": ["origin", "relay"]}}"#).unwrap();
        let policy = Policy::load(f.path()).unwrap();
        assert!(policy.allows("relay"));
        assert!(policy.allows("origin"));
    }

    #[test]
    fn load_defaults_missing_list() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "{{}}").unwrap();
        assert_eq!(Policy::load(f.path()).unwrap(), Policy::default());
    }

    #[test]
    fn empty_list_admits_nobody() {
        let policy: Policy = serde_json::from_str(r#"{"allowed_users": []}"#).unwrap();
        assert!(!policy.allows("origin"));
    }

    #[test]
    fn load_reports_bad_json() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "not json").unwrap();
        let err = Policy::load(f.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid policy JSON"));
    }
}
