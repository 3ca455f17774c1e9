//! The reserved key namespace devsim writes its own preferences under

/// Default owner segment of the reserved namespace
pub const DEFAULT_OWNER: &str = "devsim";

/// Default version segment; bump on any incompatible encoding change
pub const DEFAULT_VERSION: &str = "1.0.0";

/// `<owner>/<version>/` prefix for keys owned by devsim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyNamespace {
    owner: String,
    version: String,
}

impl Default for KeyNamespace {
    fn default() -> Self {
        Self::new(DEFAULT_OWNER, DEFAULT_VERSION)
    }
}

impl KeyNamespace {
    pub fn new(owner: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            version: version.into(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Full key prefix, e.g. `devsim/1.0.0/`
    pub fn prefix(&self) -> String {
        format!("{}/{}/", self.owner, self.version)
    }

    /// Fully qualified key for a field name
    pub fn key(&self, field: &str) -> String {
        format!("{}{}", self.prefix(), field)
    }

    /// Whether a key belongs to this owner, under any version
    pub fn owns(&self, key: &str) -> bool {
        key.strip_prefix(self.owner.as_str())
            .is_some_and(|rest| rest.starts_with('/'))
    }
}
