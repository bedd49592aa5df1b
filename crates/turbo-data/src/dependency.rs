//! Dependency tagging for semantic categorization.

use std::time::Duration;

/// Remote dependencies the storefront talks to.
///
/// Each tag carries a default request timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyTag {
    /// Inventory/availability checks.
    Inventory,
    /// Product metadata.
    Catalog,
}

impl DependencyTag {
    /// Get the default timeout for this dependency type.
    pub fn default_timeout(&self) -> Duration {
        match self {
            Self::Inventory => Duration::from_millis(150),
            Self::Catalog => Duration::from_millis(500),
        }
    }

    /// Get the name of this dependency.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Inventory => "inventory",
            Self::Catalog => "catalog",
        }
    }
}

impl std::fmt::Display for DependencyTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeouts() {
        assert_eq!(
            DependencyTag::Inventory.default_timeout(),
            Duration::from_millis(150)
        );
        assert_eq!(
            DependencyTag::Catalog.default_timeout(),
            Duration::from_millis(500)
        );
        assert_eq!(DependencyTag::Inventory.to_string(), "inventory");
    }
}
