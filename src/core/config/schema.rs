//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Unknown keys are rejected at parse time. Enum values (`order`,
//! `collation`) are checked by serde; the remaining cross-field rules are
//! checked by [`ListConfig::validate`].

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::compare::{Collation, ConfiguredOrder, SortOrder};
use crate::ui::output::Verbosity;

/// Configuration for a sorted list.
///
/// # Example
///
/// ```toml
/// order = "descending"
/// collation = "case-insensitive"
/// debug = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ListConfig {
    /// Direction of the ordering (default: ascending)
    pub order: SortOrder,

    /// Text comparison rule (default: ordinal)
    pub collation: Collation,

    /// Trace list events to stderr
    pub debug: bool,

    /// Suppress all diagnostics
    pub quiet: bool,
}

impl ListConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.debug && self.quiet {
            return Err(ConfigError::InvalidValue(
                "debug and quiet cannot both be enabled".to_string(),
            ));
        }
        Ok(())
    }

    /// The comparator described by this configuration.
    pub fn comparator(&self) -> ConfiguredOrder {
        ConfiguredOrder::new(self.order, self.collation)
    }

    /// The diagnostic verbosity described by this configuration.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full() {
        let toml = r#"
            order = "descending"
            collation = "case-insensitive"
            debug = true
        "#;

        let config: ListConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.order, SortOrder::Descending);
        assert_eq!(config.collation, Collation::CaseInsensitive);
        assert!(config.debug);
        assert!(!config.quiet);
    }

    #[test]
    fn empty_is_default() {
        let config: ListConfig = toml::from_str("").unwrap();
        assert_eq!(config, ListConfig::default());
        assert_eq!(config.comparator(), ConfiguredOrder::default());
        assert_eq!(config.verbosity(), Verbosity::Normal);
    }

    #[test]
    fn unknown_order_rejected() {
        let result: Result<ListConfig, _> = toml::from_str("order = \"sideways\"");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_field_rejected() {
        let result: Result<ListConfig, _> = toml::from_str("capacity = 10");
        assert!(result.is_err());
    }

    #[test]
    fn debug_and_quiet_conflict() {
        let config = ListConfig {
            debug: true,
            quiet: true,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn verbosity_follows_flags() {
        let config = ListConfig {
            debug: true,
            ..Default::default()
        };
        assert_eq!(config.verbosity(), Verbosity::Debug);

        let config = ListConfig {
            quiet: true,
            ..Default::default()
        };
        assert_eq!(config.verbosity(), Verbosity::Quiet);
    }

    #[test]
    fn toml_roundtrip() {
        let config = ListConfig {
            order: SortOrder::Descending,
            collation: Collation::CaseInsensitive,
            debug: false,
            quiet: true,
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: ListConfig = toml::from_str(&text).unwrap();
        assert_eq!(config, parsed);
    }
}
