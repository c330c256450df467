//! TOML configuration for extraction defaults.
//!
//! ```toml
//! cutoff = 60
//! processor = "full"
//! strategy = "token_set"
//! limit = 5
//!
//! [weights]
//! comparable_threshold = 0.7
//! partial_scale = 0.9
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::distance::{Score, MAX_SCORE};
use crate::error::{FuzzyError, Result};
use crate::process::Processor;
use crate::strategy::Strategy;
use crate::weighted::WeightedRatio;

/// Config file names searched, in order, when no path is given.
pub const CONFIG_CANDIDATES: [&str; 3] = [
    ".fuzzyrank.toml",
    "fuzzyrank.toml",
    ".config/fuzzyrank.toml",
];

/// Extraction settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MatchConfig {
    /// Minimum score a result needs
    pub cutoff: Score,
    /// Normalization applied before scoring
    pub processor: Processor,
    /// Strategy used when the caller does not pick one
    pub strategy: Strategy,
    /// Result count for top-k extraction; `None` means a full ranking
    pub limit: Option<usize>,
    /// Weighted ratio constants
    pub weights: WeightedRatio,
}

impl MatchConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, or from the first existing standard location, or
    /// fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path.map(Path::to_path_buf).or_else(find_config_file);

        match config_path {
            Some(p) => {
                tracing::debug!(path = %p.display(), "loading config");
                let content = std::fs::read_to_string(&p)?;
                Self::from_toml_str(&content)
            }
            None => Ok(Self::default()),
        }
    }

    /// Check every value is in range.
    pub fn validate(&self) -> Result<()> {
        if self.cutoff > MAX_SCORE {
            return Err(FuzzyError::InvalidConfig(format!(
                "cutoff must be at most {MAX_SCORE}, got {}",
                self.cutoff
            )));
        }

        if self.limit == Some(0) {
            return Err(FuzzyError::InvalidConfig(
                "limit must be at least 1 (omit it for no limit)".to_string(),
            ));
        }

        let w = &self.weights;
        let fractions = [
            ("comparable_threshold", w.comparable_threshold),
            ("comparable_partial_scale", w.comparable_partial_scale),
            ("token_scale", w.token_scale),
            ("partial_scale", w.partial_scale),
            ("long_threshold", w.long_threshold),
            ("long_partial_scale", w.long_partial_scale),
        ];
        for (name, value) in fractions {
            if !(value > 0.0 && value <= 1.0) {
                return Err(FuzzyError::InvalidConfig(format!(
                    "weights.{name} must be in (0, 1], got {value}"
                )));
            }
        }
        if w.long_threshold > w.comparable_threshold {
            return Err(FuzzyError::InvalidConfig(
                "weights.long_threshold must not exceed weights.comparable_threshold".to_string(),
            ));
        }

        Ok(())
    }
}

/// Find a configuration file in the standard locations.
fn find_config_file() -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .into_iter()
        .map(PathBuf::from)
        .find(|candidate| candidate.exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = MatchConfig::default();
        assert_eq!(config.cutoff, 0);
        assert_eq!(config.processor, Processor::Lowercase);
        assert_eq!(config.strategy, Strategy::Weighted);
        assert!(config.limit.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_partial_document() {
        let config = MatchConfig::from_toml_str(
            r#"
            cutoff = 60
            strategy = "token_set_partial"

            [weights]
            partial_scale = 0.8
            "#,
        )
        .unwrap();
        assert_eq!(config.cutoff, 60);
        assert_eq!(config.strategy, Strategy::TokenSetPartial);
        assert_eq!(config.weights.partial_scale, 0.8);
        assert_eq!(config.weights.token_scale, 0.95);
    }

    #[test]
    fn test_config_rejects_out_of_range() {
        assert!(matches!(
            MatchConfig::from_toml_str("cutoff = 150"),
            Err(FuzzyError::InvalidConfig(_))
        ));
        assert!(matches!(
            MatchConfig::from_toml_str("[weights]\ntoken_scale = 1.5"),
            Err(FuzzyError::InvalidConfig(_))
        ));
        assert!(matches!(
            MatchConfig::from_toml_str("limit = 0"),
            Err(FuzzyError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_config_rejects_unknown_strategy() {
        assert!(matches!(
            MatchConfig::from_toml_str("strategy = \"soundex\""),
            Err(FuzzyError::Toml(_))
        ));
    }

    #[test]
    fn test_config_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "processor = \"full\"\nlimit = 3").unwrap();

        let config = MatchConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.processor, Processor::Full);
        assert_eq!(config.limit, Some(3));
    }

    #[test]
    fn test_config_load_missing_file() {
        let err = MatchConfig::load(Some(Path::new("/nonexistent/fuzzyrank.toml"))).unwrap_err();
        assert!(matches!(err, FuzzyError::Io(_)));
    }
}
