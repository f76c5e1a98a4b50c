//! League scoring multiplier table

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use stat_cleaner::RECOGNIZED_STATS;

use crate::error::ConfigError;

/// Per-statistic multipliers supplied by the league.
///
/// Keys must be recognized statistic names from the cleaner's contract;
/// validate before scoring. The mapping is caller configuration, never
/// hardcoded in the scoring path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub weights: BTreeMap<String, f64>,
}

impl ScoringWeights {
    /// Build from an explicit key/multiplier list
    pub fn from_pairs(pairs: &[(&str, f64)]) -> Self {
        Self {
            weights: pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        }
    }

    /// Parse a weights table from TOML text (a `[weights]` table)
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let weights: ScoringWeights =
            toml::from_str(text).map_err(|e| ConfigError::Load(e.to_string()))?;
        Ok(weights)
    }

    /// Reject empty mappings and keys the cleaner never produces
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.weights.is_empty() {
            return Err(ConfigError::EmptyWeights);
        }
        let unknown: Vec<String> = self
            .weights
            .keys()
            .filter(|k| !RECOGNIZED_STATS.contains(&k.as_str()))
            .cloned()
            .collect();
        if unknown.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::UnknownStat { keys: unknown })
        }
    }
}

impl Default for ScoringWeights {
    /// The reference league's multipliers
    fn default() -> Self {
        Self::from_pairs(&[
            ("pts", 1.0),
            ("trb", 1.25),
            ("ast", 1.5),
            ("stl", 2.0),
            ("blk", 2.0),
            ("tov", -0.5),
            ("fg_missed", -0.25),
            ("ft_missed", -0.25),
            ("fg3", 0.5),
            ("double_double", 1.5),
            ("triple_double", 3.0),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_are_valid() {
        ScoringWeights::default().validate().unwrap();
    }

    #[test]
    fn test_unknown_key_rejected() {
        let weights = ScoringWeights::from_pairs(&[("pts", 1.0), ("dunks", 5.0)]);
        let err = weights.validate().unwrap_err();
        match err {
            ConfigError::UnknownStat { keys } => assert_eq!(keys, vec!["dunks".to_string()]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_mapping_rejected() {
        let weights = ScoringWeights { weights: BTreeMap::new() };
        assert!(matches!(weights.validate(), Err(ConfigError::EmptyWeights)));
    }

    #[test]
    fn test_toml_round_trip() {
        let text = "[weights]\npts = 1.0\ntrb = 1.25\n";
        let weights = ScoringWeights::from_toml_str(text).unwrap();
        assert_eq!(weights.weights.get("pts"), Some(&1.0));
        assert_eq!(weights.weights.get("trb"), Some(&1.25));
        weights.validate().unwrap();
    }

    #[test]
    fn test_bad_toml_rejected() {
        assert!(matches!(
            ScoringWeights::from_toml_str("weights = 3"),
            Err(ConfigError::Load(_))
        ));
    }
}
