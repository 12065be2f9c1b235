//! Shortest-path engine configuration module.

use super::{ConfigResult, Validate};
use crate::data_structures::ala_graph::AlaGraphConfig;
use serde::{Deserialize, Serialize};

/// Graph configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphConfig {
    /// Whether adding a vertex or edge drops the cached shortest-path tree
    pub invalidate_on_mutation: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            invalidate_on_mutation: AlaGraphConfig::default().invalidate_on_mutation,
        }
    }
}

impl Validate for GraphConfig {
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }
}

impl From<&GraphConfig> for AlaGraphConfig {
    fn from(config: &GraphConfig) -> Self {
        AlaGraphConfig {
            invalidate_on_mutation: config.invalidate_on_mutation,
        }
    }
}
