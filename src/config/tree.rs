//! Red-black tree front end configuration module.

use super::{ConfigResult, Validate};
use crate::data_structures::moku_rb_tree::MokuTreeConfig;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Largest accepted indentation per depth level.
const MAX_INDENT_WIDTH: usize = 16;

/// Tree configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TreeConfig {
    /// Columns of indentation per depth level in the `print` dump
    pub indent_width: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            indent_width: MokuTreeConfig::default().indent_width,
        }
    }
}

impl Validate for TreeConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.indent_width == 0 || self.indent_width > MAX_INDENT_WIDTH {
            return Err(ConfigError::ValueOutOfRange {
                key: "tree.indent_width".to_string(),
                message: format!("must be between 1 and {MAX_INDENT_WIDTH}"),
            });
        }
        Ok(())
    }
}

impl From<&TreeConfig> for MokuTreeConfig {
    fn from(config: &TreeConfig) -> Self {
        MokuTreeConfig {
            indent_width: config.indent_width,
        }
    }
}
