use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Re-homes one category under a different parent, regardless of the
/// `parent_id` stored on its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentOverride {
    pub move_id: i64,
    pub new_parent_id: i64,
}

/// Hand-maintained structural exceptions applied before the tree is linked.
///
/// Business cards (27) are stored under stationery but merchandised under
/// printed matter (3).
pub const DEFAULT_PARENT_OVERRIDES: &[ParentOverride] = &[ParentOverride {
    move_id: 27,
    new_parent_id: 3,
}];

/// Upper bound accepted for [`NavConfig::max_depth`].
pub const MAX_NAV_DEPTH: usize = 256;

/// Tunables for building the storefront navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Site base language, used when the requested language has no text.
    pub fallback_lang: String,
    /// Prefix joined in front of relative image keys.
    pub image_base_url: String,
    /// Path prefix for category links, e.g. `"/category"` gives `"/category/flyers"`.
    pub category_path_prefix: String,
    /// Top-level category ids shown first, in this order.
    pub priority_ids: Vec<i64>,
    pub max_top_level: usize,
    pub max_preview_per_node: usize,
    /// Deepest nesting level kept in the tree; top-level categories are at
    /// depth 1. Categories below it are dropped together with their subtree.
    pub max_depth: usize,
    pub parent_overrides: Vec<ParentOverride>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            fallback_lang: "tr".to_string(),
            image_base_url: String::new(),
            category_path_prefix: "/category".to_string(),
            priority_ids: Vec::new(),
            max_top_level: 6,
            max_preview_per_node: 8,
            max_depth: 32,
            parent_overrides: DEFAULT_PARENT_OVERRIDES.to_vec(),
        }
    }
}

impl NavConfig {
    /// Builds the link for a category slug.
    #[must_use]
    pub fn category_href(&self, slug: &str) -> String {
        format!(
            "{}/{}",
            self.category_path_prefix.trim_end_matches('/'),
            slug.trim_start_matches('/')
        )
    }
}

/// Load and validate the navigation tunables from a YAML file.
///
/// Keys absent from the file keep their [`NavConfig::default`] values.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_nav_config(path: &Path) -> Result<NavConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::NavConfigIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let config = parse_nav_config(&content)?;
    Ok(config)
}

/// Parse and validate navigation tunables from YAML text.
///
/// # Errors
///
/// Returns `ConfigError` if the text cannot be parsed or fails validation.
pub fn parse_nav_config(content: &str) -> Result<NavConfig, ConfigError> {
    let config: NavConfig = serde_yaml::from_str(content)?;
    validate_nav_config(&config)?;
    Ok(config)
}

fn validate_nav_config(config: &NavConfig) -> Result<(), ConfigError> {
    if config.fallback_lang.trim().is_empty() {
        return Err(ConfigError::Validation(
            "fallback_lang must be non-empty".to_string(),
        ));
    }

    if config.max_top_level == 0 {
        return Err(ConfigError::Validation(
            "max_top_level must be at least 1".to_string(),
        ));
    }

    if config.max_preview_per_node == 0 {
        return Err(ConfigError::Validation(
            "max_preview_per_node must be at least 1".to_string(),
        ));
    }

    if config.max_depth == 0 || config.max_depth > MAX_NAV_DEPTH {
        return Err(ConfigError::Validation(format!(
            "max_depth must be between 1 and {MAX_NAV_DEPTH}, got {}",
            config.max_depth
        )));
    }

    let mut seen_priority = HashSet::new();
    for id in &config.priority_ids {
        if !seen_priority.insert(*id) {
            return Err(ConfigError::Validation(format!(
                "duplicate priority id: {id}"
            )));
        }
    }

    let mut seen_moves = HashSet::new();
    for rule in &config.parent_overrides {
        if rule.move_id == rule.new_parent_id {
            return Err(ConfigError::Validation(format!(
                "parent override moves category {} under itself",
                rule.move_id
            )));
        }
        if !seen_moves.insert(rule.move_id) {
            return Err(ConfigError::Validation(format!(
                "category {} has more than one parent override",
                rule.move_id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "nav_config_test.rs"]
mod tests;
