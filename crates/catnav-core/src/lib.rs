pub mod app_config;
pub mod catalog;
pub mod config;
pub mod nav;
pub mod nav_config;

pub use app_config::{AppConfig, Environment};
pub use catalog::{
    CatalogSnapshot, CategoryRow, CategoryTranslation, Localized, MediaItem, ProductName,
    ProductRow,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use nav::{NavItem, PanelSelection, ProductPreview};
pub use nav_config::{
    load_nav_config, parse_nav_config, NavConfig, ParentOverride, DEFAULT_PARENT_OVERRIDES,
    MAX_NAV_DEPTH,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read navigation config at {path}: {source}")]
    NavConfigIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse navigation config: {0}")]
    NavConfigParse(#[from] serde_yaml::Error),

    #[error("navigation config validation failed: {0}")]
    Validation(String),
}

/// Rejection of a catalog snapshot at the input boundary.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("malformed catalog snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("category {category_id} has a blank slug")]
    BlankCategorySlug { category_id: i64 },

    #[error("product {product_id} (category {category_id}) has a blank slug")]
    BlankProductSlug { product_id: i64, category_id: i64 },

    #[error("category {category_id} has a non-finite sort key")]
    NonFiniteSortKey { category_id: i64 },
}
