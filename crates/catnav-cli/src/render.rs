//! Command handlers. Everything here is glue around `catnav-tree`; the
//! handlers return their output so `main` stays the only place that prints.

use std::path::PathBuf;

use catnav_core::{load_nav_config, AppConfig, CatalogSnapshot, NavConfig};
use catnav_tree::{build_navigation, Locale, NavVariant};

#[derive(Debug, Clone)]
pub(crate) struct RenderOptions {
    pub input: PathBuf,
    pub lang: Option<String>,
    pub variant: NavVariant,
    pub pretty: bool,
}

/// Loads the navigation config named by `app`, with env overrides applied.
pub(crate) fn load_effective_nav_config(app: &AppConfig) -> anyhow::Result<NavConfig> {
    let mut nav = load_nav_config(&app.nav_config_path)?;
    if let Some(base) = &app.image_base_url {
        nav.image_base_url.clone_from(base);
    }
    Ok(nav)
}

/// Picks the requested language: explicit flag, then env default, then the
/// site language itself.
fn target_lang(options: &RenderOptions, app: &AppConfig, nav: &NavConfig) -> String {
    options
        .lang
        .clone()
        .or_else(|| app.default_target_lang.clone())
        .unwrap_or_else(|| nav.fallback_lang.clone())
}

/// Builds the navigation for `options.input` and returns it as JSON.
pub(crate) fn render_navigation(app: &AppConfig, options: &RenderOptions) -> anyhow::Result<String> {
    let nav = load_effective_nav_config(app)?;

    let raw = std::fs::read_to_string(&options.input).map_err(|e| {
        anyhow::anyhow!(
            "failed to read catalog snapshot {}: {e}",
            options.input.display()
        )
    })?;
    let snapshot = CatalogSnapshot::from_json(&raw)?;

    let locale = Locale::new(target_lang(options, app, &nav), nav.fallback_lang.clone())?;
    let roots = build_navigation(&snapshot, &locale, &nav, options.variant)?;

    tracing::info!(
        input = %options.input.display(),
        lang = locale.target(),
        variant = ?options.variant,
        roots = roots.len(),
        "navigation built"
    );

    let json = if options.pretty {
        serde_json::to_string_pretty(&roots)?
    } else {
        serde_json::to_string(&roots)?
    };
    Ok(json)
}

/// Validates the navigation config and summarizes what it will do.
pub(crate) fn check_config(app: &AppConfig) -> anyhow::Result<String> {
    let nav = load_effective_nav_config(app)?;
    let overrides = nav
        .parent_overrides
        .iter()
        .map(|o| format!("{}->{}", o.move_id, o.new_parent_id))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(format!(
        "{}: ok (fallback_lang={}, priority_ids={:?}, max_top_level={}, max_preview_per_node={}, max_depth={}, parent_overrides=[{}])",
        app.nav_config_path.display(),
        nav.fallback_lang,
        nav.priority_ids,
        nav.max_top_level,
        nav.max_preview_per_node,
        nav.max_depth,
        overrides
    ))
}
