pub mod plot;
pub mod project;

use anyhow::{Context, Result};
use farmplot::LayoutConfig;

use crate::cli::InputArgs;

/// Resolve input paths, lowest precedence first:
/// default layout beside the executable, `--config`, `--data-dir`, then `--boundary` / `--points`.
pub fn layout_config(args: &InputArgs) -> Result<LayoutConfig> {
    let mut config = match &args.config {
        Some(path) => LayoutConfig::from_json_file(path)
            .with_context(|| format!("[config] failed to load {}", path.display()))?,
        None => LayoutConfig::beside_executable(),
    };

    if let Some(dir) = &args.data_dir {
        let defaults = LayoutConfig::in_dir(dir);
        config.boundary_path = defaults.boundary_path;
        config.points_path = defaults.points_path;
    }
    if let Some(boundary) = &args.boundary { config.boundary_path = boundary.clone() }
    if let Some(points) = &args.points { config.points_path = points.clone() }

    Ok(config)
}
