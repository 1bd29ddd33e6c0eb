use anyhow::{Context, Result};
use farmplot::SvgFile;

use crate::{cli::{Cli, PlotArgs}, commands::layout_config};

pub fn run(_cli: &Cli, args: &PlotArgs) -> Result<()> {
    let mut config = layout_config(&args.input)?;
    if let Some(output) = &args.output { config.output_path = output.clone() }

    tracing::info!(
        boundary = %config.boundary_path.display(),
        points = %config.points_path.display(),
        "plotting layout"
    );

    let target = SvgFile::new(&config.output_path, config.style.clone());
    let path = farmplot::plot(&config, &target)
        .context("[plot] failed to plot layout")?;
    println!("[plot] wrote {}", path.display());

    if args.open {
        // Blocks until the platform launcher returns.
        open::that(&path)
            .with_context(|| format!("[plot] failed to open {}", path.display()))?;
    }

    Ok(())
}
