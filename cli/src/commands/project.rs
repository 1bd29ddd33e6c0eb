use std::io::Write;

use anyhow::{Context, Result};
use farmplot::{SiteLayout, UtmReprojector};

use crate::{cli::{Cli, InputArgs}, commands::layout_config};

pub fn run(_cli: &Cli, args: &InputArgs) -> Result<()> {
    let config = layout_config(args)?;
    let layout = SiteLayout::load(&config)
        .context("[project] failed to load layout")?;
    let figure = layout.project(&UtmReprojector::new()?)
        .context("[project] failed to reproject layout")?;

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &figure)?;
    writeln!(stdout)?;
    Ok(())
}
