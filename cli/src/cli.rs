use std::path::PathBuf;

/// Wind-farm layout plotter (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "farmplot", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Draw the site boundary and point locations in UTM to an SVG figure
    Plot(PlotArgs),

    /// Print the projected boundary and points as JSON on stdout
    Project(InputArgs),
}

/// Where to find the boundary and points files.
/// Defaults to Khank/Boundary.geojson and Khank/Offshorewindmills.geojson next to the executable.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// JSON layout config; relative paths inside it resolve against its directory
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Directory holding Boundary.geojson and Offshorewindmills.geojson
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub data_dir: Option<PathBuf>,

    /// Boundary FeatureCollection (overrides --data-dir)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub boundary: Option<PathBuf>,

    /// Points FeatureCollection (overrides --data-dir)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub points: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct PlotArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output SVG file, defaults to "./layout.svg"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Open the figure in the system viewer once written
    #[arg(long)]
    pub open: bool,
}
