use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use sheetnest::io::ext_repr::ExtRotation;

/// Nests the parts of a JSON instance onto rectangular sheets and writes the solution as JSON and SVG.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// JSON instance: parts, extra rectangles, sheet dimensions and rotation settings
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Folder receiving `sol_<instance>.json` and `sol_<instance>.svg`, created if missing
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    /// JSON run configuration (rotation sampling, key resolution, SVG options), defaults if absent
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Rotate every part by this fixed angle instead of the instance's rotation settings
    #[arg(short, long, value_name = "DEGREES", conflicts_with = "optimize", allow_hyphen_values = true)]
    pub angle: Option<i32>,
    /// Search the footprint-minimizing angle of every part, regardless of the instance's rotation settings
    #[arg(short, long)]
    pub optimize: bool,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}

impl Cli {
    /// Rotation settings replacing the instance's own, if any were given on the command line.
    pub fn rotation_override(&self) -> Option<ExtRotation> {
        match (self.angle, self.optimize) {
            (Some(angle), _) => Some(ExtRotation {
                manual_angle_deg: angle,
                optimize: false,
            }),
            (None, true) => Some(ExtRotation {
                manual_angle_deg: 0,
                optimize: true,
            }),
            (None, false) => None,
        }
    }
}
