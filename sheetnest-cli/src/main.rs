use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use sheetnest_cli::config::RunConfig;
use sheetnest_cli::io::cli::Cli;
use sheetnest_cli::{io, runner};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            RunConfig::default()
        }
        Some(config_file) => io::read_config(config_file)?,
    };

    info!("[MAIN] Successfully parsed RunConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context(format!("invalid input file name: {}", args.input_file.display()))?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).context(format!(
            "could not create solution folder: {}",
            args.solution_folder.display()
        ))?;
    }

    let mut ext_instance = io::read_instance(args.input_file.as_path())?;
    if let Some(rotation) = args.rotation_override() {
        info!("[MAIN] rotation overridden from the command line: {rotation:?}");
        ext_instance.rotation = rotation;
    }
    let artifacts = runner::run(ext_instance, config, None)?;

    let solution_path = args.solution_folder.join(format!("sol_{input_file_stem}.json"));
    io::write_json(&artifacts.output, Path::new(&solution_path))?;

    let svg_path = args.solution_folder.join(format!("sol_{input_file_stem}.svg"));
    io::write_svg(&artifacts.svg, Path::new(&svg_path))?;

    Ok(())
}
