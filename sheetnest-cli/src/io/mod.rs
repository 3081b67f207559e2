use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use serde::Serialize;
use sheetnest::io::ext_repr::ExtInstance;
use svg::Document;

use crate::EPOCH;
use crate::config::RunConfig;

pub mod cli;
pub mod output;

pub fn read_instance(path: &Path) -> Result<ExtInstance> {
    let file = File::open(path).context(format!("could not open instance file: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .context(format!("not a valid instance file: {}", path.display()))
}

pub fn read_config(path: &Path) -> Result<RunConfig> {
    let file = File::open(path).context(format!("could not open config file: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file)).context("incorrect config file format")
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .context(format!("could not open solution file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, json)
        .context(format!("could not write solution file: {}", path.display()))?;

    info!(
        "[MAIN] solution written to file:///{}",
        fs::canonicalize(path)
            .context("could not canonicalize path")?
            .to_str()
            .unwrap_or("-")
    );
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document).context(format!("could not write svg file: {}", path.display()))?;
    info!(
        "[MAIN] svg written to file:///{}",
        fs::canonicalize(path)
            .context("could not canonicalize path")?
            .to_str()
            .unwrap_or("-")
    );
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    //make sure the EPOCH is initialized
    let _ = *EPOCH;

    fern::Dispatch::new()
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()
        .context("could not initialize logger")?;
    info!("[MAIN] epoch: {}", jiff::Timestamp::now());
    Ok(())
}
