use std::time::Instant;

use anyhow::{Context, Result};
use log::{info, warn};
use sheetnest::io::ext_repr::ExtInstance;
use sheetnest::io::svg::pack_result_to_svg;
use sheetnest::io::{export, import};
use sheetnest::nest;
use sheetnest::util::CancelToken;
use svg::Document;
use thousands::Separable;

use crate::config::RunConfig;
use crate::io::output::NestRunOutput;

/// Everything a run produces
pub struct RunArtifacts {
    pub output: NestRunOutput,
    pub svg: Document,
}

/// Imports `ext_instance`, nests it and composes the JSON output and SVG drawing.
pub fn run(
    ext_instance: ExtInstance,
    config: RunConfig,
    cancel_token: Option<&CancelToken>,
) -> Result<RunArtifacts> {
    let start = Instant::now();
    let instance = import::import_instance(&ext_instance)
        .context(format!("could not import instance {}", ext_instance.name))?;

    info!(
        "[MAIN] nesting {} parts and {} extra rectangles of instance {} on {} x {} sheets",
        instance.n_parts().separate_with_commas(),
        instance.rectangles.len().separate_with_commas(),
        instance.name,
        instance.sheet.width,
        instance.sheet.height
    );

    let nest_output = nest(
        &instance.parts,
        &instance.rectangles,
        instance.sheet,
        instance.rotation,
        &config.nest,
        cancel_token,
    )
    .context("nesting failed")?;

    let packing = &nest_output.packing;
    if !nest_output.skipped.is_empty() {
        warn!(
            "[MAIN] {} part(s) skipped because of degenerate geometry",
            nest_output.skipped.len().separate_with_commas()
        );
    }
    if !packing.warnings.is_empty() {
        warn!(
            "[MAIN] {} footprint(s) exceed the sheet dimensions",
            packing.warnings.len().separate_with_commas()
        );
    }

    let run_time_ms = start.elapsed().as_millis() as u64;
    info!(
        "[MAIN] {} placements on {} sheet(s), density {:.3}%, in {}ms",
        packing.placements.len().separate_with_commas(),
        packing.n_sheets().separate_with_commas(),
        packing.density() * 100.0,
        run_time_ms.separate_with_commas()
    );

    let solution = export::export_solution(&instance, &nest_output, run_time_ms);
    let svg = pack_result_to_svg(packing, config.svg_draw_options, &instance.name);

    Ok(RunArtifacts {
        output: NestRunOutput {
            instance: ext_instance,
            solution,
            config,
        },
        svg,
    })
}
