use std::time::Instant;

use log::{debug, info, trace, warn};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::entities::{OrientedFootprint, Part, RotationMode};
use crate::geometry::geo_traits::Nestable;
use crate::geometry::primitives::Point;
use crate::util::{CancelToken, DegeneratePolicy, RotationConfig, cancel};
use crate::{Error, Result};

/// Footprints of all parts that could be oriented, plus the parts that were left out.
#[derive(Clone, Debug)]
pub struct RotationOutput<S> {
    /// One footprint per non-skipped part, in input order
    pub footprints: Vec<OrientedFootprint<S>>,
    /// Indices of parts skipped because of degenerate geometry (only with [`DegeneratePolicy::Skip`])
    pub skipped: Vec<usize>,
}

/// Searches, for every part independently, the orientation minimizing its bounding area.
#[derive(Clone, Debug)]
pub struct RotationOptimizer {
    pub config: RotationConfig,
}

impl RotationOptimizer {
    pub fn new(config: RotationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Orients all `parts` according to `mode`.
    ///
    /// Parts are evaluated in parallel (feature `parallel`), the output is ordered by part index regardless.
    /// Degenerate parts are handled according to the configured [`DegeneratePolicy`].
    pub fn optimize<S>(
        &self,
        parts: &[Part<S>],
        mode: RotationMode,
        cancel_token: Option<&CancelToken>,
    ) -> Result<RotationOutput<S>>
    where
        S: Nestable + Send + Sync,
    {
        let start = Instant::now();

        let evaluate = |(index, part): (usize, &Part<S>)| -> Result<Result<OrientedFootprint<S>>> {
            cancel::check(cancel_token)?;
            Ok(self.optimize_part(index, part, mode))
        };

        #[cfg(feature = "parallel")]
        let evaluated = parts
            .par_iter()
            .enumerate()
            .map(evaluate)
            .collect::<Result<Vec<Result<OrientedFootprint<S>>>>>()?;

        #[cfg(not(feature = "parallel"))]
        let evaluated = parts
            .iter()
            .enumerate()
            .map(evaluate)
            .collect::<Result<Vec<Result<OrientedFootprint<S>>>>>()?;

        let mut output = RotationOutput {
            footprints: Vec::with_capacity(parts.len()),
            skipped: vec![],
        };
        for (index, result) in evaluated.into_iter().enumerate() {
            match (result, self.config.degenerate_policy) {
                (Ok(footprint), _) => output.footprints.push(footprint),
                (Err(err), DegeneratePolicy::Abort) => return Err(err),
                (Err(err), DegeneratePolicy::Skip) => {
                    warn!("[ROT] skipping part {index}: {err}");
                    output.skipped.push(index);
                }
            }
        }

        info!(
            "[ROT] oriented {}/{} parts ({:?}) in {:.3}ms",
            output.footprints.len(),
            parts.len(),
            mode,
            start.elapsed().as_secs_f64() * 1000.0
        );

        Ok(output)
    }

    /// Orients a single part.
    ///
    /// In [`RotationMode::Optimize`], every sampled angle is evaluated in increasing order and
    /// the first angle reaching the minimum area is kept.
    pub fn optimize_part<S: Nestable>(
        &self,
        part_index: usize,
        part: &Part<S>,
        mode: RotationMode,
    ) -> Result<OrientedFootprint<S>> {
        let pivot = part
            .pivot
            .ok_or(Error::DegenerateGeometry { part_index })?;

        match mode {
            RotationMode::Manual { angle_deg } => {
                evaluate_angle(part_index, &part.shape, pivot, angle_deg)
            }
            RotationMode::Optimize => {
                let mut best: Option<OrientedFootprint<S>> = None;
                for angle_deg in self.config.sampled_angles() {
                    let candidate = evaluate_angle(part_index, &part.shape, pivot, angle_deg as i32)?;
                    trace!(
                        "[ROT] part {part_index} at {angle_deg}°: area {:.6}",
                        candidate.area
                    );
                    // strict comparison: on ties the smaller angle, sampled first, is kept
                    if best.as_ref().is_none_or(|b| candidate.area < b.area) {
                        best = Some(candidate);
                    }
                }
                let best = best.ok_or(Error::DegenerateGeometry { part_index })?;
                debug!(
                    "[ROT] part {part_index} oriented at {}° (area {:.3})",
                    best.angle_deg, best.area
                );
                Ok(best)
            }
        }
    }
}

/// Convenience wrapper taking the rotation mode as a manual angle and an optimize flag.
pub fn optimize_rotation<S>(
    parts: &[Part<S>],
    manual_angle_deg: i32,
    optimize: bool,
    config: RotationConfig,
    cancel_token: Option<&CancelToken>,
) -> Result<RotationOutput<S>>
where
    S: Nestable + Send + Sync,
{
    RotationOptimizer::new(config)?.optimize(
        parts,
        RotationMode::from_flags(manual_angle_deg, optimize),
        cancel_token,
    )
}

fn evaluate_angle<S: Nestable>(
    part_index: usize,
    shape: &S,
    pivot: Point,
    angle_deg: i32,
) -> Result<OrientedFootprint<S>> {
    let rotated = shape.rotated_about((angle_deg as f64).to_radians(), pivot);
    let bbox = rotated
        .bbox()
        .ok_or(Error::DegenerateGeometry { part_index })?;
    Ok(OrientedFootprint {
        part_index,
        angle_deg,
        area: bbox.area(),
        bbox,
        shape: rotated,
    })
}
