use itertools::Itertools;
use log::info;

use crate::Result;
use crate::entities::{OrientedFootprint, PackResult, Part, RotationMode, SheetSpec};
use crate::geometry::geo_traits::Nestable;
use crate::geometry::primitives::Rect;
use crate::packing::ShelfPacker;
use crate::rotation::RotationOptimizer;
use crate::util::{CancelToken, NestConfig};

/// Output of the complete pipeline.
#[derive(Clone, Debug)]
pub struct NestOutput<S> {
    /// Oriented parts, in part order. Shape `i` of the packer's input is `footprints[i].shape`.
    pub footprints: Vec<OrientedFootprint<S>>,
    /// Indices of parts left out because of degenerate geometry
    pub skipped: Vec<usize>,
    pub packing: PackResult<S>,
}

impl<S> NestOutput<S> {
    /// Index of the part a packer shape id refers to.
    pub fn part_index_of_shape(&self, shape_id: usize) -> usize {
        self.footprints[shape_id].part_index
    }
}

/// Orients all `parts`, then packs their footprints together with `extra_rectangles` onto sheets.
///
/// The two stages only communicate through the list of footprints: the rotated shapes become
/// the packer's shapes and their bounding rectangles its rectangles.
pub fn nest<S>(
    parts: &[Part<S>],
    extra_rectangles: &[Rect],
    sheet: SheetSpec,
    mode: RotationMode,
    config: &NestConfig,
    cancel_token: Option<&CancelToken>,
) -> Result<NestOutput<S>>
where
    S: Nestable + Send + Sync,
{
    config.validate()?;

    let rotation = RotationOptimizer::new(config.rotation)?.optimize(parts, mode, cancel_token)?;

    let shapes = rotation.footprints.iter().map(|fp| fp.shape.clone()).collect_vec();
    let rectangles = rotation
        .footprints
        .iter()
        .map(|fp| fp.bbox)
        .chain(extra_rectangles.iter().copied())
        .collect_vec();

    let packing = ShelfPacker::new(sheet, config.packing)?.pack(&rectangles, &shapes, cancel_token)?;

    info!(
        "[NEST] {} parts ({} skipped) and {} extra rectangles nested onto {} sheet(s)",
        parts.len(),
        rotation.skipped.len(),
        extra_rectangles.len(),
        packing.n_sheets()
    );

    Ok(NestOutput {
        footprints: rotation.footprints,
        skipped: rotation.skipped,
        packing,
    })
}
