use std::time::Instant;

use log::{debug, info, warn};

use crate::entities::{OversizedPart, PackResult, Placement, Sheet, SheetSpec};
use crate::geometry::geo_traits::Nestable;
use crate::geometry::primitives::{Point, Rect};
use crate::packing::{ShelfState, WorkingSet};
use crate::util::{CancelToken, PackConfig, assertions, cancel};
use crate::Result;

/// Greedy row-by-row packer distributing rectangles over identical sheets.
#[derive(Clone, Debug)]
pub struct ShelfPacker {
    pub sheet: SheetSpec,
    pub config: PackConfig,
}

impl ShelfPacker {
    pub fn new(sheet: SheetSpec, config: PackConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { sheet, config })
    }

    /// Packs `rectangles` and the bounding rectangles of `shapes` onto sheets.
    ///
    /// Shapes are translated along with their footprint and returned in placement order.
    /// Rectangles that do not fit on a sheet are still placed and reported as [`OversizedPart`].
    pub fn pack<S: Nestable>(
        &self,
        rectangles: &[Rect],
        shapes: &[S],
        cancel_token: Option<&CancelToken>,
    ) -> Result<PackResult<S>> {
        let start = Instant::now();
        let sheet = &self.sheet;
        let working_set = WorkingSet::build(rectangles, shapes, self.config.key_resolution)?;

        let mut state = ShelfState::default();
        let mut closed_sheets: Vec<Sheet> = vec![];
        let mut open_sheet = Sheet::new(0);
        let mut placed_shapes = vec![];
        let mut warnings = vec![];

        for item in working_set.items.iter() {
            cancel::check(cancel_token)?;

            let (w, h) = (item.keyed.width(), item.keyed.height());
            let (next_state, step) = state.place(w, h, sheet);
            state = next_state;

            if step.sheet_wrapped {
                debug!("[PACK] sheet {} closed", open_sheet.index);
                let closed = std::mem::replace(&mut open_sheet, Sheet::new(step.sheet_index));
                closed_sheets.push(closed);
            }

            if !sheet.fits(w, h) {
                warn!(
                    "[PACK] rectangle {w:.3}x{h:.3} exceeds the {:.3}x{:.3} sheet, it extends past sheet {}",
                    sheet.width, sheet.height, step.sheet_index
                );
                warnings.push(OversizedPart {
                    key: item.keyed.key,
                    width: w,
                    height: h,
                    sheet: step.sheet_index,
                });
            }

            let Point(x, y) = step.position;
            open_sheet.placements.push(Placement {
                rect: item.keyed.rect.moved_to(x, y),
                sheet: step.sheet_index,
                key: item.keyed.key,
                shape_id: item.shape_id,
            });

            if let Some(shape_id) = item.shape_id {
                let shape = &shapes[shape_id];
                let Point(min_x, min_y) = shape
                    .min_corner()
                    .unwrap_or(item.keyed.rect.corners()[0]);
                placed_shapes.push(shape.translated((x - min_x, y - min_y)));
            }

            debug!(
                "[PACK] placed {w:.3}x{h:.3} at ({x:.3}, {y:.3}) on sheet {}{}",
                step.sheet_index,
                if step.row_wrapped { " (new row)" } else { "" }
            );
        }

        if !open_sheet.is_empty() {
            closed_sheets.push(open_sheet);
        }

        let sheet_outlines = (0..closed_sheets.len())
            .map(|i| sheet.outline(i))
            .collect();

        debug_assert!(closed_sheets.iter().all(|s| assertions::sheet_is_overlap_free(s, sheet)));

        let result = PackResult {
            sheet: *sheet,
            placements: closed_sheets.into_iter().flat_map(|s| s.placements).collect(),
            sheet_outlines,
            placed_shapes,
            warnings,
        };

        info!(
            "[PACK] packed {} rectangles onto {} sheet(s) with a density of {:.3}% in {:.3}ms",
            result.placements.len(),
            result.n_sheets(),
            result.density() * 100.0,
            start.elapsed().as_secs_f64() * 1000.0
        );

        Ok(result)
    }
}

/// Validates the sheet dimensions and packs in one call.
///
/// `sheet_width` and `sheet_height` are required, `spacing` defaults to [`DEFAULT_SPACING`](crate::entities::DEFAULT_SPACING).
pub fn pack_sheets<S: Nestable>(
    rectangles: &[Rect],
    shapes: &[S],
    sheet_width: Option<f64>,
    sheet_height: Option<f64>,
    spacing: Option<f64>,
    config: PackConfig,
    cancel_token: Option<&CancelToken>,
) -> Result<PackResult<S>> {
    let sheet = SheetSpec::from_inputs(sheet_width, sheet_height, spacing)?;
    ShelfPacker::new(sheet, config)?.pack(rectangles, shapes, cancel_token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::geometry::primitives::SPolygon;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect::from_origin(x, y, w, h).unwrap()
    }

    #[test]
    fn missing_dimensions_fail_fast() {
        let rects = vec![rect(0.0, 0.0, 1.0, 1.0)];
        let err = pack_sheets::<SPolygon>(&rects, &[], None, Some(10.0), None, PackConfig::default(), None)
            .unwrap_err();
        assert_eq!(err, Error::MissingRequiredInput { field: "sheet_width" });
        let err = pack_sheets::<SPolygon>(&rects, &[], Some(10.0), None, None, PackConfig::default(), None)
            .unwrap_err();
        assert_eq!(err, Error::MissingRequiredInput { field: "sheet_height" });
    }

    #[test]
    fn shapes_follow_their_footprint() {
        let shape = SPolygon::from(rect(-7.0, 3.0, 4.0, 2.0));
        let result = pack_sheets(&[], &[shape], Some(50.0), Some(50.0), Some(1.0), PackConfig::default(), None)
            .unwrap();
        assert_eq!(result.placed_shapes.len(), 1);
        assert_eq!(result.placed_shapes[0].min_corner(), Some(Point(0.0, 0.0)));
        assert_eq!(result.placements[0].shape_id, Some(0));
    }

    #[test]
    fn placeholders_produce_no_shapes() {
        let shapes = vec![SPolygon::from(rect(0.0, 0.0, 2.0, 2.0))];
        let rects = vec![rect(0.0, 0.0, 3.0, 3.0)];
        let result = pack_sheets(&rects, &shapes, Some(50.0), Some(50.0), None, PackConfig::default(), None)
            .unwrap();
        assert_eq!(result.placements.len(), 2);
        assert_eq!(result.placed_shapes.len(), 1);
        assert_eq!(result.placements[0].shape_id, None);
        assert_eq!(result.placements[1].rect, rect(8.0, 0.0, 2.0, 2.0));
    }

    #[test]
    fn oversized_first_rectangle_leaves_an_empty_sheet() {
        let rects = vec![rect(0.0, 0.0, 5.0, 15.0)];
        let result = pack_sheets::<SPolygon>(&rects, &[], Some(10.0), Some(10.0), Some(0.0), PackConfig::default(), None)
            .unwrap();
        assert_eq!(result.n_sheets(), 2);
        assert_eq!(result.placements[0].sheet, 1);
        assert_eq!(result.sheet_placements(0).count(), 0);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].sheet, 1);
    }

    #[test]
    fn empty_input_has_no_sheets() {
        let result = pack_sheets::<SPolygon>(&[], &[], Some(10.0), Some(10.0), None, PackConfig::default(), None)
            .unwrap();
        assert_eq!(result.n_sheets(), 0);
        assert_eq!(result.density(), 0.0);
    }

    #[test]
    fn cancelled_pack_returns_nothing() {
        let token = CancelToken::new();
        token.cancel();
        let rects = vec![rect(0.0, 0.0, 1.0, 1.0)];
        let err = pack_sheets::<SPolygon>(&rects, &[], Some(10.0), Some(10.0), None, PackConfig::default(), Some(&token))
            .unwrap_err();
        assert_eq!(err, Error::Cancelled);
    }

    #[test]
    fn unkeyable_coordinates_are_rejected() {
        let rects = vec![rect(0.0, 0.0, 1.0, 1.0), rect(1e13, 0.0, 1.0, 1.0)];
        let err = pack_sheets::<SPolygon>(&rects, &[], Some(10.0), Some(10.0), None, PackConfig::default(), None)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
