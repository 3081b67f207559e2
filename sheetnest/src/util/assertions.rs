//Various checks to verify correctness of the state of the system
//Used in debug_assert!() blocks

use itertools::Itertools;
use log::error;

use crate::entities::{PackResult, Placement, Sheet, SheetSpec};
use crate::util::FPA;

/// Placements of rectangles that fit on a sheet never overlap each other.
/// Rectangles that touch are not considered overlapping.
pub fn sheet_is_overlap_free(sheet: &Sheet, spec: &SheetSpec) -> bool {
    let fitting = sheet
        .placements
        .iter()
        .filter(|p| spec.fits(p.rect.width(), p.rect.height()));

    for (a, b) in fitting.tuple_combinations() {
        if placements_overlap(a, b) {
            error!(
                "placements {:?} and {:?} overlap on sheet {}",
                a.rect, b.rect, sheet.index
            );
            return false;
        }
    }
    true
}

/// Every placement of a rectangle that fits on a sheet lies within that sheet's outline.
pub fn placements_within_outlines<S>(result: &PackResult<S>) -> bool {
    result
        .placements
        .iter()
        .filter(|p| result.sheet.fits(p.rect.width(), p.rect.height()))
        .all(|p| {
            let outline = result.sheet_outlines[p.sheet];
            FPA(outline.x_min) <= FPA(p.rect.x_min)
                && FPA(outline.y_min) <= FPA(p.rect.y_min)
                && FPA(outline.x_max) >= FPA(p.rect.x_max)
                && FPA(outline.y_max) >= FPA(p.rect.y_max)
        })
}

fn placements_overlap(a: &Placement, b: &Placement) -> bool {
    let (a, b) = (&a.rect, &b.rect);
    FPA(f64::max(a.x_min, b.x_min)) < FPA(f64::min(a.x_max, b.x_max))
        && FPA(f64::max(a.y_min, b.y_min)) < FPA(f64::min(a.y_max, b.y_max))
}
