use crate::entities::{RectKey, SheetSpec};
use crate::geometry::primitives::Rect;

/// A rectangle assigned to an absolute position on a sheet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// The rectangle at its absolute position
    pub rect: Rect,
    /// Index of the sheet it was placed on
    pub sheet: usize,
    /// Geometric key of the rectangle before it was placed
    pub key: RectKey,
    /// Index (in the packer's `shapes` input) of the shape associated with the rectangle, if any
    pub shape_id: Option<usize>,
}

/// Warning for a rectangle that does not fit on a sheet.
/// It is still placed, but extends past the sheet's outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OversizedPart {
    pub key: RectKey,
    pub width: f64,
    pub height: f64,
    pub sheet: usize,
}

/// Result of packing a set of rectangles onto sheets.
#[derive(Clone, Debug)]
pub struct PackResult<S> {
    pub sheet: SheetSpec,
    /// All placements, sheet after sheet, in placement order within each sheet
    pub placements: Vec<Placement>,
    /// Outline of every sheet that was opened, in sheet order
    pub sheet_outlines: Vec<Rect>,
    /// Translated copies of the associated shapes, in placement order
    pub placed_shapes: Vec<S>,
    pub warnings: Vec<OversizedPart>,
}

impl<S> PackResult<S> {
    pub fn n_sheets(&self) -> usize {
        self.sheet_outlines.len()
    }

    pub fn sheet_placements(&self, sheet: usize) -> impl Iterator<Item = &Placement> {
        self.placements.iter().filter(move |p| p.sheet == sheet)
    }

    /// Fraction of the sheet's area covered by placed rectangles.
    pub fn sheet_density(&self, sheet: usize) -> f64 {
        let used: f64 = self.sheet_placements(sheet).map(|p| p.rect.area()).sum();
        used / self.sheet.area()
    }

    /// Fraction of the total area of all sheets covered by placed rectangles.
    pub fn density(&self) -> f64 {
        match self.n_sheets() {
            0 => 0.0,
            n => {
                let used: f64 = self.placements.iter().map(|p| p.rect.area()).sum();
                used / (self.sheet.area() * n as f64)
            }
        }
    }
}
