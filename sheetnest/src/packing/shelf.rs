use crate::entities::SheetSpec;
use crate::geometry::primitives::Point;

/// Scan state of the shelf packer, threaded through every placement.
///
/// Offsets are relative to the origin of the current sheet.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ShelfState {
    pub sheet_index: usize,
    pub x_offset: f64,
    pub y_offset: f64,
    pub max_row_height: f64,
}

/// Outcome of placing a single rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShelfStep {
    /// Absolute position of the rectangle's minimum corner
    pub position: Point,
    pub sheet_index: usize,
    /// A new row was started for this rectangle
    pub row_wrapped: bool,
    /// A new sheet was started for this rectangle, the previous one is closed
    pub sheet_wrapped: bool,
}

impl ShelfState {
    /// Places a `width` x `height` rectangle and returns the next state.
    ///
    /// The rectangle goes to the right of the previous one. If it sticks out past the sheet's width,
    /// a new row is started below the tallest rectangle of the current row. If it then sticks out past
    /// the sheet's height, a new sheet is started. A rectangle larger than the sheet itself is placed
    /// at the origin of the new sheet without further checks.
    pub fn place(self, width: f64, height: f64, sheet: &SheetSpec) -> (ShelfState, ShelfStep) {
        let mut state = self;
        let mut row_wrapped = false;
        let mut sheet_wrapped = false;

        if state.x_offset + width > sheet.width {
            state.x_offset = 0.0;
            state.y_offset += state.max_row_height + sheet.spacing;
            state.max_row_height = 0.0;
            row_wrapped = true;
        }

        if state.y_offset + height > sheet.height {
            state = ShelfState {
                sheet_index: state.sheet_index + 1,
                ..ShelfState::default()
            };
            sheet_wrapped = true;
        }

        let Point(sheet_x, sheet_y) = sheet.origin(state.sheet_index);
        let step = ShelfStep {
            position: Point(sheet_x + state.x_offset, sheet_y + state.y_offset),
            sheet_index: state.sheet_index,
            row_wrapped,
            sheet_wrapped,
        };

        state.x_offset += width + sheet.spacing;
        state.max_row_height = f64::max(state.max_row_height, height);

        (state, step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_then_sheet_wrap() {
        let sheet = SheetSpec::try_new(100.0, 100.0, 0.0).unwrap();
        let (s1, step1) = ShelfState::default().place(60.0, 60.0, &sheet);
        assert_eq!(step1.position, Point(0.0, 0.0));
        assert!(!step1.row_wrapped && !step1.sheet_wrapped);

        let (s2, step2) = s1.place(60.0, 60.0, &sheet);
        assert!(step2.row_wrapped && step2.sheet_wrapped);
        assert_eq!(step2.sheet_index, 1);
        assert_eq!(step2.position, Point(100.0, 0.0));
        assert_eq!(s2.x_offset, 60.0);
        assert_eq!(s2.max_row_height, 60.0);
    }

    #[test]
    fn exact_fit_stays_on_row() {
        let sheet = SheetSpec::try_new(20.0, 30.0, 2.0).unwrap();
        let (s1, _) = ShelfState::default().place(8.0, 8.0, &sheet);
        let (s2, step) = s1.place(10.0, 5.0, &sheet);
        assert_eq!(step.position, Point(10.0, 0.0));
        assert!(!step.row_wrapped);
        assert_eq!(s2.max_row_height, 8.0);
    }

    #[test]
    fn oversized_rectangle_opens_new_sheet_without_recheck() {
        let sheet = SheetSpec::try_new(10.0, 10.0, 1.0).unwrap();
        let (state, step) = ShelfState::default().place(5.0, 15.0, &sheet);
        assert!(step.sheet_wrapped);
        assert_eq!(step.sheet_index, 1);
        assert_eq!(step.position, Point(11.0, 0.0));
        assert_eq!(state.max_row_height, 15.0);
    }
}
