use crate::entities::Placement;
use crate::geometry::primitives::{Point, Rect};
use crate::{Error, Result};

/// Spacing between placements (and between sheets) when none is given.
pub const DEFAULT_SPACING: f64 = 5.0;

/// Dimensions of the stock sheets and the spacing kept between parts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetSpec {
    pub width: f64,
    pub height: f64,
    pub spacing: f64,
}

impl SheetSpec {
    pub fn try_new(width: f64, height: f64, spacing: f64) -> Result<Self> {
        if !(width.is_finite() && width > 0.0) {
            return Err(Error::InvalidInput(format!(
                "sheet width must be positive, got {width}"
            )));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(Error::InvalidInput(format!(
                "sheet height must be positive, got {height}"
            )));
        }
        if !(spacing.is_finite() && spacing >= 0.0) {
            return Err(Error::InvalidInput(format!(
                "spacing must be non-negative, got {spacing}"
            )));
        }
        Ok(Self {
            width,
            height,
            spacing,
        })
    }

    /// Builds a sheet from possibly absent inputs.
    /// Width and height are required, a missing spacing falls back to [`DEFAULT_SPACING`].
    pub fn from_inputs(width: Option<f64>, height: Option<f64>, spacing: Option<f64>) -> Result<Self> {
        let width = width.ok_or(Error::MissingRequiredInput {
            field: "sheet_width",
        })?;
        let height = height.ok_or(Error::MissingRequiredInput {
            field: "sheet_height",
        })?;
        Self::try_new(width, height, spacing.unwrap_or(DEFAULT_SPACING))
    }

    /// Sheets are laid out in a single row: sheet `i` starts at `i * (width + spacing)`.
    pub fn origin(&self, index: usize) -> Point {
        Point(index as f64 * (self.width + self.spacing), 0.0)
    }

    pub fn outline(&self, index: usize) -> Rect {
        let Point(x, y) = self.origin(index);
        Rect {
            x_min: x,
            y_min: y,
            x_max: x + self.width,
            y_max: y + self.height,
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Whether a rectangle of these dimensions fits on a single sheet.
    pub fn fits(&self, width: f64, height: f64) -> bool {
        width <= self.width && height <= self.height
    }
}

/// A sheet and the placements it received, in placement order.
#[derive(Clone, Debug, PartialEq)]
pub struct Sheet {
    pub index: usize,
    pub placements: Vec<Placement>,
}

impl Sheet {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            placements: vec![],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}
