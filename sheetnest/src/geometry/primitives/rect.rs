use crate::geometry::primitives::Point;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

///Axis-aligned rectangle.
///
///Zero width or height is allowed (a straight cut line still occupies a row on a sheet),
///inverted or non-finite bounds are not.
#[derive(Clone, Debug, PartialEq, Copy, Serialize, Deserialize)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    pub fn try_new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self> {
        let finite = [x_min, y_min, x_max, y_max].iter().all(|v| v.is_finite());
        if !finite || x_min > x_max || y_min > y_max {
            return Err(Error::InvalidInput(format!(
                "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
            )));
        }
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Rectangle with its minimum corner at `(x_min, y_min)` and the given dimensions.
    pub fn from_origin(x_min: f64, y_min: f64, width: f64, height: f64) -> Result<Self> {
        Rect::try_new(x_min, y_min, x_min + width, y_min + height)
    }

    /// Smallest rectangle containing all `points`.
    /// Returns `None` if there are no points or any of them is non-finite.
    pub fn bounding(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut bounds: Option<Rect> = None;
        for p in points {
            if !p.is_finite() {
                return None;
            }
            bounds = Some(match bounds {
                None => Rect {
                    x_min: p.0,
                    y_min: p.1,
                    x_max: p.0,
                    y_max: p.1,
                },
                Some(r) => Rect {
                    x_min: r.x_min.min(p.0),
                    y_min: r.y_min.min(p.1),
                    x_max: r.x_max.max(p.0),
                    y_max: r.y_max.max(p.1),
                },
            });
        }
        bounds
    }

    /// Returns the same rectangle moved so that its minimum corner lies at `(x, y)`.
    pub fn moved_to(&self, x: f64, y: f64) -> Rect {
        Rect {
            x_min: x,
            y_min: y,
            x_max: x + self.width(),
            y_max: y + self.height(),
        }
    }

    /// Returns a new rectangle with the same centroid but scaled by `factor`.
    pub fn scale(self, factor: f64) -> Self {
        let dx = (self.x_max - self.x_min) * (factor - 1.0) / 2.0;
        let dy = (self.y_max - self.y_min) * (factor - 1.0) / 2.0;
        Rect {
            x_min: self.x_min - dx,
            y_min: self.y_min - dy,
            x_max: self.x_max + dx,
            y_max: self.y_max + dy,
        }
    }

    /// Returns the four corners, counterclockwise starting from the minimum corner.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point(self.x_min, self.y_min),
            Point(self.x_max, self.y_min),
            Point(self.x_max, self.y_max),
            Point(self.x_min, self.y_max),
        ]
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn centroid(&self) -> Point {
        Point(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    pub fn bounding_rectangle(a: Rect, b: Rect) -> Rect {
        Rect {
            x_min: f64::min(a.x_min, b.x_min),
            y_min: f64::min(a.y_min, b.y_min),
            x_max: f64::max(a.x_max, b.x_max),
            y_max: f64::max(a.y_max, b.y_max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_bounds_are_rejected() {
        assert!(Rect::try_new(1.0, 0.0, 0.0, 1.0).is_err());
        assert!(Rect::try_new(0.0, 0.0, f64::NAN, 1.0).is_err());
        assert!(Rect::try_new(0.0, 0.0, 0.0, 1.0).is_ok());
    }

    #[test]
    fn bounding_of_points() {
        let r = Rect::bounding([Point(1.0, 5.0), Point(-2.0, 3.0), Point(4.0, -1.0)]).unwrap();
        assert_eq!(r, Rect::try_new(-2.0, -1.0, 4.0, 5.0).unwrap());
        assert!(Rect::bounding(std::iter::empty()).is_none());
        assert!(Rect::bounding([Point(0.0, f64::INFINITY)]).is_none());
    }
}
