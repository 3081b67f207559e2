use crate::geometry::geo_traits::Nestable;
use crate::geometry::primitives::Point;

/// A flat part to be nested, together with the pivot its rotations are performed around.
#[derive(Clone, Debug)]
pub struct Part<S> {
    pub shape: S,
    /// Center of the shape's bounding rectangle, `None` if the shape is degenerate
    pub pivot: Option<Point>,
}

impl<S: Nestable> Part<S> {
    pub fn new(shape: S) -> Self {
        let pivot = shape.pivot();
        Self { shape, pivot }
    }
}

/// How the orientation of every part is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationMode {
    /// Every part is rotated by the same fixed angle (degrees)
    Manual { angle_deg: i32 },
    /// Every part is rotated to the sampled angle with the smallest bounding area
    Optimize,
}

impl RotationMode {
    pub fn from_flags(manual_angle_deg: i32, optimize: bool) -> Self {
        match optimize {
            true => RotationMode::Optimize,
            false => RotationMode::Manual {
                angle_deg: manual_angle_deg,
            },
        }
    }
}
