use crate::geometry::Transformation;
use crate::geometry::primitives::{Point, Rect};

/// Trait for types that can be modified by a [`Transformation`].
pub trait Transformable: Clone {
    /// Applies a transformation to `self`.
    fn transform(&mut self, t: &Transformation) -> &mut Self;

    /// Applies a transformation to a clone.
    fn transform_clone(&self, t: &Transformation) -> Self {
        let mut clone = self.clone();
        clone.transform(t);
        clone
    }
}

/// The capabilities the nesting pipeline needs from a part's geometry.
///
/// Any host geometry can take part in the pipeline by implementing this trait:
/// the rotation search only ever asks for bounding rectangles of rotated copies,
/// and the packer only ever translates copies.
pub trait Nestable: Transformable {
    /// Axis-aligned bounding rectangle of the shape.
    /// Returns `None` if the geometry is degenerate (empty or non-finite).
    fn bbox(&self) -> Option<Rect>;

    /// Minimum corner of the bounding rectangle.
    fn min_corner(&self) -> Option<Point> {
        self.bbox().map(|bbox| Point(bbox.x_min, bbox.y_min))
    }

    /// Center of the bounding rectangle, used as the pivot for rotations.
    fn pivot(&self) -> Option<Point> {
        self.bbox().map(|bbox| bbox.centroid())
    }

    /// Returns a copy rotated by `angle` (radians, counterclockwise) around `pivot`.
    fn rotated_about(&self, angle: f64, pivot: Point) -> Self {
        self.transform_clone(&Transformation::from_rotation_about(angle, pivot))
    }

    /// Returns a copy translated by `(dx, dy)`.
    fn translated(&self, (dx, dy): (f64, f64)) -> Self {
        self.transform_clone(&Transformation::from_translation((dx, dy)))
    }
}
