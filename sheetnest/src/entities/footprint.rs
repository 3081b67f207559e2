use crate::geometry::primitives::Rect;

/// A part in its chosen orientation.
#[derive(Clone, Debug)]
pub struct OrientedFootprint<S> {
    /// Index of the part in the optimizer's input
    pub part_index: usize,
    /// Applied rotation in degrees (counterclockwise, around the part's pivot)
    pub angle_deg: i32,
    /// The rotated shape
    pub shape: S,
    /// Axis-aligned bounding rectangle of the rotated shape
    pub bbox: Rect,
    pub area: f64,
}
