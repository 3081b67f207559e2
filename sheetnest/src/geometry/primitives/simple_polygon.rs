use crate::geometry::Transformation;
use crate::geometry::geo_traits::{Nestable, Transformable};
use crate::geometry::primitives::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Closed outline of a flat part, described by its vertices.
///
/// No validation happens on construction: an outline without vertices, or with non-finite ones,
/// is representable and reported as degenerate by [`Nestable::bbox`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SPolygon {
    pub vertices: Vec<Point>,
}

impl SPolygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        SPolygon { vertices }
    }

    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Positive for counterclockwise outlines, negative for clockwise ones.
    //https://en.wikipedia.org/wiki/Shoelace_formula
    pub fn signed_area(&self) -> f64 {
        let n = self.n_vertices();
        let sigma: f64 = (0..n)
            .map(|i| {
                let Point(x_i, y_i) = self.vertices[i];
                let Point(x_j, y_j) = self.vertices[(i + 1) % n];
                (y_i + y_j) * (x_i - x_j)
            })
            .sum();
        0.5 * sigma
    }
}

impl Transformable for SPolygon {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        self.vertices.iter_mut().for_each(|v| {
            v.transform(t);
        });
        self
    }
}

impl Nestable for SPolygon {
    fn bbox(&self) -> Option<Rect> {
        Rect::bounding(self.vertices.iter().copied())
    }
}

impl From<Rect> for SPolygon {
    fn from(r: Rect) -> Self {
        SPolygon::new(r.corners().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn empty_outline_is_degenerate() {
        assert!(SPolygon::new(vec![]).bbox().is_none());
        assert!(SPolygon::new(vec![Point(0.0, 0.0), Point(f64::NAN, 1.0)]).bbox().is_none());
    }

    #[test]
    fn quarter_turn_swaps_footprint() {
        let rect = Rect::from_origin(0.0, 0.0, 20.0, 5.0).unwrap();
        let poly = SPolygon::from(rect);
        let pivot = poly.pivot().unwrap();
        let rotated = poly.rotated_about(std::f64::consts::FRAC_PI_2, pivot);
        let bbox = rotated.bbox().unwrap();
        assert!(approx_eq!(f64, bbox.width(), 5.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, bbox.height(), 20.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, bbox.centroid().0, 10.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, bbox.centroid().1, 2.5, epsilon = 1e-9));
        assert!(approx_eq!(f64, rotated.area(), 100.0, epsilon = 1e-9));
    }

    #[test]
    fn orientation_sets_area_sign() {
        let mut poly = SPolygon::from(Rect::from_origin(0.0, 0.0, 2.0, 3.0).unwrap());
        assert!(approx_eq!(f64, poly.signed_area(), 6.0, epsilon = 1e-9));
        poly.vertices.reverse();
        assert!(approx_eq!(f64, poly.signed_area(), -6.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, poly.area(), 6.0, epsilon = 1e-9));
    }

    #[test]
    fn translation_moves_min_corner() {
        let poly = SPolygon::from(Rect::from_origin(3.0, 4.0, 1.0, 1.0).unwrap());
        let moved = poly.translated((-3.0, -4.0));
        assert_eq!(moved.min_corner(), Some(Point(0.0, 0.0)));
    }
}
