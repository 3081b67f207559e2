use crate::geometry::primitives::{Point, SPolygon};
use crate::{Error, Result};

/// Shape of the glue flaps attached to every edge of an unrolled outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlapSpec {
    /// Distance between an edge and the outer side of its flap
    pub offset: f64,
    /// Length of the outer side relative to the edge, `1.0` yields rectangular flaps
    pub scale: f64,
}

impl FlapSpec {
    pub fn new(offset: f64, scale: f64) -> Result<Self> {
        if !(offset.is_finite() && offset > 0.0) {
            return Err(Error::InvalidInput(format!(
                "flap offset must be finite and positive, got {offset}"
            )));
        }
        if !(scale.is_finite() && scale >= 0.0) {
            return Err(Error::InvalidInput(format!(
                "flap scale must be finite and non-negative, got {scale}"
            )));
        }
        Ok(FlapSpec { offset, scale })
    }
}

/// Builds one flap per edge of the closed outline `poly`, including the closing edge.
///
/// Each flap is the quad `[from, to, end', start']` where `start'` and `end'` are the edge's endpoints
/// pushed outward by `spec.offset` and then scaled by `spec.scale` about their midpoint.
/// Zero-length edges produce no flap. Flaps are annotations only and never enter the packed footprint.
pub fn flaps(poly: &SPolygon, spec: FlapSpec) -> Vec<SPolygon> {
    let n = poly.n_vertices();
    if n < 2 {
        return vec![];
    }
    //outward is to the right of each edge for counterclockwise outlines
    let outward = match poly.signed_area() >= 0.0 {
        true => -1.0,
        false => 1.0,
    };

    (0..n)
        .filter_map(|i| {
            let Point(x1, y1) = poly.vertices[i];
            let Point(x2, y2) = poly.vertices[(i + 1) % n];
            let (dx, dy) = (x2 - x1, y2 - y1);
            let length = dx.hypot(dy);
            if length == 0.0 || !length.is_finite() {
                return None;
            }
            let nx = outward * -dy / length * spec.offset;
            let ny = outward * dx / length * spec.offset;

            let (mx, my) = ((x1 + x2) / 2.0 + nx, (y1 + y2) / 2.0 + ny);
            let half = (dx / 2.0 * spec.scale, dy / 2.0 * spec.scale);
            let start = Point(mx - half.0, my - half.1);
            let end = Point(mx + half.0, my + half.1);

            Some(SPolygon::new(vec![Point(x1, y1), Point(x2, y2), end, start]))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::geo_traits::Nestable;
    use crate::geometry::primitives::Rect;
    use float_cmp::approx_eq;
    use test_case::test_case;

    fn unit_square() -> SPolygon {
        SPolygon::from(Rect::from_origin(0.0, 0.0, 1.0, 1.0).unwrap())
    }

    #[test_case(1.0, 1.0; "rectangular")]
    #[test_case(1.0, 0.5; "trapezoid")]
    #[test_case(2.0, 0.0; "triangle")]
    fn one_flap_per_edge(offset: f64, scale: f64) {
        let flaps = flaps(&unit_square(), FlapSpec::new(offset, scale).unwrap());
        assert_eq!(flaps.len(), 4);
        let expected_area = offset * (1.0 + scale) / 2.0;
        for flap in &flaps {
            assert!(approx_eq!(f64, flap.area(), expected_area, epsilon = 1e-9));
        }
    }

    #[test]
    fn flaps_point_away_from_the_outline() {
        let ccw = unit_square();
        let mut cw = ccw.clone();
        cw.vertices.reverse();
        for poly in [ccw, cw] {
            let all = flaps(&poly, FlapSpec::new(1.0, 1.0).unwrap());
            let bbox = all.iter().filter_map(|f| f.bbox()).reduce(Rect::bounding_rectangle).unwrap();
            assert!(approx_eq!(f64, bbox.x_min, -1.0, epsilon = 1e-9));
            assert!(approx_eq!(f64, bbox.y_max, 2.0, epsilon = 1e-9));
        }
    }

    #[test]
    fn zero_length_edges_are_skipped() {
        let mut poly = unit_square();
        let first = poly.vertices[0];
        poly.vertices.insert(1, first);
        assert_eq!(flaps(&poly, FlapSpec::new(1.0, 1.0).unwrap()).len(), 4);
        assert!(flaps(&SPolygon::new(vec![Point(1.0, 1.0)]), FlapSpec::new(1.0, 1.0).unwrap()).is_empty());
    }

    #[test_case(0.0, 1.0; "zero offset")]
    #[test_case(f64::NAN, 1.0; "nan offset")]
    #[test_case(1.0, -0.5; "negative scale")]
    fn invalid_flap_spec_is_rejected(offset: f64, scale: f64) {
        assert!(matches!(FlapSpec::new(offset, scale), Err(Error::InvalidInput(_))));
    }
}
