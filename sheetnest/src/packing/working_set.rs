use std::cmp::Reverse;
use std::collections::HashMap;

use itertools::Itertools;
use log::{debug, warn};
use ordered_float::OrderedFloat;

use crate::Result;
use crate::entities::{KeyedRect, RectKey};
use crate::geometry::geo_traits::Nestable;
use crate::geometry::primitives::Rect;

/// A footprint to be packed, with the shape (if any) that follows it onto the sheet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorkItem {
    pub keyed: KeyedRect,
    /// Index in the packer's `shapes` input of the associated shape
    pub shape_id: Option<usize>,
}

/// The deduplicated and sorted set of footprints handed to the shelf packer.
#[derive(Clone, Debug)]
pub struct WorkingSet {
    /// Sorted by area (descending), ties in merge order
    pub items: Vec<WorkItem>,
}

impl WorkingSet {
    /// Merges the shape-derived footprints and the standalone rectangles into a single working set.
    ///
    /// * every shape is keyed by its bounding rectangle; when two shapes share a key the later one
    ///   replaces the earlier one's association, but the key keeps its first position in the merge order
    /// * rectangles matching a shape-derived key are absorbed by it, all others are appended in input order
    /// * the merged set is stably sorted by area, largest first
    ///
    /// Fails if a footprint lies too far out to be keyed at `resolution`, see [`RectKey`].
    pub fn build<S: Nestable>(rectangles: &[Rect], shapes: &[S], resolution: f64) -> Result<Self> {
        //key to shape index, the last shape producing a key wins
        let mut association: HashMap<RectKey, usize> = HashMap::with_capacity(shapes.len());
        let mut merged: Vec<KeyedRect> = Vec::with_capacity(shapes.len() + rectangles.len());

        for (shape_id, shape) in shapes.iter().enumerate() {
            let Some(bbox) = shape.bbox() else {
                warn!("[PACK] shape {shape_id} has no bounding rectangle, it is not packed");
                continue;
            };
            let keyed = KeyedRect::new(bbox, resolution)?;
            match association.insert(keyed.key, shape_id) {
                None => merged.push(keyed),
                Some(replaced) => {
                    debug!("[PACK] shape {shape_id} replaces shape {replaced} (identical footprint)")
                }
            }
        }

        let n_from_shapes = merged.len();
        for rect in rectangles {
            let keyed = KeyedRect::new(*rect, resolution)?;
            if !association.contains_key(&keyed.key) {
                merged.push(keyed);
            }
        }

        debug!(
            "[PACK] working set: {} shape footprints, {} standalone rectangles ({} absorbed)",
            n_from_shapes,
            merged.len() - n_from_shapes,
            rectangles.len() - (merged.len() - n_from_shapes)
        );

        // `sorted_by_key` is stable, equal areas keep their merge order
        let items = merged
            .into_iter()
            .map(|keyed| WorkItem {
                shape_id: association.get(&keyed.key).copied(),
                keyed,
            })
            .sorted_by_key(|item| Reverse(OrderedFloat(item.keyed.area())))
            .collect_vec();

        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::primitives::SPolygon;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect::from_origin(x, y, w, h).unwrap()
    }

    #[test]
    fn later_shape_wins_association() {
        let shapes = vec![
            SPolygon::from(rect(0.0, 0.0, 4.0, 4.0)),
            SPolygon::from(rect(10.0, 0.0, 2.0, 2.0)),
            SPolygon::from(rect(0.0, 0.0, 4.0, 4.0)),
        ];
        let ws = WorkingSet::build(&[], &shapes, 1e-6).unwrap();
        assert_eq!(ws.len(), 2);
        assert_eq!(ws.items[0].shape_id, Some(2));
        assert_eq!(ws.items[1].shape_id, Some(1));
    }

    #[test]
    fn matching_rectangles_are_absorbed() {
        let shapes = vec![SPolygon::from(rect(0.0, 0.0, 4.0, 4.0))];
        let rects = vec![rect(0.0, 0.0, 4.0, 4.0), rect(0.0, 0.0, 1.0, 1.0), rect(0.0, 0.0, 1.0, 1.0)];
        let ws = WorkingSet::build(&rects, &shapes, 1e-6).unwrap();
        // the two identical placeholders are both kept, only the shape-matching one is absorbed
        assert_eq!(ws.len(), 3);
        assert_eq!(ws.items.iter().filter(|i| i.shape_id.is_some()).count(), 1);
    }

    #[test]
    fn equal_areas_keep_merge_order() {
        let rects = vec![rect(0.0, 0.0, 2.0, 8.0), rect(5.0, 0.0, 8.0, 2.0), rect(0.0, 9.0, 4.0, 4.0)];
        let ws = WorkingSet::build::<SPolygon>(&rects, &[], 1e-6).unwrap();
        let order = ws.items.iter().map(|i| i.keyed.rect).collect_vec();
        assert_eq!(order, rects);
    }

    #[test]
    fn degenerate_shapes_are_left_out() {
        let shapes = vec![SPolygon::new(vec![]), SPolygon::from(rect(0.0, 0.0, 1.0, 1.0))];
        let ws = WorkingSet::build(&[], &shapes, 1e-6).unwrap();
        assert_eq!(ws.len(), 1);
        assert_eq!(ws.items[0].shape_id, Some(1));
    }
}
