use crate::entities::{Part, RotationMode, SheetSpec};
use crate::geometry::flaps::FlapSpec;
use crate::geometry::primitives::{Rect, SPolygon};

/// A complete nesting job: the parts, any extra footprints, the stock sheets and the rotation mode.
#[derive(Clone, Debug)]
pub struct Instance {
    pub name: String,
    pub parts: Vec<Part<SPolygon>>,
    /// External identifier of every part, by part index
    pub part_ids: Vec<u64>,
    /// Footprints to pack in addition to the parts (placeholders without geometry)
    pub rectangles: Vec<Rect>,
    pub sheet: SheetSpec,
    pub rotation: RotationMode,
    /// Flaps to attach to the placed parts on export, they do not count towards the footprints
    pub flaps: Option<FlapSpec>,
}

impl Instance {
    pub fn part_id(&self, part_index: usize) -> u64 {
        self.part_ids[part_index]
    }

    pub fn n_parts(&self) -> usize {
        self.parts.len()
    }
}
