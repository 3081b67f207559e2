use serde::{Deserialize, Serialize};

/// External representation of an [`Instance`](crate::entities::Instance).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    /// Parts to be oriented and packed
    pub parts: Vec<ExtPart>,
    /// Footprints without geometry that are packed along with the parts
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub rectangles: Vec<ExtRect>,
    /// The stock sheets everything is packed onto
    pub sheet: ExtSheet,
    #[serde(default)]
    pub rotation: ExtRotation,
    /// Glue flaps to generate along the edges of every placed part
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub flaps: Option<ExtFlaps>,
}

/// External representation of a [`Part`](crate::entities::Part).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPart {
    /// Unique identifier of the part
    pub id: u64,
    /// Shape of the part
    pub shape: ExtShape,
}

/// Various ways to represent a shape
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(tag = "type", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum ExtShape {
    /// Axis-aligned rectangle. With its left bottom corner at (x_min, y_min), a width and height
    Rectangle(ExtRect),
    /// Closed outline, vertices in order
    SimplePolygon(ExtSPolygon),
}

/// Axis-aligned rectangle defined by its minimum corner, width and height
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtRect {
    pub x_min: f64,
    pub y_min: f64,
    pub width: f64,
    pub height: f64,
}

/// External representation of a [`SPolygon`](crate::geometry::primitives::SPolygon).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSPolygon(pub Vec<(f64, f64)>);

/// Sheet dimensions. Width and height are required, the spacing falls back to a default.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default)]
pub struct ExtSheet {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub spacing: Option<f64>,
}

/// How parts are oriented before packing
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct ExtRotation {
    /// Angle in degrees applied to every part when `optimize` is off
    #[serde(default)]
    pub manual_angle_deg: i32,
    /// Search the footprint-minimizing angle for every part
    #[serde(default = "default_optimize")]
    pub optimize: bool,
}

impl Default for ExtRotation {
    fn default() -> Self {
        Self {
            manual_angle_deg: 0,
            optimize: default_optimize(),
        }
    }
}

fn default_optimize() -> bool {
    true
}

/// Flap generation parameters, see [`FlapSpec`](crate::geometry::flaps::FlapSpec)
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct ExtFlaps {
    pub offset: f64,
    #[serde(default = "default_flap_scale")]
    pub scale: f64,
}

fn default_flap_scale() -> f64 {
    1.0
}

/// External representation of the outcome of a nesting run.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    /// Orientation chosen for every part that was not skipped
    pub footprints: Vec<ExtFootprint>,
    pub placements: Vec<ExtPlacement>,
    pub sheets: Vec<ExtSheetLayout>,
    /// The rotated parts, translated to their final position
    pub placed_shapes: Vec<ExtPlacedShape>,
    /// Ids of the parts left out because of degenerate geometry
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub skipped_part_ids: Vec<u64>,
    /// Footprints too large for a sheet
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub warnings: Vec<ExtOversized>,
    /// Placed area over the combined area of all sheets
    pub density: f64,
    pub run_time_ms: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtFootprint {
    pub part_id: u64,
    /// The selected rotation angle in degrees
    pub angle_deg: i32,
    pub bbox: ExtRect,
    pub area: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPlacement {
    pub sheet: usize,
    pub rect: ExtRect,
    /// The part this footprint belongs to, absent for placeholder rectangles
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub part_id: Option<u64>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSheetLayout {
    pub index: usize,
    pub outline: ExtRect,
    pub density: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPlacedShape {
    pub part_id: u64,
    pub shape: ExtSPolygon,
    /// One flap per edge of `shape`, drawn outside of its footprint
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub flaps: Vec<ExtSPolygon>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtOversized {
    pub sheet: usize,
    pub width: f64,
    pub height: f64,
}
