use itertools::Itertools;
use log::debug;

use crate::entities::{Instance, Part, RotationMode, SheetSpec};
use crate::geometry::flaps::FlapSpec;
use crate::geometry::primitives::{Point, Rect, SPolygon};
use crate::io::ext_repr::{ExtInstance, ExtRect, ExtSPolygon, ExtShape};
use crate::{Error, Result};

/// Converts an external instance into an internal [`Instance`].
///
/// Fails before anything is built if the sheet width or height is absent.
pub fn import_instance(ext_instance: &ExtInstance) -> Result<Instance> {
    let ext_sheet = &ext_instance.sheet;
    let sheet = SheetSpec::from_inputs(ext_sheet.width, ext_sheet.height, ext_sheet.spacing)?;

    let parts = ext_instance
        .parts
        .iter()
        .map(|ext_part| import_shape(&ext_part.shape).map(Part::new))
        .collect::<Result<Vec<_>>>()?;
    let part_ids = ext_instance.parts.iter().map(|p| p.id).collect_vec();
    if !part_ids.iter().all_unique() {
        return Err(Error::InvalidInput(format!(
            "part ids in instance {} are not unique",
            ext_instance.name
        )));
    }

    let rectangles = ext_instance
        .rectangles
        .iter()
        .map(import_rect)
        .collect::<Result<Vec<_>>>()?;

    let ext_rot = ext_instance.rotation;
    let rotation = RotationMode::from_flags(ext_rot.manual_angle_deg, ext_rot.optimize);

    let flaps = ext_instance
        .flaps
        .map(|f| FlapSpec::new(f.offset, f.scale))
        .transpose()?;

    debug!(
        "[IMPORT] instance {}: {} parts, {} extra rectangles, {:?}, flaps: {:?}",
        ext_instance.name,
        parts.len(),
        rectangles.len(),
        rotation,
        flaps
    );

    Ok(Instance {
        name: ext_instance.name.clone(),
        parts,
        part_ids,
        rectangles,
        sheet,
        rotation,
        flaps,
    })
}

pub fn import_shape(ext_shape: &ExtShape) -> Result<SPolygon> {
    match ext_shape {
        ExtShape::Rectangle(ext_rect) => import_rect(ext_rect).map(SPolygon::from),
        ExtShape::SimplePolygon(esp) => import_simple_polygon(esp),
    }
}

pub fn import_rect(ext_rect: &ExtRect) -> Result<Rect> {
    let ExtRect {
        x_min,
        y_min,
        width,
        height,
    } = *ext_rect;
    Rect::from_origin(x_min, y_min, width, height)
}

/// Vertices are taken as is. Degenerate outlines are left for the rotation stage to handle.
pub fn import_simple_polygon(esp: &ExtSPolygon) -> Result<SPolygon> {
    let vertices = esp.0.iter().map(|&(x, y)| Point(x, y)).collect_vec();
    if let Some(p) = vertices.iter().find(|p| !p.is_finite()) {
        return Err(Error::InvalidInput(format!("non-finite vertex {p:?}")));
    }
    Ok(SPolygon::new(vertices))
}
