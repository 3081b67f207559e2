use itertools::Itertools;

use crate::entities::Instance;
use crate::geometry::flaps::flaps;
use crate::geometry::primitives::{Rect, SPolygon};
use crate::io::ext_repr::{
    ExtFootprint, ExtOversized, ExtPlacedShape, ExtPlacement, ExtRect, ExtSPolygon, ExtSheetLayout,
    ExtSolution,
};
use crate::pipeline::NestOutput;

/// Composes an [`ExtSolution`] from the output of a nesting run on `instance`.
pub fn export_solution(
    instance: &Instance,
    output: &NestOutput<SPolygon>,
    run_time_ms: u64,
) -> ExtSolution {
    let packing = &output.packing;

    let footprints = output
        .footprints
        .iter()
        .map(|fp| ExtFootprint {
            part_id: instance.part_id(fp.part_index),
            angle_deg: fp.angle_deg,
            bbox: export_rect(&fp.bbox),
            area: fp.area,
        })
        .collect_vec();

    let part_id_of_shape = |shape_id: usize| instance.part_id(output.part_index_of_shape(shape_id));

    let placements = packing
        .placements
        .iter()
        .map(|p| ExtPlacement {
            sheet: p.sheet,
            rect: export_rect(&p.rect),
            part_id: p.shape_id.map(part_id_of_shape),
        })
        .collect_vec();

    let sheets = packing
        .sheet_outlines
        .iter()
        .enumerate()
        .map(|(index, outline)| ExtSheetLayout {
            index,
            outline: export_rect(outline),
            density: packing.sheet_density(index),
        })
        .collect_vec();

    //placed shapes are stored in the order of the placements that carry one
    let placed_shapes = packing
        .placements
        .iter()
        .filter_map(|p| p.shape_id)
        .zip(packing.placed_shapes.iter())
        .map(|(shape_id, shape)| ExtPlacedShape {
            part_id: part_id_of_shape(shape_id),
            shape: export_simple_polygon(shape),
            flaps: instance
                .flaps
                .map(|spec| flaps(shape, spec).iter().map(export_simple_polygon).collect())
                .unwrap_or_default(),
        })
        .collect_vec();

    ExtSolution {
        footprints,
        placements,
        sheets,
        placed_shapes,
        skipped_part_ids: output.skipped.iter().map(|&i| instance.part_id(i)).collect(),
        warnings: packing
            .warnings
            .iter()
            .map(|w| ExtOversized {
                sheet: w.sheet,
                width: w.width,
                height: w.height,
            })
            .collect(),
        density: packing.density(),
        run_time_ms,
    }
}

pub fn export_rect(rect: &Rect) -> ExtRect {
    ExtRect {
        x_min: rect.x_min,
        y_min: rect.y_min,
        width: rect.width(),
        height: rect.height(),
    }
}

pub fn export_simple_polygon(s_poly: &SPolygon) -> ExtSPolygon {
    ExtSPolygon(s_poly.vertices.iter().map(|&p| p.into()).collect())
}
