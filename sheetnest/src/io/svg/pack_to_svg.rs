use svg::Document;
use svg::node::element::{Group, Text, Title};

use crate::entities::PackResult;
use crate::geometry::primitives::{Rect, SPolygon};
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;

/// Draws every sheet of `result`, the footprints placed on it and the shapes they carry.
pub fn pack_result_to_svg(
    result: &PackResult<SPolygon>,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let theme = &options.theme;
    let sheet = &result.sheet;

    //oversized placements can stick out of their sheet
    let vbox = result
        .sheet_outlines
        .iter()
        .chain(result.placements.iter().map(|p| &p.rect))
        .copied()
        .reduce(Rect::bounding_rectangle)
        .unwrap_or_else(|| sheet.outline(0))
        .scale(1.10);

    let stroke_width =
        (f64::min(sheet.width, sheet.height) * 0.001) as f32 * theme.stroke_width_multiplier;
    let font_size = f64::min(sheet.width, sheet.height) * 0.025;

    let sheets_group = result.sheet_outlines.iter().enumerate().fold(
        Group::new().set("id", "sheets"),
        |group, (index, outline)| {
            let label = Text::new(format!(
                "sheet {} | {:.3} x {:.3} | density: {:.3}% | {}",
                index,
                outline.width(),
                outline.height(),
                result.sheet_density(index) * 100.0,
                title,
            ))
            .set("x", outline.x_min)
            .set("y", outline.y_min - 0.5 * font_size)
            .set("font-size", font_size)
            .set("font-family", "monospace")
            .set("font-weight", "500");

            group.add(
                Group::new()
                    .set("id", format!("sheet_{index}"))
                    .add(svg_util::data_to_path(
                        svg_util::aa_rect_data(*outline),
                        &[
                            ("fill", &*format!("{}", theme.sheet_fill)),
                            ("stroke", "black"),
                            ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
                        ],
                    ))
                    .add(Title::new(format!(
                        "sheet {index}, bbox: [x_min: {:.3}, y_min: {:.3}, x_max: {:.3}, y_max: {:.3}]",
                        outline.x_min, outline.y_min, outline.x_max, outline.y_max
                    )))
                    .add(label),
            )
        },
    );

    let placements_group = match options.placements {
        false => Group::new().set("id", "placements"),
        true => result.placements.iter().enumerate().fold(
            Group::new().set("id", "placements"),
            |group, (i, p)| {
                let oversized = !sheet.fits(p.rect.width(), p.rect.height());
                let path = match oversized && options.highlight_oversized {
                    true => svg_util::data_to_path(
                        svg_util::aa_rect_data(p.rect),
                        &[
                            ("fill", &*format!("{}", theme.placement_fill)),
                            ("fill-opacity", "0.5"),
                            ("stroke", &*format!("{}", theme.oversized_highlight_color)),
                            ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
                            ("stroke-dasharray", &*format!("{}", 5.0 * stroke_width)),
                            ("stroke-linecap", "round"),
                            ("stroke-linejoin", "round"),
                        ],
                    ),
                    false => svg_util::data_to_path(
                        svg_util::aa_rect_data(p.rect),
                        &[
                            ("fill", &*format!("{}", theme.placement_fill)),
                            ("fill-opacity", "0.5"),
                            ("stroke", "black"),
                            ("stroke-width", &*format!("{}", stroke_width)),
                        ],
                    ),
                };
                group.add(
                    Group::new()
                        .set("id", format!("placement_{i}"))
                        .add(path)
                        .add(Title::new(format!(
                            "placement {i}, sheet: {}, {:.3} x {:.3}{}",
                            p.sheet,
                            p.rect.width(),
                            p.rect.height(),
                            if oversized { " (oversized)" } else { "" }
                        ))),
                )
            },
        ),
    };

    let shapes_group = match options.shapes {
        false => Group::new().set("id", "shapes"),
        true => result
            .placed_shapes
            .iter()
            .filter(|s| s.n_vertices() > 0)
            .map(|s| {
                svg_util::data_to_path(
                    svg_util::simple_polygon_data(s),
                    &[
                        ("fill", &*format!("{}", theme.shape_fill)),
                        ("stroke-width", &*format!("{}", stroke_width)),
                        ("fill-rule", "nonzero"),
                        ("stroke", "black"),
                    ],
                )
            })
            .fold(Group::new().set("id", "shapes"), |group, path| group.add(path)),
    };

    Document::new()
        .set(
            "viewBox",
            (vbox.x_min, vbox.y_min, vbox.width(), vbox.height()),
        )
        .add(sheets_group)
        .add(placements_group)
        .add(shapes_group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::SheetSpec;
    use crate::packing::ShelfPacker;
    use crate::util::PackConfig;

    #[test]
    fn every_sheet_and_shape_is_drawn() {
        let sheet = SheetSpec::try_new(10.0, 10.0, 1.0).unwrap();
        let shapes = vec![
            SPolygon::from(Rect::from_origin(0.0, 0.0, 8.0, 8.0).unwrap()),
            SPolygon::from(Rect::from_origin(20.0, 0.0, 6.0, 6.0).unwrap()),
        ];
        let result = ShelfPacker::new(sheet, PackConfig::default())
            .unwrap()
            .pack(&[], &shapes, None)
            .unwrap();
        assert_eq!(result.n_sheets(), 2);

        let svg = pack_result_to_svg(&result, SvgDrawOptions::default(), "test").to_string();
        assert!(svg.contains("sheet_0"));
        assert!(svg.contains("sheet_1"));
        assert!(svg.contains("placement_1"));
        assert!(!svg.contains("oversized"));
    }

    #[test]
    fn oversized_placements_are_highlighted() {
        let sheet = SheetSpec::try_new(10.0, 10.0, 1.0).unwrap();
        let rects = vec![Rect::from_origin(0.0, 0.0, 30.0, 4.0).unwrap()];
        let result = ShelfPacker::new(sheet, PackConfig::default())
            .unwrap()
            .pack::<SPolygon>(&rects, &[], None)
            .unwrap();

        let svg = pack_result_to_svg(&result, SvgDrawOptions::default(), "test").to_string();
        assert!(svg.contains("(oversized)"));
        assert!(svg.contains(&SvgDrawOptions::default().theme.oversized_highlight_color.to_string()));
    }
}
