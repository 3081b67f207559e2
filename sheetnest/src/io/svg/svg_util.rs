use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use svg::node::element::Path;
use svg::node::element::path::Data;

use crate::Error;
use crate::geometry::primitives::{Point, Rect, SPolygon};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgLayoutTheme,
    ///Draw the footprint rectangle of every placement
    #[serde(default = "enabled")]
    pub placements: bool,
    ///Draw the placed shapes on top of their footprint
    #[serde(default = "enabled")]
    pub shapes: bool,
    ///Draw a dashed outline around footprints that do not fit on a sheet
    #[serde(default = "enabled")]
    pub highlight_oversized: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            placements: true,
            shapes: true,
            highlight_oversized: true,
        }
    }
}

fn enabled() -> bool {
    true
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f32,
    pub sheet_fill: Color,
    pub placement_fill: Color,
    pub shape_fill: Color,
    pub oversized_highlight_color: Color,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        SvgLayoutTheme::EARTH_TONES
    }
}

impl SvgLayoutTheme {
    pub const EARTH_TONES: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.0,
        sheet_fill: Color(0xCC, 0x82, 0x4A),
        placement_fill: Color(0xE8, 0xB0, 0x80),
        shape_fill: Color(0xFF, 0xC8, 0x79),
        oversized_highlight_color: Color(0xFF, 0x00, 0x00), // RED
    };

    pub const GRAY: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.5,
        sheet_fill: Color(0xD3, 0xD3, 0xD3),
        placement_fill: Color(0xA8, 0xA8, 0xA8),
        shape_fill: Color(0x7A, 0x7A, 0x7A),
        oversized_highlight_color: Color(0xD0, 0x00, 0x00),
    };
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|c| u8::from_str_radix(c, 16).ok())
                .ok_or_else(|| Error::InvalidInput(format!("invalid color: {s}")))
        };
        if hex.len() != 6 {
            return Err(Error::InvalidInput(format!("invalid color: {s}")));
        }
        Ok(Color(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_str(&s).map_err(serde::de::Error::custom)
    }
}

pub fn simple_polygon_data(s_poly: &SPolygon) -> Data {
    let mut vertices = s_poly.vertices.iter().map(|&p| to_svg_coords(p));
    let Some(first) = vertices.next() else {
        return Data::new();
    };
    vertices
        .fold(Data::new().move_to(first), |data, v| data.line_to(v))
        .close()
}

pub fn aa_rect_data(rect: Rect) -> Data {
    let [a, b, c, d] = rect.corners().map(to_svg_coords);
    Data::new()
        .move_to(a)
        .line_to(b)
        .line_to(c)
        .line_to(d)
        .close()
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}

fn to_svg_coords(Point(x, y): Point) -> (f32, f32) {
    (x as f32, y as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_hex_round_trip() {
        let color: Color = "#CC824A".parse().unwrap();
        assert_eq!(color, Color(0xCC, 0x82, 0x4A));
        assert_eq!(color.to_string(), "#CC824A");
        assert_eq!("ff0000".parse::<Color>().unwrap(), Color(0xFF, 0, 0));
    }

    #[test]
    fn malformed_colors_are_rejected() {
        assert!("#FFF".parse::<Color>().is_err());
        assert!("#GG0000".parse::<Color>().is_err());
    }
}
