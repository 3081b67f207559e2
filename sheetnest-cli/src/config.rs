use serde::{Deserialize, Serialize};
use sheetnest::io::svg::SvgDrawOptions;
use sheetnest::util::NestConfig;

/// Configuration of a nesting run from the command line
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
pub struct RunConfig {
    /// Configuration of the rotation and packing stages
    #[serde(default)]
    pub nest: NestConfig,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}
