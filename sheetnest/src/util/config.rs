use serde::{Deserialize, Serialize};

use crate::{Error, Result};

///Configuration of both stages of the nesting pipeline
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct NestConfig {
    #[serde(default)]
    pub rotation: RotationConfig,
    #[serde(default)]
    pub packing: PackConfig,
}

impl NestConfig {
    pub fn validate(&self) -> Result<()> {
        self.rotation.validate()?;
        self.packing.validate()
    }
}

///Configuration of the rotation search
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct RotationConfig {
    ///Angle between two consecutive samples in degrees. Samples are `0, step, 2*step, ...` below 360.
    pub angle_step_deg: u32,
    ///What to do with parts whose geometry cannot produce a bounding rectangle
    pub degenerate_policy: DegeneratePolicy,
}

impl RotationConfig {
    pub fn validate(&self) -> Result<()> {
        match self.angle_step_deg {
            1..=360 => Ok(()),
            step => Err(Error::Config(format!(
                "angle_step_deg must be in 1..=360, got {step}"
            ))),
        }
    }

    /// All sampled angles in degrees, in increasing order.
    pub fn sampled_angles(&self) -> impl Iterator<Item = u32> {
        (0..360).step_by(self.angle_step_deg.max(1) as usize)
    }
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            angle_step_deg: 5,
            degenerate_policy: DegeneratePolicy::default(),
        }
    }
}

/// Policy applied when a part's geometry is degenerate.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DegeneratePolicy {
    /// Fail the whole batch on the first degenerate part (lowest index).
    Abort,
    /// Leave the part out of the output and report its index.
    #[default]
    Skip,
}

///Configuration of the shelf packer
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct PackConfig {
    ///Grid size used to quantize coordinates into geometric keys.
    ///Rectangles whose bounds round to the same grid cells are considered identical.
    pub key_resolution: f64,
}

impl PackConfig {
    pub fn validate(&self) -> Result<()> {
        match self.key_resolution.is_finite() && self.key_resolution > 0.0 {
            true => Ok(()),
            false => Err(Error::Config(format!(
                "key_resolution must be finite and positive, got {}",
                self.key_resolution
            ))),
        }
    }
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            key_resolution: 1e-6,
        }
    }
}
