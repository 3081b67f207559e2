use crate::geometry::primitives::Rect;
use crate::{Error, Result};

/// Geometric identity of a [`Rect`], derived from its quantized bounds.
///
/// Every bound is rounded to the nearest multiple of the key resolution.
/// Two rectangles are considered the same iff all four rounded bounds match,
/// so values closer than the resolution can still end up in neighbouring cells.
///
/// Quantized bounds must fit in an `i64`: every coordinate must satisfy `|v| / resolution < 2^63`
/// (about 9.2e12 at a resolution of 1e-6). Rectangles outside that range are rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RectKey([i64; 4]);

impl RectKey {
    pub fn new(rect: &Rect, resolution: f64) -> Result<Self> {
        debug_assert!(resolution > 0.0);
        let q = |v: f64| {
            let cell = (v / resolution).round();
            //`i64::MAX as f64` rounds up to 2^63, which is already out of range
            match cell >= i64::MIN as f64 && cell < i64::MAX as f64 {
                true => Ok(cell as i64),
                false => Err(Error::InvalidInput(format!(
                    "coordinate {v} is out of range for a geometric key with resolution {resolution}"
                ))),
            }
        };
        Ok(RectKey([
            q(rect.x_min)?,
            q(rect.y_min)?,
            q(rect.x_max)?,
            q(rect.y_max)?,
        ]))
    }
}

/// A rectangle together with its geometric key.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyedRect {
    pub rect: Rect,
    pub key: RectKey,
}

impl KeyedRect {
    pub fn new(rect: Rect, resolution: f64) -> Result<Self> {
        Ok(Self {
            key: RectKey::new(&rect, resolution)?,
            rect,
        })
    }

    pub fn width(&self) -> f64 {
        self.rect.width()
    }

    pub fn height(&self) -> f64 {
        self.rect.height()
    }

    pub fn area(&self) -> f64 {
        self.rect.area()
    }
}
