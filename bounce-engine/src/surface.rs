use crate::{ Rgb, Result, InvalidViewportSnafu };

use glam::DVec2;
use snafu::ensure;

/// Size of the drawable area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        ensure!(
            width.is_finite() && height.is_finite() && width > 0. && height > 0.,
            InvalidViewportSnafu { width, height }
        );
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2., self.height / 2.)
    }
}

/// Drawing primitives the simulation renders with.
pub trait Surface {
    /// Erase the given region
    fn clear(&mut self, region: Viewport);

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgb);
}
