use crate::draw_polygon::CircleMesh;

use bounce_engine as be;
use macroquad::prelude::*;

const CIRCLE_SEGMENTS: u32 = 32;
const BACKGROUND: Color = WHITE;

/// Size of the window's drawable area
pub fn current_viewport() -> be::Result<be::Viewport> {
    be::Viewport::new(screen_width() as f64, screen_height() as f64)
}

pub fn to_color(rgb: be::Rgb) -> Color {
    Color::from_rgba(rgb.r, rgb.g, rgb.b, 255)
}

/// Render surface backed by the macroquad window
pub struct Canvas {
    circle: CircleMesh,
}

impl Canvas {
    /// Fails when the window has nothing to draw on
    pub fn acquire() -> be::Result<Self> {
        if let Err(err) = current_viewport() {
            tracing::error!("No drawable area: {err}");
            return Err(be::Error::SurfaceNotFound);
        }
        Ok(Self {
            circle: CircleMesh::new(CIRCLE_SEGMENTS),
        })
    }
}

impl be::Surface for Canvas {
    // The region always spans the whole window
    fn clear(&mut self, _region: be::Viewport) {
        clear_background(BACKGROUND);
    }

    fn fill_circle(&mut self, center: be::DVec2, radius: f64, color: be::Rgb) {
        self.circle.draw(
            Vec2::new(center.x as f32, center.y as f32),
            radius as f32,
            to_color(color),
        );
    }
}
