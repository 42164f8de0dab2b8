use crate::{ Rgb, Surface, Viewport };

use glam::DVec2;

const EPSILON: f64 = 1e-9;

#[track_caller]
pub fn assert_near(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < EPSILON, "{actual} is not close to {expected}");
}

#[track_caller]
pub fn assert_vec_near(actual: DVec2, expected: DVec2) {
    assert!(actual.abs_diff_eq(expected, EPSILON), "{actual} is not close to {expected}");
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Viewport),
    Circle {
        center: DVec2,
        radius: f64,
        color: Rgb,
    },
}

/// Surface keeping a log of every draw call
#[derive(Default, Debug)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn circles(&self) -> Vec<(DVec2, f64)> {
        self.calls.iter()
            .filter_map(|call| match call {
                DrawCall::Circle { center, radius, .. } => Some((*center, *radius)),
                DrawCall::Clear(_) => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, region: Viewport) {
        self.calls.push(DrawCall::Clear(region));
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgb) {
        self.calls.push(DrawCall::Circle { center, radius, color });
    }
}
