use macroquad::prelude::*;
use i_triangle::float::triangulatable::Triangulatable;

pub fn circle_polygon(
    center: Vec2,
    radius: f32,
    num_segments: u32,
) -> Vec<Vec2> {
    let angle_step = 2.0 * std::f32::consts::PI / num_segments as f32;
    (0..num_segments)
        .map(|i| {
            let angle = angle_step * i as f32;
            Vec2::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
        })
        .collect()
}

/// A unit circle triangulated once, moved and scaled on each draw
pub struct CircleMesh {
    points: Vec<Vec2>,
    indices: Vec<u16>,
}

impl CircleMesh {
    pub fn new(segments: u32) -> Self {
        let polygon = circle_polygon(Vec2::ZERO, 1., segments);
        let triangulation = polygon.as_slice().triangulate().to_triangulation();
        Self {
            points: triangulation.points,
            indices: triangulation.indices,
        }
    }

    pub fn draw(&self, center: Vec2, radius: f32, color: Color) {
        let mesh = Mesh {
            vertices: self.points.iter().map(|point| {
                Vertex {
                    position: Vec3::new(center.x + point.x * radius, center.y + point.y * radius, 0.0),
                    uv: Vec2::default(),
                    color: color.into(),
                    normal: Vec4::ZERO
                }
            }).collect(),
            indices: self.indices.clone(),
            texture: None,
        };

        draw_mesh(&mesh);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_polygon_points_on_circle() {
        let center = Vec2::new(3., -2.);
        let points = circle_polygon(center, 5., 16);
        assert_eq!(points.len(), 16);
        for point in &points {
            assert!((point.distance(center) - 5.).abs() < 1e-4);
        }
        assert!((points[0] - Vec2::new(8., -2.)).length() < 1e-4);
    }
}
