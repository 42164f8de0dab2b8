use crate::Body;

use glam::DVec2;

/// Velocities of two overlapping disks after they bounce off each other.
///
/// Velocities are split along the line of centers and across it. The tangential
/// parts are kept, the normal parts go through the 1-D collision formula where
/// `restitution` only scales what each body receives from the other one.
///
/// Returns `None` when both centers coincide as there is no collision normal.
pub fn resolve_collision(a: &Body, b: &Body, restitution: f64) -> Option<(DVec2, DVec2)> {
    let normal = (b.pos - a.pos).try_normalize()?;
    let tangent = normal.perp();

    let (m1, m2) = (a.mass, b.mass);
    let mass_sum = m1 + m2;

    let u1 = a.vel.dot(normal);
    let u2 = b.vel.dot(normal);

    let v1 = ((m1 - m2) / mass_sum) * u1 + ((2. * m2) / mass_sum) * u2 * restitution;
    let v2 = ((2. * m1) / mass_sum) * u1 * restitution + ((m2 - m1) / mass_sum) * u2;

    Some((
        normal * v1 + tangent * a.vel.dot(tangent),
        normal * v2 + tangent * b.vel.dot(tangent),
    ))
}
