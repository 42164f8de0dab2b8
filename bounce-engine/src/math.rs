use glam::DVec2;
use rand::Rng;

/// Half-width of the square spawn velocities are drawn from
const SPAWN_SPEED: f64 = 2.5;

pub fn distance(a: DVec2, b: DVec2) -> f64 {
    a.distance(b)
}

/// Whole number picked uniformly in `[ceil(min), floor(max)]`.
///
/// Bodies spawn on whole pixels. When no whole number fits in the range
/// (a body wider than the viewport) the middle of the range is returned.
pub fn random_int_from_range<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    let lo = min.ceil();
    let hi = max.floor();
    if lo > hi {
        return (min + max) / 2.;
    }
    rng.random_range(lo as i64..=hi as i64) as f64
}

/// Random velocity with each component in `[-2.5, 2.5)`
pub fn random_spawn_velocity<R: Rng + ?Sized>(rng: &mut R) -> DVec2 {
    DVec2::new(
        (rng.random::<f64>() - 0.5) * 2. * SPAWN_SPEED,
        (rng.random::<f64>() - 0.5) * 2. * SPAWN_SPEED,
    )
}
