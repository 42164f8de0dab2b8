use crate::{ distance, random_int_from_range, random_spawn_velocity, resolve_collision, Config, PointerState, Rgb, Surface, Viewport };

use glam::DVec2;
use rand::Rng;

/// Horizontal velocity kept after touching the floor or ceiling
const FLOOR_FRICTION: f64 = 0.99;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// Falls under gravity and bounces off the viewport edges
    #[default]
    Free,
    /// Glued to the pointer, pushes the other bodies around
    CursorBound,
}

/// Everything a body reads during a frame.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub viewport: Viewport,
    pub config: &'a Config,
    pub pointer: &'a PointerState,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
    pub mass: f64,
    pub color: Rgb,
    pub kind: BodyKind,
}

impl Default for Body {
    fn default() -> Self {
        Self {
            pos: DVec2::ZERO,
            vel: DVec2::ZERO,
            radius: 1.,
            mass: 1.,
            color: Rgb::BLACK,
            kind: BodyKind::Free,
        }
    }
}

impl Body {
    /// A resting cursor body sitting on the pointer
    pub fn cursor(pointer: &PointerState, config: &Config) -> Self {
        Self {
            pos: pointer.pos,
            vel: DVec2::ZERO,
            radius: config.cursor_radius,
            mass: config.cursor_mass,
            color: config.cursor_color,
            kind: BodyKind::CursorBound,
        }
    }

    /// A free body with random mass, velocity and color, fully inside the viewport.
    /// Its radius is proportional to its mass.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport, config: &Config) -> Self {
        // In (0, 1] so that no body ends up without mass or radius
        let mass = (1. - rng.random::<f64>()) * config.max_body_mass;
        let radius = config.max_body_radius * mass / config.max_body_mass;
        let x = random_int_from_range(rng, radius, viewport.width() - radius);
        let y = random_int_from_range(rng, radius, viewport.height() - radius);

        Self {
            pos: DVec2::new(x, y),
            vel: random_spawn_velocity(rng),
            radius,
            mass,
            color: Rgb::random(rng),
            kind: BodyKind::Free,
        }
    }

    pub fn is_cursor(&self) -> bool {
        self.kind == BodyKind::CursorBound
    }

    /// Circle overlap test, touching circles do not overlap
    pub fn overlaps(&self, other: &Body) -> bool {
        distance(self.pos, other.pos) < self.radius + other.radius
    }

    /// Advances the body by one frame.
    ///
    /// Edges are detected one frame ahead using the current velocity: a body about
    /// to leave the viewport has the matching velocity component reversed and
    /// damped instead. Gravity only accumulates on frames without a vertical bounce.
    pub fn integrate_and_reflect(&mut self, viewport: Viewport, config: &Config) {
        let (r, w, h) = (self.radius, viewport.width(), viewport.height());

        if self.pos.x <= r - self.vel.x || self.pos.x >= w - r - self.vel.x {
            self.vel.x = -self.vel.x * config.bounce_damping;
        }

        if self.pos.y <= r - self.vel.y || self.pos.y >= h - r - self.vel.y {
            self.vel.x *= FLOOR_FRICTION;
            self.vel.y = -self.vel.y * config.bounce_damping;
        } else {
            self.vel.y += config.gravity * self.mass;
        }

        self.pos += self.vel;
    }

    /// Snaps onto the pointer, taking its last displacement as velocity
    pub fn follow_pointer(&mut self, pointer: &PointerState) {
        self.vel = pointer.displacement();
        self.pos = pointer.pos;
    }

    /// Runs the collision response against every body overlapping this one,
    /// returns how many were hit
    pub fn collide_with(&mut self, others: &mut [Body], restitution: f64) -> usize {
        let mut hits = 0;
        for other in others.iter_mut() {
            if !self.overlaps(other) {
                continue;
            }
            match resolve_collision(self, other, restitution) {
                Some((vel, other_vel)) => {
                    self.vel = vel;
                    other.vel = other_vel;
                    hits += 1;
                }
                None => tracing::trace!("Skipping collision of coincident bodies at {}", self.pos),
            }
        }
        hits
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_circle(self.pos, self.radius, self.color);
    }

    /// One frame of this body, dispatched on its kind.
    /// `others` is only looked at by cursor bodies, which collide with it.
    pub fn update<S: Surface + ?Sized>(&mut self, frame: &Frame, others: &mut [Body], surface: &mut S) {
        match self.kind {
            BodyKind::Free => {
                self.integrate_and_reflect(frame.viewport, frame.config);
                self.render(surface);
            }
            BodyKind::CursorBound => {
                self.follow_pointer(frame.pointer);
                let hits = self.collide_with(others, frame.config.collision_restitution);
                if hits > 0 {
                    tracing::trace!("Cursor hit {hits} bodies");
                }
                if frame.config.cursor_visible {
                    self.render(surface);
                }
            }
        }
    }
}
