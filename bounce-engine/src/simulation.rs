use crate::{ default, Body, ChangeEffect, Config, ConfigChange, Frame, NotRunningSnafu, PointerState, Result, Surface, Viewport };

use glam::DVec2;
use itertools::Itertools;
use rand::{ Rng, SeedableRng, rngs::SmallRng };
use snafu::ensure;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Created but no frame ran yet
    #[default]
    Idle,
    /// Ticked once per frame by the host, forever
    Running,
}

/// The whole live state of the demo: bodies, the cursor body, the pointer and
/// the config they read.
///
/// Nothing here schedules frames, the host calls [`Simulation::tick`] once per
/// frame and applies input and config changes in between.
pub struct Simulation<R = SmallRng> {
    phase: Phase,
    config: Config,
    viewport: Viewport,
    pointer: PointerState,
    cursor: Body,
    bodies: Vec<Body>,
    rng: R,
    frame_count: u64,
}

impl Simulation<SmallRng> {
    pub fn from_seed(config: Config, viewport: Viewport, seed: u64) -> Result<Self> {
        Self::new(config, viewport, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Simulation<R> {
    pub fn new(config: Config, viewport: Viewport, rng: R) -> Result<Self> {
        config.validate()?;
        let pointer = PointerState::centered(viewport);
        let cursor = Body::cursor(&pointer, &config);

        Ok(Self {
            phase: Phase::Idle,
            config,
            viewport,
            pointer,
            cursor,
            bodies: default(),
            rng,
            frame_count: 0,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn cursor(&self) -> &Body {
        &self.cursor
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Spawns the population and starts accepting ticks. Does nothing when
    /// already running.
    pub fn start(&mut self) {
        if self.phase == Phase::Running {
            return;
        }
        self.reinitialize();
        self.phase = Phase::Running;
        tracing::info!(
            "Simulation started with {} bodies in {}x{}",
            self.bodies.len(), self.viewport.width(), self.viewport.height(),
        );
    }

    /// Throws away every body, cursor included, and spawns new ones from the
    /// current config and viewport
    pub fn reinitialize(&mut self) {
        self.cursor = Body::cursor(&self.pointer, &self.config);
        self.bodies = (0..self.config.body_count)
            .map(|_| Body::spawn(&mut self.rng, self.viewport, &self.config))
            .collect_vec();
        tracing::debug!(
            "Spawned {} bodies in {}x{}",
            self.bodies.len(), self.viewport.width(), self.viewport.height(),
        );
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.reinitialize();
    }

    pub fn pointer_moved(&mut self, pos: DVec2) {
        self.pointer.move_to(pos);
    }

    /// Applies a control panel edit along with its side effect on the live bodies
    pub fn apply(&mut self, change: ConfigChange) -> Result<()> {
        match self.config.apply(change)? {
            ChangeEffect::ReadLive => (),
            ChangeEffect::UpdateCursor => {
                self.cursor.radius = self.config.cursor_radius;
                self.cursor.mass = self.config.cursor_mass;
                self.cursor.color = self.config.cursor_color;
            }
            ChangeEffect::Reinitialize => self.reinitialize(),
        }
        Ok(())
    }

    /// Runs one frame: clear, move the cursor and resolve its collisions, then
    /// move and draw every body.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<()> {
        ensure!(self.phase == Phase::Running, NotRunningSnafu);

        surface.clear(self.viewport);

        let frame = Frame {
            viewport: self.viewport,
            config: &self.config,
            pointer: &self.pointer,
        };
        self.cursor.update(&frame, &mut self.bodies, surface);
        for body in &mut self.bodies {
            body.update(&frame, &mut [], surface);
        }

        self.frame_count += 1;
        Ok(())
    }
}
