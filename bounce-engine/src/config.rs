//! All the variables that can be tuned while the simulation runs

use std::ops::RangeInclusive;

use crate::{ Rgb, Result, InvalidConfigSnafu };

use snafu::ensure;

pub const GRAVITY_RANGE: RangeInclusive<f64> = 0. ..=5.;
pub const BOUNCE_DAMPING_RANGE: RangeInclusive<f64> = 0. ..=2.;
pub const MAX_BODY_RADIUS_RANGE: RangeInclusive<f64> = 5. ..=50.;
pub const MAX_BODY_MASS_RANGE: RangeInclusive<f64> = 0.1..=10.;
pub const CURSOR_RADIUS_RANGE: RangeInclusive<f64> = 1. ..=100.;
pub const CURSOR_MASS_RANGE: RangeInclusive<f64> = 0.1..=100.;
pub const RESTITUTION_RANGE: RangeInclusive<f64> = 0. ..=1.;

/// All the config for the simulation
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Added to a body's vertical velocity every frame, scaled by its mass
    pub gravity: f64,
    /// Factor applied to the velocity of a body bouncing off a viewport edge
    pub bounce_damping: f64,
    /// Radius of a body of mass `max_body_mass`, radii scale with mass
    pub max_body_radius: f64,
    pub max_body_mass: f64,
    pub cursor_radius: f64,
    pub cursor_mass: f64,
    pub cursor_color: Rgb,
    pub cursor_visible: bool,
    /// Scales the velocity a body receives from the other side of a collision
    pub collision_restitution: f64,
    /// Number of bodies spawned on (re)initialization
    pub body_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gravity: 1.,
            bounce_damping: 0.59,
            max_body_radius: 30.,
            max_body_mass: 1.,
            cursor_radius: 10.,
            cursor_mass: 10.,
            cursor_color: Rgb::BLACK,
            cursor_visible: false,
            collision_restitution: 1.,
            body_count: 100,
        }
    }
}

/// A single edit coming from the control panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigChange {
    Gravity(f64),
    BounceDamping(f64),
    MaxBodyRadius(f64),
    MaxBodyMass(f64),
    CursorRadius(f64),
    CursorMass(f64),
    /// Also makes the cursor visible
    CursorColor(Rgb),
    CursorVisible(bool),
    CollisionRestitution(f64),
    /// Restore every field to its default
    Reset,
}

/// What the owner of the live bodies must do once a change is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeEffect {
    /// The value is read every frame, nothing else to do
    ReadLive,
    /// Cursor radius, mass or color must be copied onto the live cursor
    UpdateCursor,
    /// The whole population must be recreated
    Reinitialize,
}

fn check_range(field: &'static str, value: f64, range: &RangeInclusive<f64>) -> Result<()> {
    ensure!(
        value.is_finite() && range.contains(&value),
        InvalidConfigSnafu { field, value, min: *range.start(), max: *range.end() }
    );
    Ok(())
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        check_range("gravity", self.gravity, &GRAVITY_RANGE)?;
        check_range("bounce_damping", self.bounce_damping, &BOUNCE_DAMPING_RANGE)?;
        check_range("max_body_radius", self.max_body_radius, &MAX_BODY_RADIUS_RANGE)?;
        check_range("max_body_mass", self.max_body_mass, &MAX_BODY_MASS_RANGE)?;
        check_range("cursor_radius", self.cursor_radius, &CURSOR_RADIUS_RANGE)?;
        check_range("cursor_mass", self.cursor_mass, &CURSOR_MASS_RANGE)?;
        check_range("collision_restitution", self.collision_restitution, &RESTITUTION_RANGE)?;
        Ok(())
    }

    /// Writes the change, leaving the config untouched if the value is out of range
    pub fn apply(&mut self, change: ConfigChange) -> Result<ChangeEffect> {
        let effect = match change {
            ConfigChange::Gravity(v) => {
                check_range("gravity", v, &GRAVITY_RANGE)?;
                self.gravity = v;
                ChangeEffect::ReadLive
            }
            ConfigChange::BounceDamping(v) => {
                check_range("bounce_damping", v, &BOUNCE_DAMPING_RANGE)?;
                self.bounce_damping = v;
                ChangeEffect::ReadLive
            }
            ConfigChange::MaxBodyRadius(v) => {
                check_range("max_body_radius", v, &MAX_BODY_RADIUS_RANGE)?;
                self.max_body_radius = v;
                ChangeEffect::Reinitialize
            }
            ConfigChange::MaxBodyMass(v) => {
                check_range("max_body_mass", v, &MAX_BODY_MASS_RANGE)?;
                self.max_body_mass = v;
                ChangeEffect::Reinitialize
            }
            ConfigChange::CursorRadius(v) => {
                check_range("cursor_radius", v, &CURSOR_RADIUS_RANGE)?;
                self.cursor_radius = v;
                ChangeEffect::UpdateCursor
            }
            ConfigChange::CursorMass(v) => {
                check_range("cursor_mass", v, &CURSOR_MASS_RANGE)?;
                self.cursor_mass = v;
                ChangeEffect::UpdateCursor
            }
            ConfigChange::CursorColor(color) => {
                self.cursor_color = color;
                self.cursor_visible = true;
                ChangeEffect::UpdateCursor
            }
            ConfigChange::CursorVisible(visible) => {
                self.cursor_visible = visible;
                ChangeEffect::ReadLive
            }
            ConfigChange::CollisionRestitution(v) => {
                check_range("collision_restitution", v, &RESTITUTION_RANGE)?;
                self.collision_restitution = v;
                ChangeEffect::ReadLive
            }
            ConfigChange::Reset => {
                *self = Self::default();
                ChangeEffect::Reinitialize
            }
        };
        tracing::debug!("Applied {change:?}, {effect:?}");
        Ok(effect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_names_the_field() {
        let config = Config { collision_restitution: 1.5, ..Default::default() };
        match config.validate() {
            Err(Error::InvalidConfig { field, value, .. }) => {
                assert_eq!(field, "collision_restitution");
                assert_eq!(value, 1.5);
            }
            other => panic!("unexpected {other:?}"),
        }

        let config = Config { gravity: f64::NAN, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_change_effects() {
        let mut config = Config::default();
        assert_eq!(config.apply(ConfigChange::Gravity(2.)).unwrap(), ChangeEffect::ReadLive);
        assert_eq!(config.gravity, 2.);
        assert_eq!(config.apply(ConfigChange::MaxBodyRadius(40.)).unwrap(), ChangeEffect::Reinitialize);
        assert_eq!(config.apply(ConfigChange::MaxBodyMass(2.)).unwrap(), ChangeEffect::Reinitialize);
        assert_eq!(config.apply(ConfigChange::CursorRadius(20.)).unwrap(), ChangeEffect::UpdateCursor);
        assert_eq!(config.apply(ConfigChange::CursorMass(5.)).unwrap(), ChangeEffect::UpdateCursor);
        assert_eq!(config.apply(ConfigChange::CursorVisible(false)).unwrap(), ChangeEffect::ReadLive);
    }

    #[test]
    fn test_cursor_color_forces_visibility() {
        let mut config = Config::default();
        assert!(!config.cursor_visible);
        config.apply(ConfigChange::CursorColor(Rgb::new(255, 0, 0))).unwrap();
        assert!(config.cursor_visible);
        assert_eq!(config.cursor_color, Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_rejected_change_leaves_config_untouched() {
        let mut config = Config::default();
        assert!(config.apply(ConfigChange::BounceDamping(3.)).is_err());
        assert!(config.apply(ConfigChange::CursorMass(0.)).is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_reset() {
        let mut config = Config {
            gravity: 4.,
            cursor_visible: true,
            body_count: 3,
            ..Default::default()
        };
        assert_eq!(config.apply(ConfigChange::Reset).unwrap(), ChangeEffect::Reinitialize);
        assert_eq!(config, Config::default());
    }
}
