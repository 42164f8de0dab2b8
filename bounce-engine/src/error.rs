//! Errors returned by the simulation core

use snafu::Snafu;

/// All the known errors returned by this crate.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// There is nothing to draw on, fatal at startup
    #[snafu(display("Surface not found"))]
    SurfaceNotFound,

    /// Viewport dimensions must be positive and finite
    #[snafu(display("Invalid viewport size {width}x{height}"))]
    InvalidViewport {
        width: f64,
        height: f64,
    },

    /// A configuration value outside of its published range
    #[snafu(display("Invalid value {value} for `{field}`, expected a value in {min}..={max}"))]
    InvalidConfig {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[snafu(display("Simulation was ticked before being started"))]
    NotRunning,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
