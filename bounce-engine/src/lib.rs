mod error;
pub use error::*;
mod color;
pub use color::*;
mod math;
pub use math::*;
mod surface;
pub use surface::*;
mod config;
pub use config::*;
mod pointer;
pub use pointer::*;
mod body;
pub use body::*;
mod collision;
pub use collision::*;
mod simulation;
pub use simulation::*;

pub use glam::DVec2;

#[cfg(test)]
mod test_utils;

pub(crate) fn default<T: Default>() -> T {
    T::default()
}
