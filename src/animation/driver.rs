//! The fixed-interval simulation loop.

use crate::config::Config;
use crate::render::Surface;
use crate::sky::{Cloud, CloudFactory};

/// Owns the surface and the cloud set; repaints the whole scene on every
/// tick. There is no stop state: once scheduled, the effect runs for the
/// lifetime of the page.
pub struct Driver<S: Surface> {
    surface: S,
    config: Config,
    clouds: Vec<Cloud>,
}

impl<S: Surface> Driver<S> {
    /// Build the cloud set once and hold onto the surface.
    pub fn new(surface: S, config: Config, seed: u32) -> Self {
        let mut factory = CloudFactory::for_surface(&surface, config.clone(), seed);
        let clouds = factory.make(config.nclouds);

        Self {
            surface,
            config,
            clouds,
        }
    }

    /// One frame: clear, paint the background, then update and draw every
    /// cloud in that order.
    pub fn tick(&mut self) {
        self.surface.clear_rect();
        self.surface.fill_rect(&self.config.background_color);

        for cloud in &mut self.clouds {
            cloud.update();
            cloud.draw(&self.surface);
        }
    }

    /// Assemble a driver from an existing cloud set.
    pub fn from_parts(surface: S, config: Config, clouds: Vec<Cloud>) -> Self {
        Self {
            surface,
            config,
            clouds,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn clouds(&self) -> &[Cloud] {
        &self.clouds
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
