//! Builds the cloud set for one surface.

use crate::config::Config;
use crate::math::Rng;
use crate::render::Surface;

use super::cloud::Cloud;
use super::puff::PuffFactory;

/// Builds clouds bound to one surface's dimensions. Owns the RNG used for
/// placement, speeds, and puff scatter.
pub struct CloudFactory {
    surface_width: f64,
    surface_height: f64,
    config: Config,
    rng: Rng,
}

impl CloudFactory {
    pub fn new(surface_width: f64, surface_height: f64, config: Config, seed: u32) -> Self {
        Self {
            surface_width,
            surface_height,
            config,
            rng: Rng::new(seed),
        }
    }

    pub fn for_surface(surface: &impl Surface, config: Config, seed: u32) -> Self {
        Self::new(surface.width(), surface.height(), config, seed)
    }

    /// Build one cloud at `(x, y)`.
    pub fn new_instance(&mut self, x: f64, y: f64) -> Cloud {
        let puffs = PuffFactory::new(self.surface_width, self.surface_height);
        Cloud::new(x, y, &self.config, &puffs, &mut self.rng)
    }

    /// Build `count` clouds scattered uniformly over the surface.
    /// Independent draws; clouds may overlap.
    pub fn make(&mut self, count: usize) -> Vec<Cloud> {
        self.make_with(count, |width, height, rng| {
            (rng.randint_upto(width), rng.randint_upto(height))
        })
    }

    /// Build `count` clouds, placing each with the supplied function. The
    /// function receives the surface dimensions and the factory's RNG and
    /// returns the next cloud's centroid.
    pub fn make_with<F>(&mut self, count: usize, mut place: F) -> Vec<Cloud>
    where
        F: FnMut(f64, f64, &mut Rng) -> (f64, f64),
    {
        (0..count)
            .map(|_| {
                let (x, y) = place(self.surface_width, self.surface_height, &mut self.rng);
                self.new_instance(x, y)
            })
            .collect()
    }
}
