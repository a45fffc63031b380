//! A cluster of puffs sharing one drift speed.

use crate::config::Config;
use crate::math::{Pos, Rng};
use crate::render::Surface;

use super::puff::{Puff, PuffFactory};

/// A cloud: `puffs_per_cloud` puffs scattered around a centroid, drifting
/// together at a speed fixed at construction.
#[derive(Debug, Clone)]
pub struct Cloud {
    /// Centroid the puffs were scattered around. Only the puffs move
    /// afterwards; this stays where the cloud was born.
    pub pos: Pos,
    pub speed: f64,
    puffs: Vec<Puff>,
}

impl Cloud {
    /// Build a cloud at `(x, y)`: draw its speed from the configured range,
    /// then scatter puffs uniformly within `cloud_width` of the centroid.
    pub fn new(x: f64, y: f64, config: &Config, factory: &PuffFactory, rng: &mut Rng) -> Self {
        let pos = Pos::new(x, y);
        let [min, max] = config.cloud_speed_range;
        let speed = rng.randint(min, max);

        let puffs = (0..config.puffs_per_cloud)
            .map(|_| {
                let px = rng.randint(pos.x - config.cloud_width, pos.x + config.cloud_width);
                let py = rng.randint(pos.y - config.cloud_width, pos.y + config.cloud_width);
                factory.new_instance(px, py, config.cloud_radius)
            })
            .collect();

        Self { pos, speed, puffs }
    }

    /// Drift every puff horizontally by the cloud's speed.
    pub fn update(&mut self) {
        for puff in &mut self.puffs {
            puff.pos.translate(self.speed, 0.0);
        }
    }

    /// Paint the puffs in sequence order; later puffs paint over earlier ones.
    pub fn draw(&mut self, surface: &impl Surface) {
        for puff in &mut self.puffs {
            puff.draw(surface);
        }
    }

    pub fn puffs(&self) -> &[Puff] {
        &self.puffs
    }
}
