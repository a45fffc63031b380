//! A single drawn circle, with seamless horizontal wrap-around.

use crate::math::Pos;
use crate::render::Surface;

pub const DEFAULT_RADIUS: f64 = 5.0;
pub const DEFAULT_COLOR: &str = "white";

/// The atomic visual unit of a cloud. Captures the surface dimensions at
/// construction; they are never re-queried.
#[derive(Debug, Clone)]
pub struct Puff {
    pub pos: Pos,
    pub radius: f64,
    pub color: String,
    surface_width: f64,
    surface_height: f64,
}

impl Puff {
    pub fn new(x: f64, y: f64, surface_width: f64, surface_height: f64) -> Self {
        Self {
            pos: Pos::new(x, y),
            radius: DEFAULT_RADIUS,
            color: DEFAULT_COLOR.to_string(),
            surface_width,
            surface_height,
        }
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = color.to_string();
        self
    }

    pub fn surface_width(&self) -> f64 {
        self.surface_width
    }

    pub fn surface_height(&self) -> f64 {
        self.surface_height
    }

    /// Paint the puff, wrapping it around the right edge.
    ///
    /// `from_wall` is the distance to the right edge. Fully past the wrap
    /// boundary the puff snaps back to the left edge; while straddling the
    /// edge a duplicate circle is drawn coming in from the left so the puff
    /// shows on both sides of the crossing.
    pub fn draw(&mut self, surface: &impl Surface) {
        surface.begin_path();

        let from_wall = self.surface_width - self.pos.x;
        if from_wall < -self.radius {
            self.pos.x = self.radius;
        } else if from_wall < self.radius {
            surface.arc(-from_wall, self.pos.y, self.radius);
        }

        surface.arc(self.pos.x, self.pos.y, self.radius);
        surface.fill(&self.color);
    }
}

/// Builds puffs bound to one surface's dimensions.
#[derive(Debug, Clone)]
pub struct PuffFactory {
    surface_width: f64,
    surface_height: f64,
}

impl PuffFactory {
    pub fn new(surface_width: f64, surface_height: f64) -> Self {
        Self {
            surface_width,
            surface_height,
        }
    }

    pub fn new_instance(&self, x: f64, y: f64, radius: f64) -> Puff {
        Puff::new(x, y, self.surface_width, self.surface_height).with_radius(radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::trace::Command;
    use crate::render::TraceSurface;

    #[test]
    fn test_defaults() {
        let puff = Puff::new(10.0, 20.0, 640.0, 480.0);
        assert_eq!(puff.radius, DEFAULT_RADIUS);
        assert_eq!(puff.color, DEFAULT_COLOR);
        assert_eq!(puff.surface_width(), 640.0);
        assert_eq!(puff.surface_height(), 480.0);
    }

    #[test]
    fn test_factory_sets_radius() {
        let factory = PuffFactory::new(640.0, 480.0);
        let puff = factory.new_instance(1.0, 2.0, 50.0);
        assert_eq!(puff.pos, Pos::new(1.0, 2.0));
        assert_eq!(puff.radius, 50.0);
        assert_eq!(puff.color, DEFAULT_COLOR);
    }

    #[test]
    fn test_draw_interior() {
        let surface = TraceSurface::new(100.0, 100.0);
        let mut puff = Puff::new(50.0, 40.0, 100.0, 100.0);
        puff.draw(&surface);

        assert_eq!(surface.arcs(), vec![(50.0, 40.0, 5.0)]);
        assert_eq!(
            surface.commands().last(),
            Some(&Command::Fill { color: "white".into() })
        );
    }

    #[test]
    fn test_draw_straddling_right_edge() {
        let surface = TraceSurface::new(100.0, 100.0);
        // 2 pixels from the wall, radius 5: duplicate appears at x = -2
        let mut puff = Puff::new(98.0, 40.0, 100.0, 100.0);
        puff.draw(&surface);

        assert_eq!(surface.arcs(), vec![(-2.0, 40.0, 5.0), (98.0, 40.0, 5.0)]);
        assert_eq!(puff.pos.x, 98.0);
    }

    #[test]
    fn test_draw_snaps_after_full_exit() {
        let surface = TraceSurface::new(100.0, 100.0);
        // fully past the boundary: from_wall = -6 < -5
        let mut puff = Puff::new(106.0, 40.0, 100.0, 100.0);
        puff.draw(&surface);

        assert_eq!(puff.pos.x, puff.radius);
        assert_eq!(surface.arcs(), vec![(5.0, 40.0, 5.0)]);
    }

    #[test]
    fn test_draw_exactly_at_boundary_does_not_snap() {
        let surface = TraceSurface::new(100.0, 100.0);
        // from_wall = -5 is not < -5: still straddling, no snap
        let mut puff = Puff::new(105.0, 40.0, 100.0, 100.0);
        puff.draw(&surface);

        assert_eq!(puff.pos.x, 105.0);
        assert_eq!(surface.arcs(), vec![(5.0, 40.0, 5.0), (105.0, 40.0, 5.0)]);
    }
}
