//! Headless surface that records its command stream.
//!
//! Used to assert what a tick actually painted without a browser; also
//! handy for dumping a frame's draw calls when debugging placement.

use std::cell::RefCell;

use super::surface::Surface;

/// One recorded drawing command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ClearRect,
    FillRect { color: String },
    BeginPath,
    Arc { x: f64, y: f64, radius: f64 },
    Fill { color: String },
}

/// A fixed-size surface that appends every call to a command log.
pub struct TraceSurface {
    width: f64,
    height: f64,
    commands: RefCell<Vec<Command>>,
}

impl TraceSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: RefCell::new(Vec::new()),
        }
    }

    /// Snapshot of the commands recorded so far
    pub fn commands(&self) -> Vec<Command> {
        self.commands.borrow().clone()
    }

    pub fn clear_log(&self) {
        self.commands.borrow_mut().clear();
    }

    /// All arcs recorded so far, in draw order
    pub fn arcs(&self) -> Vec<(f64, f64, f64)> {
        self.commands
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Command::Arc { x, y, radius } => Some((*x, *y, *radius)),
                _ => None,
            })
            .collect()
    }

    fn push(&self, command: Command) {
        self.commands.borrow_mut().push(command);
    }
}

impl Surface for TraceSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear_rect(&self) {
        self.push(Command::ClearRect);
    }

    fn fill_rect(&self, color: &str) {
        self.push(Command::FillRect {
            color: color.to_string(),
        });
    }

    fn begin_path(&self) {
        self.push(Command::BeginPath);
    }

    fn arc(&self, x: f64, y: f64, radius: f64) {
        self.push(Command::Arc { x, y, radius });
    }

    fn fill(&self, color: &str) {
        self.push(Command::Fill {
            color: color.to_string(),
        });
    }
}
