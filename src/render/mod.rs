pub mod canvas;
pub mod surface;
pub mod trace;

pub use canvas::CanvasSurface;
pub use surface::Surface;
pub use trace::TraceSurface;
