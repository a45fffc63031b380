//! The drawing seam between the simulation and the host canvas.

/// A 2D drawing surface with a fixed pixel size.
///
/// The operation set is exactly what the effect needs: clear, background
/// fill, and filled circle paths. Methods take `&self` because the browser
/// context is an interior-mutable handle; there is only one actor touching
/// the surface per tick.
pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    /// Clear the whole surface
    fn clear_rect(&self);

    /// Fill the whole surface with a CSS color
    fn fill_rect(&self, color: &str);

    /// Start a fresh path, discarding any pending one
    fn begin_path(&self);

    /// Append a full circle to the current path
    fn arc(&self, x: f64, y: f64, radius: f64);

    /// Fill the current path with a CSS color
    fn fill(&self, color: &str);
}
