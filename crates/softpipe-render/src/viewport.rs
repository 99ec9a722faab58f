use softpipe_math::{DVec2, Point2, Point3};

/// Mapping from normalized device coordinates to surface pixels.
///
/// NDC x and y span `[-1, 1]` with y up; the surface has its origin at the
/// top-left with y down. Points outside the unit square map off-surface and
/// are passed through unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    /// Pixel position of NDC (0, 0).
    pub center: DVec2,
    /// Pixels per NDC unit on each axis; y is negative.
    pub scale: DVec2,
    /// Stroke width in pixels, never thinner than one device pixel.
    pub line_width: f64,
}

impl Viewport {
    pub const MIN_LINE_WIDTH: f64 = 1.0;

    pub fn from_size(width: u32, height: u32, line_width: f64) -> Self {
        let half = DVec2::new(width as f64 / 2.0, height as f64 / 2.0);
        Self {
            width,
            height,
            center: half,
            scale: DVec2::new(half.x, -half.y),
            line_width: line_width.max(Self::MIN_LINE_WIDTH),
        }
    }

    /// Map an NDC point to surface pixels, dropping depth.
    pub fn to_surface(&self, ndc: Point3) -> Point2 {
        self.center + ndc.truncate() * self.scale
    }

    pub fn matches(&self, size: (u32, u32)) -> bool {
        (self.width, self.height) == size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{dvec2, dvec3};

    #[test]
    fn test_corners() {
        let vp = Viewport::from_size(800, 600, 1.0);
        assert_eq!(vp.to_surface(dvec3(0.0, 0.0, 0.0)), dvec2(400.0, 300.0));
        assert_eq!(vp.to_surface(dvec3(-1.0, 1.0, 0.5)), dvec2(0.0, 0.0));
        assert_eq!(vp.to_surface(dvec3(1.0, -1.0, -0.5)), dvec2(800.0, 600.0));
    }

    #[test]
    fn test_out_of_range_passes_through() {
        let vp = Viewport::from_size(100, 100, 1.0);
        assert_eq!(vp.to_surface(dvec3(3.0, 0.0, 0.0)), dvec2(200.0, 50.0));
    }

    #[test]
    fn test_line_width_clamped() {
        let vp = Viewport::from_size(100, 100, 0.1);
        assert_eq!(vp.line_width, Viewport::MIN_LINE_WIDTH);
        let vp = Viewport::from_size(100, 100, 2.5);
        assert_eq!(vp.line_width, 2.5);
    }

    #[test]
    fn test_matches() {
        let vp = Viewport::from_size(10, 20, 1.0);
        assert!(vp.matches((10, 20)));
        assert!(!vp.matches((20, 10)));
    }
}
