//! Axis-aligned bounding box accumulated over pose/point samples.

use super::point::Point2D;

/// Axis-aligned bounding box.
///
/// Starts [`empty`](Bounds::empty) (min > max) and grows to fit samples via
/// [`expand_to_include`](Bounds::expand_to_include). The rasterizer uses the
/// final box to derive its autoscale mapping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// Minimum corner (smallest x and y values).
    pub min: Point2D,
    /// Maximum corner (largest x and y values).
    pub max: Point2D,
}

impl Bounds {
    /// Create a new bounding box from min and max corners.
    #[inline]
    pub const fn new(min: Point2D, max: Point2D) -> Self {
        Self { min, max }
    }

    /// Create an empty (invalid) bounding box.
    ///
    /// The empty bounds has min > max, so it will expand to fit any point.
    #[inline]
    pub fn empty() -> Self {
        Self {
            min: Point2D::new(f32::INFINITY, f32::INFINITY),
            max: Point2D::new(f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }

    /// Check if the bounds are empty (no sample ever included).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Width of the bounding box (x extent).
    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Height of the bounding box (y extent).
    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Center of the bounding box.
    #[inline]
    pub fn center(&self) -> Point2D {
        Point2D::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }

    /// Expand bounds to include a point.
    #[inline]
    pub fn expand_to_include(&mut self, point: Point2D) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let bounds = Bounds::empty();
        assert!(bounds.is_empty());

        let valid = Bounds::new(Point2D::new(0.0, 0.0), Point2D::new(1.0, 1.0));
        assert!(!valid.is_empty());
    }

    #[test]
    fn test_expand_to_include() {
        let mut bounds = Bounds::empty();

        bounds.expand_to_include(Point2D::new(5.0, 5.0));
        assert_eq!(bounds.min, Point2D::new(5.0, 5.0));
        assert_eq!(bounds.max, Point2D::new(5.0, 5.0));
        assert!(!bounds.is_empty());

        bounds.expand_to_include(Point2D::new(0.0, 10.0));
        assert_eq!(bounds.min, Point2D::new(0.0, 5.0));
        assert_eq!(bounds.max, Point2D::new(5.0, 10.0));
    }

    #[test]
    fn test_dimensions_and_center() {
        let bounds = Bounds::new(Point2D::new(1.0, 2.0), Point2D::new(5.0, 8.0));

        assert_eq!(bounds.width(), 4.0);
        assert_eq!(bounds.height(), 6.0);
        assert_eq!(bounds.center(), Point2D::new(3.0, 5.0));
    }

    #[test]
    fn test_single_sample_is_degenerate() {
        let mut bounds = Bounds::empty();
        bounds.expand_to_include(Point2D::new(2.0, 3.0));

        assert_eq!(bounds.width(), 0.0);
        assert_eq!(bounds.height(), 0.0);
    }
}
