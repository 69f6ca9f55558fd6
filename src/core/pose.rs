//! 2D pose type for robot position and heading.
//!
//! Coordinate frame: X/Y in meters in the world frame, theta in radians,
//! counter-clockwise positive. World +Y maps to "up" on the rendered image.

use serde::{Deserialize, Serialize};

use super::point::Point2D;

/// A 2D pose: position in meters plus heading in radians.
///
/// # Sentinel semantics
///
/// A pose whose three fields are all exactly zero is the *unwritten
/// sentinel*: store slots default to it, and the rasterizer excludes such
/// poses from both bounds computation and drawing. This is the only way to
/// "delete" a pose without compacting the store. The flip side is that a
/// legitimately-placed pose at the world origin with zero heading is
/// indistinguishable from a slot that was never written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose2D {
    /// X position in meters.
    pub x: f32,
    /// Y position in meters.
    pub y: f32,
    /// Heading angle in radians, CCW positive. Accepted and stored but not
    /// used for rendering yet (reserved for a heading indicator).
    pub theta: f32,
}

impl Pose2D {
    /// Create a new pose.
    #[inline]
    pub const fn new(x: f32, y: f32, theta: f32) -> Self {
        Self { x, y, theta }
    }

    /// The unwritten-slot sentinel (all fields zero).
    #[inline]
    pub const fn unset() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            theta: 0.0,
        }
    }

    /// True if this pose is the unwritten sentinel.
    ///
    /// Exact comparison is intentional: only the all-zero bit pattern the
    /// stores reset slots to counts as unset.
    #[inline]
    pub fn is_unset(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.theta == 0.0
    }

    /// Get the position as a [`Point2D`].
    #[inline]
    pub fn position(self) -> Point2D {
        Point2D::new(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_sentinel() {
        assert!(Pose2D::unset().is_unset());
        assert!(Pose2D::default().is_unset());

        assert!(!Pose2D::new(1.0, 0.0, 0.0).is_unset());
        assert!(!Pose2D::new(0.0, 1.0, 0.0).is_unset());
        // A nonzero heading alone is enough to make the pose "written".
        assert!(!Pose2D::new(0.0, 0.0, 0.5).is_unset());
    }

    #[test]
    fn test_position() {
        let pose = Pose2D::new(1.0, 2.0, 0.5);
        assert_eq!(pose.position(), Point2D::new(1.0, 2.0));
    }
}
