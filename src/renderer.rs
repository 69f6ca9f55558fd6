//! Host-facing map renderer: owned stores, canvas, and draw entry points.

use log::{debug, trace};

use crate::canvas::{Canvas, MAX_HEIGHT, MAX_WIDTH};
use crate::config::RenderConfig;
use crate::core::{Point2D, Pose2D};
use crate::render;
use crate::store::{PointStore, PoseStore, StoreError};

/// The map rendering context: pose store, point store, canvas, and
/// configuration in one owned struct.
///
/// This is the whole module boundary. The host writes individual pose/point
/// slots (cheap, O(1), no allocation), invokes [`draw_map`](Self::draw_map)
/// with counts and desired dimensions, then reads pixels back through
/// [`pixel_at`](Self::pixel_at). All interaction is host-initiated and
/// synchronous; no call blocks, yields, or reports an error. Bad input is
/// clamped or ignored (see the `try_set_*` variants for the opt-in
/// reporting path).
///
/// Signatures keep the boundary's `i32` types so the clamping contract is
/// visible: negative indices/counts clamp away, oversized values clamp to
/// capacity.
///
/// # Concurrency
///
/// Single-threaded and non-reentrant by contract: there is no internal
/// synchronization, which `&mut self` makes explicit at the type level. A
/// host driving this from multiple threads must wrap the entire
/// write/draw/read sequence in its own mutual exclusion.
#[derive(Clone, Debug, Default)]
pub struct MapRenderer {
    poses: PoseStore,
    points: PointStore,
    canvas: Canvas,
    config: RenderConfig,
}

impl MapRenderer {
    /// Create a renderer with the default configuration.
    pub fn new() -> Self {
        Self::with_config(RenderConfig::default())
    }

    /// Create a renderer with a custom configuration.
    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            poses: PoseStore::new(),
            points: PointStore::new(),
            canvas: Canvas::new(),
            config,
        }
    }

    /// Write the pose slot at `idx`. Out-of-range indices (negative or
    /// beyond capacity) are silently dropped.
    pub fn set_pose(&mut self, idx: i32, x: f32, y: f32, theta: f32) {
        if idx < 0 {
            trace!("set_pose: dropping negative index {}", idx);
            return;
        }
        self.poses.set(idx as usize, Pose2D::new(x, y, theta));
    }

    /// Write the point slot at `idx`, raising the store's high-water count.
    /// Out-of-range indices are silently dropped.
    pub fn set_point(&mut self, idx: i32, x: f32, y: f32) {
        if idx < 0 {
            trace!("set_point: dropping negative index {}", idx);
            return;
        }
        self.points.set(idx as usize, Point2D::new(x, y));
    }

    /// Like [`set_pose`](Self::set_pose), but reports a dropped write.
    pub fn try_set_pose(&mut self, idx: i32, x: f32, y: f32, theta: f32) -> Result<(), StoreError> {
        if idx < 0 {
            return Err(StoreError::IndexOutOfRange {
                index: idx as i64,
                capacity: self.poses.capacity(),
            });
        }
        self.poses.try_set(idx as usize, Pose2D::new(x, y, theta))
    }

    /// Like [`set_point`](Self::set_point), but reports a dropped write.
    pub fn try_set_point(&mut self, idx: i32, x: f32, y: f32) -> Result<(), StoreError> {
        if idx < 0 {
            return Err(StoreError::IndexOutOfRange {
                index: idx as i64,
                capacity: self.points.capacity(),
            });
        }
        self.points.try_set(idx as usize, Point2D::new(x, y))
    }

    /// Overwrite every pose slot with the unwritten sentinel.
    pub fn reset_poses(&mut self) {
        self.poses.reset();
    }

    /// Zero every point slot and reset the high-water count.
    pub fn reset_points(&mut self) {
        self.points.reset();
    }

    /// High-water-mark point count: one past the highest point index
    /// written since the last reset.
    pub fn point_count(&self) -> i32 {
        self.points.count() as i32
    }

    /// Rasterize the first `pose_count` poses and `point_count` points onto
    /// a `width` x `height` canvas.
    ///
    /// Inputs are normalized, never rejected: negative counts clamp to 0,
    /// counts above capacity clamp to capacity, non-positive dimensions fall
    /// back to the configured defaults (256x256 stock) and oversized ones
    /// clamp to 512x512. The normalized dimensions become the new active
    /// canvas size. Always runs to completion; with no drawable sample the
    /// canvas is simply left cleared.
    pub fn draw_map(&mut self, pose_count: i32, point_count: i32, width: i32, height: i32) {
        let pose_count = (pose_count.max(0) as usize).min(self.poses.capacity());
        let point_count = (point_count.max(0) as usize).min(self.points.capacity());

        let width = if width <= 0 {
            self.config.default_width
        } else {
            (width as usize).min(MAX_WIDTH)
        };
        let height = if height <= 0 {
            self.config.default_height
        } else {
            (height as usize).min(MAX_HEIGHT)
        };
        self.canvas.set_active_size(width, height);

        debug!(
            "draw_map: pose_count={} point_count={} -> {}x{}",
            pose_count, point_count, width, height
        );
        render::render(
            &self.poses.as_slice()[..pose_count],
            &self.points.as_slice()[..point_count],
            &mut self.canvas,
            &self.config,
        );
    }

    /// Back-compatibility entry point: render poses only.
    pub fn draw_pose_map(&mut self, pose_count: i32, width: i32, height: i32) {
        self.draw_map(pose_count, 0, width, height);
    }

    /// Active canvas width set by the most recent draw call.
    pub fn image_width(&self) -> i32 {
        self.canvas.width() as i32
    }

    /// Active canvas height set by the most recent draw call.
    pub fn image_height(&self) -> i32 {
        self.canvas.height() as i32
    }

    /// Read the pixel at `index = row * width + col`, packed as
    /// `0xAABBGGRR` with red in the least-significant byte. Out-of-range
    /// indices (including negative) return 0.
    pub fn pixel_at(&self, index: i32) -> u32 {
        if index < 0 {
            return 0;
        }
        self.canvas.pixel(index as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dimensions_before_any_draw() {
        let renderer = MapRenderer::new();
        assert_eq!(renderer.image_width(), 256);
        assert_eq!(renderer.image_height(), 256);
    }

    #[test]
    fn test_negative_indices_are_dropped() {
        let mut renderer = MapRenderer::new();
        renderer.set_pose(-1, 1.0, 1.0, 1.0);
        renderer.set_point(-5, 1.0, 1.0);
        assert_eq!(renderer.point_count(), 0);
    }

    #[test]
    fn test_try_set_reports_negative_index() {
        let mut renderer = MapRenderer::new();
        assert!(renderer.try_set_pose(-1, 0.0, 0.0, 0.0).is_err());
        assert!(renderer.try_set_point(-1, 0.0, 0.0).is_err());
        assert!(renderer.try_set_pose(0, 1.0, 0.0, 0.0).is_ok());
        assert!(renderer.try_set_point(0, 1.0, 0.0).is_ok());
    }

    #[test]
    fn test_dimension_normalization() {
        let mut renderer = MapRenderer::new();

        renderer.draw_map(0, 0, 0, -5);
        assert_eq!(renderer.image_width(), 256);
        assert_eq!(renderer.image_height(), 256);

        renderer.draw_map(0, 0, 9999, 9999);
        assert_eq!(renderer.image_width(), 512);
        assert_eq!(renderer.image_height(), 512);

        renderer.draw_map(0, 0, 64, 32);
        assert_eq!(renderer.image_width(), 64);
        assert_eq!(renderer.image_height(), 32);
    }

    #[test]
    fn test_oversized_counts_clamp_to_capacity() {
        let mut renderer = MapRenderer::new();
        renderer.set_pose(0, 1.0, 1.0, 0.0);
        // Counts far past capacity must not panic or read out of range.
        renderer.draw_map(i32::MAX, i32::MAX, 16, 16);
        assert_eq!(renderer.image_width(), 16);
    }

    #[test]
    fn test_negative_pixel_index_reads_zero() {
        let mut renderer = MapRenderer::new();
        renderer.draw_map(0, 0, 4, 4);
        assert_eq!(renderer.pixel_at(-1), 0);
        assert_eq!(renderer.pixel_at(16), 0);
        assert_eq!(renderer.pixel_at(0), 0xFF00_0000);
    }

    #[test]
    fn test_draw_pose_map_ignores_points() {
        let mut renderer = MapRenderer::new();
        renderer.set_point(0, 1.0, 1.0);
        renderer.set_pose(0, 1.0, 1.0, 0.0);
        renderer.draw_pose_map(1, 16, 16);

        let red = 0xFF0000FFu32;
        for i in 0..16 * 16 {
            assert_ne!(renderer.pixel_at(i), red);
        }
    }
}
