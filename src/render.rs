//! Stateless rasterizer: world-frame samples to canvas pixels.
//!
//! Every call fully repaints the active canvas region from the current
//! buffer contents; there is no dirty tracking or incremental update. The
//! pipeline: clear, combined bounds pass, pad, autoscale (uniform, aspect
//! preserving), then points as single pixels and poses as 3x3 blocks on top.

use log::debug;

use crate::canvas::Canvas;
use crate::config::RenderConfig;
use crate::core::{Bounds, Point2D, Pose2D};

/// Uniform world-to-pixel mapping derived from the padded sample bounds.
///
/// The padded bounding box midpoint maps to the canvas center; a single
/// scale factor serves both axes so the image is never distorted.
#[derive(Clone, Copy, Debug)]
struct Autoscale {
    scale: f32,
    cx: f32,
    cy: f32,
}

impl Autoscale {
    /// Derive the mapping for a canvas of `width` x `height` pixels.
    ///
    /// A degenerate span (<= 0, e.g. a single sample) is replaced by 1.0
    /// *before* padding, so a lone sample still maps to a well-defined
    /// region instead of a division singularity. Each axis is then padded
    /// by `padding` of its span per side, and the smaller of the two axis
    /// scales wins: the narrower axis governs, the other is under-filled,
    /// never clipped.
    fn compute(bounds: &Bounds, width: usize, height: usize, padding: f32) -> Self {
        let mut dx = bounds.width();
        let mut dy = bounds.height();
        if dx <= 0.0 {
            dx = 1.0;
        }
        if dy <= 0.0 {
            dy = 1.0;
        }
        let padded = Bounds::new(
            Point2D::new(bounds.min.x - dx * padding, bounds.min.y - dy * padding),
            Point2D::new(bounds.max.x + dx * padding, bounds.max.y + dy * padding),
        );

        let scale_x = (width as f32 - 1.0) / padded.width();
        let scale_y = (height as f32 - 1.0) / padded.height();
        let center = padded.center();

        Self {
            scale: scale_x.min(scale_y),
            cx: center.x,
            cy: center.y,
        }
    }

    /// Map a world point to canvas pixel coordinates.
    ///
    /// Y is flipped (image row 0 is the top, world +Y is up), coordinates
    /// truncate toward zero, and both are clamped into the active region.
    #[inline]
    fn project(&self, p: Point2D, width: usize, height: usize) -> (usize, usize) {
        let ix = ((p.x - self.cx) * self.scale + width as f32 * 0.5) as i32;
        let iy = ((self.cy - p.y) * self.scale + height as f32 * 0.5) as i32;
        (
            ix.clamp(0, width as i32 - 1) as usize,
            iy.clamp(0, height as i32 - 1) as usize,
        )
    }
}

/// Combined bounding box over non-sentinel poses and all points.
///
/// Returns empty bounds when no drawable sample exists.
fn sample_bounds(poses: &[Pose2D], points: &[Point2D]) -> Bounds {
    let mut bounds = Bounds::empty();
    for pose in poses {
        if pose.is_unset() {
            continue;
        }
        bounds.expand_to_include(pose.position());
    }
    for point in points {
        bounds.expand_to_include(*point);
    }
    bounds
}

/// Repaint the canvas from the given sample windows.
///
/// `poses` and `points` are the leading store slices selected by the caller;
/// the canvas active size must already be set. With no drawable sample the
/// canvas is left cleared to the background, which is the sole early-return
/// path and not a failure.
pub(crate) fn render(
    poses: &[Pose2D],
    points: &[Point2D],
    canvas: &mut Canvas,
    config: &RenderConfig,
) {
    let (width, height) = (canvas.width(), canvas.height());
    canvas.clear(config.background);

    let bounds = sample_bounds(poses, points);
    if bounds.is_empty() {
        debug!("render: no drawable samples, canvas cleared");
        return;
    }

    let map = Autoscale::compute(&bounds, width, height, config.padding);
    debug!(
        "render: {} poses, {} points -> {}x{}, scale {:.3}",
        poses.len(),
        points.len(),
        width,
        height,
        map.scale
    );

    // Points first; overlapping points simply overwrite (last index wins).
    for point in points {
        let (ix, iy) = map.project(*point, width, height);
        canvas.put(ix, iy, config.point_color);
    }

    // Poses on top, so a pose always wins over a point at the same pixel.
    for pose in poses {
        if pose.is_unset() {
            continue;
        }
        let (ix, iy) = map.project(pose.position(), width, height);
        for dy in -1i32..=1 {
            for dx in -1i32..=1 {
                let x = (ix as i32 + dx).clamp(0, width as i32 - 1) as usize;
                let y = (iy as i32 + dy).clamp(0, height as i32 - 1) as usize;
                canvas.put(x, y, config.pose_color);
            }
        }
    }
}
