//! Fixed-capacity point storage with a high-water-mark count.

use crate::core::Point2D;

use super::StoreError;

/// Maximum number of point slots.
pub const MAX_POINTS: usize = 20000;

/// Ordered, fixed-capacity array of 2D point samples, externally indexed.
///
/// Unlike [`PoseStore`](super::PoseStore), the store tracks a derived
/// **count**: one past the highest index ever written since the last reset.
/// Writing index `i` raises the count to `i + 1` if that is higher; writing
/// a lower index never lowers it. `(0, 0)` is a valid sample; points carry
/// no sentinel semantics.
#[derive(Clone, Debug)]
pub struct PointStore {
    slots: Vec<Point2D>,
    count: usize,
}

impl PointStore {
    /// Create a store with every slot zeroed and count 0.
    pub fn new() -> Self {
        Self {
            slots: vec![Point2D::ZERO; MAX_POINTS],
            count: 0,
        }
    }

    /// Fixed slot capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        MAX_POINTS
    }

    /// High-water-mark count: one past the highest index written since the
    /// last reset. Always in `0..=MAX_POINTS`.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Write the slot at `idx`, raising the count if needed. Out-of-range
    /// indices are silently dropped and leave the count untouched.
    #[inline]
    pub fn set(&mut self, idx: usize, point: Point2D) {
        if let Some(slot) = self.slots.get_mut(idx) {
            *slot = point;
            if idx + 1 > self.count {
                self.count = idx + 1;
            }
        }
    }

    /// Write the slot at `idx`, reporting out-of-range instead of clamping.
    pub fn try_set(&mut self, idx: usize, point: Point2D) -> Result<(), StoreError> {
        if idx < MAX_POINTS {
            self.set(idx, point);
            Ok(())
        } else {
            Err(StoreError::IndexOutOfRange {
                index: idx as i64,
                capacity: MAX_POINTS,
            })
        }
    }

    /// Read the slot at `idx`, or `None` if out of range.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<Point2D> {
        self.slots.get(idx).copied()
    }

    /// View of all slots in index order.
    #[inline]
    pub fn as_slice(&self) -> &[Point2D] {
        &self.slots
    }

    /// Zero every slot and reset the count to 0.
    ///
    /// O(capacity); intended for full-remap restarts, not frequent use.
    pub fn reset(&mut self) {
        self.slots.fill(Point2D::ZERO);
        self.count = 0;
    }
}

impl Default for PointStore {
    fn default() -> Self {
        Self::new()
    }
}
