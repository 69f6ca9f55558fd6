//! Fixed-capacity pose storage.

use crate::core::Pose2D;

use super::StoreError;

/// Maximum number of pose slots.
pub const MAX_POSES: usize = 4096;

/// Ordered, fixed-capacity array of pose samples, externally indexed.
///
/// All [`MAX_POSES`] slots are allocated up front and default to the
/// all-zero sentinel ([`Pose2D::is_unset`]). The store keeps no derived
/// count: callers tell the rasterizer how many leading slots to consider at
/// draw time.
#[derive(Clone, Debug)]
pub struct PoseStore {
    slots: Vec<Pose2D>,
}

impl PoseStore {
    /// Create a store with every slot set to the unwritten sentinel.
    pub fn new() -> Self {
        Self {
            slots: vec![Pose2D::unset(); MAX_POSES],
        }
    }

    /// Fixed slot capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        MAX_POSES
    }

    /// Write the slot at `idx`. Out-of-range indices are silently dropped.
    #[inline]
    pub fn set(&mut self, idx: usize, pose: Pose2D) {
        if let Some(slot) = self.slots.get_mut(idx) {
            *slot = pose;
        }
    }

    /// Write the slot at `idx`, reporting out-of-range instead of clamping.
    pub fn try_set(&mut self, idx: usize, pose: Pose2D) -> Result<(), StoreError> {
        match self.slots.get_mut(idx) {
            Some(slot) => {
                *slot = pose;
                Ok(())
            }
            None => Err(StoreError::IndexOutOfRange {
                index: idx as i64,
                capacity: MAX_POSES,
            }),
        }
    }

    /// Read the slot at `idx`, or `None` if out of range.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<Pose2D> {
        self.slots.get(idx).copied()
    }

    /// View of all slots in index order.
    #[inline]
    pub fn as_slice(&self) -> &[Pose2D] {
        &self.slots
    }

    /// Overwrite every slot with the unwritten sentinel.
    ///
    /// O(capacity); intended for full-remap restarts, not frequent use.
    pub fn reset(&mut self) {
        self.slots.fill(Pose2D::unset());
    }
}

impl Default for PoseStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_default_to_sentinel() {
        let store = PoseStore::new();
        assert_eq!(store.capacity(), MAX_POSES);
        assert!(store.get(0).unwrap().is_unset());
        assert!(store.get(MAX_POSES - 1).unwrap().is_unset());
    }

    #[test]
    fn test_set_and_get() {
        let mut store = PoseStore::new();
        store.set(7, Pose2D::new(1.0, 2.0, 0.5));

        let pose = store.get(7).unwrap();
        assert_eq!(pose.x, 1.0);
        assert_eq!(pose.y, 2.0);
        assert_eq!(pose.theta, 0.5);
    }

    #[test]
    fn test_out_of_range_write_is_dropped() {
        let mut store = PoseStore::new();
        store.set(MAX_POSES, Pose2D::new(9.0, 9.0, 9.0));

        // No slot changed.
        assert!(store.as_slice().iter().all(Pose2D::is_unset));
    }

    #[test]
    fn test_try_set_reports_out_of_range() {
        let mut store = PoseStore::new();
        assert!(store.try_set(0, Pose2D::new(1.0, 0.0, 0.0)).is_ok());

        let err = store.try_set(MAX_POSES, Pose2D::unset()).unwrap_err();
        assert_eq!(
            err,
            StoreError::IndexOutOfRange {
                index: MAX_POSES as i64,
                capacity: MAX_POSES,
            }
        );
    }

    #[test]
    fn test_reset_restores_sentinels() {
        let mut store = PoseStore::new();
        store.set(0, Pose2D::new(1.0, 1.0, 1.0));
        store.set(100, Pose2D::new(2.0, 2.0, 2.0));

        store.reset();
        assert!(store.as_slice().iter().all(Pose2D::is_unset));
    }
}
