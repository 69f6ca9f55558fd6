//! Fixed-capacity sample stores for poses and points.
//!
//! Both stores are pre-allocated once at construction and never reallocate:
//! indexed writes are O(1), and out-of-range indices are silently dropped so
//! a misbehaving host can never corrupt store memory. The `try_set` variants
//! report the drop instead, for hosts that want a diagnostic channel.

mod point_store;
mod pose_store;

pub use point_store::{PointStore, MAX_POINTS};
pub use pose_store::{PoseStore, MAX_POSES};

use thiserror::Error;

/// Error reported by the `try_set` store operations.
///
/// The plain `set` operations never produce this: they clamp silently,
/// which is the module's default policy at the sandbox boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The slot index was outside `0..capacity`.
    #[error("slot index {index} out of range (capacity {capacity})")]
    IndexOutOfRange {
        /// The rejected index as supplied by the caller.
        index: i64,
        /// The store's fixed capacity.
        capacity: usize,
    },
}
