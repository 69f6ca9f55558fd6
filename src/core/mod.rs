//! Fundamental geometry types shared across the crate.

mod bounds;
mod point;
mod pose;

pub use bounds::Bounds;
pub use point::Point2D;
pub use pose::Pose2D;
