//! # Chitra-Map: Pose/Point Map Rasterizer
//!
//! A buffer-management-plus-rasterization engine for rendering a 2D
//! occupancy-style view from streamed robot poses and point-cloud samples.
//! Designed for embedding inside a sandboxed computation module that a host
//! application drives synchronously: the host fills fixed-capacity sample
//! buffers slot by slot, requests a full repaint on demand, and reads the
//! resulting RGBA image back pixel by pixel.
//!
//! ## Quick Start
//!
//! ```rust
//! use chitra_map::MapRenderer;
//!
//! let mut renderer = MapRenderer::new();
//!
//! // Stream samples into the fixed-capacity stores.
//! renderer.set_pose(0, 0.5, 0.5, 0.0);
//! renderer.set_point(0, 1.0, 0.0);
//! renderer.set_point(1, 1.0, 0.5);
//!
//! // Rasterize and read back.
//! renderer.draw_map(1, 2, 128, 128);
//! let first_pixel = renderer.pixel_at(0); // packed 0xAABBGGRR
//! assert_eq!(renderer.image_width(), 128);
//! # let _ = first_pixel;
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: geometry value types ([`Pose2D`], [`Point2D`], `Bounds`)
//! - [`store`]: fixed-capacity indexed sample stores
//! - [`canvas`]: RGBA pixel buffer and packed pixel read-back
//! - [`config`]: rasterizer configuration ([`RenderConfig`])
//! - [`MapRenderer`]: the owned context struct exposing the host API
//!
//! ## Coordinate Frame
//!
//! World coordinates are meters, X right and Y up; the rendered image has
//! row 0 at the top, so Y is flipped during projection. Rendering
//! autoscales to fit: the padded sample bounding box is centered on the
//! canvas with a single uniform scale, preserving aspect ratio.
//!
//! ## Error Policy
//!
//! Clamp or ignore, never fail: out-of-range writes are dropped,
//! out-of-range dimensions are clamped, out-of-range pixel reads return 0.
//! Nothing panics and nothing propagates across the host boundary. The
//! `try_set_*` methods offer an opt-in reporting channel for hosts that
//! want to see dropped writes.

pub mod canvas;
pub mod config;
pub mod core;
pub mod store;

mod render;
mod renderer;

pub use canvas::{Canvas, Rgba, DEFAULT_SIZE, MAX_HEIGHT, MAX_WIDTH};
pub use config::{ConfigError, RenderConfig};
pub use core::{Point2D, Pose2D};
pub use renderer::MapRenderer;
pub use store::{PointStore, PoseStore, StoreError, MAX_POINTS, MAX_POSES};
