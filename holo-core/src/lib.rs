//! Holo Core Library - rotating fourteen-segment text as ASCII art
//!
//! This library holds the terminal-independent rendering pipeline: the
//! segment font, glyph geometry, projection with lighting and depth
//! testing, segment rasterization and per-frame orchestration.

pub mod config;
pub mod font;
pub mod framebuffer;
pub mod geometry;
pub mod parse;
pub mod projection;
pub mod raster;
pub mod scene;
pub mod transform;

// Re-export commonly used types
pub use config::{Config, ConfigError, TextSource};
pub use font::{segment_mask, SegmentMask};
pub use framebuffer::{Framebuffer, FramebufferError};
pub use geometry::{GlyphDimensions, GlyphGeometry, SegmentDef};
pub use projection::{RenderContext, Shading};
pub use scene::{FrameStats, Scene};
pub use transform::{RotationState, Transform};
