//! Frame orchestration: text layout, auto-zoom and per-frame rendering
use log::debug;

use crate::config::Config;
use crate::font::segment_mask;
use crate::framebuffer::{Framebuffer, FramebufferError};
use crate::geometry::GlyphGeometry;
use crate::projection::{RenderContext, Shading, CAMERA_DISTANCE};
use crate::raster::{draw_segment, SegmentProfile};
use crate::transform::RotationState;

/// Share of each screen dimension the fitted text may occupy
pub const SCREEN_PADDING_FACTOR: f32 = 0.85;

/// Final divisor on the fitted zoom
const AUTO_ZOOM_SCALE: f32 = 1.0;

/// Work done for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    pub glyphs: usize,
    pub segments: usize,
    pub samples_written: usize,
}

/// Geometry, appearance and animation state for a run.
///
/// Geometry is derived once from the configuration; only the rotation and
/// the zoom change afterwards.
#[derive(Debug, Clone)]
pub struct Scene {
    geometry: GlyphGeometry,
    profile: SegmentProfile,
    shading: Shading,
    density: f32,
    tilt: f32,
    pitch_speed: f32,
    yaw_speed: f32,
    zoom_override: Option<f32>,
    rotation: RotationState,
    zoom: f32,
}

impl Scene {
    pub fn new(config: &Config) -> Self {
        Self {
            geometry: GlyphGeometry::build(config.glyph_dimensions()),
            profile: config.segment_profile(),
            shading: config.shading(),
            density: config.density,
            tilt: config.tilt,
            pitch_speed: config.pitch_speed,
            yaw_speed: config.yaw_speed,
            zoom_override: config.zoom_override(),
            rotation: RotationState::zero(),
            zoom: config.zoom_override().unwrap_or(1.0),
        }
    }

    pub fn geometry(&self) -> &GlyphGeometry {
        &self.geometry
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Zoom that fits `char_count` characters into a `width x height` screen
    pub fn fit_zoom(&self, width: usize, height: usize, char_count: usize) -> f32 {
        if let Some(zoom) = self.zoom_override {
            return zoom;
        }
        let total_width = self.geometry.layout(char_count).total_width;
        let zoom_h = (height as f32 * SCREEN_PADDING_FACTOR) * CAMERA_DISTANCE
            / self.geometry.dimensions.height;
        let zoom_w =
            (width as f32 * SCREEN_PADDING_FACTOR) * CAMERA_DISTANCE / (total_width * 2.0);
        zoom_h.min(zoom_w) / AUTO_ZOOM_SCALE
    }

    /// Reallocate the framebuffer for a new screen size and refit the zoom
    pub fn resize(
        &mut self,
        framebuffer: &mut Framebuffer,
        width: usize,
        height: usize,
        char_count: usize,
    ) -> Result<(), FramebufferError> {
        framebuffer.resize(width, height)?;
        self.zoom = self.fit_zoom(width, height, char_count);
        debug!("resized to {width}x{height}, zoom {:.3}", self.zoom);
        Ok(())
    }

    /// Clear the framebuffer and draw `text` at the current rotation
    pub fn render(&self, text: &str, framebuffer: &mut Framebuffer) -> FrameStats {
        framebuffer.clear();

        let char_count = text.chars().count();
        let layout = self.geometry.layout(char_count);
        let mut ctx = RenderContext::new(
            &self.rotation,
            self.tilt,
            self.zoom,
            &self.shading,
            framebuffer,
        );
        let mut stats = FrameStats {
            glyphs: char_count,
            ..FrameStats::default()
        };

        for (index, c) in text.chars().enumerate() {
            let char_center_x = layout.start_x + index as f32 * self.geometry.char_spacing;
            for segment in segment_mask(c).active_segments() {
                let (def, length) = self.geometry.segment(segment);
                stats.samples_written += draw_segment(
                    &mut ctx,
                    &self.profile,
                    length,
                    def,
                    char_center_x,
                    self.density,
                );
                stats.segments += 1;
            }
        }

        stats
    }

    /// Step the rotation by the configured per-frame speeds
    pub fn advance(&mut self) {
        self.rotation.rotate(self.pitch_speed, self.yaw_speed);
    }
}
