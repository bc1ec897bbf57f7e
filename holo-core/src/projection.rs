//! Perspective projection, lighting and depth-tested plotting
use nalgebra::{Matrix3, Vector2, Vector3};

use crate::framebuffer::Framebuffer;
use crate::transform::{RotationState, Transform};

/// Distance the glyphs are pushed in front of the camera
pub const CAMERA_DISTANCE: f32 = 25.0;

/// Terminal cells are roughly twice as tall as they are wide
const CELL_ASPECT: f32 = 2.0;

/// Luminance model: a 2D light direction and a palette ramp
#[derive(Debug, Clone, PartialEq)]
pub struct Shading {
    /// Only the x and y components take part; there is no z light term
    pub light: Vector2<f32>,
    pub contrast: f32,
    /// Darkest to brightest
    pub palette: Vec<char>,
}

impl Shading {
    pub fn new(light: Vector2<f32>, contrast: f32, palette: &str) -> Self {
        Self {
            light,
            contrast,
            palette: palette.chars().collect(),
        }
    }

    pub fn luminance(&self, normal: &Vector3<f32>) -> f32 {
        normal.xy().dot(&self.light)
    }

    /// `floor(luminance * contrast)` clamped into the palette
    pub fn palette_index(&self, luminance: f32) -> usize {
        let last = self.palette.len().saturating_sub(1);
        let raw = (luminance * self.contrast).floor();
        if raw.is_nan() || raw <= 0.0 {
            0
        } else if raw >= last as f32 {
            last
        } else {
            raw as usize
        }
    }

    pub fn shade(&self, luminance: f32) -> char {
        self.palette
            .get(self.palette_index(luminance))
            .copied()
            .unwrap_or(' ')
    }
}

/// Everything one frame's projection needs.
///
/// Built fresh each frame; only the framebuffer it borrows is mutated.
pub struct RenderContext<'a> {
    point_matrix: Matrix3<f32>,
    normal_matrix: Matrix3<f32>,
    zoom: f32,
    shading: &'a Shading,
    framebuffer: &'a mut Framebuffer,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        rotation: &RotationState,
        tilt: f32,
        zoom: f32,
        shading: &'a Shading,
        framebuffer: &'a mut Framebuffer,
    ) -> Self {
        Self {
            point_matrix: Transform::point_matrix(rotation, tilt),
            normal_matrix: Transform::rotation_matrix(rotation),
            zoom,
            shading,
            framebuffer,
        }
    }

    /// Map a glyph-space point onto a screen cell.
    ///
    /// Returns the cell and inverse depth, or `None` when the point lies
    /// behind the camera.
    pub fn project_point(&self, point: &Vector3<f32>) -> Option<(i32, i32, f32)> {
        let camera = Transform::apply(&self.point_matrix, point);
        let depth = camera.z + CAMERA_DISTANCE;
        if depth <= 0.0 || depth.is_nan() {
            return None;
        }

        let ooz = 1.0 / depth;
        let half_w = self.framebuffer.width() as f32 / 2.0;
        let half_h = self.framebuffer.height() as f32 / 2.0;
        // Truncation toward zero, so cells just left of or above the screen land on 0
        let xp = (half_w + self.zoom * CELL_ASPECT * camera.x * ooz) as i32;
        let yp = (half_h - self.zoom * camera.y * ooz) as i32;
        Some((xp, yp, ooz))
    }

    /// Project, depth-test, light and plot one surface sample.
    ///
    /// Off-screen, behind-camera and occluded samples are dropped silently.
    /// Returns whether a cell was written.
    pub fn project(&mut self, point: &Vector3<f32>, normal: &Vector3<f32>) -> bool {
        let Some((xp, yp, ooz)) = self.project_point(point) else {
            return false;
        };

        let normal_matrix = &self.normal_matrix;
        let shading = self.shading;
        self.framebuffer.plot_with(xp, yp, ooz, || {
            let rotated = Transform::apply(normal_matrix, normal);
            shading.shade(shading.luminance(&rotated))
        })
    }
}
