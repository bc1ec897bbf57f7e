//! Surface sampling of a single segment.
//!
//! A segment is a bar of `length x width x thickness` whose two ends taper
//! to a point over `point_length`. Its surface is sampled on a regular grid
//! and every sample goes through the projector.

use nalgebra::{Vector2, Vector3};

use crate::geometry::SegmentDef;
use crate::projection::RenderContext;

/// End-cap slopes whose normal is shorter than this are not drawn
const MIN_SLOPE_NORMAL: f32 = 1e-5;

/// Cross-section shared by every segment of a glyph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentProfile {
    /// Fatness, along the segment-local y axis
    pub width: f32,
    /// Depth, along z
    pub thickness: f32,
    pub point_length: f32,
}

/// `start, start + step, ...` while below `end`, accumulating like a float loop counter.
///
/// Stops early once adding `step` no longer changes the value, so a step
/// below the float resolution still terminates.
fn steps(start: f32, end: f32, step: f32) -> impl Iterator<Item = f32> {
    std::iter::successors(Some(start), move |&v| {
        let next = v + step;
        (next > v).then_some(next)
    })
    .take_while(move |v| *v < end)
}

/// Rotate a segment-local sample into glyph space and project it
#[inline]
fn emit(
    ctx: &mut RenderContext<'_>,
    def: &SegmentDef,
    offset: Vector2<f32>,
    local: Vector3<f32>,
    normal: Vector2<f32>,
) -> bool {
    let p = def.orient(local.xy()) + offset;
    let n = def.orient(normal);
    ctx.project(&Vector3::new(p.x, p.y, local.z), &Vector3::new(n.x, n.y, 0.0))
}

/// Rasterize one segment of a glyph whose center sits at `char_center_x`.
///
/// Returns the number of samples that landed in the framebuffer. A
/// non-positive `density` draws nothing.
pub fn draw_segment(
    ctx: &mut RenderContext<'_>,
    profile: &SegmentProfile,
    length: f32,
    def: &SegmentDef,
    char_center_x: f32,
    density: f32,
) -> usize {
    if !(density > 0.0) {
        return 0;
    }

    let offset = def.center + Vector2::new(char_center_x, 0.0);
    let half_w = profile.width / 2.0;
    let half_t = profile.thickness / 2.0;
    let half_len = length / 2.0;
    let mut written = 0;

    // Flat faces
    for i in steps(-half_len, half_len, density) {
        for j in steps(-half_t, half_t, density) {
            let top = emit(ctx, def, offset, Vector3::new(i, half_w, j), Vector2::new(0.0, 1.0));
            let bottom =
                emit(ctx, def, offset, Vector3::new(i, -half_w, j), Vector2::new(0.0, -1.0));
            written += usize::from(top) + usize::from(bottom);
        }
    }

    // Pointed end caps
    let point_len = profile.point_length;
    let slope = Vector2::new(half_w, point_len);
    let slope_len = slope.norm();
    if slope_len < MIN_SLOPE_NORMAL {
        return written;
    }
    let slope = slope / slope_len;

    for u in steps(0.0, point_len, density) {
        let yp = half_w * (1.0 - u / point_len);
        let ahead = half_len + u;
        for z in steps(-half_t, half_t, density) {
            let samples = [
                (Vector3::new(ahead, yp, z), Vector2::new(slope.x, slope.y)),
                (Vector3::new(ahead, -yp, z), Vector2::new(slope.x, -slope.y)),
                (Vector3::new(-ahead, yp, z), Vector2::new(-slope.x, slope.y)),
                (Vector3::new(-ahead, -yp, z), Vector2::new(-slope.x, -slope.y)),
            ];
            for (local, normal) in samples {
                written += usize::from(emit(ctx, def, offset, local, normal));
            }
        }
    }

    written
}
