//! Static placement of the fourteen segments inside a glyph
use nalgebra::Vector2;
use std::f32::consts::FRAC_PI_2;

use crate::font::SEGMENT_COUNT;

/// Size parameters a glyph's geometry is derived from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphDimensions {
    pub width: f32,
    pub height: f32,
    /// Segment fatness, across the stroke
    pub segment_width: f32,
    /// Multiplier on `width` giving the advance between characters
    pub spacing_factor: f32,
}

/// Placement of one segment relative to the glyph origin.
///
/// `angle` rotates the segment around the viewing axis; its cosine and
/// sine are cached since every surface sample uses them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentDef {
    pub center: Vector2<f32>,
    pub angle: f32,
    pub cos: f32,
    pub sin: f32,
}

impl SegmentDef {
    pub fn new(x: f32, y: f32, angle: f32) -> Self {
        Self {
            center: Vector2::new(x, y),
            angle,
            cos: angle.cos(),
            sin: angle.sin(),
        }
    }

    /// Rotate a segment-local vector into glyph orientation
    #[inline]
    pub fn orient(&self, v: Vector2<f32>) -> Vector2<f32> {
        Vector2::new(
            v.x * self.cos - v.y * self.sin,
            v.x * self.sin + v.y * self.cos,
        )
    }
}

/// Horizontal placement of a run of characters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextLayout {
    /// Center of the first character
    pub start_x: f32,
    /// Extent from the left edge of the first glyph to the right edge of the last
    pub total_width: f32,
}

/// Segment definitions and lengths for one glyph configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphGeometry {
    pub dimensions: GlyphDimensions,
    pub segments: [SegmentDef; SEGMENT_COUNT],
    pub lengths: [f32; SEGMENT_COUNT],
    pub char_spacing: f32,
}

impl GlyphGeometry {
    pub fn build(dimensions: GlyphDimensions) -> Self {
        let GlyphDimensions {
            width: w,
            height: h,
            segment_width,
            spacing_factor,
        } = dimensions;

        let quarter_w = w / 4.0;
        let quarter_h = h / 4.0;
        let diag = quarter_h.atan2(quarter_w);
        let upright = FRAC_PI_2;

        // A, B, C, D, E, F, G1, G2, H, I, J, K, L, M
        let segments = [
            SegmentDef::new(0.0, h / 2.0, 0.0),
            SegmentDef::new(w / 2.0, quarter_h, upright),
            SegmentDef::new(w / 2.0, -quarter_h, upright),
            SegmentDef::new(0.0, -h / 2.0, 0.0),
            SegmentDef::new(-w / 2.0, -quarter_h, upright),
            SegmentDef::new(-w / 2.0, quarter_h, upright),
            SegmentDef::new(-quarter_w, 0.0, 0.0),
            SegmentDef::new(quarter_w, 0.0, 0.0),
            SegmentDef::new(-quarter_w, quarter_h, -diag),
            SegmentDef::new(0.0, quarter_h, upright),
            SegmentDef::new(quarter_w, quarter_h, diag),
            SegmentDef::new(-quarter_w, -quarter_h, diag),
            SegmentDef::new(0.0, -quarter_h, upright),
            SegmentDef::new(quarter_w, -quarter_h, -diag),
        ];

        let horizontal = w / 2.0 - segment_width / 2.0;
        let vertical_outer = h / 2.0 - segment_width;
        let vertical_inner = quarter_h - segment_width / 2.0;
        let diagonal = (quarter_w * quarter_w + quarter_h * quarter_h).sqrt() - segment_width;

        let lengths = [
            horizontal,
            vertical_outer,
            vertical_outer,
            horizontal,
            vertical_outer,
            vertical_outer,
            horizontal,
            horizontal,
            diagonal,
            vertical_inner,
            diagonal,
            diagonal,
            vertical_inner,
            diagonal,
        ];

        Self {
            dimensions,
            segments,
            lengths,
            char_spacing: w * spacing_factor,
        }
    }

    /// Definition and length of segment `index`
    pub fn segment(&self, index: usize) -> (&SegmentDef, f32) {
        (&self.segments[index], self.lengths[index])
    }

    /// Center a run of `char_count` characters on the origin
    pub fn layout(&self, char_count: usize) -> TextLayout {
        let n = char_count as f32;
        let total_width = if char_count > 1 {
            (n - 1.0) * self.char_spacing + self.dimensions.width
        } else {
            self.dimensions.width
        };
        TextLayout {
            start_x: -(n - 1.0) * self.char_spacing / 2.0,
            total_width,
        }
    }
}
