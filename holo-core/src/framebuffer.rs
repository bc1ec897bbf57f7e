//! Character and depth buffers for one screen.
//!
//! The depth buffer stores inverse depth (`1/z`), so larger values are
//! nearer the camera and a cleared cell holds `0.0`, meaning empty.

use std::collections::TryReserveError;
use std::fmt;

/// Buffer (re)allocation failed
#[derive(Debug)]
pub enum FramebufferError {
    Allocation {
        width: usize,
        height: usize,
        source: Option<TryReserveError>,
    },
}

impl fmt::Display for FramebufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FramebufferError::Allocation { width, height, .. } => {
                write!(f, "buffer reallocation failed for {width}x{height} cells")
            }
        }
    }
}

impl std::error::Error for FramebufferError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FramebufferError::Allocation { source, .. } => source
                .as_ref()
                .map(|e| e as &(dyn std::error::Error + 'static)),
        }
    }
}

/// Owned screen buffers, exactly `width * height` cells each
#[derive(Debug, Clone, Default)]
pub struct Framebuffer {
    width: usize,
    height: usize,
    depth: Vec<f32>,
    chars: Vec<char>,
}

impl Framebuffer {
    /// Zero-sized buffers, waiting for the first resize
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(width: usize, height: usize) -> Result<Self, FramebufferError> {
        let mut framebuffer = Self::empty();
        framebuffer.resize(width, height)?;
        Ok(framebuffer)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Reallocate both buffers for a new screen size and clear them.
    ///
    /// On failure the previous buffers are released and the framebuffer is
    /// left zero-sized.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), FramebufferError> {
        let alloc_error = |source| FramebufferError::Allocation {
            width,
            height,
            source,
        };
        *self = Self::empty();
        let size = width.checked_mul(height).ok_or_else(|| alloc_error(None))?;

        let mut depth = Vec::new();
        depth
            .try_reserve_exact(size)
            .map_err(|e| alloc_error(Some(e)))?;
        depth.resize(size, 0.0);

        let mut chars = Vec::new();
        chars
            .try_reserve_exact(size)
            .map_err(|e| alloc_error(Some(e)))?;
        chars.resize(size, ' ');

        *self = Self {
            width,
            height,
            depth,
            chars,
        };
        Ok(())
    }

    /// Reset every cell to a space at infinite distance
    pub fn clear(&mut self) {
        self.depth.fill(0.0);
        self.chars.fill(' ');
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Depth-tested write.
    ///
    /// The cell takes `ooz` and the character from `shade` only when it is
    /// on screen and `ooz` exceeds the stored inverse depth. `shade` runs
    /// only for accepted writes. Returns whether the cell was written.
    #[inline]
    pub fn plot_with<F>(&mut self, x: i32, y: i32, ooz: f32, shade: F) -> bool
    where
        F: FnOnce() -> char,
    {
        match self.index(x, y) {
            Some(idx) if ooz > self.depth[idx] => {
                self.depth[idx] = ooz;
                self.chars[idx] = shade();
                true
            }
            _ => false,
        }
    }

    pub fn char_at(&self, x: usize, y: usize) -> Option<char> {
        (x < self.width && y < self.height).then(|| self.chars[y * self.width + x])
    }

    pub fn depth_at(&self, x: usize, y: usize) -> Option<f32> {
        (x < self.width && y < self.height).then(|| self.depth[y * self.width + x])
    }

    /// Rows of characters, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.chars.chunks(self.width.max(1))
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// True when no cell has been drawn since the last clear
    pub fn is_blank(&self) -> bool {
        self.chars.iter().all(|&c| c == ' ') && self.depth.iter().all(|&d| d == 0.0)
    }
}
