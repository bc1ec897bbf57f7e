//! Writes a finished framebuffer to the terminal
use crossterm::{cursor, style::Print, QueueableCommand};
use holo_core::Framebuffer;
use std::io::Write;

/// Prints frames row by row, reusing one line buffer
#[derive(Debug, Default)]
pub struct FramePrinter {
    line: String,
}

impl FramePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Home the cursor and print every row.
    ///
    /// Rows end in `\r\n` since raw mode does not translate newlines.
    pub fn draw<W: Write>(&mut self, framebuffer: &Framebuffer, writer: &mut W) -> std::io::Result<()> {
        writer.queue(cursor::MoveTo(0, 0))?;
        for row in framebuffer.rows() {
            self.line.clear();
            self.line.extend(row.iter());
            self.line.push_str("\r\n");
            writer.queue(Print(&self.line))?;
        }
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_rows() {
        let mut fb = Framebuffer::new(3, 2).unwrap();
        fb.plot_with(1, 0, 1.0, || '#');
        fb.plot_with(2, 1, 1.0, || '@');

        let mut out = Vec::new();
        FramePrinter::new().draw(&fb, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.starts_with("\x1b[1;1H"));
        assert!(out.ends_with(" # \r\n  @\r\n"));
    }

    #[test]
    fn test_draw_empty() {
        let fb = Framebuffer::empty();
        let mut out = Vec::new();
        FramePrinter::new().draw(&fb, &mut out).unwrap();
        assert_eq!(out, b"\x1b[1;1H");
    }
}
