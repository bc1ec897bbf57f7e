//! Terminal front end for the holo renderer
use anyhow::Context;
use crossterm::{
    cursor, execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType},
};
use holo_core::{Config, Framebuffer, Scene, TextSource};
use log::{error, info};
use std::io::{stdout, Write};
use std::time::{Duration, Instant};

pub mod cli;
pub mod clock;
pub mod logger;
pub mod renderer;
pub mod signals;

pub use renderer::FramePrinter;
pub use signals::LoopSignals;

/// Frame rate cap
pub const TARGET_FPS: u32 = 30;

/// Main application struct for the terminal animation
pub struct TerminalApp {
    scene: Scene,
    source: TextSource,
    framebuffer: Framebuffer,
    printer: FramePrinter,
    signals: LoopSignals,
    frame_count: u64,
}

impl TerminalApp {
    pub fn new(config: &Config) -> Self {
        Self {
            scene: Scene::new(config),
            source: config.text_source(),
            framebuffer: Framebuffer::empty(),
            printer: FramePrinter::new(),
            signals: LoopSignals::new(),
            frame_count: 0,
        }
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Run until interrupted, restoring the terminal afterwards.
    ///
    /// Ctrl-C arrives as a key event in raw mode. A SIGINT sent from outside
    /// the terminal is not intercepted and skips the restore.
    pub fn run(&mut self) -> anyhow::Result<()> {
        let mut out = stdout();
        terminal::enable_raw_mode().context("cannot enable raw mode")?;
        execute!(out, cursor::Hide, Clear(ClearType::All))?;

        let result = self.main_loop(&mut out);
        if let Err(e) = &result {
            error!("render loop stopped: {e:#}");
        }

        // Cleanup
        let restored = execute!(out, cursor::Show, Print("\r\n"));
        terminal::disable_raw_mode()?;
        restored?;

        // Buffers are released here rather than at process exit
        self.framebuffer = Framebuffer::empty();
        info!("stopped after {} frames", self.frame_count);
        result
    }

    fn main_loop<W: Write>(&mut self, out: &mut W) -> anyhow::Result<()> {
        let target_frame_time = Duration::from_secs(1) / TARGET_FPS;

        loop {
            self.signals.poll().context("cannot read terminal events")?;
            if !self.signals.should_continue() {
                return Ok(());
            }

            let text = clock::frame_text(&self.source, &chrono::Local::now());
            let frame_start = Instant::now();

            if self.signals.take_resize() {
                let (columns, rows) = terminal::size().context("cannot query terminal size")?;
                // One row short so the final line break does not scroll
                let (width, height) = (columns as usize, rows.saturating_sub(1) as usize);
                self.scene
                    .resize(&mut self.framebuffer, width, height, text.chars().count())
                    .context("cannot resize frame buffers")?;
                info!("screen {width}x{height}, zoom {:.3}", self.scene.zoom());
                queue!(out, Clear(ClearType::All))?;
            }

            self.scene.render(&text, &mut self.framebuffer);
            self.printer.draw(&self.framebuffer, out)?;
            self.scene.advance();
            self.frame_count += 1;

            // Frame timing
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }
        }
    }

    /// Render one frame at a fixed size into `out`, without touching terminal modes
    pub fn snapshot<W: Write>(&mut self, out: &mut W, width: usize, height: usize) -> anyhow::Result<()> {
        let text = clock::frame_text(&self.source, &chrono::Local::now());
        self.scene
            .resize(&mut self.framebuffer, width, height, text.chars().count())?;
        self.scene.render(&text, &mut self.framebuffer);
        for row in self.framebuffer.rows() {
            writeln!(out, "{}", row.iter().collect::<String>())?;
        }
        self.frame_count += 1;
        Ok(())
    }
}
