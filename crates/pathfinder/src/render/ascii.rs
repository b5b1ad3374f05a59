//! Terminal renderer.

use super::{CloseHandle, Pacer, Renderer};
use crate::grid::{Position, Snapshot};
use std::io::Write;

const EMPTY: char = '.';
const ACTOR: char = '@';
const TARGET: char = '*';

/// Draw a snapshot as text: a score line followed by one line per cell row.
pub fn draw_frame(snapshot: &Snapshot) -> String {
    let cols = snapshot.columns().max(0) as usize;
    let rows = snapshot.rows().max(0) as usize;

    let mut out = String::with_capacity((cols + 1) * (rows + 1) + 16);
    out.push_str(&format!("Score: {}\n", snapshot.score));

    for row in 0..rows as i32 {
        for col in 0..cols as i32 {
            let cell = Position::from_cell(col, row);
            let ch = if cell == snapshot.actor {
                ACTOR
            } else if cell == snapshot.target {
                TARGET
            } else {
                EMPTY
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

/// Renderer that writes text frames to any writer at a fixed tick rate.
pub struct AsciiRenderer<W: Write + Send> {
    out: W,
    pacer: Pacer,
    close: CloseHandle,
    clear_screen: bool,
    frames: u64,
}

impl AsciiRenderer<std::io::Stdout> {
    /// Render to stdout
    pub fn stdout(tick_rate: u32) -> Self {
        Self::new(std::io::stdout(), tick_rate)
    }
}

impl<W: Write + Send> AsciiRenderer<W> {
    pub fn new(out: W, tick_rate: u32) -> Self {
        Self {
            out,
            pacer: Pacer::new(tick_rate),
            close: CloseHandle::new(),
            clear_screen: false,
            frames: 0,
        }
    }

    /// Clear the terminal before each frame
    pub fn with_clear_screen(mut self, enabled: bool) -> Self {
        self.clear_screen = enabled;
        self
    }

    /// Handle other threads can use to request a close
    pub fn close_handle(&self) -> CloseHandle {
        self.close.clone()
    }

    /// Frames presented so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Get a reference to the underlying writer
    pub fn writer(&self) -> &W {
        &self.out
    }
}

impl<W: Write + Send> Renderer for AsciiRenderer<W> {
    fn poll_close(&mut self) -> bool {
        self.close.take()
    }

    fn present(&mut self, snapshot: &Snapshot) {
        let frame = draw_frame(snapshot);
        let prefix = if self.clear_screen { "\x1B[2J\x1B[H" } else { "" };

        if let Err(e) = write!(self.out, "{}{}", prefix, frame).and_then(|_| self.out.flush()) {
            tracing::warn!(error = %e, "Failed to write frame");
        }
        self.frames += 1;
        self.pacer.tick();
    }

    fn close(&mut self) {
        if let Err(e) = self.out.flush() {
            tracing::warn!(error = %e, "Failed to flush renderer output");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Direction;

    fn snapshot() -> Snapshot {
        Snapshot {
            actor: Position::new(20, 0),
            target: Position::new(40, 20),
            direction: Direction::Right,
            score: 3,
            step_count: 5,
            width: 80,
            height: 40,
        }
    }

    #[test]
    fn test_draw_frame_layout() {
        let frame = draw_frame(&snapshot());
        assert_eq!(frame, "Score: 3\n.@..\n..*.\n");
    }

    #[test]
    fn test_present_writes_frames() {
        let mut renderer = AsciiRenderer::new(Vec::new(), 0);
        renderer.present(&snapshot());
        renderer.present(&snapshot());

        let text = String::from_utf8(renderer.writer().clone()).unwrap();
        assert_eq!(text.matches("Score: 3").count(), 2);
        assert_eq!(renderer.frames(), 2);
    }

    #[test]
    fn test_clear_screen_prefix() {
        let mut renderer = AsciiRenderer::new(Vec::new(), 0).with_clear_screen(true);
        renderer.present(&snapshot());
        assert!(renderer.writer().starts_with(b"\x1B[2J\x1B[H"));
    }

    #[test]
    fn test_poll_close_drains_request() {
        let mut renderer = AsciiRenderer::new(Vec::new(), 0);
        assert!(!renderer.poll_close());

        renderer.close_handle().request();
        assert!(renderer.poll_close());
        assert!(!renderer.poll_close());
    }
}
