//! GameView: maps a render snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O) and unit-testable. The engine's rows run
//! bottom to top while terminal rows run top to bottom, so the view flips
//! the row axis when placing cells.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{FIELD_HEIGHT, FIELD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the play field and active piece.
pub struct GameView {
    /// Field cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers reuse one framebuffer across frames; it is resized to the
    /// viewport and fully overwritten.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default());

        let field_w = FIELD_WIDTH as u16 * self.cell_w;
        let field_h = FIELD_HEIGHT as u16;
        let frame_w = field_w + 2;
        let frame_h = field_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };
        let empty = CellStyle {
            fg: Rgb::new(70, 70, 80),
            ..CellStyle::default()
        };
        let locked = CellStyle {
            fg: Rgb::new(160, 160, 170),
            ..CellStyle::default()
        };
        let active = CellStyle {
            fg: Rgb::new(240, 240, 250),
            bold: true,
            ..CellStyle::default()
        };

        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Locked field cells, bottom row at the bottom of the frame.
        for y in 0..FIELD_HEIGHT {
            for x in 0..FIELD_WIDTH {
                let (sx, sy) = self.cell_origin(start_x, start_y, x, y);
                if snap.is_occupied(x, y) {
                    fb.fill_rect(sx, sy, self.cell_w, 1, '█', locked);
                } else {
                    fb.put(sx, sy, '·', empty);
                }
            }
        }

        // Active piece at its floored row. Cells outside the field (the
        // engine allows overlap quirks) are simply not drawn.
        for (m, n) in snap.active.matrix.filled_cells() {
            let x = snap.active.x + n as i32;
            let y = snap.active.row() + m as i32;
            if x >= 0 && x < FIELD_WIDTH && y >= 0 && y < FIELD_HEIGHT {
                let (sx, sy) = self.cell_origin(start_x, start_y, x, y);
                fb.fill_rect(sx, sy, self.cell_w, 1, '█', active);
            }
        }

        fb.put_str(
            start_x,
            start_y + frame_h,
            "←/→ move · ↑ rotate · ↓ drop · q quit",
            empty,
        );
    }

    /// Top-left terminal coordinate of a field cell.
    fn cell_origin(&self, start_x: u16, start_y: u16, x: i32, y: i32) -> (u16, u16) {
        let sx = start_x + 1 + x as u16 * self.cell_w;
        let sy = start_y + 1 + (FIELD_HEIGHT - 1 - y) as u16;
        (sx, sy)
    }

    fn draw_border(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        style: CellStyle,
    ) {
        for dx in 1..w.saturating_sub(1) {
            fb.put(x + dx, y, '─', style);
            fb.put(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h.saturating_sub(1) {
            fb.put(x, y + dy, '│', style);
            fb.put(x + w - 1, y + dy, '│', style);
        }
        fb.put(x, y, '┌', style);
        fb.put(x + w - 1, y, '┐', style);
        fb.put(x, y + h - 1, '└', style);
        fb.put(x + w - 1, y + h - 1, '┘', style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Exact-fit viewport: the frame lands at (0, 0).
    const VIEW_W: u16 = FIELD_WIDTH as u16 * 2 + 2;
    const VIEW_H: u16 = FIELD_HEIGHT as u16 + 3;

    fn rendered(snap: &GameSnapshot) -> FrameBuffer {
        let view = GameView::default();
        let mut fb = FrameBuffer::new(VIEW_W, VIEW_H);
        view.render_into(snap, Viewport::new(VIEW_W, VIEW_H), &mut fb);
        fb
    }

    #[test]
    fn test_border_corners() {
        let fb = rendered(&GameSnapshot::default());
        assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
        assert_eq!(fb.get(VIEW_W - 1, 0).unwrap().ch, '┐');
        assert_eq!(fb.get(0, FIELD_HEIGHT as u16 + 1).unwrap().ch, '└');
    }

    #[test]
    fn test_locked_cell_draws_flipped() {
        let mut snap = GameSnapshot::default();
        snap.grid[0][0] = true; // field (0, 0): bottom-left

        let fb = rendered(&snap);
        // Bottom field row maps to the lowest interior terminal row.
        let sy = FIELD_HEIGHT as u16; // start_y 0 + 1 + (H-1-0)
        assert_eq!(fb.get(1, sy).unwrap().ch, '█');
        assert_eq!(fb.get(2, sy).unwrap().ch, '█');
        // Top-left interior stays empty.
        assert_eq!(fb.get(1, 1).unwrap().ch, '·');
    }

    #[test]
    fn test_active_piece_draws_at_floored_row() {
        let snap = GameSnapshot::default(); // O piece at spawn (5, 13)

        let fb = rendered(&snap);
        // Field cell (5, 13) -> terminal (1 + 5*2, 1 + (17 - 13)).
        let cell = fb.get(11, 5).unwrap();
        assert_eq!(cell.ch, '█');
        assert!(cell.style.bold);
        // Row 14 (one above the piece bottom) is also filled for the O.
        assert_eq!(fb.get(11, 4).unwrap().ch, '█');
        // Row 15 is not.
        assert_eq!(fb.get(11, 3).unwrap().ch, '·');
    }
}
