//! GameView: lays a `GameSnapshot` out onto a framebuffer.
//!
//! Pure, no I/O. Board dimensions come from the snapshot, so any configured
//! board size renders without changes here.

use crate::core::{GameSnapshot, PieceSnapshot, ShapeMask};
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::PieceKind;

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

const WELL_BG: Rgb = Rgb::new(24, 24, 32);
const PANEL_GAP: u16 = 2;
const PANEL_MIN_W: u16 = 10;

/// Places board cells `cell_w` columns wide, with a one-glyph border.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    cell_w: u16,
    show_ghost: bool,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps blocks roughly square.
        Self {
            cell_w: 2,
            show_ghost: true,
        }
    }
}

/// Top-left corner of the well's interior, in screen coordinates.
#[derive(Debug, Clone, Copy)]
struct Origin {
    x: u16,
    y: u16,
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            ..Self::default()
        }
    }

    pub fn with_ghost(mut self, show: bool) -> Self {
        self.show_ghost = show;
        self
    }

    /// Screen size of the bordered well for a `width x height` board.
    pub fn well_size(&self, width: u8, height: u8) -> (u16, u16) {
        (width as u16 * self.cell_w + 2, height as u16 + 2)
    }

    /// Render into a caller-owned buffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        let (frame_w, frame_h) = self.well_size(snap.width, snap.height);
        let panel_w = PANEL_GAP + PANEL_MIN_W;
        let left = viewport.width.saturating_sub(frame_w + panel_w) / 2;
        let top = viewport.height.saturating_sub(frame_h) / 2;
        let origin = Origin {
            x: left + 1,
            y: top + 1,
        };

        draw_border(fb, left, top, frame_w, frame_h, Style::default());
        fb.fill_rect(
            origin.x,
            origin.y,
            snap.width as u16 * self.cell_w,
            snap.height as u16,
            ' ',
            Style::new(WELL_BG, WELL_BG),
        );

        for y in 0..snap.height {
            for x in 0..snap.width {
                if let Some(kind) = PieceKind::from_code(snap.cell(x, y)) {
                    self.block(fb, origin, x as i8, y as i8, kind, '█');
                } else {
                    let dot = Style::new(Rgb::new(70, 70, 84), WELL_BG);
                    self.paint(fb, origin, x as i8, y as i8, '·', dot, snap);
                }
            }
        }

        if !snap.game_over() {
            if let Some(ghost_y) = self.show_ghost.then_some(snap.ghost_y).flatten() {
                if ghost_y != snap.current.y {
                    let fg = Rgb::from(snap.current.kind.color()).quarter(2);
                    let style = Style::new(fg, WELL_BG);
                    for (dx, dy) in snap.current.shape.minos() {
                        let (x, y) = (snap.current.x + dx, ghost_y + dy);
                        self.paint(fb, origin, x, y, '░', style, snap);
                    }
                }
            }
            self.piece(fb, origin, &snap.current, snap);
        }

        self.side_panel(fb, snap, viewport, left + frame_w + PANEL_GAP, top);

        let overlay = if snap.paused() {
            Some("PAUSED")
        } else if snap.game_over() {
            Some("GAME OVER")
        } else {
            None
        };
        if let Some(text) = overlay {
            let w = text.chars().count() as u16;
            let x = left + frame_w.saturating_sub(w) / 2;
            let style = Style::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
            fb.put_str(x, top + frame_h / 2, text, style);
        }
    }

    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn piece(&self, fb: &mut FrameBuffer, origin: Origin, piece: &PieceSnapshot, snap: &GameSnapshot) {
        for (dx, dy) in piece.shape.minos() {
            let (x, y) = (piece.x + dx, piece.y + dy);
            // Rows above the top are hidden.
            if y >= 0 && x >= 0 && x < snap.width as i8 {
                self.block(fb, origin, x, y, piece.kind, '█');
            }
        }
    }

    fn block(&self, fb: &mut FrameBuffer, origin: Origin, x: i8, y: i8, kind: PieceKind, ch: char) {
        let style = Style::new(Rgb::from(kind.color()), WELL_BG);
        let px = origin.x + x as u16 * self.cell_w;
        fb.fill_rect(px, origin.y + y as u16, self.cell_w, 1, ch, style);
    }

    #[allow(clippy::too_many_arguments)]
    fn paint(
        &self,
        fb: &mut FrameBuffer,
        origin: Origin,
        x: i8,
        y: i8,
        ch: char,
        style: Style,
        snap: &GameSnapshot,
    ) {
        if x < 0 || y < 0 || x >= snap.width as i8 || y >= snap.height as i8 {
            return;
        }
        let px = origin.x + x as u16 * self.cell_w;
        fb.fill_rect(px, origin.y + y as u16, self.cell_w, 1, ch, style);
    }

    fn side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, x: u16, top: u16) {
        if x.saturating_add(PANEL_MIN_W) > viewport.width {
            return;
        }
        let label = Style::default().bold();
        let value = Style::default();

        let mut y = top;
        for (name, n) in [("SCORE", snap.score), ("LINES", snap.lines)] {
            fb.put_str(x, y, name, label);
            fb.put_u32(x, y + 1, n, value);
            y += 3;
        }

        fb.put_str(x, y, "NEXT", label);
        y += 1;
        self.preview(fb, x, y, snap.next.shape, snap.next.kind);
    }

    fn preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, shape: ShapeMask, kind: PieceKind) {
        let style = Style::new(Rgb::from(kind.color()), Rgb::new(0, 0, 0));
        for (dx, dy) in shape.minos() {
            let px = x + dx as u16 * self.cell_w;
            fb.fill_rect(px, y + dy as u16, self.cell_w, 1, '█', style);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: Style) {
    if w < 2 || h < 2 {
        return;
    }
    let (r, b) = (x + w - 1, y + h - 1);
    fb.put(x, y, '┌', style);
    fb.put(r, y, '┐', style);
    fb.put(x, b, '└', style);
    fb.put(r, b, '┘', style);
    for dx in x + 1..r {
        fb.put(dx, y, '─', style);
        fb.put(dx, b, '─', style);
    }
    for dy in y + 1..b {
        fb.put(x, dy, '│', style);
        fb.put(r, dy, '│', style);
    }
}
