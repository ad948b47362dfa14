//! GameView: maps a [`GameSnapshot`] and the current screen into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{get_shape, GameSnapshot, PieceSnapshot};
use crate::fb::{FrameBuffer, GlyphStyle, Rect, Rgb};
use crate::flow::{FlashPhase, Screen, ScreenState};
use crate::types::{GameMode, PieceKind, Rotation};

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 makes cells look roughly square.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render one frame into an existing framebuffer, resizing it to `viewport`.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        screen: ScreenState,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(GlyphStyle::default().glyph(' '));

        let board_w = snap.width.saturating_mul(self.cell_w);
        let board_h = snap.height.saturating_mul(self.cell_h);
        let w = board_w.saturating_add(2);
        let h = board_h.saturating_add(2);
        let frame = Rect::new(
            viewport.width.saturating_sub(w) / 2,
            match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(h) / 2,
                AnchorY::Top => 0,
            },
            w,
            h,
        );

        let bg = GlyphStyle::new(Rgb::new(80, 80, 90), BOARD_BG);
        fb.fill_rect(frame.inner(), ' ', bg);
        fb.draw_box(frame, GlyphStyle::new(Rgb::new(200, 200, 200), PANEL_BG));

        for y in 0..snap.height {
            for x in 0..snap.width {
                match snap.cell(i32::from(x), i32::from(y)) {
                    Some(kind) => self.draw_block(fb, frame, x, y, kind),
                    None => self.draw_empty_cell(fb, frame, x, y),
                }
            }
        }

        if let Some(phase) = screen.flash {
            self.draw_flash(fb, frame, snap, phase);
        }

        if screen.screen.shows_pieces() {
            let ghost = GlyphStyle::new(Rgb::new(140, 140, 140), BOARD_BG).dim();
            for &(x, y) in snap.ghost.cells.iter() {
                if let Some((x, y)) = visible(snap, x, y) {
                    self.fill_cell_rect(fb, frame, x, y, '░', ghost);
                }
            }
            for &(x, y) in snap.falling.cells.iter() {
                if let Some((x, y)) = visible(snap, x, y) {
                    self.draw_block(fb, frame, x, y, snap.falling.kind);
                }
            }
        }

        self.draw_side_panel(fb, snap, screen, viewport, frame);
        draw_overlay(fb, frame, snap.mode, screen);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, screen: ScreenState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, screen, viewport, &mut fb);
        fb
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, frame: Rect, x: u16, y: u16) {
        let style = GlyphStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim();
        self.fill_cell_rect(fb, frame, x, y, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Rect, x: u16, y: u16, kind: PieceKind) {
        let style = GlyphStyle::new(piece_color(kind), BOARD_BG).bold();
        self.fill_cell_rect(fb, frame, x, y, '█', style);
    }

    fn draw_flash(&self, fb: &mut FrameBuffer, frame: Rect, snap: &GameSnapshot, phase: FlashPhase) {
        let (ch, fg) = match phase {
            FlashPhase::Light => ('█', Rgb::new(235, 235, 235)),
            FlashPhase::Dark => ('█', Rgb::new(90, 90, 90)),
            FlashPhase::Blank => (' ', BOARD_BG),
        };
        let style = GlyphStyle::new(fg, BOARD_BG);
        for &row in snap.pending_cleared_rows.iter() {
            let Ok(y) = u16::try_from(row) else {
                continue;
            };
            if y >= snap.height {
                continue;
            }
            for x in 0..snap.width {
                self.fill_cell_rect(fb, frame, x, y, ch, style);
            }
        }
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        frame: Rect,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: GlyphStyle,
    ) {
        let px = frame.x + 1 + cell_x * self.cell_w;
        let py = frame.y + 1 + cell_y * self.cell_h;
        fb.fill_rect(Rect::new(px, py, self.cell_w, self.cell_h), ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        screen: ScreenState,
        viewport: Viewport,
        frame: Rect,
    ) {
        let panel_x = frame.right().saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = GlyphStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = GlyphStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = frame.y;
        for (name, v) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), v, value);
            y = y.saturating_add(3);
        }

        if let Some(remaining) = snap.time_remaining_ms {
            fb.put_str(panel_x, y, "TIME", label);
            let secs = (remaining / 1000.0).ceil() as u32;
            let n = fb.put_u32(panel_x, y.saturating_add(1), secs, value);
            fb.put_char(panel_x + n, y.saturating_add(1), 's', value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        self.draw_preview(fb, &snap.next, panel_x, y.saturating_add(2));

        if let Some(fps) = screen.fps {
            let y = frame.y.saturating_add(frame.h).saturating_sub(1);
            let x = fb.put_str(panel_x, y, "FPS ", value);
            fb.put_u32(x, y, fps, value);
        }
    }

    /// Next piece in spawn orientation, in a 4x4 box.
    fn draw_preview(&self, fb: &mut FrameBuffer, next: &PieceSnapshot, x: u16, y: u16) {
        let style = GlyphStyle::new(piece_color(next.kind), PANEL_BG).bold();
        for &(dx, dy) in get_shape(next.kind, Rotation::North).iter() {
            // Offsets span -1..=2 horizontally and -2..=1 vertically.
            let px = x + (dx + 1) as u16 * self.cell_w;
            let py = y + (dy + 2) as u16;
            fb.fill_rect(Rect::new(px, py, self.cell_w, 1), '█', style);
        }
    }
}

fn visible(snap: &GameSnapshot, x: i32, y: i32) -> Option<(u16, u16)> {
    if x < 0 || y < 0 || x >= i32::from(snap.width) || y >= i32::from(snap.height) {
        return None;
    }
    Some((x as u16, y as u16))
}

fn draw_overlay(fb: &mut FrameBuffer, frame: Rect, mode: GameMode, screen: ScreenState) {
    let mid = frame.y.saturating_add(frame.h / 2);
    match screen.screen {
        Screen::Title => {
            draw_centered(fb, frame, mid.saturating_sub(2), "BLOCKFALL");
            let mode_name = match mode {
                GameMode::Normal => "normal",
                GameMode::Sprint => "sprint",
            };
            draw_centered(fb, frame, mid.saturating_sub(1), mode_name);
            if screen.prompt_visible {
                draw_centered(fb, frame, mid.saturating_add(1), "Press ENTER to start");
            }
        }
        Screen::Pause => {
            draw_centered(fb, frame, mid.saturating_sub(1), "PAUSED");
            if screen.prompt_visible {
                draw_centered(fb, frame, mid.saturating_add(1), "Press ENTER to resume");
            }
        }
        Screen::LevelTransition => draw_centered(fb, frame, mid, "Next level will start soon"),
        Screen::GameOver => draw_centered(fb, frame, mid, "Game is over"),
        Screen::Play | Screen::LineClear => {}
    }
}

fn draw_centered(fb: &mut FrameBuffer, frame: Rect, y: u16, text: &str) {
    let style = GlyphStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
    fb.put_centered(frame, y, text, style);
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}
