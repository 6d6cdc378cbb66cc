//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{CellKind, Corner, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Direction, GamePhase, Point};

/// Terminal columns per grid cell; compensates for tall terminal glyphs.
pub const CELL_W: u16 = 2;

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

const FIELD_BG: Rgb = Rgb::new(20, 28, 24);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// A lightweight terminal renderer for the snake game.
pub struct GameView {
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Top-left corner of the playfield frame for a given viewport.
    pub fn frame_origin(&self, snap: &GameSnapshot, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = frame_size(snap);
        let x = viewport.width.saturating_sub(frame_w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        (x, y)
    }

    /// Render into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).cell(' '));

        let (frame_w, frame_h) = frame_size(snap);
        let (start_x, start_y) = self.frame_origin(snap, viewport);

        let border = CellStyle::new(Rgb::new(170, 190, 170), SCREEN_BG);
        fb.draw_box(start_x, start_y, frame_w, frame_h, border);

        for (p, kind) in snap.cells() {
            let [a, b] = cell_glyph(kind);
            let style = cell_style(kind);
            let (px, py) = cell_origin((start_x, start_y), p);
            fb.put_char(px, py, a, style);
            fb.put_char(px.saturating_add(1), py, b, style);
        }

        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        self.draw_side_panel(fb, snap, viewport, panel_x, start_y);

        let banner = match snap.phase {
            GamePhase::NewGame => Some("PRESS AN ARROW KEY"),
            GamePhase::Paused => Some("PAUSED"),
            GamePhase::GameOver => Some("GAME OVER"),
            GamePhase::Playing => None,
        };
        if let Some(text) = banner {
            draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, text);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        let hint = value.dim();

        let mut y = start_y;
        for (name, v) in [
            ("SCORE", snap.score),
            ("HIGH", snap.high_score),
            ("LENGTH", snap.snake.len() as u32),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, v, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "STATE", label);
        fb.put_str(panel_x, y + 1, snap.phase.as_str(), value);
        y = y.saturating_add(3);

        for line in ["arrows/wasd steer", "p pause", "n new game", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y += 1;
        }
    }
}

fn frame_size(snap: &GameSnapshot) -> (u16, u16) {
    let w = grid_extent(snap.grid_size.x)
        .saturating_mul(CELL_W)
        .saturating_add(2);
    let h = grid_extent(snap.grid_size.y).saturating_add(2);
    (w, h)
}

fn grid_extent(cells: i32) -> u16 {
    u16::try_from(cells.max(0)).unwrap_or(u16::MAX)
}

fn draw_overlay_text(
    fb: &mut FrameBuffer,
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
    text: &str,
) {
    let mid_y = start_y.saturating_add(frame_h / 2);
    let text_w = text.chars().count() as u16;
    let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
    let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
    fb.put_str(x, mid_y, text, style);
}

/// Two-column glyph for a classified cell.
///
/// Snake lines run through the left column of each cell so vertical runs,
/// corners and horizontal runs join up.
pub fn cell_glyph(kind: CellKind) -> [char; 2] {
    match kind {
        CellKind::Empty => ['·', ' '],
        CellKind::Apple => ['●', ' '],
        CellKind::Head(dir) => match dir {
            Direction::Up => ['▲', ' '],
            Direction::Down => ['▼', ' '],
            Direction::Left => ['◀', '━'],
            Direction::Right => ['━', '▶'],
        },
        CellKind::Body(dir) => {
            if dir.is_horizontal() {
                ['━', '━']
            } else {
                ['┃', ' ']
            }
        }
        // Tail direction points toward the rest of the body.
        CellKind::Tail(dir) => match dir {
            Direction::Up => ['╹', ' '],
            Direction::Down => ['╻', ' '],
            Direction::Left => ['╸', ' '],
            Direction::Right => ['╺', '━'],
        },
        CellKind::BodyTurn(corner) => corner_glyph(corner),
    }
}

fn corner_glyph(corner: Corner) -> [char; 2] {
    // A turn joins the side it was entered from with the side it leaves by.
    let entered_from = corner.incoming().opposite();
    let left = entered_from == Direction::Left || corner.outgoing() == Direction::Left;
    let top = entered_from == Direction::Up || corner.outgoing() == Direction::Up;
    match (left, top) {
        (true, true) => ['┛', ' '],
        (true, false) => ['┓', ' '],
        (false, true) => ['┗', '━'],
        (false, false) => ['┏', '━'],
    }
}

fn cell_style(kind: CellKind) -> CellStyle {
    match kind {
        CellKind::Empty => CellStyle::new(Rgb::new(70, 90, 80), FIELD_BG).dim(),
        CellKind::Apple => CellStyle::new(Rgb::new(230, 60, 60), FIELD_BG).bold(),
        CellKind::Head(_) => CellStyle::new(Rgb::new(170, 255, 140), FIELD_BG).bold(),
        CellKind::Body(_) | CellKind::BodyTurn(_) | CellKind::Tail(_) => {
            CellStyle::new(Rgb::new(90, 200, 90), FIELD_BG)
        }
    }
}

/// Screen column/row of a grid cell's left column.
pub fn cell_origin(frame_origin: (u16, u16), p: Point) -> (u16, u16) {
    (
        frame_origin
            .0
            .saturating_add(1)
            .saturating_add(grid_extent(p.x).saturating_mul(CELL_W)),
        frame_origin.1.saturating_add(1).saturating_add(grid_extent(p.y)),
    )
}
