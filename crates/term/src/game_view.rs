//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, LayoutConfig, Phase, PositionDescriptor, TileFace};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{CompletionReason, Direction, PairKey};

/// Rows reserved above the board for the title and status line.
const HEADER_ROWS: u16 = 3;

const BACKGROUND: Rgb = Rgb::new(20, 24, 32);
const PLENTY_TIME: Rgb = Rgb::new(60, 200, 90);
const LITTLE_TIME: Rgb = Rgb::new(230, 70, 60);
const CURSOR: Rgb = Rgb::new(250, 210, 60);

const FACE_GLYPHS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789abcdefghijklmnopqrstuvwxyz";

const FACE_COLORS: [Rgb; 8] = [
    Rgb::new(80, 220, 220),
    Rgb::new(240, 220, 80),
    Rgb::new(200, 120, 220),
    Rgb::new(100, 220, 120),
    Rgb::new(220, 80, 80),
    Rgb::new(80, 120, 220),
    Rgb::new(255, 165, 0),
    Rgb::new(230, 230, 230),
];

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

/// Texts shown around the board and in the end-of-game dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewLabels {
    pub game_title: String,
    pub player_name: String,
    pub no_time_title: String,
    pub no_time_description: String,
    pub level_complete_title: String,
    pub level_complete_description: String,
}

impl Default for ViewLabels {
    fn default() -> Self {
        Self {
            game_title: "Memory Duel".to_string(),
            player_name: "Player".to_string(),
            no_time_title: "Time is up".to_string(),
            no_time_description: "You ran out of time!".to_string(),
            level_complete_title: "Level complete".to_string(),
            level_complete_description: "You found every pair!".to_string(),
        }
    }
}

/// Terminal renderer for the memory board.
pub struct GameView {
    layout: LayoutConfig,
    labels: ViewLabels,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(LayoutConfig::default(), ViewLabels::default())
    }
}

impl GameView {
    pub fn new(layout: LayoutConfig, labels: ViewLabels) -> Self {
        Self { layout, labels }
    }

    pub fn labels(&self) -> &ViewLabels {
        &self.labels
    }

    /// Geometry of the board area for a given snapshot and viewport.
    pub fn positions(&self, snap: &GameSnapshot, viewport: Viewport) -> PositionDescriptor {
        PositionDescriptor::new(snap.rows, snap.columns, self.layout).with_surface(
            viewport.width as i32,
            viewport.height.saturating_sub(HEADER_ROWS) as i32,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(Rgb::new(200, 200, 200), BACKGROUND).cell(' '));

        self.draw_header(fb, snap, viewport);

        let pd = self.positions(snap, viewport);
        let top = HEADER_ROWS as i32;
        for row in 1..=snap.rows {
            for column in 1..=snap.columns {
                self.draw_tile(fb, snap, &pd, top, row, column);
            }
        }
        self.draw_player(fb, snap, &pd, top);

        if let Phase::Complete(reason) = snap.phase {
            self.draw_dialog(fb, viewport, reason);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        let center = viewport.width as i32 / 2;
        let title = CellStyle::new(Rgb::new(240, 240, 240), BACKGROUND).bold();
        fb.put_str_centered(center, 0, &self.labels.game_title, title);

        let label = CellStyle::new(Rgb::new(160, 160, 170), BACKGROUND);
        let time_color = if snap.critical { LITTLE_TIME } else { PLENTY_TIME };
        let time = CellStyle::new(time_color, BACKGROUND).bold();

        let seconds = snap.remaining_seconds.max(0);
        let status = format!(
            "{}   {} Seconds   Pairs left {}",
            self.labels.player_name,
            seconds,
            snap.pairs_left()
        );
        let x = center - status.chars().count() as i32 / 2;
        fb.put_str(x, 1, &status, label);

        // Re-draw the time in its warning color over the plain status text.
        let time_x = x + self.labels.player_name.chars().count() as i32 + 3;
        fb.put_str(time_x, 1, &format!("{} Seconds", seconds), time);
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        pd: &PositionDescriptor,
        top: i32,
        row: u8,
        column: u8,
    ) {
        let Some(tile) = snap.tile_at(row, column) else {
            return;
        };
        let rect = pd.tile_rect(row, column);
        let (x, y) = (rect.x, rect.y + top);

        match tile.face {
            TileFace::Hidden => {
                let back = CellStyle::new(Rgb::new(90, 90, 110), Rgb::new(45, 45, 60));
                fb.fill_rect(x, y, rect.width, rect.height, '░', back);
            }
            TileFace::Shown | TileFace::Solved => {
                let color = face_color(tile.key);
                let style = if tile.face == TileFace::Shown {
                    CellStyle::new(Rgb::new(0, 0, 0), color).bold()
                } else {
                    CellStyle::new(color, Rgb::new(35, 35, 45)).dim()
                };
                fb.fill_rect(x, y, rect.width, rect.height, ' ', style);
                let (gx, gy) = pd.tile_image(row, column);
                fb.put_char(gx, gy + top, face_glyph(tile.key), style);
            }
        }
    }

    fn draw_player(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, pd: &PositionDescriptor, top: i32) {
        let player = snap.player;
        if snap.tile_at(player.row, player.column).is_none() {
            return;
        }
        let rect = pd.tile_rect(player.row, player.column);
        // Dimmed while the session holds input (reveal pause, game over).
        let style = if snap.phase.playable() {
            CellStyle::new(CURSOR, BACKGROUND).bold()
        } else {
            CellStyle::new(CURSOR, BACKGROUND).dim()
        };
        // Outline sits in the padding gutter around the tile.
        fb.draw_box(rect.x - 1, rect.y + top - 1, rect.width + 2, rect.height + 2, style);

        let (px, py) = pd.player(player.row, player.column);
        let (dx, dy) = orientation_offset(player.orientation, rect.width, rect.height);
        fb.put_char(px + dx, py + top + dy, orientation_arrow(player.orientation), style);
    }

    fn draw_dialog(&self, fb: &mut FrameBuffer, viewport: Viewport, reason: CompletionReason) {
        let (title, description, accent) = match reason {
            CompletionReason::NoTime => (
                &self.labels.no_time_title,
                &self.labels.no_time_description,
                LITTLE_TIME,
            ),
            CompletionReason::LevelComplete => (
                &self.labels.level_complete_title,
                &self.labels.level_complete_description,
                PLENTY_TIME,
            ),
        };
        let hint = "Press q to quit";

        let text_w = [title, description]
            .iter()
            .map(|s| s.chars().count())
            .chain(std::iter::once(hint.len()))
            .max()
            .unwrap_or(0) as i32;
        let w = text_w + 4;
        let h = 7;
        let x = (viewport.width as i32 - w) / 2;
        let y = (viewport.height as i32 - h) / 2;
        let center = x + w / 2;

        let panel = CellStyle::new(Rgb::new(230, 230, 230), Rgb::new(10, 10, 14));
        fb.fill_rect(x, y, w, h, ' ', panel);
        fb.draw_box(x, y, w, h, CellStyle { fg: accent, ..panel });
        fb.put_str_centered(center, y + 1, title, CellStyle { fg: accent, ..panel }.bold());
        fb.put_str_centered(center, y + 3, description, panel);
        fb.put_str_centered(center, y + 5, hint, panel.dim());
    }
}

fn face_glyph(key: PairKey) -> char {
    let i = (key as usize).saturating_sub(1) % FACE_GLYPHS.len();
    FACE_GLYPHS[i] as char
}

fn face_color(key: PairKey) -> Rgb {
    FACE_COLORS[key as usize % FACE_COLORS.len()]
}

fn orientation_arrow(orientation: Direction) -> char {
    match orientation {
        Direction::Left => '◀',
        Direction::Up => '▲',
        Direction::Right => '▶',
        Direction::Down => '▼',
    }
}

/// Push the arrow from the anchor towards the facing edge of the tile.
fn orientation_offset(orientation: Direction, width: i32, height: i32) -> (i32, i32) {
    let (dr, dc) = orientation.delta();
    (dc as i32 * ((width - 1) / 2), dr as i32 * ((height - 1) / 2))
}
