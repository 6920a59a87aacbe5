/// Rendering layer: all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only scales the
/// logical field onto the terminal grid and translates state into terminal
/// commands.

use std::io::Write;

use bush_game::entities::{Bush, Drawable, Enemy, Fruit, GameState, GameStatus, Player};
use bush_game::geometry::Rect;
use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD: Color = Color::White;
const C_BUSH: Color = Color::DarkGreen;
const C_FRUIT: Color = Color::Yellow;
const C_PLAYER: Color = Color::Red;
const C_HIDDEN_MARK: Color = Color::White;
const C_ENEMY: Color = Color::Blue;
const C_HINT: Color = Color::DarkGrey;

const HINT: &str = "Move: Arrows/WASD  •  Hide in bushes  •  Collect fruits  •  P: Pause  Q: Quit";

// ── Field → terminal mapping ──────────────────────────────────────────────────

/// Maps logical field units onto the block of terminal cells inside the border.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    left: u16,
    top: u16,
    cols: u16,
    rows: u16,
    field_width: i32,
    field_height: i32,
}

/// Half-open range of terminal cells covered by a rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellSpan {
    pub col0: u16,
    pub row0: u16,
    pub col1: u16,
    pub row1: u16,
}

impl Viewport {
    /// Row 0 is the HUD, row 1 and `height - 2` are the border, the last row
    /// is the controls hint.
    pub fn for_terminal(width: u16, height: u16, field_width: i32, field_height: i32) -> Self {
        Viewport {
            left: 1,
            top: 2,
            cols: width.saturating_sub(2).max(1),
            rows: height.saturating_sub(4).max(1),
            field_width: field_width.max(1),
            field_height: field_height.max(1),
        }
    }

    fn col(&self, x: i32) -> u16 {
        let x = x.clamp(0, self.field_width) as i64;
        let c = x * self.cols as i64 / self.field_width as i64;
        self.left + (c as u16).min(self.cols)
    }

    fn row(&self, y: i32) -> u16 {
        let y = y.clamp(0, self.field_height) as i64;
        let r = y * self.rows as i64 / self.field_height as i64;
        self.top + (r as u16).min(self.rows)
    }

    /// Cells covered by `rect`; always at least one cell wide and tall and
    /// never past the border.
    pub fn span(&self, rect: &Rect) -> CellSpan {
        let max_col = self.left + self.cols;
        let max_row = self.top + self.rows;
        let col0 = self.col(rect.left()).min(max_col - 1);
        let row0 = self.row(rect.top()).min(max_row - 1);
        let col1 = self.col(rect.right()).clamp(col0 + 1, max_col);
        let row1 = self.row(rect.bottom()).clamp(row0 + 1, max_row);
        CellSpan { col0, row0, col1, row1 }
    }

    /// Cell under the centre of `rect`.
    pub fn center(&self, rect: &Rect) -> (u16, u16) {
        let (x, y) = rect.center();
        (
            self.col(x).min(self.left + self.cols - 1),
            self.row(y).min(self.top + self.rows - 1),
        )
    }
}

/// Whether cell `(c, r)` of `span` falls inside the ellipse inscribed in it.
pub fn in_ellipse(span: &CellSpan, c: u16, r: u16) -> bool {
    let w = (span.col1 - span.col0) as f32;
    let h = (span.row1 - span.row0) as f32;
    let dx = (c - span.col0) as f32 + 0.5 - w / 2.0;
    let dy = (r - span.row0) as f32 + 0.5 - h / 2.0;
    (dx / (w / 2.0)).powi(2) + (dy / (h / 2.0)).powi(2) <= 1.0
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let (width, height) = terminal::size()?;
    let view = Viewport::for_terminal(
        width,
        height,
        state.config.field_width,
        state.config.field_height,
    );

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, width, height)?;

    for drawable in state.drawables() {
        match drawable {
            Drawable::Bush(bush) => draw_bush(out, &view, bush)?,
            Drawable::Fruit(fruit) => draw_fruit(out, &view, fruit)?,
            Drawable::Player(player) => draw_player(out, &view, player)?,
            Drawable::Enemy(enemy) => draw_enemy(out, &view, enemy)?,
        }
    }

    draw_hud(out, state)?;
    draw_controls_hint(out, height)?;

    match state.status {
        GameStatus::Paused => draw_banner(out, width, height, &[("PAUSED - Press P to resume", C_HUD)])?,
        GameStatus::GameOver => draw_banner(
            out,
            width,
            height,
            &[("GAME OVER", Color::Red), ("Press R to restart", C_HUD)],
        )?,
        GameStatus::Running => {}
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, width: u16, height: u16) -> std::io::Result<()> {
    let w = width as usize;
    let h = height;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1: top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2: bottom bar
    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!(
        "Score: {:<6}  Lives: {}",
        state.player.score,
        state.player.lives.max(0)
    )))?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn fill<W: Write>(out: &mut W, span: &CellSpan, glyph: &str) -> std::io::Result<()> {
    let row_text = glyph.repeat((span.col1 - span.col0) as usize);
    for row in span.row0..span.row1 {
        out.queue(cursor::MoveTo(span.col0, row))?;
        out.queue(Print(&row_text))?;
    }
    Ok(())
}

fn draw_bush<W: Write>(out: &mut W, view: &Viewport, bush: &Bush) -> std::io::Result<()> {
    let span = view.span(&bush.rect);
    out.queue(style::SetForegroundColor(C_BUSH))?;
    for row in span.row0..span.row1 {
        for col in span.col0..span.col1 {
            if in_ellipse(&span, col, row) {
                out.queue(cursor::MoveTo(col, row))?;
                out.queue(Print("▒"))?;
            }
        }
    }
    Ok(())
}

fn draw_fruit<W: Write>(out: &mut W, view: &Viewport, fruit: &Fruit) -> std::io::Result<()> {
    let (col, row) = view.center(&fruit.rect);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_FRUIT))?;
    out.queue(Print("●"))?;
    Ok(())
}

fn draw_player<W: Write>(out: &mut W, view: &Viewport, player: &Player) -> std::io::Result<()> {
    let span = view.span(&player.rect);
    out.queue(style::SetForegroundColor(C_PLAYER))?;
    fill(out, &span, "█")?;

    // Hidden: white marker in the middle of the avatar
    if player.hidden {
        let (col, row) = view.center(&player.rect);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(C_HIDDEN_MARK))?;
        out.queue(style::SetBackgroundColor(C_PLAYER))?;
        out.queue(Print("◌"))?;
        out.queue(style::SetBackgroundColor(Color::Reset))?;
    }
    Ok(())
}

fn draw_enemy<W: Write>(out: &mut W, view: &Viewport, enemy: &Enemy) -> std::io::Result<()> {
    let span = view.span(&enemy.rect);
    out.queue(style::SetForegroundColor(C_ENEMY))?;
    fill(out, &span, "█")
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, height: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(HINT))?;
    Ok(())
}

// ── Pause / game-over overlay ─────────────────────────────────────────────────

fn draw_banner<W: Write>(
    out: &mut W,
    width: u16,
    height: u16,
    lines: &[(&str, Color)],
) -> std::io::Result<()> {
    let cx = width / 2;
    let start_row = (height / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_field_maps_onto_inner_area() {
        let view = Viewport::for_terminal(82, 34, 800, 600);
        let span = view.span(&Rect::new(0, 0, 800, 600));
        assert_eq!(span, CellSpan { col0: 1, row0: 2, col1: 81, row1: 32 });
    }

    #[test]
    fn tiny_rect_still_covers_one_cell() {
        let view = Viewport::for_terminal(82, 34, 800, 600);
        let span = view.span(&Rect::new(400, 300, 1, 1));
        assert_eq!(span.col1 - span.col0, 1);
        assert_eq!(span.row1 - span.row0, 1);
    }

    #[test]
    fn rect_past_field_edge_stays_inside_border() {
        let view = Viewport::for_terminal(82, 34, 800, 600);
        let span = view.span(&Rect::new(790, 590, 30, 30));
        assert!(span.col1 <= 81);
        assert!(span.row1 <= 32);
        assert!(span.col0 < span.col1);
    }

    #[test]
    fn ellipse_contains_centre_but_not_corner() {
        let span = CellSpan { col0: 10, row0: 10, col1: 20, row1: 16 };
        assert!(in_ellipse(&span, 15, 13));
        assert!(!in_ellipse(&span, 10, 10));
    }
}
