/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// duel.  No game logic is performed; world coordinates are only scaled onto
/// terminal cells and turned into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use spell_duel::entities::{DuelState, Outcome, Rect};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD: Color = Color::White;
const C_PLAYER: Color = Color::Blue;
const C_ENEMY: Color = Color::Red;
const C_PROJECTILE: Color = Color::Magenta; // purple
const C_HINT: Color = Color::DarkGrey;

const HINT: &str = "↑ ↓ / W S : Move   SPACE : Cast   Q : Quit";

// ── World → terminal mapping ─────────────────────────────────────────────────

/// Maps the world field onto the bordered interior of the terminal
/// (columns `1..width-1`, rows `2..height-2`).
struct Viewport {
    cols: u16,
    rows: u16,
    scale_x: f32,
    scale_y: f32,
}

impl Viewport {
    fn new(state: &DuelState, width: u16, height: u16) -> Self {
        let cols = width.saturating_sub(2).max(1);
        let rows = height.saturating_sub(4).max(1);
        Self {
            cols,
            rows,
            scale_x: cols as f32 / state.field.width,
            scale_y: rows as f32 / state.field.height,
        }
    }

    /// `(col, row, cells_wide, cells_high)`, never smaller than one cell and
    /// never outside the interior.
    fn cells(&self, rect: &Rect) -> (u16, u16, u16, u16) {
        let col = ((rect.x * self.scale_x) as i32).clamp(0, self.cols as i32 - 1) as u16;
        let row = ((rect.y * self.scale_y) as i32).clamp(0, self.rows as i32 - 1) as u16;
        let w = ((rect.width * self.scale_x).round() as u16)
            .max(1)
            .min(self.cols - col);
        let h = ((rect.height * self.scale_y).round() as u16)
            .max(1)
            .min(self.rows - row);
        (col + 1, row + 2, w, h)
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame onto a `width` × `height` terminal.
pub fn render<W: Write>(
    out: &mut W,
    state: &DuelState,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let view = Viewport::new(state, width, height);

    draw_border(out, width, height)?;
    draw_hud(out, state, width)?;

    draw_rect(out, &view, &state.player.body, C_PLAYER, "█")?;
    draw_rect(out, &view, &state.enemy.body, C_ENEMY, "█")?;
    for projectile in &state.player.projectiles {
        draw_rect(out, &view, &projectile.body, C_PROJECTILE, "═")?;
    }

    draw_controls_hint(out, height)?;

    if let Some(outcome) = state.outcome() {
        draw_game_over(out, outcome, width, height)?;
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

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1 — top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2 — bottom bar
    out.queue(cursor::MoveTo(0, height.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..height.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &DuelState, width: u16) -> std::io::Result<()> {
    let (player_health, enemy_health) = state.health_snapshot();

    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(Print(format!("Player Health: {}", player_health)))?;

    let enemy_text = format!("Enemy Health: {}", enemy_health);
    let x = width.saturating_sub(enemy_text.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(x, 0))?;
    out.queue(Print(&enemy_text))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_rect<W: Write>(
    out: &mut W,
    view: &Viewport,
    rect: &Rect,
    color: Color,
    glyph: &str,
) -> std::io::Result<()> {
    let (col, row, w, h) = view.cells(rect);
    let line = glyph.repeat(w as usize);
    out.queue(style::SetForegroundColor(color))?;
    for dy in 0..h {
        out.queue(cursor::MoveTo(col, row + dy))?;
        out.queue(Print(&line))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, height: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(HINT))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    outcome: Outcome,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let verdict = match outcome {
        Outcome::PlayerDefeated => ("You were defeated!", Color::Red),
        Outcome::PlayerVictorious => ("You won the duel!", Color::Green),
    };
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════╗", Color::Red),
        ("║    Game Over!    ║", Color::Red),
        ("╚══════════════════╝", Color::Red),
        verdict,
        ("R - Duel Again  Q - Quit", Color::White),
    ];

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
