//! Space defender rendering — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! world.  No game logic is performed; this module only translates state
//! into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::defender::entities::{Enemy, EnemyKind, World};
use crate::score::Scoreboard;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD: Color = Color::Yellow;
const C_PLAYER: Color = Color::White;
const C_ENEMY_FAST: Color = Color::Red;
const C_ENEMY_TOUGH: Color = Color::Magenta;
const C_BULLET: Color = Color::Cyan;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, world: &World, board: &Scoreboard) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_hud(out, board)?;

    for enemy in &world.enemies {
        draw_enemy(out, enemy, world.height)?;
    }
    draw_player(out, world)?;

    if board.is_game_over() {
        draw_game_over(out, world, board)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, (world.height - 1).max(0) as u16))?;
    out.flush()?;
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, board: &Scoreboard) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!(
        "Score: {} | Press 'q' to quit, 'f' to fire",
        board.score
    )))?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(out: &mut W, world: &World) -> std::io::Result<()> {
    let p = &world.player;
    out.queue(style::SetForegroundColor(C_PLAYER))?;
    out.queue(cursor::MoveTo(p.x as u16, p.y as u16))?;
    out.queue(Print('A'))?;

    out.queue(style::SetForegroundColor(C_BULLET))?;
    for bullet in &p.bullets {
        if bullet.active && bullet.y >= 1 {
            out.queue(cursor::MoveTo(bullet.x as u16, bullet.y as u16))?;
            out.queue(Print('|'))?;
        }
    }
    Ok(())
}

fn draw_enemy<W: Write>(out: &mut W, enemy: &Enemy, height: i32) -> std::io::Result<()> {
    if !enemy.active || enemy.y < 1 || enemy.y >= height {
        return Ok(());
    }
    let color = match enemy.kind {
        EnemyKind::Fast => C_ENEMY_FAST,
        EnemyKind::Tough => C_ENEMY_TOUGH,
    };
    out.queue(style::SetForegroundColor(color))?;
    out.queue(cursor::MoveTo(enemy.x as u16, enemy.y as u16))?;
    out.queue(Print(enemy.kind.glyph()))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    world: &World,
    board: &Scoreboard,
) -> std::io::Result<()> {
    let score_line = format!("Final Score: {}", board.score);
    let lines: &[&str] = &["GAME OVER!", &score_line];

    let cx = (world.width / 2).max(0) as u16;
    let cy = (world.height / 2).max(0) as u16;

    out.queue(style::SetForegroundColor(Color::Red))?;
    for (i, msg) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, cy + i as u16))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}
