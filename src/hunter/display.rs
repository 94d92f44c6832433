//! Treasure hunter rendering — all terminal output lives here.
//!
//! Plain text only: a bordered grid, a status line and one-line notices.
//! The terminal is in raw mode, so every line ends in `\r\n`.  No game logic
//! is performed; this module only translates state into text.

use std::io::Write;

use crate::hunter::entities::HuntState;
use crate::score::Scoreboard;

/// Render the field and the status line.
pub fn render<W: Write>(out: &mut W, state: &HuntState, board: &Scoreboard) -> std::io::Result<()> {
    write!(out, "\r\n")?;

    let bar: String = "-".repeat((state.width * 2 + 1) as usize);
    write!(out, "+{}+\r\n", bar)?;

    for y in 0..state.height {
        write!(out, "| ")?;
        for x in 0..state.width {
            let glyph = if x == state.player.x && y == state.player.y {
                '@'
            } else {
                state
                    .cells
                    .iter()
                    .find(|c| c.active && c.x == x && c.y == y)
                    .map(|c| c.kind.glyph())
                    .unwrap_or('.')
            };
            write!(out, "{} ", glyph)?;
        }
        write!(out, "|\r\n")?;
    }

    write!(out, "+{}+\r\n", bar)?;
    write!(
        out,
        "Treasures: {}/{} | Level: {}\r\n",
        board.score, board.treasures_to_win, board.level
    )?;
    write!(out, "Legend: @ - you, T - treasure, X - trap\r\n")?;
    out.flush()
}

pub fn intro<W: Write>(out: &mut W) -> std::io::Result<()> {
    write!(out, "=== TREASURE HUNTER ===\r\n")?;
    write!(out, "Collect treasures (T) and avoid traps (X)\r\n")?;
    write!(out, "Controls: W - up, A - left, S - down, D - right, Q - quit\r\n")?;
    write!(out, "Press any key to start...\r\n")?;
    out.flush()
}

pub fn prompt<W: Write>(out: &mut W) -> std::io::Result<()> {
    write!(out, "Your move (W/A/S/D/Q): ")?;
    out.flush()
}

pub fn invalid_command<W: Write>(out: &mut W) -> std::io::Result<()> {
    write!(out, "Invalid command!\r\n")?;
    out.flush()
}

pub fn treasure_found<W: Write>(out: &mut W) -> std::io::Result<()> {
    write!(out, "Treasure found! A new trap has appeared.\r\n")?;
    out.flush()
}

pub fn trap_hit<W: Write>(out: &mut W) -> std::io::Result<()> {
    write!(out, "You stepped on a trap!\r\n")?;
    out.flush()
}

pub fn game_over<W: Write>(out: &mut W, board: &Scoreboard) -> std::io::Result<()> {
    write!(
        out,
        "GAME OVER! Level {} reached, {} treasures in hand.\r\n",
        board.level, board.score
    )?;
    write!(out, "Thanks for playing!\r\n")?;
    out.flush()
}
