//! Pure treasure-hunter logic.
//!
//! Every public function takes an immutable reference to the current
//! `HuntState` (and, where needed, an RNG handle) and returns a brand-new
//! `HuntState`.  Side effects are limited to the injected RNG.

use rand::Rng;

use crate::events::GameEvent;
use crate::hunter::entities::{Cell, CellKind, HuntState, Player};

pub const FIELD_WIDTH: i32 = 10;
pub const FIELD_HEIGHT: i32 = 6;

/// Rejection-sampling cap when respawning a trap on a crowded board.
const TRAP_SPAWN_ATTEMPTS: u32 = 50;

// ── Commands ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move { dx: i32, dy: i32 },
    Quit,
}

/// Map a keyboard character to a command.  Case-insensitive; unknown keys
/// yield `None` and the caller skips the tick.
pub fn parse_command(key: char) -> Option<Command> {
    match key.to_ascii_lowercase() {
        'w' => Some(Command::Move { dx: 0, dy: -1 }),
        's' => Some(Command::Move { dx: 0, dy: 1 }),
        'a' => Some(Command::Move { dx: -1, dy: 0 }),
        'd' => Some(Command::Move { dx: 1, dy: 0 }),
        'q' => Some(Command::Quit),
        _ => None,
    }
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Populate a fresh field.  Every cell except the player's starting cell
/// receives an entity: 1 in 5 a trap, otherwise a treasure.
pub fn init_state(width: i32, height: i32, rng: &mut impl Rng) -> HuntState {
    let player = Player {
        x: width / 2,
        y: height / 2,
    };

    let mut cells = Vec::with_capacity((width * height - 1) as usize);
    for y in 0..height {
        for x in 0..width {
            if x == player.x && y == player.y {
                continue;
            }
            let kind = if rng.gen_range(0..5) == 0 {
                CellKind::Trap
            } else {
                CellKind::Treasure
            };
            cells.push(Cell {
                x,
                y,
                kind,
                active: true,
            });
        }
    }

    HuntState {
        width,
        height,
        cells,
        player,
    }
}

// ── Movement ─────────────────────────────────────────────────────────────────

/// Step the player by one cell.  An out-of-bounds target leaves the position
/// unchanged.
pub fn move_player(state: &HuntState, dx: i32, dy: i32) -> HuntState {
    let nx = state.player.x + dx;
    let ny = state.player.y + dy;

    let player = if nx >= 0 && nx < state.width && ny >= 0 && ny < state.height {
        Player { x: nx, y: ny }
    } else {
        state.player
    };

    HuntState {
        player,
        ..state.clone()
    }
}

// ── Collision ────────────────────────────────────────────────────────────────

/// Index of the first active cell at (x, y), in storage order.
pub fn active_cell_at(state: &HuntState, x: i32, y: i32) -> Option<usize> {
    state
        .cells
        .iter()
        .position(|c| c.active && c.x == x && c.y == y)
}

/// Check the player's cell after a move.  A treasure is deactivated, raises
/// `TreasureCollected` and respawns as a trap elsewhere; a trap raises
/// `TrapTriggered`.
pub fn resolve_collision(state: &HuntState, rng: &mut impl Rng) -> (HuntState, Vec<GameEvent>) {
    let mut next = state.clone();
    let mut events = Vec::new();

    if let Some(i) = active_cell_at(state, state.player.x, state.player.y) {
        match next.cells[i].kind {
            CellKind::Treasure => {
                next.cells[i].active = false;
                events.push(GameEvent::TreasureCollected);
                spawn_trap(&mut next, rng);
            }
            CellKind::Trap => {
                events.push(GameEvent::TrapTriggered);
            }
        }
    }

    (next, events)
}

/// Place a new trap on a random free cell by rejection sampling.  A cell is
/// occupied if an active cell sits there or the player stands there.  Gives
/// up silently after `TRAP_SPAWN_ATTEMPTS` misses (full board).
pub fn spawn_trap(state: &mut HuntState, rng: &mut impl Rng) {
    for _ in 0..TRAP_SPAWN_ATTEMPTS {
        let x = rng.gen_range(0..state.width);
        let y = rng.gen_range(0..state.height);

        let occupied = active_cell_at(state, x, y).is_some()
            || (x == state.player.x && y == state.player.y);
        if occupied {
            continue;
        }

        state.cells.push(Cell {
            x,
            y,
            kind: CellKind::Trap,
            active: true,
        });
        return;
    }
}
