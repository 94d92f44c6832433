//! Treasure hunter entity types — pure data, no logic.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Treasure,
    Trap,
}

impl CellKind {
    pub fn glyph(self) -> char {
        match self {
            CellKind::Treasure => 'T',
            CellKind::Trap => 'X',
        }
    }
}

/// One occupied grid cell.  Deactivated on collection rather than removed;
/// an inactive cell is never drawn and never matched in collision checks.
#[derive(Clone, Debug)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
    pub kind: CellKind,
    pub active: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct Player {
    pub x: i32,
    pub y: i32,
}

/// The whole field: grid bounds, every placed cell (in insertion order) and
/// the player.  Cloneable so the pure update functions can return a new copy
/// without mutating the original.
#[derive(Clone, Debug)]
pub struct HuntState {
    pub width: i32,
    pub height: i32,
    pub cells: Vec<Cell>,
    pub player: Player,
}
