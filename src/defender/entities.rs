//! Space defender entity types — pure data, no logic.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyKind {
    /// Glyph `F`, drops two rows per tick, dies to one hit.
    Fast,
    /// Glyph `T`, drops one row per tick, soaks two hits.
    Tough,
}

impl EnemyKind {
    pub fn glyph(self) -> char {
        match self {
            EnemyKind::Fast => 'F',
            EnemyKind::Tough => 'T',
        }
    }

    /// Rows descended per tick.
    pub fn speed(self) -> i32 {
        match self {
            EnemyKind::Fast => 2,
            EnemyKind::Tough => 1,
        }
    }

    /// Bullet hits required to destroy.
    pub fn hits(self) -> u32 {
        match self {
            EnemyKind::Fast => 1,
            EnemyKind::Tough => 2,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub x: i32,
    pub y: i32,
    pub kind: EnemyKind,
    /// Remaining bullet hits; the enemy deactivates (and scores) at zero.
    pub hits_left: u32,
    pub active: bool,
}

#[derive(Clone, Debug)]
pub struct Bullet {
    pub x: i32,
    pub y: i32,
    pub active: bool,
}

/// The player ship owns its in-flight bullets; they expire off the top of
/// the screen independently of anything else.
#[derive(Clone, Debug)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub fire_cooldown: u32,
    pub bullets: Vec<Bullet>,
}

#[derive(Clone, Debug)]
pub struct World {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub width: i32,
    pub height: i32,
}
