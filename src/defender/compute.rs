//! Pure space-defender logic.
//!
//! Every public function takes an immutable reference to the current `World`
//! (and, where needed, an RNG handle) and returns a brand-new `World`.  The
//! per-tick events are returned alongside the new state, in raise order, for
//! the caller to feed into the scoreboard.

use rand::Rng;

use crate::defender::entities::{Bullet, Enemy, EnemyKind, Player, World};
use crate::events::GameEvent;

/// Ticks between shots while fire is mashed.
pub const FIRE_COOLDOWN: u32 = 5;

/// Wall-clock gap between enemy spawn attempts; the main loop checks this
/// once per tick and passes the result in as `spawn_due`.
pub const SPAWN_INTERVAL_MS: u64 = 1500;

/// Row on which fresh enemies appear.
const SPAWN_ROW: i32 = 3;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial world for the given terminal dimensions.
pub fn init_world(width: i32, height: i32) -> World {
    World {
        player: Player {
            x: width / 2,
            y: height - 4,
            fire_cooldown: 0,
            bullets: Vec::new(),
        },
        enemies: Vec::new(),
        width,
        height,
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

pub fn move_left(world: &World) -> World {
    let new_x = (world.player.x - 1).max(1);
    World {
        player: Player {
            x: new_x,
            ..world.player.clone()
        },
        ..world.clone()
    }
}

pub fn move_right(world: &World) -> World {
    let new_x = (world.player.x + 1).min(world.width - 2);
    World {
        player: Player {
            x: new_x,
            ..world.player.clone()
        },
        ..world.clone()
    }
}

/// Fire a bullet from just above the ship, unless the cooldown is running.
pub fn fire(world: &World) -> World {
    if world.player.fire_cooldown > 0 {
        return world.clone();
    }
    let mut bullets = world.player.bullets.clone();
    bullets.push(Bullet {
        x: world.player.x,
        y: world.player.y - 1,
        active: true,
    });
    World {
        player: Player {
            fire_cooldown: FIRE_COOLDOWN,
            bullets,
            ..world.player.clone()
        },
        ..world.clone()
    }
}

// ── Per-tick step (nearly pure — RNG is injected) ───────────────────────────

/// Advance the simulation by one tick: move bullets and enemies, spawn when
/// due, detect collisions, then compact away everything deactivated this
/// tick.  Collision is exact positional equality between two active
/// entities; the first match in storage order wins.
pub fn tick(world: &World, spawn_due: bool, rng: &mut impl Rng) -> (World, Vec<GameEvent>) {
    let mut events = Vec::new();

    // ── 1. Player bookkeeping + bullet movement ──────────────────────────────
    let mut bullets: Vec<Bullet> = world
        .player
        .bullets
        .iter()
        .map(|b| {
            let y = b.y - 1;
            Bullet {
                y,
                active: b.active && y > 1,
                ..*b
            }
        })
        .collect();

    // ── 2. Enemy movement ────────────────────────────────────────────────────
    let mut enemies: Vec<Enemy> = world
        .enemies
        .iter()
        .map(|e| {
            let y = e.y + e.kind.speed();
            Enemy {
                y,
                // Past the bottom edge: gone, no event.
                active: e.active && y <= world.height,
                ..e.clone()
            }
        })
        .collect();

    // ── 3. Spawn ─────────────────────────────────────────────────────────────
    if spawn_due {
        enemies.push(spawn_enemy(world.width, rng));
    }

    // ── 4. Collision: bullets ↔ enemies ──────────────────────────────────────
    for bullet in bullets.iter_mut() {
        if !bullet.active {
            continue;
        }
        for enemy in enemies.iter_mut() {
            if enemy.active && enemy.x == bullet.x && enemy.y == bullet.y {
                bullet.active = false;
                enemy.hits_left -= 1;
                if enemy.hits_left == 0 {
                    enemy.active = false;
                    events.push(GameEvent::EnemyHit);
                }
                break;
            }
        }
    }

    // ── 5. Collision: enemies ↔ player ───────────────────────────────────────
    for enemy in &enemies {
        if enemy.active && enemy.x == world.player.x && enemy.y == world.player.y {
            events.push(GameEvent::PlayerHit);
        }
    }

    // ── 6. Compaction — one filter pass per tick ─────────────────────────────
    bullets.retain(|b| b.active);
    enemies.retain(|e| e.active);

    let player = Player {
        fire_cooldown: world.player.fire_cooldown.saturating_sub(1),
        bullets,
        ..world.player.clone()
    };

    (
        World {
            player,
            enemies,
            ..world.clone()
        },
        events,
    )
}

/// Draw one enemy: uniform variant choice, uniform column inside the walls.
pub fn spawn_enemy(width: i32, rng: &mut impl Rng) -> Enemy {
    let kind = if rng.gen_range(0..2) == 0 {
        EnemyKind::Fast
    } else {
        EnemyKind::Tough
    };
    Enemy {
        x: rng.gen_range(1..width - 1),
        y: SPAWN_ROW,
        kind,
        hits_left: kind.hits(),
        active: true,
    }
}
