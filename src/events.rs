//! Game events raised by the simulation.
//!
//! Tick and collision functions return the events they raise, in raise
//! order; the caller hands them to the [`Scoreboard`](crate::score::Scoreboard)
//! synchronously after each tick.  There is no observer registration and no
//! queueing — the scoreboard is the only consumer.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// The player stepped onto an active treasure (treasure hunter).
    TreasureCollected,
    /// The player stepped onto an active trap (treasure hunter).
    TrapTriggered,
    /// An enemy's hit counter reached zero (space defender).
    EnemyHit,
    /// An enemy reached the player's cell (space defender).
    PlayerHit,
}
