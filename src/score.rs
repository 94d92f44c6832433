//! Scoring and game-lifecycle state machine.
//!
//! One `Scoreboard` is constructed per game session and passed by reference
//! into the main loop and the renderer.  It is the sole consumer of
//! [`GameEvent`]s and the only mutator of score / level / game-over state.

use crate::events::GameEvent;

/// Points awarded for each destroyed enemy (space defender).
pub const ENEMY_POINTS: u32 = 10;

/// Win-threshold growth per level-up (treasure hunter).
pub const THRESHOLD_STEP: u32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    /// Terminal — no outgoing transitions; the enclosing loop observes this
    /// once per tick and halts.
    GameOver,
}

#[derive(Clone, Debug)]
pub struct Scoreboard {
    pub score: u32,
    pub level: u32,
    /// Score at which the treasure hunter levels up and the score resets.
    pub treasures_to_win: u32,
    pub phase: Phase,
}

impl Scoreboard {
    pub fn new() -> Self {
        Scoreboard {
            score: 0,
            level: 1,
            treasures_to_win: 3,
            phase: Phase::Playing,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Consume one event.  Events arriving after `GameOver` are ignored.
    pub fn apply(&mut self, event: GameEvent) {
        if self.phase == Phase::GameOver {
            return;
        }
        match event {
            GameEvent::TreasureCollected => {
                self.score += 1;
                if self.score >= self.treasures_to_win {
                    self.level_up();
                }
            }
            GameEvent::EnemyHit => {
                self.score += ENEMY_POINTS;
            }
            GameEvent::TrapTriggered | GameEvent::PlayerHit => {
                self.end_game();
            }
        }
    }

    /// Drain a tick's worth of events, in raise order.
    pub fn apply_all(&mut self, events: &[GameEvent]) {
        for &event in events {
            self.apply(event);
        }
    }

    /// Direct transition to `GameOver` (quit command path).
    pub fn end_game(&mut self) {
        self.phase = Phase::GameOver;
    }

    fn level_up(&mut self) {
        self.level += 1;
        self.treasures_to_win += THRESHOLD_STEP;
        self.score = 0;
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}
