//! Two small terminal arcade games built on one simulation core.
//!
//! The shared pieces — the event type and the scoring state machine — live at
//! the crate root; each game keeps its own `entities` (pure data), `compute`
//! (pure logic, RNG injected) and `display` (all terminal I/O) modules.

pub mod defender;
pub mod events;
pub mod hunter;
pub mod score;
