//! Space defender — fixed-tick scrolling shooter.

pub mod compute;
pub mod display;
pub mod entities;
