//! Treasure hunter — grid exploration with blocking keyboard input.

pub mod compute;
pub mod display;
pub mod entities;
