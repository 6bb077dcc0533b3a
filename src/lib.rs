//! Spell duel: a player fires spells at a drifting enemy until one side
//! runs out of health.
//!
//! The library is pure simulation plus key mapping; the binary owns the
//! terminal, the frame clock and rendering.

pub mod compute;
pub mod config;
pub mod enemy;
pub mod entities;
pub mod geometry;
pub mod input;
pub mod projectiles;
pub mod tracker;
