/// All duel entity types — pure data, no logic.

use crate::config::Field;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DuelStatus {
    Running,
    Over,
}

/// How a finished duel ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    PlayerDefeated,
    PlayerVictorious,
}

// ── Bounding box ─────────────────────────────────────────────────────────────

/// Axis-aligned box shared by every entity.  `(x, y)` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        assert!(
            width >= 0.0 && height >= 0.0,
            "rect size must be non-negative, got {width}x{height}"
        );
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

// ── Projectiles ──────────────────────────────────────────────────────────────

/// A spell travelling right at a fixed speed.
#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub body: Rect,
    pub speed: i32,
}

// ── Player & enemy ───────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub body: Rect,
    pub speed: i32,
    pub move_up: bool,
    pub move_down: bool,
    /// Live projectiles in fire order.
    pub projectiles: Vec<Projectile>,
}

/// The enemy's intent flags are flipped at random, not by input.
#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub body: Rect,
    pub move_up: bool,
    pub move_down: bool,
}

// ── Master duel state ────────────────────────────────────────────────────────

/// The entire duel.  Cloneable so pure update functions can return a new
/// copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct DuelState {
    pub player: Player,
    pub enemy: Enemy,
    /// May dip below zero on the final tick; `<= 0` means defeat.
    pub player_health: i32,
    pub enemy_health: i32,
    pub status: DuelStatus,
    /// Fire requests waiting for the next projectile step.
    pub pending_shots: u32,
    pub frame: u64,
    pub field: Field,
}
