//! Field dimensions and gameplay constants.

// ── Play field ───────────────────────────────────────────────────────────────

pub const FIELD_WIDTH: f32 = 800.0;
pub const FIELD_HEIGHT: f32 = 600.0;

// ── Player ───────────────────────────────────────────────────────────────────

pub const PLAYER_X: f32 = 50.0;
pub const PLAYER_SIZE: f32 = 50.0;
/// Vertical pixels per tick while an intent flag is held.
pub const PLAYER_SPEED: i32 = 5;
pub const PLAYER_HEALTH: i32 = 100;

// ── Enemy ────────────────────────────────────────────────────────────────────

/// Distance of the enemy's left edge from the right side of the field.
pub const ENEMY_INSET: f32 = 100.0;
pub const ENEMY_SIZE: f32 = 50.0;
pub const ENEMY_STEP: f32 = 1.0;
pub const ENEMY_HEALTH: i32 = 100;
/// Chance per tick that each enemy intent flag flips.
pub const TOGGLE_PROBABILITY: f64 = 0.01;
/// Player health lost for every tick the enemy overlaps the player.
pub const CONTACT_DAMAGE: i32 = 1;

// ── Projectiles ──────────────────────────────────────────────────────────────

pub const PROJECTILE_WIDTH: f32 = 10.0;
pub const PROJECTILE_HEIGHT: f32 = 5.0;
pub const PROJECTILE_SPEED: i32 = 7;
/// Spawn height is the player's vertical centre minus this offset.
pub const PROJECTILE_Y_OFFSET: f32 = 2.0;
pub const PROJECTILE_DAMAGE: i32 = 10;

/// Dimensions of the rectangular play field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    /// Panics on non-positive dimensions: a bad field is a programming error.
    pub fn new(width: f32, height: f32) -> Self {
        assert!(width > 0.0, "field width must be positive, got {width}");
        assert!(height > 0.0, "field height must be positive, got {height}");
        Self { width, height }
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new(FIELD_WIDTH, FIELD_HEIGHT)
    }
}
