/// Projectile lifecycle: spawn at the player, fly right, vanish on a hit or
/// past the right edge of the field.

use tracing::debug;

use crate::config::{
    Field, PROJECTILE_DAMAGE, PROJECTILE_HEIGHT, PROJECTILE_SPEED, PROJECTILE_WIDTH,
    PROJECTILE_Y_OFFSET,
};
use crate::entities::{Player, Projectile, Rect};
use crate::geometry::intersects;

/// What a reap pass took out of play.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reaped {
    /// Projectiles removed for any reason.
    pub removed: usize,
    /// Health the enemy loses from this pass.
    pub enemy_damage: i32,
}

/// A new projectile at the player's right edge, just above vertical centre.
pub fn spawn(origin: &Player) -> Projectile {
    let body = &origin.body;
    Projectile {
        body: Rect::new(
            body.right(),
            body.y + body.height / 2.0 - PROJECTILE_Y_OFFSET,
            PROJECTILE_WIDTH,
            PROJECTILE_HEIGHT,
        ),
        speed: PROJECTILE_SPEED,
    }
}

/// Move every projectile one tick to the right.
pub fn advance(projectiles: Vec<Projectile>) -> Vec<Projectile> {
    projectiles
        .into_iter()
        .map(|p| Projectile {
            body: Rect {
                x: p.body.x + p.speed as f32,
                ..p.body
            },
            ..p
        })
        .collect()
}

/// Drop projectiles that hit the enemy or left the field, keeping the rest in
/// fire order.  A hit is checked before the bounds so it always deals damage.
pub fn reap(projectiles: Vec<Projectile>, field: &Field, enemy: &Rect) -> (Vec<Projectile>, Reaped) {
    let mut reaped = Reaped::default();

    let survivors = projectiles
        .into_iter()
        .filter(|p| {
            if intersects(&p.body, enemy) {
                reaped.removed += 1;
                reaped.enemy_damage += PROJECTILE_DAMAGE;
                debug!(x = p.body.x, y = p.body.y, "projectile hit enemy");
                false
            } else if p.body.x > field.width {
                reaped.removed += 1;
                false
            } else {
                true
            }
        })
        .collect();

    (survivors, reaped)
}
