/// Enemy motion: a random walk along the vertical axis.
///
/// Each tick both intent flags may flip independently, then each set flag
/// moves the enemy one step unless it already sits on that boundary.  With
/// both flags set the two steps cancel out.

use rand::Rng;

use crate::config::{Field, ENEMY_STEP, TOGGLE_PROBABILITY};
use crate::entities::{Enemy, Rect};

/// A source of uniform samples in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: Rng> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Returns the same sample forever.  `FixedSource(0.0)` flips every flag on
/// every tick, `FixedSource(1.0)` never flips anything.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedSource(pub f64);

impl RandomSource for FixedSource {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}

fn maybe_flip(flag: bool, rng: &mut impl RandomSource) -> bool {
    if rng.next_unit() < TOGGLE_PROBABILITY {
        !flag
    } else {
        flag
    }
}

/// One tick of enemy motion.  The up flag draws its sample before the down flag.
pub fn roam(enemy: &Enemy, field: &Field, rng: &mut impl RandomSource) -> Enemy {
    let move_up = maybe_flip(enemy.move_up, rng);
    let move_down = maybe_flip(enemy.move_down, rng);

    let mut y = enemy.body.y;
    if move_up && y > 0.0 {
        y -= ENEMY_STEP;
    }
    if move_down && y < field.height - enemy.body.height {
        y += ENEMY_STEP;
    }

    Enemy {
        body: Rect { y, ..enemy.body },
        move_up,
        move_down,
    }
}
