/// Pure duel logic.
///
/// Every public function takes an immutable reference to the current
/// `DuelState` (and, where needed, a random source) and returns a brand-new
/// `DuelState`.  Side effects are limited to the injected random source.

use tracing::info;

use crate::config::{
    Field, CONTACT_DAMAGE, ENEMY_HEALTH, ENEMY_INSET, ENEMY_SIZE, PLAYER_HEALTH, PLAYER_SIZE,
    PLAYER_SPEED, PLAYER_X,
};
use crate::enemy::{roam, RandomSource};
use crate::entities::{DuelState, DuelStatus, Enemy, Player, Rect};
use crate::geometry::intersects;
use crate::projectiles::{advance, reap, spawn};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the opening state: both duellists vertically centred, full health.
pub fn init_state(field: Field) -> DuelState {
    DuelState {
        player: Player {
            body: Rect::new(PLAYER_X, field.height / 2.0, PLAYER_SIZE, PLAYER_SIZE),
            speed: PLAYER_SPEED,
            move_up: false,
            move_down: false,
            projectiles: Vec::new(),
        },
        enemy: Enemy {
            body: Rect::new(
                field.width - ENEMY_INSET,
                field.height / 2.0,
                ENEMY_SIZE,
                ENEMY_SIZE,
            ),
            move_up: false,
            move_down: false,
        },
        player_health: PLAYER_HEALTH,
        enemy_health: ENEMY_HEALTH,
        status: DuelStatus::Running,
        pending_shots: 0,
        frame: 0,
        field,
    }
}

// ── Input-driven state transitions (pure) ────────────────────────────────────

/// Replace the player's held-direction flags.
pub fn set_player_intent(state: &DuelState, move_up: bool, move_down: bool) -> DuelState {
    DuelState {
        player: Player {
            move_up,
            move_down,
            ..state.player.clone()
        },
        ..state.clone()
    }
}

/// Queue one shot for the next tick.  No-op once the duel is over.
pub fn queue_fire(state: &DuelState) -> DuelState {
    if state.status == DuelStatus::Over {
        return state.clone();
    }
    DuelState {
        pending_shots: state.pending_shots + 1,
        ..state.clone()
    }
}

/// Spawn a projectile right away instead of waiting for the next tick.
pub fn player_fire(state: &DuelState) -> DuelState {
    if state.status == DuelStatus::Over {
        return state.clone();
    }
    let mut projectiles = state.player.projectiles.clone();
    projectiles.push(spawn(&state.player));
    DuelState {
        player: Player {
            projectiles,
            ..state.player.clone()
        },
        ..state.clone()
    }
}

// ── Per-frame tick (nearly pure — randomness is injected) ────────────────────

fn steer(player: &Player, field: &Field) -> Rect {
    let step = player.speed as f32;
    let floor = field.height - player.body.height;
    let mut y = player.body.y;
    if player.move_up {
        y = (y - step).max(0.0);
    }
    if player.move_down {
        y = (y + step).min(floor);
    }
    Rect { y, ..player.body }
}

/// Advance the duel by one frame.  Once the duel is over the state comes back
/// unchanged and `rng` is not touched.
pub fn tick(state: &DuelState, rng: &mut impl RandomSource) -> DuelState {
    if state.status == DuelStatus::Over {
        return state.clone();
    }

    // ── 1. Player movement ───────────────────────────────────────────────────
    let mut player = Player {
        body: steer(&state.player, &state.field),
        ..state.player.clone()
    };

    // ── 2. Drain queued shots, then fly ──────────────────────────────────────
    let mut projectiles = std::mem::take(&mut player.projectiles);
    for _ in 0..state.pending_shots {
        projectiles.push(spawn(&player));
    }
    let projectiles = advance(projectiles);

    // ── 3. Projectile ↔ enemy ────────────────────────────────────────────────
    let (projectiles, reaped) = reap(projectiles, &state.field, &state.enemy.body);
    player.projectiles = projectiles;
    let enemy_health = state.enemy_health - reaped.enemy_damage;

    // ── 4. Enemy random walk ─────────────────────────────────────────────────
    let enemy = roam(&state.enemy, &state.field, rng);

    // ── 5. Enemy ↔ player contact ────────────────────────────────────────────
    let player_health = if intersects(&enemy.body, &player.body) {
        state.player_health - CONTACT_DAMAGE
    } else {
        state.player_health
    };

    // ── 6. Terminal check ────────────────────────────────────────────────────
    let status = if player_health <= 0 || enemy_health <= 0 {
        DuelStatus::Over
    } else {
        DuelStatus::Running
    };

    let next = DuelState {
        player,
        enemy,
        player_health,
        enemy_health,
        status,
        pending_shots: 0,
        frame: state.frame + 1,
        field: state.field,
    };

    if let Some(outcome) = next.outcome() {
        info!(
            ?outcome,
            player_health,
            enemy_health,
            frame = next.frame,
            "duel over"
        );
    }

    next
}
