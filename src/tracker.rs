/// Read-only queries over a `DuelState` for renderers and drivers.

use crate::entities::{DuelState, DuelStatus, Outcome};

impl DuelState {
    /// `(player_health, enemy_health)`.
    pub fn health_snapshot(&self) -> (i32, i32) {
        (self.player_health, self.enemy_health)
    }

    pub fn is_over(&self) -> bool {
        self.status == DuelStatus::Over
    }

    /// `None` while the duel is running.  If both sides fall on the same tick
    /// the player is the one defeated.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_over() {
            return None;
        }
        if self.player_health <= 0 {
            Some(Outcome::PlayerDefeated)
        } else {
            Some(Outcome::PlayerVictorious)
        }
    }
}
