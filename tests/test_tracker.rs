use spell_duel::compute::init_state;
use spell_duel::config::Field;
use spell_duel::entities::*;

fn finished(player_health: i32, enemy_health: i32) -> DuelState {
    DuelState {
        player_health,
        enemy_health,
        status: DuelStatus::Over,
        ..init_state(Field::default())
    }
}

#[test]
fn running_duel_has_no_outcome() {
    let s = init_state(Field::default());
    assert!(!s.is_over());
    assert_eq!(s.outcome(), None);
}

#[test]
fn snapshot_reports_both_healths() {
    let mut s = init_state(Field::default());
    s.player_health = 42;
    s.enemy_health = 7;
    assert_eq!(s.health_snapshot(), (42, 7));
}

#[test]
fn player_out_of_health_is_defeat() {
    let s = finished(0, 30);
    assert!(s.is_over());
    assert_eq!(s.outcome(), Some(Outcome::PlayerDefeated));
}

#[test]
fn enemy_out_of_health_is_victory() {
    assert_eq!(finished(12, -10).outcome(), Some(Outcome::PlayerVictorious));
}

#[test]
fn both_out_of_health_is_defeat() {
    assert_eq!(finished(0, 0).outcome(), Some(Outcome::PlayerDefeated));
    assert_eq!(finished(-1, -5).outcome(), Some(Outcome::PlayerDefeated));
}
