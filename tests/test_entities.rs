use spell_duel::compute::init_state;
use spell_duel::config::Field;
use spell_duel::entities::*;

#[test]
fn enum_equality() {
    assert_eq!(DuelStatus::Running, DuelStatus::Running);
    assert_ne!(DuelStatus::Running, DuelStatus::Over);
    assert_ne!(Outcome::PlayerDefeated, Outcome::PlayerVictorious);
}

#[test]
fn rect_edges() {
    let r = Rect::new(50.0, 300.0, 50.0, 40.0);
    assert_eq!(r.right(), 100.0);
    assert_eq!(r.bottom(), 340.0);
}

#[test]
#[should_panic]
fn rect_rejects_negative_size() {
    let _ = Rect::new(0.0, 0.0, -1.0, 5.0);
}

#[test]
#[should_panic]
fn field_rejects_zero_width() {
    let _ = Field::new(0.0, 600.0);
}

#[test]
fn default_field_is_800_by_600() {
    assert_eq!(Field::default(), Field::new(800.0, 600.0));
}

#[test]
fn duel_state_clone_is_independent() {
    let original = init_state(Field::default());
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.body.y = 0.0;
    cloned.enemy_health = 1;
    cloned.player.projectiles.push(Projectile {
        body: Rect::new(100.0, 323.0, 10.0, 5.0),
        speed: 7,
    });

    assert_eq!(original.player.body.y, 300.0);
    assert_eq!(original.enemy_health, 100);
    assert!(original.player.projectiles.is_empty());
}
