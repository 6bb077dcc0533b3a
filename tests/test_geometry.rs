use spell_duel::entities::Rect;
use spell_duel::geometry::intersects;

fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
    Rect::new(x, y, w, h)
}

#[test]
fn overlapping_boxes_intersect() {
    let a = rect(0.0, 0.0, 10.0, 10.0);
    let b = rect(5.0, 5.0, 10.0, 10.0);
    assert!(intersects(&a, &b));
    assert!(intersects(&b, &a));
}

#[test]
fn contained_box_intersects() {
    let outer = rect(700.0, 300.0, 50.0, 50.0);
    let inner = rect(710.0, 320.0, 10.0, 5.0);
    assert!(intersects(&outer, &inner));
    assert!(intersects(&inner, &outer));
}

#[test]
fn touching_edges_do_not_intersect() {
    let a = rect(0.0, 0.0, 10.0, 10.0);
    // shares a's right edge
    assert!(!intersects(&a, &rect(10.0, 0.0, 10.0, 10.0)));
    // shares a's bottom edge
    assert!(!intersects(&a, &rect(0.0, 10.0, 10.0, 10.0)));
}

#[test]
fn vertical_overlap_alone_is_not_enough() {
    let a = rect(0.0, 0.0, 10.0, 10.0);
    assert!(!intersects(&a, &rect(50.0, 2.0, 10.0, 10.0)));
}

#[test]
fn horizontal_overlap_alone_is_not_enough() {
    let a = rect(0.0, 0.0, 10.0, 10.0);
    assert!(!intersects(&a, &rect(2.0, 50.0, 10.0, 10.0)));
}

#[test]
fn projectile_past_the_enemy_misses() {
    let enemy = rect(700.0, 300.0, 50.0, 50.0);
    let projectile = rect(757.0, 320.0, 10.0, 5.0);
    assert!(!intersects(&projectile, &enemy));
}

#[test]
fn zero_sized_box_inside_another_intersects() {
    let a = rect(0.0, 0.0, 10.0, 10.0);
    let point = rect(5.0, 5.0, 0.0, 0.0);
    assert!(intersects(&a, &point));
}
