use crate::entities::Rect;

/// True when the two boxes overlap on both axes.  Boxes that only share an
/// edge do not intersect.
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}
