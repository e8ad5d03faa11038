use eframe::egui::{Pos2, Rect, Vec2, vec2};

pub(super) fn to_local(pointer: Option<Pos2>, rect: Rect) -> Option<Pos2> {
    pointer.map(|position| (position - rect.min).to_pos2())
}

pub(super) fn normalized_in_rect(local: Pos2, size: Vec2) -> Vec2 {
    if size.x <= 0.0 || size.y <= 0.0 {
        return Vec2::ZERO;
    }
    vec2(
        ((local.x / size.x - 0.5) * 2.0).clamp(-1.0, 1.0),
        ((local.y / size.y - 0.5) * 2.0).clamp(-1.0, 1.0),
    )
}
