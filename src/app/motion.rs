use eframe::egui::{Painter, Pos2, Stroke, Vec2};

use super::render_utils::Palette;

const RING_RADIUS: f32 = 20.0;
const DOT_RADIUS: f32 = 3.0;
const FADE_RATE: f32 = 8.0;

pub(super) struct Spring {
    pub(super) value: Vec2,
    velocity: Vec2,
    stiffness: f32,
    damping: f32,
}

impl Spring {
    pub(super) fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            value: Vec2::ZERO,
            velocity: Vec2::ZERO,
            stiffness,
            damping,
        }
    }

    pub(super) fn snap(&mut self, target: Vec2) {
        self.value = target;
        self.velocity = Vec2::ZERO;
    }

    pub(super) fn update(&mut self, target: Vec2, dt: f32) {
        let accel = (target - self.value) * self.stiffness - self.velocity * self.damping;
        self.velocity += accel * dt;
        self.value += self.velocity * dt;
    }

    pub(super) fn settled(&self, target: Vec2) -> bool {
        (target - self.value).length() < 0.1 && self.velocity.length() < 0.1
    }
}

pub(super) struct CursorHalo {
    ring: Spring,
    raw: Vec2,
    presence: f32,
    pressed: bool,
}

impl CursorHalo {
    pub(super) fn new() -> Self {
        Self {
            ring: Spring::new(200.0, 25.0),
            raw: Vec2::ZERO,
            presence: 0.0,
            pressed: false,
        }
    }

    pub(super) fn update(&mut self, pointer: Option<Pos2>, pressed: bool, dt: f32) {
        self.pressed = pressed;
        if let Some(position) = pointer {
            if self.presence == 0.0 {
                self.ring.snap(position.to_vec2());
            }
            self.raw = position.to_vec2();
        }

        let target = if pointer.is_some() { 1.0 } else { 0.0 };
        self.presence += (target - self.presence) * (dt * FADE_RATE).min(1.0);
        if (target - self.presence).abs() < 0.001 {
            self.presence = target;
        }

        self.ring.update(self.raw, dt);
    }

    pub(super) fn settled(&self) -> bool {
        self.presence == 0.0 || (self.presence == 1.0 && self.ring.settled(self.raw))
    }

    fn ring_opacity(&self) -> f32 {
        let scale = if self.pressed { 0.5 } else { 1.0 };
        self.presence * scale
    }

    fn dot_radius(&self) -> f32 {
        if self.pressed {
            DOT_RADIUS * 0.8
        } else {
            DOT_RADIUS
        }
    }

    pub(super) fn draw(&self, painter: &Painter, palette: &Palette) {
        if self.presence <= 0.0 {
            return;
        }

        painter.circle_stroke(
            self.ring.value.to_pos2(),
            RING_RADIUS,
            Stroke::new(1.0, palette.halo_ring.gamma_multiply(self.ring_opacity())),
        );
        painter.circle_filled(
            self.raw.to_pos2(),
            self.dot_radius(),
            palette.halo_dot.gamma_multiply(self.presence),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{pos2, vec2};

    #[test]
    fn spring_converges_on_a_fixed_target() {
        let mut spring = Spring::new(200.0, 25.0);
        let target = vec2(100.0, 40.0);

        for _ in 0..240 {
            spring.update(target, 1.0 / 60.0);
        }

        assert!((spring.value - target).length() < 0.5);
        assert!(spring.settled(target));
    }

    #[test]
    fn spring_at_rest_stays_put() {
        let mut spring = Spring::new(200.0, 25.0);
        spring.snap(vec2(7.0, -3.0));
        spring.update(vec2(7.0, -3.0), 1.0 / 60.0);

        assert_eq!(spring.value, vec2(7.0, -3.0));
        assert_eq!(spring.velocity, Vec2::ZERO);
    }

    #[test]
    fn spring_reports_settled_only_near_the_target() {
        let spring = Spring::new(200.0, 25.0);
        assert!(spring.settled(vec2(0.05, 0.0)));
        assert!(!spring.settled(vec2(50.0, 0.0)));
    }

    #[test]
    fn halo_snaps_to_the_first_pointer_position() {
        let mut halo = CursorHalo::new();
        halo.update(Some(pos2(300.0, 200.0)), false, 1.0 / 60.0);

        assert!((halo.ring.value - vec2(300.0, 200.0)).length() < 1e-4);
    }

    #[test]
    fn pressing_shrinks_the_dot_and_halves_the_ring_opacity() {
        let mut halo = CursorHalo::new();
        for _ in 0..30 {
            halo.update(Some(pos2(60.0, 60.0)), false, 1.0 / 30.0);
        }
        assert_eq!(halo.dot_radius(), DOT_RADIUS);
        assert_eq!(halo.ring_opacity(), 1.0);

        halo.update(Some(pos2(60.0, 60.0)), true, 1.0 / 30.0);
        assert_eq!(halo.dot_radius(), DOT_RADIUS * 0.8);
        assert_eq!(halo.ring_opacity(), 0.5);

        halo.update(Some(pos2(60.0, 60.0)), false, 1.0 / 30.0);
        assert_eq!(halo.dot_radius(), DOT_RADIUS);
    }

    #[test]
    fn halo_fades_out_after_the_pointer_leaves() {
        let mut halo = CursorHalo::new();
        for _ in 0..30 {
            halo.update(Some(pos2(120.0, 90.0)), false, 1.0 / 30.0);
        }
        assert_eq!(halo.presence, 1.0);

        for _ in 0..60 {
            halo.update(None, false, 1.0 / 30.0);
        }
        assert_eq!(halo.presence, 0.0);
        assert!(halo.settled());
    }
}
