use eframe::egui::{Painter, Pos2, Rect, Vec2, vec2};

use super::motion::Spring;
use super::render_utils::{self, Palette};

const GLOW_RADIUS: f32 = 150.0;
const FADE_RATE: f32 = 6.0;

struct Orb {
    anchor: Vec2,
    radius: f32,
    sway: Vec2,
    bob_amplitude: f32,
    bob_rate: f32,
    bob_phase: f32,
}

const ORBS: [Orb; 3] = [
    Orb {
        anchor: Vec2::new(0.25, 0.25),
        radius: 300.0,
        sway: Vec2::new(100.0, 80.0),
        bob_amplitude: 18.0,
        bob_rate: 0.45,
        bob_phase: 0.0,
    },
    Orb {
        anchor: Vec2::new(0.75, 0.75),
        radius: 250.0,
        sway: Vec2::new(-80.0, -60.0),
        bob_amplitude: 14.0,
        bob_rate: 0.4,
        bob_phase: 2.1,
    },
    Orb {
        anchor: Vec2::new(0.5, 0.5),
        radius: 200.0,
        sway: Vec2::new(50.0, 100.0),
        bob_amplitude: 12.0,
        bob_rate: 0.55,
        bob_phase: 4.2,
    },
];

pub(super) struct OrbLayer {
    glide: Spring,
    glide_target: Vec2,
    glow: Spring,
    glow_target: Vec2,
    glow_presence: f32,
    time: f32,
}

impl OrbLayer {
    pub(super) fn new() -> Self {
        Self {
            glide: Spring::new(100.0, 25.0),
            glide_target: Vec2::ZERO,
            glow: Spring::new(200.0, 30.0),
            glow_target: Vec2::ZERO,
            glow_presence: 0.0,
            time: 0.0,
        }
    }

    pub(super) fn update(&mut self, normalized: Option<Vec2>, pointer: Option<Pos2>, dt: f32) {
        self.time += dt;
        if let Some(normalized) = normalized {
            self.glide_target = normalized;
        }
        self.glide.update(self.glide_target, dt);

        if let Some(position) = pointer {
            if self.glow_presence == 0.0 {
                self.glow.snap(position.to_vec2());
            }
            self.glow_target = position.to_vec2();
        }

        let target = if pointer.is_some() { 1.0 } else { 0.0 };
        self.glow_presence += (target - self.glow_presence) * (dt * FADE_RATE).min(1.0);
        if (target - self.glow_presence).abs() < 0.001 {
            self.glow_presence = target;
        }

        self.glow.update(self.glow_target, dt);
    }

    pub(super) fn draw(&self, painter: &Painter, rect: Rect, palette: &Palette) {
        let tints = [palette.orb_accent, palette.orb_violet, palette.orb_green];
        let sway = self.glide.value;

        for (orb, tint) in ORBS.iter().zip(tints) {
            let bob = (self.time * orb.bob_rate + orb.bob_phase).sin() * orb.bob_amplitude;
            let center = rect.min
                + vec2(rect.width() * orb.anchor.x, rect.height() * orb.anchor.y)
                + sway * orb.sway
                + vec2(0.0, bob);
            render_utils::soft_circle(painter, center, orb.radius, tint);
        }

        if self.glow_presence > 0.0 {
            render_utils::soft_circle(
                painter,
                self.glow.value.to_pos2(),
                GLOW_RADIUS,
                palette.pointer_glow.gamma_multiply(self.glow_presence),
            );
        }
    }
}
