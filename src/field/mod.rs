use eframe::egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};

mod particle;
mod preset;

pub use particle::Particle;
pub use preset::{load_preset, save_preset};

pub const OFFSCREEN_POINTER: Pos2 = Pos2::new(-1000.0, -1000.0);

pub const MAX_PARTICLES: usize = 600;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldTuning {
    pub particle_count: usize,
    pub influence_radius: f32,
    pub link_distance: f32,
    pub return_rate: f32,
    pub repulsion_boost: f32,
    pub drift_scale: f32,
    pub link_alpha: f32,
}

impl Default for FieldTuning {
    fn default() -> Self {
        Self {
            particle_count: 150,
            influence_radius: 120.0,
            link_distance: 100.0,
            return_rate: 0.05,
            repulsion_boost: 1.0,
            drift_scale: 1.0,
            link_alpha: 0.3,
        }
    }
}

impl FieldTuning {
    pub fn sanitized(self) -> Self {
        Self {
            particle_count: self.particle_count.min(MAX_PARTICLES),
            influence_radius: self.influence_radius.clamp(0.0, 600.0),
            link_distance: self.link_distance.clamp(0.0, 600.0),
            return_rate: self.return_rate.clamp(0.0, 1.0),
            repulsion_boost: self.repulsion_boost.clamp(0.0, 4.0),
            drift_scale: self.drift_scale.clamp(0.0, 4.0),
            link_alpha: self.link_alpha.clamp(0.0, 1.0),
        }
    }
}

pub struct Link {
    pub from: Pos2,
    pub to: Pos2,
    pub distance: f32,
}

pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Vec2,
    pointer: Pos2,
}

impl ParticleField {
    pub fn new(bounds: Vec2, count: usize) -> Self {
        let mut field = Self {
            particles: Vec::new(),
            bounds: Vec2::ZERO,
            pointer: OFFSCREEN_POINTER,
        };
        field.reseed(bounds, count);
        field
    }

    pub fn reseed(&mut self, bounds: Vec2, count: usize) {
        self.bounds = bounds.max(Vec2::ZERO);

        let mut rng = rand::thread_rng();
        self.particles.clear();
        self.particles
            .reserve(count.saturating_sub(self.particles.capacity()));
        for _ in 0..count {
            self.particles.push(Particle::spawn(&mut rng, self.bounds));
        }
    }

    pub fn set_pointer(&mut self, pointer: Option<Pos2>) {
        self.pointer = pointer.unwrap_or(OFFSCREEN_POINTER);
    }

    pub fn step(&mut self, tuning: &FieldTuning) {
        for particle in &mut self.particles {
            particle.step(self.pointer, self.bounds, tuning);
        }
    }

    // O(n^2) over particle pairs; the scaling limit if counts grow far past the default.
    pub fn collect_links(&self, link_distance: f32, links: &mut Vec<Link>) {
        links.clear();
        if link_distance <= 0.0 {
            return;
        }

        for (index, first) in self.particles.iter().enumerate() {
            for second in &self.particles[index + 1..] {
                let distance = first.position.distance(second.position);
                if distance < link_distance {
                    links.push(Link {
                        from: first.position,
                        to: second.position,
                        distance,
                    });
                }
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }
}
