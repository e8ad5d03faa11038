use eframe::egui::{Pos2, Vec2, pos2, vec2};
use rand::Rng;

use super::FieldTuning;

pub struct Particle {
    pub position: Pos2,
    pub base: Pos2,
    pub drift: Vec2,
    pub radius: f32,
    pub weight: f32,
}

fn random_extent(rng: &mut impl Rng, extent: f32) -> f32 {
    if extent > 0.0 {
        rng.gen_range(0.0..extent)
    } else {
        0.0
    }
}

impl Particle {
    pub fn spawn(rng: &mut impl Rng, bounds: Vec2) -> Self {
        let base = pos2(random_extent(rng, bounds.x), random_extent(rng, bounds.y));

        Self {
            position: base,
            base,
            drift: vec2(rng.gen_range(-0.25..0.25), rng.gen_range(-0.25..0.25)),
            radius: rng.gen_range(1.0..3.0),
            weight: rng.gen_range(1.0..31.0),
        }
    }

    pub(super) fn step(&mut self, pointer: Pos2, bounds: Vec2, tuning: &FieldTuning) {
        let offset = pointer - self.position;
        let distance = offset.length();

        if distance < tuning.influence_radius {
            let force = (tuning.influence_radius - distance) / tuning.influence_radius;
            let push = force * self.weight * 0.5 * tuning.repulsion_boost;
            self.position -= Vec2::angled(offset.angle()) * push;
        } else {
            self.position += (self.base - self.position) * tuning.return_rate;
        }

        self.base += self.drift * tuning.drift_scale;
        if self.base.x < 0.0 || self.base.x > bounds.x {
            self.drift.x = -self.drift.x;
        }
        if self.base.y < 0.0 || self.base.y > bounds.y {
            self.drift.y = -self.drift.y;
        }
        self.base.x = self.base.x.clamp(0.0, bounds.x);
        self.base.y = self.base.y.clamp(0.0, bounds.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn still_particle(position: Pos2, weight: f32) -> Particle {
        Particle {
            position,
            base: position,
            drift: Vec2::ZERO,
            radius: 2.0,
            weight,
        }
    }

    #[test]
    fn spawn_stays_inside_bounds() {
        let mut rng = rand::thread_rng();
        let bounds = vec2(640.0, 480.0);

        for _ in 0..200 {
            let particle = Particle::spawn(&mut rng, bounds);
            assert!(particle.base.x >= 0.0 && particle.base.x < bounds.x);
            assert!(particle.base.y >= 0.0 && particle.base.y < bounds.y);
            assert_eq!(particle.position, particle.base);
            assert!(particle.radius >= 1.0 && particle.radius < 3.0);
            assert!(particle.weight >= 1.0 && particle.weight < 31.0);
            assert!(particle.drift.x >= -0.25 && particle.drift.x < 0.25);
            assert!(particle.drift.y >= -0.25 && particle.drift.y < 0.25);
        }
    }

    #[test]
    fn spawn_handles_zero_extent() {
        let mut rng = rand::thread_rng();
        let particle = Particle::spawn(&mut rng, Vec2::ZERO);
        assert_eq!(particle.base, pos2(0.0, 0.0));
    }

    #[test]
    fn repulsion_pushes_away_from_pointer() {
        let tuning = FieldTuning::default();
        let pointer = pos2(110.0, 100.0);
        let mut particle = still_particle(pos2(100.0, 100.0), 10.0);

        let before = particle.position.distance(pointer);
        particle.step(pointer, vec2(400.0, 400.0), &tuning);
        assert!(particle.position.distance(pointer) > before);
    }

    #[test]
    fn repulsion_moves_a_particle_sitting_on_the_pointer() {
        let tuning = FieldTuning::default();
        let pointer = pos2(50.0, 50.0);
        let mut particle = still_particle(pointer, 4.0);

        particle.step(pointer, vec2(200.0, 200.0), &tuning);
        assert!(particle.position.distance(pointer) > 0.0);
    }

    #[test]
    fn relaxation_approaches_base_monotonically() {
        let tuning = FieldTuning::default();
        let pointer = pos2(-1000.0, -1000.0);
        let mut particle = still_particle(pos2(100.0, 100.0), 8.0);
        particle.position = pos2(140.0, 90.0);

        let mut previous = particle.position.distance(particle.base);
        for _ in 0..60 {
            particle.step(pointer, vec2(400.0, 400.0), &tuning);
            let current = particle.position.distance(particle.base);
            assert!(current < previous);
            previous = current;
        }
    }

    #[test]
    fn drift_reflects_at_the_right_edge() {
        let tuning = FieldTuning::default();
        let bounds = vec2(200.0, 200.0);
        let mut particle = still_particle(pos2(199.0, 100.0), 8.0);
        particle.drift = vec2(2.0, 0.0);

        particle.step(pos2(-1000.0, -1000.0), bounds, &tuning);
        assert!(particle.drift.x < 0.0);
        assert!(particle.base.x >= 0.0 && particle.base.x <= bounds.x);
    }

    #[test]
    fn base_never_leaves_bounds() {
        let tuning = FieldTuning::default();
        let pointer = pos2(-1000.0, -1000.0);
        let bounds = vec2(120.0, 80.0);
        let mut rng = rand::thread_rng();
        let mut particle = Particle::spawn(&mut rng, bounds);

        for _ in 0..2_000 {
            particle.step(pointer, bounds, &tuning);
            assert!(particle.base.x >= 0.0 && particle.base.x <= bounds.x);
            assert!(particle.base.y >= 0.0 && particle.base.y <= bounds.y);
        }
    }
}
