// FolioFx
// copyright folio_fx developers 2025

use super::config::{FieldConfig, FieldMotion, Placement, ScrollAxis};
use crate::{
    perf::QualitySettings,
    util::{random_box_point, random_sphere_point, Rand, Vec2, Vec3},
};
use keyframe::{ease, functions::Linear};
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    // seeded placement, float and orbit motion are offsets from it
    pub base: Vec3,
    pub color_index: u8,
    pub phase_offset: f32,
}

/// Live signals read once per tick, last value wins
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FieldInputs {
    pub pointer: Vec2,
    pub scroll: f32,
    pub reduced_motion: bool,
}

/// Moves one particle for time t. Stream motion accumulates, so it also
/// needs the frame delta; float and orbit are closed form in t.
pub fn advance_particle(p: &mut Particle, motion: &FieldMotion, t: f32, dt: f32) {
    match *motion {
        FieldMotion::Float {
            speed,
            float_intensity,
        } => {
            p.position = p.base;
            p.position.y = p.base.y + (t * speed + p.phase_offset).sin() * float_intensity;
        }
        FieldMotion::Orbit { speed, radius, bob } => {
            // centred on base, not on the origin
            let angle = t * speed + p.phase_offset;
            p.position.x = p.base.x + angle.cos() * radius;
            p.position.z = p.base.z + angle.sin() * radius;
            p.position.y = p.base.y + (t + p.phase_offset).sin() * bob;
        }
        FieldMotion::Stream {
            fall_speed,
            floor,
            ceiling,
            sway,
        } => {
            p.position.y -= dt * fall_speed;
            // wrap, not clamp
            if p.position.y < floor {
                p.position.y = ceiling;
            }
            p.position.x += (t + p.position.y).sin() * sway;
        }
    }
}

/// One per-frame step of current toward target: current += (target - current)·factor.
/// Frame rate dependent, a 120Hz display converges twice as fast as 60Hz.
pub fn ease_toward(current: Vec3, target: Vec3, factor: f32) -> Vec3 {
    ease(Linear, current, target, factor.clamp(0.0, 1.0))
}

fn seed_particles(config: &FieldConfig, count: usize) -> Vec<Particle> {
    let mut rand = Rand::with_seed(config.seed);
    let mut particles = Vec::with_capacity(count);
    for i in 0..count {
        let local = match config.placement {
            Placement::Volume => random_sphere_point(&mut rand, config.radius, false),
            Placement::Shell => random_sphere_point(&mut rand, config.radius, true),
            Placement::Box { extent } => random_box_point(&mut rand, extent),
        };
        let base = config.center.add(local);
        particles.push(Particle {
            position: base,
            base,
            color_index: rand.pick_index(config.palette_size as usize) as u8,
            phase_offset: i as f32 * config.phase_step,
        });
    }
    particles
}

/// A field of particles sharing one motion model
#[derive(Debug, Clone)]
pub struct ParticleField {
    config: FieldConfig,
    particles: Vec<Particle>,
    rotation: Vec3,
    offset: Vec3,
}

impl ParticleField {
    pub fn new(config: FieldConfig, count: usize) -> Self {
        let particles = seed_particles(&config, count);
        Self {
            config,
            particles,
            rotation: Vec3::ZERO,
            offset: Vec3::ZERO,
        }
    }

    pub fn for_quality(config: FieldConfig, settings: &QualitySettings) -> Self {
        let count = Self::target_count(&config, settings);
        Self::new(config, count)
    }

    /// particles this field wants under the given settings
    pub fn target_count(config: &FieldConfig, settings: &QualitySettings) -> usize {
        match config.fixed_count {
            Some(n) => n as usize,
            None => (settings.particle_count as f32 * config.share.max(0.0)).round() as usize,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// group rotation in radians (x, y, z)
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    /// group translation driven by scroll
    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    /// xyz triples ready for a vertex buffer upload
    pub fn positions_flat(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.particles.len() * 3);
        for p in &self.particles {
            out.extend_from_slice(&[p.position.x, p.position.y, p.position.z]);
        }
        out
    }

    /// Rebuilds the whole buffer from the seed when the count changes.
    /// Particle identities are not carried across a resize.
    pub fn resize(&mut self, count: usize) -> bool {
        if count == self.particles.len() {
            return false;
        }
        debug!(
            "field {}: resize {} -> {} particles",
            self.config.name,
            self.particles.len(),
            count
        );
        self.particles = seed_particles(&self.config, count);
        true
    }

    pub fn sync_quality(&mut self, settings: &QualitySettings) -> bool {
        let count = Self::target_count(&self.config, settings);
        self.resize(count)
    }

    /// Advance the field to elapsed time t with frame delta dt
    pub fn step(&mut self, t: f32, dt: f32, inputs: &FieldInputs) {
        if inputs.reduced_motion {
            return;
        }

        self.rotation = self.rotation.add(self.config.spin.scale(dt));
        if self.config.pointer_influence != 0.0 {
            // pointer x turns the field around y, pointer y around x
            let target = Vec3::new(
                inputs.pointer.y * self.config.pointer_influence,
                inputs.pointer.x * self.config.pointer_influence,
                self.rotation.z,
            );
            self.rotation = ease_toward(self.rotation, target, self.config.easing);
        }

        let shift = inputs.scroll * self.config.scroll_depth;
        match self.config.scroll_axis {
            ScrollAxis::Depth => self.offset.z = shift,
            ScrollAxis::Vertical => self.offset.y = shift,
        }

        let motion = self.config.motion;
        for p in self.particles.iter_mut() {
            advance_particle(p, &motion, t, dt);
        }
    }
}
