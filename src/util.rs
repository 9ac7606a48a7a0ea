// FolioFx
// copyright folio_fx developers 2025

//! Utilities for vectors, interpolation and random placement.
//! The seeded RNG lives in rand.rs

use keyframe::{ease, functions::Linear};
use keyframe_derive::CanTween;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

mod rand;
pub use rand::*;

#[derive(CanTween, Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(CanTween, Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn add(self, o: Vec3) -> Vec3 {
        Vec3::new(self.x + o.x, self.y + o.y, self.z + o.z)
    }

    pub fn scale(self, s: f32) -> Vec3 {
        Vec3::new(self.x * s, self.y * s, self.z * s)
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// linear interpolation, amount is clamped to 0..1
pub fn lerp(start: f32, end: f32, amount: f32) -> f32 {
    ease(Linear, start, end, amount.clamp(0.0, 1.0))
}

/// maps value from [in_min, in_max] onto [out_min, out_max], not clamped
pub fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    if in_max == in_min {
        return out_min;
    }
    (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Critically damped spring toward target, used for camera moves.
/// Returns the new value and the velocity to feed into the next call.
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: f32,
    smooth_time: f32,
    dt: f32,
) -> (f32, f32) {
    if dt <= 0.0 {
        return (current, velocity);
    }
    let smooth_time = smooth_time.max(1e-4);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (velocity + omega * change) * dt;
    let mut velocity = (velocity - omega * temp) * exp;
    let mut output = target + (change + temp) * exp;

    // never overshoot the target
    if (target - current > 0.0) == (output > target) {
        output = target;
        velocity = (output - target) / dt;
    }
    (output, velocity)
}

/// Uniform point on or inside a sphere.
/// theta = 2πU1, phi = acos(2U2 - 1), r = radius·U3 (or radius for a shell).
pub fn random_sphere_point(rand: &mut Rand, radius: f32, shell: bool) -> Vec3 {
    let theta = rand.gen_unit() * TAU;
    let phi = (2.0 * rand.gen_unit() - 1.0).clamp(-1.0, 1.0).acos();
    let r = if shell {
        radius
    } else {
        radius * rand.gen_unit()
    };
    Vec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin(),
        r * phi.cos(),
    )
}

/// Uniform point inside an axis aligned box centred at the origin
pub fn random_box_point(rand: &mut Rand, extent: Vec3) -> Vec3 {
    Vec3::new(
        (rand.gen_unit() - 0.5) * extent.x,
        (rand.gen_unit() - 0.5) * extent.y,
        (rand.gen_unit() - 0.5) * extent.z,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 10.0, 0.5) - 5.0).abs() < 1e-5);
        assert!((lerp(2.0, 4.0, 0.0) - 2.0).abs() < 1e-5);
        assert!((lerp(2.0, 4.0, 3.0) - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_map_range() {
        assert!((map_range(5.0, 0.0, 10.0, -1.0, 1.0)).abs() < 1e-6);
        assert_eq!(map_range(3.0, 1.0, 1.0, 7.0, 9.0), 7.0);
    }

    #[test]
    fn test_smooth_damp_converges() {
        let mut v = 0.0;
        let mut vel = 0.0;
        for _ in 0..600 {
            let (nv, nvel) = smooth_damp(v, 5.0, vel, 0.3, 1.0 / 60.0);
            v = nv;
            vel = nvel;
            assert!(v <= 5.0 + 1e-4);
        }
        assert!((v - 5.0).abs() < 1e-3);
    }

    #[test]
    fn test_smooth_damp_zero_dt() {
        assert_eq!(smooth_damp(1.0, 5.0, 0.25, 0.3, 0.0), (1.0, 0.25));
    }

    #[test]
    fn test_sphere_points_within_radius() {
        let mut rand = Rand::new();
        rand.srand(7);
        for _ in 0..500 {
            let p = random_sphere_point(&mut rand, 4.0, false);
            assert!(p.length() <= 4.0 + 1e-4);
            let s = random_sphere_point(&mut rand, 4.0, true);
            assert!((s.length() - 4.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_box_points_within_extent() {
        let mut rand = Rand::new();
        rand.srand(11);
        let extent = Vec3::new(20.0, 15.0, 10.0);
        for _ in 0..500 {
            let p = random_box_point(&mut rand, extent);
            assert!(p.x.abs() <= 10.0 && p.y.abs() <= 7.5 && p.z.abs() <= 5.0);
        }
    }
}
