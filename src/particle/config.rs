// FolioFx
// copyright folio_fx developers 2025

use crate::util::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldMotion {
    /// y = base.y + sin(t·speed + phase)·float_intensity
    Float { speed: f32, float_intensity: f32 },
    /// Circles the particle's seeded base point in the xz plane:
    /// angle = t·speed + offset, x = base.x + cos·radius, z = base.z + sin·radius,
    /// plus an optional vertical bob of sin(t + offset)·bob.
    /// A zero placement radius puts every base on the field centre.
    Orbit { speed: f32, radius: f32, bob: f32 },
    /// falls at fall_speed, wraps from floor to ceiling, sways sideways
    Stream {
        fall_speed: f32,
        floor: f32,
        ceiling: f32,
        sway: f32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Placement {
    /// uniform inside a sphere of `radius`
    Volume,
    /// uniform on the surface of a sphere of `radius`
    Shell,
    /// uniform inside a box of the given extent
    Box { extent: Vec3 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollAxis {
    Depth,
    Vertical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub name: String,
    pub seed: u64,
    pub placement: Placement,
    pub radius: f32,
    pub center: Vec3,
    pub motion: FieldMotion,
    // phase of particle i is i * phase_step
    pub phase_step: f32,
    pub palette_size: u8,
    // fraction of the tier's particle_count this field uses
    pub share: f32,
    // fixed number of particles, ignores the tier when set
    pub fixed_count: Option<u32>,
    pub pointer_influence: f32,
    pub easing: f32,
    pub scroll_axis: ScrollAxis,
    pub scroll_depth: f32,
    // idle group rotation, radians per second
    pub spin: Vec3,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            name: "particle_field".to_string(),
            seed: 0,
            placement: Placement::Volume,
            radius: 10.0,
            center: Vec3::ZERO,
            motion: FieldMotion::Float {
                speed: 1.0,
                float_intensity: 0.0,
            },
            phase_step: 0.1,
            palette_size: 1,
            share: 1.0,
            fixed_count: None,
            pointer_influence: 0.5,
            easing: 0.05,
            scroll_axis: ScrollAxis::Depth,
            scroll_depth: 2.0,
            spin: Vec3::new(0.005, 0.01, 0.0),
        }
    }
}

impl FieldConfig {
    /// background star shell behind the hero section
    pub fn hero_stars() -> Self {
        Self {
            name: "hero_stars".to_string(),
            seed: 0x5eed_0001,
            placement: Placement::Shell,
            radius: 15.0,
            center: Vec3::new(0.0, 0.0, -5.0),
            palette_size: 3,
            pointer_influence: 0.2,
            scroll_depth: 0.0,
            spin: Vec3::new(0.0, 0.05, 0.0),
            ..Self::default()
        }
    }

    /// falling code particles behind the projects section
    pub fn code_stream() -> Self {
        Self {
            name: "code_stream".to_string(),
            seed: 0x5eed_0002,
            placement: Placement::Box {
                extent: Vec3::new(20.0, 15.0, 10.0),
            },
            motion: FieldMotion::Stream {
                fall_speed: 0.5,
                floor: -8.0,
                ceiling: 8.0,
                sway: 0.01,
            },
            palette_size: 3,
            share: 0.3,
            pointer_influence: 0.2,
            scroll_depth: 3.0,
            spin: Vec3::ZERO,
            ..Self::default()
        }
    }

    /// badges orbiting the avatar, evenly spaced by phase
    pub fn tech_orbit(count: u32) -> Self {
        Self {
            name: "tech_orbit".to_string(),
            seed: 0x5eed_0003,
            radius: 0.0,
            motion: FieldMotion::Orbit {
                speed: 0.5,
                radius: 3.0,
                bob: 0.5,
            },
            phase_step: TAU / count.max(1) as f32,
            fixed_count: Some(count),
            pointer_influence: 0.3,
            scroll_depth: 0.0,
            spin: Vec3::ZERO,
            ..Self::default()
        }
    }

    /// floating dust in the about section
    pub fn floating_dust() -> Self {
        Self {
            name: "floating_dust".to_string(),
            seed: 0x5eed_0004,
            radius: 6.0,
            motion: FieldMotion::Float {
                speed: 1.0,
                float_intensity: 0.5,
            },
            share: 0.5,
            ..Self::default()
        }
    }
}
