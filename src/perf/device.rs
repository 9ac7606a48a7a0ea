// FolioFx
// copyright folio_fx developers 2025

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// highest device pixel ratio the scene will render at
pub const MAX_PIXEL_RATIO: f32 = 2.0;

/// Device capability flags as reported by the host probe.
/// A probe that cannot answer leaves the field as None.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceSignals {
    pub is_mobile: Option<bool>,
    pub memory_mb: Option<f32>,
}

impl DeviceSignals {
    pub fn new(is_mobile: bool, memory_mb: f32) -> Self {
        Self {
            is_mobile: Some(is_mobile),
            memory_mb: Some(memory_mb),
        }
    }

    /// unknown signals resolve to the least favourable value
    pub fn resolve(&self) -> (bool, f32) {
        (
            self.is_mobile.unwrap_or(true),
            self.memory_mb.unwrap_or(0.0).max(0.0),
        )
    }

    pub fn sample(&self, fps: f32) -> PerformanceSample {
        let (is_mobile, memory_mb) = self.resolve();
        PerformanceSample {
            fps,
            memory_mb,
            is_mobile,
        }
    }
}

/// Read-only snapshot fed to the quality derivation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSample {
    pub fps: f32,
    pub memory_mb: f32,
    pub is_mobile: bool,
}

/// Coarse GPU class from the unmasked WebGL renderer string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GpuTier {
    Low,
    Medium,
    High,
}

impl GpuTier {
    /// None means no renderer info was exposed, which is not a verdict
    pub fn from_renderer(renderer: Option<&str>) -> GpuTier {
        let Some(renderer) = renderer else {
            return GpuTier::Medium;
        };
        let r = renderer.to_lowercase();
        if ["nvidia", "geforce", "radeon", "amd"]
            .iter()
            .any(|k| r.contains(k))
        {
            return GpuTier::High;
        }
        if ["intel", "mali", "adreno", "powervr"]
            .iter()
            .any(|k| r.contains(k))
        {
            return GpuTier::Low;
        }
        GpuTier::Medium
    }

    fn particle_share(self) -> f32 {
        match self {
            GpuTier::High => 1.0,
            GpuTier::Medium => 0.6,
            GpuTier::Low => 0.3,
        }
    }
}

/// Particle budget for a component whose full-fidelity count is base_count
pub fn optimal_particle_count(base_count: u32, is_mobile: bool, gpu: GpuTier) -> u32 {
    let share = if is_mobile { 0.3 } else { gpu.particle_share() };
    (base_count as f32 * share).floor() as u32
}

/// devicePixelRatio capped at MAX_PIXEL_RATIO, 1.0 when unknown
pub fn device_pixel_ratio(raw: Option<f32>) -> f32 {
    match raw {
        Some(r) if r > 0.0 => r.min(MAX_PIXEL_RATIO),
        _ => 1.0,
    }
}

fn mobile_ua_regex() -> &'static Regex {
    static MOBILE_UA: OnceLock<Regex> = OnceLock::new();
    MOBILE_UA.get_or_init(|| {
        Regex::new(r"(?i)Android|webOS|iPhone|iPad|iPod|BlackBerry|IEMobile|Opera Mini")
            .expect("mobile user agent pattern is a valid regex")
    })
}

/// user agent sniffing for hosts that do not report a mobile flag
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    mobile_ua_regex().is_match(user_agent)
}
