// FolioFx
// copyright folio_fx developers 2025

//! Quality tiers and the adaptive controller that steps between them.
//!
//! The controller is a throttled control loop: every check interval it
//! compares the sampled fps with a target band and moves at most one tier.
//! Dropping below `target - lower_margin` steps down, rising above
//! `target + upper_margin` steps up, anything in between holds. The band is
//! asymmetric on purpose so the tier does not flap around the target.
//!
//! Stepping up is gated by the device: the destination tier is re-derived
//! from a probe fps together with the live mobile / memory signals, and the
//! step only happens if the derived tier actually clears the current one.

use super::clock::{Clock, SystemClock};
use super::device::{DeviceSignals, PerformanceSample, MAX_PIXEL_RATIO};
use crate::context::SceneContext;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    Low,
    Medium,
    High,
    Ultra,
}

impl QualityTier {
    pub const ALL: [QualityTier; 4] = [
        QualityTier::Low,
        QualityTier::Medium,
        QualityTier::High,
        QualityTier::Ultra,
    ];

    /// one tier down, clamps at Low
    pub fn lower(self) -> QualityTier {
        match self {
            QualityTier::Ultra => QualityTier::High,
            QualityTier::High => QualityTier::Medium,
            QualityTier::Medium | QualityTier::Low => QualityTier::Low,
        }
    }

    /// one tier up, clamps at Ultra
    pub fn higher(self) -> QualityTier {
        match self {
            QualityTier::Low => QualityTier::Medium,
            QualityTier::Medium => QualityTier::High,
            QualityTier::High | QualityTier::Ultra => QualityTier::Ultra,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QualityTier::Low => "low",
            QualityTier::Medium => "medium",
            QualityTier::High => "high",
            QualityTier::Ultra => "ultra",
        }
    }

    // Low has no requirement, it is the fallback
    fn requirement(self) -> Option<TierRequirement> {
        match self {
            QualityTier::Ultra => Some(TierRequirement {
                min_fps: 55.0,
                desktop_only: true,
                min_memory_mb: 2000.0,
            }),
            QualityTier::High => Some(TierRequirement {
                min_fps: 45.0,
                desktop_only: true,
                min_memory_mb: 1000.0,
            }),
            QualityTier::Medium => Some(TierRequirement {
                min_fps: 30.0,
                desktop_only: false,
                min_memory_mb: 500.0,
            }),
            QualityTier::Low => None,
        }
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct TierRequirement {
    min_fps: f32,
    desktop_only: bool,
    // memory must be strictly greater
    min_memory_mb: f32,
}

impl TierRequirement {
    fn satisfied_by(&self, s: &PerformanceSample) -> bool {
        s.fps >= self.min_fps
            && !(self.desktop_only && s.is_mobile)
            && s.memory_mb > self.min_memory_mb
    }
}

/// Rendering parameters for one tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualitySettings {
    pub level: QualityTier,
    pub particle_count: u32,
    pub shadow_map_size: u32,
    pub antialias: bool,
    pub post_processing: bool,
    pub pixel_ratio: f32,
}

impl QualitySettings {
    pub fn for_tier(tier: QualityTier) -> Self {
        match tier {
            QualityTier::Ultra => Self {
                level: tier,
                particle_count: 2000,
                shadow_map_size: 2048,
                antialias: true,
                post_processing: true,
                pixel_ratio: MAX_PIXEL_RATIO,
            },
            QualityTier::High => Self {
                level: tier,
                particle_count: 1500,
                shadow_map_size: 1024,
                antialias: true,
                post_processing: true,
                pixel_ratio: 1.5,
            },
            QualityTier::Medium => Self {
                level: tier,
                particle_count: 800,
                shadow_map_size: 512,
                antialias: true,
                post_processing: false,
                pixel_ratio: 1.0,
            },
            QualityTier::Low => Self {
                level: tier,
                particle_count: 400,
                shadow_map_size: 256,
                antialias: false,
                post_processing: false,
                pixel_ratio: 1.0,
            },
        }
    }

    /// First tier, from ultra downward, whose requirements the sample meets.
    pub fn derive(sample: &PerformanceSample) -> Self {
        let tier = QualityTier::ALL
            .iter()
            .rev()
            .copied()
            .find(|t| match t.requirement() {
                Some(req) => req.satisfied_by(sample),
                None => true,
            })
            .unwrap_or(QualityTier::Low);
        Self::for_tier(tier)
    }

    /// Never render above the physical pixel ratio of the display
    pub fn clamp_pixel_ratio(mut self, device_ratio: f32) -> Self {
        self.pixel_ratio = self.pixel_ratio.min(device_ratio.max(1.0));
        self
    }
}

/// Probe fps used when re-deriving the settings of a destination tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeFps {
    pub low: f32,
    pub medium: f32,
    pub high: f32,
    pub ultra: f32,
}

impl ProbeFps {
    pub fn get(&self, tier: QualityTier) -> f32 {
        match tier {
            QualityTier::Low => self.low,
            QualityTier::Medium => self.medium,
            QualityTier::High => self.high,
            QualityTier::Ultra => self.ultra,
        }
    }
}

impl Default for ProbeFps {
    fn default() -> Self {
        Self {
            low: 20.0,
            medium: 40.0,
            high: 50.0,
            ultra: 60.0,
        }
    }
}

/// Tunables of the control loop
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityPolicy {
    pub target_fps: f32,
    pub lower_margin: f32,
    pub upper_margin: f32,
    pub check_interval_ms: f64,
    pub up_probe: ProbeFps,
}

impl Default for QualityPolicy {
    fn default() -> Self {
        Self {
            target_fps: 30.0,
            lower_margin: 5.0,
            upper_margin: 10.0,
            check_interval_ms: 2000.0,
            up_probe: ProbeFps::default(),
        }
    }
}

impl QualityPolicy {
    pub fn step_down_below(&self) -> f32 {
        self.target_fps - self.lower_margin
    }

    pub fn step_up_above(&self) -> f32 {
        self.target_fps + self.upper_margin
    }
}

/// Owns the current QualitySettings and the evaluation timer.
/// Readers get copies through current() or SceneContext::quality().
#[derive(Debug, Clone)]
pub struct AdaptiveQualityController<C: Clock = SystemClock> {
    clock: C,
    policy: QualityPolicy,
    current: QualitySettings,
    last_eval_ms: f64,
}

impl AdaptiveQualityController<SystemClock> {
    pub fn new(initial: PerformanceSample) -> Self {
        Self::with_clock(SystemClock::new(), QualityPolicy::default(), initial)
    }
}

impl<C: Clock> AdaptiveQualityController<C> {
    /// initial tier derived from a snapshot
    pub fn with_clock(clock: C, policy: QualityPolicy, initial: PerformanceSample) -> Self {
        let settings = QualitySettings::derive(&initial);
        info!(
            "[Performance] Initial quality {} (fps={} mobile={} memory={}MB)",
            settings.level, initial.fps, initial.is_mobile, initial.memory_mb
        );
        Self::with_settings(clock, policy, settings)
    }

    pub fn with_settings(clock: C, policy: QualityPolicy, settings: QualitySettings) -> Self {
        let last_eval_ms = clock.now_ms();
        Self {
            clock,
            policy,
            current: settings,
            last_eval_ms,
        }
    }

    pub fn current(&self) -> QualitySettings {
        self.current
    }

    pub fn policy(&self) -> &QualityPolicy {
        &self.policy
    }

    /// Re-evaluates at most once per check interval, otherwise returns the
    /// cached settings untouched.
    pub fn update(
        &mut self,
        sampled_fps: f32,
        is_mobile: bool,
        memory_mb: f32,
    ) -> QualitySettings {
        let now = self.clock.now_ms();
        if now - self.last_eval_ms < self.policy.check_interval_ms {
            return self.current;
        }
        self.last_eval_ms = now;

        let level = self.current.level;
        if sampled_fps < self.policy.step_down_below() {
            if level != QualityTier::Low {
                self.current = QualitySettings::for_tier(level.lower());
                info!(
                    "[Performance] Reducing quality to {} (FPS: {})",
                    self.current.level, sampled_fps
                );
            }
        } else if sampled_fps > self.policy.step_up_above() && level != QualityTier::Ultra {
            let next = level.higher();
            let probe = PerformanceSample {
                fps: self.policy.up_probe.get(next),
                memory_mb,
                is_mobile,
            };
            let derived = QualitySettings::derive(&probe);
            if derived.level > level {
                self.current = QualitySettings::for_tier(next);
                info!(
                    "[Performance] Increasing quality to {} (FPS: {})",
                    self.current.level, sampled_fps
                );
            } else {
                debug!(
                    "[Performance] Holding {}: device caps at {} (mobile={} memory={}MB)",
                    level, derived.level, is_mobile, memory_mb
                );
            }
        } else {
            trace!("[Performance] Holding {} (FPS: {})", level, sampled_fps);
        }
        self.current
    }

    /// update with probe signals, unknown values count as least favourable
    pub fn update_with_signals(
        &mut self,
        sampled_fps: f32,
        signals: &DeviceSignals,
    ) -> QualitySettings {
        let (is_mobile, memory_mb) = signals.resolve();
        self.update(sampled_fps, is_mobile, memory_mb)
    }

    /// Evaluate and publish into the shared context. This is the only path
    /// by which the context's quality changes.
    pub fn publish(
        &mut self,
        ctx: &mut SceneContext,
        sampled_fps: u32,
        signals: &DeviceSignals,
    ) -> QualitySettings {
        let settings = self.update_with_signals(sampled_fps as f32, signals);
        ctx.set_quality(settings);
        settings
    }
}
