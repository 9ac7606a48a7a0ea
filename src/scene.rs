// FolioFx
// copyright folio_fx developers 2025

//! SceneRunner owns a Scene, the SceneContext, the frame rate sampler and
//! the quality controller, and performs one tick per displayed frame.
//! Be aware that all of them share the lifetime of the runner: dropping it
//! discards every particle buffer.
//!
//! # Example
//!
//! let mut r = SceneRunner::new(FieldScene::portfolio(), DeviceSignals::new(false, 8192.0));
//! r.init();
//! loop {
//!     r.context.set_pointer(latest_pointer);
//!     r.on_tick(dt);
//!     upload(r.scene.fields());
//! }

use crate::{
    context::SceneContext,
    particle::{FieldConfig, ParticleField},
    perf::{
        AdaptiveQualityController, Clock, DeviceSignals, FrameRateSampler, QualityPolicy,
        SystemClock,
    },
};
use log::info;
#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

/// The Scene interface, called once per tick after quality is published
pub trait Scene {
    fn init(&mut self, ctx: &mut SceneContext);
    fn update(&mut self, ctx: &mut SceneContext, elapsed: f32, dt: f32);
}

/// A set of particle fields that follow the published quality
pub struct FieldScene {
    configs: Vec<FieldConfig>,
    fields: Vec<ParticleField>,
}

impl FieldScene {
    pub fn new(configs: Vec<FieldConfig>) -> Self {
        Self {
            configs,
            fields: vec![],
        }
    }

    /// the decorative fields of the portfolio page
    pub fn portfolio() -> Self {
        Self::new(vec![
            FieldConfig::hero_stars(),
            FieldConfig::code_stream(),
            FieldConfig::tech_orbit(8),
            FieldConfig::floating_dust(),
        ])
    }

    pub fn fields(&self) -> &[ParticleField] {
        &self.fields
    }

    pub fn particle_total(&self) -> usize {
        self.fields.iter().map(|f| f.len()).sum()
    }
}

impl Scene for FieldScene {
    fn init(&mut self, ctx: &mut SceneContext) {
        let settings = ctx.quality();
        self.fields = self
            .configs
            .iter()
            .map(|c| ParticleField::for_quality(c.clone(), &settings))
            .collect();
        info!(
            "FieldScene init: {} fields, {} particles at {}",
            self.fields.len(),
            self.particle_total(),
            settings.level
        );
    }

    fn update(&mut self, ctx: &mut SceneContext, elapsed: f32, dt: f32) {
        // re-read every tick, never cache
        let settings = ctx.quality();
        let inputs = ctx.field_inputs();
        for field in self.fields.iter_mut() {
            field.sync_quality(&settings);
            field.step(elapsed, dt, &inputs);
        }
    }
}

/// Drives sampler -> controller -> scene in that order every tick
pub struct SceneRunner<S: Scene, C: Clock = SystemClock> {
    pub context: SceneContext,
    pub scene: S,
    sampler: FrameRateSampler<C>,
    controller: AdaptiveQualityController<C>,
    signals: DeviceSignals,
    elapsed: f32,
}

impl<S: Scene> SceneRunner<S, SystemClock> {
    pub fn new(scene: S, signals: DeviceSignals) -> Self {
        Self::with_clock(scene, SystemClock::new(), QualityPolicy::default(), signals)
    }

    /// Wall clock loop at HOST_FRAME ticks per second for the given duration.
    /// Browser hosts drive on_tick from requestAnimationFrame instead.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn run(&mut self, duration: Duration) {
        info!("Begin run...");
        let started = Instant::now();
        let mut last_tick = Instant::now();
        let tick_rate = Duration::from_nanos(1_000_000_000 / crate::HOST_FRAME as u64);

        while started.elapsed() < duration {
            let et = last_tick.elapsed();
            if et >= tick_rate {
                self.on_tick(et.as_secs_f32());
                last_tick = Instant::now();
            } else {
                std::thread::sleep(tick_rate - et);
            }
        }
        info!("End run after {} ticks", self.context.stage);
    }
}

impl<S: Scene, C: Clock + Clone> SceneRunner<S, C> {
    /// Sampler and controller share the clock. The initial tier comes from
    /// the device signals with the default fps estimate.
    pub fn with_clock(scene: S, clock: C, policy: QualityPolicy, signals: DeviceSignals) -> Self {
        let sampler = FrameRateSampler::with_clock(clock.clone());
        let initial = signals.sample(sampler.fps() as f32);
        let controller = AdaptiveQualityController::with_clock(clock, policy, initial);
        let mut context = SceneContext::new();
        let (is_mobile, _) = signals.resolve();
        context.set_device_capabilities(is_mobile, context.supports_webgl());
        context.set_quality(controller.current());
        Self {
            context,
            scene,
            sampler,
            controller,
            signals,
            elapsed: 0.0,
        }
    }

    pub fn init(&mut self) {
        info!("Init scene...");
        self.scene.init(&mut self.context);
    }

    /// device probes are sampled occasionally, not per tick
    pub fn set_device_signals(&mut self, signals: DeviceSignals) {
        self.signals = signals;
        let (is_mobile, _) = signals.resolve();
        let webgl = self.context.supports_webgl();
        self.context.set_device_capabilities(is_mobile, webgl);
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn controller(&self) -> &AdaptiveQualityController<C> {
        &self.controller
    }

    /// calls every frame: sample fps, publish quality, update scene
    pub fn on_tick(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        self.context.stage += 1;
        self.elapsed += dt;

        let fps = self.sampler.update();
        self.context.set_fps(fps);
        self.controller.publish(&mut self.context, fps, &self.signals);

        self.scene.update(&mut self.context, self.elapsed, dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perf::{ManualClock, QualityTier};

    #[test]
    fn test_initial_tier_from_signals() {
        let r = SceneRunner::with_clock(
            FieldScene::portfolio(),
            ManualClock::new(),
            QualityPolicy::default(),
            DeviceSignals::new(false, 8192.0),
        );
        assert_eq!(r.context.quality().level, QualityTier::Ultra);

        let r = SceneRunner::with_clock(
            FieldScene::portfolio(),
            ManualClock::new(),
            QualityPolicy::default(),
            DeviceSignals::default(),
        );
        assert_eq!(r.context.quality().level, QualityTier::Low);
        assert!(r.context.is_mobile());
    }

    #[test]
    fn test_init_sizes_fields() {
        let mut r = SceneRunner::with_clock(
            FieldScene::portfolio(),
            ManualClock::new(),
            QualityPolicy::default(),
            DeviceSignals::new(false, 8192.0),
        );
        r.init();
        let sizes: Vec<usize> = r.scene.fields().iter().map(|f| f.len()).collect();
        assert_eq!(sizes, vec![2000, 600, 8, 1000]);
    }

    #[test]
    fn test_tick_counts_stage_and_time() {
        let clock = ManualClock::new();
        let mut r = SceneRunner::with_clock(
            FieldScene::portfolio(),
            clock.clone(),
            QualityPolicy::default(),
            DeviceSignals::new(false, 8192.0),
        );
        r.init();
        for _ in 0..10 {
            clock.advance(16.0);
            r.on_tick(0.016);
        }
        assert_eq!(r.context.stage, 10);
        assert!((r.elapsed() - 0.16).abs() < 1e-4);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_run_ticks_on_wall_clock() {
        let mut r = SceneRunner::new(FieldScene::portfolio(), DeviceSignals::new(false, 8192.0));
        r.init();
        r.run(Duration::from_millis(100));
        assert!(r.context.stage >= 1);
        assert!(r.elapsed() > 0.0);
    }
}
