// FolioFx
// copyright folio_fx developers 2025

use folio_fx::perf::{
    AdaptiveQualityController, DeviceSignals, FrameRateSampler, ManualClock, PerformanceSample,
    QualityPolicy, QualitySettings, QualityTier,
};
use folio_fx::scene::{FieldScene, SceneRunner};

fn desktop(fps: f32) -> PerformanceSample {
    PerformanceSample {
        fps,
        memory_mb: 8192.0,
        is_mobile: false,
    }
}

#[test]
fn settings_grow_with_tier() {
    for pair in QualityTier::ALL.windows(2) {
        let lo = QualitySettings::for_tier(pair[0]);
        let hi = QualitySettings::for_tier(pair[1]);
        assert!(lo.particle_count <= hi.particle_count);
        assert!(lo.shadow_map_size <= hi.shadow_map_size);
        assert!(lo.antialias <= hi.antialias);
        assert!(lo.post_processing <= hi.post_processing);
        assert!(lo.pixel_ratio <= hi.pixel_ratio);
    }
}

#[test]
fn sustained_low_fps_walks_down_to_low() {
    let clock = ManualClock::new();
    let mut c = AdaptiveQualityController::with_clock(
        clock.clone(),
        QualityPolicy::default(),
        desktop(60.0),
    );
    assert_eq!(c.current().level, QualityTier::Ultra);

    let mut seen = vec![];
    for _ in 0..3 {
        clock.advance(2000.0);
        seen.push(c.update(20.0, false, 8192.0).level);
    }
    assert_eq!(
        seen,
        vec![QualityTier::High, QualityTier::Medium, QualityTier::Low]
    );

    for _ in 0..5 {
        clock.advance(2000.0);
        assert_eq!(c.update(20.0, false, 8192.0).level, QualityTier::Low);
    }
}

#[test]
fn sustained_high_fps_climbs_one_tier_per_cycle() {
    let clock = ManualClock::new();
    let mut c = AdaptiveQualityController::with_settings(
        clock.clone(),
        QualityPolicy::default(),
        QualitySettings::for_tier(QualityTier::Low),
    );

    let mut seen = vec![];
    for _ in 0..3 {
        clock.advance(2000.0);
        seen.push(c.update(60.0, false, 4096.0).level);
    }
    assert_eq!(
        seen,
        vec![QualityTier::Medium, QualityTier::High, QualityTier::Ultra]
    );

    clock.advance(2000.0);
    assert_eq!(c.update(60.0, false, 4096.0).level, QualityTier::Ultra);
}

#[test]
fn mobile_device_stops_at_medium() {
    let clock = ManualClock::new();
    let mut c = AdaptiveQualityController::with_settings(
        clock.clone(),
        QualityPolicy::default(),
        QualitySettings::for_tier(QualityTier::Low),
    );
    for _ in 0..6 {
        clock.advance(2000.0);
        c.update_with_signals(60.0, &DeviceSignals::new(true, 4096.0));
    }
    assert_eq!(c.current().level, QualityTier::Medium);
}

#[test]
fn no_more_than_one_change_per_interval() {
    let clock = ManualClock::new();
    let mut c = AdaptiveQualityController::with_clock(
        clock.clone(),
        QualityPolicy::default(),
        desktop(60.0),
    );
    let mut level = c.current().level;
    let mut last_change: Option<f64> = None;
    let (mut downs, mut ups) = (0, 0);
    // load flips every 2 seconds, with 100ms jitter inside each phase
    for i in 1..=200 {
        let now = i as f64 * 100.0;
        clock.set(now);
        let heavy = (i / 20) % 2 == 1;
        let fps = match (heavy, i % 2 == 0) {
            (true, true) => 10.0,
            (true, false) => 20.0,
            (false, true) => 90.0,
            (false, false) => 28.0,
        };
        let next = c.update(fps, false, 8192.0).level;
        if next != level {
            if let Some(prev) = last_change {
                assert!(now - prev >= 2000.0, "changed at {} and {}", prev, now);
            }
            if next < level {
                downs += 1;
            } else {
                ups += 1;
            }
            last_change = Some(now);
            level = next;
        }
    }
    assert!(downs > 0 && ups > 0, "downs {} ups {}", downs, ups);
}

#[test]
fn sampler_counts_thirty_frames() {
    let clock = ManualClock::new();
    let mut s = FrameRateSampler::with_clock(clock.clone());
    let mut fps = 0;
    for i in 1..=30 {
        clock.set(i as f64 * 1000.0 / 30.0);
        fps = s.update();
    }
    assert_eq!(fps, 30);
}

#[test]
fn runner_degrades_scene_under_load() {
    let clock = ManualClock::new();
    let mut r = SceneRunner::with_clock(
        FieldScene::portfolio(),
        clock.clone(),
        QualityPolicy::default(),
        DeviceSignals::new(false, 8192.0),
    );
    r.init();
    assert_eq!(r.scene.particle_total(), 2000 + 600 + 8 + 1000);

    let mut changes = vec![];
    let mut level = r.context.quality().level;
    // 20 fps for seven seconds
    for i in 1..=140 {
        clock.set(i as f64 * 50.0);
        r.on_tick(0.05);
        let next = r.context.quality().level;
        if next != level {
            changes.push((i * 50, next));
            level = next;
        }
    }
    assert_eq!(
        changes,
        vec![
            (2000, QualityTier::High),
            (4000, QualityTier::Medium),
            (6000, QualityTier::Low)
        ]
    );
    assert_eq!(r.context.fps(), 20);
    assert_eq!(r.scene.particle_total(), 400 + 120 + 8 + 200);
}
