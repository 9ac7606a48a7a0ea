// FolioFx
// copyright folio_fx developers 2025

//! folio-fx drives the scene loop against a simulated clock, so the
//! adaptive quality controller can be watched without a browser.
//!
//! Usage:
//!   folio-fx --seconds 20 --fps 60
//!   folio-fx --fps 60:18 --mobile false --memory 4096
//!   folio-fx --config fx.toml --json --log log/folio_fx.log
//!
//! --fps takes a fixed rate or a from:to ramp over the whole run.

use clap::Parser;
use folio_fx::{
    config::{get_fx_config, init_fx_config, FxConfig},
    log::init_log,
    perf::{DeviceSignals, ManualClock, QualityTier},
    scene::{FieldScene, SceneRunner},
    util::lerp,
    FxError, Result, DEFAULT_FPS,
};
use log::{info, LevelFilter};
use serde::Serialize;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "folio-fx", version, about = "simulate adaptive quality over a particle scene")]
struct Args {
    /// simulated run length in seconds
    #[arg(long, default_value_t = 20.0)]
    seconds: f32,

    /// frame rate, either N or FROM:TO for a linear ramp
    #[arg(long, default_value_t = DEFAULT_FPS.to_string())]
    fps: String,

    /// mobile flag reported by the device probe, unknown when omitted
    #[arg(long)]
    mobile: Option<bool>,

    /// device memory in MB, unknown when omitted
    #[arg(long)]
    memory: Option<f32>,

    /// overrides the placement seed of every field
    #[arg(long)]
    seed: Option<u64>,

    /// TOML config with [policy] and [[fields]]
    #[arg(long)]
    config: Option<String>,

    /// print transitions and summary as JSON lines
    #[arg(long)]
    json: bool,

    /// write a debug log to this file
    #[arg(long)]
    log: Option<String>,
}

/// highest simulated frame rate, keeps the frame step well above f64 resolution
const MAX_SIM_FPS: f32 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct FpsRamp {
    from: f32,
    to: f32,
}

impl FpsRamp {
    fn parse(s: &str) -> Result<Self> {
        let num = |v: &str| -> Result<f32> {
            let f: f32 = v
                .trim()
                .parse()
                .map_err(|_| FxError::Parse(format!("bad fps value {:?}", v)))?;
            if !f.is_finite() || f <= 0.0 || f > MAX_SIM_FPS {
                return Err(FxError::Parse(format!(
                    "fps must be in (0, {}], got {}",
                    MAX_SIM_FPS, f
                )));
            }
            Ok(f)
        };
        match s.split_once(':') {
            Some((a, b)) => Ok(Self {
                from: num(a)?,
                to: num(b)?,
            }),
            None => {
                let f = num(s)?;
                Ok(Self { from: f, to: f })
            }
        }
    }

    fn at(&self, progress: f32) -> f32 {
        lerp(self.from, self.to, progress)
    }
}

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Report {
    Transition {
        t_ms: f64,
        fps: u32,
        from: QualityTier,
        to: QualityTier,
        particles: usize,
    },
    Summary {
        frames: u64,
        final_tier: QualityTier,
        transitions: usize,
        particles: usize,
    },
}

fn emit(report: &Report, json: bool) {
    if json {
        match serde_json::to_string(report) {
            Ok(line) => println!("{}", line),
            Err(e) => eprintln!("folio-fx: {}", e),
        }
        return;
    }
    match report {
        Report::Transition {
            t_ms,
            fps,
            from,
            to,
            particles,
        } => println!(
            "{:>8.0}ms  fps {:>3}  {} -> {}  ({} particles)",
            t_ms, fps, from, to, particles
        ),
        Report::Summary {
            frames,
            final_tier,
            transitions,
            particles,
        } => println!(
            "{} frames, {} transitions, final tier {} with {} particles",
            frames, transitions, final_tier, particles
        ),
    }
}

fn run(args: &Args) -> Result<()> {
    if let Some(path) = &args.log {
        init_log(LevelFilter::Debug, path)?;
    }
    if let Some(path) = &args.config {
        init_fx_config(FxConfig::load(path)?);
    }
    let cfg = get_fx_config();
    let ramp = FpsRamp::parse(&args.fps)?;

    let mut fields = cfg.fields.clone();
    if let Some(seed) = args.seed {
        for (i, f) in fields.iter_mut().enumerate() {
            f.seed = seed.wrapping_add(i as u64);
        }
    }

    let signals = DeviceSignals {
        is_mobile: args.mobile,
        memory_mb: args.memory,
    };
    let clock = ManualClock::new();
    let mut runner = SceneRunner::with_clock(
        FieldScene::new(fields),
        clock.clone(),
        cfg.policy,
        signals,
    );
    runner.init();
    info!("folio-fx: {:?} ramp {:?}", signals, ramp);

    let total_ms = (args.seconds.max(0.0) * 1000.0) as f64;
    let mut now_ms = 0.0f64;
    let mut frames = 0u64;
    let mut transitions = 0usize;
    let mut level = runner.context.quality().level;

    while now_ms < total_ms {
        let fps = ramp.at((now_ms / total_ms) as f32);
        let frame_ms = 1000.0 / fps as f64;
        now_ms += frame_ms;
        clock.set(now_ms);
        runner.on_tick((frame_ms / 1000.0) as f32);
        frames += 1;

        let next = runner.context.quality().level;
        if next != level {
            transitions += 1;
            emit(
                &Report::Transition {
                    t_ms: now_ms,
                    fps: runner.context.fps(),
                    from: level,
                    to: next,
                    particles: runner.scene.particle_total(),
                },
                args.json,
            );
            level = next;
        }
    }

    emit(
        &Report::Summary {
            frames,
            final_tier: level,
            transitions,
            particles: runner.scene.particle_total(),
        },
        args.json,
    );
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("folio-fx: {}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_ramp_parse() {
        assert_eq!(FpsRamp::parse("45").unwrap(), FpsRamp { from: 45.0, to: 45.0 });
        let r = FpsRamp::parse("60:20").unwrap();
        assert_eq!(r.at(0.0), 60.0);
        assert_eq!(r.at(0.5), 40.0);
        assert_eq!(r.at(1.0), 20.0);
        assert!(FpsRamp::parse("fast").is_err());
        assert!(FpsRamp::parse("0").is_err());
        assert!(FpsRamp::parse("-5").is_err());
        assert!(FpsRamp::parse("inf").is_err());
        assert!(FpsRamp::parse("NaN").is_err());
        assert!(FpsRamp::parse("1e30").is_err());
        assert!(FpsRamp::parse("60:inf").is_err());
        assert!(FpsRamp::parse("1000").is_ok());
    }
}
