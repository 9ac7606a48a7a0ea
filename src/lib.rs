// FolioFx
// copyright folio_fx developers 2025

//! FolioFx is the compute core behind a decorative 3D portfolio scene.
//! It keeps the visual fidelity of the scene in step with what the device
//! can actually render, and animates the particle fields that float, orbit
//! and stream behind the page content.
//!
//! The crate does no drawing. A render host (WebGL, wgpu, a terminal, a test)
//! calls into it once per displayed frame with elapsed and delta time, and
//! reads back particle positions and group transforms.
//!
//! Per tick the order is fixed:
//! 1. perf::FrameRateSampler counts the frame and refreshes its fps estimate.
//! 2. perf::AdaptiveQualityController re-evaluates the tier every 2 seconds
//!    and publishes QualitySettings into the SceneContext.
//! 3. particle::ParticleField instances resize to the published particle
//!    count and step their motion with the latest pointer and scroll input.
//!
//! Everything is single threaded and non blocking. Shared state lives in an
//! explicit SceneContext passed by reference, the controller is its only
//! writer for quality.

/// host frame rate used by SceneRunner::run
pub const HOST_FRAME: u32 = 60;

/// fps reported before the first full sampling window has elapsed
pub const DEFAULT_FPS: u32 = 60;

/// TOML configuration for quality policy and particle fields
pub mod config;

/// shared scene state: pointer, scroll, device flags, published quality
pub mod context;

/// error type for the few fallible surfaces (config, logging)
pub mod error;

/// raw pointer/scroll measurements normalised into scene signals
pub mod input;

/// log
pub mod log;

/// particle field model: seeded placement, float / orbit / stream motion,
/// pointer easing and scroll offset
pub mod particle;

/// frame rate sampling, device probing and adaptive quality control
pub mod perf;

/// Scene trait and the runner that drives one tick per frame
pub mod scene;

/// vectors, interpolation helpers and the seeded RNG
pub mod util;

pub use error::{FxError, Result};
