// FolioFx
// copyright folio_fx developers 2025

//! Performance module: measures the achieved frame rate and maps it, together
//! with the device class, onto a discrete quality tier.
//!
//! clock: wall clock and manual clock behind one trait.
//! fps: FrameRateSampler, a 1 second window fps counter.
//! device: device signals, GPU tier, particle budget and pixel ratio helpers.
//! quality: QualityTier, QualitySettings and the AdaptiveQualityController.

mod clock;
pub use clock::*;

mod device;
pub use device::*;

mod fps;
pub use fps::*;

mod quality;
pub use quality::*;
