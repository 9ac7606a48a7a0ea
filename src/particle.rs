// FolioFx
// copyright folio_fx developers 2025

//! Particle fields shared by the decorative scene components.
//!
//! A field is a flat Vec of particles allocated once for the active quality
//! tier. Placement is seeded, so the same seed and count always produce the
//! same layout; when the tier changes the particle count, the whole buffer
//! is rebuilt from that seed.
//!
//! Motion is a pure function of (particle, t, dt, inputs) and comes in three
//! variants: float, orbit and stream. On top of the per-particle motion the
//! field as a group spins slowly, eases its rotation toward the pointer and
//! is pushed along one axis by scroll progress.

mod config;
pub use config::*;

mod field;
pub use field::*;
