// FolioFx
// copyright folio_fx developers 2025

//! Configuration loaded from TOML.
//!
//! ```toml
//! [policy]
//! target_fps = 30.0
//! check_interval_ms = 2000.0
//!
//! [[fields]]
//! name = "hero_stars"
//! radius = 15.0
//! placement = { kind = "shell" }
//! motion = { kind = "float", speed = 1.0, float_intensity = 0.0 }
//! ```
//!
//! Every key is optional, missing keys take the built-in defaults.

use crate::{error::Result, particle::FieldConfig, perf::QualityPolicy};
use log::info;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, sync::OnceLock};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FxConfig {
    pub policy: QualityPolicy,
    pub fields: Vec<FieldConfig>,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            policy: QualityPolicy::default(),
            fields: vec![
                FieldConfig::hero_stars(),
                FieldConfig::code_stream(),
                FieldConfig::tech_orbit(8),
                FieldConfig::floating_dust(),
            ],
        }
    }
}

impl FxConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let cfg = Self::from_toml_str(&text)?;
        info!(
            "loaded config {:?}: {} fields",
            path.as_ref(),
            cfg.fields.len()
        );
        Ok(cfg)
    }
}

/// Global config, set once at startup by the host
pub static FX_CONFIG: OnceLock<FxConfig> = OnceLock::new();

/// Returns false if a config was already installed
pub fn init_fx_config(cfg: FxConfig) -> bool {
    FX_CONFIG.set(cfg).is_ok()
}

/// Falls back to the defaults when init_fx_config was never called
pub fn get_fx_config() -> &'static FxConfig {
    FX_CONFIG.get_or_init(FxConfig::default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FxError;
    use crate::particle::{FieldMotion, Placement};

    #[test]
    fn test_empty_is_default() {
        let cfg = FxConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, FxConfig::default());
    }

    #[test]
    fn test_partial_policy() {
        let cfg = FxConfig::from_toml_str("[policy]\ntarget_fps = 45.0\n").unwrap();
        assert_eq!(cfg.policy.target_fps, 45.0);
        assert_eq!(cfg.policy.check_interval_ms, 2000.0);
        assert_eq!(cfg.policy.up_probe.ultra, 60.0);
    }

    #[test]
    fn test_fields_table() {
        let text = r#"
[[fields]]
name = "rain"
seed = 7
placement = { kind = "box", extent = { x = 4.0, y = 8.0, z = 4.0 } }
motion = { kind = "stream", fall_speed = 1.0, floor = -4.0, ceiling = 4.0, sway = 0.0 }
fixed_count = 32
"#;
        let cfg = FxConfig::from_toml_str(text).unwrap();
        assert_eq!(cfg.fields.len(), 1);
        let f = &cfg.fields[0];
        assert_eq!(f.name, "rain");
        assert_eq!(f.fixed_count, Some(32));
        assert!(matches!(f.placement, Placement::Box { .. }));
        assert!(matches!(f.motion, FieldMotion::Stream { ceiling, .. } if ceiling == 4.0));
        assert_eq!(f.easing, 0.05);
    }

    #[test]
    fn test_bad_toml() {
        let err = FxConfig::from_toml_str("[policy]\ntarget_fps = \"fast\"\n").unwrap_err();
        assert!(matches!(err, FxError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = FxConfig::load("/nonexistent/folio_fx.toml").unwrap_err();
        assert!(matches!(err, FxError::Io(_)));
    }
}
