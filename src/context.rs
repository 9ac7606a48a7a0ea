// FolioFx
// copyright folio_fx developers 2025

//! SceneContext holds the state every decorative component reads each tick:
//! pointer and scroll signals, device flags, camera, loading progress and the
//! published quality settings.
//!
//! Host event handlers write pointer / scroll / device values through the
//! setters here (last value wins). Quality is different: only
//! AdaptiveQualityController::publish can change it, components get a copy
//! through quality() and should re-read it every tick.

use crate::{
    particle::FieldInputs,
    perf::{QualitySettings, QualityTier},
    util::{Vec2, Vec3},
    DEFAULT_FPS,
};

pub struct SceneContext {
    pub stage: u32,
    active_section: String,
    camera_position: Vec3,
    camera_target: Vec3,
    fps: u32,
    pointer: Vec2,
    scroll_progress: f32,
    loading: bool,
    loading_progress: f32,
    is_mobile: bool,
    supports_webgl: bool,
    reduced_motion: bool,
    quality: QualitySettings,
}

impl Default for SceneContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneContext {
    pub fn new() -> Self {
        Self {
            stage: 0,
            active_section: "home".to_string(),
            camera_position: Vec3::new(0.0, 0.0, 5.0),
            camera_target: Vec3::ZERO,
            fps: DEFAULT_FPS,
            pointer: Vec2::default(),
            scroll_progress: 0.0,
            loading: true,
            loading_progress: 0.0,
            is_mobile: false,
            supports_webgl: true,
            reduced_motion: false,
            quality: QualitySettings::for_tier(QualityTier::Low),
        }
    }

    pub fn quality(&self) -> QualitySettings {
        self.quality
    }

    // writer side lives in AdaptiveQualityController::publish
    pub(crate) fn set_quality(&mut self, settings: QualitySettings) {
        self.quality = settings;
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub(crate) fn set_fps(&mut self, fps: u32) {
        self.fps = fps;
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// normalised pointer, clamped into [-1, 1] on both axes
    pub fn set_pointer(&mut self, pointer: Vec2) {
        self.pointer = Vec2::new(pointer.x.clamp(-1.0, 1.0), pointer.y.clamp(-1.0, 1.0));
    }

    pub fn scroll_progress(&self) -> f32 {
        self.scroll_progress
    }

    pub fn set_scroll_progress(&mut self, progress: f32) {
        self.scroll_progress = progress.clamp(0.0, 1.0);
    }

    pub fn active_section(&self) -> &str {
        &self.active_section
    }

    pub fn set_active_section(&mut self, section: &str) {
        self.active_section = section.to_string();
    }

    pub fn camera(&self) -> (Vec3, Vec3) {
        (self.camera_position, self.camera_target)
    }

    pub fn set_camera_position(&mut self, position: Vec3) {
        self.camera_position = position;
    }

    pub fn set_camera_target(&mut self, target: Vec3) {
        self.camera_target = target;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn loading_progress(&self) -> f32 {
        self.loading_progress
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_loading_progress(&mut self, progress: f32) {
        self.loading_progress = progress.clamp(0.0, 1.0);
    }

    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    pub fn supports_webgl(&self) -> bool {
        self.supports_webgl
    }

    pub fn set_device_capabilities(&mut self, is_mobile: bool, supports_webgl: bool) {
        self.is_mobile = is_mobile;
        self.supports_webgl = supports_webgl;
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }

    /// snapshot of the live signals for this tick's particle step
    pub fn field_inputs(&self) -> FieldInputs {
        FieldInputs {
            pointer: self.pointer,
            scroll: self.scroll_progress,
            reduced_motion: self.reduced_motion,
        }
    }
}
