// FolioFx
// copyright folio_fx developers 2025

//! Converts raw host measurements into the normalised scene signals.
//! Window pixels become a pointer in [-1, 1]² with y pointing up,
//! document scroll becomes a progress value in [0, 1].

use crate::util::Vec2;

/// client pixel coordinates to normalised device coordinates
pub fn normalize_pointer(client_x: f32, client_y: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::default();
    }
    Vec2::new(
        (client_x / width * 2.0 - 1.0).clamp(-1.0, 1.0),
        (-(client_y / height) * 2.0 + 1.0).clamp(-1.0, 1.0),
    )
}

/// client pixel coordinates as percentages of the window
pub fn pointer_percentage(client_x: f32, client_y: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::default();
    }
    Vec2::new(client_x / width * 100.0, client_y / height * 100.0)
}

/// how far down the document the viewport is, 0 when nothing scrolls
pub fn scroll_progress(scroll_top: f32, document_height: f32, window_height: f32) -> f32 {
    let max_scroll = document_height - window_height;
    if max_scroll <= 0.0 {
        return 0.0;
    }
    (scroll_top / max_scroll).clamp(0.0, 1.0)
}

/// Fraction of an element's height currently inside the viewport
pub fn element_visibility(element_top: f32, element_bottom: f32, window_height: f32) -> f32 {
    let height = element_bottom - element_top;
    if height <= 0.0 || element_top >= window_height || element_bottom <= 0.0 {
        return 0.0;
    }
    let visible = element_bottom.min(window_height) - element_top.max(0.0);
    (visible / height).clamp(0.0, 1.0)
}
