//! Viewport bookkeeping and image placement.

use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const ZERO: Self = Self {
        origin: Vec2::ZERO,
        size: Vec2::ZERO,
    };
}

/// "Cover" placement: scale the image so it fills the view completely,
/// centered, cropping whatever overflows.
pub fn cover_fit(image_size: Vec2, view_size: Vec2) -> Rect {
    if image_size.x < 1.0 || image_size.y < 1.0 {
        return Rect::ZERO;
    }
    let scale = (view_size.x / image_size.x).max(view_size.y / image_size.y);
    let size = image_size * scale;
    Rect {
        origin: (view_size - size) * 0.5,
        size,
    }
}

/// CSS-pixel viewport plus device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub css: Vec2,
    pub dpr: f64,
}

impl Viewport {
    pub fn new(css_width: f32, css_height: f32, dpr: f64) -> Self {
        Self {
            css: Vec2::new(css_width, css_height),
            dpr: if dpr > 0.0 { dpr } else { 1.0 },
        }
    }

    /// Canvas backing size in device pixels, clamped to at least 1x1.
    pub fn backing_size(&self) -> (u32, u32) {
        (
            ((self.css.x as f64 * self.dpr) as u32).max(1),
            ((self.css.y as f64 * self.dpr) as u32).max(1),
        )
    }

    /// A zero-area layout is unusable; feature sampling and particle
    /// placement wait until a positive size exists.
    pub fn is_degenerate(&self) -> bool {
        self.css.x < 1.0 || self.css.y < 1.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            css: Vec2::ZERO,
            dpr: 1.0,
        }
    }
}
