use glam::{Affine2, Vec2};

use crate::color::Color;
use crate::render::instance::{GlyphInstance, FRAME_BAIT, FRAME_CIRCLE, FRAME_FISH, FRAME_RECT};

/// Shapes drawn from a square em box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// Fish facing +x.
    Fish,
    /// Pointer marker.
    Bait,
}

impl Glyph {
    fn frame(self) -> u32 {
        match self {
            Glyph::Fish => FRAME_FISH,
            Glyph::Bait => FRAME_BAIT,
        }
    }
}

/// Immediate-mode 2D drawing surface with a canvas-style transform stack.
pub trait Canvas {
    fn set_fill(&mut self, color: Color);
    fn fill_rect(&mut self, origin: Vec2, size: Vec2);
    fn fill_circle(&mut self, center: Vec2, radius: f32);
    /// Draw `glyph` in a `size`-pixel box whose top-left corner is `origin`.
    fn fill_glyph(&mut self, glyph: Glyph, origin: Vec2, size: f32);
    /// Push transform and fill color.
    fn save(&mut self);
    /// Pop transform and fill color. Unbalanced restores are ignored.
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn rotate(&mut self, angle: f32);
    fn scale(&mut self, factor: Vec2);
}

/// Canvas that turns every fill into one GPU quad instance.
pub struct InstanceCanvas<'a> {
    out: &'a mut Vec<GlyphInstance>,
    fill: Color,
    transform: Affine2,
    stack: Vec<(Affine2, Color)>,
}

impl<'a> InstanceCanvas<'a> {
    /// Start a frame; clears `out`.
    pub fn new(out: &'a mut Vec<GlyphInstance>) -> Self {
        out.clear();
        Self {
            out,
            fill: Color::BLACK,
            transform: Affine2::IDENTITY,
            stack: Vec::new(),
        }
    }

    fn push(&mut self, local_center: Vec2, local_size: Vec2, frame: u32) {
        let (scale, angle, _) = self.transform.to_scale_angle_translation();
        let center = self.transform.transform_point2(local_center);
        self.out.push(GlyphInstance {
            position: center.into(),
            size: (local_size * scale).into(),
            color: self.fill.0,
            frame,
            rotation: angle,
        });
    }
}

impl Canvas for InstanceCanvas<'_> {
    fn set_fill(&mut self, color: Color) {
        self.fill = color;
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2) {
        self.push(origin + size * 0.5, size, FRAME_RECT);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        self.push(center, Vec2::splat(radius * 2.0), FRAME_CIRCLE);
    }

    fn fill_glyph(&mut self, glyph: Glyph, origin: Vec2, size: f32) {
        self.push(origin + Vec2::splat(size * 0.5), Vec2::splat(size), glyph.frame());
    }

    fn save(&mut self) {
        self.stack.push((self.transform, self.fill));
    }

    fn restore(&mut self) {
        if let Some((transform, fill)) = self.stack.pop() {
            self.transform = transform;
            self.fill = fill;
        }
    }

    fn translate(&mut self, offset: Vec2) {
        self.transform = self.transform * Affine2::from_translation(offset);
    }

    fn rotate(&mut self, angle: f32) {
        self.transform = self.transform * Affine2::from_angle(angle);
    }

    fn scale(&mut self, factor: Vec2) {
        self.transform = self.transform * Affine2::from_scale(factor);
    }
}
