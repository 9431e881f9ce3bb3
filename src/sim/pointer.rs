use glam::Vec2;

/// Last known pointer over the surface. Written by window events, read every tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub hovering: bool,
    /// Surface-local position.
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    pub fn enter(&mut self) {
        self.hovering = true;
    }

    /// A move implies the pointer is over the surface.
    pub fn moved(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
        self.hovering = true;
    }

    pub fn leave(&mut self) {
        self.hovering = false;
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}
