/// Drawing surface size in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
}

impl Dimensions {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A zero-area surface is not attached yet; nothing should be built on it.
    pub fn is_ready(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Tracks the host window's content size across resize events.
pub struct SizeObserver {
    current: Dimensions,
}

impl SizeObserver {
    pub fn new() -> Self {
        Self {
            current: Dimensions::default(),
        }
    }

    /// Record a size signal. Returns the new dimensions only when they changed.
    pub fn observe(&mut self, width: u32, height: u32) -> Option<Dimensions> {
        let next = Dimensions::new(width as f32, height as f32);
        if next == self.current {
            return None;
        }
        log::debug!(
            "Surface resized: {}x{} -> {}x{}",
            self.current.width,
            self.current.height,
            next.width,
            next.height
        );
        self.current = next;
        Some(next)
    }
}
