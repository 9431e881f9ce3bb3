use crate::config::{Config, Theme};
use crate::fish::aquarium::Aquarium;
use crate::render::canvas::Canvas;
use crate::render::scene;
use crate::sim;
use crate::sim::pointer::PointerState;
use crate::sizing::Dimensions;

/// Something that can ask the display for one more frame.
pub trait FrameScheduler {
    fn request_frame(&self);
}

impl FrameScheduler for winit::window::Window {
    fn request_frame(&self) {
        self.request_redraw();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// A frame is scheduled for the next refresh.
    Running,
    /// Torn down; nothing is scheduled and frames are ignored.
    Stopped,
}

/// Owns one aquarium for the lifetime of one surface size and drives it
/// one tick per display refresh.
pub struct FrameDriver {
    state: DriverState,
    aquarium: Aquarium,
    pointer: PointerState,
    rng: fastrand::Rng,
    theme: Theme,
    interactive: bool,
    ticks: u64,
}

impl FrameDriver {
    /// Populate an aquarium for `dims` and schedule the first frame.
    /// While the surface is not attached nothing starts and the pointer is
    /// handed back.
    pub fn start<S: FrameScheduler + ?Sized>(
        dims: Dimensions,
        config: &Config,
        pointer: PointerState,
        scheduler: &S,
    ) -> Result<Self, PointerState> {
        if !dims.is_ready() {
            log::debug!(
                "Surface {}x{} not ready, driver not started",
                dims.width,
                dims.height
            );
            return Err(pointer);
        }

        let mut rng = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        let aquarium = Aquarium::populate(dims, &config.spacing, &mut rng);
        log::info!(
            "Driver started at {}x{}: {} bubbles, {} fish",
            dims.width,
            dims.height,
            aquarium.bubbles.len(),
            aquarium.motifs.len()
        );

        scheduler.request_frame();

        Ok(Self {
            state: DriverState::Running,
            aquarium,
            pointer,
            rng,
            theme: config.theme,
            interactive: config.interactive,
            ticks: 0,
        })
    }

    /// Handle one display refresh: simulate, draw, reschedule.
    /// Returns false (and touches nothing) once stopped.
    pub fn on_frame<C, S>(&mut self, canvas: &mut C, scheduler: &S) -> bool
    where
        C: Canvas + ?Sized,
        S: FrameScheduler + ?Sized,
    {
        if self.state == DriverState::Stopped {
            return false;
        }

        let pointer = self.interactive.then_some(&self.pointer);
        sim::tick(&mut self.aquarium, pointer, &mut self.rng);
        scene::draw_frame(canvas, &self.aquarium, pointer, &self.theme);
        self.ticks += 1;

        scheduler.request_frame();
        true
    }

    /// Cancel the pending frame. Only the first call does anything.
    pub fn stop(&mut self) -> bool {
        if self.state == DriverState::Stopped {
            return false;
        }
        self.state = DriverState::Stopped;
        log::info!("Driver stopped after {} ticks", self.ticks);
        true
    }

    /// Stop and hand back the pointer so a replacement driver can keep it.
    pub fn into_pointer(mut self) -> PointerState {
        self.stop();
        self.pointer
    }

    /// Pointer to update from window events; `None` once torn down.
    pub fn pointer_mut(&mut self) -> Option<&mut PointerState> {
        match self.state {
            DriverState::Running => Some(&mut self.pointer),
            DriverState::Stopped => None,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[cfg(test)]
    pub fn aquarium(&self) -> &Aquarium {
        &self.aquarium
    }
}

/// What the window holds between resizes: a running driver, or the pointer
/// parked while the surface has no area.
pub enum DriverSlot {
    Idle(PointerState),
    Active(FrameDriver),
    /// Window closed; pointer events and frames are dropped.
    Closed,
}

impl Default for DriverSlot {
    fn default() -> Self {
        DriverSlot::Idle(PointerState::default())
    }
}

impl DriverSlot {
    /// Tear down whatever runs now and start over at `dims`, keeping the pointer.
    pub fn restart<S: FrameScheduler + ?Sized>(
        &mut self,
        dims: Dimensions,
        config: &Config,
        scheduler: &S,
    ) {
        let pointer = match std::mem::take(self) {
            DriverSlot::Idle(pointer) => pointer,
            DriverSlot::Active(driver) => driver.into_pointer(),
            DriverSlot::Closed => {
                *self = DriverSlot::Closed;
                return;
            }
        };
        *self = match FrameDriver::start(dims, config, pointer, scheduler) {
            Ok(driver) => DriverSlot::Active(driver),
            Err(pointer) => DriverSlot::Idle(pointer),
        };
    }

    pub fn driver_mut(&mut self) -> Option<&mut FrameDriver> {
        match self {
            DriverSlot::Active(driver) => Some(driver),
            _ => None,
        }
    }

    /// Pointer to update from window events; `None` once closed.
    pub fn pointer_mut(&mut self) -> Option<&mut PointerState> {
        match self {
            DriverSlot::Idle(pointer) => Some(pointer),
            DriverSlot::Active(driver) => driver.pointer_mut(),
            DriverSlot::Closed => None,
        }
    }

    /// Stop for good. Returns the ticks run by the last driver.
    pub fn close(&mut self) -> u64 {
        let ticks = match self {
            DriverSlot::Active(driver) => {
                driver.stop();
                driver.ticks()
            }
            _ => 0,
        };
        *self = DriverSlot::Closed;
        ticks
    }
}
