use std::sync::Arc;

use instant::Instant;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::config::Config;
use crate::driver::DriverSlot;
use crate::render::canvas::InstanceCanvas;
use crate::render::instance::GlyphInstance;
use crate::render::{GpuState, RenderError};
use crate::sim::pointer::PointerState;
use crate::sizing::SizeObserver;
use crate::stats::{FrameStats, Phase, PhaseTimers};

/// Top-level application state.
struct App {
    config: Config,

    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,

    // Content-area size of the window
    sizing: SizeObserver,

    // Running only while the surface has a non-zero size
    driver: DriverSlot,

    // Frame timing
    last_frame_time: Option<Instant>,
    frame_stats: FrameStats,
    timers: PhaseTimers,

    // Reusable instance buffer (avoid per-frame allocation)
    instance_buf: Vec<GlyphInstance>,

    // Startup failure to report once the event loop returns
    error: Option<RenderError>,
}

impl App {
    fn new(config: Config) -> Self {
        Self {
            config,
            window: None,
            gpu: None,
            sizing: SizeObserver::new(),
            driver: DriverSlot::default(),
            last_frame_time: None,
            frame_stats: FrameStats::new(),
            timers: PhaseTimers::new(),
            instance_buf: Vec::with_capacity(256),
            error: None,
        }
    }

    /// React to a new content size: tear the old driver down and start a
    /// fresh aquarium at the new dimensions.
    fn resize(&mut self, width: u32, height: u32) {
        let Some(dims) = self.sizing.observe(width, height) else {
            return;
        };

        if let Some(gpu) = &mut self.gpu {
            gpu.resize(width, height);
        }

        if let Some(window) = &self.window {
            self.driver.restart(dims, &self.config, window.as_ref());
        }
    }

    /// Pointer to update, unless the window is closing.
    fn pointer(&mut self) -> Option<&mut PointerState> {
        self.driver.pointer_mut()
    }

    fn redraw(&mut self) {
        let now = Instant::now();
        if let Some(last) = self.last_frame_time {
            self.frame_stats
                .record_frame(now.duration_since(last).as_secs_f64(), &self.timers);
        }
        self.last_frame_time = Some(now);

        let (Some(driver), Some(window), Some(gpu)) =
            (self.driver.driver_mut(), self.window.as_ref(), self.gpu.as_mut())
        else {
            return;
        };

        self.timers.begin();
        let mut canvas = InstanceCanvas::new(&mut self.instance_buf);
        let drew = driver.on_frame(&mut canvas, window.as_ref());
        self.timers.end(Phase::Tick);

        if drew {
            self.timers.begin();
            gpu.update_instances(&self.instance_buf);
            gpu.render_frame(self.config.theme.background);
            self.timers.end(Phase::Present);
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: RenderError) {
        log::error!("Startup failed: {error}");
        self.error = Some(error);
        event_loop.exit();
    }

    fn teardown(&mut self) {
        let ticks = self.driver.close();
        log::info!(
            "Exiting after {} frames ({ticks} ticks on the current aquarium)",
            self.frame_stats.frame_count()
        );
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let gpu = match GpuState::new(window.clone()) {
            Ok(gpu) => gpu,
            Err(e) => {
                self.fail(event_loop, e);
                return;
            }
        };
        log::info!("wgpu + glyph pipeline initialized");

        let size = window.inner_size();
        log::info!("Window created: {}x{}", size.width, size.height);

        self.gpu = Some(gpu);
        self.window = Some(window);

        // Frames are driven by the driver's redraw requests only.
        event_loop.set_control_flow(ControlFlow::Wait);

        self.resize(size.width, size.height);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting");
                self.teardown();
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                self.resize(new_size.width, new_size.height);
            }
            WindowEvent::CursorEntered { .. } => {
                if let Some(pointer) = self.pointer() {
                    log::debug!("Pointer entered");
                    pointer.enter();
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if let Some(pointer) = self.pointer() {
                    pointer.moved(position.x as f32, position.y as f32);
                }
            }
            WindowEvent::CursorLeft { .. } => {
                if let Some(pointer) = self.pointer() {
                    log::debug!("Pointer left");
                    pointer.leave();
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }
}

/// Entry point: load config, create the event loop and run.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    if let Some(error) = app.error.take() {
        return Err(error.into());
    }
    Ok(())
}
