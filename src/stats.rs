use instant::Instant;

/// How often to log frame stats (seconds).
const LOG_INTERVAL: f64 = 5.0;
/// Smoothing factor for per-phase timings.
const EMA_ALPHA: f64 = 0.1;

/// Which part of a frame is being timed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Phase {
    /// Simulation tick plus building draw instances.
    Tick = 0,
    /// Instance upload, encode and present.
    Present = 1,
}

impl Phase {
    pub const ALL: [Phase; 2] = [Self::Tick, Self::Present];

    pub fn label(self) -> &'static str {
        match self {
            Self::Tick => "tick",
            Self::Present => "present",
        }
    }
}

/// Per-phase timing with exponential moving average smoothing.
pub struct PhaseTimers {
    /// EMA-smoothed duration in microseconds per phase.
    pub durations_us: [f64; 2],
    start: Instant,
}

impl PhaseTimers {
    pub fn new() -> Self {
        Self {
            durations_us: [0.0; 2],
            start: Instant::now(),
        }
    }

    /// Call before a phase runs.
    pub fn begin(&mut self) {
        self.start = Instant::now();
    }

    /// Call after a phase finishes.
    pub fn end(&mut self, phase: Phase) {
        let elapsed_us = self.start.elapsed().as_secs_f64() * 1_000_000.0;
        self.record(phase, elapsed_us);
    }

    fn record(&mut self, phase: Phase, elapsed_us: f64) {
        let idx = phase as usize;
        self.durations_us[idx] =
            self.durations_us[idx] * (1.0 - EMA_ALPHA) + elapsed_us * EMA_ALPHA;
    }

    fn summary(&self) -> String {
        Phase::ALL
            .iter()
            .map(|p| format!("{}: {:.0}us", p.label(), self.durations_us[*p as usize]))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

/// Rolling frame-time stats, logged every few seconds.
pub struct FrameStats {
    frame_count: u64,
    last_log_time: Instant,
    frame_time_sum: f64,
    frame_time_min: f64,
    frame_time_max: f64,
    frames_since_log: u32,
}

impl FrameStats {
    pub fn new() -> Self {
        Self {
            frame_count: 0,
            last_log_time: Instant::now(),
            frame_time_sum: 0.0,
            frame_time_min: f64::MAX,
            frame_time_max: 0.0,
            frames_since_log: 0,
        }
    }

    pub fn record_frame(&mut self, dt: f64, timers: &PhaseTimers) {
        self.frame_count += 1;
        self.frames_since_log += 1;
        self.frame_time_sum += dt;
        self.frame_time_min = self.frame_time_min.min(dt);
        self.frame_time_max = self.frame_time_max.max(dt);

        let elapsed = self.last_log_time.elapsed().as_secs_f64();
        if elapsed >= LOG_INTERVAL {
            let avg_ms = (self.frame_time_sum / self.frames_since_log as f64) * 1000.0;
            let fps = self.frames_since_log as f64 / elapsed;
            log::info!(
                "FPS: {:.0} | avg: {:.2}ms | min: {:.2}ms | max: {:.2}ms | {} | total frames: {}",
                fps,
                avg_ms,
                self.frame_time_min * 1000.0,
                self.frame_time_max * 1000.0,
                timers.summary(),
                self.frame_count,
            );
            self.last_log_time = Instant::now();
            self.frame_time_sum = 0.0;
            self.frame_time_min = f64::MAX;
            self.frame_time_max = 0.0;
            self.frames_since_log = 0;
        }
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
