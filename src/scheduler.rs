//! Fixed-interval scheduler: drives the animator, tracks the countdown and
//! auto-stops when it reaches zero.

use std::time::{Duration, Instant};

use tracing::info;

use crate::animator::{Animator, RenderedFrame};

/// Render cadence (~20 Hz).
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// What one scheduler tick produced.
#[derive(Debug, Clone)]
pub struct TickOutcome {
    /// Rendered frame, absent on the tick that auto-stopped the session.
    pub frame: Option<RenderedFrame>,
    /// Whole seconds left on the countdown.
    pub remaining_secs: u64,
    /// True when this tick hit the end of the countdown and stopped.
    pub stopped: bool,
}

/// Owns the animator and the session clock. Start/stop are idempotent; the
/// periodic driver itself lives in the caller's event loop, so there is no
/// timer handle to leak.
pub struct Scheduler {
    animator: Animator,
    duration: Duration,
    started_at: Option<Instant>,
    running: bool,
}

impl Scheduler {
    pub fn new(animator: Animator, duration_secs: u64) -> Self {
        Self {
            animator,
            duration: Duration::from_secs(duration_secs),
            started_at: None,
            running: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn duration_secs(&self) -> u64 {
        self.duration.as_secs()
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut Animator {
        &mut self.animator
    }

    /// Begin (or restart) the countdown. A no-op while already running.
    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    pub fn start_at(&mut self, now: Instant) {
        if self.running {
            return;
        }
        self.running = true;
        self.started_at = Some(now);
        info!(duration_secs = self.duration.as_secs(), "animation started");
    }

    /// Halt the countdown. A no-op while already stopped.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        info!("animation stopped");
    }

    /// Seconds left, rounded up. Equals the full duration before the first
    /// start and freezes once stopped.
    pub fn remaining_at(&self, now: Instant) -> u64 {
        match self.started_at {
            Some(start) if self.running => {
                let elapsed = now.saturating_duration_since(start).as_secs_f64();
                (self.duration.as_secs_f64() - elapsed).ceil().max(0.0) as u64
            }
            _ => self.duration.as_secs(),
        }
    }

    /// Run one scheduler tick against the wall clock.
    pub fn tick(&mut self) -> TickOutcome {
        self.tick_at(Instant::now())
    }

    /// Run one scheduler tick at an explicit instant.
    ///
    /// Recomputes the countdown first; a countdown that has run out stops
    /// the session instead of rendering. Otherwise the animator renders one
    /// frame keyed off its own tick counter, with wall-elapsed time gating
    /// rotation only.
    pub fn tick_at(&mut self, now: Instant) -> TickOutcome {
        let remaining_secs = self.remaining_at(now);
        if self.running && remaining_secs == 0 {
            self.stop();
            return TickOutcome {
                frame: None,
                remaining_secs: 0,
                stopped: true,
            };
        }
        let frame = self.animator.render_tick(self.elapsed_at(now), self.running);
        TickOutcome {
            frame: Some(frame),
            remaining_secs,
            stopped: false,
        }
    }

    /// Render a frame outside the periodic cadence (initial paint, manual
    /// controls while stopped).
    pub fn render_now(&mut self) -> RenderedFrame {
        let elapsed = self.elapsed_at(Instant::now());
        let running = self.running;
        self.animator.render_tick(elapsed, running)
    }

    fn elapsed_at(&self, now: Instant) -> Duration {
        match self.started_at {
            Some(start) if self.running => now.saturating_duration_since(start),
            _ => Duration::ZERO,
        }
    }
}
