//! The animation engine.
//!
//! Owns the playlist, canvas, tick counter, transition state and the sparkle
//! random source; each call to [`Animator::render_tick`] produces one grid
//! for display. Wall-clock elapsed time drives artwork rotation, the tick
//! counter drives everything else.

pub mod canvas;
pub mod effects;
pub mod transition;

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::playlist::Playlist;
pub use canvas::Canvas;
pub use transition::{Transition, WipeMode};

/// Shown while the playlist is empty (sources still loading or all failed).
const PLACEHOLDER: &str = "Loading love...";

/// Label shown when no transition is running.
const STEADY_LABEL: &str = "Wavey";

/// One rendered animation frame, ready for display.
#[derive(Debug, Clone)]
pub struct RenderedFrame {
    /// Grid rows joined by newlines.
    pub text: String,
    /// Name of the active transition, or the steady-state label.
    pub label: &'static str,
}

/// All mutable animation state, owned by the scheduler.
pub struct Animator {
    playlist: Playlist,
    canvas: Canvas,
    tick: u64,
    transition: Option<Transition>,
    wipe: WipeMode,
    auto_rotate: bool,
    effects_during_wipes: bool,
    rng: StdRng,
}

impl Animator {
    pub fn new(playlist: Playlist) -> Self {
        let canvas = Canvas::measure(playlist.artworks());
        Self {
            playlist,
            canvas,
            tick: 0,
            transition: None,
            wipe: WipeMode::Left,
            auto_rotate: true,
            effects_during_wipes: true,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seed the sparkle random source for reproducible output.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_auto_rotate(mut self, on: bool) -> Self {
        self.auto_rotate = on;
        self
    }

    /// Policy switch: keep wave/bob/sparkle running while a wipe is active.
    pub fn with_effects_during_wipes(mut self, on: bool) -> Self {
        self.effects_during_wipes = on;
        self
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    pub fn set_auto_rotate(&mut self, on: bool) {
        self.auto_rotate = on;
    }

    pub fn toggle_auto_rotate(&mut self) {
        self.auto_rotate = !self.auto_rotate;
    }

    /// Jump to the next artwork immediately: the frame cycle restarts and
    /// any in-flight wipe is cancelled.
    pub fn next_artwork(&mut self) {
        self.transition = None;
        self.playlist.advance_manual();
    }

    /// Swap in a whole new artwork collection. The canvas is re-measured and
    /// the selection state restarts from the first artwork.
    pub fn replace_playlist(&mut self, playlist: Playlist) {
        self.canvas = Canvas::measure(playlist.artworks());
        self.playlist = playlist;
        self.transition = None;
        debug!(
            width = self.canvas.width,
            height = self.canvas.height,
            "artwork collection replaced"
        );
    }

    /// Render one animation tick.
    ///
    /// `elapsed` is wall time since the session started (zero while
    /// stopped); it gates artwork rotation only. Everything else keys off
    /// the internal tick counter, which advances exactly once per call.
    pub fn render_tick(&mut self, elapsed: Duration, running: bool) -> RenderedFrame {
        let tick = self.tick;
        self.tick = self.tick.wrapping_add(1);

        if self.playlist.is_empty() {
            let mut grid = self.canvas.pad(PLACEHOLDER);
            grid = self.apply_effects(grid, tick);
            return RenderedFrame {
                text: grid.join("\n"),
                label: STEADY_LABEL,
            };
        }

        if self.auto_rotate && running {
            self.rotate(elapsed);
        }

        let (mut grid, label, wiping) = match self.transition.as_mut() {
            Some(tr) => {
                let grid = tr.step();
                let label = tr.mode().label();
                if tr.finished() {
                    self.transition = None;
                }
                (grid, label, true)
            }
            None => {
                let frame = self.playlist.advance_frame(tick).to_string();
                (self.canvas.pad(&frame), STEADY_LABEL, false)
            }
        };

        if !wiping || self.effects_during_wipes {
            grid = self.apply_effects(grid, tick);
        }

        RenderedFrame {
            text: grid.join("\n"),
            label,
        }
    }

    /// Fixed effect order: wave, then bob, then sparkle.
    fn apply_effects(&mut self, grid: Vec<String>, tick: u64) -> Vec<String> {
        let mut grid = effects::wave(&grid, tick);
        grid = effects::bob(&grid, tick, self.canvas.width);
        effects::sparkle(&mut grid, tick, self.canvas, &mut self.rng);
        grid
    }

    /// Evaluate auto-rotation and arm a wipe when the selected artwork
    /// changes. While a wipe is in flight the change is ignored; the
    /// rotation formula re-selects it once the wipe completes.
    fn rotate(&mut self, elapsed: Duration) {
        let idx = self.playlist.select_for(elapsed.as_millis() as u64);
        let Some(last) = self.playlist.last_index() else {
            self.playlist.jump_to(idx);
            return;
        };
        if idx == last || self.transition.is_some() {
            return;
        }

        self.wipe = self.wipe.flip();
        let from_frame = self
            .playlist
            .current_frame()
            .unwrap_or(PLACEHOLDER)
            .to_string();
        let to_frame = self
            .playlist
            .artwork(idx)
            .map(|a| a.frame(0))
            .unwrap_or(PLACEHOLDER)
            .to_string();
        let from = self.canvas.pad(&from_frame);
        let to = self.canvas.pad(&to_frame);
        self.transition = Some(Transition::new(from, to, self.wipe, self.canvas.width));
        self.playlist.jump_to(idx);
        debug!(from = last, to = idx, mode = ?self.wipe, "wipe armed");
    }
}
