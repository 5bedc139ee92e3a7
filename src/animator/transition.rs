//! Wipe transitions between two artwork grids.

/// Render ticks a transition lasts (~0.7 s at the 20 Hz cadence).
pub const TRANSITION_TICKS: u32 = 14;

/// The two wipe styles, used alternately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WipeMode {
    Left,
    Center,
}

impl WipeMode {
    pub fn flip(self) -> Self {
        match self {
            WipeMode::Left => WipeMode::Center,
            WipeMode::Center => WipeMode::Left,
        }
    }

    /// Label shown in the status bar while the wipe runs.
    pub fn label(self) -> &'static str {
        match self {
            WipeMode::Left => "Left wipe",
            WipeMode::Center => "Center reveal",
        }
    }
}

/// Smoothstep easing, clamped to [0, 1].
pub fn smoothstep(x: f64) -> f64 {
    let t = x.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Reveal `to` over `from` left to right: the first `floor(width * p)`
/// columns of every row come from `to`.
pub fn wipe_left(from: &[String], to: &[String], width: usize, progress: f64) -> Vec<String> {
    let cut = (width as f64 * progress).floor() as usize;
    from.iter()
        .zip(to)
        .map(|(f, t)| {
            let mut chars: Vec<char> = f.chars().collect();
            let tchars: Vec<char> = t.chars().collect();
            let n = cut.min(chars.len()).min(tchars.len());
            chars[..n].copy_from_slice(&tchars[..n]);
            chars.into_iter().collect()
        })
        .collect()
}

/// Reveal `to` symmetrically outward from the horizontal center.
pub fn wipe_center(from: &[String], to: &[String], width: usize, progress: f64) -> Vec<String> {
    if progress <= 0.0 || width == 0 {
        return from.to_vec();
    }
    let half = ((width as f64 / 2.0) * progress).floor() as usize;
    let center = width / 2;
    let lo = center.saturating_sub(half);
    let hi = (center + half).min(width - 1);
    from.iter()
        .zip(to)
        .map(|(f, t)| {
            let mut chars: Vec<char> = f.chars().collect();
            let tchars: Vec<char> = t.chars().collect();
            for i in lo..=hi {
                match (chars.get_mut(i), tchars.get(i)) {
                    (Some(slot), Some(&c)) => *slot = c,
                    _ => break,
                }
            }
            chars.into_iter().collect()
        })
        .collect()
}

/// A transition in flight: snapshots of the outgoing and incoming grids plus
/// a sub-tick counter, independent of both wall time and the global tick.
#[derive(Debug, Clone)]
pub struct Transition {
    from: Vec<String>,
    to: Vec<String>,
    mode: WipeMode,
    width: usize,
    tick: u32,
}

impl Transition {
    pub fn new(from: Vec<String>, to: Vec<String>, mode: WipeMode, width: usize) -> Self {
        Self {
            from,
            to,
            mode,
            width,
            tick: 0,
        }
    }

    pub fn mode(&self) -> WipeMode {
        self.mode
    }

    /// Advance one render tick and produce the blended grid. The final step
    /// (sub-tick 14) yields `to` exactly.
    pub fn step(&mut self) -> Vec<String> {
        self.tick += 1;
        let p = smoothstep(f64::from(self.tick) / f64::from(TRANSITION_TICKS));
        match self.mode {
            WipeMode::Left => wipe_left(&self.from, &self.to, self.width, p),
            WipeMode::Center => wipe_center(&self.from, &self.to, self.width, p),
        }
    }

    pub fn finished(&self) -> bool {
        self.tick >= TRANSITION_TICKS
    }
}
