//! Fixed-size character canvas: measurement over a set of artworks and
//! padding of individual frames into canvas-sized grids.

use crate::playlist::Artwork;

/// Smallest canvas the animator will ever use.
pub const MIN_WIDTH: usize = 40;
pub const MIN_HEIGHT: usize = 10;

/// The (width, height) character grid every frame is padded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: usize,
    pub height: usize,
}

impl Canvas {
    /// Componentwise max of line count and line length over every frame of
    /// every artwork, floored at the minimum dimensions.
    pub fn measure(artworks: &[Artwork]) -> Self {
        let mut width = MIN_WIDTH;
        let mut height = MIN_HEIGHT;
        for art in artworks {
            for frame in art.frames() {
                let lines: Vec<&str> = frame.lines().collect();
                height = height.max(lines.len());
                for line in lines {
                    width = width.max(line.chars().count());
                }
            }
        }
        Self { width, height }
    }

    /// Pad a raw frame into a canvas-sized grid.
    pub fn pad(&self, frame: &str) -> Vec<String> {
        let lines: Vec<String> = frame.lines().map(str::to_string).collect();
        pad_lines(&lines, self.width, self.height)
    }
}

/// Pad `lines` to exactly `height` rows, each right-padded with spaces to
/// `width`. Extra rows are truncated; overlong rows are left untouched (the
/// canvas already covers every known frame, so only externally injected
/// content can exceed it, and it is passed through rather than clipped).
pub fn pad_lines(lines: &[String], width: usize, height: usize) -> Vec<String> {
    let mut out: Vec<String> = lines.iter().take(height).cloned().collect();
    while out.len() < height {
        out.push(String::new());
    }
    for line in &mut out {
        let len = line.chars().count();
        if len < width {
            line.push_str(&" ".repeat(width - len));
        }
    }
    out
}
