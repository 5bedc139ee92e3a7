//! Artwork playlist: the ordered collection of ASCII artworks and the
//! frame-selection state that drives per-tick animation.

/// Marker line separating frames inside one artwork file.
pub const FRAME_MARKER: &str = "-----FRAME-----";

/// How many render ticks pass between frame advances of a multi-frame artwork.
pub const FRAME_CADENCE_TICKS: u64 = 2;

/// Wall-clock period after which auto-rotation moves to the next artwork.
pub const ROTATION_PERIOD_MS: u64 = 4000;

// Default artworks, compiled in. Shown when no source is configured or every
// configured source fails to load.
const EMBEDDED_ARTS: &[&str] = &[
    include_str!("../arts/hearts.txt"),
    include_str!("../arts/beat.txt"),
    include_str!("../arts/burst.txt"),
];

/// One visual design: an ordered, non-empty sequence of text frames plus a
/// label describing where it came from. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct Artwork {
    /// Kind of source: "Embedded", "Inline", "File" or "URL".
    pub source: String,
    /// Human-readable detail (file name, URL, ...).
    pub detail: String,
    frames: Vec<String>,
}

impl Artwork {
    /// Split `text` on the frame marker and build an artwork.
    /// Returns `None` when the text contains no non-empty frames.
    pub fn new(
        text: &str,
        source: impl Into<String>,
        detail: impl Into<String>,
    ) -> Option<Self> {
        let frames = split_frames(text);
        if frames.is_empty() {
            return None;
        }
        Some(Self {
            source: source.into(),
            detail: detail.into(),
            frames,
        })
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Frame at `idx`, wrapping circularly.
    pub fn frame(&self, idx: usize) -> &str {
        &self.frames[idx % self.frames.len()]
    }
}

/// Split a text block into frames on the frame marker. Each frame is trimmed
/// and empty frames are dropped; a block without the marker is one frame.
pub fn split_frames(text: &str) -> Vec<String> {
    if text.contains(FRAME_MARKER) {
        text.split(FRAME_MARKER)
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .collect()
    } else {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            Vec::new()
        } else {
            vec![trimmed.to_string()]
        }
    }
}

/// The built-in artworks.
pub fn embedded_artworks() -> Vec<Artwork> {
    EMBEDDED_ARTS
        .iter()
        .enumerate()
        .filter_map(|(i, text)| Artwork::new(text, "Embedded", format!("Default #{}", i + 1)))
        .collect()
}

/// Ordered artworks plus the selection state: which artwork is current,
/// which frame of it is showing, and which artwork was last on screen
/// (used to detect rotation changes).
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    artworks: Vec<Artwork>,
    current: usize,
    frame_idx: usize,
    last: Option<usize>,
}

impl Playlist {
    pub fn new(artworks: Vec<Artwork>) -> Self {
        Self {
            artworks,
            current: 0,
            frame_idx: 0,
            last: None,
        }
    }

    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_artwork(&self) -> Option<&Artwork> {
        self.artworks.get(self.current)
    }

    pub fn artwork(&self, idx: usize) -> Option<&Artwork> {
        self.artworks.get(idx)
    }

    /// Index the auto-rotation would select after `elapsed_ms` of wall time.
    pub fn select_for(&self, elapsed_ms: u64) -> usize {
        if self.artworks.is_empty() {
            return 0;
        }
        ((elapsed_ms / ROTATION_PERIOD_MS) % self.artworks.len() as u64) as usize
    }

    /// The artwork shown on the previous tick, if any tick has happened yet.
    pub fn last_index(&self) -> Option<usize> {
        self.last
    }

    /// Record that `idx` is now on screen. Resets the frame cycle so the new
    /// artwork starts from its first frame.
    pub fn jump_to(&mut self, idx: usize) {
        if self.artworks.is_empty() {
            return;
        }
        self.current = idx % self.artworks.len();
        self.frame_idx = 0;
        self.last = Some(self.current);
    }

    /// Manual "next artwork" control.
    pub fn advance_manual(&mut self) {
        if self.artworks.is_empty() {
            return;
        }
        self.jump_to((self.current + 1) % self.artworks.len());
    }

    /// Advance the frame cycle for this tick and return the frame to show.
    ///
    /// Multi-frame artworks advance circularly when `tick` is a multiple of
    /// the cadence; single-frame artworks never advance.
    pub fn advance_frame(&mut self, tick: u64) -> &str {
        let art = &self.artworks[self.current];
        if art.frame_count() > 1 && tick % FRAME_CADENCE_TICKS == 0 {
            self.frame_idx = (self.frame_idx + 1) % art.frame_count();
        }
        art.frame(self.frame_idx)
    }

    /// Frame currently showing, without advancing the cycle.
    pub fn current_frame(&self) -> Option<&str> {
        self.current_artwork().map(|a| a.frame(self.frame_idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_frames_marker() {
        let text = "AAA\n-----FRAME-----\nBBB\n-----FRAME-----\n   \n";
        let frames = split_frames(text);
        assert_eq!(frames, vec!["AAA".to_string(), "BBB".to_string()]);
    }

    #[test]
    fn test_split_frames_no_marker() {
        assert_eq!(split_frames("hello\nworld\n"), vec!["hello\nworld"]);
        assert!(split_frames("   \n  ").is_empty());
    }

    #[test]
    fn test_embedded_artworks_present() {
        let arts = embedded_artworks();
        assert_eq!(arts.len(), 3);
        assert!(arts.iter().any(|a| a.frame_count() > 1));
    }

    #[test]
    fn test_frame_advance_parity() {
        // Two frames, cadence 2: advance happens on even ticks, before the
        // frame is returned.
        let art = Artwork::new("X\n-----FRAME-----\nY", "Inline", "test").unwrap();
        let mut playlist = Playlist::new(vec![art]);
        let seen: Vec<String> = (0..6)
            .map(|tick| playlist.advance_frame(tick).to_string())
            .collect();
        assert_eq!(seen, vec!["Y", "Y", "X", "X", "Y", "Y"]);
    }

    #[test]
    fn test_single_frame_never_advances() {
        let art = Artwork::new("solo", "Inline", "test").unwrap();
        let mut playlist = Playlist::new(vec![art]);
        for tick in 0..10 {
            assert_eq!(playlist.advance_frame(tick), "solo");
        }
    }

    #[test]
    fn test_select_for_rotation() {
        let arts = vec![
            Artwork::new("A", "Inline", "a").unwrap(),
            Artwork::new("B", "Inline", "b").unwrap(),
        ];
        let playlist = Playlist::new(arts);
        assert_eq!(playlist.select_for(0), 0);
        assert_eq!(playlist.select_for(3999), 0);
        assert_eq!(playlist.select_for(4000), 1);
        assert_eq!(playlist.select_for(7999), 1);
        assert_eq!(playlist.select_for(8000), 0);
    }

    #[test]
    fn test_manual_advance_resets_frame() {
        let arts = vec![
            Artwork::new("X\n-----FRAME-----\nY", "Inline", "a").unwrap(),
            Artwork::new("B", "Inline", "b").unwrap(),
        ];
        let mut playlist = Playlist::new(arts);
        playlist.advance_frame(0); // now on frame 1 of artwork 0
        playlist.advance_manual();
        assert_eq!(playlist.current_index(), 1);
        assert_eq!(playlist.current_frame(), Some("B"));
        playlist.advance_manual();
        assert_eq!(playlist.current_index(), 0);
        // Frame cycle restarted from the first frame.
        assert_eq!(playlist.current_frame(), Some("X"));
    }
}
