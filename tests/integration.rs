//! Integration tests for the animation engine

use std::time::{Duration, Instant};

use lovewave::loader::{self, ArtSource};
use lovewave::playlist::{Artwork, Playlist};
use lovewave::{Animator, Scheduler};

fn two_arts() -> Playlist {
    Playlist::new(vec![
        Artwork::new("AAAA", "Inline", "a").unwrap(),
        Artwork::new("BBBB", "Inline", "b").unwrap(),
    ])
}

/// Crossing the 4000 ms rotation boundary arms a wipe (mode flipped from
/// its initial value), and after 14 render ticks steady state shows the
/// incoming artwork.
#[test]
fn test_rotation_transition_end_to_end() {
    let animator = Animator::new(two_arts())
        .with_seed(11)
        .with_effects_during_wipes(false);
    let mut sched = Scheduler::new(animator, 60);
    let t0 = Instant::now();
    sched.start_at(t0);

    // Before the boundary artwork 0 is selected.
    for ms in [0u64, 1000, 3999] {
        let frame = sched.tick_at(t0 + Duration::from_millis(ms)).frame.unwrap();
        assert_eq!(frame.label, "Wavey", "at {ms} ms");
        assert!(frame.text.contains("AAAA"));
        assert!(!frame.text.contains("BBBB"));
    }

    // At exactly 4000 ms the selection flips to artwork 1 and a wipe starts.
    let frame = sched.tick_at(t0 + Duration::from_millis(4000)).frame.unwrap();
    assert_eq!(frame.label, "Center reveal");

    // Thirteen more renders complete the wipe; the last one shows the
    // incoming grid exactly.
    let mut last = None;
    for _ in 0..13 {
        let frame = sched.tick_at(t0 + Duration::from_millis(4050)).frame.unwrap();
        assert_eq!(frame.label, "Center reveal");
        last = Some(frame);
    }
    let final_wipe = last.unwrap();
    assert!(final_wipe.text.contains("BBBB"));
    assert!(!final_wipe.text.contains("AAAA"));

    // Transition cleared: back to steady state on the new artwork.
    let frame = sched.tick_at(t0 + Duration::from_millis(4100)).frame.unwrap();
    assert_eq!(frame.label, "Wavey");
    assert!(frame.text.contains("BBBB"));
    assert!(!frame.text.contains("AAAA"));
}

/// A second rotation arms the other wipe mode.
#[test]
fn test_wipe_modes_alternate_across_rotations() {
    let animator = Animator::new(two_arts()).with_seed(12);
    let mut sched = Scheduler::new(animator, 60);
    let t0 = Instant::now();
    sched.start_at(t0);

    sched.tick_at(t0);
    let frame = sched.tick_at(t0 + Duration::from_millis(4000)).frame.unwrap();
    assert_eq!(frame.label, "Center reveal");
    for _ in 0..14 {
        sched.tick_at(t0 + Duration::from_millis(4050));
    }
    let frame = sched.tick_at(t0 + Duration::from_millis(8000)).frame.unwrap();
    assert_eq!(frame.label, "Left wipe");
}

/// Frames advance on even ticks (advance-then-return): a two-frame artwork
/// shows Y,Y,X,X,Y,Y over the first six render ticks.
#[test]
fn test_frame_cadence_sequence() {
    let art = Artwork::new("X\n-----FRAME-----\nY", "Inline", "xy").unwrap();
    let mut animator = Animator::new(Playlist::new(vec![art])).with_seed(3);

    let expected = ["Y", "Y", "X", "X", "Y", "Y"];
    for (i, want) in expected.iter().enumerate() {
        let frame = animator.render_tick(Duration::from_millis(i as u64 * 50), true);
        assert!(frame.text.contains(want), "tick {i} should show {want}");
        let other = if *want == "X" { "Y" } else { "X" };
        assert!(!frame.text.contains(other), "tick {i} should not show {other}");
    }
}

/// With a 5 second duration the scheduler auto-stops once 5000 ms of wall
/// time have elapsed, clearing the running flag.
#[test]
fn test_countdown_auto_stop() {
    let animator = Animator::new(two_arts()).with_seed(4);
    let mut sched = Scheduler::new(animator, 5);
    let t0 = Instant::now();
    sched.start_at(t0);

    let out = sched.tick_at(t0 + Duration::from_millis(4999));
    assert!(!out.stopped);
    assert_eq!(out.remaining_secs, 1);
    assert!(sched.is_running());

    let out = sched.tick_at(t0 + Duration::from_millis(5000));
    assert!(out.stopped);
    assert!(out.frame.is_none());
    assert_eq!(out.remaining_secs, 0);
    assert!(!sched.is_running());

    // Stopped ticks keep rendering for the idle display but never re-stop.
    let out = sched.tick_at(t0 + Duration::from_millis(6000));
    assert!(!out.stopped);
    assert!(out.frame.is_some());
    assert_eq!(out.remaining_secs, 5);
}

/// Artworks loaded from disk flow through canvas measurement into the
/// rendered output.
#[tokio::test]
async fn test_file_sources_to_rendered_frame() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");
    std::fs::write(&first, "HELLO HEART").unwrap();
    std::fs::write(&second, vec!["tall"; 14].join("\n")).unwrap();

    let source = ArtSource::List(vec![
        first.to_string_lossy().to_string(),
        second.to_string_lossy().to_string(),
    ]);
    let report = loader::load(&source).await;
    assert_eq!(report.artworks.len(), 2);
    assert!(report.errors.is_empty());

    let mut animator = Animator::new(Playlist::new(report.artworks)).with_seed(6);
    // Canvas height grows to the tallest artwork.
    assert_eq!(animator.canvas().height, 14);

    let frame = animator.render_tick(Duration::ZERO, true);
    assert!(frame.text.contains("HELLO HEART"));
    assert_eq!(frame.text.lines().count(), 14);
}

/// The engine never fails on an empty collection: it renders the loading
/// placeholder at the minimum canvas size until artworks are swapped in.
#[test]
fn test_empty_collection_placeholder_then_replace() {
    let animator = Animator::new(Playlist::new(Vec::new())).with_seed(7);
    let mut sched = Scheduler::new(animator, 10);
    let t0 = Instant::now();
    sched.start_at(t0);

    let frame = sched.tick_at(t0).frame.unwrap();
    assert!(frame.text.contains("Loading love..."));
    assert_eq!(frame.text.lines().count(), 10);

    sched.animator_mut().replace_playlist(two_arts());
    let frame = sched.tick_at(t0 + Duration::from_millis(50)).frame.unwrap();
    assert!(frame.text.contains("AAAA"));
}
