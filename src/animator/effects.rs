//! Per-tick visual effects. Each effect is a pure transform of a grid except
//! sparkle, which draws from an injected random source.

use rand::Rng;

use super::canvas::Canvas;

/// Sparkle fires on every 6th tick; every 12th tick uses the bright mark.
const SPARKLE_EVERY: u64 = 6;
const SPARKLE_BRIGHT_EVERY: u64 = 12;
const SPARKLE_BRIGHT: char = '*';
const SPARKLE_DIM: char = '.';

/// Horizontal per-line wave displacement.
///
/// Positive shifts prepend spaces (the line grows past the canvas width),
/// negative shifts drop characters from the left (the line shrinks). The
/// grid is not re-padded afterwards, so lines may deviate from the canvas
/// width after this step.
pub fn wave(lines: &[String], tick: u64) -> Vec<String> {
    let t = tick as f64 * 0.18;
    let amp = 2.0 + 1.2 * (t * 0.35).sin();
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let phase = t + i as f64 * 0.55;
            let shift = (phase.sin() * amp).round() as i64;
            if shift == 0 {
                line.clone()
            } else if shift > 0 {
                format!("{}{}", " ".repeat(shift as usize), line)
            } else {
                line.chars().skip((-shift) as usize).collect()
            }
        })
        .collect()
}

/// Vertical bounce: on the upper part of the sine cycle, push the grid down
/// one row by prepending a blank line and dropping the last, keeping the row
/// count constant.
pub fn bob(lines: &[String], tick: u64, width: usize) -> Vec<String> {
    let t = tick as f64 * 0.12;
    if t.sin() <= 0.35 {
        return lines.to_vec();
    }
    let mut out = Vec::with_capacity(lines.len());
    out.push(" ".repeat(width));
    out.extend(lines.iter().take(lines.len().saturating_sub(1)).cloned());
    out
}

/// Inject at most one sparkle into a random blank cell. Fires only on every
/// 6th tick; cells holding artwork characters are never overwritten, and
/// columns beyond a wave-shortened line are skipped.
pub fn sparkle<R: Rng>(lines: &mut [String], tick: u64, canvas: Canvas, rng: &mut R) {
    if tick % SPARKLE_EVERY != 0 {
        return;
    }
    let y = rng.random_range(0..canvas.height);
    let x = rng.random_range(0..canvas.width);
    let Some(line) = lines.get(y) else {
        return;
    };
    let mut chars: Vec<char> = line.chars().collect();
    if x >= chars.len() || chars[x] != ' ' {
        return;
    }
    chars[x] = if tick % SPARKLE_BRIGHT_EVERY == 0 {
        SPARKLE_BRIGHT
    } else {
        SPARKLE_DIM
    };
    lines[y] = chars.into_iter().collect();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn grid(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    /// Recompute the shift the wave applies to line `i` at `tick`.
    fn expected_shift(tick: u64, i: usize) -> i64 {
        let t = tick as f64 * 0.18;
        let amp = 2.0 + 1.2 * (t * 0.35).sin();
        ((t + i as f64 * 0.55).sin() * amp).round() as i64
    }

    #[test]
    fn test_wave_zero_shift_unchanged() {
        // tick 0, line 0: sin(0) = 0, shift 0.
        assert_eq!(expected_shift(0, 0), 0);
        let out = wave(&grid(&["abcd"]), 0);
        assert_eq!(out[0], "abcd");
    }

    #[test]
    fn test_wave_deterministic() {
        let input = grid(&["hello world", "  second  "]);
        assert_eq!(wave(&input, 7), wave(&input, 7));
    }

    #[test]
    fn test_wave_shifts_lines() {
        let input = grid(&["abcd"]);
        for tick in 0..40 {
            let shift = expected_shift(tick, 0);
            let out = wave(&input, tick);
            if shift > 0 {
                let expected = format!("{}abcd", " ".repeat(shift as usize));
                assert_eq!(out[0], expected, "tick {tick}");
            } else if shift < 0 {
                let expected: String = "abcd".chars().skip((-shift) as usize).collect();
                assert_eq!(out[0], expected, "tick {tick}");
            } else {
                assert_eq!(out[0], "abcd", "tick {tick}");
            }
        }
    }

    #[test]
    fn test_bob_parity() {
        let input = grid(&["aa", "bb"]);
        // tick 0: sin(0) = 0 <= 0.35, no-op.
        assert_eq!(bob(&input, 0, 2), input);
        // tick 10: sin(1.2) ~ 0.93 > 0.35, pushed down one row.
        assert_eq!(bob(&input, 10, 2), grid(&["  ", "aa"]));
    }

    #[test]
    fn test_bob_keeps_row_count() {
        let input = grid(&["a", "b", "c"]);
        for tick in 0..30 {
            assert_eq!(bob(&input, tick, 1).len(), 3);
        }
    }

    #[test]
    fn test_sparkle_only_on_sixth_ticks() {
        let canvas = Canvas { width: 4, height: 2 };
        let mut rng = StdRng::seed_from_u64(7);
        for tick in 0..24u64 {
            let mut lines = grid(&["    ", "    "]);
            sparkle(&mut lines, tick, canvas, &mut rng);
            let changed = lines.iter().any(|l| l != "    ");
            if tick % 6 != 0 {
                assert!(!changed, "tick {tick} should not sparkle");
            }
        }
    }

    #[test]
    fn test_sparkle_touches_at_most_one_space() {
        let canvas = Canvas { width: 4, height: 2 };
        let mut rng = StdRng::seed_from_u64(42);
        for round in 0..50u64 {
            let mut lines = grid(&["ab  ", "  cd"]);
            sparkle(&mut lines, round * 6, canvas, &mut rng);
            let diffs: usize = lines
                .join("")
                .chars()
                .zip("ab    cd".chars())
                .filter(|(a, b)| a != b)
                .count();
            assert!(diffs <= 1);
            // Artwork characters survive.
            assert!(lines[0].starts_with("ab"));
            assert!(lines[1].ends_with("cd"));
        }
    }

    #[test]
    fn test_sparkle_deterministic_with_seed() {
        let canvas = Canvas { width: 6, height: 3 };
        let run = || {
            let mut rng = StdRng::seed_from_u64(99);
            let mut lines = grid(&["      ", "      ", "      "]);
            for tick in (0..60).step_by(6) {
                sparkle(&mut lines, tick, canvas, &mut rng);
            }
            lines
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_sparkle_skips_short_lines() {
        // A wave-shortened line: the chosen column may fall past its end.
        let canvas = Canvas { width: 10, height: 1 };
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let mut lines = grid(&["ab"]);
            sparkle(&mut lines, 0, canvas, &mut rng);
            assert_eq!(lines[0], "ab");
        }
    }
}
