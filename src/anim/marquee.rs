/// Marquee rows translate continuously on an infinite linear loop, with the
/// content repeated so the wrap point is never visible. The loader repeats
/// its text well past double width and wraps a full row width; the client
/// strip doubles its logo run and wraps at half. Odd rows run in the
/// opposite direction, which with differing durations gives the loader its
/// parallax feel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MarqueeTiming {
    pub duration_s: f64,
    pub reverse: bool,
    /// How far the strip travels before wrapping, in percent of its width.
    pub wrap_percent: f64,
}

/// Base duration of the fastest loader row; each later row adds 2 s.
pub const LOADER_BASE_DURATION_S: f64 = 25.0;
pub const LOADER_ROW_STEP_S: f64 = 2.0;

/// Both client logo rows loop once every 30 s.
pub const CLIENTS_DURATION_S: f64 = 30.0;

impl MarqueeTiming {
    pub fn loader_row(row: usize) -> Self {
        MarqueeTiming {
            duration_s: LOADER_BASE_DURATION_S + row as f64 * LOADER_ROW_STEP_S,
            reverse: row % 2 != 0,
            wrap_percent: 100.0,
        }
    }

    pub fn clients_row(row: usize) -> Self {
        MarqueeTiming {
            duration_s: CLIENTS_DURATION_S,
            reverse: row % 2 != 0,
            wrap_percent: 50.0,
        }
    }

    /// Inline animation declaration for this row. The keyframes
    /// (`marquee-left[-half]` / `marquee-right[-half]`) live in the app's
    /// global styles.
    pub fn animation_css(&self) -> String {
        let name = match (self.reverse, self.wrap_percent == 50.0) {
            (false, false) => "marquee-left",
            (true, false) => "marquee-right",
            (false, true) => "marquee-left-half",
            (true, true) => "marquee-right-half",
        };
        format!("animation: {} {:.0}s linear infinite;", name, self.duration_s)
    }
}

/// Horizontal offset of a marquee row, in percent of its own width, after
/// `elapsed_s` seconds. Forward rows sweep 0 → -wrap, reverse rows
/// -wrap → 0; both are periodic with period `duration_s`.
pub fn loop_offset(elapsed_s: f64, timing: &MarqueeTiming) -> f64 {
    let phase = (elapsed_s / timing.duration_s).rem_euclid(1.0);
    if timing.reverse {
        -timing.wrap_percent * (1.0 - phase)
    } else {
        -timing.wrap_percent * phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_periodic_over_the_configured_duration() {
        for row in 0..7 {
            let timing = MarqueeTiming::loader_row(row);
            let start = loop_offset(0.0, &timing);
            for lap in 1..=3 {
                let wrapped = loop_offset(timing.duration_s * lap as f64, &timing);
                assert!(
                    (wrapped - start).abs() < 1e-9,
                    "row {row} drifted after lap {lap}"
                );
            }
        }
    }

    #[test]
    fn adjacent_rows_run_opposite_directions() {
        let even = MarqueeTiming::loader_row(0);
        let odd = MarqueeTiming::loader_row(1);
        assert!(!even.reverse);
        assert!(odd.reverse);

        let dt = 0.5;
        let even_delta = loop_offset(dt, &even) - loop_offset(0.0, &even);
        let odd_delta = loop_offset(dt, &odd) - loop_offset(0.0, &odd);
        assert!(even_delta < 0.0);
        assert!(odd_delta > 0.0);
    }

    #[test]
    fn loader_rows_slow_down_with_depth() {
        assert_eq!(MarqueeTiming::loader_row(0).duration_s, 25.0);
        assert_eq!(MarqueeTiming::loader_row(3).duration_s, 31.0);
        assert_eq!(MarqueeTiming::loader_row(6).duration_s, 37.0);
    }

    #[test]
    fn client_rows_wrap_at_half_their_doubled_width() {
        let timing = MarqueeTiming::clients_row(1);
        for step in 0..300 {
            let offset = loop_offset(step as f64 * 0.37, &timing);
            assert!((-50.0..=0.0).contains(&offset));
        }
    }

    #[test]
    fn animation_css_names_direction_and_wrap() {
        assert!(MarqueeTiming::loader_row(0)
            .animation_css()
            .contains("marquee-left 25s"));
        assert!(MarqueeTiming::loader_row(1)
            .animation_css()
            .contains("marquee-right 27s"));
        assert!(MarqueeTiming::clients_row(0)
            .animation_css()
            .contains("marquee-left-half 30s"));
        assert!(MarqueeTiming::clients_row(1)
            .animation_css()
            .contains("marquee-right-half 30s"));
    }
}
