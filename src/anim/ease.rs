/// Easing curves used by the tween engine and the scrubbed scroll
/// animations. Input is clamped to [0, 1]; every curve maps 0 to 0 and
/// 1 to 1. `BackOut` overshoots past 1.0 on the way in.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Ease {
    Linear,
    #[default]
    Power1Out,
    Power1In,
    Power2Out,
    Power2In,
    BackOut,
    CubicInOut,
}

const BACK_OVERSHOOT: f64 = 1.4;

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::Power1In => t * t,
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power2In => t * t * t,
            Ease::BackOut => {
                let c1 = BACK_OVERSHOOT;
                let c3 = c1 + 1.0;
                1.0 + c3 * (t - 1.0).powi(3) + c1 * (t - 1.0).powi(2)
            }
            Ease::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 7] = [
        Ease::Linear,
        Ease::Power1Out,
        Ease::Power1In,
        Ease::Power2Out,
        Ease::Power2In,
        Ease::BackOut,
        Ease::CubicInOut,
    ];

    #[test]
    fn endpoints_are_fixed() {
        for ease in ALL {
            assert!((ease.apply(0.0)).abs() < 1e-9, "{ease:?} at 0");
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-9, "{ease:?} at 1");
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        for ease in ALL {
            assert_eq!(ease.apply(-3.0), ease.apply(0.0));
            assert_eq!(ease.apply(7.0), ease.apply(1.0));
        }
    }

    #[test]
    fn non_overshooting_curves_are_monotonic() {
        for ease in ALL {
            if ease == Ease::BackOut {
                continue;
            }
            let mut last = ease.apply(0.0);
            for step in 1..=100 {
                let value = ease.apply(step as f64 / 100.0);
                assert!(value >= last - 1e-12, "{ease:?} decreased at {step}");
                last = value;
            }
        }
    }

    #[test]
    fn back_out_overshoots_then_settles() {
        let peak = (1..100)
            .map(|step| Ease::BackOut.apply(step as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
        assert!((Ease::BackOut.apply(1.0) - 1.0).abs() < 1e-9);
    }
}
