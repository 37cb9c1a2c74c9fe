use web_sys::window;

/// Layout breakpoints, classified at fixed pixel thresholds. Pin/scrub
/// choreography is only enabled on `Desktop`; smaller viewports fall back to
/// plain threshold reveals.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

pub const MOBILE_MAX_WIDTH: f64 = 640.0;
pub const TABLET_MAX_WIDTH: f64 = 1024.0;

impl Breakpoint {
    pub fn classify(width: f64) -> Self {
        if width <= MOBILE_MAX_WIDTH {
            Breakpoint::Mobile
        } else if width <= TABLET_MAX_WIDTH {
            Breakpoint::Tablet
        } else {
            Breakpoint::Desktop
        }
    }

    /// Pinning and scrub-linked physics are disproportionately expensive and
    /// unstable below the desktop breakpoint.
    pub fn supports_pinning(self) -> bool {
        matches!(self, Breakpoint::Desktop)
    }

    pub fn is_touch_layout(self) -> bool {
        !matches!(self, Breakpoint::Desktop)
    }
}

/// Current viewport size, `(width, height)` in CSS pixels. Returns a sane
/// desktop default when the window is not available so pure callers never
/// have to handle a missing DOM.
pub fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 800.0);
    };
    let width = win
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(800.0);
    (width, height)
}

pub fn current_breakpoint() -> Breakpoint {
    Breakpoint::classify(viewport_size().0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_widths_classify_as_mobile() {
        assert_eq!(Breakpoint::classify(320.0), Breakpoint::Mobile);
        assert_eq!(Breakpoint::classify(375.0), Breakpoint::Mobile);
        assert_eq!(Breakpoint::classify(640.0), Breakpoint::Mobile);
    }

    #[test]
    fn tablet_band_is_exclusive_of_both_edges_above() {
        assert_eq!(Breakpoint::classify(641.0), Breakpoint::Tablet);
        assert_eq!(Breakpoint::classify(1024.0), Breakpoint::Tablet);
        assert_eq!(Breakpoint::classify(1025.0), Breakpoint::Desktop);
    }

    #[test]
    fn only_desktop_supports_pinning() {
        assert!(!Breakpoint::classify(375.0).supports_pinning());
        assert!(!Breakpoint::classify(800.0).supports_pinning());
        assert!(Breakpoint::classify(1440.0).supports_pinning());
    }
}
