use web_sys::HtmlElement;

/// A single animatable visual state: opacity plus the transform/filter
/// channels the page animates. Sections describe their animations as pure
/// functions producing poses; applying a pose to an element is the only
/// place styles are mutated.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    /// Horizontal offset in px.
    pub x: f64,
    /// Vertical offset in px.
    pub y: f64,
    /// Rotation about the X axis in degrees (letters tip backward from it).
    pub rotation_x: f64,
    pub scale: f64,
    /// Blur radius in px.
    pub blur: f64,
}

impl Pose {
    /// The resting pose: fully opaque, identity transform, no blur.
    pub const IDENTITY: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        rotation_x: 0.0,
        scale: 1.0,
        blur: 0.0,
    };

    /// A faded pose offset downward, the common hidden state for threshold
    /// reveals.
    pub const fn hidden_below(y: f64) -> Pose {
        Pose {
            opacity: 0.0,
            y,
            ..Pose::IDENTITY
        }
    }

    /// A faded pose offset to the left, used by the sticky side panels.
    pub const fn hidden_left(x: f64) -> Pose {
        Pose {
            opacity: 0.0,
            x,
            ..Pose::IDENTITY
        }
    }

    /// Linear interpolation between two poses. `t` is clamped; t = 0 yields
    /// `self`, t = 1 yields `target` exactly, so repeated forward/reverse
    /// runs between the same constants cannot drift.
    pub fn lerp(&self, target: &Pose, t: f64) -> Pose {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Pose {
            opacity: mix(self.opacity, target.opacity),
            x: mix(self.x, target.x),
            y: mix(self.y, target.y),
            rotation_x: mix(self.rotation_x, target.rotation_x),
            scale: mix(self.scale, target.scale),
            blur: mix(self.blur, target.blur),
        }
    }

    pub fn transform_css(&self) -> String {
        format!(
            "translate({:.3}px, {:.3}px) rotateX({:.3}deg) scale({:.4})",
            self.x, self.y, self.rotation_x, self.scale
        )
    }

    /// Full inline-style fragment for this pose. The filter channel is
    /// omitted at zero blur so resting elements are not left composited.
    pub fn style_css(&self) -> String {
        let mut css = format!(
            "opacity: {:.4}; transform: {};",
            self.opacity,
            self.transform_css()
        );
        if self.blur > 0.001 {
            css.push_str(&format!(" filter: blur({:.3}px);", self.blur));
        }
        css
    }

    /// Write this pose onto an element. No-ops when the element has been
    /// detached from the document.
    pub fn apply_to(&self, el: &HtmlElement) {
        if !el.is_connected() {
            return;
        }
        let style = el.style();
        let _ = style.set_property("opacity", &format!("{:.4}", self.opacity));
        let _ = style.set_property("transform", &self.transform_css());
        if self.blur > 0.001 {
            let _ = style.set_property("filter", &format!("blur({:.3}px)", self.blur));
        } else {
            let _ = style.remove_property("filter");
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Pose::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HIDDEN: Pose = Pose {
        opacity: 0.0,
        x: 0.0,
        y: 50.0,
        rotation_x: -45.0,
        scale: 0.8,
        blur: 5.0,
    };

    #[test]
    fn lerp_endpoints_are_exact() {
        assert_eq!(HIDDEN.lerp(&Pose::IDENTITY, 0.0), HIDDEN);
        assert_eq!(HIDDEN.lerp(&Pose::IDENTITY, 1.0), Pose::IDENTITY);
    }

    #[test]
    fn lerp_clamps_out_of_range_progress() {
        assert_eq!(HIDDEN.lerp(&Pose::IDENTITY, -1.0), HIDDEN);
        assert_eq!(HIDDEN.lerp(&Pose::IDENTITY, 2.5), Pose::IDENTITY);
    }

    #[test]
    fn midpoint_mixes_every_channel() {
        let mid = HIDDEN.lerp(&Pose::IDENTITY, 0.5);
        assert!((mid.opacity - 0.5).abs() < 1e-9);
        assert!((mid.y - 25.0).abs() < 1e-9);
        assert!((mid.rotation_x + 22.5).abs() < 1e-9);
        assert!((mid.scale - 0.9).abs() < 1e-9);
        assert!((mid.blur - 2.5).abs() < 1e-9);
    }

    #[test]
    fn resting_pose_css_has_no_filter() {
        let css = Pose::IDENTITY.style_css();
        assert!(css.contains("opacity: 1.0000"));
        assert!(!css.contains("filter"));
    }

    #[test]
    fn blurred_pose_css_carries_filter() {
        assert!(HIDDEN.style_css().contains("filter: blur(5.000px);"));
    }

    #[test]
    fn replayed_reveal_reproduces_the_forward_animation() {
        // Forward to rest, reverse to hidden, forward again: the replay must
        // land on the identical end state.
        let first = HIDDEN.lerp(&Pose::IDENTITY, 1.0);
        let reversed = first.lerp(&HIDDEN, 1.0);
        let replay = reversed.lerp(&Pose::IDENTITY, 1.0);
        assert_eq!(reversed, HIDDEN);
        assert_eq!(replay, first);
    }
}
