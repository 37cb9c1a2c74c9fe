use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement};
use yew::Callback;

use crate::anim::ease::Ease;
use crate::anim::pose::Pose;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TweenConfig {
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub ease: Ease,
}

impl TweenConfig {
    pub fn new(duration_ms: f64) -> Self {
        TweenConfig {
            duration_ms,
            delay_ms: 0.0,
            ease: Ease::default(),
        }
    }

    pub fn delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }
}

/// Timeline position of a tween at wall-clock `now_ms`: `None` while still
/// inside the delay, otherwise clamped [0, 1] progress.
pub fn tween_progress(now_ms: f64, start_ms: f64, cfg: &TweenConfig) -> Option<f64> {
    let elapsed = now_ms - start_ms - cfg.delay_ms;
    if elapsed < 0.0 {
        return None;
    }
    if cfg.duration_ms <= 0.0 {
        return Some(1.0);
    }
    Some((elapsed / cfg.duration_ms).min(1.0))
}

/// A running pose interpolation. Dropping the handle cancels the frame
/// callback, so a section's tweens die with the section.
pub struct Tween {
    raf_id: Rc<Cell<Option<i32>>>,
    closure: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    finished: Rc<Cell<bool>>,
}

impl Drop for Tween {
    fn drop(&mut self) {
        if !self.finished.get() {
            self.finished.set(true);
            if let (Some(win), Some(id)) = (window(), self.raf_id.take()) {
                let _ = win.cancel_animation_frame(id);
            }
        }
        self.closure.borrow_mut().take();
    }
}

/// Drive `el` from one pose to another over `cfg`, one animation frame at a
/// time. The `from` pose is applied immediately (also through any delay).
/// Each frame re-checks that the element is still attached and goes quiet if
/// it is not. Returns `None` when the environment has no window/performance
/// clock, in which case the element is simply left in the target pose.
pub fn animate_pose(
    el: &HtmlElement,
    from: Pose,
    to: Pose,
    cfg: TweenConfig,
    on_complete: Option<Callback<()>>,
) -> Option<Tween> {
    let Some(win) = window() else {
        to.apply_to(el);
        return None;
    };
    let Some(perf) = win.performance() else {
        to.apply_to(el);
        return None;
    };

    from.apply_to(el);

    let start_ms = perf.now();
    let fallback_el = el.clone();
    let el = el.clone();
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let closure: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let finished = Rc::new(Cell::new(false));

    {
        let raf_id_inner = raf_id.clone();
        let closure_inner = closure.clone();
        let finished_inner = finished.clone();
        *closure.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if finished_inner.get() {
                return;
            }
            if !el.is_connected() {
                finished_inner.set(true);
                raf_id_inner.set(None);
                return;
            }

            let progress = tween_progress(perf.now(), start_ms, &cfg);
            if let Some(t) = progress {
                from.lerp(&to, cfg.ease.apply(t)).apply_to(&el);
                if t >= 1.0 {
                    finished_inner.set(true);
                    raf_id_inner.set(None);
                    if let Some(done) = on_complete.as_ref() {
                        done.emit(());
                    }
                    return;
                }
            }

            let reschedule = closure_inner.borrow();
            if let (Some(win), Some(frame)) = (window(), reschedule.as_ref()) {
                raf_id_inner.set(
                    win.request_animation_frame(frame.as_ref().unchecked_ref())
                        .ok(),
                );
            }
        }) as Box<dyn FnMut()>));
    }

    let scheduled = closure
        .borrow()
        .as_ref()
        .and_then(|frame| {
            win.request_animation_frame(frame.as_ref().unchecked_ref())
                .ok()
        });
    match scheduled {
        Some(id) => raf_id.set(Some(id)),
        None => {
            // No frame scheduler available; settle the element and bail.
            to.apply_to(&fallback_el);
            finished.set(true);
        }
    }

    Some(Tween {
        raf_id,
        closure,
        finished,
    })
}

/// Element children of `el`, for staggering over a container the way the
/// sections animate their nav/panel/letter groups. Empty when detached.
pub fn children_of(el: &HtmlElement) -> Vec<HtmlElement> {
    let children = el.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .filter_map(|child| child.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// One tween per element with a fixed inter-element delay on top of the
/// shared config.
pub fn stagger_poses(
    elements: &[HtmlElement],
    from: Pose,
    to: Pose,
    cfg: TweenConfig,
    stagger_ms: f64,
) -> Vec<Tween> {
    elements
        .iter()
        .enumerate()
        .filter_map(|(index, el)| {
            let cfg = TweenConfig {
                delay_ms: cfg.delay_ms + index as f64 * stagger_ms,
                ..cfg
            };
            animate_pose(el, from, to, cfg, None)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_none_inside_the_delay() {
        let cfg = TweenConfig::new(600.0).delay(400.0);
        assert_eq!(tween_progress(1000.0, 1000.0, &cfg), None);
        assert_eq!(tween_progress(1399.0, 1000.0, &cfg), None);
    }

    #[test]
    fn progress_spans_the_duration_after_the_delay() {
        let cfg = TweenConfig::new(600.0).delay(400.0);
        assert_eq!(tween_progress(1400.0, 1000.0, &cfg), Some(0.0));
        assert_eq!(tween_progress(1700.0, 1000.0, &cfg), Some(0.5));
        assert_eq!(tween_progress(2000.0, 1000.0, &cfg), Some(1.0));
        assert_eq!(tween_progress(5000.0, 1000.0, &cfg), Some(1.0));
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let cfg = TweenConfig::new(0.0);
        assert_eq!(tween_progress(1000.0, 1000.0, &cfg), Some(1.0));
    }

    #[test]
    fn stagger_offsets_accumulate_on_the_base_delay() {
        let base = TweenConfig::new(800.0).delay(100.0);
        let third = TweenConfig {
            delay_ms: base.delay_ms + 2.0 * 70.0,
            ..base
        };
        assert_eq!(third.delay_ms, 240.0);
        assert_eq!(third.duration_ms, 800.0);
    }
}
