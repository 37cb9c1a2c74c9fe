use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    WheelEvent,
};

use crate::anim::tween::Tween;
use crate::anim::viewport::viewport_size;

// ---------------------------------------------------------------------------
// Trigger math. Pure, shared by the sections and their tests.
// ---------------------------------------------------------------------------

/// True once the top of a region has risen to `fraction` of the viewport
/// height, the "top 85%"-style start rule of a threshold reveal.
pub fn threshold_crossed(rect_top: f64, viewport_h: f64, fraction: f64) -> bool {
    rect_top <= viewport_h * fraction
}

/// Normalized [0, 1] progress of a pinned region that stays fixed for
/// `pin_distance` px of scroll starting at `pin_start`.
pub fn pin_progress(scroll_y: f64, pin_start: f64, pin_distance: f64) -> f64 {
    if pin_distance <= 0.0 {
        return 1.0;
    }
    ((scroll_y - pin_start) / pin_distance).clamp(0.0, 1.0)
}

/// Progress of element `index` inside an overall scrub timeline: each element
/// starts `stagger` later and sweeps its own window `ramp` times faster than
/// the timeline, so elements resolve strictly left to right.
pub fn letter_progress(progress: f64, index: usize, stagger: f64, ramp: f64) -> f64 {
    ((progress - index as f64 * stagger) * ramp).clamp(0.0, 1.0)
}

/// One frame of exponential approach used by the wheel smoother. Snaps when
/// within half a pixel so the loop can settle and stop.
pub fn smooth_step(current: f64, target: f64, factor: f64) -> f64 {
    let next = current + (target - current) * factor;
    if (target - next).abs() < 0.5 {
        target
    } else {
        next
    }
}

// ---------------------------------------------------------------------------
// Listener resources. One binding per section, released on Drop.
// ---------------------------------------------------------------------------

/// A window scroll listener scoped to a section's lifetime. The callback
/// receives the current vertical scroll offset; it also fires once at bind
/// time so initial poses are correct before the first scroll event.
pub struct ScrollBinding {
    closure: Closure<dyn FnMut()>,
}

impl ScrollBinding {
    pub fn bind(mut on_scroll: impl FnMut(f64) + 'static) -> Option<Self> {
        let win = window()?;
        let reader = win.clone();
        let closure = Closure::wrap(Box::new(move || {
            let y = reader.scroll_y().unwrap_or(0.0);
            on_scroll(y);
        }) as Box<dyn FnMut()>);
        win.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
            .ok()?;
        let _ = closure
            .as_ref()
            .unchecked_ref::<js_sys::Function>()
            .call0(&JsValue::NULL);
        Some(ScrollBinding { closure })
    }
}

impl Drop for ScrollBinding {
    fn drop(&mut self) {
        if let Some(win) = window() {
            let _ = win.remove_event_listener_with_callback(
                "scroll",
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}

const RESIZE_DEBOUNCE_MS: u32 = 150;

/// A debounced window resize listener. Re-measuring pinned sections on every
/// raw resize event feeds back into layout, so the callback only runs once
/// the viewport has been stable for a beat.
pub struct ResizeBinding {
    closure: Closure<dyn FnMut()>,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl ResizeBinding {
    pub fn bind(on_resize: impl FnMut(f64, f64) + 'static) -> Option<Self> {
        let win = window()?;
        let handler = Rc::new(RefCell::new(on_resize));
        let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        let closure = {
            let pending = pending.clone();
            Closure::wrap(Box::new(move || {
                let handler = handler.clone();
                // Replacing the slot drops, and thereby cancels, any timer
                // still pending from an earlier resize event.
                *pending.borrow_mut() = Some(Timeout::new(RESIZE_DEBOUNCE_MS, move || {
                    let (width, height) = viewport_size();
                    (*handler.borrow_mut())(width, height);
                }));
            }) as Box<dyn FnMut()>)
        };
        win.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            .ok()?;
        Some(ResizeBinding { closure, pending })
    }
}

impl Drop for ResizeBinding {
    fn drop(&mut self) {
        if let Some(win) = window() {
            let _ = win.remove_event_listener_with_callback(
                "resize",
                self.closure.as_ref().unchecked_ref(),
            );
        }
        self.pending.borrow_mut().take();
    }
}

/// An IntersectionObserver scoped to one reveal region; used where a plain
/// "first time it becomes visible" trigger is enough. Disconnects on Drop.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _closure: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn observe(
        target: &Element,
        threshold: f64,
        root_margin: &str,
        mut on_enter: impl FnMut() + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        on_enter();
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        init.set_root_margin(root_margin);
        let observer =
            IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)
                .ok()?;
        observer.observe(target);
        Some(RevealObserver {
            observer,
            _closure: closure,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

// ---------------------------------------------------------------------------
// Threshold reveals.
// ---------------------------------------------------------------------------

/// One region of the page that reveals when its top crosses a viewport
/// fraction. `forward` starts the reveal tweens; an optional `reverse`
/// re-hides the region when it leaves backward, which re-arms the forward
/// animation for the next entry.
pub struct RevealRegion {
    root: web_sys::HtmlElement,
    enter_fraction: f64,
    forward: Box<dyn Fn() -> Vec<Tween>>,
    reverse: Option<Box<dyn Fn() -> Vec<Tween>>>,
    revealed: bool,
    active: Vec<Tween>,
}

impl RevealRegion {
    pub fn new(
        root: web_sys::HtmlElement,
        enter_fraction: f64,
        forward: impl Fn() -> Vec<Tween> + 'static,
    ) -> Self {
        RevealRegion {
            root,
            enter_fraction,
            forward: Box::new(forward),
            reverse: None,
            revealed: false,
            active: Vec::new(),
        }
    }

    pub fn with_reverse(mut self, reverse: impl Fn() -> Vec<Tween> + 'static) -> Self {
        self.reverse = Some(Box::new(reverse));
        self
    }

    fn update(&mut self, viewport_h: f64) {
        if !self.root.is_connected() {
            return;
        }
        let top = self.root.get_bounding_client_rect().top();
        let crossed = threshold_crossed(top, viewport_h, self.enter_fraction);
        if crossed && !self.revealed {
            self.revealed = true;
            // Replacing the previous tween set cancels anything in flight.
            self.active = (self.forward)();
        } else if !crossed && self.revealed {
            if let Some(reverse) = self.reverse.as_ref() {
                self.revealed = false;
                self.active = reverse();
            }
        }
    }
}

/// All of a section's reveal regions behind a single scroll listener. The
/// set re-evaluates every region per scroll event and once at bind time;
/// dropping it releases the listener and cancels in-flight tweens.
pub struct RevealSet {
    _regions: Rc<RefCell<Vec<RevealRegion>>>,
    _binding: ScrollBinding,
}

impl RevealSet {
    pub fn bind(regions: Vec<RevealRegion>) -> Option<Self> {
        let regions = Rc::new(RefCell::new(regions));
        let binding = {
            let regions = regions.clone();
            ScrollBinding::bind(move |_| {
                let (_, viewport_h) = viewport_size();
                for region in regions.borrow_mut().iter_mut() {
                    region.update(viewport_h);
                }
            })?
        };
        Some(RevealSet {
            _regions: regions,
            _binding: binding,
        })
    }
}

// ---------------------------------------------------------------------------
// Wheel-to-scroll smoothing.
// ---------------------------------------------------------------------------

const SMOOTH_FACTOR: f64 = 0.12;
const LINE_DELTA_PX: f64 = 16.0;

/// Desktop wheel smoothing. While alive it owns the scroll position: wheel
/// events are intercepted and the window is driven toward the accumulated
/// target by an animation-frame loop. Dropping it removes the listener and
/// cancels the loop, relinquishing scroll to the browser.
pub struct ScrollSmoother {
    wheel: Closure<dyn FnMut(WheelEvent)>,
    raf_id: Rc<Cell<Option<i32>>>,
    raf_closure: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl ScrollSmoother {
    pub fn engage() -> Option<Self> {
        let win = window()?;

        let target = Rc::new(Cell::new(0.0_f64));
        let current = Rc::new(Cell::new(0.0_f64));
        let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let raf_closure: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

        {
            let win = win.clone();
            let target = target.clone();
            let current = current.clone();
            let raf_id_inner = raf_id.clone();
            let raf_closure_inner = raf_closure.clone();
            *raf_closure.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                let next = smooth_step(current.get(), target.get(), SMOOTH_FACTOR);
                current.set(next);
                win.scroll_to_with_x_and_y(0.0, next);
                if next == target.get() {
                    raf_id_inner.set(None);
                    return;
                }
                let reschedule = raf_closure_inner.borrow();
                if let Some(closure) = reschedule.as_ref() {
                    raf_id_inner.set(
                        win.request_animation_frame(closure.as_ref().unchecked_ref())
                            .ok(),
                    );
                }
            }) as Box<dyn FnMut()>));
        }

        let wheel = {
            let win = win.clone();
            let target_cell = target;
            let current_cell = current;
            let raf_id = raf_id.clone();
            let raf_closure = raf_closure.clone();
            Closure::wrap(Box::new(move |event: WheelEvent| {
                event.prevent_default();
                let delta = if event.delta_mode() == WheelEvent::DOM_DELTA_LINE {
                    event.delta_y() * LINE_DELTA_PX
                } else {
                    event.delta_y()
                };

                // When the loop is idle the browser may have moved the page
                // under us (keyboard, scrollbar); re-sync before steering.
                if raf_id.get().is_none() {
                    let y = win.scroll_y().unwrap_or(0.0);
                    current_cell.set(y);
                    target_cell.set(y);
                }
                target_cell.set((target_cell.get() + delta).clamp(0.0, max_scroll(&win)));

                if raf_id.get().is_none() {
                    if let Some(closure) = raf_closure.borrow().as_ref() {
                        raf_id.set(
                            win.request_animation_frame(closure.as_ref().unchecked_ref())
                                .ok(),
                        );
                    }
                }
            }) as Box<dyn FnMut(WheelEvent)>)
        };

        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(false);
        win.add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            wheel.as_ref().unchecked_ref(),
            &options,
        )
        .ok()?;

        Some(ScrollSmoother {
            wheel,
            raf_id,
            raf_closure,
        })
    }
}

impl Drop for ScrollSmoother {
    fn drop(&mut self) {
        if let Some(win) = window() {
            let _ = win
                .remove_event_listener_with_callback("wheel", self.wheel.as_ref().unchecked_ref());
            if let Some(id) = self.raf_id.take() {
                let _ = win.cancel_animation_frame(id);
            }
        }
        self.raf_closure.borrow_mut().take();
    }
}

fn max_scroll(win: &web_sys::Window) -> f64 {
    let page = win
        .document()
        .and_then(|doc| doc.document_element())
        .map(|root| root.scroll_height() as f64)
        .unwrap_or(0.0);
    let viewport = win
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (page - viewport).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_blocks_reveal_once_85_percent_down_the_viewport() {
        let viewport_h = 667.0; // 375px-wide phone
        assert!(!threshold_crossed(650.0, viewport_h, 0.85));
        assert!(threshold_crossed(viewport_h * 0.85, viewport_h, 0.85));
        assert!(threshold_crossed(120.0, viewport_h, 0.85));
    }

    #[test]
    fn pin_progress_spans_exactly_the_pin_distance() {
        let start = 2000.0;
        assert_eq!(pin_progress(1500.0, start, 1500.0), 0.0);
        assert_eq!(pin_progress(start, start, 1500.0), 0.0);
        assert_eq!(pin_progress(start + 750.0, start, 1500.0), 0.5);
        assert_eq!(pin_progress(start + 1500.0, start, 1500.0), 1.0);
        assert_eq!(pin_progress(start + 9000.0, start, 1500.0), 1.0);
    }

    #[test]
    fn degenerate_pin_distance_is_already_complete() {
        assert_eq!(pin_progress(100.0, 0.0, 0.0), 1.0);
    }

    #[test]
    fn letter_progress_is_monotonic_in_scroll_progress() {
        for index in 0..8 {
            let mut last = letter_progress(0.0, index, 0.05, 4.0);
            for step in 1..=200 {
                let progress = step as f64 / 200.0;
                let value = letter_progress(progress, index, 0.05, 4.0);
                assert!(value >= last, "letter {index} regressed at {progress}");
                last = value;
            }
            assert_eq!(last, 1.0, "letter {index} never fully resolved");
        }
    }

    #[test]
    fn letters_resolve_strictly_left_to_right() {
        let progress = 0.3;
        let values: Vec<f64> = (0..8)
            .map(|i| letter_progress(progress, i, 0.05, 4.0))
            .collect();
        for pair in values.windows(2) {
            assert!(pair[0] >= pair[1]);
        }
        assert_eq!(values[0], 1.0);
        assert_eq!(values[7], 0.0);
    }

    #[test]
    fn smoother_converges_and_settles() {
        let mut current = 0.0;
        let target = 1200.0;
        let mut frames = 0;
        while current != target {
            let next = smooth_step(current, target, 0.12);
            assert!(next > current && next <= target);
            current = next;
            frames += 1;
            assert!(frames < 200, "failed to settle");
        }
        // Once settled the step is a fixed point and the loop can stop.
        assert_eq!(smooth_step(current, target, 0.12), target);
    }
}
