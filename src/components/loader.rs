use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::anim::ease::Ease;
use crate::anim::marquee::MarqueeTiming;
use crate::anim::pose::Pose;
use crate::anim::tween::{animate_pose, stagger_poses, Tween, TweenConfig};
use crate::anim::viewport::viewport_size;

const MARQUEE_TEXT: &str = "LOADING DIGITAL";
const ROWS: usize = 7;
const COLUMNS: usize = 10;

/// How long the splash holds before the exit choreography starts.
const HOLD_MS: u32 = 3000;

const ROW_ENTRY_STAGGER_MS: f64 = 50.0;
const ROW_EXIT_STAGGER_MS: f64 = 70.0;
const GLOW_EXIT_DELAY_MS: f64 = 500.0;
const WIPE_DELAY_MS: f64 = 1000.0;
const WIPE_DURATION_MS: f64 = 1100.0;
const FADE_OUT_DELAY_MS: f64 = 2100.0;
const FADE_OUT_DURATION_MS: f64 = 500.0;

#[derive(Properties, PartialEq)]
pub struct LoaderProps {
    pub on_loading_complete: Callback<()>,
}

#[function_component(Loader)]
pub fn loader(props: &LoaderProps) -> Html {
    let loader_ref = use_node_ref();
    let glow_ref = use_node_ref();
    let wipe_ref = use_node_ref();
    let row_refs = use_mut_ref(|| (0..ROWS).map(|_| NodeRef::default()).collect::<Vec<_>>());
    let tweens: Rc<RefCell<Vec<Tween>>> = use_mut_ref(Vec::new);

    {
        let loader_ref = loader_ref.clone();
        let glow_ref = glow_ref.clone();
        let wipe_ref = wipe_ref.clone();
        let row_refs = row_refs.clone();
        let tweens = tweens.clone();
        let on_loading_complete = props.on_loading_complete.clone();

        use_effect_with_deps(
            move |_| {
                let rows: Vec<HtmlElement> = row_refs
                    .borrow()
                    .iter()
                    .filter_map(|r| r.cast::<HtmlElement>())
                    .collect();

                // Rows fade up to their dim resting opacity as the splash
                // appears.
                tweens.borrow_mut().extend(stagger_poses(
                    &rows,
                    Pose {
                        opacity: 0.0,
                        ..Pose::IDENTITY
                    },
                    Pose {
                        opacity: 0.3,
                        ..Pose::IDENTITY
                    },
                    TweenConfig::new(600.0).ease(Ease::Power1Out),
                    ROW_ENTRY_STAGGER_MS,
                ));

                let exit_tweens = tweens.clone();
                spawn_local(async move {
                    TimeoutFuture::new(HOLD_MS).await;
                    info!("loader hold finished, starting exit transition");

                    let mut held = exit_tweens.borrow_mut();
                    // Replacing the entry tweens cancels any still running.
                    held.clear();

                    held.extend(stagger_poses(
                        &rows,
                        Pose {
                            opacity: 0.3,
                            ..Pose::IDENTITY
                        },
                        Pose::hidden_below(-30.0),
                        TweenConfig::new(800.0).ease(Ease::Power1Out),
                        ROW_EXIT_STAGGER_MS,
                    ));

                    if let Some(glow) = glow_ref.cast::<HtmlElement>() {
                        held.extend(animate_pose(
                            &glow,
                            Pose {
                                opacity: 0.2,
                                ..Pose::IDENTITY
                            },
                            Pose {
                                opacity: 0.0,
                                scale: 0.3,
                                ..Pose::IDENTITY
                            },
                            TweenConfig::new(800.0)
                                .delay(GLOW_EXIT_DELAY_MS)
                                .ease(Ease::Power1Out),
                            None,
                        ));
                    }

                    if let Some(wipe) = wipe_ref.cast::<HtmlElement>() {
                        // The white panel starts one viewport below and
                        // sweeps up across the whole screen.
                        let (_, height) = viewport_size();
                        held.extend(animate_pose(
                            &wipe,
                            Pose {
                                opacity: 1.0,
                                y: height,
                                ..Pose::IDENTITY
                            },
                            Pose {
                                opacity: 1.0,
                                y: -height,
                                scale: 1.1,
                                ..Pose::IDENTITY
                            },
                            TweenConfig::new(WIPE_DURATION_MS)
                                .delay(WIPE_DELAY_MS)
                                .ease(Ease::CubicInOut),
                            None,
                        ));
                    }

                    if let Some(container) = loader_ref.cast::<HtmlElement>() {
                        let done = {
                            let on_loading_complete = on_loading_complete.clone();
                            Callback::from(move |_| {
                                info!("loader exit complete");
                                on_loading_complete.emit(());
                            })
                        };
                        held.extend(animate_pose(
                            &container,
                            Pose::IDENTITY,
                            Pose {
                                opacity: 0.0,
                                ..Pose::IDENTITY
                            },
                            TweenConfig::new(FADE_OUT_DURATION_MS)
                                .delay(FADE_OUT_DELAY_MS)
                                .ease(Ease::Power1In),
                            Some(done),
                        ));
                    } else {
                        // Already unmounted; still signal completion so the
                        // page is never stuck behind the splash.
                        on_loading_complete.emit(());
                    }
                });

                || ()
            },
            (),
        );
    }

    let marquee_copy: Vec<String> = std::iter::repeat(MARQUEE_TEXT.to_string())
        .take(COLUMNS * 3)
        .collect();

    html! {
        <div ref={loader_ref} class="loader-container">
            <style>
                {r#"
                    .loader-container {
                        position: fixed;
                        inset: 0;
                        background: #000;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        z-index: 50;
                    }
                    .loader-rows {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        flex-direction: column;
                        justify-content: space-between;
                        align-items: center;
                        user-select: none;
                        pointer-events: none;
                    }
                    .loader-row-wrap {
                        flex: 1;
                        display: flex;
                        align-items: center;
                        width: 100%;
                        overflow: hidden;
                        opacity: 0;
                        will-change: transform, opacity;
                    }
                    .loader-row {
                        display: flex;
                        white-space: nowrap;
                        min-width: 200%;
                        justify-content: center;
                        font-family: "Bebas Neue", "Arial Black", sans-serif;
                        font-size: clamp(52px, 12vw, 14.5vh);
                        letter-spacing: 0.2em;
                        line-height: 1;
                        color: transparent;
                        -webkit-text-stroke: 5px #333;
                    }
                    .loader-row span {
                        display: inline-block;
                        margin: 0 3vw;
                    }
                    .loader-glow {
                        position: absolute;
                        width: 24rem;
                        height: 24rem;
                        border-radius: 9999px;
                        opacity: 0.2;
                        filter: blur(64px);
                        background: radial-gradient(circle, #3b82f6 0%, transparent 70%);
                        animation: pulse 2s ease-in-out infinite;
                    }
                    .loader-wipe {
                        position: fixed;
                        inset: 0;
                        background: #fff;
                        z-index: 100;
                        pointer-events: none;
                        transform: translate(0px, 100vh);
                        will-change: transform, opacity;
                    }
                "#}
            </style>
            <div class="loader-rows">
                { for (0..ROWS).map(|row| {
                    let timing = MarqueeTiming::loader_row(row);
                    let row_ref = row_refs.borrow()[row].clone();
                    html! {
                        <div ref={row_ref} class="loader-row-wrap">
                            <div class="loader-row" style={timing.animation_css()}>
                                { for marquee_copy.iter().map(|text| html! {
                                    <span>{text.as_str()}</span>
                                }) }
                            </div>
                        </div>
                    }
                }) }
            </div>
            <div ref={glow_ref} class="loader-glow"></div>
            <div ref={wipe_ref} class="loader-wipe"></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_phases_run_in_declared_order() {
        // Rows first, glow next, then the wipe, and the container fade must
        // not begin before the wipe has mostly covered the screen.
        let last_row_start = (ROWS - 1) as f64 * ROW_EXIT_STAGGER_MS;
        assert!(last_row_start < GLOW_EXIT_DELAY_MS);
        assert!(GLOW_EXIT_DELAY_MS < WIPE_DELAY_MS);
        assert!(FADE_OUT_DELAY_MS >= WIPE_DELAY_MS + WIPE_DURATION_MS);
    }

    #[test]
    fn marquee_copy_is_tripled_for_seamless_wrap() {
        assert_eq!(COLUMNS * 3, 30);
    }
}
