use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::anim::ease::Ease;
use crate::anim::pose::Pose;
use crate::anim::scroll::ResizeBinding;
use crate::anim::tween::{children_of, stagger_poses, Tween, TweenConfig};
use crate::anim::viewport::{current_breakpoint, Breakpoint};

pub const HERO_TITLE: &str = "Digital Supremacy";

const NAV_STAGGER_MS: f64 = 100.0;
const LETTER_STAGGER_MS: f64 = 50.0;
const TITLE_DELAY_MS: f64 = 400.0;
const VSL_DELAY_MS: f64 = 800.0;

const BACKGROUND_VIDEO_URL: &str =
    "https://cdn.yourcreative.com.au/wp-content/uploads/2024/11/12061906/V1-Draft.mp4";
const VSL_VIDEO_URL: &str =
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ElephantsDream.mp4";

/// The title as independently animatable glyphs. A literal space renders as
/// a non-breaking space so the wrapped single-line variant keeps its width.
pub fn title_letters(title: &str) -> Vec<char> {
    title
        .chars()
        .map(|ch| if ch == ' ' { '\u{a0}' } else { ch })
        .collect()
}

/// The two desktop lines of the title.
pub fn title_lines(title: &str) -> Vec<&str> {
    title.split(' ').collect()
}

fn letter_hidden_pose(breakpoint: Breakpoint) -> Pose {
    let y = if breakpoint == Breakpoint::Mobile {
        20.0
    } else {
        40.0
    };
    Pose {
        opacity: 0.0,
        y,
        rotation_x: -90.0,
        ..Pose::IDENTITY
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub toggle_contact_form: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let breakpoint = use_state(current_breakpoint);
    let vsl_hovered = use_state(|| false);

    let nav_ref = use_node_ref();
    let title_ref = use_node_ref();
    let vsl_ref = use_node_ref();
    let overlay_ref = use_node_ref();

    let tweens: Rc<RefCell<Vec<Tween>>> = use_mut_ref(Vec::new);
    let resize = use_mut_ref(|| None::<ResizeBinding>);

    {
        let breakpoint = breakpoint.clone();
        use_effect_with_deps(
            move |_| {
                let binding = {
                    let breakpoint = breakpoint.clone();
                    ResizeBinding::bind(move |width, _| {
                        breakpoint.set(Breakpoint::classify(width));
                    })
                };
                *resize.borrow_mut() = binding;
                move || {
                    resize.borrow_mut().take();
                }
            },
            (),
        );
    }

    // Entrance choreography, replayed when the breakpoint flips the title
    // between its one-line and two-line variants.
    {
        let nav_ref = nav_ref.clone();
        let title_ref = title_ref.clone();
        let vsl_ref = vsl_ref.clone();
        let overlay_ref = overlay_ref.clone();
        let tweens = tweens.clone();
        use_effect_with_deps(
            move |bp: &Breakpoint| {
                let bp = *bp;
                let start = Timeout::new(100, move || {
                    let mut held = tweens.borrow_mut();
                    held.clear();

                    if let Some(overlay) = overlay_ref.cast::<HtmlElement>() {
                        let _ = overlay.style().set_property("opacity", "0.5");
                    }

                    if let Some(nav) = nav_ref.cast::<HtmlElement>() {
                        held.extend(stagger_poses(
                            &children_of(&nav),
                            Pose::hidden_below(30.0),
                            Pose::IDENTITY,
                            TweenConfig::new(600.0).ease(Ease::Power1Out),
                            NAV_STAGGER_MS,
                        ));
                    }

                    if let Some(title) = title_ref.cast::<HtmlElement>() {
                        // Letters are grouped in per-line blocks; flatten so
                        // the stagger runs strictly left to right.
                        let letters: Vec<HtmlElement> = children_of(&title)
                            .iter()
                            .flat_map(|line| children_of(line))
                            .collect();
                        held.extend(stagger_poses(
                            &letters,
                            letter_hidden_pose(bp),
                            Pose::IDENTITY,
                            TweenConfig::new(600.0)
                                .delay(TITLE_DELAY_MS)
                                .ease(Ease::Power1Out),
                            LETTER_STAGGER_MS,
                        ));
                    }

                    if let Some(vsl) = vsl_ref.cast::<HtmlElement>() {
                        held.extend(stagger_poses(
                            &[vsl],
                            Pose::hidden_below(30.0),
                            Pose::IDENTITY,
                            TweenConfig::new(800.0)
                                .delay(VSL_DELAY_MS)
                                .ease(Ease::Power1Out),
                            0.0,
                        ));
                    }
                });
                move || drop(start)
            },
            *breakpoint,
        );
    }

    let on_vsl_enter = {
        let vsl_hovered = vsl_hovered.clone();
        Callback::from(move |_: MouseEvent| vsl_hovered.set(true))
    };
    let on_vsl_leave = {
        let vsl_hovered = vsl_hovered.clone();
        Callback::from(move |_: MouseEvent| vsl_hovered.set(false))
    };
    let on_contact = {
        let toggle = props.toggle_contact_form.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    let single_line = breakpoint.is_touch_layout();
    let hidden_letter_style = {
        let pose = letter_hidden_pose(*breakpoint);
        format!(
            "display: inline-block; transform-origin: center bottom; {}",
            pose.style_css()
        )
    };

    let letter_span = |ch: char| {
        let mut style = hidden_letter_style.clone();
        if ch == '\u{a0}' {
            style.push_str(" width: 0.2em;");
        }
        html! { <span style={style}>{ch.to_string()}</span> }
    };

    html! {
        <section class="hero-section">
            <style>
                {r#"
                    .hero-section {
                        position: relative;
                        width: 100%;
                        height: 100vh;
                        min-height: 100vh;
                        overflow: hidden;
                    }
                    .hero-video-bg {
                        position: absolute;
                        inset: 0;
                    }
                    .hero-video-bg video {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transform: scale(1.02);
                        animation: subtle-zoom 8s ease-in-out infinite alternate;
                    }
                    .hero-overlay {
                        position: absolute;
                        inset: 0;
                        background: #d4d4d8;
                        opacity: 0;
                        transition: opacity 0.8s;
                    }
                    .hero-gradient {
                        position: absolute;
                        bottom: 0;
                        left: 0;
                        right: 0;
                        height: clamp(6rem, 12vh, 12rem);
                        background-image: linear-gradient(to top, rgba(40, 40, 40, 0.8), transparent);
                        backdrop-filter: blur(3px);
                        z-index: 5;
                    }
                    .hero-nav {
                        position: absolute;
                        top: 2rem;
                        right: 2rem;
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        z-index: 20;
                    }
                    .hero-contact-btn {
                        border: 1px solid #1f2937;
                        color: #1f2937;
                        background: transparent;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        white-space: nowrap;
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .hero-contact-btn:hover {
                        background: #1f2937;
                        color: #fff;
                    }
                    .hero-social {
                        color: #1f2937;
                        transition: color 0.3s;
                        padding: 0.25rem;
                    }
                    .hero-social:hover { color: #4b5563; }
                    .hero-content {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        height: 100%;
                        padding: 0 2rem;
                        z-index: 10;
                        position: relative;
                    }
                    .hero-title-clip {
                        overflow: hidden;
                        width: 100%;
                        text-align: center;
                        margin-bottom: 2rem;
                    }
                    .hero-title {
                        font-weight: 700;
                        color: #000;
                        line-height: 1.05;
                        font-size: clamp(3rem, 11vw, 12rem);
                    }
                    .hero-title-line { display: block; }
                    .hero-title-wrap {
                        display: flex;
                        justify-content: center;
                        white-space: nowrap;
                        flex-wrap: wrap;
                    }
                    .hero-vsl {
                        aspect-ratio: 16 / 9;
                        background: #d1d5db;
                        border-radius: 0.5rem;
                        overflow: hidden;
                        height: clamp(200px, 40vh, 400px);
                        width: 35%;
                        max-width: 36rem;
                        margin-top: 1.25rem;
                    }
                    @media (max-width: 1024px) {
                        .hero-vsl { width: 70%; max-width: 32rem; }
                    }
                    @media (max-width: 640px) {
                        .hero-nav { top: 0.75rem; right: 0.75rem; gap: 0.5rem; }
                        .hero-vsl { width: 90%; max-width: 24rem; }
                    }
                    .hero-vsl video {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                "#}
            </style>

            <div class="hero-video-bg">
                <video autoplay={true} muted={true} loop={true} playsinline={true} preload="metadata">
                    <source src={BACKGROUND_VIDEO_URL} type="video/mp4" />
                    {"Your browser does not support the video tag."}
                </video>
                <div ref={overlay_ref} class="hero-overlay"></div>
            </div>

            <div class="hero-gradient"></div>

            <div ref={nav_ref} class="hero-nav">
                <button class="hero-contact-btn" style="opacity: 0;" onclick={on_contact}>
                    {"CONTACT"} <span style="margin-left: 0.5rem;">{"→"}</span>
                </button>
                <a
                    href="https://www.instagram.com/digitalsupremacy.in"
                    class="hero-social"
                    aria-label="Instagram"
                    style="opacity: 0;"
                >
                    {"Instagram"}
                </a>
                <a
                    href="https://www.linkedin.com/company/digital-supremacy-in/"
                    class="hero-social"
                    aria-label="LinkedIn"
                    style="opacity: 0;"
                >
                    {"LinkedIn"}
                </a>
            </div>

            <div class="hero-content">
                <div class="hero-title-clip">
                    <h1 ref={title_ref} class="hero-title">
                        {
                            if single_line {
                                html! {
                                    <div class="hero-title-wrap">
                                        { for title_letters(HERO_TITLE).into_iter().map(letter_span) }
                                    </div>
                                }
                            } else {
                                html! {
                                    <>
                                        { for title_lines(HERO_TITLE).into_iter().map(|line| html! {
                                            <div class="hero-title-line">
                                                { for title_letters(line).into_iter().map(&letter_span) }
                                            </div>
                                        }) }
                                    </>
                                }
                            }
                        }
                    </h1>
                </div>

                <div
                    ref={vsl_ref}
                    class="hero-vsl"
                    style="opacity: 0;"
                    onmouseenter={on_vsl_enter}
                    onmouseleave={on_vsl_leave}
                >
                    <video
                        controls={*vsl_hovered}
                        autoplay={true}
                        muted={true}
                        loop={true}
                        playsinline={true}
                        preload="metadata"
                    >
                        <source src={VSL_VIDEO_URL} type="video/mp4" />
                        {"Your browser does not support the video tag."}
                    </video>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_reconstruct_the_title_in_order() {
        let rebuilt: String = title_letters(HERO_TITLE)
            .into_iter()
            .map(|ch| if ch == '\u{a0}' { ' ' } else { ch })
            .collect();
        assert_eq!(rebuilt, "Digital Supremacy");
    }

    #[test]
    fn interior_space_becomes_a_non_breaking_space() {
        let letters = title_letters(HERO_TITLE);
        assert_eq!(letters[7], '\u{a0}');
        assert_eq!(letters.iter().filter(|&&c| c == '\u{a0}').count(), 1);
    }

    #[test]
    fn desktop_title_splits_into_two_lines() {
        assert_eq!(title_lines(HERO_TITLE), vec!["Digital", "Supremacy"]);
    }

    #[test]
    fn mobile_letters_start_closer_than_desktop_letters() {
        let mobile = letter_hidden_pose(Breakpoint::Mobile);
        let desktop = letter_hidden_pose(Breakpoint::Desktop);
        assert_eq!(mobile.y, 20.0);
        assert_eq!(desktop.y, 40.0);
        assert_eq!(mobile.rotation_x, -90.0);
        assert_eq!(desktop.opacity, 0.0);
    }
}
