use std::cell::RefCell;
use std::rc::Rc;

use log::info;
use web_sys::{HtmlElement, HtmlVideoElement};
use yew::prelude::*;

use crate::anim::ease::Ease;
use crate::anim::pose::Pose;
use crate::anim::scroll::{
    letter_progress, pin_progress, ResizeBinding, RevealRegion, RevealSet, ScrollBinding,
    ScrollSmoother,
};
use crate::anim::tween::{animate_pose, children_of, stagger_poses, Tween, TweenConfig};
use crate::anim::viewport::{current_breakpoint, Breakpoint};
use crate::components::hero::title_letters;
use crate::config;
use crate::data::{MediaItem, WORK_SERVICES};

pub const HEADING_TEXT: &str = "OUR WORK";

/// Scroll distance the heading stays pinned for on desktop.
pub const PIN_DISTANCE_PX: f64 = 1500.0;
pub const HEADING_LETTER_STAGGER: f64 = 0.05;
pub const HEADING_LETTER_RAMP: f64 = 4.0;

const HEADING_HIDDEN: Pose = Pose {
    opacity: 0.0,
    x: 0.0,
    y: 50.0,
    rotation_x: -45.0,
    scale: 0.8,
    blur: 5.0,
};

const MEDIA_HIDDEN: Pose = Pose {
    opacity: 0.0,
    x: 0.0,
    y: 50.0,
    rotation_x: 0.0,
    scale: 0.98,
    blur: 0.0,
};

const PANEL_HIDDEN: Pose = Pose::hidden_left(-50.0);
const CTA_HIDDEN: Pose = Pose {
    opacity: 0.0,
    x: 0.0,
    y: 30.0,
    rotation_x: 0.0,
    scale: 0.9,
    blur: 0.0,
};
const MOBILE_TITLE_HIDDEN: Pose = Pose::hidden_below(30.0);

/// Pose of heading letter `index` at pinned scrub `progress`. Each letter
/// resolves inside its own staggered window, so the word fills in strictly
/// left to right as the visitor scrolls.
pub fn heading_letter_pose(progress: f64, index: usize) -> Pose {
    let lp = letter_progress(progress, index, HEADING_LETTER_STAGGER, HEADING_LETTER_RAMP);
    HEADING_HIDDEN.lerp(&Pose::IDENTITY, lp)
}

#[derive(Properties, PartialEq)]
pub struct WorkProps {
    pub toggle_contact_form: Callback<()>,
}

#[function_component(Work)]
pub fn work(props: &WorkProps) -> Html {
    let breakpoint = use_state(current_breakpoint);

    let heading_wrap_ref = use_node_ref();
    let letter_refs = use_mut_ref(|| {
        HEADING_TEXT
            .chars()
            .map(|_| NodeRef::default())
            .collect::<Vec<_>>()
    });
    let section_refs = use_mut_ref(|| {
        (0..WORK_SERVICES.len())
            .map(|_| NodeRef::default())
            .collect::<Vec<_>>()
    });
    let panel_refs = use_mut_ref(|| {
        (0..WORK_SERVICES.len())
            .map(|_| NodeRef::default())
            .collect::<Vec<_>>()
    });
    let mobile_title_refs = use_mut_ref(|| {
        (0..WORK_SERVICES.len())
            .map(|_| NodeRef::default())
            .collect::<Vec<_>>()
    });
    let block_refs = use_mut_ref(|| {
        (0..WORK_SERVICES.len() * 3)
            .map(|_| NodeRef::default())
            .collect::<Vec<_>>()
    });
    let media_refs = use_mut_ref(|| {
        (0..WORK_SERVICES.len() * 3)
            .map(|_| NodeRef::default())
            .collect::<Vec<_>>()
    });
    let info_refs = use_mut_ref(|| {
        (0..WORK_SERVICES.len() * 3)
            .map(|_| NodeRef::default())
            .collect::<Vec<_>>()
    });
    let cta_ref = use_node_ref();

    let resize = use_mut_ref(|| None::<ResizeBinding>);
    let scrub = use_mut_ref(|| None::<ScrollBinding>);
    let reveals = use_mut_ref(|| None::<RevealSet>);
    let smoother = use_mut_ref(|| None::<ScrollSmoother>);
    let heading_tweens: Rc<RefCell<Vec<Tween>>> = use_mut_ref(Vec::new);
    let heading_revealed = use_mut_ref(|| false);

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

    // Scroll orchestration, rebuilt whenever the breakpoint changes layout
    // strategy. Every binding is an owned resource dropped on cleanup, so a
    // resize or unmount can never leave a listener behind.
    {
        let heading_wrap_ref = heading_wrap_ref.clone();
        let letter_refs = letter_refs.clone();
        let section_refs = section_refs.clone();
        let panel_refs = panel_refs.clone();
        let mobile_title_refs = mobile_title_refs.clone();
        let block_refs = block_refs.clone();
        let media_refs = media_refs.clone();
        let info_refs = info_refs.clone();
        let cta_ref = cta_ref.clone();
        let scrub = scrub.clone();
        let reveals = reveals.clone();
        let smoother = smoother.clone();
        let heading_tweens = heading_tweens.clone();
        let heading_revealed = heading_revealed.clone();

        use_effect_with_deps(
            move |bp: &Breakpoint| {
                let bp = *bp;
                let pinned = bp.supports_pinning();
                info!("binding work scroll orchestration (pinned: {pinned})");

                let letters: Vec<HtmlElement> = letter_refs
                    .borrow()
                    .iter()
                    .filter_map(|r| r.cast::<HtmlElement>())
                    .collect();

                if pinned {
                    // Scrubbed heading: progress is how far the sticky
                    // wrapper has been scrolled into its pin distance.
                    let wrap = heading_wrap_ref.cast::<HtmlElement>();
                    let letters = letters.clone();
                    *scrub.borrow_mut() = ScrollBinding::bind(move |_| {
                        let Some(wrap) = wrap.as_ref() else { return };
                        if !wrap.is_connected() {
                            return;
                        }
                        let top = wrap.get_bounding_client_rect().top();
                        let progress = pin_progress(-top, 0.0, PIN_DISTANCE_PX);
                        for (index, letter) in letters.iter().enumerate() {
                            heading_letter_pose(progress, index).apply_to(letter);
                        }
                    });
                } else {
                    *scrub.borrow_mut() = None;
                }

                let mut regions: Vec<RevealRegion> = Vec::new();

                if !pinned {
                    // Below desktop the heading is a one-shot threshold
                    // reveal instead of a pinned scrub.
                    if let Some(wrap) = heading_wrap_ref.cast::<HtmlElement>() {
                        let letters = letters.clone();
                        let heading_tweens = heading_tweens.clone();
                        let heading_revealed = heading_revealed.clone();
                        regions.push(RevealRegion::new(wrap, 0.8, move || {
                            if *heading_revealed.borrow() {
                                return Vec::new();
                            }
                            *heading_revealed.borrow_mut() = true;
                            let tweens = stagger_poses(
                                &letters,
                                HEADING_HIDDEN,
                                Pose::IDENTITY,
                                TweenConfig::new(600.0).ease(Ease::Power1Out),
                                50.0,
                            );
                            *heading_tweens.borrow_mut() = tweens;
                            Vec::new()
                        }));
                    }
                }

                let panel_fraction = if pinned { 0.75 } else { 0.85 };
                for (i, _service) in WORK_SERVICES.iter().enumerate() {
                    let Some(section) = section_refs.borrow()[i].cast::<HtmlElement>() else {
                        continue;
                    };
                    let panel = panel_refs.borrow()[i].cast::<HtmlElement>();
                    let mobile_title = mobile_title_refs.borrow()[i].cast::<HtmlElement>();

                    let forward_panel = panel.clone();
                    let forward_title = mobile_title.clone();
                    let region = RevealRegion::new(section, panel_fraction, move || {
                        let mut tweens = Vec::new();
                        if let Some(panel) = forward_panel.as_ref() {
                            tweens.extend(stagger_poses(
                                &children_of(panel),
                                PANEL_HIDDEN,
                                Pose::IDENTITY,
                                TweenConfig::new(800.0).ease(Ease::Power1Out),
                                100.0,
                            ));
                        }
                        if let Some(title) = forward_title.as_ref() {
                            tweens.extend(stagger_poses(
                                &children_of(title),
                                MOBILE_TITLE_HIDDEN,
                                Pose::IDENTITY,
                                TweenConfig::new(600.0).ease(Ease::Power1Out),
                                100.0,
                            ));
                        }
                        tweens
                    })
                    .with_reverse(move || {
                        let mut tweens = Vec::new();
                        if let Some(panel) = panel.as_ref() {
                            tweens.extend(stagger_poses(
                                &children_of(panel),
                                Pose::IDENTITY,
                                PANEL_HIDDEN,
                                TweenConfig::new(500.0).ease(Ease::Power1In),
                                50.0,
                            ));
                        }
                        if let Some(title) = mobile_title.as_ref() {
                            tweens.extend(stagger_poses(
                                &children_of(title),
                                Pose::IDENTITY,
                                MOBILE_TITLE_HIDDEN,
                                TweenConfig::new(500.0).ease(Ease::Power1In),
                                50.0,
                            ));
                        }
                        tweens
                    });
                    regions.push(region);
                }

                let media_fraction = if pinned { 0.8 } else { 0.85 };
                for index in 0..WORK_SERVICES.len() * 3 {
                    let Some(block) = block_refs.borrow()[index].cast::<HtmlElement>() else {
                        continue;
                    };
                    let media = media_refs.borrow()[index].cast::<HtmlElement>();
                    let media_info = info_refs.borrow()[index].cast::<HtmlElement>();
                    let targets: Vec<HtmlElement> =
                        [media, media_info].into_iter().flatten().collect();

                    let forward_targets = targets.clone();
                    let region = RevealRegion::new(block, media_fraction, move || {
                        stagger_poses(
                            &forward_targets,
                            MEDIA_HIDDEN,
                            Pose::IDENTITY,
                            TweenConfig::new(800.0).ease(Ease::Power1Out),
                            0.0,
                        )
                    })
                    .with_reverse(move || {
                        stagger_poses(
                            &targets,
                            Pose::IDENTITY,
                            MEDIA_HIDDEN,
                            TweenConfig::new(500.0).ease(Ease::Power1In),
                            0.0,
                        )
                    });
                    regions.push(region);
                }

                if let Some(cta) = cta_ref.cast::<HtmlElement>() {
                    let forward_cta = cta.clone();
                    let region = RevealRegion::new(cta.clone(), 0.8, move || {
                        stagger_poses(
                            &children_of(&forward_cta),
                            CTA_HIDDEN,
                            Pose::IDENTITY,
                            TweenConfig::new(600.0).ease(Ease::BackOut),
                            100.0,
                        )
                    })
                    .with_reverse(move || {
                        stagger_poses(
                            &children_of(&cta),
                            Pose::IDENTITY,
                            CTA_HIDDEN,
                            TweenConfig::new(400.0).ease(Ease::Power1In),
                            50.0,
                        )
                    });
                    regions.push(region);
                }

                *reveals.borrow_mut() = RevealSet::bind(regions);
                *smoother.borrow_mut() = if pinned {
                    ScrollSmoother::engage()
                } else {
                    None
                };

                move || {
                    scrub.borrow_mut().take();
                    reveals.borrow_mut().take();
                    smoother.borrow_mut().take();
                    heading_tweens.borrow_mut().clear();
                }
            },
            *breakpoint,
        );
    }

    let pinned = breakpoint.supports_pinning();
    let heading_wrap_style = if pinned {
        format!("height: calc(100vh + {PIN_DISTANCE_PX}px);")
    } else {
        "height: 100vh;".to_string()
    };
    let letter_style = format!(
        "display: inline-block; transform-origin: center bottom; will-change: transform, opacity; {}",
        HEADING_HIDDEN.style_css()
    );

    html! {
        <div class="work-root">
            <style>
                {r#"
                    .work-root { position: relative; overflow: hidden; }
                    .work-heading-wrap { position: relative; }
                    .work-heading-pin {
                        position: sticky;
                        top: 0;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: linear-gradient(to bottom right, #f9fafb, #fff);
                        z-index: 10;
                        padding: 0 1.5rem;
                    }
                    .work-subdesc {
                        position: absolute;
                        top: 1.5rem;
                        right: 2.5rem;
                        max-width: 20%;
                        color: #000;
                        font-size: clamp(0.75rem, 1.2vw, 1.125rem);
                        text-transform: capitalize;
                    }
                    @media (max-width: 1024px) {
                        .work-subdesc { max-width: 40%; }
                    }
                    .work-heading {
                        color: #000;
                        font-weight: 700;
                        font-size: clamp(40px, 15vw, 220px);
                        line-height: 1;
                        letter-spacing: 0.025em;
                        text-align: center;
                        width: 100%;
                    }
                    .work-service { display: flex; flex-direction: column; min-height: 100vh; }
                    @media (min-width: 1025px) {
                        .work-service { flex-direction: row; min-height: 300vh; }
                    }
                    .work-panel {
                        display: none;
                    }
                    @media (min-width: 1025px) {
                        .work-panel {
                            display: flex;
                            width: 35vw;
                            background: linear-gradient(to bottom right, #4c1d95, #1e3a8a);
                            align-items: center;
                            justify-content: flex-start;
                            position: sticky;
                            top: 0;
                            height: 100vh;
                        }
                    }
                    .work-panel-inner {
                        text-align: left;
                        padding: 0 2rem;
                        max-width: 28rem;
                    }
                    .work-panel-inner h3 {
                        color: #d4d4d8;
                        font-family: "Bebas Neue", sans-serif;
                        font-size: 2vw;
                        line-height: 1;
                        white-space: nowrap;
                        text-transform: uppercase;
                    }
                    .work-panel-inner h4 {
                        color: #fff;
                        font-family: "Bebas Neue", sans-serif;
                        font-size: 3.8vw;
                        margin-top: -5px;
                        text-transform: uppercase;
                        line-height: 1;
                        white-space: nowrap;
                        margin-bottom: 1.5rem;
                    }
                    .work-panel-inner > p {
                        color: rgba(255, 255, 255, 0.8);
                        font-family: Quicksand, sans-serif;
                        line-height: 1.3;
                        margin-bottom: 2rem;
                    }
                    .work-panel-list h5 {
                        color: #fff;
                        font-family: "Bebas Neue", sans-serif;
                        font-size: 1.25rem;
                        margin-bottom: 1rem;
                    }
                    .work-panel-list ul {
                        list-style: none;
                        padding: 0;
                        color: rgba(255, 255, 255, 0.8);
                        font-family: Quicksand, sans-serif;
                        font-size: 0.95rem;
                    }
                    .work-panel-list li {
                        display: flex;
                        align-items: center;
                        margin-bottom: 0.5rem;
                    }
                    .work-panel-list li::before {
                        content: "";
                        width: 8px;
                        height: 8px;
                        background: #fff;
                        border-radius: 9999px;
                        margin-right: 0.75rem;
                        flex-shrink: 0;
                    }
                    .work-panel-cta button {
                        background: #fff;
                        color: #4c1d95;
                        border: none;
                        padding: 0.75rem 1.5rem;
                        margin: 2rem 0;
                        border-radius: 9999px;
                        font-weight: 700;
                        font-size: 0.85rem;
                        cursor: pointer;
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.2);
                        transition: transform 0.3s, background 0.3s;
                    }
                    .work-panel-cta button:hover {
                        background: #f3f4f6;
                        transform: scale(1.05);
                    }
                    .work-panel-cta p {
                        color: rgba(255, 255, 255, 0.6);
                        font-family: Quicksand, sans-serif;
                        font-size: 0.85rem;
                        line-height: 1.5;
                    }
                    .work-right { width: 100%; }
                    @media (min-width: 1025px) {
                        .work-right { width: 70vw; }
                    }
                    .work-block {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        padding: 2rem;
                    }
                    .work-block-alt { background: #fafafa; }
                    .work-mobile-title { width: 100%; margin-bottom: 2rem; text-align: left; }
                    @media (min-width: 1025px) {
                        .work-mobile-title { display: none; }
                    }
                    .work-mobile-title h3 {
                        color: #5b21b6;
                        font-family: "Bebas Neue", sans-serif;
                        font-size: clamp(32px, 6vw, 60px);
                        margin-bottom: 0.5rem;
                        line-height: 1.1;
                    }
                    .work-mobile-title p {
                        font-family: Quicksand, sans-serif;
                        color: #4b5563;
                        font-size: 0.9rem;
                    }
                    .work-block-inner { width: 100%; max-width: 56rem; padding: 0 1rem; }
                    .work-media {
                        position: relative;
                        overflow: hidden;
                        border-radius: 0.75rem;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                        height: 29vw;
                        min-height: 16rem;
                        cursor: pointer;
                        will-change: transform, opacity;
                    }
                    @media (max-width: 1024px) {
                        .work-media { height: 50vw; }
                    }
                    .work-media video, .work-media > img {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: contain;
                    }
                    .work-media > img { z-index: 10; }
                    .work-media-plain { box-shadow: none; background: transparent; }
                    .work-grid {
                        position: relative;
                        border-radius: 0.75rem;
                        height: 29vw;
                        min-height: 16rem;
                        background: linear-gradient(to bottom right, #ede9fe, #dbeafe);
                        padding: 1rem;
                        display: grid;
                        gap: 1rem;
                    }
                    @media (max-width: 1024px) {
                        .work-grid { height: 50vw; }
                    }
                    .work-grid-cell {
                        position: relative;
                        overflow: hidden;
                        border-radius: 0.5rem;
                        background: #fff;
                        border: 2px solid #fff;
                        transition: border-color 0.3s;
                    }
                    .work-grid-cell:hover { border-color: #c4b5fd; }
                    .work-grid-cell img {
                        width: 100%;
                        height: 100%;
                        object-fit: contain;
                    }
                    .work-info {
                        margin-top: 2rem;
                        text-align: center;
                        will-change: transform, opacity;
                    }
                    @media (min-width: 1025px) {
                        .work-info { text-align: left; }
                    }
                    .work-info .work-kicker {
                        color: #7c3aed;
                        font-weight: 700;
                        font-size: 0.8rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                    }
                    .work-info h4 {
                        font-family: "Bebas Neue", sans-serif;
                        color: #111827;
                        font-size: clamp(1.25rem, 2.5vw, 1.875rem);
                        margin-top: 0.25rem;
                    }
                    .work-info > p {
                        color: #4b5563;
                        font-family: Quicksand, sans-serif;
                        margin-top: 0.75rem;
                        line-height: 1.6;
                    }
                    .work-info-btn {
                        border: 2px solid #4c1d95;
                        color: #4c1d95;
                        background: transparent;
                        padding: 0.5rem 1.5rem;
                        margin-top: 1rem;
                        border-radius: 9999px;
                        font-weight: 500;
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .work-info-btn:hover { background: #4c1d95; color: #fff; }
                    .work-cta {
                        min-height: 100vh;
                        background: linear-gradient(to right, #4c1d95, #1e3a8a);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 2rem;
                        position: relative;
                        z-index: 50;
                        text-align: center;
                        color: #fff;
                        flex-direction: column;
                    }
                    .work-cta h3 {
                        font-family: "Bebas Neue", sans-serif;
                        font-size: clamp(36px, 8vw, 120px);
                        line-height: 1;
                        margin-bottom: 1.5rem;
                    }
                    .work-cta p {
                        font-family: Quicksand, sans-serif;
                        font-size: clamp(0.875rem, 1.5vw, 1.5rem);
                        max-width: 42rem;
                        margin: 0 auto 2.5rem;
                        line-height: 1.6;
                    }
                    .work-cta button {
                        background: #fff;
                        color: #4c1d95;
                        border: none;
                        padding: 0.75rem 2.5rem;
                        border-radius: 9999px;
                        font-weight: 700;
                        font-size: clamp(0.875rem, 1.2vw, 1.125rem);
                        cursor: pointer;
                        transition: background 0.3s;
                    }
                    .work-cta button:hover { background: #f3f4f6; }
                "#}
            </style>

            <div ref={heading_wrap_ref} class="work-heading-wrap" style={heading_wrap_style}>
                <div class="work-heading-pin">
                    <div class="work-subdesc">
                        <p>
                            <span style="font-weight: 700;">{"Our Clients -"}</span>
                            {" are entrepreneurs, civic change-makers & corporate brands doing good."}
                        </p>
                    </div>
                    <h2 class="work-heading">
                        { for title_letters(HEADING_TEXT).into_iter().enumerate().map(|(i, ch)| {
                            let letter_ref = letter_refs.borrow()[i].clone();
                            html! {
                                <span ref={letter_ref} style={letter_style.clone()}>{ch.to_string()}</span>
                            }
                        }) }
                    </h2>
                </div>
            </div>

            { for WORK_SERVICES.iter().enumerate().map(|(i, service)| {
                let section_ref = section_refs.borrow()[i].clone();
                let panel_ref = panel_refs.borrow()[i].clone();
                let mut words = service.title.split(' ');
                let first_word = words.next().unwrap_or_default();
                let rest: String = words.collect::<Vec<_>>().join(" ");
                let on_panel_contact = {
                    let toggle = props.toggle_contact_form.clone();
                    Callback::from(move |_: MouseEvent| toggle.emit(()))
                };

                html! {
                    <div ref={section_ref} class="work-service" key={service.title}>
                        <div class="work-panel">
                            <div ref={panel_ref} class="work-panel-inner">
                                <h3 style="opacity: 0;">{first_word}</h3>
                                <h4 style="opacity: 0;">{rest}</h4>
                                <p style="opacity: 0;">{service.description}</p>
                                <div class="work-panel-list" style="opacity: 0;">
                                    <h5>{"What We Do:"}</h5>
                                    <ul>
                                        { for service.what_we_do.iter().map(|item| html! {
                                            <li>{*item}</li>
                                        }) }
                                    </ul>
                                </div>
                                <div class="work-panel-cta" style="opacity: 0;">
                                    <button onclick={on_panel_contact}>{"Get Started Now"}</button>
                                    <p>{service.cta}</p>
                                </div>
                            </div>
                        </div>
                        <div class="work-right">
                            { for service.media.iter().enumerate().map(|(j, _)| {
                                let index = i * 3 + j;
                                html! {
                                    <MediaBlock
                                        service_index={i}
                                        media_index={j}
                                        block_ref={block_refs.borrow()[index].clone()}
                                        media_ref={media_refs.borrow()[index].clone()}
                                        info_ref={info_refs.borrow()[index].clone()}
                                        mobile_title_ref={(j == 0).then(|| mobile_title_refs.borrow()[i].clone())}
                                        toggle_contact_form={props.toggle_contact_form.clone()}
                                    />
                                }
                            }) }
                        </div>
                    </div>
                }
            }) }

            <div ref={cta_ref} class="work-cta">
                <h3 style="opacity: 0;">{"Ready to Create?"}</h3>
                <p style="opacity: 0;">
                    {"Let's bring your vision to life with professional video editing that captivates and converts your audience."}
                </p>
                <button
                    style="opacity: 0;"
                    onclick={{
                        let toggle = props.toggle_contact_form.clone();
                        Callback::from(move |_: MouseEvent| toggle.emit(()))
                    }}
                >
                    {"Start Your Project"}
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct MediaBlockProps {
    service_index: usize,
    media_index: usize,
    block_ref: NodeRef,
    media_ref: NodeRef,
    info_ref: NodeRef,
    /// Set on the first block of each service, which hosts the mobile title.
    mobile_title_ref: Option<NodeRef>,
    toggle_contact_form: Callback<()>,
}

#[function_component(MediaBlock)]
fn media_block(props: &MediaBlockProps) -> Html {
    let service = &WORK_SERVICES[props.service_index];
    let item: &MediaItem = &service.media[props.media_index];
    let is_short_form = item.style.is_some();
    let is_graphic = item.images.is_some();

    let thumb_ref = use_node_ref();
    let video_ref = use_node_ref();
    let thumb_hidden = use_mut_ref(|| false);
    let hover_tweens: Rc<RefCell<Vec<Tween>>> = use_mut_ref(Vec::new);

    let on_enter = {
        let thumb_ref = thumb_ref.clone();
        let video_ref = video_ref.clone();
        let thumb_hidden = thumb_hidden.clone();
        let hover_tweens = hover_tweens.clone();
        Callback::from(move |_: MouseEvent| {
            if is_graphic {
                return;
            }
            if *thumb_hidden.borrow() {
                return;
            }
            let Some(thumb) = thumb_ref.cast::<HtmlElement>() else {
                return;
            };
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                video.load();
            }
            let done = {
                let thumb = thumb.clone();
                let thumb_hidden = thumb_hidden.clone();
                Callback::from(move |_| {
                    *thumb_hidden.borrow_mut() = true;
                    let _ = thumb.style().set_property("pointer-events", "none");
                })
            };
            let tween = animate_pose(
                &thumb,
                Pose::IDENTITY,
                Pose {
                    opacity: 0.0,
                    ..Pose::IDENTITY
                },
                TweenConfig::new(300.0).ease(Ease::Power1Out),
                Some(done),
            );
            *hover_tweens.borrow_mut() = tween.into_iter().collect();
        })
    };

    // Image-only blocks get a gentle zoom instead of the thumbnail swap.
    let on_grid_enter = {
        let thumb_ref = thumb_ref.clone();
        let hover_tweens = hover_tweens.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(img) = thumb_ref.cast::<HtmlElement>() else {
                return;
            };
            let tween = animate_pose(
                &img,
                Pose::IDENTITY,
                Pose {
                    scale: 1.05,
                    ..Pose::IDENTITY
                },
                TweenConfig::new(300.0).ease(Ease::Power1Out),
                None,
            );
            *hover_tweens.borrow_mut() = tween.into_iter().collect();
        })
    };
    let on_grid_leave = {
        let thumb_ref = thumb_ref.clone();
        let hover_tweens = hover_tweens.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(img) = thumb_ref.cast::<HtmlElement>() else {
                return;
            };
            let tween = animate_pose(
                &img,
                Pose {
                    scale: 1.05,
                    ..Pose::IDENTITY
                },
                Pose::IDENTITY,
                TweenConfig::new(300.0).ease(Ease::Power1Out),
                None,
            );
            *hover_tweens.borrow_mut() = tween.into_iter().collect();
        })
    };

    let hidden_style = format!("will-change: transform, opacity; {}", MEDIA_HIDDEN.style_css());
    let block_class = classes!(
        "work-block",
        (!is_short_form && props.media_index % 2 == 1).then_some("work-block-alt")
    );

    let media = if is_graphic {
        let images = item.images.unwrap_or_default();
        let columns = format!(
            "grid-template-columns: repeat({}, minmax(0, 1fr));",
            images.len().max(1)
        );
        html! {
            <div ref={props.media_ref.clone()} class="work-grid" style={format!("{columns} {}", MEDIA_HIDDEN.style_css())}>
                { for images.iter().enumerate().map(|(idx, image)| html! {
                    <div
                        class="work-grid-cell"
                        onmouseenter={(idx == 0).then(|| on_grid_enter.clone())}
                        onmouseleave={(idx == 0).then(|| on_grid_leave.clone())}
                    >
                        <img
                            ref={(idx == 0).then(|| thumb_ref.clone()).unwrap_or_default()}
                            src={config::asset(image)}
                            alt={format!("Design {}", idx + 1)}
                        />
                    </div>
                }) }
            </div>
        }
    } else if is_short_form {
        html! {
            <div ref={props.media_ref.clone()} class="work-media work-media-plain" style={hidden_style.clone()}>
                <video
                    ref={video_ref.clone()}
                    style={item.style.unwrap_or_default()}
                    src={item.url.map(config::asset)}
                    controls={true}
                    preload="auto"
                    playsinline={true}
                    muted={true}
                    autoplay={true}
                    loop={true}
                />
            </div>
        }
    } else {
        html! {
            <div
                ref={props.media_ref.clone()}
                class="work-media"
                style={hidden_style.clone()}
                onmouseenter={on_enter}
            >
                <video
                    ref={video_ref.clone()}
                    src={item.url.map(config::asset)}
                    controls={true}
                    preload="metadata"
                />
                <img
                    ref={thumb_ref.clone()}
                    src={item.thumbnail.or(item.url).map(config::asset).unwrap_or_default()}
                    alt={item.title}
                />
            </div>
        }
    };

    let kicker = if is_graphic { "Design" } else { "Video" };
    let on_learn_more = {
        let toggle = props.toggle_contact_form.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    html! {
        <div ref={props.block_ref.clone()} class={block_class}>
            {
                if let Some(title_ref) = props.mobile_title_ref.clone() {
                    html! {
                        <div ref={title_ref} class="work-mobile-title">
                            <h3 style="opacity: 0;">{service.title}</h3>
                            <p style="opacity: 0;">{service.description}</p>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <div class="work-block-inner">
                { media }
                <div ref={props.info_ref.clone()} class="work-info" style={hidden_style}>
                    <span class="work-kicker">{format!("{} {}", kicker, props.media_index + 1)}</span>
                    <h4>{item.title}</h4>
                    <p>{item.description}</p>
                    <button class="work-info-btn" onclick={on_learn_more}>{"Learn More"}</button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_letters_resolve_to_identity_at_full_progress() {
        for index in 0..HEADING_TEXT.chars().count() {
            assert_eq!(heading_letter_pose(1.0, index), Pose::IDENTITY);
        }
    }

    #[test]
    fn heading_letters_start_fully_hidden() {
        for index in 0..HEADING_TEXT.chars().count() {
            assert_eq!(heading_letter_pose(0.0, index), HEADING_HIDDEN);
        }
    }

    #[test]
    fn letter_opacity_is_monotonically_non_decreasing() {
        for index in 0..HEADING_TEXT.chars().count() {
            let mut last = heading_letter_pose(0.0, index).opacity;
            for step in 1..=300 {
                let progress = step as f64 / 300.0;
                let opacity = heading_letter_pose(progress, index).opacity;
                assert!(opacity >= last, "letter {index} dimmed at {progress}");
                last = opacity;
            }
        }
    }

    #[test]
    fn every_heading_letter_fits_inside_the_pin_window() {
        // The last letter's window must close before progress reaches 1.0
        // so the whole word is readable while still pinned.
        let last = HEADING_TEXT.chars().count() - 1;
        let window_end = last as f64 * HEADING_LETTER_STAGGER + 1.0 / HEADING_LETTER_RAMP;
        assert!(window_end < 1.0);
        assert_eq!(heading_letter_pose(window_end, last), Pose::IDENTITY);
    }

    #[test]
    fn desktop_scenario_pins_for_1500px() {
        // A 1440px-wide viewport pins the heading; halfway through the pin
        // distance the first letters are resolved, the last still hidden.
        assert!(Breakpoint::classify(1440.0).supports_pinning());
        let progress = pin_progress(-(-750.0_f64), 0.0, PIN_DISTANCE_PX);
        assert_eq!(progress, 0.5);
        assert_eq!(heading_letter_pose(progress, 0), Pose::IDENTITY);
        assert!(heading_letter_pose(progress, 7).opacity > 0.0);
    }

    #[test]
    fn mobile_scenario_uses_threshold_reveal_instead_of_pinning() {
        assert!(!Breakpoint::classify(375.0).supports_pinning());
    }
}
