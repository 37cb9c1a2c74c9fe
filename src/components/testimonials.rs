use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::anim::ease::Ease;
use crate::anim::pose::Pose;
use crate::anim::scroll::RevealObserver;
use crate::anim::tween::{animate_pose, stagger_poses, Tween, TweenConfig};
use crate::config;
use crate::data::TESTIMONIALS;

const HEADING_HIDDEN: Pose = Pose::hidden_below(48.0);
const SUBHEADING_HIDDEN: Pose = Pose::hidden_below(32.0);
const CARD_HIDDEN: Pose = Pose::hidden_below(80.0);

const SUBHEADING_DELAY_MS: f64 = 200.0;
const CARDS_DELAY_MS: f64 = 400.0;
const CARD_STAGGER_MS: f64 = 100.0;

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub toggle_contact_form: Callback<()>,
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let active_card = use_state(|| None::<usize>);

    let container_ref = use_node_ref();
    let heading_ref = use_node_ref();
    let subheading_ref = use_node_ref();
    let card_refs = use_mut_ref(|| {
        (0..TESTIMONIALS.len())
            .map(|_| NodeRef::default())
            .collect::<Vec<_>>()
    });

    let observer = use_mut_ref(|| None::<RevealObserver>);
    let tweens: Rc<RefCell<Vec<Tween>>> = use_mut_ref(Vec::new);

    {
        let container_ref = container_ref.clone();
        let heading_ref = heading_ref.clone();
        let subheading_ref = subheading_ref.clone();
        let card_refs = card_refs.clone();
        let observer = observer.clone();
        let tweens = tweens.clone();

        use_effect_with_deps(
            move |_| {
                let revealed = Rc::new(RefCell::new(false));
                if let Some(container) = container_ref.cast::<Element>() {
                    *observer.borrow_mut() = RevealObserver::observe(
                        &container,
                        0.1,
                        "-10% 0px",
                        move || {
                            if *revealed.borrow() {
                                return;
                            }
                            *revealed.borrow_mut() = true;

                            let mut held = tweens.borrow_mut();
                            if let Some(heading) = heading_ref.cast::<HtmlElement>() {
                                held.extend(animate_pose(
                                    &heading,
                                    HEADING_HIDDEN,
                                    Pose::IDENTITY,
                                    TweenConfig::new(800.0).ease(Ease::Power1Out),
                                    None,
                                ));
                            }
                            if let Some(subheading) = subheading_ref.cast::<HtmlElement>() {
                                held.extend(animate_pose(
                                    &subheading,
                                    SUBHEADING_HIDDEN,
                                    Pose::IDENTITY,
                                    TweenConfig::new(600.0)
                                        .delay(SUBHEADING_DELAY_MS)
                                        .ease(Ease::Power1Out),
                                    None,
                                ));
                            }
                            let cards: Vec<HtmlElement> = card_refs
                                .borrow()
                                .iter()
                                .filter_map(|r| r.cast::<HtmlElement>())
                                .collect();
                            held.extend(stagger_poses(
                                &cards,
                                CARD_HIDDEN,
                                Pose::IDENTITY,
                                TweenConfig::new(800.0)
                                    .delay(CARDS_DELAY_MS)
                                    .ease(Ease::Power1Out),
                                CARD_STAGGER_MS,
                            ));
                        },
                    );
                }
                move || {
                    observer.borrow_mut().take();
                }
            },
            (),
        );
    }

    let on_join = {
        let toggle = props.toggle_contact_form.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    html! {
        <div id="testimonials" ref={container_ref} class="tst-section">
            <style>
                {r#"
                    .tst-section {
                        background: #e5e7eb;
                        display: flex;
                        flex-direction: column;
                        min-height: 100vh;
                        margin: 5rem 0;
                        align-items: center;
                        justify-content: center;
                        padding: 2rem;
                    }
                    .tst-heading {
                        text-align: center;
                        padding: 2rem 1rem 0.5rem;
                        overflow: hidden;
                    }
                    .tst-heading h3 {
                        font-size: clamp(1.875rem, 5vw, 4.5rem);
                        color: #000;
                        font-weight: 700;
                        letter-spacing: 0.025em;
                        line-height: 1.1;
                        padding-bottom: 0.5rem;
                    }
                    .tst-heading span {
                        display: block;
                        color: #1f2937;
                        font-family: cursive;
                        font-size: clamp(1.125rem, 2.5vw, 1.875rem);
                        margin-top: 1rem;
                    }
                    .tst-grid {
                        width: 100%;
                        max-width: 80rem;
                        padding: 4rem 1.5rem;
                        display: grid;
                        grid-template-columns: repeat(3, minmax(0, 1fr));
                        gap: 1.5rem;
                    }
                    @media (max-width: 1024px) {
                        .tst-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
                    }
                    @media (max-width: 640px) {
                        .tst-grid { grid-template-columns: 1fr; }
                    }
                    .tst-card {
                        border-radius: 0.75rem;
                        border: 1px solid rgba(55, 65, 81, 0.3);
                        overflow: hidden;
                        background: linear-gradient(to bottom right, #4c1d95, #5b21b6);
                        cursor: pointer;
                        height: 24rem;
                        transition: height 0.8s ease-in-out, transform 0.3s ease-in-out, box-shadow 0.3s;
                        will-change: transform, opacity;
                    }
                    .tst-card:hover {
                        transform: scale(1.05);
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.4);
                    }
                    .tst-card-active { height: 32rem; z-index: 10; }
                    @media (max-width: 640px) {
                        .tst-card-active { height: 28rem; }
                    }
                    .tst-card-body {
                        height: 100%;
                        padding: 1.5rem 2rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                    }
                    .tst-avatar {
                        width: 5rem;
                        height: 5rem;
                        border-radius: 9999px;
                        overflow: hidden;
                        margin-bottom: 1rem;
                        border: 2px solid rgba(229, 231, 235, 0.3);
                        flex-shrink: 0;
                    }
                    .tst-avatar img { width: 100%; height: 100%; object-fit: cover; }
                    .tst-identity { text-align: center; margin-bottom: 1rem; flex-shrink: 0; }
                    .tst-identity h4 {
                        color: #e5e7eb;
                        font-size: 1.125rem;
                        font-weight: 600;
                        line-height: 1.2;
                    }
                    .tst-identity p { color: #d1d5db; font-size: 0.875rem; margin-top: 0.25rem; }
                    .tst-quote {
                        text-align: center;
                        flex: 1;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        animation: fade-up 0.3s ease-out;
                    }
                    .tst-stars {
                        display: flex;
                        gap: 0.25rem;
                        justify-content: center;
                        margin-bottom: 1rem;
                        color: #facc15;
                        font-size: 1.25rem;
                    }
                    .tst-quote p {
                        color: rgba(243, 244, 246, 0.9);
                        font-size: 0.9rem;
                        line-height: 1.5;
                    }
                    .tst-join {
                        margin-top: 1rem;
                        background: #fff;
                        padding: 0.75rem 1.5rem;
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        cursor: pointer;
                        border: none;
                        font-weight: 600;
                        color: #78350f;
                        transition: all 0.3s ease-in;
                    }
                    .tst-join:hover {
                        background: #5b21b6;
                        color: #fff;
                        transform: scale(0.95);
                    }
                "#}
            </style>

            <div class="tst-heading">
                <h3 ref={heading_ref} style={HEADING_HIDDEN.style_css()}>
                    {"WHAT OUR"}<br />{"CLIENTS SAY"}
                </h3>
                <span ref={subheading_ref} style={SUBHEADING_HIDDEN.style_css()}>
                    {"Real stories from satisfied clients."}
                </span>
            </div>

            <div class="tst-grid">
                { for TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| {
                    let is_active = *active_card == Some(index);
                    let card_ref = card_refs.borrow()[index].clone();

                    let onmouseenter = {
                        let active_card = active_card.clone();
                        Callback::from(move |_: MouseEvent| active_card.set(Some(index)))
                    };
                    let onmouseleave = {
                        let active_card = active_card.clone();
                        Callback::from(move |_: MouseEvent| active_card.set(None))
                    };
                    let ontouchstart = {
                        let active_card = active_card.clone();
                        Callback::from(move |_: TouchEvent| {
                            // Tap toggles on touch layouts.
                            if *active_card == Some(index) {
                                active_card.set(None);
                            } else {
                                active_card.set(Some(index));
                            }
                        })
                    };

                    html! {
                        <div
                            key={testimonial.id}
                            ref={card_ref}
                            class={classes!("tst-card", is_active.then_some("tst-card-active"))}
                            style={CARD_HIDDEN.style_css()}
                            onmouseenter={onmouseenter}
                            onmouseleave={onmouseleave}
                            ontouchstart={ontouchstart}
                        >
                            <div class="tst-card-body">
                                <div class="tst-avatar">
                                    <img src={config::asset(testimonial.avatar)} alt={testimonial.name} loading="eager" />
                                </div>
                                <div class="tst-identity">
                                    <h4>{testimonial.name}</h4>
                                    <p>{testimonial.role}</p>
                                </div>
                                {
                                    if is_active {
                                        html! {
                                            <div class="tst-quote">
                                                <div class="tst-stars">
                                                    { for (0..testimonial.rating).map(|star| html! {
                                                        <span key={star.to_string()}>{"★"}</span>
                                                    }) }
                                                </div>
                                                <p>{format!("\u{201c}{}\u{201d}", testimonial.content)}</p>
                                            </div>
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>
                        </div>
                    }
                }) }
            </div>

            <button class="tst-join" onclick={on_join}>
                <span>{"JOIN THEM"}</span>
                <span>{"→"}</span>
            </button>
        </div>
    }
}
