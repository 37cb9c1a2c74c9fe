use std::cell::RefCell;
use std::rc::Rc;

use log::info;
use serde::Serialize;
use web_sys::{HtmlElement, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::anim::ease::Ease;
use crate::anim::pose::Pose;
use crate::anim::tween::{animate_pose, Tween, TweenConfig};

const PANEL_HIDDEN: Pose = Pose::hidden_below(40.0);
const FADED: Pose = Pose {
    opacity: 0.0,
    ..Pose::IDENTITY
};

const OVERLAY_IN_MS: f64 = 250.0;
const OVERLAY_OUT_MS: f64 = 200.0;
const PANEL_IN_MS: f64 = 350.0;
const PANEL_OUT_MS: f64 = 300.0;

#[derive(Serialize)]
struct ContactSubmission {
    name: String,
    email: String,
    phone: String,
    business: String,
    message: String,
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let overlay_ref = use_node_ref();
    let panel_ref = use_node_ref();

    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let business_ref = use_node_ref();
    let message_ref = use_node_ref();

    let tweens: Rc<RefCell<Vec<Tween>>> = use_mut_ref(Vec::new);

    {
        let overlay_ref = overlay_ref.clone();
        let panel_ref = panel_ref.clone();
        let name_ref = name_ref.clone();
        let tweens = tweens.clone();

        use_effect_with_deps(
            move |is_open: &bool| {
                let overlay = overlay_ref.cast::<HtmlElement>();
                let panel = panel_ref.cast::<HtmlElement>();

                // Replacing the held tween set kills anything still in
                // flight from a rapid re-toggle.
                let mut held = tweens.borrow_mut();
                held.clear();

                if *is_open {
                    for el in overlay.iter().chain(panel.iter()) {
                        let _ = el.style().set_property("pointer-events", "auto");
                        let _ = el.style().set_property("display", "flex");
                    }
                    if let Some(overlay) = overlay.as_ref() {
                        held.extend(animate_pose(
                            overlay,
                            FADED,
                            Pose::IDENTITY,
                            TweenConfig::new(OVERLAY_IN_MS).ease(Ease::Power1Out),
                            None,
                        ));
                    }
                    if let Some(panel) = panel.as_ref() {
                        held.extend(animate_pose(
                            panel,
                            PANEL_HIDDEN,
                            Pose::IDENTITY,
                            TweenConfig::new(PANEL_IN_MS).ease(Ease::Power2Out),
                            None,
                        ));
                    }
                    if let Some(first_field) = name_ref.cast::<HtmlInputElement>() {
                        let _ = first_field.focus();
                    }
                } else {
                    // Interactivity is only released once the exit tween has
                    // finished, so the fading panel cannot eat clicks.
                    if let Some(overlay) = overlay.as_ref() {
                        let release = {
                            let overlay = overlay.clone();
                            Callback::from(move |_| {
                                let _ = overlay.style().set_property("pointer-events", "none");
                            })
                        };
                        held.extend(animate_pose(
                            overlay,
                            Pose::IDENTITY,
                            FADED,
                            TweenConfig::new(OVERLAY_OUT_MS).ease(Ease::Power1In),
                            Some(release),
                        ));
                    }
                    if let Some(panel) = panel.as_ref() {
                        let release = {
                            let panel = panel.clone();
                            Callback::from(move |_| {
                                let _ = panel.style().set_property("pointer-events", "none");
                            })
                        };
                        held.extend(animate_pose(
                            panel,
                            Pose::IDENTITY,
                            PANEL_HIDDEN,
                            TweenConfig::new(PANEL_OUT_MS).ease(Ease::Power2In),
                            Some(release),
                        ));
                    }
                }
                || ()
            },
            props.is_open,
        );
    }

    let onsubmit = {
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let phone_ref = phone_ref.clone();
        let business_ref = business_ref.clone();
        let message_ref = message_ref.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let field = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };
            let submission = ContactSubmission {
                name: field(&name_ref),
                email: field(&email_ref),
                phone: field(&phone_ref),
                business: field(&business_ref),
                message: message_ref
                    .cast::<HtmlTextAreaElement>()
                    .map(|area| area.value())
                    .unwrap_or_default(),
            };
            // No backend wired up; record the payload and close.
            match serde_json::to_string(&submission) {
                Ok(payload) => info!("contact form submitted: {payload}"),
                Err(err) => info!("contact form submitted (unserializable: {err})"),
            }
            on_close.emit(());
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <>
            <style>
                {r#"
                    .cf-overlay {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.5);
                        z-index: 40;
                        opacity: 0;
                        pointer-events: none;
                    }
                    .cf-wrap {
                        position: fixed;
                        inset: 0;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow-y: auto;
                        padding: 0 1.5rem;
                        opacity: 0;
                        pointer-events: none;
                    }
                    .cf-card {
                        background: #fff;
                        border-radius: 0.75rem;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                        width: 100%;
                        max-width: 28rem;
                        overflow: hidden;
                    }
                    .cf-header {
                        background: linear-gradient(to right, #8b5cf6, #6d28d9);
                        padding: 1.5rem;
                        color: #fff;
                    }
                    .cf-header h2 { font-size: 1.5rem; font-weight: 700; }
                    .cf-header p { opacity: 0.9; font-size: 0.95rem; }
                    .cf-body { padding: 1.5rem; display: flex; flex-direction: column; gap: 1rem; }
                    .cf-field label {
                        display: block;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #374151;
                        margin-bottom: 0.25rem;
                    }
                    .cf-field .cf-required { color: #ef4444; }
                    .cf-field input, .cf-field textarea {
                        width: 100%;
                        padding: 0.5rem 0.75rem;
                        border: 1px solid #d1d5db;
                        border-radius: 0.375rem;
                        color: #111827;
                        font-size: 0.95rem;
                        font-family: inherit;
                    }
                    .cf-field input:focus, .cf-field textarea:focus {
                        outline: none;
                        border-color: transparent;
                        box-shadow: 0 0 0 2px #8b5cf6;
                    }
                    .cf-actions {
                        display: flex;
                        justify-content: flex-end;
                        gap: 0.75rem;
                        padding-top: 0.5rem;
                    }
                    .cf-cancel {
                        padding: 0.5rem 1rem;
                        border: 1px solid #d1d5db;
                        border-radius: 0.375rem;
                        background: transparent;
                        color: #374151;
                        cursor: pointer;
                        transition: background 0.2s;
                    }
                    .cf-cancel:hover { background: #f9fafb; }
                    .cf-submit {
                        padding: 0.5rem 1.5rem;
                        background: linear-gradient(to right, #7c3aed, #5b21b6);
                        color: #fff;
                        border: none;
                        border-radius: 0.375rem;
                        box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
                        cursor: pointer;
                        transition: filter 0.2s;
                    }
                    .cf-submit:hover { filter: brightness(0.9); }
                "#}
            </style>

            <div ref={overlay_ref} class="cf-overlay"></div>

            <div ref={panel_ref} class="cf-wrap">
                <div class="cf-card">
                    <div class="cf-header">
                        <h2>{"Get in Touch"}</h2>
                        <p>{"We'd love to hear from you!"}</p>
                    </div>
                    <form onsubmit={onsubmit} class="cf-body">
                        <div class="cf-field">
                            <label for="name">{"Full Name "}<span class="cf-required">{"*"}</span></label>
                            <input ref={name_ref} type="text" id="name" name="name" required={true} placeholder="Enter your name" />
                        </div>
                        <div class="cf-field">
                            <label for="email">{"Email "}<span class="cf-required">{"*"}</span></label>
                            <input ref={email_ref} type="email" id="email" name="email" required={true} placeholder="abc@example.com" />
                        </div>
                        <div class="cf-field">
                            <label for="contact">{"Phone Number "}<span class="cf-required">{"*"}</span></label>
                            <input ref={phone_ref} type="tel" id="contact" name="contact" required={true} placeholder="+91 0000000000" />
                        </div>
                        <div class="cf-field">
                            <label for="business">{"Business/Company Name "}<span class="cf-required">{"*"}</span></label>
                            <input ref={business_ref} type="text" id="business" name="business" required={true} placeholder="Acme Inc." />
                        </div>
                        <div class="cf-field">
                            <label for="message">{"Message (Optional)"}</label>
                            <textarea ref={message_ref} id="message" name="message" rows="4" placeholder="Tell us about your project or inquiry..."></textarea>
                        </div>
                        <div class="cf-actions">
                            <button type="button" class="cf-cancel" onclick={on_cancel}>{"Cancel"}</button>
                            <button type="submit" class="cf-submit">{"Submit"}</button>
                        </div>
                    </form>
                </div>
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_settles_fully_transparent() {
        // Open then close: the close tween ends exactly at the hidden pose,
        // so a second cycle starts from the same state (idempotent).
        let opened = PANEL_HIDDEN.lerp(&Pose::IDENTITY, 1.0);
        let closed = opened.lerp(&PANEL_HIDDEN, 1.0);
        assert_eq!(closed, PANEL_HIDDEN);
        assert_eq!(closed.opacity, 0.0);

        let reopened = closed.lerp(&Pose::IDENTITY, 1.0);
        let reclosed = reopened.lerp(&PANEL_HIDDEN, 1.0);
        assert_eq!(reclosed, PANEL_HIDDEN);
    }

    #[test]
    fn exit_is_faster_than_entrance() {
        assert!(OVERLAY_OUT_MS < OVERLAY_IN_MS);
        assert!(PANEL_OUT_MS < PANEL_IN_MS);
    }

    #[test]
    fn submission_serializes_every_field() {
        let submission = ContactSubmission {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            phone: "+91 1234567890".into(),
            business: "Acme Inc.".into(),
            message: String::new(),
        };
        let payload = serde_json::to_string(&submission).unwrap();
        assert!(payload.contains("\"name\":\"Ada\""));
        assert!(payload.contains("\"business\":\"Acme Inc.\""));
        assert!(payload.contains("\"message\":\"\""));
    }
}
