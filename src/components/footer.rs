use std::cell::RefCell;
use std::rc::Rc;

use web_sys::HtmlElement;
use yew::prelude::*;

use crate::anim::ease::Ease;
use crate::anim::pose::Pose;
use crate::anim::tween::{children_of, stagger_poses, Tween, TweenConfig};
use crate::anim::viewport::current_breakpoint;
use crate::components::hero::title_letters;

const BACKGROUND_TEXT: &str = "Digital Supremacy";
const LETTER_STAGGER_MS: f64 = 30.0;

/// Resting state of the watermark letters: barely-there white.
const LETTER_RESTING: Pose = Pose {
    opacity: 0.05,
    ..Pose::IDENTITY
};
const LETTER_HIDDEN: Pose = Pose::hidden_below(20.0);

#[function_component(Footer)]
pub fn footer() -> Html {
    let letters_ref = use_node_ref();
    let tweens: Rc<RefCell<Vec<Tween>>> = use_mut_ref(Vec::new);

    {
        let letters_ref = letters_ref.clone();
        let tweens = tweens.clone();
        use_effect_with_deps(
            move |_| {
                // The watermark stagger only runs on desktop; smaller
                // layouts render a static fallback instead.
                if current_breakpoint().supports_pinning() {
                    if let Some(line) = letters_ref.cast::<HtmlElement>() {
                        *tweens.borrow_mut() = stagger_poses(
                            &children_of(&line),
                            LETTER_HIDDEN,
                            LETTER_RESTING,
                            TweenConfig::new(600.0).ease(Ease::Power1Out),
                            LETTER_STAGGER_MS,
                        );
                    }
                }
                move || tweens.borrow_mut().clear()
            },
            (),
        );
    }

    let letter_style = format!("display: inline-block; {}", LETTER_HIDDEN.style_css());

    html! {
        <footer class="footer-section">
            <style>
                {r#"
                    .footer-section {
                        position: relative;
                        background: #2A1B3D;
                        width: 100%;
                        min-height: 100vh;
                        color: #fff;
                        padding: 3rem 1.5rem;
                        overflow: hidden;
                        display: flex;
                        flex-direction: column;
                        justify-content: space-between;
                    }
                    @media (min-width: 1025px) {
                        .footer-section { padding: 5rem 3rem; }
                    }
                    .footer-grid {
                        max-width: 72rem;
                        margin: 0 auto;
                        width: 100%;
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 4rem;
                        flex: 1;
                    }
                    @media (min-width: 1025px) {
                        .footer-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    .footer-brand h3 {
                        font-size: 1.5rem;
                        font-weight: 600;
                        margin-bottom: 1rem;
                    }
                    .footer-brand p {
                        color: #d1d5db;
                        line-height: 1.6;
                        margin-bottom: 1rem;
                    }
                    .footer-brand p + p { font-size: 0.875rem; opacity: 0.9; }
                    .footer-contact {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                        align-content: start;
                    }
                    @media (min-width: 641px) {
                        .footer-contact { grid-template-columns: repeat(2, 1fr); }
                    }
                    .footer-contact h4 {
                        font-weight: 500;
                        font-size: 1.125rem;
                        margin-bottom: 0.75rem;
                    }
                    .footer-contact address,
                    .footer-contact p {
                        color: #d1d5db;
                        font-size: 0.875rem;
                        font-style: normal;
                        line-height: 1.6;
                    }
                    .footer-contact a { color: inherit; text-decoration: none; transition: color 0.3s; }
                    .footer-contact a:hover { color: #fff; }
                    .footer-social { grid-column: 1 / -1; }
                    .footer-social-links { display: flex; gap: 1rem; }
                    .footer-social-links a {
                        width: 2.5rem;
                        height: 2.5rem;
                        border: 1px solid #9ca3af;
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 0.75rem;
                        transition: all 0.3s;
                    }
                    .footer-social-links a:hover {
                        border-color: #fff;
                        background: rgba(255, 255, 255, 0.1);
                    }
                    .footer-watermark {
                        position: absolute;
                        bottom: 2rem;
                        left: 0;
                        width: 100%;
                        z-index: 0;
                        display: none;
                    }
                    @media (min-width: 1025px) {
                        .footer-watermark { display: block; }
                    }
                    .footer-watermark-clip { overflow: hidden; width: 100%; }
                    .footer-watermark h1 {
                        white-space: nowrap;
                        text-align: center;
                        font-weight: 300;
                        font-size: 6vw;
                        line-height: 1;
                        color: #fff;
                        pointer-events: none;
                        user-select: none;
                    }
                    .footer-watermark-static {
                        text-align: center;
                        color: rgba(255, 255, 255, 0.05);
                        font-size: 12vw;
                        font-weight: 300;
                        user-select: none;
                        line-height: 1;
                        margin-top: 3rem;
                    }
                    @media (min-width: 1025px) {
                        .footer-watermark-static { display: none; }
                    }
                    .footer-rule {
                        position: absolute;
                        bottom: 0;
                        left: 0;
                        width: 100%;
                        height: 1px;
                        background: linear-gradient(to right, transparent, rgba(255, 255, 255, 0.2), transparent);
                    }
                "#}
            </style>

            <div class="footer-grid">
                <div class="footer-brand">
                    <h3>{"Digital Supremacy"}</h3>
                    <p>{"We empower brands through bold digital strategies, innovative storytelling, and creative excellence."}</p>
                    <p>{"We believe in authenticity, growth, and making meaningful impact—online and beyond. From branding and content to high-performance campaigns, we help businesses rise above the noise."}</p>
                </div>

                <div class="footer-contact">
                    <div>
                        <h4>{"Address"}</h4>
                        <address>
                            {"60, Pandit Colony,"}<br />
                            {"above Ananda Laundry,"}<br />
                            {"Nashik-422002"}
                        </address>
                    </div>
                    <div>
                        <h4>{"Contact"}</h4>
                        <p><a href="mailto:info@digitalsupermacy.in">{"info@digitalsupermacy.in"}</a></p>
                        <p><a href="tel:+919689772863">{"+91 96897 72863"}</a></p>
                    </div>
                    <div class="footer-social">
                        <h4>{"Follow Us"}</h4>
                        <div class="footer-social-links">
                            <a href="https://www.instagram.com/digitalsupremacy.in" aria-label="Instagram">{"IG"}</a>
                            <a href="https://www.linkedin.com/company/digital-supremacy-in/" aria-label="LinkedIn">{"IN"}</a>
                        </div>
                    </div>
                </div>
            </div>

            <div class="footer-watermark">
                <div class="footer-watermark-clip">
                    <h1 ref={letters_ref}>
                        { for title_letters(BACKGROUND_TEXT).into_iter().map(|ch| html! {
                            <span style={letter_style.clone()}>{ch.to_string()}</span>
                        }) }
                    </h1>
                </div>
            </div>
            <div class="footer-watermark-static">{BACKGROUND_TEXT}</div>

            <div class="footer-rule"></div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watermark_letters_settle_at_five_percent_opacity() {
        let settled = LETTER_HIDDEN.lerp(&LETTER_RESTING, 1.0);
        assert_eq!(settled, LETTER_RESTING);
        assert!((settled.opacity - 0.05).abs() < 1e-9);
        assert_eq!(settled.y, 0.0);
    }

    #[test]
    fn watermark_glyphs_reconstruct_the_brand_name() {
        let rebuilt: String = title_letters(BACKGROUND_TEXT)
            .into_iter()
            .map(|ch| if ch == '\u{a0}' { ' ' } else { ch })
            .collect();
        assert_eq!(rebuilt, BACKGROUND_TEXT);
    }
}
