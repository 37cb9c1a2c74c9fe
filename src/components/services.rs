use yew::prelude::*;

use crate::anim::scroll::ResizeBinding;
use crate::anim::viewport::{current_breakpoint, Breakpoint};
use crate::config;
use crate::data::{GalleryLayout, Preview, ShowcaseService, SHOWCASE_SERVICES};

#[function_component(Services)]
pub fn services() -> Html {
    let breakpoint = use_state(current_breakpoint);
    let active = use_state(|| 0_usize);
    let hovered = use_state(|| false);
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

    let touch_layout = breakpoint.is_touch_layout();
    let current = &SHOWCASE_SERVICES[(*active).min(SHOWCASE_SERVICES.len() - 1)];

    let items = SHOWCASE_SERVICES.iter().enumerate().map(|(index, service)| {
        let is_active = *active == index;
        let class = classes!(
            "svc-item",
            (is_active && (touch_layout || *hovered)).then_some("svc-item-active")
        );

        let onmouseenter = (!touch_layout).then(|| {
            let active = active.clone();
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| {
                active.set(index);
                hovered.set(true);
            })
        });
        let onmouseleave = (!touch_layout).then(|| {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(false))
        });
        let onclick = touch_layout.then(|| {
            let active = active.clone();
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| {
                active.set(index);
                hovered.set(true);
            })
        });

        html! {
            <div
                key={service.title}
                class={class}
                onmouseenter={onmouseenter}
                onmouseleave={onmouseleave}
                onclick={onclick}
            >
                <div class="svc-item-bar"></div>
                <div class="svc-item-body">
                    <h4>{service.title}</h4>
                    <p>{service.description}</p>
                </div>
            </div>
        }
    });

    html! {
        <section class="svc-section">
            <style>
                {r#"
                    .svc-section {
                        position: relative;
                        min-height: 100vh;
                        background: #171717;
                        color: #fff;
                        overflow: hidden;
                    }
                    .svc-inner {
                        min-height: 100vh;
                        max-width: 85vw;
                        margin: 0 auto;
                        padding: 5rem 2rem;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                    }
                    .svc-heading h3 {
                        font-size: clamp(1.25rem, 3vw, 3rem);
                        font-weight: 500;
                        letter-spacing: -0.02em;
                        color: #f5f5f5;
                    }
                    .svc-heading .svc-accent { color: #7e72e0; }
                    .svc-heading p {
                        margin-top: 0.75rem;
                        color: #a3a3a3;
                        max-width: 42rem;
                        font-size: clamp(0.75rem, 1.2vw, 1rem);
                    }
                    .svc-columns {
                        display: flex;
                        flex-direction: row;
                        gap: 3rem;
                        align-items: stretch;
                        margin-top: 3rem;
                    }
                    .svc-list {
                        width: 50%;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                    }
                    .svc-item {
                        position: relative;
                        padding: 1.25rem 0;
                        cursor: pointer;
                    }
                    .svc-item-bar {
                        position: absolute;
                        left: 0;
                        top: 0;
                        height: 100%;
                        width: 4px;
                        background: #7e72e0;
                        opacity: 0;
                        transition: opacity 0.3s;
                        border-radius: 0 4px 4px 0;
                    }
                    .svc-item-active .svc-item-bar { opacity: 1; }
                    .svc-item-body { padding-left: 2rem; }
                    .svc-item-body h4 {
                        font-size: clamp(1rem, 2vw, 1.875rem);
                        font-weight: 500;
                        color: #f5f5f5;
                        transition: all 0.3s;
                    }
                    .svc-item-active .svc-item-body h4 {
                        color: #7e72e0;
                        font-style: italic;
                        font-weight: 700;
                    }
                    .svc-item-body p {
                        margin-top: 0.5rem;
                        color: #a3a3a3;
                        font-size: 0.875rem;
                        opacity: 0;
                        transition: opacity 0.3s;
                    }
                    .svc-item-active .svc-item-body p { opacity: 1; }
                    .svc-preview {
                        width: 50%;
                        height: 65vh;
                        position: sticky;
                        top: 6rem;
                        border-radius: 0.75rem;
                        overflow: hidden;
                        border: 1px solid rgba(38, 38, 38, 0.5);
                        background: #171717;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
                    }
                    @media (max-width: 1024px) {
                        .svc-columns { flex-direction: column; }
                        .svc-list, .svc-preview { width: 100%; }
                        .svc-preview { height: 55vh; position: static; }
                        .svc-item-body p { opacity: 1; }
                    }
                    .svc-single {
                        position: relative;
                        width: 100%;
                        height: 100%;
                    }
                    .svc-single img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        object-position: center;
                    }
                    .svc-single-scrim {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to bottom, rgba(0,0,0,0.8), rgba(0,0,0,0.3), rgba(0,0,0,0.8));
                        z-index: 10;
                    }
                    .svc-caption {
                        position: absolute;
                        bottom: 0;
                        left: 0;
                        right: 0;
                        padding: 1.5rem;
                        z-index: 20;
                    }
                    .svc-caption h4 { font-size: 1.25rem; font-weight: 500; }
                    .svc-caption p { margin-top: 0.375rem; color: #d4d4d4; font-size: 0.875rem; }
                    .svc-gallery {
                        width: 100%;
                        height: 100%;
                        padding: 1.25rem;
                        overflow-y: auto;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        gap: 1.5rem;
                    }
                    .svc-gallery h5 { font-size: 0.9rem; font-weight: 500; margin-bottom: 0.75rem; }
                    .svc-tile {
                        border-radius: 0.5rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        color: #fff;
                        font-size: 0.8rem;
                        font-weight: 500;
                    }
                    .svc-tile small { opacity: 0.75; margin-top: 0.125rem; }
                    .svc-grid-thumbnail .svc-tile { width: 100%; height: 6rem; }
                    .svc-grid-poster {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1rem;
                    }
                    .svc-grid-poster .svc-tile { aspect-ratio: 3 / 4; }
                    .svc-grid-instagram {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 0.75rem;
                    }
                    .svc-grid-instagram .svc-tile { aspect-ratio: 1 / 1; }
                "#}
            </style>
            <div class="svc-inner">
                <div class="svc-heading">
                    <h3>{"Our "}<span class="svc-accent">{"Services"}</span></h3>
                    <p>{"Comprehensive solutions tailored to elevate your brand's digital presence"}</p>
                </div>
                <div class="svc-columns">
                    <div class="svc-list">
                        { for items }
                    </div>
                    <div class="svc-preview">
                        { render_preview(current) }
                    </div>
                </div>
            </div>
        </section>
    }
}

fn render_preview(service: &ShowcaseService) -> Html {
    match &service.preview {
        Preview::Single { image } => html! {
            <div class="svc-single">
                <div class="svc-single-scrim"></div>
                <div class="svc-caption">
                    <h4>{service.title}</h4>
                    <p>{service.description}</p>
                </div>
                <img src={config::asset(image)} alt={service.title} />
            </div>
        },
        Preview::Gallery { sections } => html! {
            <div class="svc-gallery">
                { for sections.iter().map(|section| {
                    let grid_class = match section.layout {
                        GalleryLayout::Thumbnail => "svc-grid-thumbnail",
                        GalleryLayout::Poster => "svc-grid-poster",
                        GalleryLayout::Instagram => "svc-grid-instagram",
                    };
                    let ratio_label = match section.layout {
                        GalleryLayout::Thumbnail => "16:9 Ratio",
                        GalleryLayout::Poster => "3:4 Ratio",
                        GalleryLayout::Instagram => "1:1",
                    };
                    html! {
                        <div key={section.name}>
                            <h5>{section.name}</h5>
                            <div class={grid_class}>
                                { for section.swatches.iter().enumerate().map(|(i, color)| html! {
                                    <div class="svc-tile" style={format!("background-color: {color};")}>
                                        <span>{format!("{} {}", section.name.split(' ').next().unwrap_or(""), i + 1)}</span>
                                        <small>{ratio_label}</small>
                                    </div>
                                }) }
                            </div>
                        </div>
                    }
                }) }
                <div class="svc-caption">
                    <h4>{service.title}</h4>
                    <p>{service.description}</p>
                </div>
            </div>
        },
    }
}
