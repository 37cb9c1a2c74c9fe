use yew::prelude::*;

use crate::anim::marquee::MarqueeTiming;
use crate::config;
use crate::data::CLIENTS;

/// Logo marquee. Purely decorative: the whole section ignores pointer and
/// selection so the loop can never trap focus.
#[function_component(Clients)]
pub fn clients() -> Html {
    let render_row = |row: usize| {
        let timing = MarqueeTiming::clients_row(row);
        // Content doubled so the -50% wrap point lines up seamlessly.
        let logos = CLIENTS.iter().chain(CLIENTS.iter()).enumerate().map(|(i, client)| {
            html! {
                <div key={format!("{}-{i}", client.name)} class="clients-logo">
                    <img
                        src={config::asset(client.logo)}
                        alt={client.name}
                        draggable="false"
                    />
                </div>
            }
        });
        html! {
            <div class="clients-track-clip">
                <div class="clients-track" style={timing.animation_css()}>
                    { for logos }
                </div>
            </div>
        }
    };

    html! {
        <section class="clients-section">
            <style>
                {r#"
                    .clients-section {
                        padding: 5rem 0;
                        background: #1c1633;
                        overflow: hidden;
                        user-select: none;
                        pointer-events: none;
                    }
                    .clients-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 2rem;
                    }
                    .clients-section h2 {
                        font-size: clamp(1.5rem, 4vw, 3rem);
                        font-weight: 700;
                        text-align: center;
                        color: #fff;
                        margin-bottom: 4rem;
                    }
                    .clients-track-clip {
                        display: flex;
                        overflow: hidden;
                        margin-bottom: 2rem;
                    }
                    .clients-track {
                        display: flex;
                        white-space: nowrap;
                        width: max-content;
                        gap: 1.5rem;
                    }
                    .clients-logo {
                        position: relative;
                        aspect-ratio: 1 / 1;
                        background: #241b40;
                        border-radius: 0.75rem;
                        padding: 0.75rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        min-width: clamp(90px, 10vw, 160px);
                    }
                    .clients-logo img {
                        width: 60%;
                        height: 60%;
                        max-width: 72px;
                        max-height: 72px;
                        object-fit: contain;
                        object-position: center;
                    }
                "#}
            </style>
            <div class="clients-inner">
                <h2>{"Trusted By Industry Leaders"}</h2>
                { render_row(0) }
                { render_row(1) }
            </div>
        </section>
    }
}
