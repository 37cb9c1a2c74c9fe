use log::{info, Level};
use stylist::{css, yew::Global};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod data;
mod anim {
    pub mod ease;
    pub mod marquee;
    pub mod pose;
    pub mod scroll;
    pub mod tween;
    pub mod viewport;
}
mod components {
    pub mod clients;
    pub mod contact_form;
    pub mod footer;
    pub mod hero;
    pub mod loader;
    pub mod services;
    pub mod testimonials;
    pub mod work;
}

use components::{
    clients::Clients, contact_form::ContactForm, footer::Footer, hero::Hero, loader::Loader,
    services::Services, testimonials::Testimonials, work::Work,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Keyframes shared by the marquee rows and the hero/loader accents. These
/// stay in a plain style tag so inline `animation:` declarations can refer
/// to them by name.
const KEYFRAMES: &str = r#"
    @keyframes marquee-left {
        from { transform: translateX(0%); }
        to { transform: translateX(-100%); }
    }
    @keyframes marquee-right {
        from { transform: translateX(-100%); }
        to { transform: translateX(0%); }
    }
    @keyframes marquee-left-half {
        from { transform: translateX(0%); }
        to { transform: translateX(-50%); }
    }
    @keyframes marquee-right-half {
        from { transform: translateX(-50%); }
        to { transform: translateX(0%); }
    }
    @keyframes pulse {
        0%, 100% { transform: scale(1); opacity: 0.2; }
        50% { transform: scale(1.1); opacity: 0.3; }
    }
    @keyframes subtle-zoom {
        0% { transform: scale(1.02); }
        100% { transform: scale(1.05); }
    }
    @keyframes fade-up {
        from { opacity: 0; transform: translateY(10px); }
        to { opacity: 1; transform: translateY(0); }
    }
"#;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub toggle_contact_form: Callback<()>,
    pub contact_form_open: bool,
    pub on_close_contact: Callback<()>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="page-root">
            <main>
                <Hero toggle_contact_form={props.toggle_contact_form.clone()} />
                <Services />
                <Work toggle_contact_form={props.toggle_contact_form.clone()} />
                <Clients />
                <Testimonials toggle_contact_form={props.toggle_contact_form.clone()} />
                <ContactForm
                    is_open={props.contact_form_open}
                    on_close={props.on_close_contact.clone()}
                />
            </main>
            <Footer />
        </div>
    }
}

#[function_component]
fn App() -> Html {
    let is_loading = use_state(|| true);
    let contact_form_open = use_state(|| false);

    let on_loading_complete = {
        let is_loading = is_loading.clone();
        Callback::from(move |_| {
            info!("loader finished, mounting page body");
            is_loading.set(false);
        })
    };
    let toggle_contact_form = {
        let contact_form_open = contact_form_open.clone();
        Callback::from(move |_| contact_form_open.set(!*contact_form_open))
    };
    let on_close_contact = {
        let contact_form_open = contact_form_open.clone();
        Callback::from(move |_| contact_form_open.set(false))
    };

    let render = {
        let toggle_contact_form = toggle_contact_form.clone();
        let on_close_contact = on_close_contact.clone();
        let contact_form_open = *contact_form_open;
        Callback::from(move |route: Route| {
            match route {
                Route::Home => info!("Rendering Home page"),
                Route::NotFound => info!("Unknown route, rendering Home page"),
            }
            html! {
                <Home
                    toggle_contact_form={toggle_contact_form.clone()}
                    contact_form_open={contact_form_open}
                    on_close_contact={on_close_contact.clone()}
                />
            }
        })
    };

    html! {
        <>
            <Global
                css={css!(r#"
                    * {
                        margin: 0;
                        padding: 0;
                        box-sizing: border-box;
                    }
                    body {
                        min-height: 100vh;
                        background: #fff;
                        color: #111;
                        overflow-x: hidden;
                        font-family: Quicksand, "Segoe UI", sans-serif;
                    }
                    img, video {
                        display: block;
                        max-width: 100%;
                    }
                    button {
                        font-family: inherit;
                    }
                "#)}
            />
            <style>{KEYFRAMES}</style>
            {
                if *is_loading {
                    html! { <Loader on_loading_complete={on_loading_complete} /> }
                } else {
                    html! {
                        <BrowserRouter>
                            <Switch<Route> render={render} />
                        </BrowserRouter>
                    }
                }
            }
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
