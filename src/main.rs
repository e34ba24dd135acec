use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::AddEventListenerOptions;
use yew::prelude::*;

mod config;
mod motion {
    pub mod counter;
    pub mod parallax;
    pub mod visibility;
}
mod sections {
    pub mod about;
    pub mod cta;
    pub mod footer;
    pub mod hero;
    pub mod navbar;
    pub mod properties;
    pub mod services;
}

use sections::{
    about::About, cta::Cta, footer::Footer, hero::Hero, navbar::Navbar, properties::Properties,
    services::Services,
};

/// Page-wide vertical scroll offset in pixels.
///
/// [`App`] is the only writer; the navbar and the hero parallax read it
/// through context.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct ScrollPosition(pub f64);

#[function_component(App)]
fn app() -> Html {
    let scroll_y = use_state(|| 0.0_f64);

    // Single passive scroll listener for the whole page.
    {
        let scroll_y = scroll_y.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let on_scroll = Closure::<dyn Fn()>::new({
                        let scroll_y = scroll_y.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(y) = win.scroll_y() {
                                    scroll_y.set(y);
                                }
                            }
                        }
                    });
                    let options = AddEventListenerOptions::new();
                    options.set_passive(true);
                    let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
                        "scroll",
                        on_scroll.as_ref().unchecked_ref(),
                        &options,
                    );
                    // Pick up a restored scroll position.
                    if let Ok(y) = window.scroll_y() {
                        scroll_y.set(y);
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                on_scroll.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                destructor
            },
            (),
        );
    }

    html! {
        <ContextProvider<ScrollPosition> context={ScrollPosition(*scroll_y)}>
            <div class="page">
                <style>
                    {r"
                    :root {
                        --navy: #0d151d;
                        --navy-light: #1c2a38;
                        --cream: #f6e7c5;
                        --cream-light: #fdf8ea;
                        --cream-dark: #e3c98f;
                    }
                    * {
                        margin: 0;
                        padding: 0;
                        box-sizing: border-box;
                    }
                    body {
                        font-family: 'Helvetica Neue', Arial, sans-serif;
                        background: var(--cream-light);
                        color: var(--navy);
                        overflow-x: hidden;
                        line-height: 1.6;
                    }
                    h1, h2, h3, .display {
                        font-family: Georgia, 'Times New Roman', serif;
                        line-height: 1.2;
                    }
                    button {
                        font: inherit;
                        border: none;
                        cursor: pointer;
                        background: none;
                    }
                    a {
                        color: inherit;
                        text-decoration: none;
                    }
                    img {
                        display: block;
                        max-width: 100%;
                    }
                    section {
                        position: relative;
                        padding: 6rem 1.5rem;
                        overflow: hidden;
                    }
                    .inner {
                        max-width: 72rem;
                        margin: 0 auto;
                    }
                    .pill {
                        display: inline-block;
                        padding: 0.5rem 1rem;
                        background: var(--cream);
                        border-radius: 999px;
                        font-size: 0.85rem;
                        font-weight: 500;
                        color: rgba(13, 21, 29, 0.8);
                        letter-spacing: 0.05em;
                    }
                    .btn-primary {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 1rem 2rem;
                        background: var(--navy);
                        color: #fff;
                        border-radius: 999px;
                        font-size: 0.9rem;
                        font-weight: 500;
                        transition: background 0.3s, box-shadow 0.3s, transform 0.3s;
                    }
                    .btn-primary:hover {
                        background: var(--navy-light);
                        box-shadow: 0 12px 30px rgba(13, 21, 29, 0.18);
                    }
                    "}
                </style>
                <Navbar />
                <main>
                    <Hero />
                    <About />
                    <Properties />
                    <Services />
                    <Cta />
                </main>
                <Footer />
            </div>
        </ContextProvider<ScrollPosition>>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting Luxe Estates");
    yew::Renderer::<App>::new().render();
}
