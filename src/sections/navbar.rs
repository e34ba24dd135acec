use gloo_timers::callback::Timeout;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::config;
use crate::ScrollPosition;

const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", "#hero"),
    ("About", "#about"),
    ("Properties", "#properties"),
    ("Services", "#services"),
    ("Contact", "#cta"),
];

/// Smooth-scrolls the page to a same-page anchor such as `#about`.
pub fn scroll_to_section(selector: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Ok(Some(element)) = document.query_selector(selector) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let scroll = use_context::<ScrollPosition>().unwrap_or_default();
    let menu_open = use_state(|| false);
    let entered = use_state(|| false);

    // Slide the bar in shortly after mount.
    {
        let entered = entered.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(100, move || entered.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    let is_scrolled = scroll.0 > 50.0;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let nav_to = |href: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(href);
            menu_open.set(false);
        })
    };

    html! {
        <>
        <style>
            {r"
            .top-nav {
                position: fixed;
                top: 0;
                left: 0;
                right: 0;
                z-index: 50;
                padding: 1.25rem 1.5rem;
                transform: translateY(-100%);
                opacity: 0;
                transition: all 0.5s cubic-bezier(0.16, 1, 0.3, 1);
            }
            .top-nav.entered {
                transform: translateY(0);
                opacity: 1;
            }
            .top-nav.scrolled {
                padding: 0.75rem 1.5rem;
                background: rgba(253, 248, 234, 0.8);
                backdrop-filter: blur(12px);
                box-shadow: 0 12px 30px rgba(13, 21, 29, 0.08);
            }
            .nav-content {
                max-width: 72rem;
                margin: 0 auto;
                display: flex;
                align-items: center;
                justify-content: space-between;
            }
            .nav-logo {
                display: flex;
                align-items: center;
                gap: 0.5rem;
                font-family: Georgia, serif;
                font-size: 1.25rem;
                font-weight: 600;
            }
            .nav-logo-mark {
                display: flex;
                align-items: center;
                justify-content: center;
                width: 2.5rem;
                height: 2.5rem;
                background: var(--cream);
                border-radius: 999px;
                font-size: 1.1rem;
            }
            .nav-links {
                display: flex;
                align-items: center;
                gap: 2rem;
            }
            .nav-link {
                font-size: 0.9rem;
                font-weight: 500;
                color: rgba(13, 21, 29, 0.8);
                transition: color 0.3s;
            }
            .nav-link:hover {
                color: var(--navy);
            }
            .burger-menu {
                display: none;
                flex-direction: column;
                gap: 5px;
                padding: 0.5rem;
            }
            .burger-menu span {
                width: 22px;
                height: 2px;
                background: var(--navy);
                transition: transform 0.3s;
            }
            .mobile-menu {
                display: none;
                position: absolute;
                top: 100%;
                left: 0;
                right: 0;
                background: rgba(253, 248, 234, 0.95);
                backdrop-filter: blur(12px);
                box-shadow: 0 12px 30px rgba(13, 21, 29, 0.08);
                max-height: 0;
                opacity: 0;
                overflow: hidden;
                transition: all 0.5s cubic-bezier(0.16, 1, 0.3, 1);
            }
            .top-nav.menu-open .mobile-menu {
                max-height: 24rem;
                opacity: 1;
            }
            .mobile-menu .nav-link {
                display: block;
                padding: 0.75rem 1.5rem;
            }
            @media (max-width: 768px) {
                .nav-links, .nav-cta {
                    display: none;
                }
                .burger-menu {
                    display: flex;
                }
                .mobile-menu {
                    display: block;
                }
            }
            "}
        </style>
        <nav class={classes!(
            "top-nav",
            (*entered).then(|| "entered"),
            is_scrolled.then(|| "scrolled"),
            (*menu_open).then(|| "menu-open"),
        )}>
            <div class="nav-content">
                <a href="#hero" class="nav-logo" onclick={nav_to("#hero")}>
                    <span class="nav-logo-mark">{"⌂"}</span>
                    <span>{config::BRAND_NAME}</span>
                </a>

                <div class="nav-links">
                    {
                        NAV_LINKS.iter().map(|&(name, href)| html! {
                            <a key={name} href={href} class="nav-link" onclick={nav_to(href)}>
                                { name }
                            </a>
                        }).collect::<Html>()
                    }
                </div>

                <div class="nav-cta">
                    <button class="btn-primary" onclick={nav_to("#cta")}>
                        {"Get Started"}
                    </button>
                </div>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            <div class="mobile-menu">
                {
                    NAV_LINKS.iter().map(|&(name, href)| html! {
                        <a key={name} href={href} class="nav-link" onclick={nav_to(href)}>
                            { name }
                        </a>
                    }).collect::<Html>()
                }
            </div>
        </nav>
        </>
    }
}
