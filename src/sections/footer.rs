use chrono::{Datelike, Utc};
use web_sys::{HtmlInputElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::config;
use crate::motion::visibility::use_visibility_gate;
use crate::sections::navbar::scroll_to_section;

const QUICK_LINKS: &[(&str, &str)] = &[
    ("Home", "#hero"),
    ("About Us", "#about"),
    ("Properties", "#properties"),
    ("Services", "#services"),
    ("Contact", "#cta"),
];

const FOOTER_SERVICES: &[&str] = &[
    "Property Search",
    "Home Valuation",
    "Investment Consulting",
    "Legal Support",
    "Property Management",
];

const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("f", "Facebook"),
    ("𝕏", "Twitter"),
    ("◎", "Instagram"),
    ("in", "LinkedIn"),
];

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let footer_ref = use_node_ref();
    let visible = use_visibility_gate(footer_ref.clone(), 0.1);
    let email = use_state(String::new);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_subscribe = {
        let email = email.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message("Thank you for subscribing!");
            }
            email.set(String::new());
        })
    };

    let on_scroll_top = Callback::from(|_: MouseEvent| scroll_to_top());

    let nav_to = |href: &'static str| {
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(href);
        })
    };

    let year = Utc::now().year();

    let reveal = |base: &'static str| classes!(base, visible.is_visible().then(|| "in"));

    html! {
        <footer class="footer" ref={footer_ref}>
            <style>
                {r"
                .footer {
                    position: relative;
                    background: var(--navy);
                    color: #fff;
                    padding: 5rem 1.5rem 2.5rem;
                    overflow: hidden;
                }
                .footer .fade-up {
                    transform: translateY(2rem);
                    opacity: 0;
                    transition: all 0.6s ease;
                }
                .footer .fade-up.in {
                    transform: translateY(0);
                    opacity: 1;
                }
                .footer-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 3rem;
                }
                .footer-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-family: Georgia, serif;
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin-bottom: 1.5rem;
                }
                .footer-logo-mark {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 2.5rem;
                    height: 2.5rem;
                    background: var(--cream);
                    color: var(--navy);
                    border-radius: 999px;
                }
                .footer-blurb {
                    font-size: 0.9rem;
                    color: rgba(255, 255, 255, 0.6);
                    margin-bottom: 1.5rem;
                }
                .footer-social {
                    display: flex;
                    gap: 0.75rem;
                }
                .footer-social a {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 2.5rem;
                    height: 2.5rem;
                    background: rgba(255, 255, 255, 0.1);
                    border-radius: 999px;
                    font-size: 0.85rem;
                    transition: all 0.3s;
                }
                .footer-social a:hover {
                    background: var(--cream);
                    color: var(--navy);
                    transform: scale(1.1);
                }
                .footer h3 {
                    font-size: 1.05rem;
                    margin-bottom: 1.5rem;
                }
                .footer-list {
                    list-style: none;
                }
                .footer-list li {
                    margin-bottom: 0.75rem;
                    font-size: 0.9rem;
                    color: rgba(255, 255, 255, 0.6);
                }
                .footer-list a {
                    transition: color 0.3s;
                }
                .footer-list a:hover {
                    color: var(--cream);
                }
                .newsletter-form input {
                    width: 100%;
                    padding: 0.75rem 1rem;
                    border: none;
                    border-radius: 0.75rem;
                    font: inherit;
                    font-size: 0.9rem;
                    color: var(--navy);
                    margin-bottom: 0.75rem;
                    outline: none;
                }
                .newsletter-form button {
                    width: 100%;
                    padding: 0.75rem;
                    background: var(--cream);
                    color: var(--navy);
                    border-radius: 0.75rem;
                    font-size: 0.9rem;
                    font-weight: 500;
                    transition: background 0.3s;
                }
                .newsletter-form button:hover {
                    background: var(--cream-dark);
                }
                .footer-bottom {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    flex-wrap: wrap;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    margin-top: 4rem;
                    padding-top: 2rem;
                    font-size: 0.85rem;
                    color: rgba(255, 255, 255, 0.4);
                }
                .footer-bottom a:hover {
                    color: var(--cream);
                }
                .scroll-top {
                    position: fixed;
                    bottom: 2rem;
                    right: 2rem;
                    z-index: 40;
                    width: 3rem;
                    height: 3rem;
                    background: var(--cream);
                    color: var(--navy);
                    border-radius: 999px;
                    box-shadow: 0 18px 40px rgba(13, 21, 29, 0.2);
                    transform: translateY(2rem);
                    opacity: 0;
                    transition: all 0.3s;
                }
                .scroll-top.in {
                    transform: translateY(0);
                    opacity: 1;
                }
                .scroll-top:hover {
                    background: var(--navy);
                    color: #fff;
                    transform: scale(1.1);
                }
                @media (max-width: 900px) {
                    .footer-grid { grid-template-columns: 1fr 1fr; }
                }
                @media (max-width: 600px) {
                    .footer-grid { grid-template-columns: 1fr; }
                }
                "}
            </style>

            <div class="inner">
                <div class="footer-grid">
                    <div class={reveal("fade-up")}>
                        <a href="#hero" class="footer-logo" onclick={nav_to("#hero")}>
                            <span class="footer-logo-mark">{"⌂"}</span>
                            <span>{config::BRAND_NAME}</span>
                        </a>
                        <p class="footer-blurb">
                            {"Your trusted partner in finding the perfect home. We make luxury \
                              real estate accessible with personalized service and expert \
                              guidance."}
                        </p>
                        <div class="footer-social">
                            {
                                SOCIAL_LINKS.iter().map(|&(glyph, label)| html! {
                                    <a key={label} href="#" aria-label={label}>{ glyph }</a>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>

                    <div class={reveal("fade-up")} style="transition-delay: 100ms;">
                        <h3>{"Quick Links"}</h3>
                        <ul class="footer-list">
                            {
                                QUICK_LINKS.iter().map(|&(name, href)| html! {
                                    <li key={name}>
                                        <a href={href} onclick={nav_to(href)}>{ name }</a>
                                    </li>
                                }).collect::<Html>()
                            }
                        </ul>
                    </div>

                    <div class={reveal("fade-up")} style="transition-delay: 200ms;">
                        <h3>{"Our Services"}</h3>
                        <ul class="footer-list">
                            {
                                FOOTER_SERVICES.iter().map(|&service| html! {
                                    <li key={service}>{ service }</li>
                                }).collect::<Html>()
                            }
                        </ul>
                    </div>

                    <div class={reveal("fade-up")} style="transition-delay: 300ms;">
                        <h3>{"Newsletter"}</h3>
                        <p class="footer-blurb">
                            {"Subscribe to get the latest property listings and market updates."}
                        </p>
                        <form class="newsletter-form" onsubmit={on_subscribe}>
                            <input
                                type="email"
                                placeholder="Your email address"
                                value={(*email).clone()}
                                oninput={on_email}
                                required={true}
                            />
                            <button type="submit">{"Subscribe"}</button>
                        </form>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{format!("© {} {}. All rights reserved.", year, config::BRAND_NAME)}</p>
                    <div style="display: flex; gap: 1.5rem;">
                        <a href="#">{"Privacy Policy"}</a>
                        <a href="#">{"Terms of Service"}</a>
                    </div>
                </div>
            </div>

            <button
                class={reveal("scroll-top")}
                style="transition-delay: 800ms;"
                onclick={on_scroll_top}
                aria-label="Scroll to top"
            >
                {"↑"}
            </button>
        </footer>
    }
}
