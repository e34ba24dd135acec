use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::motion::parallax::page_parallax;
use crate::sections::navbar::scroll_to_section;
use crate::ScrollPosition;

const TITLE_WORDS: &[&str] = &["Find", "Your", "Dream", "Home"];

const PROPERTY_TYPES: &[(&str, &str)] = &[
    ("all", "All Types"),
    ("house", "House"),
    ("apartment", "Apartment"),
    ("villa", "Villa"),
    ("penthouse", "Penthouse"),
];

const HERO_STATS: &[(&str, &str)] = &[
    ("500+", "Properties"),
    ("200+", "Happy Clients"),
    ("15+", "Years Experience"),
];

#[function_component(Hero)]
pub fn hero() -> Html {
    let scroll = use_context::<ScrollPosition>().unwrap_or_default();
    let loaded = use_state(|| false);
    let location = use_state(String::new);
    let property_type = use_state(|| "all".to_string());

    {
        let loaded = loaded.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(100, move || loaded.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    // Page-relative parallax: drift against the scroll with a slight zoom.
    let image_transform = page_parallax(scroll.0, 0.3, 0.0002).to_css();

    let on_location = {
        let location = location.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            location.set(input.value());
        })
    };

    let on_type = {
        let property_type = property_type.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            property_type.set(select.value());
        })
    };

    let on_search = Callback::from(|_: MouseEvent| scroll_to_section("#properties"));

    let reveal = |base: &'static str| classes!(base, (*loaded).then(|| "in"));

    html! {
        <section id="hero" class="hero">
            <style>
                {r"
                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    padding-top: 8rem;
                }
                .hero .inner {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                    width: 100%;
                }
                .hero .fade-up {
                    transform: translateY(2rem);
                    opacity: 0;
                    transition: all 0.6s ease;
                }
                .hero .fade-up.in {
                    transform: translateY(0);
                    opacity: 1;
                }
                .hero-word {
                    display: inline-block;
                    margin-right: 0.75rem;
                    transform: translateY(4rem);
                    opacity: 0;
                    transition: all 0.7s cubic-bezier(0.16, 1, 0.3, 1);
                }
                .hero-word.in {
                    transform: translateY(0);
                    opacity: 1;
                }
                .hero-word.accent {
                    color: var(--cream-dark);
                }
                .hero-title {
                    font-size: clamp(2.5rem, 6vw, 4.5rem);
                    font-weight: 600;
                    margin: 1.5rem 0;
                }
                .hero-copy {
                    max-width: 32rem;
                    color: rgba(13, 21, 29, 0.7);
                    margin-bottom: 2rem;
                }
                .search-form {
                    display: flex;
                    gap: 0.5rem;
                    padding: 0.5rem;
                    background: #fff;
                    border-radius: 1rem;
                    box-shadow: 0 18px 40px rgba(13, 21, 29, 0.08);
                    flex-wrap: wrap;
                }
                .search-field {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    flex: 1;
                    min-width: 10rem;
                    padding: 0.75rem 1rem;
                    background: var(--cream-light);
                    border-radius: 0.75rem;
                }
                .search-field input,
                .search-field select {
                    border: none;
                    background: transparent;
                    font: inherit;
                    font-size: 0.9rem;
                    color: var(--navy);
                    outline: none;
                    width: 100%;
                }
                .hero-stats {
                    display: flex;
                    gap: 2rem;
                    margin-top: 2.5rem;
                }
                .hero-stat-value {
                    font-family: Georgia, serif;
                    font-size: 1.75rem;
                    font-weight: 600;
                }
                .hero-stat-label {
                    font-size: 0.75rem;
                    color: rgba(13, 21, 29, 0.6);
                }
                .hero-image-wrap {
                    transform: translateX(6rem);
                    opacity: 0;
                    transition: all 1.2s cubic-bezier(0.16, 1, 0.3, 1);
                    transition-delay: 400ms;
                }
                .hero-image-wrap.in {
                    transform: translateX(0);
                    opacity: 1;
                }
                .hero-image {
                    border-radius: 1.5rem;
                    overflow: hidden;
                    box-shadow: 0 30px 60px rgba(13, 21, 29, 0.15);
                }
                .hero-image img {
                    width: 100%;
                    height: 34rem;
                    object-fit: cover;
                }
                .hero-card {
                    position: absolute;
                    bottom: -1.5rem;
                    left: -1.5rem;
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    background: #fff;
                    border-radius: 1rem;
                    padding: 1rem;
                    box-shadow: 0 18px 40px rgba(13, 21, 29, 0.12);
                }
                .hero-card-mark {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 3rem;
                    height: 3rem;
                    background: var(--cream);
                    border-radius: 999px;
                }
                .hero-wave {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    right: 0;
                    pointer-events: none;
                }
                @media (max-width: 900px) {
                    .hero .inner {
                        grid-template-columns: 1fr;
                    }
                }
                "}
            </style>

            <div class="inner">
                <div>
                    <div class={reveal("fade-up")}>
                        <span class="pill">{"WELCOME TO LUXE ESTATES"}</span>
                    </div>

                    <h1 class="hero-title">
                        {
                            TITLE_WORDS.iter().enumerate().map(|(i, word)| html! {
                                <span
                                    key={*word}
                                    class={classes!("hero-word", (*loaded).then(|| "in"))}
                                    style={format!("transition-delay: {}ms;", 200 + i * 100)}
                                >
                                    { *word }
                                </span>
                            }).collect::<Html>()
                        }
                        <span
                            class={classes!("hero-word", "accent", (*loaded).then(|| "in"))}
                            style="transition-delay: 600ms;"
                        >
                            {"Today"}
                        </span>
                    </h1>

                    <p
                        class={classes!("hero-copy", "fade-up", (*loaded).then(|| "in"))}
                        style="transition-delay: 600ms;"
                    >
                        {"Discover exceptional properties in prime locations. Our curated \
                          collection of luxury homes awaits your exploration. Let us guide \
                          you to your perfect sanctuary."}
                    </p>

                    <div class={reveal("fade-up")} style="transition-delay: 800ms;">
                        <div class="search-form">
                            <div class="search-field">
                                <span>{"📍"}</span>
                                <input
                                    type="text"
                                    placeholder="Enter location..."
                                    value={(*location).clone()}
                                    oninput={on_location}
                                />
                            </div>
                            <div class="search-field">
                                <span>{"⌂"}</span>
                                <select value={(*property_type).clone()} onchange={on_type}>
                                    {
                                        PROPERTY_TYPES.iter().map(|&(value, label)| html! {
                                            <option key={value} value={value} selected={*property_type == value}>
                                                { label }
                                            </option>
                                        }).collect::<Html>()
                                    }
                                </select>
                            </div>
                            <button class="btn-primary" onclick={on_search}>
                                {"Search"}
                            </button>
                        </div>
                    </div>

                    <div class={reveal("fade-up")} style="transition-delay: 1000ms;">
                        <div class="hero-stats">
                            {
                                HERO_STATS.iter().map(|&(value, label)| html! {
                                    <div key={label}>
                                        <div class="hero-stat-value">{ value }</div>
                                        <div class="hero-stat-label">{ label }</div>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>
                </div>

                // The parallax transform lives on the outer wrapper so it
                // does not fight the entrance transition on the inner one.
                <div style={format!("position: relative; transform: {};", image_transform)}>
                    <div class={reveal("hero-image-wrap")}>
                        <div class="hero-image">
                            <img src="/hero-image.jpg" alt="Luxury waterfront home" />
                        </div>
                        <div class="hero-card">
                            <div class="hero-card-mark">{"⌂"}</div>
                            <div>
                                <div class="hero-stat-value">{"2,400+"}</div>
                                <div class="hero-stat-label">{"Homes Available"}</div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <div class="hero-wave">
                <svg viewBox="0 0 1440 120" fill="none" xmlns="http://www.w3.org/2000/svg">
                    <path
                        d="M0 120L60 110C120 100 240 80 360 70C480 60 600 60 720 65C840 70 960 80 1080 85C1200 90 1320 90 1380 90L1440 90V120H1380C1320 120 1200 120 1080 120C960 120 840 120 720 120C600 120 480 120 360 120C240 120 120 120 60 120H0Z"
                        fill="#fdf8ea"
                    />
                </svg>
            </div>
        </section>
    }
}
