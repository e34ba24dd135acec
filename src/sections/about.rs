use yew::prelude::*;

use crate::motion::counter::use_animated_counter;
use crate::motion::parallax::use_section_parallax;
use crate::motion::visibility::{use_visibility_gate, Visibility};

const FEATURES: &[&str] = &[
    "Expert Market Analysis",
    "Personalized Property Search",
    "Negotiation Excellence",
    "End-to-End Support",
];

const STATS: &[(u32, &str, &str, &str)] = &[
    (15, "+", "Years Experience", "🏆"),
    (200, "+", "Homes Sold", "⌂"),
    (100, "%", "Commitment", "✓"),
    (24, "/7", "Support", "🕐"),
];

#[derive(Properties, PartialEq)]
struct StatProps {
    value: u32,
    suffix: &'static str,
    label: &'static str,
    glyph: &'static str,
    visible: Visibility,
}

#[function_component(AnimatedStat)]
fn animated_stat(props: &StatProps) -> Html {
    let count = use_animated_counter(props.value, props.visible);

    html! {
        <div class="stat-card">
            <div class="stat-icon">{ props.glyph }</div>
            <div class="stat-value">{ count }{ props.suffix }</div>
            <div class="stat-label">{ props.label }</div>
        </div>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let section_ref = use_node_ref();
    let image_ref = use_node_ref();
    let visible = use_visibility_gate(section_ref.clone(), 0.2);
    use_section_parallax(section_ref.clone(), image_ref.clone(), 40.0);

    let reveal = |base: &'static str| classes!(base, visible.is_visible().then(|| "in"));

    html! {
        <section id="about" class="about" ref={section_ref}>
            <style>
                {r"
                .about .inner {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                .about .fade-up,
                .about .fade-left,
                .about .fade-right {
                    opacity: 0;
                    transition: all 0.7s cubic-bezier(0.16, 1, 0.3, 1);
                }
                .about .fade-up { transform: translateY(2rem); }
                .about .fade-left { transform: translateX(-3rem); }
                .about .fade-right { transform: translateX(2rem); }
                .about .in {
                    opacity: 1;
                    transform: translate(0, 0);
                }
                .about-image-wrap {
                    position: relative;
                }
                .about-image {
                    border-radius: 46% 54% 52% 48% / 44% 46% 54% 56%;
                    overflow: hidden;
                }
                .about-image img {
                    width: 100%;
                    height: 34rem;
                    object-fit: cover;
                }
                .about-badge {
                    position: absolute;
                    top: 2rem;
                    right: -1rem;
                    background: var(--navy);
                    color: #fff;
                    border-radius: 1rem;
                    padding: 1.5rem;
                    box-shadow: 0 24px 50px rgba(13, 21, 29, 0.25);
                }
                .about-badge-value {
                    font-family: Georgia, serif;
                    font-size: 2.25rem;
                    font-weight: 700;
                }
                .about-badge-label {
                    font-size: 0.8rem;
                    color: rgba(255, 255, 255, 0.7);
                }
                .about h2 {
                    font-size: clamp(2rem, 4vw, 3rem);
                    margin: 1.5rem 0;
                }
                .about-copy {
                    color: rgba(13, 21, 29, 0.7);
                    margin-bottom: 1.25rem;
                }
                .feature-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                    padding: 1rem 0;
                }
                .feature-item {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    font-size: 0.9rem;
                }
                .feature-mark {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 1.25rem;
                    height: 1.25rem;
                    background: var(--cream);
                    border-radius: 999px;
                    font-size: 0.7rem;
                    flex-shrink: 0;
                }
                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                    margin-top: 5rem;
                }
                .stat-card {
                    background: #fff;
                    border: 1px solid rgba(246, 231, 197, 0.5);
                    border-radius: 1rem;
                    padding: 1.5rem;
                    box-shadow: 0 12px 30px rgba(13, 21, 29, 0.06);
                    transition: transform 0.3s, box-shadow 0.3s;
                }
                .stat-card:hover {
                    transform: translateY(-4px);
                    box-shadow: 0 18px 40px rgba(13, 21, 29, 0.1);
                }
                .stat-icon {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 3rem;
                    height: 3rem;
                    background: var(--cream);
                    border-radius: 0.75rem;
                    margin-bottom: 1rem;
                }
                .stat-value {
                    font-family: Georgia, serif;
                    font-size: 2rem;
                    font-weight: 600;
                }
                .stat-label {
                    font-size: 0.85rem;
                    color: rgba(13, 21, 29, 0.6);
                    margin-top: 0.25rem;
                }
                @media (max-width: 900px) {
                    .about .inner { grid-template-columns: 1fr; }
                    .stats-grid { grid-template-columns: 1fr 1fr; }
                }
                "}
            </style>

            <div class="inner">
                <div class="about-image-wrap">
                    <div class={reveal("fade-left")} ref={image_ref}>
                        <div class="about-image">
                            <img src="/about-image.jpg" alt="The Luxe Estates team" />
                        </div>
                        <div class="about-badge">
                            <div class="about-badge-value">{"15+"}</div>
                            <div class="about-badge-label">{"Years of"}<br />{"Excellence"}</div>
                        </div>
                    </div>
                </div>

                <div>
                    <div class={reveal("fade-right")} style="transition-delay: 200ms;">
                        <span class="pill">{"ABOUT US"}</span>
                    </div>

                    <h2 class={reveal("fade-up")} style="transition-delay: 300ms;">
                        {"Your Trusted Real Estate Partner"}
                    </h2>

                    <p class={classes!("about-copy", "fade-up", visible.is_visible().then(|| "in"))}
                       style="transition-delay: 500ms;">
                        {"With over 15 years of experience, we've helped thousands of families \
                          find their perfect home. Our commitment to excellence and personalized \
                          service sets us apart in the luxury real estate market."}
                    </p>

                    <p class={classes!("about-copy", "fade-up", visible.is_visible().then(|| "in"))}
                       style="transition-delay: 600ms;">
                        {"We understand that buying or selling a home is more than just a \
                          transaction. Our team of highly-seasoned real estate professionals is \
                          dedicated to providing exceptional, personalized service for all of \
                          our clients."}
                    </p>

                    <div class={classes!("feature-grid", "fade-up", visible.is_visible().then(|| "in"))}
                         style="transition-delay: 700ms;">
                        {
                            FEATURES.iter().map(|&feature| html! {
                                <div key={feature} class="feature-item">
                                    <span class="feature-mark">{"✓"}</span>
                                    <span>{ feature }</span>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>

                    <div class={reveal("fade-up")} style="transition-delay: 900ms;">
                        <button class="btn-primary">
                            {"Learn More About Us"}
                            <span>{"→"}</span>
                        </button>
                    </div>
                </div>
            </div>

            <div class="inner">
                <div class="stats-grid">
                    {
                        STATS.iter().enumerate().map(|(i, &(value, suffix, label, glyph))| html! {
                            <div
                                key={label}
                                class={classes!("fade-up", visible.is_visible().then(|| "in"))}
                                style={format!("transition-delay: {}ms;", 1000 + i * 100)}
                            >
                                <AnimatedStat value={value} suffix={suffix} label={label} glyph={glyph} visible={visible} />
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
