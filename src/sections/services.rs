use yew::prelude::*;

use crate::motion::parallax::use_section_parallax;
use crate::motion::visibility::{use_visibility_gate, Visibility};

pub struct Service {
    pub id: u32,
    pub glyph: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
}

const SERVICES: &[Service] = &[
    Service {
        id: 1,
        glyph: "🔍",
        title: "Property Search",
        description: "Access exclusive listings and off-market properties tailored to your preferences.",
        details: &[
            "Personalized property matching",
            "Off-market listings access",
            "Virtual tours available",
            "Neighborhood analysis",
        ],
    },
    Service {
        id: 2,
        glyph: "📈",
        title: "Home Valuation",
        description: "Get accurate market valuations from our expert analysts.",
        details: &[
            "Comparative market analysis",
            "Price trend forecasting",
            "Investment potential assessment",
            "Regular market updates",
        ],
    },
    Service {
        id: 3,
        glyph: "📋",
        title: "Investment Consulting",
        description: "Make informed decisions with our market insights and investment strategies.",
        details: &[
            "Portfolio diversification advice",
            "ROI projections",
            "Risk assessment",
            "Tax benefit guidance",
        ],
    },
    Service {
        id: 4,
        glyph: "🤝",
        title: "Legal Support",
        description: "Navigate contracts and paperwork with our experienced legal team.",
        details: &[
            "Contract review & negotiation",
            "Title verification",
            "Closing coordination",
            "Regulatory compliance",
        ],
    },
];

#[function_component(Services)]
pub fn services() -> Html {
    let section_ref = use_node_ref();
    let image_ref = use_node_ref();
    let visible = use_visibility_gate(section_ref.clone(), 0.2);
    use_section_parallax(section_ref.clone(), image_ref.clone(), 50.0);

    // Exactly one (or zero) service expanded; the first starts open.
    let active = use_state(|| Some(1_u32));

    let toggle = |id: u32| {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| {
            active.set(if *active == Some(id) { None } else { Some(id) });
        })
    };

    let reveal = |base: &'static str| classes!(base, visible.is_visible().then(|| "in"));

    html! {
        <section id="services" class="services" ref={section_ref}>
            <style>
                {r"
                .services .inner {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: start;
                }
                .services .fade-up,
                .services .fade-left,
                .services .fade-right {
                    opacity: 0;
                    transition: all 0.7s cubic-bezier(0.16, 1, 0.3, 1);
                }
                .services .fade-up { transform: translateY(2rem); }
                .services .fade-left { transform: translateX(-3rem); }
                .services .fade-right { transform: translateX(2rem); }
                .services .in {
                    opacity: 1;
                    transform: translate(0, 0);
                }
                .services-image {
                    clip-path: polygon(0 0, 100% 5%, 100% 95%, 0 100%);
                    overflow: hidden;
                }
                .services-image img {
                    width: 100%;
                    height: 34rem;
                    object-fit: cover;
                }
                .services-badge {
                    position: absolute;
                    bottom: 2rem;
                    left: 2rem;
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    background: #fff;
                    border-radius: 1rem;
                    padding: 1.5rem;
                    box-shadow: 0 24px 50px rgba(13, 21, 29, 0.15);
                }
                .services-badge-mark {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 3.5rem;
                    height: 3.5rem;
                    background: var(--cream);
                    border-radius: 0.75rem;
                    font-size: 1.25rem;
                }
                .services-badge-value {
                    font-family: Georgia, serif;
                    font-size: 1.5rem;
                    font-weight: 700;
                }
                .services-badge-label {
                    font-size: 0.85rem;
                    color: rgba(13, 21, 29, 0.6);
                }
                .services h2 {
                    font-size: clamp(2rem, 4vw, 3rem);
                    margin: 1.5rem 0;
                }
                .services-copy {
                    color: rgba(13, 21, 29, 0.7);
                    margin-bottom: 1rem;
                }
                .service-item {
                    border-bottom: 1px solid rgba(246, 231, 197, 0.5);
                }
                .service-head {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1.5rem 0;
                    text-align: left;
                    transition: background 0.3s;
                }
                .service-head:hover .service-mark {
                    background: var(--navy);
                    color: #fff;
                }
                .service-mark {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 3rem;
                    height: 3rem;
                    background: var(--cream);
                    border-radius: 0.75rem;
                    font-size: 1.1rem;
                    flex-shrink: 0;
                    transition: all 0.3s;
                }
                .service-item.active .service-mark {
                    background: var(--navy);
                    color: #fff;
                }
                .service-title-group {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .service-title-group h3 {
                    font-size: 1.1rem;
                }
                .service-desc {
                    font-size: 0.9rem;
                    color: rgba(13, 21, 29, 0.6);
                    max-height: 0;
                    opacity: 0;
                    overflow: hidden;
                    transition: all 0.3s;
                }
                .service-item.active .service-desc {
                    max-height: 5rem;
                    opacity: 1;
                    margin-top: 0.25rem;
                }
                .service-chevron {
                    transition: transform 0.3s;
                    color: rgba(13, 21, 29, 0.5);
                }
                .service-item.active .service-chevron {
                    transform: rotate(180deg);
                }
                .service-details {
                    max-height: 0;
                    opacity: 0;
                    overflow: hidden;
                    transition: all 0.5s cubic-bezier(0.16, 1, 0.3, 1);
                }
                .service-item.active .service-details {
                    max-height: 16rem;
                    opacity: 1;
                }
                .service-details ul {
                    list-style: none;
                    padding: 0 0 1.5rem 4rem;
                }
                .service-details li {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 0.9rem;
                    color: rgba(13, 21, 29, 0.7);
                    padding: 0.25rem 0;
                }
                .service-details li::before {
                    content: '';
                    width: 6px;
                    height: 6px;
                    background: var(--cream-dark);
                    border-radius: 999px;
                    flex-shrink: 0;
                }
                @media (max-width: 900px) {
                    .services .inner { grid-template-columns: 1fr; }
                }
                "}
            </style>

            <div class="inner">
                <div style="position: relative;">
                    <div class={reveal("fade-left")} ref={image_ref}>
                        <div class="services-image">
                            <img src="/services-image.jpg" alt="Agent presenting a property" />
                        </div>
                        <div class="services-badge">
                            <div class="services-badge-mark">{"📋"}</div>
                            <div>
                                <div class="services-badge-value">{"100%"}</div>
                                <div class="services-badge-label">{"Client Satisfaction"}</div>
                            </div>
                        </div>
                    </div>
                </div>

                <div>
                    <div class={reveal("fade-right")} style="transition-delay: 200ms;">
                        <span class="pill">{"WHAT WE OFFER"}</span>
                    </div>

                    <h2 class={reveal("fade-up")} style="transition-delay: 300ms;">
                        {"Comprehensive Real Estate Services"}
                    </h2>

                    <p class={classes!("services-copy", "fade-up", visible.is_visible().then(|| "in"))}
                       style="transition-delay: 400ms;">
                        {"From finding your dream home to securing the best investment, we \
                          provide end-to-end real estate solutions tailored to your unique \
                          needs."}
                    </p>

                    <div>
                        {
                            SERVICES.iter().enumerate().map(|(index, service)| {
                                let is_active = *active == Some(service.id);
                                html! {
                                    <div
                                        key={service.id}
                                        class={classes!(
                                            "service-item",
                                            "fade-right",
                                            is_active.then(|| "active"),
                                            visible.is_visible().then(|| "in"),
                                        )}
                                        style={format!("transition-delay: {}ms;", 600 + index * 100)}
                                    >
                                        <button class="service-head" onclick={toggle(service.id)}>
                                            <div class="service-title-group">
                                                <span class="service-mark">{ service.glyph }</span>
                                                <div>
                                                    <h3>{ service.title }</h3>
                                                    <p class="service-desc">{ service.description }</p>
                                                </div>
                                            </div>
                                            <span class="service-chevron">{"⌄"}</span>
                                        </button>
                                        <div class="service-details">
                                            <ul>
                                                {
                                                    service.details.iter().map(|&detail| html! {
                                                        <li key={detail}>{ detail }</li>
                                                    }).collect::<Html>()
                                                }
                                            </ul>
                                        </div>
                                    </div>
                                }
                            }).collect::<Html>()
                        }
                    </div>

                    <div class={reveal("fade-up")} style="transition-delay: 1000ms;">
                        <button class="btn-primary" style="margin-top: 1.5rem;">
                            {"Explore All Services"}
                            <span>{"→"}</span>
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
