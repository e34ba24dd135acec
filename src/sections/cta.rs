use yew::prelude::*;

use crate::config;
use crate::motion::visibility::use_visibility_gate;
use crate::sections::navbar::scroll_to_section;

#[function_component(Cta)]
pub fn cta() -> Html {
    let section_ref = use_node_ref();
    let visible = use_visibility_gate(section_ref.clone(), 0.3);

    let reveal = |base: &'static str| classes!(base, visible.is_visible().then(|| "in"));

    let on_get_started = Callback::from(|_: MouseEvent| scroll_to_section("#properties"));

    let contact_cards = [
        ("📞", "Call Us", config::CONTACT_PHONE),
        ("✉", "Email Us", config::CONTACT_EMAIL),
        ("📍", "Visit Us", config::CONTACT_ADDRESS),
    ];

    html! {
        <section id="cta" class="cta" ref={section_ref}>
            <style>
                {r"
                .cta {
                    text-align: center;
                }
                .cta-background {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(135deg, #f6e7c5 0%, #fdf8ea 25%, #f6e7c5 50%, #fdf8ea 75%, #f6e7c5 100%);
                    background-size: 400% 400%;
                    animation: cta-gradient 15s ease infinite;
                }
                @keyframes cta-gradient {
                    0% { background-position: 0% 50%; }
                    50% { background-position: 100% 50%; }
                    100% { background-position: 0% 50%; }
                }
                .cta-shape {
                    position: absolute;
                    border-radius: 999px;
                    filter: blur(40px);
                    opacity: 0;
                    transform: scale(0.5);
                    transition: all 1.2s ease;
                }
                .cta-shape.in {
                    opacity: 1;
                    transform: scale(1);
                }
                .cta-shape.one {
                    top: 25%;
                    left: 2.5rem;
                    width: 8rem;
                    height: 8rem;
                    background: rgba(255, 255, 255, 0.4);
                    transition-delay: 200ms;
                }
                .cta-shape.two {
                    bottom: 25%;
                    right: 2.5rem;
                    width: 12rem;
                    height: 12rem;
                    background: rgba(227, 201, 143, 0.3);
                    transition-delay: 400ms;
                }
                .cta .inner {
                    position: relative;
                    max-width: 56rem;
                }
                .cta .fade-up {
                    transform: translateY(3rem);
                    opacity: 0;
                    transition: all 0.7s cubic-bezier(0.16, 1, 0.3, 1);
                }
                .cta .fade-up.in {
                    transform: translateY(0);
                    opacity: 1;
                }
                .cta h2 {
                    font-size: clamp(2rem, 5vw, 3.75rem);
                    margin-bottom: 1.5rem;
                }
                .cta h2 .accent {
                    color: var(--cream-dark);
                }
                .cta-copy {
                    max-width: 42rem;
                    margin: 0 auto 2.5rem;
                    color: rgba(13, 21, 29, 0.7);
                }
                .cta-buttons {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    margin-bottom: 4rem;
                    flex-wrap: wrap;
                }
                .btn-secondary {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 1rem 2rem;
                    background: #fff;
                    color: var(--navy);
                    border-radius: 999px;
                    font-size: 0.9rem;
                    font-weight: 500;
                    transition: all 0.3s;
                }
                .btn-secondary:hover {
                    background: var(--cream);
                    box-shadow: 0 12px 30px rgba(13, 21, 29, 0.1);
                }
                .contact-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .contact-card {
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(4px);
                    border-radius: 1rem;
                    padding: 1.5rem;
                    box-shadow: 0 12px 30px rgba(13, 21, 29, 0.06);
                }
                .contact-mark {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 3rem;
                    height: 3rem;
                    background: var(--cream);
                    border-radius: 0.75rem;
                    margin: 0 auto 1rem;
                }
                .contact-card h3 {
                    font-size: 0.95rem;
                    margin-bottom: 0.25rem;
                }
                .contact-card p {
                    font-size: 0.9rem;
                    color: rgba(13, 21, 29, 0.6);
                }
                @media (max-width: 700px) {
                    .contact-grid { grid-template-columns: 1fr; }
                }
                "}
            </style>

            <div class="cta-background"></div>
            <div class={reveal("cta-shape one")}></div>
            <div class={reveal("cta-shape two")}></div>

            <div class="inner">
                <h2 class={reveal("fade-up")} style="transition-delay: 200ms;">
                    {"Ready to Find Your"}
                    <br />
                    <span class="accent">{"Dream Home?"}</span>
                </h2>

                <p class={classes!("cta-copy", "fade-up", visible.is_visible().then(|| "in"))}
                   style="transition-delay: 400ms;">
                    {"Let our experts guide you through the journey of finding your perfect \
                      property. Start your search today and take the first step towards your \
                      dream lifestyle."}
                </p>

                <div class={classes!("cta-buttons", "fade-up", visible.is_visible().then(|| "in"))}
                     style="transition-delay: 600ms;">
                    <button class="btn-primary" onclick={on_get_started}>
                        {"Get Started Today"}
                        <span>{"→"}</span>
                    </button>
                    <a class="btn-secondary" href={format!("tel:{}", config::CONTACT_PHONE)}>
                        {"📞 Schedule a Call"}
                    </a>
                </div>

                <div class={classes!("contact-grid", "fade-up", visible.is_visible().then(|| "in"))}
                     style="transition-delay: 800ms;">
                    {
                        contact_cards.iter().map(|&(glyph, heading, detail)| html! {
                            <div key={heading} class="contact-card">
                                <div class="contact-mark">{ glyph }</div>
                                <h3>{ heading }</h3>
                                <p>{ detail }</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
