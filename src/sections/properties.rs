use yew::prelude::*;

use crate::motion::visibility::{use_visibility_gate, Visibility};

#[derive(Clone, Copy, PartialEq)]
pub struct Listing {
    pub image: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub price: &'static str,
    pub beds: u32,
    pub baths: u32,
    pub sqft: &'static str,
    pub featured: bool,
}

const LISTINGS: &[Listing] = &[
    Listing {
        image: "/property-1.jpg",
        title: "Modern Waterfront Villa",
        location: "Beverly Hills, CA",
        price: "$4,500,000",
        beds: 5,
        baths: 4,
        sqft: "4,200",
        featured: true,
    },
    Listing {
        image: "/property-2.jpg",
        title: "Downtown Luxury Loft",
        location: "Manhattan, NY",
        price: "$2,800,000",
        beds: 2,
        baths: 2,
        sqft: "1,800",
        featured: false,
    },
    Listing {
        image: "/property-3.jpg",
        title: "Mountain View Estate",
        location: "Aspen, CO",
        price: "$6,200,000",
        beds: 6,
        baths: 5,
        sqft: "5,500",
        featured: true,
    },
];

#[derive(Properties, PartialEq)]
struct CardProps {
    listing: Listing,
    index: usize,
    visible: Visibility,
}

#[function_component(ListingCard)]
fn listing_card(props: &CardProps) -> Html {
    let liked = use_state(|| false);

    let toggle_like = {
        let liked = liked.clone();
        Callback::from(move |_: MouseEvent| liked.set(!*liked))
    };

    let listing = &props.listing;

    html! {
        <div
            class={classes!("listing-card", "fade-up", props.visible.is_visible().then(|| "in"))}
            style={format!("transition-delay: {}ms;", 400 + props.index * 150)}
        >
            <div class="listing-media">
                <img src={listing.image} alt={listing.title} />
                {
                    if listing.featured {
                        html! { <span class="listing-featured">{"Featured"}</span> }
                    } else {
                        html! {}
                    }
                }
                <button
                    class={classes!("listing-like", (*liked).then(|| "liked"))}
                    onclick={toggle_like}
                    aria-label="Save listing"
                >
                    {"♥"}
                </button>
                <span class="listing-price">{ listing.price }</span>
            </div>
            <div class="listing-body">
                <h3>{ listing.title }</h3>
                <div class="listing-location">{"📍 "}{ listing.location }</div>
                <div class="listing-facts">
                    <span>{ listing.beds }{" Beds"}</span>
                    <span>{ listing.baths }{" Baths"}</span>
                    <span>{ listing.sqft }{" sqft"}</span>
                </div>
                <button class="listing-view">{"View Details"}</button>
            </div>
        </div>
    }
}

#[function_component(Properties)]
pub fn properties() -> Html {
    let section_ref = use_node_ref();
    let visible = use_visibility_gate(section_ref.clone(), 0.1);

    let reveal = |base: &'static str| classes!(base, visible.is_visible().then(|| "in"));

    html! {
        <section id="properties" class="properties" ref={section_ref}>
            <style>
                {r"
                .properties .fade-up {
                    transform: translateY(2rem);
                    opacity: 0;
                    transition: all 0.7s cubic-bezier(0.16, 1, 0.3, 1);
                }
                .properties .fade-up.in {
                    transform: translateY(0);
                    opacity: 1;
                }
                .properties-header {
                    max-width: 40rem;
                    margin: 0 auto 4rem;
                    text-align: center;
                }
                .properties-kicker {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                    opacity: 0;
                    transition: opacity 0.6s;
                }
                .properties-kicker.in { opacity: 1; }
                .properties-kicker .rule {
                    width: 0;
                    height: 1px;
                    background: var(--cream-dark);
                    transition: width 0.6s cubic-bezier(0.16, 1, 0.3, 1);
                }
                .properties-kicker.in .rule { width: 3rem; }
                .properties-kicker span {
                    font-size: 0.85rem;
                    font-weight: 500;
                    color: rgba(13, 21, 29, 0.7);
                    letter-spacing: 0.1em;
                }
                .properties h2 {
                    font-size: clamp(2rem, 4vw, 3rem);
                    margin-bottom: 1rem;
                }
                .properties-copy {
                    color: rgba(13, 21, 29, 0.6);
                }
                .listing-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .listing-card {
                    background: #fff;
                    border-radius: 1.5rem;
                    overflow: hidden;
                    box-shadow: 0 12px 30px rgba(13, 21, 29, 0.06);
                }
                .properties .listing-card.in:hover {
                    transform: translateY(-12px);
                    box-shadow: 0 30px 60px rgba(13, 21, 29, 0.12);
                }
                .listing-media {
                    position: relative;
                    height: 17rem;
                    overflow: hidden;
                }
                .listing-media img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s ease;
                }
                .listing-card:hover .listing-media img {
                    transform: scale(1.1);
                }
                .listing-featured {
                    position: absolute;
                    top: 1rem;
                    left: 1rem;
                    padding: 0.25rem 0.75rem;
                    background: var(--cream);
                    border-radius: 999px;
                    font-size: 0.75rem;
                    font-weight: 500;
                }
                .listing-like {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.9);
                    color: var(--navy);
                    transition: all 0.3s;
                }
                .listing-like.liked {
                    background: #e0245e;
                    color: #fff;
                    transform: scale(1.1);
                }
                .listing-price {
                    position: absolute;
                    bottom: 1rem;
                    left: 1rem;
                    padding: 0.5rem 1rem;
                    background: #fff;
                    border-radius: 0.75rem;
                    font-family: Georgia, serif;
                    font-weight: 600;
                    box-shadow: 0 12px 30px rgba(13, 21, 29, 0.1);
                }
                .listing-body {
                    padding: 1.5rem;
                }
                .listing-location {
                    color: rgba(13, 21, 29, 0.6);
                    font-size: 0.9rem;
                    margin: 0.5rem 0 1rem;
                }
                .listing-facts {
                    display: flex;
                    gap: 1rem;
                    padding-top: 1rem;
                    border-top: 1px solid rgba(246, 231, 197, 0.5);
                    font-size: 0.85rem;
                    color: rgba(13, 21, 29, 0.7);
                }
                .listing-view {
                    width: 100%;
                    margin-top: 1.5rem;
                    padding: 0.75rem;
                    border-radius: 0.75rem;
                    background: var(--cream);
                    color: var(--navy);
                    font-size: 0.9rem;
                    font-weight: 500;
                    transition: all 0.3s;
                }
                .listing-card:hover .listing-view {
                    background: var(--navy);
                    color: #fff;
                }
                .properties-footer {
                    text-align: center;
                    margin-top: 3rem;
                }
                @media (max-width: 900px) {
                    .listing-grid { grid-template-columns: 1fr; }
                }
                "}
            </style>

            <div class="inner">
                <div class="properties-header">
                    <div class={reveal("properties-kicker")}>
                        <div class="rule"></div>
                        <span>{"FEATURED LISTINGS"}</span>
                        <div class="rule"></div>
                    </div>

                    <h2 class={reveal("fade-up")} style="transition-delay: 200ms;">
                        {"Explore Our Premium Properties"}
                    </h2>

                    <p class={classes!("properties-copy", "fade-up", visible.is_visible().then(|| "in"))}
                       style="transition-delay: 300ms;">
                        {"Handpicked luxury homes that define exceptional living. Each property \
                          is carefully selected to meet our high standards of quality and \
                          elegance."}
                    </p>
                </div>

                <div class="listing-grid">
                    {
                        LISTINGS.iter().enumerate().map(|(index, listing)| html! {
                            <ListingCard
                                key={listing.title}
                                listing={*listing}
                                index={index}
                                visible={visible}
                            />
                        }).collect::<Html>()
                    }
                </div>

                <div class={reveal("fade-up")} style="transition-delay: 900ms;">
                    <div class="properties-footer">
                        <button class="btn-primary">
                            {"View All Properties"}
                            <span>{"→"}</span>
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
