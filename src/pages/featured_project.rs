use yew::prelude::*;

use crate::components::reveal::{RevealOnScroll, RevealVariant};
use crate::components::slider::ComparisonSlider;
use crate::content::{AFTER_IMAGE, BEFORE_IMAGE, GALLERY};

#[function_component(FeaturedProject)]
pub fn featured_project() -> Html {
    html! {
        <section id="projects" class="projects">
            <style>
                {r#"
                    .projects {
                        padding: 5rem 0;
                        background: #f8fafc;
                    }
                    .projects-header { margin-bottom: 3rem; }
                    .projects-header p { color: #64748b; margin: 0.25rem 0 0; }
                    .gallery {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1rem;
                        margin-top: 2rem;
                    }
                    .gallery-tile {
                        position: relative;
                        overflow: hidden;
                        border-radius: 8px;
                        height: 16rem;
                    }
                    .gallery-tile img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.5s;
                    }
                    .gallery-tile:hover img { transform: scale(1.1); }
                    .gallery-caption {
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        padding: 1rem;
                        background: linear-gradient(to top, rgba(0, 0, 0, 0.8), transparent);
                        transform: translateY(100%);
                        transition: transform 0.3s;
                    }
                    .gallery-tile:hover .gallery-caption { transform: translateY(0); }
                    .gallery-caption p {
                        margin: 0;
                        color: #fff;
                        font-weight: 700;
                    }
                    @media (min-width: 768px) {
                        .gallery { grid-template-columns: repeat(3, 1fr); }
                    }
                "#}
            </style>
            <div class="container">
                <div class="projects-header">
                    <h2 class="section-title">{"Featured Project"}</h2>
                    <p>{"Drag to reveal the finished aluminium installation."}</p>
                </div>

                <RevealOnScroll variant={RevealVariant::FadeInUp}>
                    <ComparisonSlider before_image={BEFORE_IMAGE} after_image={AFTER_IMAGE} />
                </RevealOnScroll>

                <div class="gallery">
                    { for GALLERY.iter().map(|item| html! {
                        <div key={item.caption.to_string()} class="gallery-tile">
                            <img src={item.image} alt={item.alt} loading="lazy" />
                            <div class="gallery-caption">
                                <p>{item.caption}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
