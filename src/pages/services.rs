use yew::prelude::*;

use crate::components::icons::SvgIcon;
use crate::components::reveal::{RevealOnScroll, RevealVariant};
use crate::content::{Service, SERVICES};

/// Delay between cards animating in.
const STAGGER_MS: u32 = 100;

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: Service,
    pub index: usize,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let Service { title, icon, items } = props.service;

    html! {
        <RevealOnScroll
            variant={RevealVariant::alternating(props.index)}
            delay_ms={props.index as u32 * STAGGER_MS}
            root_margin="-50px"
        >
            <div class="service-card">
                <div class="service-bracket"></div>
                <div class="service-icon">
                    <SvgIcon {icon} size={28} />
                </div>
                <h3>{title}</h3>
                <ul>
                    { for items.iter().map(|item| html! {
                        <li key={item.to_string()}>
                            <span class="bullet"></span>
                            {*item}
                        </li>
                    }) }
                </ul>
            </div>
        </RevealOnScroll>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="services">
            <style>
                {r#"
                    .services {
                        padding: 5rem 0;
                        background: #fff;
                    }
                    .services-header {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        margin-bottom: 4rem;
                        text-align: center;
                    }
                    .services-rule {
                        height: 4px;
                        width: 64px;
                        background: #dc2626;
                        margin: 0 auto 1rem;
                        transform-origin: left;
                    }
                    .reveal--fade .services-rule { transform: scaleX(0); transition: transform 0.5s; }
                    .reveal--fade.revealed .services-rule { transform: scaleX(1); }
                    .services-header p { max-width: 42rem; }
                    .services-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1.5rem;
                    }
                    .service-card {
                        position: relative;
                        overflow: hidden;
                        height: 100%;
                        background: #fff;
                        padding: 1.5rem;
                        border: 1px solid #f1f5f9;
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                        transition: transform 0.3s, box-shadow 0.3s;
                    }
                    .service-card:hover {
                        transform: translateY(-4px);
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04);
                    }
                    .service-bracket {
                        position: absolute;
                        top: 0;
                        right: 0;
                        width: 0;
                        height: 0;
                        border-top: 3px solid #ef4444;
                        border-right: 3px solid #ef4444;
                        transition: all 0.3s;
                    }
                    .service-card:hover .service-bracket { width: 2rem; height: 2rem; }
                    .service-icon {
                        width: 3.5rem;
                        height: 3.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        margin-bottom: 1.5rem;
                        border-radius: 2px;
                        background: #eff6ff;
                        color: #2563eb;
                        transition: all 0.3s;
                    }
                    .service-card:hover .service-icon { background: #2563eb; color: #fff; }
                    .service-card h3 {
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #1e293b;
                        margin: 0 0 1rem;
                    }
                    .service-card ul {
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }
                    .service-card li {
                        display: flex;
                        align-items: flex-start;
                        gap: 0.5rem;
                        font-size: 0.875rem;
                        color: #475569;
                        margin-bottom: 0.5rem;
                    }
                    .service-card .bullet {
                        flex-shrink: 0;
                        width: 6px;
                        height: 6px;
                        margin-top: 6px;
                        border-radius: 9999px;
                        background: #f87171;
                    }
                    @media (min-width: 768px) {
                        .services-grid { grid-template-columns: repeat(2, 1fr); }
                        .service-card { padding: 2rem; }
                    }
                    @media (min-width: 1024px) {
                        .services-grid { grid-template-columns: repeat(3, 1fr); }
                    }
                "#}
            </style>
            <div class="container">
                <RevealOnScroll variant={RevealVariant::Fade} class={classes!("services-header")}>
                    <div class="services-rule"></div>
                    <h2 class="section-title">{"Our Services"}</h2>
                    <p class="section-subtitle">
                        {"Comprehensive solutions from structural steel to electrical installs."}
                    </p>
                </RevealOnScroll>

                <div class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                        <ServiceCard key={index} service={*service} {index} />
                    }) }
                </div>
            </div>
        </section>
    }
}
