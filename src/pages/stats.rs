use yew::prelude::*;

use crate::components::counter::Odometer;
use crate::components::reveal::{RevealOnScroll, RevealVariant};
use crate::content::STATS;

#[function_component(Stats)]
pub fn stats() -> Html {
    html! {
        <section class="stats">
            <style>
                {r#"
                    .stats {
                        position: relative;
                        overflow: hidden;
                        padding: 4rem 0;
                        background: #0f172a;
                    }
                    .stats-lines {
                        position: absolute;
                        inset: 0;
                        opacity: 0.1;
                        background-image: linear-gradient(90deg, transparent 49%, #ffffff 49%, #ffffff 51%, transparent 51%);
                        background-size: 100px 100%;
                    }
                    .stats .container {
                        position: relative;
                        z-index: 10;
                    }
                    .stats-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1rem;
                    }
                    .odometer {
                        text-align: center;
                        padding: 1.5rem;
                        border-right: 1px solid rgba(51, 65, 85, 0.5);
                    }
                    .stats-grid > .odometer:last-child { border-right: 0; }
                    .odometer-value {
                        font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
                        font-size: 2.25rem;
                        font-weight: 700;
                        color: #fff;
                        margin-bottom: 0.5rem;
                    }
                    .odometer-label {
                        color: #3b82f6;
                        font-size: 0.875rem;
                        font-weight: 600;
                        letter-spacing: 0.05em;
                        text-transform: uppercase;
                    }
                    @media (min-width: 768px) {
                        .stats-grid { grid-template-columns: repeat(4, 1fr); }
                        .odometer-value { font-size: 3rem; }
                    }
                "#}
            </style>
            <div class="stats-lines"></div>
            <div class="container">
                <RevealOnScroll variant={RevealVariant::PanelReveal} class={classes!("stats-grid")}>
                    { for STATS.iter().map(|stat| html! {
                        <Odometer key={stat.label.to_string()} value={stat.value} label={stat.label} />
                    }) }
                </RevealOnScroll>
            </div>
        </section>
    }
}
