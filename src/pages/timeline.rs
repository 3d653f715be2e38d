use yew::prelude::*;

use crate::components::reveal::{use_reveal, RevealOnScroll, RevealVariant};
use crate::content::PROCESS_STEPS;

const STEP_DELAY_MS: u32 = 200;

#[function_component(Timeline)]
pub fn timeline() -> Html {
    let track = use_node_ref();
    let drawn = use_reveal(track.clone(), "0px");

    html! {
        <section id="process" class="timeline">
            <style>
                {r#"
                    .timeline {
                        padding: 5rem 0;
                        background: #fff;
                    }
                    .timeline .section-title {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .timeline-track {
                        position: relative;
                        max-width: 56rem;
                        margin: 0 auto;
                    }
                    .timeline-line {
                        position: absolute;
                        top: 0;
                        left: 19px;
                        width: 2px;
                        height: 0;
                        background: #e2e8f0;
                        transform: translateX(-50%);
                        transition: height 1.5s linear;
                    }
                    .timeline-line.drawn { height: 100%; }
                    .timeline-step {
                        position: relative;
                        z-index: 10;
                        display: flex;
                        align-items: flex-start;
                        gap: 2rem;
                        margin-bottom: 3rem;
                    }
                    .timeline-body {
                        flex: 1;
                        padding-left: 3rem;
                    }
                    .timeline-body h3 {
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #0f172a;
                        margin: 0;
                    }
                    .timeline-body p {
                        color: #64748b;
                        margin: 0.5rem 0 0;
                    }
                    .timeline-node {
                        position: absolute;
                        left: 0;
                        width: 2.5rem;
                        height: 2.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: #fff;
                        border: 4px solid #3b82f6;
                        border-radius: 9999px;
                        font-size: 0.75rem;
                        font-weight: 700;
                        color: #0f172a;
                        box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
                        transform: translateX(-2px);
                    }
                    .timeline-spacer { display: none; }
                    @media (min-width: 768px) {
                        .timeline-line { left: 50%; }
                        .timeline-step { align-items: center; }
                        .timeline-step.even { flex-direction: row; }
                        .timeline-step.odd { flex-direction: row-reverse; }
                        .timeline-step.even .timeline-body { text-align: right; }
                        .timeline-step.odd .timeline-body { text-align: left; }
                        .timeline-body { padding-left: 0; }
                        .timeline-node { left: 50%; transform: translateX(-50%); }
                        .timeline-spacer { display: block; flex: 1; }
                    }
                "#}
            </style>
            <div class="container">
                <h2 class="section-title">{"How We Work"}</h2>

                <div ref={track} class="timeline-track">
                    <div class={classes!("timeline-line", drawn.then_some("drawn"))}></div>

                    { for PROCESS_STEPS.iter().enumerate().map(|(i, step)| html! {
                        <RevealOnScroll
                            key={step.num.to_string()}
                            variant={RevealVariant::FadeInUp}
                            delay_ms={i as u32 * STEP_DELAY_MS}
                            root_margin="-100px"
                        >
                            <div class={classes!("timeline-step", if i % 2 == 0 { "even" } else { "odd" })}>
                                <div class="timeline-body">
                                    <h3>{step.title}</h3>
                                    <p>{step.desc}</p>
                                </div>
                                <div class="timeline-node">{step.num}</div>
                                <div class="timeline-spacer"></div>
                            </div>
                        </RevealOnScroll>
                    }) }
                </div>
            </div>
        </section>
    }
}
