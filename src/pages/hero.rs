use yew::prelude::*;

use crate::components::icons::{Icon, SvgIcon};
use crate::config::COMPANY_NAME;
use crate::content::HERO_IMAGE;

#[function_component(Hero)]
pub fn hero() -> Html {
    let background = format!("background-image: url('{}');", HERO_IMAGE);

    html! {
        <header id="home" class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        height: 100vh;
                        width: 100%;
                        overflow: hidden;
                        background: #0f172a;
                        display: flex;
                        align-items: center;
                    }
                    .hero-mask {
                        position: absolute;
                        inset: 0;
                        animation: maskReveal 1.4s cubic-bezier(0.25, 0.46, 0.45, 0.94) 0.2s both;
                    }
                    @keyframes maskReveal {
                        from { clip-path: polygon(0 0, 0 0, 0 100%, 0% 100%); }
                        to { clip-path: polygon(0 0, 100% 0, 100% 100%, 0% 100%); }
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                        background-size: cover;
                        background-position: center;
                    }
                    .hero-overlay {
                        position: absolute;
                        inset: 0;
                        background: rgba(15, 23, 42, 0.6);
                    }
                    .hero-grid {
                        position: absolute;
                        inset: 0;
                        opacity: 0.2;
                        pointer-events: none;
                        animation: fadeIn 1s both;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        color: #fff;
                        margin-top: 4rem;
                    }
                    .hero-copy { max-width: 48rem; }
                    .hero-accent {
                        height: 4px;
                        width: 0;
                        background: #dc2626;
                        margin-bottom: 1.5rem;
                        animation: drawLine 0.8s 1s forwards;
                    }
                    @keyframes drawLine {
                        to { width: 96px; }
                    }
                    .hero h1 {
                        font-size: 3rem;
                        font-weight: 700;
                        line-height: 1.15;
                        margin: 0 0 1.5rem;
                    }
                    .hero h1 .highlight { color: #3b82f6; }
                    .hero-subtitle {
                        font-size: 1.125rem;
                        color: #cbd5e1;
                        margin: 0 0 2rem;
                        max-width: 36rem;
                    }
                    .hero-stagger > * {
                        opacity: 0;
                        animation: fadeInUp 0.5s cubic-bezier(0.25, 0.46, 0.45, 0.94) forwards;
                    }
                    .hero-stagger > *:nth-child(2) { animation-delay: 0.2s; }
                    .hero-stagger > *:nth-child(3) { animation-delay: 0.4s; }
                    .hero-stagger > *:nth-child(4) { animation-delay: 0.6s; }
                    @keyframes fadeInUp {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes fadeIn {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    .hero-cta-group {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                    }
                    .hero-cta {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 1rem 2rem;
                        border-radius: 2px;
                        font-weight: 700;
                        letter-spacing: 0.025em;
                        color: #fff;
                        text-decoration: none;
                        transition: all 0.2s;
                    }
                    .hero-cta:hover { transform: scale(1.05); }
                    .hero-cta:active { transform: scale(0.95); }
                    .hero-cta.primary {
                        background: #dc2626;
                        border-bottom: 4px solid #991b1b;
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    }
                    .hero-cta.primary:hover { background: #ef4444; }
                    .hero-cta.secondary {
                        background: transparent;
                        border: 1px solid rgba(255, 255, 255, 0.3);
                        backdrop-filter: blur(4px);
                    }
                    .hero-cta.secondary:hover { background: rgba(255, 255, 255, 0.1); }
                    .scroll-hint {
                        position: absolute;
                        bottom: 2.5rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.5rem;
                        color: rgba(255, 255, 255, 0.5);
                        opacity: 0;
                        animation: fadeIn 0.5s 2s forwards, bob 2s 2s infinite;
                    }
                    .scroll-hint span {
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                    }
                    .scroll-hint .line {
                        width: 1px;
                        height: 2rem;
                        background: rgba(59, 130, 246, 0.5);
                    }
                    @keyframes bob {
                        0%, 100% { margin-bottom: 0; }
                        50% { margin-bottom: -10px; }
                    }
                    @media (min-width: 768px) {
                        .hero h1 { font-size: 4.5rem; }
                        .hero-subtitle { font-size: 1.25rem; }
                    }
                "#}
            </style>

            <div class="hero-mask">
                <div class="hero-background" style={background}></div>
                <div class="hero-overlay"></div>
            </div>

            <div class="hero-grid">
                <svg width="100%" height="100%" xmlns="http://www.w3.org/2000/svg">
                    <defs>
                        <pattern id="grid" width="40" height="40" patternUnits="userSpaceOnUse">
                            <path d="M 40 0 L 0 0 0 40" fill="none" stroke="white" stroke-width="0.5" />
                        </pattern>
                    </defs>
                    <rect width="100%" height="100%" fill="url(#grid)" />
                </svg>
            </div>

            <div class="container hero-content">
                <div class="hero-copy hero-stagger">
                    <div class="hero-accent"></div>
                    <h1>
                        {"We Build With"}
                        <br />
                        <span class="highlight">{"Precision & Power"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        { format!("{}. From demolition to finishing touches, we deliver excellence in every square meter.", COMPANY_NAME) }
                    </p>
                    <div class="hero-cta-group">
                        <a href="#contact" class="hero-cta primary">
                            {"Start Your Project"}
                            <SvgIcon icon={Icon::ArrowRight} size={18} />
                        </a>
                        <a href="#services" class="hero-cta secondary">
                            {"View Services"}
                        </a>
                    </div>
                </div>
            </div>

            <div class="scroll-hint">
                <span>{"Scroll"}</span>
                <div class="line"></div>
            </div>
        </header>
    }
}
