use yew::prelude::*;

use crate::components::icons::{Icon, SvgIcon};
use crate::components::reveal::{RevealOnScroll, RevealVariant};
use crate::content::TRUST_ITEMS;

#[function_component(TrustBar)]
pub fn trust_bar() -> Html {
    html! {
        <div class="trust-bar">
            <style>
                {r#"
                    .trust-bar {
                        background: #f8fafc;
                        padding: 2.5rem 0;
                        border-bottom: 1px solid #e2e8f0;
                    }
                    .trust-bar .container { overflow: hidden; }
                    .trust-items {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        align-items: center;
                        gap: 2rem;
                        opacity: 0.6;
                        filter: grayscale(100%);
                        transition: filter 0.5s;
                    }
                    .trust-items:hover { filter: grayscale(0); }
                    .trust-item {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-weight: 600;
                        color: #0f172a;
                    }
                    .trust-item .icon { color: #2563eb; }
                    @media (min-width: 768px) {
                        .trust-items { justify-content: space-between; }
                    }
                "#}
            </style>
            <div class="container">
                <RevealOnScroll variant={RevealVariant::SlideInLeft}>
                    <div class="trust-items">
                        { for TRUST_ITEMS.iter().map(|item| html! {
                            <div key={item.to_string()} class="trust-item">
                                <SvgIcon icon={Icon::ShieldCheck} />
                                <span>{*item}</span>
                            </div>
                        }) }
                    </div>
                </RevealOnScroll>
            </div>
        </div>
    }
}
