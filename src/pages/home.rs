use log::info;
use yew::prelude::*;

use crate::components::nav::Navbar;
use crate::components::reveal::REVEAL_CSS;
use crate::pages::{
    contact::Contact, featured_project::FeaturedProject, footer::Footer, hero::Hero,
    services::Services, stats::Stats, timeline::Timeline, trust_bar::TrustBar,
};

const BASE_CSS: &str = r#"
    *, *::before, *::after { box-sizing: border-box; }
    html { scroll-behavior: smooth; }
    body {
        margin: 0;
        font-family: ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        background: #f8fafc;
        color: #0f172a;
    }
    ::selection { background: #bfdbfe; color: #1e3a8a; }
    .container {
        max-width: 1280px;
        margin: 0 auto;
        padding: 0 1.5rem;
    }
    .section-title {
        font-size: 1.875rem;
        font-weight: 700;
        color: #0f172a;
        margin: 0;
    }
    .section-subtitle {
        color: #64748b;
        margin-top: 1rem;
    }
    @media (min-width: 768px) {
        .section-title { font-size: 2.25rem; }
    }
"#;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            info!("Rendering Home page");
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="site">
            <style>{BASE_CSS}{REVEAL_CSS}</style>
            <Navbar />
            <Hero />
            <TrustBar />
            <Services />
            <FeaturedProject />
            <Stats />
            <Timeline />
            <Contact />
            <Footer />
        </div>
    }
}
