use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod events;
mod components {
    pub mod counter;
    pub mod icons;
    pub mod nav;
    pub mod reveal;
    pub mod slider;
}
mod pages {
    pub mod contact;
    pub mod featured_project;
    pub mod footer;
    pub mod hero;
    pub mod home;
    pub mod services;
    pub mod stats;
    pub mod timeline;
    pub mod trust_bar;
}

use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Home /> },
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
