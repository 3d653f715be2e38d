use log::{debug, warn};
use yew::prelude::*;

use crate::components::icons::{Icon, SvgIcon};
use crate::config::{BRAND_FIRST, BRAND_SECOND, BRAND_TAGLINE, SCROLL_THRESHOLD};
use crate::content::{anchor_for, NAV_LINKS};
use crate::events::window_scroll;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub scrolled: bool,
}

impl ScrollState {
    pub fn from_offset(offset: f64) -> Self {
        Self {
            scrolled: offset > SCROLL_THRESHOLD,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    /// Menu and close buttons both flip the overlay.
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// Picking a link always closes the overlay.
    pub fn link_selected(self) -> Self {
        Self { open: false }
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu = use_state(MenuState::default);
    let scroll = use_state_eq(ScrollState::default);

    {
        let scroll = scroll.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = window_scroll(move |offset| {
                    scroll.set(ScrollState::from_offset(offset));
                })
                .map_err(|err| warn!("scroll listener not attached: {:?}", err))
                .ok();
                move || drop(subscription)
            },
            (),
        );
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            debug!("mobile menu open: {}", !menu.open);
            menu.set(menu.toggled());
        })
    };

    // No prevent_default here so the anchor still scrolls to its section.
    let select_link = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(menu.link_selected());
        })
    };

    let scrolled = scroll.scrolled;

    html! {
        <nav class={classes!("top-nav", scrolled.then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 50;
                        padding: 1.5rem 0;
                        background: transparent;
                        transition: all 0.3s;
                        animation: navDrop 0.6s ease-out both;
                    }
                    .top-nav.scrolled {
                        padding: 0.75rem 0;
                        background: rgba(255, 255, 255, 0.95);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
                    }
                    @keyframes navDrop {
                        from { transform: translateY(-100px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    .nav-content {
                        max-width: 1280px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        font-weight: 900;
                        font-size: 1.5rem;
                        letter-spacing: -0.05em;
                        text-decoration: none;
                    }
                    .nav-logo-mark {
                        display: none;
                        position: relative;
                        height: 2rem;
                        width: 3rem;
                        font-style: italic;
                        font-size: 2.25rem;
                    }
                    .nav-logo-mark .s {
                        position: absolute;
                        left: 0;
                        z-index: 10;
                        color: #dc2626;
                        text-shadow: 2px 2px 0 white;
                    }
                    .nav-logo-mark .e {
                        position: absolute;
                        right: 0;
                        top: 0.25rem;
                        color: #1d4ed8;
                    }
                    .nav-brand {
                        display: flex;
                        flex-direction: column;
                        line-height: 1;
                    }
                    .brand-red { color: #dc2626; }
                    .brand-blue { color: #1d4ed8; }
                    .nav-tagline {
                        font-size: 10px;
                        color: #64748b;
                        letter-spacing: 0.1em;
                        font-weight: 400;
                        text-transform: uppercase;
                    }
                    .nav-links {
                        display: none;
                        gap: 2rem;
                        align-items: center;
                    }
                    .nav-link {
                        position: relative;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #f1f5f9;
                        text-decoration: none;
                        transition: color 0.2s;
                    }
                    .top-nav.scrolled .nav-link { color: #334155; }
                    .nav-link:hover { color: #ef4444; }
                    .nav-link .measure {
                        position: absolute;
                        bottom: -4px;
                        left: 0;
                        width: 0;
                        height: 2px;
                        background: #ef4444;
                        transition: width 0.3s;
                    }
                    .nav-link:hover .measure { width: 100%; }
                    .nav-quote {
                        background: #1d4ed8;
                        color: #fff;
                        padding: 0.5rem 1.25rem;
                        border-radius: 2px;
                        font-weight: 500;
                        font-size: 0.875rem;
                        border-bottom: 2px solid #1e3a8a;
                        text-decoration: none;
                        transition: all 0.2s;
                    }
                    .nav-quote:hover { background: #2563eb; transform: scale(1.02); }
                    .nav-quote:active { transform: translateY(2px); border-bottom-width: 0; }
                    .burger-menu {
                        background: none;
                        border: none;
                        color: #fff;
                        cursor: pointer;
                    }
                    .top-nav.scrolled .burger-menu { color: #0f172a; }
                    .mobile-menu {
                        position: fixed;
                        top: 0;
                        bottom: 0;
                        right: 0;
                        width: 75%;
                        background: #0f172a;
                        color: #fff;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                        z-index: 50;
                        padding: 2rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                        animation: menuIn 0.4s both;
                    }
                    @keyframes menuIn {
                        from { transform: translateX(100%); }
                        to { transform: translateX(0); }
                    }
                    .mobile-menu-close {
                        align-self: flex-end;
                        background: none;
                        border: none;
                        color: #fff;
                        cursor: pointer;
                    }
                    .mobile-link {
                        font-size: 1.25rem;
                        font-weight: 500;
                        color: #fff;
                        text-decoration: none;
                        border-bottom: 1px solid #334155;
                        padding-bottom: 0.5rem;
                        opacity: 0;
                        animation: linkIn 0.4s forwards;
                    }
                    .mobile-link:hover { color: #ef4444; }
                    @keyframes linkIn {
                        from { opacity: 0; transform: translateX(20px); }
                        to { opacity: 1; transform: translateX(0); }
                    }
                    @media (min-width: 768px) {
                        .nav-logo-mark { display: flex; align-items: center; justify-content: center; }
                        .nav-links { display: flex; }
                        .burger-menu { display: none; }
                    }
                "#}
            </style>
            <div class="nav-content">
                <a href="#home" class="nav-logo">
                    <div class="nav-logo-mark">
                        <span class="s">{"S"}</span>
                        <span class="e">{"E"}</span>
                    </div>
                    <div class="nav-brand">
                        <div>
                            <span class="brand-red">{BRAND_FIRST}</span>
                            {" "}
                            <span class="brand-blue">{BRAND_SECOND}</span>
                        </div>
                        if scrolled {
                            <span class="nav-tagline">{BRAND_TAGLINE}</span>
                        }
                    </div>
                </a>

                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a key={link.to_string()} href={anchor_for(link)} class="nav-link">
                            {*link}
                            <span class="measure"></span>
                        </a>
                    }) }
                    <a href="#contact" class="nav-quote">{"Get Quote"}</a>
                </div>

                <button class="burger-menu" onclick={toggle_menu.clone()} aria-label="Open menu">
                    <SvgIcon icon={Icon::Menu} />
                </button>
            </div>

            if menu.open {
                <div class="mobile-menu">
                    <button class="mobile-menu-close" onclick={toggle_menu} aria-label="Close menu">
                        <SvgIcon icon={Icon::X} />
                    </button>
                    { for NAV_LINKS.iter().enumerate().map(|(idx, link)| html! {
                        <a
                            key={link.to_string()}
                            href={anchor_for(link)}
                            class="mobile-link"
                            style={format!("animation-delay: {}ms;", idx * 100)}
                            onclick={select_link.clone()}
                        >
                            {*link}
                        </a>
                    }) }
                </div>
            }
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_only_past_threshold() {
        assert!(!ScrollState::from_offset(0.0).scrolled);
        assert!(!ScrollState::from_offset(50.0).scrolled);
        assert!(ScrollState::from_offset(50.5).scrolled);
        assert!(ScrollState::from_offset(1200.0).scrolled);
    }

    #[test]
    fn scrolling_back_up_clears_scrolled() {
        let offsets = [0.0, 30.0, 51.0, 400.0, 49.0, 10.0];
        let states: Vec<bool> = offsets
            .iter()
            .map(|y| ScrollState::from_offset(*y).scrolled)
            .collect();
        assert_eq!(states, vec![false, false, true, true, false, false]);
    }

    #[test]
    fn each_tap_flips_the_menu_once() {
        let menu = MenuState::default();
        assert!(!menu.open);
        let menu = menu.toggled();
        assert!(menu.open);
        let menu = menu.toggled();
        assert!(!menu.open);
    }

    #[test]
    fn selecting_a_link_closes_the_menu() {
        let open = MenuState::default().toggled();
        assert!(!open.link_selected().open);
        assert!(!MenuState::default().link_selected().open);
    }
}
