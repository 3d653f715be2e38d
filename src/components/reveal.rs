use std::rc::Rc;

use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::events::ViewportObserver;

/// Visibility state of a section that animates in on first viewport entry.
/// Once revealed it stays revealed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Reveal {
    #[default]
    Pending,
    Revealed,
}

impl Reveal {
    /// Feeds one intersection change into the machine. Returns true only on
    /// the `Pending -> Revealed` transition.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        match (*self, intersecting) {
            (Reveal::Pending, true) => {
                *self = Reveal::Revealed;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(self) -> bool {
        self == Reveal::Revealed
    }
}

impl Reducible for Reveal {
    type Action = bool;

    fn reduce(self: Rc<Self>, intersecting: bool) -> Rc<Self> {
        let mut next = *self;
        if next.observe(intersecting) {
            Rc::new(next)
        } else {
            self
        }
    }
}

/// Returns whether the element behind `node` has entered the viewport yet.
#[hook]
pub fn use_reveal(node: NodeRef, root_margin: &'static str) -> bool {
    let reveal = use_reducer_eq(Reveal::default);

    {
        let dispatcher = reveal.dispatcher();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = node.cast::<Element>().and_then(|element| {
                    let on_change = {
                        let dispatcher = dispatcher.clone();
                        move |visible: bool| dispatcher.dispatch(visible)
                    };
                    match ViewportObserver::observe(&element, root_margin, on_change) {
                        Ok(observer) => Some(observer),
                        Err(err) => {
                            // Without an observer nothing would ever show up.
                            warn!("viewport observer unavailable, revealing now: {:?}", err);
                            dispatcher.dispatch(true);
                            None
                        }
                    }
                });
                move || drop(observer)
            },
            node,
        );
    }

    reveal.is_revealed()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealVariant {
    #[default]
    FadeInUp,
    SlideInLeft,
    SlideInRight,
    PanelReveal,
    Fade,
}

impl RevealVariant {
    pub fn class(self) -> &'static str {
        match self {
            RevealVariant::FadeInUp => "reveal--fade-up",
            RevealVariant::SlideInLeft => "reveal--slide-left",
            RevealVariant::SlideInRight => "reveal--slide-right",
            RevealVariant::PanelReveal => "reveal--panel",
            RevealVariant::Fade => "reveal--fade",
        }
    }

    /// Alternates slide direction for items laid out in a grid.
    pub fn alternating(index: usize) -> Self {
        if index % 2 == 0 {
            RevealVariant::SlideInLeft
        } else {
            RevealVariant::SlideInRight
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealOnScrollProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub variant: RevealVariant,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or("0px")]
    pub root_margin: &'static str,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(RevealOnScroll)]
pub fn reveal_on_scroll(props: &RevealOnScrollProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), props.root_margin);

    html! {
        <div
            ref={node}
            class={classes!(
                "reveal",
                props.variant.class(),
                revealed.then_some("revealed"),
                props.class.clone()
            )}
            style={format!("transition-delay: {}ms;", props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}

pub const REVEAL_CSS: &str = r#"
    .reveal {
        transition: opacity 0.5s cubic-bezier(0.25, 0.46, 0.45, 0.94),
                    transform 0.5s cubic-bezier(0.25, 0.46, 0.45, 0.94);
        will-change: opacity, transform;
    }
    .reveal--fade-up { opacity: 0; transform: translateY(20px); }
    .reveal--slide-left { opacity: 0; transform: translateX(-30px); }
    .reveal--slide-right { opacity: 0; transform: translateX(30px); }
    .reveal--panel {
        opacity: 0;
        transform: scale(0.96);
        transition-timing-function: cubic-bezier(0.34, 1.3, 0.64, 1);
    }
    .reveal--fade { opacity: 0; }
    .reveal.revealed {
        opacity: 1;
        transform: none;
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_pending() {
        assert_eq!(Reveal::default(), Reveal::Pending);
        assert!(!Reveal::default().is_revealed());
    }

    #[test]
    fn first_entry_reveals() {
        let mut reveal = Reveal::default();
        assert!(reveal.observe(true));
        assert!(reveal.is_revealed());
    }

    #[test]
    fn leaving_the_viewport_does_not_hide_again() {
        let mut reveal = Reveal::default();
        reveal.observe(true);
        assert!(!reveal.observe(false));
        assert!(!reveal.observe(true));
        assert_eq!(reveal, Reveal::Revealed);
    }

    #[test]
    fn exit_before_entry_stays_pending() {
        let mut reveal = Reveal::default();
        assert!(!reveal.observe(false));
        assert_eq!(reveal, Reveal::Pending);
    }

    #[test]
    fn reducer_keeps_the_same_state_when_nothing_changes() {
        let revealed = Rc::new(Reveal::Revealed);
        let next = revealed.clone().reduce(false);
        assert!(Rc::ptr_eq(&revealed, &next));

        let pending = Rc::new(Reveal::Pending);
        assert_eq!(*pending.reduce(true), Reveal::Revealed);
    }

    #[test]
    fn grid_items_alternate_direction() {
        assert_eq!(RevealVariant::alternating(0), RevealVariant::SlideInLeft);
        assert_eq!(RevealVariant::alternating(1), RevealVariant::SlideInRight);
        assert_eq!(RevealVariant::alternating(2), RevealVariant::SlideInLeft);
    }
}
