//! DOM subscriptions owned by the component that created them.
//!
//! Each type registers on construction and deregisters on `Drop`, so a
//! component only has to hold the value for as long as it is mounted and hand
//! it to the effect destructor.

use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{
    Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

pub struct EventSubscription {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventSubscription {
    pub fn subscribe<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        debug!("subscribed to {}", event);
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        debug!("unsubscribed from {}", self.event);
    }
}

/// Calls `handler` with the window's vertical scroll offset on every scroll
/// event, and once immediately so the initial state is correct.
pub fn window_scroll<F>(mut handler: F) -> Result<EventSubscription, JsValue>
where
    F: FnMut(f64) + 'static,
{
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    handler(window.scroll_y().unwrap_or(0.0));

    let win = window.clone();
    EventSubscription::subscribe(&window, "scroll", move |_| {
        if let Ok(offset) = win.scroll_y() {
            handler(offset);
        }
    })
}

/// Watches a single element for viewport entry and exit.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array)>,
}

impl ViewportObserver {
    /// `root_margin` uses CSS margin syntax; a negative margin such as
    /// `"-100px"` means the element has to be that far inside the viewport
    /// before it counts as visible.
    pub fn observe<F>(element: &Element, root_margin: &str, mut handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(bool) + 'static,
    {
        let callback = Closure::<dyn FnMut(Array)>::new(move |entries: Array| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    handler(entry.is_intersecting());
                }
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_root_margin(root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
