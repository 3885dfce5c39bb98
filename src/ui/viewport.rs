//! Scroll reveal and counter animations
//!
//! Wires `IntersectionObserver`s to every `.scroll-reveal` and `[data-counter]`
//! element once the page has hydrated. Elements are keyed by their position in
//! the initial query, and every effect passes through a `OneShot` latch.

use leptos::prelude::*;

/// Start observing reveal and counter elements after hydration
pub fn use_viewport_reactor() {
    Effect::new(move |_| {
        #[cfg(feature = "hydrate")]
        {
            dom::watch_reveal(dom::query_all(crate::core::viewport::REVEAL_SELECTOR));
            dom::watch_counters(dom::query_all(crate::core::viewport::COUNTER_SELECTOR));
        }
    });
}

#[cfg(feature = "hydrate")]
mod dom {
    use std::cell::RefCell;
    use std::rc::Rc;

    use leptos::logging::debug_warn;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    };

    use crate::core::counter::{COUNTER_ATTR, CounterAnimation, CounterSpec, SUFFIX_ATTR};
    use crate::core::viewport::{
        COUNTER_OBSERVER, Intersection, ObserverOptions, OneShot, REVEAL_OBSERVER, REVEALED_CLASS,
    };

    pub fn query_all(selector: &str) -> Vec<Element> {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Vec::new();
        };
        let Ok(nodes) = document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    /// Add the `revealed` class to each element the first time it scrolls into view
    pub fn watch_reveal(elements: Vec<Element>) {
        observe_once(elements, REVEAL_OBSERVER, |element| {
            let _ = element.class_list().add_1(REVEALED_CLASS);
        });
    }

    /// Count each counter up the first time it is half visible
    pub fn watch_counters(elements: Vec<Element>) {
        observe_once(elements, COUNTER_OBSERVER, start_counter);
    }

    fn observe_once(
        elements: Vec<Element>,
        options: ObserverOptions,
        on_first: impl Fn(&Element) + 'static,
    ) {
        if elements.is_empty() {
            return;
        }

        let targets = elements.clone();
        let mut latch = OneShot::new(options);
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let Some(key) = targets.iter().position(|el| *el == target) else {
                        continue;
                    };
                    let hit = Intersection {
                        key,
                        is_intersecting: entry.is_intersecting(),
                    };
                    if latch.observe(&hit) {
                        on_first(&target);
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(options.root_margin);

        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                Ok(observer) => observer,
                Err(e) => {
                    debug_warn!("IntersectionObserver unavailable: {:?}", e);
                    return;
                }
            };
        for element in &elements {
            observer.observe(element);
        }

        // The observer lives as long as the page
        callback.forget();
    }

    fn start_counter(element: &Element) {
        let spec = CounterSpec::parse(
            element.get_attribute(COUNTER_ATTR).as_deref(),
            element.get_attribute(SUFFIX_ATTR).as_deref(),
        );
        let Some(spec) = spec else {
            debug_warn!(
                "Skipping counter with invalid target {:?}",
                element.get_attribute(COUNTER_ATTR)
            );
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };

        let now = window.performance().map(|p| p.now()).unwrap_or_default();
        let animation = CounterAnimation::start(spec, now);
        let element = element.clone();

        let frame_closure = Rc::new(RefCell::new(None::<Closure<dyn FnMut(f64)>>));
        let next_frame = frame_closure.clone();

        *frame_closure.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
            let frame = animation.frame(timestamp);
            element.set_text_content(Some(&frame.text));
            if !frame.finished {
                request_frame(&next_frame);
            }
        }));

        request_frame(&frame_closure);

        // Note: the closure keeps itself alive through the Rc cycle, one per counter
    }

    fn request_frame(closure: &Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(closure) = closure.borrow().as_ref() {
            let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        }
    }
}
