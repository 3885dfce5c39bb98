//! Page-level interaction helpers: anchor scrolling, navbar scroll state and
//! closing the mobile menu on outside clicks.

use leptos::html;
use leptos::prelude::*;

use crate::core::interactions::{MobileMenu, anchor_target};

/// Smooth-scroll to the element an in-page anchor points at.
///
/// Bare `#` links and anchors whose target does not exist keep their default
/// behavior.
pub fn smooth_scroll(ev: &leptos::ev::MouseEvent, href: &str) {
    let Some(id) = anchor_target(href) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    {
        use crate::core::interactions::scroll_target_top;
        use wasm_bindgen::JsCast;
        use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let Some(target) = document.get_element_by_id(id) else {
            return;
        };

        ev.prevent_default();

        let nav_height = document
            .query_selector("nav")
            .ok()
            .flatten()
            .and_then(|nav| nav.dyn_into::<HtmlElement>().ok())
            .map(|nav| nav.offset_height() as f64)
            .unwrap_or(0.0);
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let top = scroll_target_top(target.get_bounding_client_rect().top(), scroll_y, nav_height);

        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ev, id);
    }
}

/// Whether the page has scrolled far enough for the solid navbar style
pub fn use_navbar_scrolled() -> ReadSignal<bool> {
    let (scrolled, set_scrolled) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        use crate::core::interactions::navbar_scrolled;

        let current = || {
            web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .is_some_and(navbar_scrolled)
        };
        set_scrolled.set(current());

        let handle_scroll = window_event_listener(leptos::ev::scroll, move |_| {
            let next = current();
            if scrolled.get_untracked() != next {
                set_scrolled.set(next);
            }
        });

        on_cleanup(move || drop(handle_scroll));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = set_scrolled;
    }

    scrolled
}

/// Close the mobile menu when a click lands outside both its button and panel
pub fn use_close_menu_on_outside_click(
    menu: RwSignal<MobileMenu>,
    button: NodeRef<html::Button>,
    panel: NodeRef<html::Div>,
) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let handle_click = window_event_listener(leptos::ev::click, move |ev| {
            if !menu.get_untracked().is_open() {
                return;
            }
            let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            let inside_button = button
                .get_untracked()
                .is_some_and(|b| b.contains(target.as_ref()));
            let inside_panel = panel
                .get_untracked()
                .is_some_and(|p| p.contains(target.as_ref()));
            menu.update(|m| m.click(inside_button, inside_panel));
        });

        on_cleanup(move || drop(handle_click));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (menu, button, panel);
    }
}
