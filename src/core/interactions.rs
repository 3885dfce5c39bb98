//! Small page interactions: mobile menu, anchor scrolling, stack hover, navbar.

/// Gap kept between the fixed nav and a scrolled-to section
pub const SCROLL_OFFSET_PX: f64 = 20.0;

/// Scroll distance after which the navbar gets its solid style
pub const NAVBAR_SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Delay between consecutive stack layer entrance animations
pub const STACK_STAGGER_SECS: f64 = 0.1;

/// Mobile navigation menu state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Menu button pressed
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A menu link was followed, or the user clicked elsewhere
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Document-level click; closes the menu unless it hit the button or the menu
    pub fn click(&mut self, inside_button: bool, inside_menu: bool) {
        if !inside_button && !inside_menu {
            self.close();
        }
    }

    /// Value for the button's `aria-expanded`
    pub fn aria_expanded(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }
}

/// Element id targeted by an in-page anchor, `None` for bare `#` or other links
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document offset to scroll to so that a target sits just below the nav
pub fn scroll_target_top(target_top: f64, scroll_y: f64, nav_height: f64) -> f64 {
    target_top + scroll_y - nav_height - SCROLL_OFFSET_PX
}

/// Whether the navbar should show its scrolled style
pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLL_THRESHOLD_PX
}

/// Inline style values of one stack layer
#[derive(Debug, Clone, PartialEq)]
pub struct LayerStyle {
    pub opacity: &'static str,
    pub transform: &'static str,
    pub animation_delay: String,
}

impl LayerStyle {
    /// Style of layer `index` given the hovered layer, if any.
    ///
    /// Every layer except the hovered one dims and tilts back.
    pub fn for_layer(index: usize, hovered: Option<usize>) -> Self {
        let dimmed = hovered.is_some_and(|h| h != index);
        Self {
            opacity: if dimmed { "0.6" } else { "1" },
            transform: if dimmed { "rotateX(10deg) scale(0.98)" } else { "" },
            animation_delay: format!("{:.1}s", index as f64 * STACK_STAGGER_SECS),
        }
    }

    /// Value for the `style` attribute
    pub fn to_css(&self) -> String {
        let mut css = format!(
            "opacity: {}; animation-delay: {};",
            self.opacity, self.animation_delay
        );
        if !self.transform.is_empty() {
            css.push_str(&format!(" transform: {};", self.transform));
        }
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile_menu_toggle() {
        let mut menu = MobileMenu::default();
        assert!(!menu.is_open());
        assert_eq!(menu.aria_expanded(), "false");

        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.aria_expanded(), "true");

        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_mobile_menu_outside_click() {
        let mut menu = MobileMenu::default();
        menu.toggle();

        menu.click(true, false);
        assert!(menu.is_open());
        menu.click(false, true);
        assert!(menu.is_open());

        menu.click(false, false);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#waitlist"), Some("waitlist"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/pricing"), None);
        assert_eq!(anchor_target("https://st4ck.io/#faq"), None);
    }

    #[test]
    fn test_scroll_target_top() {
        // Section 300px below the viewport top, page scrolled 1000px, 64px nav
        assert_eq!(scroll_target_top(300.0, 1000.0, 64.0), 1216.0);
        assert_eq!(scroll_target_top(0.0, 0.0, 0.0), -20.0);
    }

    #[test]
    fn test_navbar_threshold() {
        assert!(!navbar_scrolled(0.0));
        assert!(!navbar_scrolled(50.0));
        assert!(navbar_scrolled(50.5));
    }

    #[test]
    fn test_layer_styles() {
        let idle = LayerStyle::for_layer(2, None);
        assert_eq!(idle.opacity, "1");
        assert_eq!(idle.transform, "");
        assert_eq!(idle.animation_delay, "0.2s");

        let hovered = LayerStyle::for_layer(1, Some(1));
        assert_eq!(hovered.opacity, "1");
        assert_eq!(hovered.transform, "");

        let other = LayerStyle::for_layer(0, Some(1));
        assert_eq!(other.opacity, "0.6");
        assert_eq!(other.transform, "rotateX(10deg) scale(0.98)");
        assert_eq!(other.animation_delay, "0.0s");
        assert!(other.to_css().contains("transform: rotateX(10deg) scale(0.98);"));
        assert!(!idle.to_css().contains("transform"));
    }
}
