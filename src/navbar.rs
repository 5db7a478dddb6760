use crate::constants::NAV_SCROLLED_OFFSET_PX;

/// Scroll-direction driven chrome of the fixed navigation bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavBarState {
    pub scrolled: bool,
    pub visible: bool,
    pub menu_open: bool,
    prev_scroll: f64,
}

impl Default for NavBarState {
    fn default() -> Self {
        Self {
            scrolled: false,
            visible: true,
            menu_open: false,
            prev_scroll: 0.0,
        }
    }
}

impl NavBarState {
    /// Returns true when the visible chrome changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let before = (self.scrolled, self.visible);
        self.visible = self.prev_scroll > scroll_y || scroll_y < NAV_SCROLLED_OFFSET_PX;
        self.scrolled = scroll_y > NAV_SCROLLED_OFFSET_PX;
        self.prev_scroll = scroll_y;
        before != (self.scrolled, self.visible)
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Any nav link click closes the mobile menu.
    pub fn on_nav_click(&mut self) -> bool {
        std::mem::replace(&mut self.menu_open, false)
    }
}
