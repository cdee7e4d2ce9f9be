// Collapsible navigation menu state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    pub open: bool,
}

impl NavMenu {
    pub const CLOSED_GLYPH: &'static str = "☰";
    pub const OPEN_GLYPH: &'static str = "✕";

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Returns true if the menu was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    pub fn glyph(&self) -> &'static str {
        if self.open {
            Self::OPEN_GLYPH
        } else {
            Self::CLOSED_GLYPH
        }
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }
}

/// The toggle button is only shown at or below the mobile breakpoint.
pub fn toggle_visible(viewport_width: f64, breakpoint_px: f64) -> bool {
    viewport_width <= breakpoint_px
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_glyph_and_aria() {
        let mut nav = NavMenu::default();
        assert_eq!((nav.glyph(), nav.aria_expanded()), ("☰", "false"));
        nav.toggle();
        assert_eq!((nav.glyph(), nav.aria_expanded()), ("✕", "true"));
        nav.toggle();
        assert!(!nav.open);
    }

    #[test]
    fn close_reports_previous_state() {
        let mut nav = NavMenu { open: true };
        assert!(nav.close());
        assert!(!nav.close());
        assert_eq!(nav.glyph(), NavMenu::CLOSED_GLYPH);
    }

    #[test]
    fn toggle_hidden_above_breakpoint() {
        assert!(toggle_visible(768.0, 768.0));
        assert!(toggle_visible(375.0, 768.0));
        assert!(!toggle_visible(1024.0, 768.0));
    }
}
