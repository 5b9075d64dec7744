//! Browser implementation of [`Viewport`]

use erm_core::{SectionRect, Viewport};
use web_sys::{ScrollBehavior, ScrollToOptions, Window};

pub struct BrowserViewport {
    window: Window,
}

impl BrowserViewport {
    /// `None` outside a browser window
    pub fn current() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }
}

impl Viewport for BrowserViewport {
    fn section_rect(&self, id: &str) -> Option<SectionRect> {
        let element = self.window.document()?.get_element_by_id(id)?;
        let rect = element.get_bounding_client_rect();
        Some(SectionRect {
            top: rect.top(),
            height: rect.height(),
        })
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or(0.0)
    }

    fn smooth_scroll_to(&self, y: f64) {
        let options = ScrollToOptions::new();
        options.set_top(y);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}
