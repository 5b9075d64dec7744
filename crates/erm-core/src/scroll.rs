//! Scroll-to-anchor
//!
//! Navbar links scroll their section to the middle of the viewport, except
//! for a few anchors that should sit flush with the top.

use std::collections::HashSet;

/// Bounding box of a section, relative to the viewport (as `getBoundingClientRect` reports it)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub height: f64,
}

/// Which anchors align to the top instead of the center
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnchorPolicy {
    top_aligned: HashSet<String>,
}

impl AnchorPolicy {
    pub fn new<I, S>(top_aligned: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            top_aligned: top_aligned.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_top_aligned(&self, id: &str) -> bool {
        self.top_aligned.contains(id)
    }
}

/// Document scroll offset that brings the section into place. Never negative.
pub fn target_scroll_y(
    rect: SectionRect,
    viewport_height: f64,
    scroll_y: f64,
    policy: &AnchorPolicy,
    id: &str,
) -> f64 {
    let document_top = scroll_y + rect.top;
    let target = if policy.is_top_aligned(id) {
        document_top
    } else {
        let center = document_top + rect.height / 2.0;
        center - viewport_height / 2.0
    };
    target.max(0.0)
}

/// The page as seen by the navbar
pub trait Viewport {
    /// Bounding box of the element with this id, if there is one
    fn section_rect(&self, id: &str) -> Option<SectionRect>;

    /// Current vertical scroll offset
    fn scroll_y(&self) -> f64;

    /// Height of the visible area
    fn viewport_height(&self) -> f64;

    /// Start a smooth scroll to `y`
    fn smooth_scroll_to(&self, y: f64);
}

/// Scroll to the section named `id`.
///
/// Returns the target offset, or `None` (and leaves the page alone) when no
/// such section exists.
pub fn scroll_to_anchor<V>(viewport: &V, policy: &AnchorPolicy, id: &str) -> Option<f64>
where
    V: Viewport + ?Sized,
{
    let Some(rect) = viewport.section_rect(id) else {
        tracing::debug!(anchor = id, "scroll target not found");
        return None;
    };

    let y = target_scroll_y(rect, viewport.viewport_height(), viewport.scroll_y(), policy, id);
    viewport.smooth_scroll_to(y);
    Some(y)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::collections::HashMap;

    use super::*;

    /// Sections stored in document coordinates; rects are derived from the scroll offset.
    struct FakeViewport {
        sections: HashMap<&'static str, (f64, f64)>,
        height: f64,
        scroll: Cell<f64>,
        scrolls: Cell<usize>,
    }

    impl FakeViewport {
        fn new(height: f64, scroll: f64) -> Self {
            Self {
                sections: HashMap::from([
                    ("hero", (0.0, 400.0)),
                    ("our-agents", (900.0, 300.0)),
                    ("features", (1500.0, 1200.0)),
                ]),
                height,
                scroll: Cell::new(scroll),
                scrolls: Cell::new(0),
            }
        }
    }

    impl Viewport for FakeViewport {
        fn section_rect(&self, id: &str) -> Option<SectionRect> {
            self.sections.get(id).map(|&(top, height)| SectionRect {
                top: top - self.scroll.get(),
                height,
            })
        }

        fn scroll_y(&self) -> f64 {
            self.scroll.get()
        }

        fn viewport_height(&self) -> f64 {
            self.height
        }

        fn smooth_scroll_to(&self, y: f64) {
            self.scroll.set(y);
            self.scrolls.set(self.scrolls.get() + 1);
        }
    }

    fn policy() -> AnchorPolicy {
        AnchorPolicy::new(["features"])
    }

    #[test]
    fn test_centered_target() {
        let rect = SectionRect { top: 100.0, height: 300.0 };
        // center at 250 + 250 = 500 in document space; half viewport is 200
        let y = target_scroll_y(rect, 400.0, 250.0, &policy(), "our-agents");
        assert!((y - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_top_aligned_target() {
        let rect = SectionRect { top: -120.0, height: 900.0 };
        let y = target_scroll_y(rect, 800.0, 1000.0, &policy(), "features");
        assert!((y - 880.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_target_never_negative() {
        let rect = SectionRect { top: 10.0, height: 50.0 };
        assert!(target_scroll_y(rect, 1000.0, 0.0, &policy(), "hero") >= 0.0);
        assert!(target_scroll_y(SectionRect { top: -50.0, height: 10.0 }, 100.0, 0.0, &policy(), "features") >= 0.0);
    }

    #[test]
    fn test_scroll_centers_section() {
        let viewport = FakeViewport::new(700.0, 0.0);

        let y = scroll_to_anchor(&viewport, &policy(), "our-agents").unwrap();

        let rect = viewport.section_rect("our-agents").unwrap();
        let center_in_viewport = rect.top + rect.height / 2.0;
        assert!((center_in_viewport - viewport.viewport_height() / 2.0).abs() <= 1.0);
        assert!((viewport.scroll_y() - y).abs() < f64::EPSILON);
    }

    #[test]
    fn test_scroll_top_aligns_features() {
        let viewport = FakeViewport::new(700.0, 2000.0);

        scroll_to_anchor(&viewport, &policy(), "features").unwrap();

        let rect = viewport.section_rect("features").unwrap();
        assert!(rect.top.abs() <= 1.0);
    }

    #[test]
    fn test_scroll_near_top_clamps() {
        let viewport = FakeViewport::new(1200.0, 300.0);

        let y = scroll_to_anchor(&viewport, &policy(), "hero").unwrap();

        assert!(y.abs() < f64::EPSILON);
        assert!(viewport.scroll_y() >= 0.0);
    }

    #[test]
    fn test_missing_anchor_is_noop() {
        let viewport = FakeViewport::new(700.0, 420.0);

        assert!(scroll_to_anchor(&viewport, &policy(), "start-slack").is_none());
        assert!((viewport.scroll_y() - 420.0).abs() < f64::EPSILON);
        assert_eq!(viewport.scrolls.get(), 0);
    }
}
