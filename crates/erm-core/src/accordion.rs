//! Agent accordion state: at most one panel open.

/// Which panel, if any, is expanded
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub const fn new() -> Self {
        Self { open: None }
    }

    pub const fn open_index(self) -> Option<usize> {
        self.open
    }

    pub fn is_open(self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Header click on panel `index`
    #[must_use]
    pub fn toggle(self, index: usize) -> Self {
        let open = if self.is_open(index) { None } else { Some(index) };
        Self { open }
    }
}
