//! Scrollable message pane
//!
//! Holds rendered lines and a viewport. Replacing the content keeps the view
//! pinned to the bottom when it was at (or within one line of) the bottom, or
//! when it had never been scrolled.

/// Line-based scroll model for the chat view
#[derive(Debug, Clone)]
pub struct MessagePane {
    lines: Vec<String>,
    scroll_top: usize,
    viewport_height: usize,
}

impl MessagePane {
    pub fn new(viewport_height: usize) -> Self {
        Self {
            lines: Vec::new(),
            scroll_top: 0,
            viewport_height: viewport_height.max(1),
        }
    }

    pub fn scroll_top(&self) -> usize {
        self.scroll_top
    }

    pub fn content_height(&self) -> usize {
        self.lines.len()
    }

    /// Largest valid `scroll_top`
    pub fn max_scroll(&self) -> usize {
        self.content_height().saturating_sub(self.viewport_height)
    }

    /// At the bottom, with one line of slack
    pub fn is_at_bottom(&self) -> bool {
        self.max_scroll() <= self.scroll_top + 1
    }

    /// Replace the content. Returns `false` if the lines were unchanged.
    pub fn replace(&mut self, lines: Vec<String>) -> bool {
        if lines == self.lines {
            return false;
        }

        let pin_to_bottom = self.is_at_bottom() || self.scroll_top == 0;
        self.lines = lines;

        if pin_to_bottom {
            self.scroll_to_bottom();
        } else {
            self.scroll_top = self.scroll_top.min(self.max_scroll());
        }
        true
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_top = self.max_scroll();
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_top = self.scroll_top.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_top = self.scroll_top.saturating_add(lines).min(self.max_scroll());
    }

    /// Lines currently inside the viewport
    pub fn visible(&self) -> &[String] {
        let end = self
            .scroll_top
            .saturating_add(self.viewport_height)
            .min(self.lines.len());
        &self.lines[self.scroll_top.min(end)..end]
    }
}
