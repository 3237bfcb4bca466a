//! Vertical scroll state of an option list.
//!
//! `ScrollState` tracks the offset of the list viewport, clamped to
//! `[0, max_scroll]` where `max_scroll = content_height - viewport_height`
//! (clamped to zero), and keeps a row range visible on request.

use std::ops::Range;

/// Scroll position of a vertically scrollable list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    /// Current scroll offset (always >= 0, clamped to max).
    pub offset: i32,
    /// Total height of the list content, in rows.
    pub content_height: i32,
    /// Height of the visible viewport, in rows.
    pub viewport_height: i32,
}

impl ScrollState {
    /// Create a new scroll state with zero offset.
    pub fn new(content_height: i32, viewport_height: i32) -> Self {
        Self {
            offset: 0,
            content_height,
            viewport_height,
        }
    }

    pub fn max_scroll(&self) -> i32 {
        (self.content_height - self.viewport_height).max(0)
    }

    /// Scroll to an absolute position, clamping to valid range.
    pub fn scroll_to(&mut self, y: i32) {
        self.offset = y.clamp(0, self.max_scroll());
    }

    /// Scroll by a relative delta, clamping to valid range.
    pub fn scroll_by(&mut self, dy: i32) {
        self.scroll_to(self.offset + dy);
    }

    pub fn is_scrollable(&self) -> bool {
        self.content_height > self.viewport_height
    }

    /// Content rows currently visible.
    pub fn visible_rows(&self) -> Range<i32> {
        self.offset..self.offset + self.viewport_height
    }

    /// Scroll progress as a fraction in `[0.0, 1.0]`; 0.0 when not scrollable.
    pub fn scroll_percent(&self) -> f32 {
        let max = self.max_scroll();
        if max <= 0 {
            0.0
        } else {
            self.offset as f32 / max as f32
        }
    }

    /// Scroll the minimum amount needed to show rows `top..top + height`.
    /// A row range taller than the viewport is aligned to its top.
    pub fn ensure_visible(&mut self, top: i32, height: i32) {
        let bottom = top + height.max(0);
        if top < self.offset || height > self.viewport_height {
            self.scroll_to(top);
        } else if bottom > self.offset + self.viewport_height {
            self.scroll_to(bottom - self.viewport_height);
        }
    }

    /// Update the content height and re-clamp the offset.
    pub fn set_content_height(&mut self, height: i32) {
        self.content_height = height;
        self.scroll_to(self.offset);
    }

    /// Update the viewport height and re-clamp the offset.
    pub fn set_viewport_height(&mut self, height: i32) {
        self.viewport_height = height;
        self.scroll_to(self.offset);
    }
}
