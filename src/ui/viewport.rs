//! Scroll position of the page body.
//!
//! The [`Viewport`] tracks which rows of the (possibly taller than the
//! screen) page body are visible and handles all scroll operations.

use std::ops::Range;

/// Manages the visible portion of the page body.
///
/// # Example
///
/// ```
/// use cochl_ds::ui::viewport::Viewport;
///
/// let mut vp = Viewport::new(80, 24, 100);
/// assert_eq!(vp.visible_range(), 0..24);
///
/// vp.reveal(40, 8);
/// assert_eq!(vp.visible_range(), 24..48);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    width: u16,
    height: u16,
    offset: usize,
    total_rows: usize,
}

impl Viewport {
    /// Create a viewport `height` rows tall over a body of `total_rows`.
    pub const fn new(width: u16, height: u16, total_rows: usize) -> Self {
        Self {
            width,
            height,
            offset: 0,
            total_rows,
        }
    }

    /// First visible row.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn width(&self) -> u16 {
        self.width
    }

    pub const fn height(&self) -> u16 {
        self.height
    }

    pub const fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// Range of visible rows, clamped to the body.
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.offset + self.height as usize).min(self.total_rows);
        self.offset..end
    }

    /// Scroll percentage (0-100). A body that fits on screen is at 100.
    pub fn scroll_percent(&self) -> u8 {
        let max_offset = self.max_offset();
        if max_offset == 0 {
            return 100;
        }
        // Percentage value always 0-100
        #[allow(
            clippy::cast_precision_loss,
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss
        )]
        {
            ((self.offset as f64 / max_offset as f64) * 100.0).round() as u8
        }
    }

    pub const fn can_scroll_up(&self) -> bool {
        self.offset > 0
    }

    pub const fn can_scroll_down(&self) -> bool {
        self.offset < self.max_offset()
    }

    pub const fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    pub const fn page_up(&mut self) {
        self.scroll_up(self.height as usize);
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.height as usize);
    }

    pub const fn go_to_top(&mut self) {
        self.offset = 0;
    }

    /// Scroll the least amount needed to show rows `top..top + rows`.
    ///
    /// When the span is taller than the viewport its top row wins.
    pub fn reveal(&mut self, top: usize, rows: usize) {
        let height = self.height as usize;
        let bottom = top + rows;
        if top < self.offset || rows > height {
            self.offset = top;
        } else if bottom > self.offset + height {
            self.offset = bottom - height;
        }
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Update the body height (after the page or its layout changed).
    pub fn set_total_rows(&mut self, total: usize) {
        self.total_rows = total;
        self.offset = self.offset.min(self.max_offset());
    }

    const fn max_offset(&self) -> usize {
        self.total_rows.saturating_sub(self.height as usize)
    }
}
