//! Virtualized list windowing.
//!
//! The list only materializes the cards that intersect the viewport plus an
//! overscan buffer on each side. Everything outside the window is replaced
//! by two spacers whose heights keep the scroll geometry intact.

use std::ops::Range;

use crate::types::ResolvedAffirmation;

/// Card layout measurements in CSS pixels
///
/// Mirrors the card stylesheet. Text height is estimated from the character
/// count and the available width, so long affirmations get taller cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardMetrics {
    /// Horizontal padding of the list container, both sides
    pub list_padding: f64,
    pub image_height: f64,
    /// Padding around the title, each side
    pub text_padding: f64,
    pub title_font_size: f64,
    pub title_line_height: f64,
    /// Icon button height
    pub toggle_height: f64,
    /// Vertical margin around a card, top plus bottom
    pub card_margin: f64,
    /// Description padding, top plus bottom
    pub description_padding: f64,
    pub description_heading_height: f64,
    pub body_font_size: f64,
    pub body_line_height: f64,
    /// Average glyph width as a fraction of the font size
    pub char_width_ratio: f64,
    /// Cards materialized beyond each edge of the viewport
    pub overscan: usize,
}

impl CardMetrics {
    /// Estimated height of a card at the given list width
    pub fn card_height(
        &self,
        affirmation: &ResolvedAffirmation,
        expanded: bool,
        list_width: f64,
    ) -> f64 {
        let content_width = (list_width - self.list_padding - 2.0 * self.text_padding).max(1.0);
        let title_lines = self.lines(&affirmation.text, self.title_font_size, content_width);

        let mut height = self.card_margin
            + self.image_height
            + 2.0 * self.text_padding
            + title_lines * self.title_line_height
            + self.toggle_height;

        if expanded {
            let body_lines =
                self.lines(&affirmation.description, self.body_font_size, content_width);
            height += self.description_padding
                + self.description_heading_height
                + body_lines * self.body_line_height;
        }
        height
    }

    fn lines(&self, text: &str, font_size: f64, width: f64) -> f64 {
        let text_width = text.chars().count() as f64 * font_size * self.char_width_ratio;
        (text_width / width).ceil().max(1.0)
    }
}

impl Default for CardMetrics {
    fn default() -> Self {
        Self {
            list_padding: 16.0,
            image_height: 194.0,
            text_padding: 16.0,
            title_font_size: 20.0,
            title_line_height: 28.0,
            toggle_height: 48.0,
            card_margin: 16.0,
            description_padding: 24.0,
            description_heading_height: 58.0,
            body_font_size: 16.0,
            body_line_height: 24.0,
            char_width_ratio: 0.55,
            overscan: 2,
        }
    }
}

/// Scroll position and size of the list container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll_top: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            scroll_top: 0.0,
            width,
            height,
        }
    }

    /// Apply a new container size, returning whether it changed
    pub fn resize(&mut self, width: f64, height: f64) -> bool {
        if self.width == width && self.height == height {
            return false;
        }
        self.width = width;
        self.height = height;
        true
    }

    /// Apply a new scroll offset, returning whether it changed
    pub fn scroll_to(&mut self, scroll_top: f64) -> bool {
        let scroll_top = scroll_top.max(0.0);
        if self.scroll_top == scroll_top {
            return false;
        }
        self.scroll_top = scroll_top;
        true
    }

    /// Window of cards to render at this position and size
    pub fn window(&self, heights: &[f64], overscan: usize) -> ListWindow {
        ListWindow::compute(heights, self.scroll_top, self.height, overscan)
    }
}

/// Slice of the list to materialize
#[derive(Debug, Clone, PartialEq)]
pub struct ListWindow {
    /// Indices of the cards to render
    pub range: Range<usize>,
    /// Height standing in for the cards before `range`
    pub leading_space: f64,
    /// Height standing in for the cards after `range`
    pub trailing_space: f64,
}

impl ListWindow {
    /// Window covering every item
    pub fn full(heights: &[f64]) -> Self {
        Self {
            range: 0..heights.len(),
            leading_space: 0.0,
            trailing_space: 0.0,
        }
    }

    /// Compute the window for a scroll position.
    ///
    /// At least one card is always materialized for a non-empty list, even
    /// when the viewport has no height yet.
    pub fn compute(
        heights: &[f64],
        scroll_top: f64,
        viewport_height: f64,
        overscan: usize,
    ) -> Self {
        if heights.is_empty() {
            return Self::full(heights);
        }

        let scroll_top = scroll_top.max(0.0);
        let viewport_bottom = scroll_top + viewport_height.max(0.0);

        let mut first = heights.len() - 1;
        let mut last = heights.len();
        let mut top = 0.0;
        let mut found_first = false;
        for (index, height) in heights.iter().enumerate() {
            let bottom = top + height;
            if !found_first && bottom > scroll_top {
                first = index;
                found_first = true;
            }
            if found_first && index > first && top >= viewport_bottom {
                last = index;
                break;
            }
            top = bottom;
        }

        let start = first.saturating_sub(overscan);
        let end = (last + overscan).min(heights.len());

        Self {
            range: start..end,
            leading_space: heights[..start].iter().sum(),
            trailing_space: heights[end..].iter().sum(),
        }
    }

    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.range.contains(&index)
    }
}
