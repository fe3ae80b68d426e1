//! Cursor position and horizontal scroll for the single-line prompt input.
//!
//! `CursorState` owns the cursor byte offset and the scroll offset (in
//! display columns). The text itself is owned by `PromptInput` and passed in
//! explicitly.

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Offset from area edge to content (border width)
pub(super) const BORDER_OFFSET: u16 = 1;
/// Left + right borders consumed by the bordered block
pub(super) const HORIZONTAL_OVERHEAD: u16 = 2;

pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// First visible display column
    pub scroll_offset: usize,
}

impl CursorState {
    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
        }
    }

    pub fn move_left(&mut self, buffer: &str) -> bool {
        if self.pos == 0 {
            return false;
        }
        self.pos = prev_char_boundary(buffer, self.pos);
        true
    }

    pub fn move_right(&mut self, buffer: &str) -> bool {
        if self.pos >= buffer.len() {
            return false;
        }
        self.pos = next_char_boundary(buffer, self.pos);
        true
    }

    /// Display column of the cursor within the whole buffer.
    pub fn column(&self, buffer: &str) -> usize {
        buffer[..self.pos].width()
    }

    /// Keep the cursor inside a viewport `inner_width` columns wide.
    pub fn update_scroll_offset(&mut self, buffer: &str, inner_width: u16) {
        let width = inner_width as usize;
        if width == 0 {
            self.scroll_offset = 0;
            return;
        }
        let col = self.column(buffer);
        if col < self.scroll_offset {
            self.scroll_offset = col;
        } else if col >= self.scroll_offset + width {
            self.scroll_offset = col + 1 - width;
        }
    }

    /// The slice of `buffer` visible after horizontal scrolling.
    pub fn visible_text<'a>(&self, buffer: &'a str, inner_width: u16) -> &'a str {
        let mut col = 0;
        let mut start = buffer.len();
        for (i, c) in buffer.char_indices() {
            if col >= self.scroll_offset {
                start = i;
                break;
            }
            col += c.width().unwrap_or(0);
        }

        let rest = &buffer[start..];
        let mut used = 0;
        let mut end = rest.len();
        for (i, c) in rest.char_indices() {
            let w = c.width().unwrap_or(0);
            if used + w > inner_width as usize {
                end = i;
                break;
            }
            used += w;
        }
        &rest[..end]
    }

    /// Screen position of the cursor for the given input area.
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let visible_col = self.column(buffer).saturating_sub(self.scroll_offset) as u16;
        let max_col = area.width.saturating_sub(HORIZONTAL_OVERHEAD);
        (
            area.x + BORDER_OFFSET + visible_col.min(max_col),
            area.y + BORDER_OFFSET,
        )
    }
}

/// Byte offset of the previous character boundary before `pos`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Byte offset of the next character boundary after `pos`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_boundaries_multibyte() {
        let s = "aé👋";
        assert_eq!(next_char_boundary(s, 0), 1);
        assert_eq!(next_char_boundary(s, 1), 3);
        assert_eq!(next_char_boundary(s, 3), 7);
        assert_eq!(prev_char_boundary(s, 7), 3);
        assert_eq!(prev_char_boundary(s, 3), 1);
        assert_eq!(prev_char_boundary(s, 0), 0);
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let buffer = "abcdefghij";
        let mut cursor = CursorState::new();
        cursor.pos = buffer.len();
        cursor.update_scroll_offset(buffer, 4);
        // Column 10 must be the last visible column of a 4-wide viewport
        assert_eq!(cursor.scroll_offset, 7);
        assert_eq!(cursor.visible_text(buffer, 4), "hij");

        cursor.pos = 0;
        cursor.update_scroll_offset(buffer, 4);
        assert_eq!(cursor.scroll_offset, 0);
        assert_eq!(cursor.visible_text(buffer, 4), "abcd");
    }

    #[test]
    fn test_wide_chars_count_two_columns() {
        let buffer = "日本";
        let mut cursor = CursorState::new();
        cursor.pos = buffer.len();
        assert_eq!(cursor.column(buffer), 4);
    }

    #[test]
    fn test_screen_pos_includes_border() {
        let buffer = "abc";
        let mut cursor = CursorState::new();
        cursor.pos = 2;
        let area = Rect::new(10, 5, 20, 3);
        assert_eq!(cursor.screen_pos(buffer, area), (13, 6));
    }
}
