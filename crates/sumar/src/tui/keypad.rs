//! Keypad widget for the TUI
//!
//! Renders the shared seventeen-key layout as a bordered grid. The most
//! recently pressed operator renders inverted until another operator press
//! or a clear supersedes it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::key::Key;
use crate::core::token::Operator;
use crate::keypad::{KeyDef, Keypad, COLS, ROWS};

/// Keypad widget
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    active: Option<Operator>,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a keypad widget with no operator highlighted
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self {
            keypad,
            active: None,
        }
    }

    /// Highlights the given operator's key
    #[must_use]
    pub fn active(mut self, active: Option<Operator>) -> Self {
        self.active = active;
        self
    }

    fn key_style(&self, def: &KeyDef) -> Style {
        if let Key::Operator(op) = def.key {
            if self.active == Some(op) {
                return Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD);
            }
        }
        match def.key {
            Key::Digit(_) => Style::default().fg(Color::White),
            Key::Operator(_) => Style::default().fg(Color::Yellow),
            Key::Equals => Style::default().fg(Color::Green),
            Key::Clear => Style::default().fg(Color::Red),
            Key::Decimal => Style::default().fg(Color::Cyan),
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        if (inner.width as usize) < COLS || (inner.height as usize) < ROWS {
            return; // Too small to render
        }

        let cell_w = inner.width / COLS as u16;
        let cell_h = inner.height / ROWS as u16;

        for def in self.keypad.keys() {
            let x = inner.x + def.col as u16 * cell_w;
            let y = inner.y + def.row as u16 * cell_h;
            let w = def.col_span as u16 * cell_w;
            let h = def.row_span as u16 * cell_h;

            let label = format!("[{}]", def.key.value());
            let label_x = x + w.saturating_sub(label.len() as u16) / 2;
            let label_y = y + h / 2;

            if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                buf.set_span(
                    label_x,
                    label_y,
                    &Span::styled(label, self.key_style(def)),
                    w,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered_content(widget: KeypadWidget<'_>, area: Rect) -> String {
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        buf.content().iter().map(ratatui::buffer::Cell::symbol).collect()
    }

    #[test]
    fn test_render_contains_all_labels() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 30, 14);
        let content = rendered_content(KeypadWidget::new(&keypad), area);

        assert!(content.contains("Keypad"));
        assert!(content.contains("[AC]"));
        for glyph in ["7", "0", "+", "-", "*", "/", ".", "="] {
            assert!(
                content.contains(&format!("[{glyph}]")),
                "missing key [{glyph}]"
            );
        }
    }

    #[test]
    fn test_render_with_active_operator() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 30, 14);
        let content = rendered_content(
            KeypadWidget::new(&keypad).active(Some(Operator::Add)),
            area,
        );
        assert!(content.contains("[+]"));
    }

    #[test]
    fn test_render_small_area_does_not_panic() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 4, 3);
        let _ = rendered_content(KeypadWidget::new(&keypad), area);
    }

    #[test]
    fn test_active_operator_style_inverts() {
        let keypad = Keypad::new();
        let widget = KeypadWidget::new(&keypad).active(Some(Operator::Multiply));
        let def = keypad.find_by_id("multiply").unwrap();
        let style = widget.key_style(def);
        assert_eq!(style.bg, Some(Color::Yellow));
        assert_eq!(style.fg, Some(Color::Black));
    }

    #[test]
    fn test_inactive_operator_style() {
        let keypad = Keypad::new();
        let widget = KeypadWidget::new(&keypad).active(Some(Operator::Multiply));
        let def = keypad.find_by_id("add").unwrap();
        let style = widget.key_style(def);
        assert_eq!(style.fg, Some(Color::Yellow));
        assert_eq!(style.bg, None);
    }
}
