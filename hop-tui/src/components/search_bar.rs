use crate::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const PLACEHOLDER: &str = "Filter branches...";

/// Trailing slice of `text` that fits `max_width` display columns. The
/// edit cursor always sits at the end of the filter, so scrolling only
/// ever clips the front.
fn visible_tail(text: &str, max_width: u16) -> &str {
    let max_width = usize::from(max_width);
    if text.width() <= max_width {
        return text;
    }

    let mut start = text.len();
    let mut width = 0;
    for (idx, grapheme) in text.grapheme_indices(true).rev() {
        let g_width = grapheme.width();
        if width + g_width > max_width {
            break;
        }
        width += g_width;
        start = idx;
    }
    &text[start..]
}

/// Render the filter input line with a terminal cursor at the end of the
/// text, or a placeholder while the filter is empty.
pub fn draw(f: &mut Frame, area: Rect, theme: &Theme, filter: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" select branch ")
        .border_style(Style::default().fg(theme.accent));
    let inner = block.inner(area);

    if filter.is_empty() {
        let content = Line::from(Span::styled(
            PLACEHOLDER,
            Style::default().fg(theme.muted),
        ));
        f.render_widget(Paragraph::new(content).block(block), area);
        if inner.width > 0 && inner.height > 0 {
            f.set_cursor_position((inner.x, inner.y));
        }
    } else {
        // Reserve one column for the cursor cell.
        let visible = visible_tail(filter, inner.width.saturating_sub(1));
        let cursor_col = u16::try_from(visible.width()).unwrap_or(u16::MAX);
        f.render_widget(
            Paragraph::new(Line::from(Span::raw(visible))).block(block),
            area,
        );
        if inner.width > 0 && inner.height > 0 {
            let cursor_x = inner.x.saturating_add(cursor_col).min(inner.right().saturating_sub(1));
            f.set_cursor_position((cursor_x, inner.y));
        }
    }
}
