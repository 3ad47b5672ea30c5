use super::search_bar;
use crate::theme::Theme;
use hop_core::Selector;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Rows not available to the list: filter block (3) plus list borders (2).
pub const CHROME_ROWS: u16 = 5;

/// List rows that fit a terminal of the given height.
pub fn page_size(terminal_height: u16) -> usize {
    usize::from(terminal_height.saturating_sub(CHROME_ROWS)).max(1)
}

pub fn draw(f: &mut Frame, area: Rect, selector: &Selector, theme: &Theme) {
    let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).split(area);

    search_bar::draw(f, chunks[0], theme, selector.filter_text());

    let list_block = Block::default()
        .borders(Borders::ALL)
        .title(format!(
            " {}/{} branches ",
            selector.match_count(),
            selector.total_count()
        ))
        .border_style(Style::default().fg(theme.border));

    // The engine owns cursor and viewport, so rows are drawn straight
    // from its visible slice rather than through a stateful list widget.
    let content: Vec<Line> = if selector.match_count() == 0 {
        vec![Line::from(Span::styled(
            "No matches found.",
            Style::default().fg(theme.muted),
        ))]
    } else {
        selector
            .visible_rows()
            .map(|(is_cursor, name)| {
                if is_cursor {
                    Line::from(vec![
                        Span::styled("▸ ", Style::default().fg(theme.accent)),
                        Span::styled(
                            name.to_string(),
                            Style::default()
                                .fg(theme.highlight_fg)
                                .add_modifier(Modifier::BOLD),
                        ),
                    ])
                } else {
                    Line::from(vec![Span::raw("  "), Span::raw(name.to_string())])
                }
            })
            .collect()
    };

    f.render_widget(Paragraph::new(content).block(list_block), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::{CHROME_ROWS, page_size};

    #[test]
    fn test_page_size_subtracts_chrome() {
        assert_eq!(page_size(24), usize::from(24 - CHROME_ROWS));
    }

    #[test]
    fn test_page_size_never_zero() {
        assert_eq!(page_size(0), 1);
        assert_eq!(page_size(CHROME_ROWS), 1);
    }
}
