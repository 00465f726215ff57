use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let value = if app.url.is_empty() {
        Span::styled("Enter Image URL", Style::default().fg(theme.overlay))
    } else {
        Span::styled(app.url.as_str(), Style::default().fg(theme.text))
    };

    let line = Line::from(vec![
        Span::styled(
            " > ",
            Style::default()
                .fg(theme.green)
                .add_modifier(Modifier::BOLD),
        ),
        value,
        Span::styled(
            "▌",
            Style::default()
                .fg(theme.green)
                .add_modifier(Modifier::SLOW_BLINK),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.blue))
        .title(" Image URL ")
        .title_alignment(Alignment::Left)
        .style(Style::default().bg(Color::Reset));

    let scroll = scroll_offset(&app.url, area.width);
    let p = Paragraph::new(line).block(block).scroll((0, scroll));
    f.render_widget(p, area);
}

/// Columns to scroll so the end of `text` and the cursor stay visible.
fn scroll_offset(text: &str, area_width: u16) -> u16 {
    // borders, prompt and cursor
    let visible = area_width.saturating_sub(2 + 3 + 1) as usize;
    let text_width = Line::from(text).width();
    u16::try_from(text_width.saturating_sub(visible)).unwrap_or(u16::MAX)
}
