use crate::app::App;
use crate::ui::projection::RenderBranch;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

const SPINNER: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.surface))
        .style(Style::default().bg(Color::Reset));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.height < 1 || inner.width < 1 {
        return;
    }

    match RenderBranch::project(&app.load.state) {
        RenderBranch::Image(image) => {
            let lines = app.image_cache.lines(
                app.load.request,
                image,
                inner.width,
                inner.height,
                app.display.grayscale,
            );
            let p = Paragraph::new(lines.to_vec()).alignment(Alignment::Center);
            f.render_widget(p, inner);
        }
        RenderBranch::Progress => {
            let frame = SPINNER[(app.tick as usize) % SPINNER.len()];
            let text = vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("{} Loading...", frame),
                    Style::default().fg(theme.yellow),
                )),
            ];
            f.render_widget(Paragraph::new(text).alignment(Alignment::Center), centered(inner, 2));
        }
        RenderBranch::Warning(message) => {
            let text = vec![
                Line::from(Span::styled(
                    "⚠",
                    Style::default().fg(theme.red).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(message, Style::default().fg(theme.overlay))),
            ];
            let p = Paragraph::new(text)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            f.render_widget(p, centered(inner, 3));
        }
        RenderBranch::Empty => {}
    }
}

fn centered(area: Rect, rows: u16) -> Rect {
    let rows = rows.min(area.height);
    let y = area.y + (area.height - rows) / 2;
    Rect::new(area.x, y, area.width, rows)
}
