use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Bottom bar: load action, grayscale toggle state, quit hint.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let keys = &app.keys;

    let key_style = Style::default()
        .fg(theme.blue)
        .add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(theme.overlay);

    let (toggle_text, toggle_style) = if app.display.grayscale {
        ("on", Style::default().fg(theme.green).add_modifier(Modifier::BOLD))
    } else {
        ("off", label_style)
    };

    let line = Line::from(vec![
        Span::styled(format!(" {} ", keys.display(&keys.load)), key_style),
        Span::styled("Load Image   ", label_style),
        Span::styled(format!(" {} ", keys.display(&keys.toggle_grayscale)), key_style),
        Span::styled("Grayscale: ", label_style),
        Span::styled(toggle_text, toggle_style),
        Span::styled("   ", label_style),
        Span::styled(format!(" {} ", keys.display(&keys.clear)), key_style),
        Span::styled("Clear   ", label_style),
        Span::styled(format!(" {} ", keys.display(&keys.quit)), key_style),
        Span::styled("Quit", label_style),
    ]);

    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
