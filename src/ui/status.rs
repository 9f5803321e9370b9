use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::chart::{ChartBackend, TerminalCharts};
use crate::dashboard::Dashboard;

// Use standard terminal colors
const COLOR_KEY: Color = Color::Cyan;

fn format_duration(duration: std::time::Duration) -> String {
    let secs = duration.as_secs();
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    }
}

fn format_handle(id: Option<u64>) -> String {
    match id {
        Some(id) => format!("#{}", id),
        None => "-".to_string(),
    }
}

pub fn render_status_bar(frame: &mut Frame, area: Rect, dashboard: &Dashboard<TerminalCharts>) {
    let charts = dashboard.charts();

    let spans = vec![
        Span::styled(
            " MODWATCH ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled("Lines: ", Style::default().fg(Color::Gray)),
        Span::styled(
            dashboard.feed().appended().to_string(),
            Style::default().fg(Color::White),
        ),
        Span::raw(" | "),
        Span::styled("Ticks: ", Style::default().fg(Color::Gray)),
        Span::styled(dashboard.ticks().to_string(), Style::default().fg(Color::White)),
        Span::raw(" | "),
        Span::styled("Uptime: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format_duration(dashboard.uptime()),
            Style::default().fg(Color::White),
        ),
        Span::raw(" | "),
        Span::styled("Pie: ", Style::default().fg(Color::Gray)),
        Span::styled(format_handle(charts.pie_id()), Style::default().fg(Color::White)),
        Span::raw(" "),
        Span::styled("Bar: ", Style::default().fg(Color::Gray)),
        Span::styled(format_handle(charts.bar_id()), Style::default().fg(Color::White)),
        Span::raw(" | "),
        Span::styled("Live: ", Style::default().fg(Color::Gray)),
        Span::styled(
            charts.backend().live_count().to_string(),
            Style::default().fg(Color::White),
        ),
    ];

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

pub fn render_help_bar(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(Line::from(vec![
        Span::styled("[q]", Style::default().fg(COLOR_KEY)),
        Span::raw(" quit  "),
        Span::styled("[r]", Style::default().fg(COLOR_KEY)),
        Span::raw(" rebuild charts  "),
        Span::styled("[j/k]", Style::default().fg(COLOR_KEY)),
        Span::raw(" scroll feed  "),
        Span::styled("[G/End]", Style::default().fg(COLOR_KEY)),
        Span::raw(" newest"),
    ]))
    .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_secs(42)), "42s");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 5s");
        assert_eq!(format_duration(Duration::from_secs(7260)), "2h 1m");
    }

    #[test]
    fn test_help_bar_lists_keys() {
        let mut terminal = Terminal::new(TestBackend::new(100, 1)).unwrap();
        terminal
            .draw(|frame| render_help_bar(frame, frame.area()))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        for key in ["[q]", "[r]", "[j/k]", "[G/End]"] {
            assert!(text.contains(key), "missing {}", key);
        }
    }

    #[test]
    fn test_format_handle() {
        assert_eq!(format_handle(Some(7)), "#7");
        assert_eq!(format_handle(None), "-");
    }
}
