use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::stats::SummaryStats;

const COLOR_SAFE: Color = Color::Rgb(0x00, 0xff, 0x99);
const COLOR_SUSPICIOUS: Color = Color::Rgb(0xff, 0x4c, 0x4c);
const COLOR_NEUTRAL: Color = Color::Rgb(0xff, 0xc1, 0x07);

fn summary_line(label: &str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<11}", label),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

pub fn render_summary(frame: &mut Frame, area: Rect, summary: &SummaryStats) {
    let [safe, suspicious, neutral] = summary.labels();
    let lines = vec![
        summary_line("Safe", safe, COLOR_SAFE),
        summary_line("Suspicious", suspicious, COLOR_SUSPICIOUS),
        summary_line("Neutral", neutral, COLOR_NEUTRAL),
        Line::raw(""),
        Line::from(vec![
            Span::styled(format!("{:<11}", "Total"), Style::default().fg(Color::Gray)),
            Span::styled(summary.total.to_string(), Style::default().fg(Color::White)),
        ]),
    ];

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Summary ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    );
    frame.render_widget(panel, area);
}

pub fn render_platform_counts(frame: &mut Frame, area: Rect, lines: &[String]) {
    let lines: Vec<Line> = lines
        .iter()
        .map(|l| Line::styled(l.clone(), Style::default().fg(Color::White)))
        .collect();

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Platforms ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    );
    frame.render_widget(panel, area);
}
