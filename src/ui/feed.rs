use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::feed::LogFeed;

/// Color a line by the verdict it mentions
fn verdict_color(line: &str) -> Color {
    let lower = line.to_lowercase();
    if ["suspicious", "phishing", "spam"].iter().any(|k| lower.contains(k)) {
        Color::LightRed
    } else if lower.contains("neutral") {
        Color::Yellow
    } else if lower.contains("safe") || lower.contains("positive") {
        Color::Green
    } else {
        Color::Gray
    }
}

pub fn render_feed(frame: &mut Frame, area: Rect, feed: &LogFeed) {
    let mut title = format!(" Live Feed ({}/{}) ", feed.len(), feed.capacity());
    if feed.scroll() < feed.len() {
        title.push_str("[scrolled] ");
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    if feed.is_empty() {
        frame.render_widget(block, area);
        return;
    }

    let height = block.inner(area).height as usize;
    let last = feed.len() - 1;
    let lines: Vec<Line> = feed
        .lines()
        .enumerate()
        .map(|(i, text)| {
            let mut style = Style::default().fg(verdict_color(text));
            if i == last {
                style = style.add_modifier(Modifier::BOLD);
            }
            Line::styled(text, style)
        })
        .collect();

    let offset = feed.view_offset(height) as u16;
    let paragraph = Paragraph::new(lines).block(block).scroll((offset, 0));
    frame.render_widget(paragraph, area);
}
