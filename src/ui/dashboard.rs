use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::chart::{Surface, TerminalCharts};
use crate::dashboard::Dashboard;
use crate::ui::charts::render_chart;
use crate::ui::feed::render_feed;
use crate::ui::panels::{render_platform_counts, render_summary};

pub fn render_dashboard(frame: &mut Frame, area: Rect, dashboard: &Dashboard<TerminalCharts>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60), // Charts
            Constraint::Min(6),         // Log feed
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[0]);

    let left = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(24)])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(20)])
        .split(columns[1]);

    let charts = dashboard.charts();
    let backend = charts.backend();

    // === Sentiment ===
    render_chart(frame, left[0], Surface::PieChart, backend.live(Surface::PieChart));
    render_summary(frame, left[1], charts.summary());

    // === Platforms ===
    render_chart(frame, right[0], Surface::BarChart, backend.live(Surface::BarChart));
    render_platform_counts(frame, right[1], charts.platform_lines());

    // === Feed ===
    render_feed(frame, chunks[1], dashboard.feed());
}
