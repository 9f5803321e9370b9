use std::f64::consts::TAU;
use std::time::Instant;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Points},
        Bar, BarChart, BarGroup, Block, Borders, Paragraph,
    },
    Frame,
};

use crate::chart::{ChartConfig, ChartKind, LiveChart, Surface};

/// Draw whatever chart is live on `surface`
pub fn render_chart(frame: &mut Frame, area: Rect, surface: Surface, chart: Option<&LiveChart>) {
    match chart {
        Some(chart) => match chart.config.kind {
            ChartKind::Pie => render_pie(frame, area, chart),
            ChartKind::Bar => render_bar(frame, area, chart),
        },
        None => {
            let block = Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} - No Chart ", surface.name()))
                .title_style(Style::default().fg(Color::Yellow));
            frame.render_widget(block, area);
        }
    }
}

/// Split the unit disc into one point cloud per slice, starting at twelve
/// o'clock and running clockwise. Points within `gap` of a slice edge are
/// dropped so adjacent slices stay distinguishable.
fn pie_slices(values: &[u64], step: f64, gap: f64) -> Vec<Vec<(f64, f64)>> {
    let mut slices = vec![Vec::new(); values.len()];
    let total: u128 = values.iter().map(|v| *v as u128).sum();
    if total == 0 || step <= 0.0 {
        return slices;
    }

    // Cumulative slice edges as angles
    let mut edges = Vec::with_capacity(values.len());
    let mut acc = 0u128;
    for v in values {
        acc += *v as u128;
        edges.push(acc as f64 / total as f64 * TAU);
    }
    let drawn = values.iter().filter(|v| **v > 0).count();

    let steps = (2.0 / step).ceil() as i64;
    for yi in 0..=steps {
        let y = -1.0 + yi as f64 * step;
        for xi in 0..=steps {
            let x = -1.0 + xi as f64 * step;
            let r = (x * x + y * y).sqrt();
            if r > 1.0 {
                continue;
            }

            let angle = x.atan2(y).rem_euclid(TAU);
            let idx = edges
                .iter()
                .position(|edge| angle < *edge)
                .unwrap_or(values.len() - 1);

            if drawn > 1 && gap > 0.0 {
                let near_edge = edges.iter().any(|edge| {
                    let delta = (angle - edge).rem_euclid(TAU);
                    let delta = delta.min(TAU - delta);
                    delta < TAU / 4.0 && r * delta.sin() < gap
                });
                if near_edge {
                    continue;
                }
            }

            slices[idx].push((x, y));
        }
    }

    slices
}

fn render_pie(frame: &mut Frame, area: Rect, chart: &LiveChart) {
    let config = &chart.config;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Sentiment ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let legend_height = if config.show_legend { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(legend_height)])
        .split(inner);
    let plot = chunks[0];

    if plot.width == 0 || plot.height == 0 {
        return;
    }

    // Braille dots are roughly square: 2 per cell across, 4 per cell down
    let dots_x = plot.width as f64 * 2.0;
    let dots_y = plot.height as f64 * 4.0;
    let aspect = dots_x / dots_y;
    let (x_half, y_half) = if aspect >= 1.0 {
        (1.05 * aspect, 1.05)
    } else {
        (1.05, 1.05 / aspect)
    };
    let step = 2.0 * y_half / dots_y;
    let gap = config
        .border
        .map(|b| b.width as f64 * step * 0.5)
        .unwrap_or(0.0);

    let outline = config.border.map(|b| b.color);
    let slices = pie_slices(&config.series.values, step, gap);
    let colors: Vec<Color> = (0..slices.len()).map(|i| config.series.color_at(i)).collect();

    let canvas = Canvas::default()
        .marker(symbols::Marker::Braille)
        .x_bounds([-x_half, x_half])
        .y_bounds([-y_half, y_half])
        .paint(move |ctx| {
            if let Some(color) = outline {
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: 1.0,
                    color,
                });
            }
            for (coords, color) in slices.iter().zip(&colors) {
                ctx.draw(&Points {
                    coords: coords.as_slice(),
                    color: *color,
                });
            }
        });
    frame.render_widget(canvas, plot);

    if config.show_legend {
        render_legend(frame, chunks[1], config);
    }
}

fn render_legend(frame: &mut Frame, area: Rect, config: &ChartConfig) {
    let mut spans = Vec::new();
    for (i, label) in config.labels.iter().enumerate() {
        spans.push(Span::styled("■ ", Style::default().fg(config.series.color_at(i))));
        spans.push(Span::styled(label.clone(), Style::default().fg(Color::White)));
        spans.push(Span::raw("  "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_bar(frame: &mut Frame, area: Rect, chart: &LiveChart) {
    let config = &chart.config;
    let progress = chart.progress(Instant::now());

    let title = config.series.label.as_deref().unwrap_or("Platforms");
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let bars: Vec<Bar> = config
        .labels
        .iter()
        .zip(&config.series.values)
        .enumerate()
        .map(|(i, (label, &value))| {
            let shown = (value as f64 * progress).round() as u64;
            Bar::default()
                .label(Line::from(label.clone()))
                .value(shown)
                .text_value(format!("{}%", shown))
                .style(Style::default().fg(config.series.color_at(i)))
                .value_style(Style::default().fg(Color::Black).bg(config.series.color_at(i)))
        })
        .collect();

    let count = bars.len().max(1) as u16;
    let inner_width = block.inner(area).width;
    let bar_width = (inner_width.saturating_sub(count - 1) / count).clamp(3, 12);
    let max = config.y_bounds.map(|[_, hi]| hi as u64).unwrap_or(100);

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .label_style(Style::default().fg(Color::White))
        .max(max);

    frame.render_widget(chart, area);
}
