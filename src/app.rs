use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    DefaultTerminal, Frame,
};
use std::time::Duration;

use crate::chart::TerminalCharts;
use crate::config::Config;
use crate::dashboard::Dashboard;
use crate::data::{AnalysisSnapshot, SAMPLE_LOG_LINES};
use crate::scheduler::Scheduler;
use crate::ui::{render_dashboard, render_help_bar, render_status_bar};

/// Redraw cadence. Short enough to animate the bar chart smoothly.
const FRAME_POLL: Duration = Duration::from_millis(50);

pub struct App {
    config: Config,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            should_quit: false,
        }
    }

    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        let mut dashboard = Dashboard::new(
            AnalysisSnapshot::sample(),
            &SAMPLE_LOG_LINES,
            TerminalCharts::new(),
        )?;
        dashboard.start();

        // Timers only send ticks; all state changes happen on this loop
        let (scheduler, mut rx) = Scheduler::spawn(&self.config.schedule);

        loop {
            terminal.draw(|frame| render(frame, &dashboard))?;

            if event::poll(FRAME_POLL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code, &mut dashboard);
                    }
                }
            }

            while let Ok(tick) = rx.try_recv() {
                dashboard.apply(tick);
            }

            if self.should_quit {
                break;
            }
        }

        scheduler.stop();
        dashboard.stop();
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode, dashboard: &mut Dashboard<TerminalCharts>) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('r') => dashboard.refresh_all(),
            KeyCode::Up | KeyCode::Char('k') => dashboard.feed_mut().scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => dashboard.feed_mut().scroll_down(),
            KeyCode::End | KeyCode::Char('G') => dashboard.feed_mut().scroll_to_bottom(),
            _ => {}
        }
    }
}

fn render(frame: &mut Frame, dashboard: &Dashboard<TerminalCharts>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_status_bar(frame, chunks[0], dashboard);
    render_dashboard(frame, chunks[1], dashboard);
    render_help_bar(frame, chunks[2]);
}
