use std::time::{Duration, Instant};

use anyhow::Result;

use crate::chart::{ChartBackend, ChartRenderer};
use crate::data::AnalysisSnapshot;
use crate::feed::LogFeed;
use crate::scheduler::Tick;

/// Owns all dashboard state between start and stop
#[derive(Debug)]
pub struct Dashboard<B: ChartBackend> {
    snapshot: AnalysisSnapshot,
    feed: LogFeed,
    charts: ChartRenderer<B>,
    started_at: Instant,
    ticks: u64,
}

impl<B: ChartBackend> Dashboard<B> {
    pub fn new(snapshot: AnalysisSnapshot, log_lines: &[&'static str], backend: B) -> Result<Self> {
        Ok(Self {
            snapshot,
            feed: LogFeed::new(log_lines)?,
            charts: ChartRenderer::new(backend),
            started_at: Instant::now(),
            ticks: 0,
        })
    }

    /// Initial load: pie and summary, one log line, bar chart
    pub fn start(&mut self) {
        tracing::info!(
            log_capacity = self.feed.capacity(),
            platforms = self.snapshot.platforms.len(),
            "dashboard starting"
        );
        self.charts.refresh_pie(&self.snapshot);
        self.feed.append();
        self.charts.refresh_bar(&self.snapshot);
    }

    pub fn apply(&mut self, tick: Tick) {
        self.ticks += 1;
        tracing::debug!(?tick, n = self.ticks, "tick");
        match tick {
            Tick::AppendLog => self.feed.append(),
            Tick::RefreshBar => self.charts.refresh_bar(&self.snapshot),
            Tick::RefreshPie => self.charts.refresh_pie(&self.snapshot),
        }
    }

    /// Rebuild both charts on request
    pub fn refresh_all(&mut self) {
        self.charts.refresh_pie(&self.snapshot);
        self.charts.refresh_bar(&self.snapshot);
    }

    /// Release both charts and hand back the backend
    pub fn stop(self) -> B {
        tracing::info!(ticks = self.ticks, lines = self.feed.appended(), "dashboard stopped");
        self.charts.into_backend()
    }

    pub fn feed(&self) -> &LogFeed {
        &self.feed
    }

    pub fn feed_mut(&mut self) -> &mut LogFeed {
        &mut self.feed
    }

    pub fn charts(&self) -> &ChartRenderer<B> {
        &self.charts
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{Surface, TerminalCharts};
    use crate::data::SAMPLE_LOG_LINES;

    fn dashboard() -> Dashboard<TerminalCharts> {
        Dashboard::new(
            AnalysisSnapshot::sample(),
            &SAMPLE_LOG_LINES,
            TerminalCharts::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_start_loads_everything_once() {
        let mut dash = dashboard();
        dash.start();

        assert_eq!(dash.feed().len(), 1);
        assert_eq!(dash.feed().latest(), Some(SAMPLE_LOG_LINES[0]));
        assert_eq!(dash.charts().backend().live_count(), 2);
        assert_eq!(dash.charts().summary().labels(), ["25 (50%)", "15 (30%)", "10 (20%)"]);
        assert_eq!(dash.charts().platform_lines().len(), 6);
        assert_eq!(dash.ticks(), 0);
    }

    #[test]
    fn test_ticks_dispatch() {
        let mut dash = dashboard();
        dash.start();
        let pie = dash.charts().pie_id();
        let bar = dash.charts().bar_id();

        dash.apply(Tick::AppendLog);
        assert_eq!(dash.feed().len(), 2);
        assert_eq!(dash.charts().pie_id(), pie);
        assert_eq!(dash.charts().bar_id(), bar);

        dash.apply(Tick::RefreshBar);
        assert_ne!(dash.charts().bar_id(), bar);
        assert_eq!(dash.charts().pie_id(), pie);

        dash.apply(Tick::RefreshPie);
        assert_ne!(dash.charts().pie_id(), pie);
        assert_eq!(dash.charts().backend().live_count(), 2);
        assert_eq!(dash.ticks(), 3);
    }

    #[test]
    fn test_log_window_after_many_ticks() {
        let mut dash = dashboard();
        for _ in 0..21 {
            dash.apply(Tick::AppendLog);
        }
        assert_eq!(dash.feed().len(), 20);
        assert_eq!(dash.feed().lines().next(), Some(SAMPLE_LOG_LINES[1]));
    }

    #[test]
    fn test_refresh_all_keeps_one_chart_per_surface() {
        let mut dash = dashboard();
        dash.start();
        dash.refresh_all();
        dash.refresh_all();

        let backend = dash.charts().backend();
        assert_eq!(backend.live_count(), 2);
        assert_eq!(backend.live(Surface::PieChart).map(|c| c.id), dash.charts().pie_id());
        assert_eq!(backend.live(Surface::BarChart).map(|c| c.id), dash.charts().bar_id());
    }

    #[test]
    fn test_stop_releases_charts() {
        let mut dash = dashboard();
        dash.start();
        let backend = dash.stop();
        assert_eq!(backend.live_count(), 0);
    }
}
