use std::collections::HashMap;
use std::time::{Duration, Instant};

use ratatui::style::Color;

use crate::data::AnalysisSnapshot;
use crate::stats::SummaryStats;

// Chart colors
const COLOR_POSITIVE: Color = Color::Rgb(0x00, 0xff, 0x99);
const COLOR_NEGATIVE: Color = Color::Rgb(0xff, 0x4c, 0x4c);
const COLOR_NEUTRAL: Color = Color::Rgb(0xff, 0xc1, 0x07);
const COLOR_PIE_BORDER: Color = Color::Rgb(0x1b, 0x1b, 0x1b);
const COLOR_BAR: Color = Color::Rgb(0x00, 0xbf, 0xff);

const BAR_ANIMATION: Duration = Duration::from_millis(1500);

// ============================================================================
// Declarative chart configuration
// ============================================================================

/// Drawing surface a chart is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    PieChart,
    BarChart,
}

impl Surface {
    pub fn name(&self) -> &'static str {
        match self {
            Self::PieChart => "pie chart surface",
            Self::BarChart => "bar chart surface",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Pie,
    Bar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    #[cfg(test)]
    Linear,
    EaseInOutCubic,
}

impl Easing {
    /// Map linear progress `t` in [0, 1] onto the curve
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            #[cfg(test)]
            Self::Linear => t,
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    pub duration: Duration,
    pub easing: Easing,
}

impl Animation {
    /// Eased progress after `elapsed`, 1.0 once the animation is over
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.easing.apply(t)
    }
}

/// A single dataset: one value and one color per label. A lone color is
/// used for every value.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: Option<String>,
    pub values: Vec<u64>,
    pub colors: Vec<Color>,
}

impl Series {
    pub fn color_at(&self, idx: usize) -> Color {
        match self.colors.len() {
            0 => Color::Reset,
            1 => self.colors[0],
            n => self.colors[idx % n],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub color: Color,
    pub width: u16,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub series: Series,
    pub border: Option<Border>,
    pub y_bounds: Option<[f64; 2]>,
    pub animation: Option<Animation>,
    pub show_legend: bool,
}

impl ChartConfig {
    pub fn pie(snapshot: &AnalysisSnapshot) -> Self {
        Self {
            kind: ChartKind::Pie,
            labels: vec!["Positive".into(), "Negative".into(), "Neutral".into()],
            series: Series {
                label: None,
                values: vec![snapshot.positive, snapshot.negative, snapshot.neutral],
                colors: vec![COLOR_POSITIVE, COLOR_NEGATIVE, COLOR_NEUTRAL],
            },
            border: Some(Border {
                color: COLOR_PIE_BORDER,
                width: 2,
            }),
            y_bounds: None,
            animation: None,
            show_legend: true,
        }
    }

    pub fn bar(snapshot: &AnalysisSnapshot) -> Self {
        Self {
            kind: ChartKind::Bar,
            labels: snapshot.platforms.iter().map(|p| p.name.clone()).collect(),
            series: Series {
                label: Some("Platform %".into()),
                values: snapshot.platforms.iter().map(|p| p.percent).collect(),
                colors: vec![COLOR_BAR],
            },
            border: None,
            y_bounds: Some([0.0, 100.0]),
            animation: Some(Animation {
                duration: BAR_ANIMATION,
                easing: Easing::EaseInOutCubic,
            }),
            show_legend: false,
        }
    }
}

// ============================================================================
// Handles and backends
// ============================================================================

/// Owned reference to a live chart. Not `Clone`: destroying a chart
/// consumes its handle.
#[derive(Debug, PartialEq, Eq)]
pub struct ChartHandle {
    id: u64,
    surface: Surface,
}

impl ChartHandle {
    pub fn new(id: u64, surface: Surface) -> Self {
        Self { id, surface }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }
}

/// The library that actually draws charts
pub trait ChartBackend {
    fn create(&mut self, surface: Surface, config: ChartConfig) -> ChartHandle;
    fn destroy(&mut self, handle: ChartHandle);
    fn live_count(&self) -> usize;
}

#[derive(Debug, Clone)]
pub struct LiveChart {
    pub id: u64,
    pub config: ChartConfig,
    pub created_at: Instant,
}

impl LiveChart {
    /// Eased animation progress at `now`
    pub fn progress(&self, now: Instant) -> f64 {
        match self.config.animation {
            Some(animation) => animation.progress(now.saturating_duration_since(self.created_at)),
            None => 1.0,
        }
    }
}

/// Keeps live chart configs per surface for the terminal UI to draw
#[derive(Debug, Default)]
pub struct TerminalCharts {
    next_id: u64,
    live: HashMap<Surface, LiveChart>,
}

impl TerminalCharts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live(&self, surface: Surface) -> Option<&LiveChart> {
        self.live.get(&surface)
    }
}

impl ChartBackend for TerminalCharts {
    fn create(&mut self, surface: Surface, config: ChartConfig) -> ChartHandle {
        self.next_id += 1;
        let id = self.next_id;

        let chart = LiveChart {
            id,
            config,
            created_at: Instant::now(),
        };
        if let Some(old) = self.live.insert(surface, chart) {
            tracing::warn!(
                surface = surface.name(),
                old = old.id,
                new = id,
                "surface already bound"
            );
        }
        tracing::trace!(surface = surface.name(), id, "chart created");

        ChartHandle::new(id, surface)
    }

    fn destroy(&mut self, handle: ChartHandle) {
        let surface = handle.surface();
        if self.live.get(&surface).is_some_and(|c| c.id == handle.id()) {
            self.live.remove(&surface);
            tracing::trace!(surface = surface.name(), id = handle.id(), "chart destroyed");
        }
    }

    fn live_count(&self) -> usize {
        self.live.len()
    }
}

// ============================================================================
// Renderer
// ============================================================================

/// Holds at most one live handle for its surface
#[derive(Debug)]
struct ChartSlot {
    surface: Surface,
    handle: Option<ChartHandle>,
}

impl ChartSlot {
    fn new(surface: Surface) -> Self {
        Self {
            surface,
            handle: None,
        }
    }

    /// Destroy the live chart, if any, then bind a new one
    fn replace<B: ChartBackend>(&mut self, backend: &mut B, config: ChartConfig) {
        self.release(backend);
        self.handle = Some(backend.create(self.surface, config));
    }

    fn release<B: ChartBackend>(&mut self, backend: &mut B) {
        if let Some(handle) = self.handle.take() {
            backend.destroy(handle);
        }
    }

    fn id(&self) -> Option<u64> {
        self.handle.as_ref().map(ChartHandle::id)
    }
}

/// Owns the pie and bar charts plus the text panels their refreshes rewrite
#[derive(Debug)]
pub struct ChartRenderer<B: ChartBackend> {
    backend: B,
    pie: ChartSlot,
    bar: ChartSlot,
    summary: SummaryStats,
    platform_lines: Vec<String>,
}

impl<B: ChartBackend> ChartRenderer<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            pie: ChartSlot::new(Surface::PieChart),
            bar: ChartSlot::new(Surface::BarChart),
            summary: SummaryStats::default(),
            platform_lines: Vec::new(),
        }
    }

    pub fn refresh_pie(&mut self, snapshot: &AnalysisSnapshot) {
        self.pie.replace(&mut self.backend, ChartConfig::pie(snapshot));
        self.summary = SummaryStats::compute(snapshot);
        tracing::debug!(id = self.pie.id(), total = self.summary.total, "pie refreshed");
    }

    pub fn refresh_bar(&mut self, snapshot: &AnalysisSnapshot) {
        self.bar.replace(&mut self.backend, ChartConfig::bar(snapshot));
        self.platform_lines = snapshot
            .platforms
            .iter()
            .map(|p| format!("{}: {}%", p.name, p.percent))
            .collect();
        tracing::debug!(id = self.bar.id(), platforms = self.platform_lines.len(), "bar refreshed");
    }

    /// Destroy both charts
    pub fn release(&mut self) {
        self.pie.release(&mut self.backend);
        self.bar.release(&mut self.backend);
    }

    pub fn summary(&self) -> &SummaryStats {
        &self.summary
    }

    pub fn platform_lines(&self) -> &[String] {
        &self.platform_lines
    }

    pub fn pie_id(&self) -> Option<u64> {
        self.pie.id()
    }

    pub fn bar_id(&self) -> Option<u64> {
        self.bar.id()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(mut self) -> B {
        self.release();
        self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Create(Surface, u64),
        Destroy(Surface, u64),
    }

    /// Records every call and fails on a double-bound surface
    #[derive(Debug, Default)]
    struct RecordingBackend {
        next_id: u64,
        live: HashMap<Surface, u64>,
        ops: Vec<Op>,
    }

    impl ChartBackend for RecordingBackend {
        fn create(&mut self, surface: Surface, _config: ChartConfig) -> ChartHandle {
            self.next_id += 1;
            assert!(
                self.live.insert(surface, self.next_id).is_none(),
                "{} created while live",
                surface.name()
            );
            self.ops.push(Op::Create(surface, self.next_id));
            ChartHandle::new(self.next_id, surface)
        }

        fn destroy(&mut self, handle: ChartHandle) {
            assert_eq!(self.live.remove(&handle.surface()), Some(handle.id()));
            self.ops.push(Op::Destroy(handle.surface(), handle.id()));
        }

        fn live_count(&self) -> usize {
            self.live.len()
        }
    }

    #[test]
    fn test_destroy_before_create() {
        let snapshot = AnalysisSnapshot::sample();
        let mut renderer = ChartRenderer::new(RecordingBackend::default());

        renderer.refresh_pie(&snapshot);
        renderer.refresh_pie(&snapshot);
        renderer.refresh_bar(&snapshot);
        renderer.refresh_bar(&snapshot);

        assert_eq!(
            renderer.backend().ops,
            vec![
                Op::Create(Surface::PieChart, 1),
                Op::Destroy(Surface::PieChart, 1),
                Op::Create(Surface::PieChart, 2),
                Op::Create(Surface::BarChart, 3),
                Op::Destroy(Surface::BarChart, 3),
                Op::Create(Surface::BarChart, 4),
            ]
        );
        assert_eq!(renderer.backend().live_count(), 2);
        assert_eq!(renderer.pie_id(), Some(2));
        assert_eq!(renderer.bar_id(), Some(4));
    }

    #[test]
    fn test_refresh_is_idempotent() {
        let snapshot = AnalysisSnapshot::sample();
        let mut renderer = ChartRenderer::new(TerminalCharts::new());

        renderer.refresh_bar(&snapshot);
        let first = renderer.backend().live(Surface::BarChart).unwrap().config.clone();
        let first_lines = renderer.platform_lines().to_vec();

        renderer.refresh_bar(&snapshot);
        let second = renderer.backend().live(Surface::BarChart).unwrap();

        assert_eq!(first, second.config);
        assert_eq!(first_lines, renderer.platform_lines());
        assert_eq!(renderer.backend().live_count(), 1);
    }

    #[test]
    fn test_pie_updates_summary() {
        let mut renderer = ChartRenderer::new(TerminalCharts::new());
        assert_eq!(renderer.summary().total, 0);

        renderer.refresh_pie(&AnalysisSnapshot::sample());
        assert_eq!(renderer.summary().labels(), ["25 (50%)", "15 (30%)", "10 (20%)"]);

        let pie = renderer.backend().live(Surface::PieChart).unwrap();
        assert_eq!(pie.config.series.values, vec![25, 15, 10]);
        assert_eq!(pie.config.animation, None);
        assert_eq!(pie.progress(Instant::now()), 1.0);
    }

    #[test]
    fn test_platform_panel_replaced() {
        let mut snapshot = AnalysisSnapshot::sample();
        let mut renderer = ChartRenderer::new(TerminalCharts::new());
        renderer.refresh_bar(&snapshot);
        assert_eq!(
            renderer.platform_lines(),
            [
                "Twitter: 20%",
                "Facebook: 15%",
                "Instagram: 10%",
                "Reddit: 5%",
                "LinkedIn: 12%",
                "YouTube: 18%",
            ]
        );

        snapshot.platforms.truncate(2);
        renderer.refresh_bar(&snapshot);
        assert_eq!(renderer.platform_lines(), ["Twitter: 20%", "Facebook: 15%"]);
    }

    #[test]
    fn test_bar_config() {
        let config = ChartConfig::bar(&AnalysisSnapshot::sample());
        assert_eq!(config.kind, ChartKind::Bar);
        assert_eq!(config.labels.len(), 6);
        assert_eq!(config.series.values, vec![20, 15, 10, 5, 12, 18]);
        assert_eq!(config.y_bounds, Some([0.0, 100.0]));
        assert!(!config.show_legend);
        assert_eq!(config.series.color_at(4), COLOR_BAR);

        let animation = config.animation.unwrap();
        assert_eq!(animation.duration, Duration::from_millis(1500));
        assert_eq!(animation.easing, Easing::EaseInOutCubic);
    }

    #[test]
    fn test_release_leaves_nothing_live() {
        let snapshot = AnalysisSnapshot::sample();
        let mut renderer = ChartRenderer::new(RecordingBackend::default());
        renderer.release();
        assert!(renderer.backend().ops.is_empty());

        renderer.refresh_pie(&snapshot);
        renderer.refresh_bar(&snapshot);
        let backend = renderer.into_backend();
        assert_eq!(backend.live_count(), 0);
        assert_eq!(backend.ops.len(), 4);
    }

    #[test]
    fn test_stale_handle_ignored() {
        let snapshot = AnalysisSnapshot::sample();
        let mut charts = TerminalCharts::new();
        let first = charts.create(Surface::PieChart, ChartConfig::pie(&snapshot));
        charts.destroy(first);
        let _second = charts.create(Surface::PieChart, ChartConfig::pie(&snapshot));

        charts.destroy(ChartHandle::new(1, Surface::PieChart));
        assert_eq!(charts.live(Surface::PieChart).map(|c| c.id), Some(2));
    }

    #[test]
    fn test_easing() {
        let e = Easing::EaseInOutCubic;
        assert_eq!(e.apply(0.0), 0.0);
        assert_eq!(e.apply(0.5), 0.5);
        assert_eq!(e.apply(1.0), 1.0);
        assert_eq!(e.apply(2.0), 1.0);
        assert!(e.apply(0.25) < 0.25);
        assert!(e.apply(0.75) > 0.75);
        assert_eq!(Easing::Linear.apply(0.3), 0.3);
    }

    #[test]
    fn test_animation_progress() {
        let animation = Animation {
            duration: Duration::from_millis(1500),
            easing: Easing::Linear,
        };
        assert_eq!(animation.progress(Duration::ZERO), 0.0);
        assert_eq!(animation.progress(Duration::from_millis(750)), 0.5);
        assert_eq!(animation.progress(Duration::from_secs(5)), 1.0);

        let instant = Animation {
            duration: Duration::ZERO,
            easing: Easing::EaseInOutCubic,
        };
        assert_eq!(instant.progress(Duration::ZERO), 1.0);
    }
}
