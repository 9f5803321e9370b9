use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Work requested by a timer firing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    AppendLog,
    RefreshBar,
    RefreshPie,
}

/// A tick fired every `period`. The first firing is one period after spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Task {
    pub tick: Tick,
    pub period: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub tasks: Vec<Task>,
}

impl Schedule {
    /// Log feed and bar chart on their own periods. The pie only refreshes
    /// periodically when `pie_period` is set.
    pub fn new(log_period: Duration, bar_period: Duration, pie_period: Option<Duration>) -> Self {
        let mut tasks = vec![
            Task {
                tick: Tick::AppendLog,
                period: log_period,
            },
            Task {
                tick: Tick::RefreshBar,
                period: bar_period,
            },
        ];
        if let Some(period) = pie_period {
            tasks.push(Task {
                tick: Tick::RefreshPie,
                period,
            });
        }
        Self { tasks }
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self::new(Duration::from_millis(700), Duration::from_millis(7000), None)
    }
}

/// Runs one timer task per scheduled tick. All ticks land on a single
/// channel so the receiver applies them one at a time. Dropping the
/// scheduler cancels every timer.
pub struct Scheduler {
    tasks: Vec<JoinHandle<()>>,
}

impl Scheduler {
    pub fn spawn(schedule: &Schedule) -> (Self, mpsc::Receiver<Tick>) {
        let (tx, rx) = mpsc::channel(64);

        let tasks = schedule
            .tasks
            .iter()
            .map(|task| {
                let tx = tx.clone();
                let Task { tick, period } = *task;
                tokio::spawn(async move {
                    let mut interval = tokio::time::interval_at(Instant::now() + period, period);
                    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                    loop {
                        interval.tick().await;
                        if tx.send(tick).await.is_err() {
                            break;
                        }
                    }
                })
            })
            .collect();

        tracing::debug!(tasks = schedule.tasks.len(), "scheduler started");
        (Self { tasks }, rx)
    }

    pub fn stop(&self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
