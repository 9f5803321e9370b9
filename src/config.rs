use std::path::PathBuf;
use std::time::Duration;

use anyhow::{ensure, Result};
use clap::Parser;

use crate::scheduler::Schedule;

#[derive(Parser, Debug)]
#[command(name = "modwatch")]
#[command(about = "A TUI dashboard for simulated content-moderation statistics", long_about = None)]
pub struct Args {
    /// Milliseconds between log feed lines
    #[arg(long, default_value = "700")]
    pub log_period_ms: u64,

    /// Milliseconds between bar chart rebuilds
    #[arg(long, default_value = "7000")]
    pub bar_period_ms: u64,

    /// Also rebuild the pie chart on this period (default: once at startup)
    #[arg(long)]
    pub pie_period_ms: Option<u64>,

    /// Write tracing output to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub schedule: Schedule,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        ensure!(args.log_period_ms > 0, "--log-period-ms must be greater than zero");
        ensure!(args.bar_period_ms > 0, "--bar-period-ms must be greater than zero");
        if let Some(pie) = args.pie_period_ms {
            ensure!(pie > 0, "--pie-period-ms must be greater than zero");
        }

        Ok(Self {
            schedule: Schedule::new(
                Duration::from_millis(args.log_period_ms),
                Duration::from_millis(args.bar_period_ms),
                args.pie_period_ms.map(Duration::from_millis),
            ),
            log_file: args.log_file,
        })
    }
}
