use std::collections::VecDeque;

use anyhow::{ensure, Result};

/// Rolling window of log lines cycled from a fixed sample sequence.
///
/// The window never holds more lines than the sequence has, and every
/// append snaps the scroll position back to the newest line.
#[derive(Debug)]
pub struct LogFeed {
    source: Vec<&'static str>,
    lines: VecDeque<&'static str>,
    index: usize,
    scroll: usize,
}

impl LogFeed {
    pub fn new(source: &[&'static str]) -> Result<Self> {
        ensure!(!source.is_empty(), "log feed needs at least one sample line");
        Ok(Self {
            source: source.to_vec(),
            lines: VecDeque::with_capacity(source.len() + 1),
            index: 0,
            scroll: 0,
        })
    }

    pub fn append(&mut self) {
        let line = self.source[self.index % self.source.len()];
        self.index += 1;

        self.lines.push_back(line);
        if self.lines.len() > self.source.len() {
            self.lines.pop_front();
        }

        self.scroll = self.lines.len();
    }

    pub fn lines(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.lines.iter().copied()
    }

    pub fn latest(&self) -> Option<&'static str> {
        self.lines.back().copied()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.source.len()
    }

    /// Total lines appended since creation
    pub fn appended(&self) -> usize {
        self.index
    }

    /// Bottom edge of the view, in lines. The renderer clamps this to the
    /// viewport height.
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn scroll_up(&mut self) {
        // Keep at least one line in view
        let floor = if self.lines.is_empty() { 0 } else { 1 };
        self.scroll = self.scroll.saturating_sub(1).max(floor);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = (self.scroll + 1).min(self.lines.len());
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.lines.len();
    }

    /// First visible line for a viewport `height` lines tall
    pub fn view_offset(&self, height: usize) -> usize {
        self.scroll.saturating_sub(height)
    }
}
